//! Display formatting helpers.

use chrono::{DateTime, Utc};

/// Formats a timestamp as e.g. `May 1, 2024`.
pub fn format_date(value: &DateTime<Utc>) -> String {
	value.format("%b %-d, %Y").to_string()
}

/// Formats a timestamp as e.g. `May 1, 2024 14:30`.
pub fn format_date_time(value: &DateTime<Utc>) -> String {
	value.format("%b %-d, %Y %H:%M").to_string()
}

/// Truncates to `max` characters, appending `...` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
	if text.chars().count() <= max {
		text.to_string()
	} else {
		let cut: String = text.chars().take(max).collect();
		format!("{cut}...")
	}
}
