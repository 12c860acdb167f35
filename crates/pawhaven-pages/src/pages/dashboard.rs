//! The admin dashboard.

use crate::view::{Component, ElementView, IntoView, View};
use pawhaven_api::{ApiError, Services};
use pawhaven_types::DashboardStats;

/// Aggregate platform counters, admin-only.
pub struct DashboardPage {
	stats: DashboardStats,
}

impl DashboardPage {
	pub async fn load(services: &Services) -> Result<Self, ApiError> {
		Ok(Self::from_stats(services.stats.fetch().await?))
	}

	pub fn from_stats(stats: DashboardStats) -> Self {
		Self { stats }
	}
}

impl Component for DashboardPage {
	fn render(&self) -> View {
		let tiles = [
			("Total pets", self.stats.total_pets),
			("Available pets", self.stats.available_pets),
			("Adopted pets", self.stats.adopted_pets),
			("Adoptions", self.stats.total_adoptions),
			("Pending adoptions", self.stats.pending_adoptions),
			("Shelters", self.stats.total_shelters),
			("Users", self.stats.total_users),
			("Categories", self.stats.total_categories),
			("Breeds", self.stats.total_breeds),
		];

		ElementView::new("section")
			.attr("class", "dashboard-page")
			.child(ElementView::new("h1").child("Dashboard"))
			.child(
				ElementView::new("div").attr("class", "stat-grid").children(
					tiles
						.iter()
						.map(|(label, value)| stat_tile(label, *value))
						.collect(),
				),
			)
			.into_view()
	}

	fn name() -> &'static str {
		"DashboardPage"
	}
}

fn stat_tile(label: &str, value: u64) -> View {
	ElementView::new("div")
		.attr("class", "stat")
		.child(
			ElementView::new("span")
				.attr("class", "stat-value")
				.child(value.to_string()),
		)
		.child(
			ElementView::new("span")
				.attr("class", "stat-label")
				.child(label),
		)
		.into_view()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tiles_show_counter_values() {
		let page = DashboardPage::from_stats(DashboardStats {
			total_pets: 42,
			pending_adoptions: 7,
			..Default::default()
		});
		let html = page.render().render_to_string();
		assert!(html.contains("Total pets"));
		assert!(html.contains("42"));
		assert!(html.contains("Pending adoptions"));
	}
}
