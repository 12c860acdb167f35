//! Fragment parsing.
//!
//! The fragment portion of the URL (`#/path?key=value`) is the only
//! addressable application state. Parsing is pure and total: malformed
//! input degrades to the root path or an empty query, never an error.

use std::collections::BTreeMap;
use tracing::warn;

/// A parsed location fragment: path plus query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
	path: String,
	query: BTreeMap<String, String>,
}

impl Fragment {
	/// Parses a raw fragment string.
	///
	/// A leading `#` is accepted and ignored. An empty fragment maps to
	/// the root path, and a missing leading slash is supplied. Duplicate
	/// query keys keep the last value.
	///
	/// # Examples
	///
	/// ```
	/// use pawhaven_router::Fragment;
	///
	/// let frag = Fragment::parse("#/reset-password?token=abc");
	/// assert_eq!(frag.path(), "/reset-password");
	/// assert_eq!(frag.get("token"), Some("abc"));
	///
	/// assert_eq!(Fragment::parse("").path(), "/");
	/// ```
	pub fn parse(raw: &str) -> Self {
		let raw = raw.strip_prefix('#').unwrap_or(raw);
		let (path, query_str) = match raw.split_once('?') {
			Some((p, q)) => (p, Some(q)),
			None => (raw, None),
		};

		let path = if path.is_empty() {
			"/".to_string()
		} else if path.starts_with('/') {
			path.to_string()
		} else {
			format!("/{path}")
		};

		let query = query_str
			.filter(|q| !q.is_empty())
			.map(|q| match serde_urlencoded::from_str::<Vec<(String, String)>>(q) {
				Ok(pairs) => pairs.into_iter().collect(),
				Err(err) => {
					warn!(%err, query = %q, "ignoring unparseable query string");
					BTreeMap::new()
				}
			})
			.unwrap_or_default();

		Self { path, query }
	}

	/// The path portion, always starting with `/`.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Looks up a query parameter.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.query.get(key).map(String::as_str)
	}

	/// All query parameters, ordered by key.
	pub fn query(&self) -> &BTreeMap<String, String> {
		&self.query
	}

	/// Returns a copy with `key` set to `value` in the query.
	///
	/// Used by the shell to fold UI state (page number, page size,
	/// filters) into the fragment, which is then assigned as the new
	/// location.
	pub fn with_param(&self, key: &str, value: &str) -> Self {
		let mut next = self.clone();
		next.query.insert(key.to_string(), value.to_string());
		next
	}

	/// Serializes back to a fragment string without the leading `#`.
	pub fn to_fragment_string(&self) -> String {
		if self.query.is_empty() {
			self.path.clone()
		} else {
			let pairs: Vec<(&str, &str)> = self
				.query
				.iter()
				.map(|(k, v)| (k.as_str(), v.as_str()))
				.collect();
			match serde_urlencoded::to_string(&pairs) {
				Ok(encoded) => format!("{}?{}", self.path, encoded),
				Err(_) => self.path.clone(),
			}
		}
	}
}

/// Computes the one-time entry rewrite for plain-path loads.
///
/// When the application is opened through a plain path carrying query
/// parameters (the password-reset email link), the location must be
/// rewritten into fragment form before any route is evaluated, so the
/// query survives as fragment state. Returns the fragment to assign, or
/// `None` when no rewrite is needed.
///
/// # Examples
///
/// ```
/// use pawhaven_router::entry_rewrite;
///
/// assert_eq!(
///     entry_rewrite("/reset-password", "?token=abc").as_deref(),
///     Some("/reset-password?token=abc"),
/// );
/// assert_eq!(entry_rewrite("/pets", ""), None);
/// ```
pub fn entry_rewrite(path: &str, search: &str) -> Option<String> {
	let search = search.strip_prefix('?').unwrap_or(search);
	if search.is_empty() {
		return None;
	}
	let path = if path.is_empty() { "/" } else { path };
	Some(format!("{path}?{search}"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("", "/")]
	#[case("#", "/")]
	#[case("/", "/")]
	#[case("#/pets", "/pets")]
	#[case("pets", "/pets")]
	#[case("/pets?status=ACTIVE", "/pets")]
	fn test_parse_normalizes_path(#[case] raw: &str, #[case] path: &str) {
		assert_eq!(Fragment::parse(raw).path(), path);
	}

	#[test]
	fn test_parse_decodes_query_values() {
		let frag = Fragment::parse("/pets?search=long%20hair&status=ACTIVE");
		assert_eq!(frag.get("search"), Some("long hair"));
		assert_eq!(frag.get("status"), Some("ACTIVE"));
		assert_eq!(frag.get("missing"), None);
	}

	#[test]
	fn test_parse_keeps_last_duplicate_key() {
		let frag = Fragment::parse("/pets?page=1&page=3");
		assert_eq!(frag.get("page"), Some("3"));
	}

	#[test]
	fn test_round_trip_preserves_query() {
		let frag = Fragment::parse("/reset-password?token=a%2Fb");
		let rendered = frag.to_fragment_string();
		assert_eq!(Fragment::parse(&rendered), frag);
	}

	#[test]
	fn test_with_param_sets_and_replaces() {
		let frag = Fragment::parse("/pets?page=2");
		let next = frag.with_param("page", "3").with_param("status", "ACTIVE");
		assert_eq!(next.get("page"), Some("3"));
		assert_eq!(next.to_fragment_string(), "/pets?page=3&status=ACTIVE");
		// The original is untouched.
		assert_eq!(frag.get("page"), Some("2"));
	}

	#[test]
	fn test_entry_rewrite_requires_query() {
		assert_eq!(entry_rewrite("/reset-password", ""), None);
		assert_eq!(entry_rewrite("/reset-password", "?"), None);
		assert_eq!(
			entry_rewrite("", "?token=x").as_deref(),
			Some("/?token=x")
		);
	}
}
