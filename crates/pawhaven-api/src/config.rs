//! Client configuration.

/// Configuration for the API client.
///
/// The front end is served alongside the API, so the default base URL
/// is the same-origin `/api` prefix; deployments pointing elsewhere
/// construct the config explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
	/// Base URL every endpoint path is joined onto.
	pub base_url: String,
}

impl ApiConfig {
	/// Creates a config with an explicit base URL.
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
		}
	}
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self {
			base_url: "/api".to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_targets_same_origin_api() {
		assert_eq!(ApiConfig::default().base_url, "/api");
	}
}
