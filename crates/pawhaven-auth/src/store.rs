//! Flat key-value persistence for the session record.

use parking_lot::RwLock;
use std::collections::HashMap;

/// String key-value store backing session persistence.
///
/// The session layer only ever reads and writes whole string values;
/// serialization of structured records happens above this seam.
pub trait KeyValueStore: Send + Sync {
	/// Returns the value stored under `key`, if any.
	fn get(&self, key: &str) -> Option<String>;

	/// Stores `value` under `key`, replacing any previous value.
	fn set(&self, key: &str, value: &str);

	/// Removes the value stored under `key`, if any.
	fn remove(&self, key: &str);
}

/// In-memory store used natively and in tests.
///
/// # Examples
///
/// ```
/// use pawhaven_auth::store::{InMemoryStore, KeyValueStore};
///
/// let store = InMemoryStore::new();
/// store.set("token", "abc");
/// assert_eq!(store.get("token").as_deref(), Some("abc"));
///
/// store.remove("token");
/// assert_eq!(store.get("token"), None);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
	values: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}
}

impl KeyValueStore for InMemoryStore {
	fn get(&self, key: &str) -> Option<String> {
		self.values.read().get(key).cloned()
	}

	fn set(&self, key: &str, value: &str) {
		self.values.write().insert(key.to_string(), value.to_string());
	}

	fn remove(&self, key: &str) {
		self.values.write().remove(key);
	}
}

/// Browser localStorage-backed store.
///
/// Storage failures (quota, privacy mode) are swallowed: losing
/// persistence degrades to a per-load session, which the screens
/// already tolerate.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
	/// Creates a handle over `window.localStorage`.
	pub fn new() -> Self {
		Self
	}

	fn storage() -> Option<web_sys::Storage> {
		web_sys::window().and_then(|w| w.local_storage().ok().flatten())
	}
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorageStore {
	fn get(&self, key: &str) -> Option<String> {
		Self::storage().and_then(|s| s.get_item(key).ok().flatten())
	}

	fn set(&self, key: &str, value: &str) {
		if let Some(s) = Self::storage() {
			let _ = s.set_item(key, value);
		}
	}

	fn remove(&self, key: &str) {
		if let Some(s) = Self::storage() {
			let _ = s.remove_item(key);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_set_overwrites_previous_value() {
		let store = InMemoryStore::new();
		store.set("user", "first");
		store.set("user", "second");
		assert_eq!(store.get("user").as_deref(), Some("second"));
	}

	#[test]
	fn test_remove_missing_key_is_a_no_op() {
		let store = InMemoryStore::new();
		store.remove("absent");
		assert_eq!(store.get("absent"), None);
	}
}
