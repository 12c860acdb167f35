//! Session lifecycle and the provider that owns it.

use crate::store::KeyValueStore;
use parking_lot::RwLock;
use pawhaven_types::{AuthResponse, Role};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Store key holding the bearer token.
pub const STORAGE_KEY_TOKEN: &str = "token";

/// Store key holding the serialized user record.
pub const STORAGE_KEY_USER: &str = "user";

/// The authenticated user's session record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
	pub user_id: i64,
	pub username: String,
	pub role: Role,
	pub token: String,
}

impl Session {
	/// Builds a session from a completed sign-in response.
	pub fn from_auth(auth: &AuthResponse) -> Self {
		Self {
			user_id: auth.id,
			username: auth.username.clone(),
			role: auth.role,
			token: auth.token.clone(),
		}
	}
}

/// Read-only view of the current session.
///
/// The router and pages depend on this trait rather than on
/// [`SessionProvider`] so they cannot reach the mutation surface.
pub trait SessionReader: Send + Sync {
	/// The current session, or `None` when signed out.
	fn current_session(&self) -> Option<Session>;

	/// True when a session exists.
	fn is_authenticated(&self) -> bool {
		self.current_session().is_some()
	}
}

/// Owns the session and its persistence.
///
/// Created once at startup; restores any persisted session from the
/// store. All reads go through [`SessionReader`]; `login` and `logout`
/// are the only mutations.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use pawhaven_auth::session::{SessionProvider, SessionReader};
/// use pawhaven_auth::store::InMemoryStore;
///
/// let provider = SessionProvider::new(Arc::new(InMemoryStore::new()));
/// assert!(!provider.is_authenticated());
/// ```
pub struct SessionProvider {
	store: Arc<dyn KeyValueStore>,
	current: RwLock<Option<Session>>,
}

impl SessionProvider {
	/// Creates a provider over `store`, restoring a persisted session
	/// when one is present.
	///
	/// A corrupt persisted record is discarded rather than surfaced:
	/// the user simply starts signed out.
	pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
		let current = Self::restore(store.as_ref());
		Self {
			store,
			current: RwLock::new(current),
		}
	}

	/// Establishes a session from a completed sign-in and persists it.
	///
	/// Responses still awaiting 2FA verification must not be passed
	/// here; the caller completes verification first.
	pub fn login(&self, auth: &AuthResponse) -> Session {
		let session = Session::from_auth(auth);
		self.store.set(STORAGE_KEY_TOKEN, &session.token);
		if let Ok(record) = serde_json::to_string(&session) {
			self.store.set(STORAGE_KEY_USER, &record);
		}
		debug!(username = %session.username, role = %session.role, "session established");
		*self.current.write() = Some(session.clone());
		session
	}

	/// Destroys the session and its persisted record.
	///
	/// Also invoked when the API reports the token invalid (401), so a
	/// stale session never outlives its authorization.
	pub fn logout(&self) {
		let had_session = self.current.write().take().is_some();
		self.store.remove(STORAGE_KEY_TOKEN);
		self.store.remove(STORAGE_KEY_USER);
		if had_session {
			debug!("session destroyed");
		}
	}

	/// The bearer token of the current session, if any.
	pub fn token(&self) -> Option<String> {
		self.current.read().as_ref().map(|s| s.token.clone())
	}

	fn restore(store: &dyn KeyValueStore) -> Option<Session> {
		let record = store.get(STORAGE_KEY_USER)?;
		match serde_json::from_str::<Session>(&record) {
			Ok(session) => {
				debug!(username = %session.username, "session restored");
				Some(session)
			}
			Err(err) => {
				warn!(%err, "discarding corrupt session record");
				store.remove(STORAGE_KEY_TOKEN);
				store.remove(STORAGE_KEY_USER);
				None
			}
		}
	}
}

impl SessionReader for SessionProvider {
	fn current_session(&self) -> Option<Session> {
		self.current.read().clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::store::InMemoryStore;

	fn auth_response(role: Role) -> AuthResponse {
		AuthResponse {
			token: "tok-123".into(),
			token_type: "Bearer".into(),
			id: 42,
			username: "casey".into(),
			email: "casey@pawhaven.io".into(),
			role,
			requires_two_factor: false,
		}
	}

	#[test]
	fn test_login_persists_and_exposes_session() {
		let store = Arc::new(InMemoryStore::new());
		let provider = SessionProvider::new(store.clone());

		let session = provider.login(&auth_response(Role::Admin));
		assert_eq!(session.user_id, 42);
		assert_eq!(provider.token().as_deref(), Some("tok-123"));
		assert_eq!(store.get(STORAGE_KEY_TOKEN).as_deref(), Some("tok-123"));
		assert!(store.get(STORAGE_KEY_USER).is_some());
	}

	#[test]
	fn test_logout_clears_store_and_state() {
		let store = Arc::new(InMemoryStore::new());
		let provider = SessionProvider::new(store.clone());
		provider.login(&auth_response(Role::User));

		provider.logout();
		assert!(!provider.is_authenticated());
		assert_eq!(store.get(STORAGE_KEY_TOKEN), None);
		assert_eq!(store.get(STORAGE_KEY_USER), None);
	}

	#[test]
	fn test_session_survives_reload_through_store() {
		let store = Arc::new(InMemoryStore::new());
		SessionProvider::new(store.clone()).login(&auth_response(Role::Shelter));

		// A fresh provider over the same store models a page reload.
		let restored = SessionProvider::new(store);
		let session = restored.current_session().unwrap();
		assert_eq!(session.username, "casey");
		assert_eq!(session.role, Role::Shelter);
	}

	#[test]
	fn test_corrupt_record_is_discarded() {
		let store = Arc::new(InMemoryStore::new());
		store.set(STORAGE_KEY_USER, "not json");
		store.set(STORAGE_KEY_TOKEN, "stale");

		let provider = SessionProvider::new(store.clone());
		assert!(!provider.is_authenticated());
		assert_eq!(store.get(STORAGE_KEY_TOKEN), None);
	}
}
