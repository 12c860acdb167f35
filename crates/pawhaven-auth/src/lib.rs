//! Session state, token storage and role-based access checks.
//!
//! The session is owned by [`SessionProvider`]: pages and the router
//! read it through the narrow [`SessionReader`] interface, while the
//! `login`/`logout` mutations stay confined to the provider itself.
//! Persistence goes through the flat [`KeyValueStore`] abstraction:
//! browser localStorage on wasm32, an in-memory map natively.

pub mod guard;
pub mod session;
pub mod store;

pub use guard::{Access, DEFAULT_LANDING_ROUTE, LOGIN_ROUTE, authorize};
pub use session::{STORAGE_KEY_TOKEN, STORAGE_KEY_USER, Session, SessionProvider, SessionReader};
pub use store::{InMemoryStore, KeyValueStore};

#[cfg(target_arch = "wasm32")]
pub use store::LocalStorageStore;
