//! # Pawhaven Admin
//!
//! The administrative front end for the Pawhaven pet-adoption
//! platform: role-gated list screens for pets, breeds, categories,
//! shelters, veterinarians and adoption requests over the platform's
//! REST API, driven by a hash-fragment router.
//!
//! The crate is a facade over the workspace members:
//!
//! - [`types`] - the shared entity model (wire shapes of the REST API)
//! - [`pagination`] - the in-memory list paginator and page-window
//!   selection
//! - [`auth`] - session state, token storage and the role guard
//! - [`router`] - fragment parsing, the route table and the hash
//!   router
//! - [`api`] - the typed REST client and per-resource services
//! - [`pages`] - page components and the application shell
//!
//! ## Quick Example
//!
//! ```
//! use std::sync::Arc;
//! use pawhaven::auth::{SessionProvider, store::InMemoryStore};
//! use pawhaven::router::{HashRouter, Resolution, RouteTable};
//!
//! let sessions = Arc::new(SessionProvider::new(Arc::new(InMemoryStore::new())));
//! let router = HashRouter::new(RouteTable::platform(), sessions);
//!
//! // No session yet: protected screens resolve to a sign-in redirect.
//! assert_eq!(
//!     router.resolve("#/adoptions"),
//!     Resolution::Redirect("/login".to_string()),
//! );
//! ```
//!
//! On wasm32 the shell is mounted with `pages::boot::mount("app")`,
//! which re-renders on every hashchange and folds pagination clicks
//! back into the fragment.

pub use pawhaven_api as api;
pub use pawhaven_auth as auth;
pub use pawhaven_pages as pages;
pub use pawhaven_pagination as pagination;
pub use pawhaven_router as router;
pub use pawhaven_types as types;

// Commonly used items at the crate root.
pub use pawhaven_api::{ApiClient, ApiConfig, ApiError, Services};
pub use pawhaven_auth::{Access, Session, SessionProvider, SessionReader, authorize};
pub use pawhaven_pages::App;
pub use pawhaven_pagination::{PagedView, Paginator, page_window};
pub use pawhaven_router::{Fragment, HashRouter, PageId, Resolution, RouteTable};
pub use pawhaven_types::Role;
