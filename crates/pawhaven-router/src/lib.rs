//! Hash-fragment routing with role-gated access.
//!
//! The fragment portion of the URL (`#/path?key=value`) is the sole
//! addressable application state. [`Fragment`] parses it, [`RouteTable`]
//! maps exact paths to pages with an access policy, and [`HashRouter`]
//! resolves a fragment change to either a page render or a redirect,
//! evaluating the role guard before any protected page is produced.
//!
//! ```
//! use std::sync::Arc;
//! use pawhaven_auth::{SessionProvider, store::InMemoryStore};
//! use pawhaven_router::{HashRouter, Resolution, RouteTable};
//!
//! let sessions = Arc::new(SessionProvider::new(Arc::new(InMemoryStore::new())));
//! let router = HashRouter::new(RouteTable::platform(), sessions);
//!
//! // Signed out, so the protected pets screen redirects to sign-in.
//! assert_eq!(
//!     router.resolve("#/pets"),
//!     Resolution::Redirect("/login".to_string()),
//! );
//! ```

mod fragment;
mod navigator;
mod router;
mod table;

pub use fragment::{Fragment, entry_rewrite};
pub use navigator::{MemoryNavigator, NavigationSurface, navigate};
pub use router::{HashRouter, Resolution};
pub use table::{AccessPolicy, PageId, RouteEntry, RouteTable};

#[cfg(target_arch = "wasm32")]
pub use navigator::{BrowserNavigator, on_fragment_change};
