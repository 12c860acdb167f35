//! Fragment-to-page resolution.

use crate::fragment::Fragment;
use crate::table::{AccessPolicy, PageId, RouteTable};
use pawhaven_auth::{Access, LOGIN_ROUTE, SessionReader, authorize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of resolving a fragment change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
	/// Render the page with the parsed route as its input.
	Render { page: PageId, route: Fragment },
	/// Assign this fragment instead; the resulting change event
	/// resolves the effective page.
	Redirect(String),
}

/// Maps location fragments to pages, enforcing access on the way.
///
/// Resolution is a pure function of the fragment and the current
/// session: the router keeps no transition state, so re-resolving the
/// same fragment is trivially idempotent, and it performs no I/O.
/// Processing is event-driven and serial; the environment delivers one
/// fragment change at a time.
pub struct HashRouter {
	table: RouteTable,
	sessions: Arc<dyn SessionReader>,
}

impl HashRouter {
	/// Creates a router over `table` reading session state through
	/// `sessions`.
	pub fn new(table: RouteTable, sessions: Arc<dyn SessionReader>) -> Self {
		Self { table, sessions }
	}

	/// Resolves a raw fragment string to a page or a redirect.
	///
	/// Unmatched paths render the not-found page rather than erroring,
	/// and denied access resolves to a redirect, so every input has a
	/// well-defined outcome.
	pub fn resolve(&self, raw_fragment: &str) -> Resolution {
		let route = Fragment::parse(raw_fragment);

		// The reset form is unusable without its emailed token; send
		// tokenless visits back to sign-in before any other handling.
		if route.path() == "/reset-password" && route.get("token").is_none() {
			warn!("reset-password visited without token");
			return Resolution::Redirect(LOGIN_ROUTE.to_string());
		}

		let Some(entry) = self.table.lookup(route.path()) else {
			debug!(path = %route.path(), "no route matched");
			return Resolution::Render {
				page: PageId::NotFound,
				route,
			};
		};

		let access = match entry.policy {
			AccessPolicy::Public => Access::Granted,
			AccessPolicy::Authenticated => {
				authorize(self.sessions.current_session().as_ref(), None)
			}
			AccessPolicy::Roles(roles) => {
				authorize(self.sessions.current_session().as_ref(), Some(roles))
			}
		};

		match access {
			Access::Granted => {
				debug!(path = %route.path(), page = ?entry.page, "route resolved");
				Resolution::Render {
					page: entry.page,
					route,
				}
			}
			Access::Denied { redirect } => {
				warn!(path = %route.path(), %redirect, "access denied");
				Resolution::Redirect(redirect.to_string())
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pawhaven_auth::session::Session;
	use pawhaven_auth::{DEFAULT_LANDING_ROUTE, SessionReader};
	use pawhaven_types::Role;

	struct FixedSession(Option<Session>);

	impl SessionReader for FixedSession {
		fn current_session(&self) -> Option<Session> {
			self.0.clone()
		}
	}

	fn router_with(session: Option<Role>) -> HashRouter {
		let session = session.map(|role| Session {
			user_id: 1,
			username: "casey".into(),
			role,
			token: "tok".into(),
		});
		HashRouter::new(RouteTable::platform(), Arc::new(FixedSession(session)))
	}

	fn rendered_page(resolution: Resolution) -> PageId {
		match resolution {
			Resolution::Render { page, .. } => page,
			Resolution::Redirect(target) => panic!("unexpected redirect to {target}"),
		}
	}

	#[test]
	fn test_public_routes_render_without_session() {
		let router = router_with(None);
		assert_eq!(rendered_page(router.resolve("#/")), PageId::Home);
		assert_eq!(rendered_page(router.resolve("#/login")), PageId::Login);
		assert_eq!(rendered_page(router.resolve("#/register")), PageId::Register);
	}

	#[test]
	fn test_protected_route_redirects_unauthenticated_to_login() {
		let router = router_with(None);
		assert_eq!(
			router.resolve("#/pets"),
			Resolution::Redirect(LOGIN_ROUTE.to_string())
		);
	}

	#[test]
	fn test_insufficient_role_redirects_to_landing() {
		let router = router_with(Some(Role::User));
		assert_eq!(
			router.resolve("#/categories"),
			Resolution::Redirect(DEFAULT_LANDING_ROUTE.to_string())
		);
	}

	#[test]
	fn test_admin_reaches_restricted_screens() {
		let router = router_with(Some(Role::Admin));
		assert_eq!(rendered_page(router.resolve("#/categories")), PageId::Categories);
		assert_eq!(rendered_page(router.resolve("#/dashboard")), PageId::Dashboard);
		assert_eq!(rendered_page(router.resolve("#/veterinarians")), PageId::Veterinarians);
	}

	#[test]
	fn test_shelter_role_mix() {
		let router = router_with(Some(Role::Shelter));
		assert_eq!(rendered_page(router.resolve("#/shelters")), PageId::Shelters);
		assert_eq!(rendered_page(router.resolve("#/adoptions")), PageId::Adoptions);
		assert_eq!(
			router.resolve("#/breeds"),
			Resolution::Redirect(DEFAULT_LANDING_ROUTE.to_string())
		);
	}

	#[test]
	fn test_unknown_path_renders_not_found_regardless_of_session() {
		for router in [router_with(None), router_with(Some(Role::Admin))] {
			assert_eq!(
				rendered_page(router.resolve("#/unknown-path")),
				PageId::NotFound
			);
		}
	}

	#[test]
	fn test_reset_password_without_token_redirects_to_login() {
		let router = router_with(None);
		assert_eq!(
			router.resolve("#/reset-password"),
			Resolution::Redirect(LOGIN_ROUTE.to_string())
		);
		// With a token the page renders, even unauthenticated.
		match router.resolve("#/reset-password?token=abc") {
			Resolution::Render { page, route } => {
				assert_eq!(page, PageId::ResetPassword);
				assert_eq!(route.get("token"), Some("abc"));
			}
			other => panic!("expected render, got {other:?}"),
		}
	}

	#[test]
	fn test_resolution_is_idempotent() {
		let router = router_with(Some(Role::Admin));
		assert_eq!(router.resolve("#/pets?page=2"), router.resolve("#/pets?page=2"));
	}
}
