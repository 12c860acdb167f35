//! End-to-end navigation flows across the session provider, guard and
//! router.

use std::sync::Arc;

use pawhaven_auth::store::InMemoryStore;
use pawhaven_auth::{SessionProvider, SessionReader};
use pawhaven_router::{
	HashRouter, MemoryNavigator, NavigationSurface, PageId, Resolution, RouteTable, entry_rewrite,
	navigate,
};
use pawhaven_types::{AuthResponse, Role};

fn auth_response(role: Role) -> AuthResponse {
	AuthResponse {
		token: "tok-1".into(),
		token_type: "Bearer".into(),
		id: 7,
		username: "casey".into(),
		email: "casey@pawhaven.io".into(),
		role,
		requires_two_factor: false,
	}
}

/// Drives the navigator/router pair the way the shell does: resolve,
/// apply redirects with `replace`, and report the finally rendered
/// page.
fn settle(router: &HashRouter, navigator: &MemoryNavigator) -> PageId {
	let mut fragment = navigator.fragment();
	for _ in 0..4 {
		match router.resolve(&fragment) {
			Resolution::Redirect(target) => {
				navigator.replace(&target);
				fragment = target;
			}
			Resolution::Render { page, .. } => return page,
		}
	}
	panic!("routing did not settle from {fragment}");
}

#[test]
fn test_sign_in_unlocks_protected_screens() {
	let sessions = Arc::new(SessionProvider::new(Arc::new(InMemoryStore::new())));
	let router = HashRouter::new(RouteTable::platform(), sessions.clone());
	let navigator = MemoryNavigator::new();

	navigate(&navigator, "/pets");
	assert_eq!(settle(&router, &navigator), PageId::Login);
	assert_eq!(navigator.fragment(), "/login");

	sessions.login(&auth_response(Role::User));
	navigate(&navigator, "/pets");
	assert_eq!(settle(&router, &navigator), PageId::Pets);
}

#[test]
fn test_logout_locks_screens_again() {
	let sessions = Arc::new(SessionProvider::new(Arc::new(InMemoryStore::new())));
	let router = HashRouter::new(RouteTable::platform(), sessions.clone());
	let navigator = MemoryNavigator::new();

	sessions.login(&auth_response(Role::Admin));
	navigate(&navigator, "/dashboard");
	assert_eq!(settle(&router, &navigator), PageId::Dashboard);

	sessions.logout();
	navigate(&navigator, "/dashboard");
	assert_eq!(settle(&router, &navigator), PageId::Login);
}

#[test]
fn test_role_denial_keeps_session_and_lands_on_pets() {
	let sessions = Arc::new(SessionProvider::new(Arc::new(InMemoryStore::new())));
	let router = HashRouter::new(RouteTable::platform(), sessions.clone());
	let navigator = MemoryNavigator::new();

	sessions.login(&auth_response(Role::Veterinarian));
	navigate(&navigator, "/breeds");
	assert_eq!(settle(&router, &navigator), PageId::Pets);
	assert_eq!(navigator.fragment(), "/pets");
	assert!(sessions.is_authenticated());
}

#[test]
fn test_password_reset_email_entry() {
	// The email link opens a plain path with the token in the query;
	// the entry rewrite folds it into the fragment before resolution.
	let fragment = entry_rewrite("/reset-password", "?token=tok-9").expect("rewrite");
	let navigator = MemoryNavigator::starting_at(&fragment);

	let sessions = Arc::new(SessionProvider::new(Arc::new(InMemoryStore::new())));
	let router = HashRouter::new(RouteTable::platform(), sessions);

	match router.resolve(&navigator.fragment()) {
		Resolution::Render { page, route } => {
			assert_eq!(page, PageId::ResetPassword);
			assert_eq!(route.get("token"), Some("tok-9"));
		}
		other => panic!("expected reset page, got {other:?}"),
	}
}

#[test]
fn test_session_survives_reload_and_still_routes() {
	let store = Arc::new(InMemoryStore::new());
	SessionProvider::new(store.clone()).login(&auth_response(Role::Shelter));

	// New provider over the same store models a fresh page load.
	let sessions = Arc::new(SessionProvider::new(store));
	let router = HashRouter::new(RouteTable::platform(), sessions.clone());
	let navigator = MemoryNavigator::starting_at("/shelters");

	assert_eq!(settle(&router, &navigator), PageId::Shelters);
	assert_eq!(sessions.current_session().unwrap().role, Role::Shelter);
}
