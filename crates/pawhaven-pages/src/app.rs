//! The application shell: wires session, services and router, and
//! turns the current fragment into a rendered view.

use crate::layout::layout;
use crate::pages::{
	AdoptionsPage, BreedsPage, CategoriesPage, DashboardPage, ForgotPasswordPage, HomePage,
	LoginPage, NotFoundPage, PetsPage, RegisterPage, ResetPasswordPage, SheltersPage,
	VeterinariansPage,
};
use crate::view::{Component, ElementView, IntoView, View};
use pawhaven_api::{ApiClient, ApiConfig, ApiError, Services};
use pawhaven_auth::{KeyValueStore, SessionProvider, SessionReader};
use pawhaven_router::{
	Fragment, HashRouter, NavigationSurface, PageId, Resolution, RouteTable,
};
use std::sync::Arc;
use tracing::warn;

/// Everything one browser tab needs: one session provider, one API
/// client, one router over the platform route table.
pub struct App {
	sessions: Arc<SessionProvider>,
	navigator: Arc<dyn NavigationSurface>,
	router: HashRouter,
	services: Services,
}

impl App {
	/// Wires the shell over a key-value store and a navigation surface.
	pub fn new(
		config: ApiConfig,
		store: Arc<dyn KeyValueStore>,
		navigator: Arc<dyn NavigationSurface>,
	) -> Self {
		let sessions = Arc::new(SessionProvider::new(store));
		let client = Arc::new(ApiClient::new(&config, sessions.clone()));
		let services = Services::new(client);
		let router = HashRouter::new(RouteTable::platform(), sessions.clone());
		Self {
			sessions,
			navigator,
			router,
			services,
		}
	}

	pub fn sessions(&self) -> &Arc<SessionProvider> {
		&self.sessions
	}

	pub fn services(&self) -> &Services {
		&self.services
	}

	pub fn navigator(&self) -> &Arc<dyn NavigationSurface> {
		&self.navigator
	}

	/// Resolves the current fragment and renders the resulting page.
	///
	/// Guard redirects are applied to the navigation surface with
	/// `replace` (a denied target should not pollute history) and then
	/// re-resolved. The loop is bounded: the route table's redirect
	/// targets are the always-resolvable `/login` and `/pets`, so two
	/// hops settle every case.
	pub async fn render_current(&self) -> View {
		let mut fragment = self.navigator.fragment();
		for _ in 0..4 {
			match self.router.resolve(&fragment) {
				Resolution::Redirect(target) => {
					self.navigator.replace(&target);
					fragment = target;
				}
				Resolution::Render { page, route } => {
					return self.render_page(page, &route).await;
				}
			}
		}
		warn!(%fragment, "routing did not settle");
		View::Empty
	}

	async fn render_page(&self, page: PageId, route: &Fragment) -> View {
		let session = self.sessions.current_session();
		match page {
			PageId::Home => HomePage::new(session.is_some()).render(),
			PageId::Login => LoginPage::new().render(),
			PageId::Register => RegisterPage::new().render(),
			PageId::ForgotPassword => ForgotPasswordPage::new().render(),
			PageId::ResetPassword => {
				ResetPasswordPage::new(route.get("token").unwrap_or_default()).render()
			}
			PageId::Dashboard => {
				let content = DashboardPage::load(&self.services).await.map(|p| p.render());
				self.in_layout(content)
			}
			PageId::Pets => {
				let content = PetsPage::load(&self.services, route).await.map(|p| p.render());
				self.in_layout(content)
			}
			PageId::Categories => {
				let content = CategoriesPage::load(&self.services, route)
					.await
					.map(|p| p.render());
				self.in_layout(content)
			}
			PageId::Breeds => {
				let content = BreedsPage::load(&self.services, route)
					.await
					.map(|p| p.render());
				self.in_layout(content)
			}
			PageId::Adoptions => {
				let content = AdoptionsPage::load(&self.services, route)
					.await
					.map(|p| p.render());
				self.in_layout(content)
			}
			PageId::Shelters => {
				let content = SheltersPage::load(&self.services, route)
					.await
					.map(|p| p.render());
				self.in_layout(content)
			}
			PageId::Veterinarians => {
				let content = VeterinariansPage::load(&self.services, route)
					.await
					.map(|p| p.render());
				self.in_layout(content)
			}
			PageId::NotFound => layout(session.as_ref(), NotFoundPage::new().render()),
		}
	}

	/// Wraps a loaded page (or its load error) in the shell layout.
	///
	/// The session is re-read here: a 401 during load destroys it, and
	/// the shell should immediately reflect the signed-out state.
	fn in_layout(&self, content: Result<View, ApiError>) -> View {
		let session = self.sessions.current_session();
		let content = match content {
			Ok(view) => view,
			Err(err) => error_view(&err),
		};
		layout(session.as_ref(), content)
	}
}

fn error_view(err: &ApiError) -> View {
	ElementView::new("div")
		.attr("class", "error-banner")
		.attr("role", "alert")
		.child(err.to_string())
		.into_view()
}

#[cfg(test)]
mod tests {
	use super::*;
	use pawhaven_auth::store::InMemoryStore;
	use pawhaven_router::MemoryNavigator;
	use pawhaven_types::{AuthResponse, Role};

	fn app_at(fragment: &str) -> (App, Arc<MemoryNavigator>) {
		let navigator = Arc::new(MemoryNavigator::starting_at(fragment));
		let app = App::new(
			ApiConfig::default(),
			Arc::new(InMemoryStore::new()),
			navigator.clone(),
		);
		(app, navigator)
	}

	fn sign_in(app: &App, role: Role) {
		app.sessions().login(&AuthResponse {
			token: "tok".into(),
			token_type: "Bearer".into(),
			id: 1,
			username: "casey".into(),
			email: "casey@pawhaven.io".into(),
			role,
			requires_two_factor: false,
		});
	}

	#[tokio::test]
	async fn test_login_screen_renders_without_session() {
		let (app, _) = app_at("/login");
		let html = app.render_current().await.render_to_string();
		assert!(html.contains(r#"data-form="login""#));
	}

	#[tokio::test]
	async fn test_protected_route_settles_on_login() {
		let (app, navigator) = app_at("/pets");
		let html = app.render_current().await.render_to_string();
		assert!(html.contains(r#"data-form="login""#));
		assert_eq!(navigator.fragment(), "/login");
	}

	#[tokio::test]
	async fn test_underprivileged_session_lands_on_pets() {
		let (app, navigator) = app_at("/categories");
		sign_in(&app, Role::User);
		let _ = app.render_current().await;
		assert_eq!(navigator.fragment(), "/pets");
	}

	#[tokio::test]
	async fn test_reset_password_requires_token() {
		let (app, navigator) = app_at("/reset-password");
		let html = app.render_current().await.render_to_string();
		assert!(html.contains(r#"data-form="login""#));
		assert_eq!(navigator.fragment(), "/login");

		let (app, navigator) = app_at("/reset-password?token=tok-1");
		let html = app.render_current().await.render_to_string();
		assert!(html.contains(r#"value="tok-1""#));
		assert_eq!(navigator.fragment(), "/reset-password?token=tok-1");
	}

	#[tokio::test]
	async fn test_unknown_path_renders_not_found_in_shell() {
		let (app, _) = app_at("/no-such-screen");
		sign_in(&app, Role::Admin);
		let html = app.render_current().await.render_to_string();
		assert!(html.contains("404"));
		assert!(html.contains("app-header"));
	}

	#[tokio::test]
	async fn test_fetch_failure_surfaces_as_error_banner() {
		// The default relative base URL is unreachable from a native
		// test process, so the pets load fails and the shell shows the
		// error inside the layout instead of crashing.
		let (app, _) = app_at("/pets");
		sign_in(&app, Role::Admin);
		let html = app.render_current().await.render_to_string();
		assert!(html.contains("error-banner"));
		assert!(html.contains("app-header"));
	}
}
