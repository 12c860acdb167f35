//! One component per screen.
//!
//! List screens own their fetched collection, the active filters and a
//! paginator over the filtered result; everything they need from the
//! location arrives as the parsed route. Rendering is a pure read.

pub mod adoptions;
pub mod breeds;
pub mod categories;
pub mod dashboard;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod not_found;
pub mod pets;
pub mod register;
pub mod reset_password;
pub mod shelters;
pub mod veterinarians;

use pawhaven_pagination::Paginator;
use pawhaven_router::Fragment;

pub use adoptions::AdoptionsPage;
pub use breeds::BreedsPage;
pub use categories::CategoriesPage;
pub use dashboard::DashboardPage;
pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use pets::PetsPage;
pub use register::RegisterPage;
pub use reset_password::ResetPasswordPage;
pub use shelters::SheltersPage;
pub use veterinarians::VeterinariansPage;

/// Applies `size` and `page` query parameters to a freshly built
/// paginator. Size first, since changing it resets the page; both
/// values clamp, so hand-edited fragments cannot break the view.
pub(crate) fn apply_route_paging<T>(pager: &mut Paginator<T>, route: &Fragment) {
	if let Some(size) = route.get("size").and_then(|s| s.parse().ok()) {
		pager.set_page_size(size);
	}
	if let Some(page) = route.get("page").and_then(|s| s.parse().ok()) {
		pager.set_page(page);
	}
}
