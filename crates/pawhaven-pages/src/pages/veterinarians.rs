//! The veterinarians list screen.

use super::apply_route_paging;
use crate::components::{pagination_controls, table};
use crate::format::format_date;
use crate::view::{Component, ElementView, IntoView, View};
use pawhaven_api::{ApiError, Services};
use pawhaven_pagination::Paginator;
use pawhaven_router::Fragment;
use pawhaven_types::User;

pub struct VeterinariansPage {
	pager: Paginator<User>,
}

impl VeterinariansPage {
	pub async fn load(services: &Services, route: &Fragment) -> Result<Self, ApiError> {
		Ok(Self::from_veterinarians(
			services.veterinarians.all().await?,
			route,
		))
	}

	pub fn from_veterinarians(veterinarians: Vec<User>, route: &Fragment) -> Self {
		let mut pager = Paginator::new(veterinarians);
		apply_route_paging(&mut pager, route);
		Self { pager }
	}

	pub fn pager(&self) -> &Paginator<User> {
		&self.pager
	}
}

impl Component for VeterinariansPage {
	fn render(&self) -> View {
		let rows = self
			.pager
			.current_items()
			.iter()
			.map(|vet| {
				vec![
					View::text(vet.username.clone()),
					View::text(vet.full_name.clone()),
					View::text(vet.email.clone()),
					View::text(format_date(&vet.created_at)),
				]
			})
			.collect();

		ElementView::new("section")
			.attr("class", "veterinarians-page")
			.child(ElementView::new("h1").child("Veterinarians"))
			.child(table(&["Username", "Full name", "Email", "Joined"], rows))
			.child(pagination_controls(&self.pager.view()))
			.into_view()
	}

	fn name() -> &'static str {
		"VeterinariansPage"
	}
}
