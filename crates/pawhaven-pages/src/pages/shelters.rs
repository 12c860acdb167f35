//! The shelters list screen.

use super::apply_route_paging;
use crate::components::{pagination_controls, table};
use crate::format::format_date;
use crate::view::{Component, ElementView, IntoView, View};
use pawhaven_api::{ApiError, Services};
use pawhaven_pagination::Paginator;
use pawhaven_router::Fragment;
use pawhaven_types::Shelter;

pub struct SheltersPage {
	pager: Paginator<Shelter>,
}

impl SheltersPage {
	pub async fn load(services: &Services, route: &Fragment) -> Result<Self, ApiError> {
		Ok(Self::from_shelters(services.shelters.all().await?, route))
	}

	pub fn from_shelters(shelters: Vec<Shelter>, route: &Fragment) -> Self {
		let mut pager = Paginator::new(shelters);
		apply_route_paging(&mut pager, route);
		Self { pager }
	}

	pub fn pager(&self) -> &Paginator<Shelter> {
		&self.pager
	}
}

impl Component for SheltersPage {
	fn render(&self) -> View {
		let rows = self
			.pager
			.current_items()
			.iter()
			.map(|shelter| {
				vec![
					View::text(shelter.name.clone()),
					View::text(shelter.address.clone()),
					View::text(shelter.email.clone()),
					View::text(shelter.phone.clone()),
					View::text(format_date(&shelter.created_at)),
				]
			})
			.collect();

		ElementView::new("section")
			.attr("class", "shelters-page")
			.child(ElementView::new("h1").child("Shelters"))
			.child(table(&["Name", "Address", "Email", "Phone", "Created"], rows))
			.child(pagination_controls(&self.pager.view()))
			.into_view()
	}

	fn name() -> &'static str {
		"SheltersPage"
	}
}
