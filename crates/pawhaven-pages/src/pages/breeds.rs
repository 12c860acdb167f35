//! The breeds list screen.

use super::apply_route_paging;
use crate::components::{pagination_controls, table};
use crate::format::{format_date, truncate};
use crate::view::{Component, ElementView, IntoView, View};
use pawhaven_api::{ApiError, Services};
use pawhaven_pagination::Paginator;
use pawhaven_router::Fragment;
use pawhaven_types::Breed;

pub struct BreedsPage {
	pager: Paginator<Breed>,
}

impl BreedsPage {
	pub async fn load(services: &Services, route: &Fragment) -> Result<Self, ApiError> {
		Ok(Self::from_breeds(services.breeds.all().await?, route))
	}

	pub fn from_breeds(breeds: Vec<Breed>, route: &Fragment) -> Self {
		let mut pager = Paginator::new(breeds);
		apply_route_paging(&mut pager, route);
		Self { pager }
	}

	pub fn pager(&self) -> &Paginator<Breed> {
		&self.pager
	}
}

impl Component for BreedsPage {
	fn render(&self) -> View {
		let rows = self
			.pager
			.current_items()
			.iter()
			.map(|breed| {
				vec![
					View::text(breed.name.clone()),
					View::text(breed.category_name.clone()),
					View::text(
						breed
							.description
							.as_deref()
							.map(|d| truncate(d, 60))
							.unwrap_or_else(|| "-".to_string()),
					),
					View::text(format_date(&breed.created_at)),
				]
			})
			.collect();

		ElementView::new("section")
			.attr("class", "breeds-page")
			.child(ElementView::new("h1").child("Breeds"))
			.child(table(&["Name", "Category", "Description", "Created"], rows))
			.child(pagination_controls(&self.pager.view()))
			.into_view()
	}

	fn name() -> &'static str {
		"BreedsPage"
	}
}
