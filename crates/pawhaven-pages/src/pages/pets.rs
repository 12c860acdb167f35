//! The pets list screen.

use super::apply_route_paging;
use crate::components::{badge, pagination_controls, table};
use crate::filters::PetFilters;
use crate::view::{Component, ElementView, IntoView, View};
use pawhaven_api::{ApiError, Services};
use pawhaven_pagination::Paginator;
use pawhaven_router::Fragment;
use pawhaven_types::Pet;

/// Lists every pet, narrowed by the route's filters and paged.
pub struct PetsPage {
	pets: Vec<Pet>,
	filters: PetFilters,
	pager: Paginator<Pet>,
}

impl PetsPage {
	/// Fetches the collection and applies the route's filters and
	/// paging.
	pub async fn load(services: &Services, route: &Fragment) -> Result<Self, ApiError> {
		Ok(Self::from_pets(services.pets.all().await?, route))
	}

	/// Builds the page from an already-fetched collection.
	pub fn from_pets(pets: Vec<Pet>, route: &Fragment) -> Self {
		let filters = PetFilters::from_route(route);
		let mut pager = Paginator::new(filters.apply(&pets));
		apply_route_paging(&mut pager, route);
		Self {
			pets,
			filters,
			pager,
		}
	}

	pub fn pager(&self) -> &Paginator<Pet> {
		&self.pager
	}

	pub fn filters(&self) -> &PetFilters {
		&self.filters
	}
}

impl Component for PetsPage {
	fn render(&self) -> View {
		let rows = self
			.pager
			.current_items()
			.iter()
			.map(|pet| {
				vec![
					View::text(pet.name.clone()),
					View::text(
						pet.breed
							.as_ref()
							.map(|b| b.name.clone())
							.unwrap_or_else(|| "-".to_string()),
					),
					View::text(
						pet.category
							.as_ref()
							.map(|c| c.name.clone())
							.unwrap_or_else(|| "-".to_string()),
					),
					View::text(pet.age.to_string()),
					badge(pet.gender.as_str()),
					badge(pet.status.as_str()),
				]
			})
			.collect();

		ElementView::new("section")
			.attr("class", "pets-page")
			.child(ElementView::new("h1").child("Pets"))
			.child(
				ElementView::new("p")
					.attr("class", "list-meta")
					.child(format!(
						"Showing {} of {} pets",
						self.pager.total_items(),
						self.pets.len()
					)),
			)
			.child(if self.pager.total_items() == 0 {
				ElementView::new("p")
					.attr("class", "empty")
					.child("No pets match the current filters.")
					.into_view()
			} else {
				table(
					&["Name", "Breed", "Category", "Age", "Gender", "Status"],
					rows,
				)
			})
			.child(pagination_controls(&self.pager.view()))
			.into_view()
	}

	fn name() -> &'static str {
		"PetsPage"
	}
}
