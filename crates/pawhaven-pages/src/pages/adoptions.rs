//! The adoption-requests list screen.

use super::apply_route_paging;
use crate::components::{badge, pagination_controls, table};
use crate::filters::AdoptionFilters;
use crate::format::{format_date, truncate};
use crate::view::{Component, ElementView, IntoView, View};
use pawhaven_api::{ApiError, Services};
use pawhaven_pagination::Paginator;
use pawhaven_router::Fragment;
use pawhaven_types::Adoption;

/// Lists adoption requests, optionally narrowed to one status.
pub struct AdoptionsPage {
	adoptions: Vec<Adoption>,
	filters: AdoptionFilters,
	pager: Paginator<Adoption>,
}

impl AdoptionsPage {
	pub async fn load(services: &Services, route: &Fragment) -> Result<Self, ApiError> {
		Ok(Self::from_adoptions(services.adoptions.all().await?, route))
	}

	pub fn from_adoptions(adoptions: Vec<Adoption>, route: &Fragment) -> Self {
		let filters = AdoptionFilters::from_route(route);
		let mut pager = Paginator::new(filters.apply(&adoptions));
		apply_route_paging(&mut pager, route);
		Self {
			adoptions,
			filters,
			pager,
		}
	}

	pub fn pager(&self) -> &Paginator<Adoption> {
		&self.pager
	}

	pub fn filters(&self) -> &AdoptionFilters {
		&self.filters
	}
}

impl Component for AdoptionsPage {
	fn render(&self) -> View {
		let rows = self
			.pager
			.current_items()
			.iter()
			.map(|adoption| {
				vec![
					View::text(adoption.pet.name.clone()),
					View::text(adoption.adopter.full_name.clone()),
					View::text(format_date(&adoption.adoption_date)),
					badge(adoption.status.as_str()),
					View::text(
						adoption
							.notes
							.as_deref()
							.map(|n| truncate(n, 40))
							.unwrap_or_else(|| "-".to_string()),
					),
				]
			})
			.collect();

		ElementView::new("section")
			.attr("class", "adoptions-page")
			.child(ElementView::new("h1").child("Adoption Requests"))
			.child(
				ElementView::new("p")
					.attr("class", "list-meta")
					.child(format!(
						"Showing {} of {} requests",
						self.pager.total_items(),
						self.adoptions.len()
					)),
			)
			.child(table(&["Pet", "Adopter", "Date", "Status", "Notes"], rows))
			.child(pagination_controls(&self.pager.view()))
			.into_view()
	}

	fn name() -> &'static str {
		"AdoptionsPage"
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{TimeZone, Utc};
	use pawhaven_types::{AdoptionStatus, PetSummary, UserSummary};

	fn adoption(id: i64, status: AdoptionStatus) -> Adoption {
		let at = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
		Adoption {
			id,
			pet: PetSummary {
				id,
				name: format!("pet-{id}"),
				breed: "Beagle".into(),
				category: "Dog".into(),
				age: 3,
				gender: "MALE".into(),
				status: "ACTIVE".into(),
				image: None,
			},
			adopter: UserSummary {
				id: 1,
				username: "casey".into(),
				full_name: "Casey Lane".into(),
			},
			adoption_date: at,
			notes: None,
			status,
			created_at: at,
			updated_at: at,
		}
	}

	#[test]
	fn test_status_filter_from_route() {
		let adoptions = vec![
			adoption(1, AdoptionStatus::Pending),
			adoption(2, AdoptionStatus::Approved),
			adoption(3, AdoptionStatus::Pending),
		];
		let page =
			AdoptionsPage::from_adoptions(adoptions, &Fragment::parse("/adoptions?status=PENDING"));
		assert_eq!(page.pager().total_items(), 2);

		let html = page.render().render_to_string();
		assert!(html.contains("Showing 2 of 3 requests"));
		assert!(html.contains("badge-pending"));
	}
}
