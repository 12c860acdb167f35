//! Client-side list filtering.
//!
//! List screens fetch whole collections and narrow them locally; the
//! narrowed collection is what feeds the paginator, so changing a
//! filter replaces the collection and snaps back to page 1.

use pawhaven_router::Fragment;
use pawhaven_types::{Adoption, AdoptionStatus, Gender, Pet, PetStatus};

/// Filters applied to the pets list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetFilters {
	pub status: Option<PetStatus>,
	pub category_id: Option<i64>,
	pub breed_id: Option<i64>,
	pub gender: Option<Gender>,
	pub min_age: Option<i32>,
	pub max_age: Option<i32>,
	/// Case-insensitive match against name and description.
	pub search: String,
}

impl PetFilters {
	/// Reads filters from the route's query parameters.
	///
	/// Unknown or unparseable values leave the corresponding filter
	/// inactive, matching the clamp-never-error policy of the rest of
	/// the navigation surface.
	pub fn from_route(route: &Fragment) -> Self {
		Self {
			status: route.get("status").and_then(|s| s.parse().ok()),
			category_id: route.get("category").and_then(|s| s.parse().ok()),
			breed_id: route.get("breed").and_then(|s| s.parse().ok()),
			gender: route.get("gender").and_then(|s| s.parse().ok()),
			min_age: route.get("minAge").and_then(|s| s.parse().ok()),
			max_age: route.get("maxAge").and_then(|s| s.parse().ok()),
			search: route.get("search").unwrap_or_default().to_string(),
		}
	}

	/// True when no filter is active.
	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}

	/// Returns the pets matching every active filter, in input order.
	pub fn apply(&self, pets: &[Pet]) -> Vec<Pet> {
		pets.iter().filter(|p| self.matches(p)).cloned().collect()
	}

	fn matches(&self, pet: &Pet) -> bool {
		if let Some(status) = self.status {
			if pet.status != status {
				return false;
			}
		}
		if let Some(category_id) = self.category_id {
			if pet.category.as_ref().map(|c| c.id) != Some(category_id) {
				return false;
			}
		}
		if let Some(breed_id) = self.breed_id {
			if pet.breed.as_ref().map(|b| b.id) != Some(breed_id) {
				return false;
			}
		}
		if let Some(gender) = self.gender {
			if pet.gender != gender {
				return false;
			}
		}
		if let Some(min) = self.min_age {
			if pet.age < min {
				return false;
			}
		}
		if let Some(max) = self.max_age {
			if pet.age > max {
				return false;
			}
		}
		if !self.search.is_empty() {
			let needle = self.search.to_lowercase();
			let in_name = pet.name.to_lowercase().contains(&needle);
			let in_description = pet
				.description
				.as_ref()
				.is_some_and(|d| d.to_lowercase().contains(&needle));
			if !in_name && !in_description {
				return false;
			}
		}
		true
	}
}

/// Filters applied to the adoptions list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdoptionFilters {
	pub status: Option<AdoptionStatus>,
}

impl AdoptionFilters {
	/// Reads the status filter from the route's query parameters.
	pub fn from_route(route: &Fragment) -> Self {
		Self {
			status: route.get("status").and_then(|s| s.parse().ok()),
		}
	}

	/// Returns the adoptions matching the active filter, in input order.
	pub fn apply(&self, adoptions: &[Adoption]) -> Vec<Adoption> {
		adoptions
			.iter()
			.filter(|a| self.status.is_none_or(|s| a.status == s))
			.cloned()
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{TimeZone, Utc};
	use pawhaven_types::{BreedSummary, CategorySummary};

	fn pet(id: i64, name: &str, age: i32, status: PetStatus, gender: Gender) -> Pet {
		let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
		Pet {
			id,
			name: name.to_string(),
			breed: Some(BreedSummary {
				id: id % 2,
				name: "breed".into(),
			}),
			category: Some(CategorySummary {
				id: 1,
				name: "Dog".into(),
			}),
			age,
			description: Some(format!("{name} is friendly")),
			image: None,
			gender,
			status,
			owner: None,
			shelter: None,
			veterinarian: None,
			adopted_by: None,
			created_at: at,
			updated_at: at,
		}
	}

	#[test]
	fn test_empty_filters_keep_everything_in_order() {
		let pets = vec![
			pet(1, "Biscuit", 3, PetStatus::Active, Gender::Male),
			pet(2, "Mochi", 5, PetStatus::Adopted, Gender::Female),
		];
		let filters = PetFilters::default();
		assert!(filters.is_empty());
		assert_eq!(filters.apply(&pets), pets);
	}

	#[test]
	fn test_filters_combine_conjunctively() {
		let pets = vec![
			pet(1, "Biscuit", 3, PetStatus::Active, Gender::Male),
			pet(2, "Mochi", 5, PetStatus::Active, Gender::Female),
			pet(3, "Pepper", 2, PetStatus::Adopted, Gender::Female),
		];
		let filters = PetFilters {
			status: Some(PetStatus::Active),
			gender: Some(Gender::Female),
			..Default::default()
		};
		let matched = filters.apply(&pets);
		assert_eq!(matched.len(), 1);
		assert_eq!(matched[0].name, "Mochi");
	}

	#[test]
	fn test_search_matches_name_or_description_case_insensitively() {
		let pets = vec![
			pet(1, "Biscuit", 3, PetStatus::Active, Gender::Male),
			pet(2, "Mochi", 5, PetStatus::Active, Gender::Female),
		];
		let filters = PetFilters {
			search: "bisc".into(),
			..Default::default()
		};
		assert_eq!(filters.apply(&pets).len(), 1);

		let filters = PetFilters {
			search: "FRIENDLY".into(),
			..Default::default()
		};
		assert_eq!(filters.apply(&pets).len(), 2);
	}

	#[test]
	fn test_age_range_is_inclusive() {
		let pets = vec![
			pet(1, "Biscuit", 3, PetStatus::Active, Gender::Male),
			pet(2, "Mochi", 5, PetStatus::Active, Gender::Female),
			pet(3, "Pepper", 8, PetStatus::Active, Gender::Female),
		];
		let filters = PetFilters {
			min_age: Some(3),
			max_age: Some(5),
			..Default::default()
		};
		let matched = filters.apply(&pets);
		assert_eq!(matched.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
	}

	#[test]
	fn test_filters_parse_from_route_query() {
		let route = Fragment::parse("/pets?status=ACTIVE&gender=FEMALE&minAge=2&search=mochi");
		let filters = PetFilters::from_route(&route);
		assert_eq!(filters.status, Some(PetStatus::Active));
		assert_eq!(filters.gender, Some(Gender::Female));
		assert_eq!(filters.min_age, Some(2));
		assert_eq!(filters.search, "mochi");

		// Bad values deactivate the filter instead of failing.
		let route = Fragment::parse("/pets?status=BOGUS&minAge=soon");
		let filters = PetFilters::from_route(&route);
		assert_eq!(filters.status, None);
		assert_eq!(filters.min_age, None);
	}

	#[test]
	fn test_adoption_status_filter() {
		let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
		let adoption = |id: i64, status: AdoptionStatus| Adoption {
			id,
			pet: pawhaven_types::PetSummary {
				id,
				name: "Biscuit".into(),
				breed: "Beagle".into(),
				category: "Dog".into(),
				age: 3,
				gender: "MALE".into(),
				status: "ACTIVE".into(),
				image: None,
			},
			adopter: pawhaven_types::UserSummary {
				id: 1,
				username: "casey".into(),
				full_name: "Casey Lane".into(),
			},
			adoption_date: at,
			notes: None,
			status,
			created_at: at,
			updated_at: at,
		};

		let adoptions = vec![
			adoption(1, AdoptionStatus::Pending),
			adoption(2, AdoptionStatus::Approved),
		];
		let filters = AdoptionFilters {
			status: Some(AdoptionStatus::Pending),
		};
		assert_eq!(filters.apply(&adoptions).len(), 1);
		assert_eq!(AdoptionFilters::default().apply(&adoptions).len(), 2);
	}
}
