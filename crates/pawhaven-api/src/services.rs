//! Typed, resource-oriented wrappers over [`crate::ApiClient`].
//!
//! One service per API resource, mirroring the platform's endpoint
//! layout. Services hold no state beyond the shared client; every
//! method is a single request.

pub mod adoptions;
pub mod auth;
pub mod breeds;
pub mod categories;
pub mod pets;
pub mod shelters;
pub mod stats;
pub mod veterinarians;

pub use adoptions::AdoptionService;
pub use auth::AuthService;
pub use breeds::BreedService;
pub use categories::CategoryService;
pub use pets::PetService;
pub use shelters::ShelterService;
pub use stats::StatsService;
pub use veterinarians::VeterinarianService;

use crate::client::ApiClient;
use std::sync::Arc;

/// All services over one shared client.
pub struct Services {
	pub auth: AuthService,
	pub pets: PetService,
	pub breeds: BreedService,
	pub categories: CategoryService,
	pub shelters: ShelterService,
	pub veterinarians: VeterinarianService,
	pub adoptions: AdoptionService,
	pub stats: StatsService,
}

impl Services {
	/// Bundles every service over `client`.
	pub fn new(client: Arc<ApiClient>) -> Self {
		Self {
			auth: AuthService::new(client.clone()),
			pets: PetService::new(client.clone()),
			breeds: BreedService::new(client.clone()),
			categories: CategoryService::new(client.clone()),
			shelters: ShelterService::new(client.clone()),
			veterinarians: VeterinarianService::new(client.clone()),
			adoptions: AdoptionService::new(client.clone()),
			stats: StatsService::new(client),
		}
	}
}
