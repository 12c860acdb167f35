//! Pet endpoints.

use crate::client::ApiClient;
use crate::error::ApiError;
use pawhaven_types::{CreatePetRequest, Pet, PetStatus, UpdatePetRequest};
use std::sync::Arc;

/// CRUD plus the assignment and adoption actions on pets.
pub struct PetService {
	client: Arc<ApiClient>,
}

impl PetService {
	pub fn new(client: Arc<ApiClient>) -> Self {
		Self { client }
	}

	pub async fn all(&self) -> Result<Vec<Pet>, ApiError> {
		self.client.get("/pets").await
	}

	pub async fn by_id(&self, id: i64) -> Result<Pet, ApiError> {
		self.client.get(&format!("/pets/{id}")).await
	}

	pub async fn by_status(&self, status: PetStatus) -> Result<Vec<Pet>, ApiError> {
		self.client.get(&format!("/pets/status/{status}")).await
	}

	pub async fn by_category(&self, category_id: i64) -> Result<Vec<Pet>, ApiError> {
		self.client.get(&format!("/pets/category/{category_id}")).await
	}

	pub async fn by_breed(&self, breed_id: i64) -> Result<Vec<Pet>, ApiError> {
		self.client.get(&format!("/pets/breed/{breed_id}")).await
	}

	pub async fn create(&self, payload: &CreatePetRequest) -> Result<Pet, ApiError> {
		self.client.post("/pets", payload).await
	}

	pub async fn update(&self, id: i64, payload: &UpdatePetRequest) -> Result<Pet, ApiError> {
		self.client.put(&format!("/pets/{id}"), payload).await
	}

	pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
		self.client.delete(&format!("/pets/{id}")).await
	}

	pub async fn assign_shelter(&self, pet_id: i64, shelter_id: i64) -> Result<Pet, ApiError> {
		self.client
			.post_empty(&format!("/pets/{pet_id}/shelter/{shelter_id}"))
			.await
	}

	pub async fn assign_veterinarian(
		&self,
		pet_id: i64,
		veterinarian_id: i64,
	) -> Result<Pet, ApiError> {
		self.client
			.post_empty(&format!("/pets/{pet_id}/veterinarian/{veterinarian_id}"))
			.await
	}

	/// Marks the pet adopted by `adopter_id`.
	pub async fn adopt(&self, pet_id: i64, adopter_id: i64) -> Result<Pet, ApiError> {
		self.client
			.post_empty(&format!("/pets/{pet_id}/adopt/{adopter_id}"))
			.await
	}
}
