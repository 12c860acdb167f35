//! Veterinarian endpoints.
//!
//! Veterinarians are platform accounts, so reads return [`User`]
//! records rather than a dedicated entity.

use crate::client::ApiClient;
use crate::error::ApiError;
use pawhaven_types::{CreateVeterinarianRequest, Pet, UpdateVeterinarianRequest, User};
use std::sync::Arc;

pub struct VeterinarianService {
	client: Arc<ApiClient>,
}

impl VeterinarianService {
	pub fn new(client: Arc<ApiClient>) -> Self {
		Self { client }
	}

	pub async fn all(&self) -> Result<Vec<User>, ApiError> {
		self.client.get("/veterinarians").await
	}

	pub async fn by_id(&self, id: i64) -> Result<User, ApiError> {
		self.client.get(&format!("/veterinarians/{id}")).await
	}

	/// Pets under this veterinarian's care.
	pub async fn pets(&self, veterinarian_id: i64) -> Result<Vec<Pet>, ApiError> {
		self.client
			.get(&format!("/veterinarians/{veterinarian_id}/pets"))
			.await
	}

	pub async fn create(&self, payload: &CreateVeterinarianRequest) -> Result<User, ApiError> {
		self.client.post("/veterinarians", payload).await
	}

	pub async fn update(
		&self,
		id: i64,
		payload: &UpdateVeterinarianRequest,
	) -> Result<User, ApiError> {
		self.client.put(&format!("/veterinarians/{id}"), payload).await
	}

	pub async fn assign_pet(&self, pet_id: i64, veterinarian_id: i64) -> Result<Pet, ApiError> {
		self.client
			.post_empty(&format!("/veterinarians/{veterinarian_id}/pets/{pet_id}"))
			.await
	}

	pub async fn remove_pet(&self, pet_id: i64, veterinarian_id: i64) -> Result<(), ApiError> {
		self.client
			.delete(&format!("/veterinarians/{veterinarian_id}/pets/{pet_id}"))
			.await
	}
}
