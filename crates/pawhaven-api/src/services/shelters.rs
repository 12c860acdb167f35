//! Shelter endpoints.

use crate::client::ApiClient;
use crate::error::ApiError;
use pawhaven_types::{CreateShelterRequest, Pet, Shelter, UpdateShelterRequest};
use std::sync::Arc;

pub struct ShelterService {
	client: Arc<ApiClient>,
}

impl ShelterService {
	pub fn new(client: Arc<ApiClient>) -> Self {
		Self { client }
	}

	pub async fn all(&self) -> Result<Vec<Shelter>, ApiError> {
		self.client.get("/shelters").await
	}

	pub async fn by_id(&self, id: i64) -> Result<Shelter, ApiError> {
		self.client.get(&format!("/shelters/{id}")).await
	}

	pub async fn create(&self, payload: &CreateShelterRequest) -> Result<Shelter, ApiError> {
		self.client.post("/shelters", payload).await
	}

	pub async fn update(
		&self,
		id: i64,
		payload: &UpdateShelterRequest,
	) -> Result<Shelter, ApiError> {
		self.client.put(&format!("/shelters/{id}"), payload).await
	}

	pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
		self.client.delete(&format!("/shelters/{id}")).await
	}

	/// Pets currently housed by the shelter.
	pub async fn pets(&self, shelter_id: i64) -> Result<Vec<Pet>, ApiError> {
		self.client.get(&format!("/shelters/{shelter_id}/pets")).await
	}
}
