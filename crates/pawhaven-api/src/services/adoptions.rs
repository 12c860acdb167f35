//! Adoption-request endpoints.

use crate::client::ApiClient;
use crate::error::ApiError;
use pawhaven_types::{
	Adoption, AdoptionStatus, CreateAdoptionRequest, UpdateAdoptionRequest,
	UpdateAdoptionStatusRequest,
};
use std::sync::Arc;

pub struct AdoptionService {
	client: Arc<ApiClient>,
}

impl AdoptionService {
	pub fn new(client: Arc<ApiClient>) -> Self {
		Self { client }
	}

	pub async fn all(&self) -> Result<Vec<Adoption>, ApiError> {
		self.client.get("/adoptions").await
	}

	pub async fn by_id(&self, id: i64) -> Result<Adoption, ApiError> {
		self.client.get(&format!("/adoptions/{id}")).await
	}

	pub async fn by_adopter(&self, adopter_id: i64) -> Result<Vec<Adoption>, ApiError> {
		self.client
			.get(&format!("/adoptions/adopter/{adopter_id}"))
			.await
	}

	pub async fn by_pet(&self, pet_id: i64) -> Result<Vec<Adoption>, ApiError> {
		self.client.get(&format!("/adoptions/pet/{pet_id}")).await
	}

	pub async fn by_status(&self, status: AdoptionStatus) -> Result<Vec<Adoption>, ApiError> {
		self.client.get(&format!("/adoptions/status/{status}")).await
	}

	pub async fn create(&self, payload: &CreateAdoptionRequest) -> Result<Adoption, ApiError> {
		self.client.post("/adoptions", payload).await
	}

	/// Moves the request through its lifecycle (approve, complete,
	/// cancel).
	pub async fn update_status(
		&self,
		id: i64,
		status: AdoptionStatus,
	) -> Result<Adoption, ApiError> {
		let payload = UpdateAdoptionStatusRequest { status };
		self.client
			.put(&format!("/adoptions/{id}/status"), &payload)
			.await
	}

	pub async fn update(
		&self,
		id: i64,
		payload: &UpdateAdoptionRequest,
	) -> Result<Adoption, ApiError> {
		self.client.put(&format!("/adoptions/{id}"), payload).await
	}

	pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
		self.client.delete(&format!("/adoptions/{id}")).await
	}
}
