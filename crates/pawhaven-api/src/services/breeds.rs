//! Breed endpoints.

use crate::client::ApiClient;
use crate::error::ApiError;
use pawhaven_types::{Breed, CreateBreedRequest};
use std::sync::Arc;

pub struct BreedService {
	client: Arc<ApiClient>,
}

impl BreedService {
	pub fn new(client: Arc<ApiClient>) -> Self {
		Self { client }
	}

	pub async fn all(&self) -> Result<Vec<Breed>, ApiError> {
		self.client.get("/breeds").await
	}

	pub async fn by_id(&self, id: i64) -> Result<Breed, ApiError> {
		self.client.get(&format!("/breeds/{id}")).await
	}

	pub async fn by_name(&self, name: &str) -> Result<Breed, ApiError> {
		self.client.get(&format!("/breeds/name/{name}")).await
	}

	pub async fn by_category(&self, category_id: i64) -> Result<Vec<Breed>, ApiError> {
		self.client
			.get(&format!("/breeds/category/{category_id}"))
			.await
	}

	pub async fn create(&self, payload: &CreateBreedRequest) -> Result<Breed, ApiError> {
		self.client.post("/breeds", payload).await
	}

	pub async fn update(&self, id: i64, payload: &CreateBreedRequest) -> Result<Breed, ApiError> {
		self.client.put(&format!("/breeds/{id}"), payload).await
	}

	pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
		self.client.delete(&format!("/breeds/{id}")).await
	}
}
