//! Category endpoints.

use crate::client::ApiClient;
use crate::error::ApiError;
use pawhaven_types::{Category, CreateCategoryRequest};
use std::sync::Arc;

pub struct CategoryService {
	client: Arc<ApiClient>,
}

impl CategoryService {
	pub fn new(client: Arc<ApiClient>) -> Self {
		Self { client }
	}

	pub async fn all(&self) -> Result<Vec<Category>, ApiError> {
		self.client.get("/categories").await
	}

	pub async fn by_id(&self, id: i64) -> Result<Category, ApiError> {
		self.client.get(&format!("/categories/{id}")).await
	}

	pub async fn by_name(&self, name: &str) -> Result<Category, ApiError> {
		self.client.get(&format!("/categories/name/{name}")).await
	}

	pub async fn create(&self, payload: &CreateCategoryRequest) -> Result<Category, ApiError> {
		self.client.post("/categories", payload).await
	}

	pub async fn update(
		&self,
		id: i64,
		payload: &CreateCategoryRequest,
	) -> Result<Category, ApiError> {
		self.client.put(&format!("/categories/{id}"), payload).await
	}

	pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
		self.client.delete(&format!("/categories/{id}")).await
	}
}
