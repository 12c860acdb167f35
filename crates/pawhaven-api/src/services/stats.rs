//! Dashboard statistics endpoint.

use crate::client::ApiClient;
use crate::error::ApiError;
use pawhaven_types::DashboardStats;
use std::sync::Arc;

pub struct StatsService {
	client: Arc<ApiClient>,
}

impl StatsService {
	pub fn new(client: Arc<ApiClient>) -> Self {
		Self { client }
	}

	pub async fn fetch(&self) -> Result<DashboardStats, ApiError> {
		self.client.get("/stats").await
	}
}
