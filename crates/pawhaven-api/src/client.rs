//! Generic JSON client over the platform API.

use crate::config::ApiConfig;
use crate::error::ApiError;
use pawhaven_auth::SessionProvider;
use pawhaven_types::ApiErrorBody;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

/// JSON HTTP client carrying the session's bearer token.
///
/// A 401 response destroys the session through the provider before the
/// error is returned, so no stale token survives an authorization
/// failure. All other failures map to [`ApiError`] without side
/// effects.
pub struct ApiClient {
	base_url: String,
	http: reqwest::Client,
	sessions: Arc<SessionProvider>,
}

impl ApiClient {
	/// Creates a client for `config`, reading tokens from `sessions`.
	pub fn new(config: &ApiConfig, sessions: Arc<SessionProvider>) -> Self {
		Self {
			base_url: config.base_url.trim_end_matches('/').to_string(),
			http: reqwest::Client::new(),
			sessions,
		}
	}

	/// `GET` returning a decoded body.
	pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
		let response = self.send(self.http.get(self.url(path))).await?;
		Self::decode(response).await
	}

	/// `POST` with a JSON body, returning a decoded body.
	pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
	where
		B: Serialize + ?Sized,
		T: DeserializeOwned,
	{
		let response = self.send(self.http.post(self.url(path)).json(body)).await?;
		Self::decode(response).await
	}

	/// Bodyless `POST` (assignment-style endpoints), returning a
	/// decoded body.
	pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
		let response = self.send(self.http.post(self.url(path))).await?;
		Self::decode(response).await
	}

	/// `PUT` with a JSON body, returning a decoded body.
	pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
	where
		B: Serialize + ?Sized,
		T: DeserializeOwned,
	{
		let response = self.send(self.http.put(self.url(path)).json(body)).await?;
		Self::decode(response).await
	}

	/// `DELETE`; the response body, if any, is discarded.
	pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
		self.send(self.http.delete(self.url(path))).await?;
		Ok(())
	}

	fn url(&self, path: &str) -> String {
		let path = path.trim_start_matches('/');
		format!("{}/{}", self.base_url, path)
	}

	async fn send(
		&self,
		request: reqwest::RequestBuilder,
	) -> Result<reqwest::Response, ApiError> {
		let request = match self.sessions.token() {
			Some(token) => request.bearer_auth(token),
			None => request,
		};

		let response = request
			.send()
			.await
			.map_err(|err| ApiError::Network(err.to_string()))?;

		let status = response.status();
		if status.is_success() {
			return Ok(response);
		}

		debug!(%status, "api request failed");
		match status {
			StatusCode::UNAUTHORIZED => {
				warn!("token rejected, destroying session");
				self.sessions.logout();
				Err(ApiError::Unauthorized)
			}
			StatusCode::FORBIDDEN => Err(ApiError::Forbidden),
			StatusCode::NOT_FOUND => Err(ApiError::NotFound),
			status if status.is_server_error() => Err(ApiError::Server {
				status: status.as_u16(),
			}),
			status => {
				let message = response
					.json::<ApiErrorBody>()
					.await
					.map(|body| body.message)
					.unwrap_or_else(|_| format!("request failed with status {status}"));
				Err(ApiError::Api {
					status: status.as_u16(),
					message,
				})
			}
		}
	}

	async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
		response
			.json::<T>()
			.await
			.map_err(|err| ApiError::Decode(err.to_string()))
	}
}
