//! Authentication endpoints.

use crate::client::ApiClient;
use crate::error::ApiError;
use pawhaven_types::{
	AuthResponse, ForgotPasswordRequest, LoginRequest, MessageResponse, RegisterRequest,
	ResetPasswordRequest, TwoFactorRequest,
};
use std::sync::Arc;

/// Sign-in, registration and password-recovery calls.
///
/// This service only talks to the API; establishing or destroying the
/// local session stays with the session provider at the call site.
pub struct AuthService {
	client: Arc<ApiClient>,
}

impl AuthService {
	pub fn new(client: Arc<ApiClient>) -> Self {
		Self { client }
	}

	/// Signs in. When the response asks for 2FA the returned token is
	/// temporary and must go through [`Self::verify_two_factor`].
	pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
		self.client.post("/auth/signin", credentials).await
	}

	/// Exchanges a 2FA code and temporary token for the real session.
	pub async fn verify_two_factor(
		&self,
		code: &str,
		temp_token: &str,
	) -> Result<AuthResponse, ApiError> {
		let payload = TwoFactorRequest {
			code: code.to_string(),
			token: temp_token.to_string(),
		};
		self.client.post("/auth/verify-2fa", &payload).await
	}

	pub async fn register(&self, payload: &RegisterRequest) -> Result<MessageResponse, ApiError> {
		self.client.post("/auth/signup", payload).await
	}

	/// Requests a password-reset email.
	pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ApiError> {
		let payload = ForgotPasswordRequest {
			email: email.to_string(),
		};
		self.client.post("/auth/forgot-password", &payload).await
	}

	/// Redeems an emailed reset token for a new password.
	pub async fn reset_password(
		&self,
		payload: &ResetPasswordRequest,
	) -> Result<MessageResponse, ApiError> {
		self.client.post("/auth/reset-password", payload).await
	}

	/// Confirms the current token is still accepted.
	pub async fn validate(&self) -> Result<MessageResponse, ApiError> {
		self.client.get("/auth/validate").await
	}
}
