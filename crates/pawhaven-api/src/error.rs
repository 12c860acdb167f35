//! Error type for API calls.

use thiserror::Error;

/// Failure of a platform API call.
///
/// Status codes the screens handle specially get their own variants;
/// everything else carries the server's message through.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
	/// The token was rejected; the session has been destroyed and the
	/// user must sign in again.
	#[error("session expired, please sign in again")]
	Unauthorized,

	/// The session lacks permission for this action.
	#[error("access denied: you don't have permission to perform this action")]
	Forbidden,

	/// The addressed resource does not exist.
	#[error("resource not found")]
	NotFound,

	/// The server failed; retrying later may help.
	#[error("server error ({status}), please try again later")]
	Server { status: u16 },

	/// Any other non-success response, with the server's message.
	#[error("{message}")]
	Api { status: u16, message: String },

	/// The request never completed.
	#[error("network error: {0}")]
	Network(String),

	/// The response body did not match the expected shape.
	#[error("unexpected response body: {0}")]
	Decode(String),
}
