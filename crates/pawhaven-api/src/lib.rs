//! Typed REST client for the Pawhaven platform API.
//!
//! [`ApiClient`] handles JSON requests, bearer-token attachment and
//! status-code mapping (a 401 destroys the session before surfacing as
//! [`ApiError::Unauthorized`]); the [`services`] modules wrap it in
//! one resource-oriented service per endpoint family.
//!
//! The front-end core (router, guard, pagination) never calls into
//! this crate; pages fetch through it and feed the results onward.

mod client;
mod config;
mod error;
pub mod services;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use services::Services;
