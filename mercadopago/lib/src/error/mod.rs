//! Layered error types for the MercadoPago client.
//!
//! The error hierarchy is structured for actionable diagnostics:
//! - [`ApiError`] - Top-level error type returned by every operation
//! - [`ClientError`] - Transport failures from the HTTP layer
//! - [`ConfigError`] - Invalid client configuration
//! - [`ErrorResponse`] - Failure body reported by the MercadoPago API

mod api_error;
mod client_error;
mod config_error;
mod error_response;

pub use api_error::ApiError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use error_response::ErrorResponse;
