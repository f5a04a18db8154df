//! Async client for the MercadoPago REST API.
//!
//! The `mercadopago-lib` crate wraps four MercadoPago endpoints behind a
//! single [`ApiClient`]:
//!
//! - **Card tokenization** - [`ApiClient::get_card_token`]
//! - **OAuth client credentials** - [`ApiClient::get_access_token`]
//! - **Payment method catalog** - [`ApiClient::payment_methods`]
//! - **Sandbox test users** - [`ApiClient::get_test_user`]
//!
//! Every call is one request/response round trip. Failures come back as an
//! [`ApiError`]; when the server explains itself the decoded body is available
//! as an [`ErrorResponse`]. There are no retries and no token caching.
//!
//! ## Example
//!
//! ```rust,ignore
//! use mercadopago_lib::{ApiClient, BASE_URL};
//! use mercadopago_lib::apis::card_tokens::CardTokenRequest;
//!
//! let client = ApiClient::new(BASE_URL, "TEST-xxx")?;
//! let request = CardTokenRequest::new("4111111111111111", 12, 2030, "123");
//!
//! match client.get_card_token(&request).await {
//!     Ok(token) => println!("token: {}", token.id),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

pub mod apis;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod method;
pub mod response;

// Re-exports for convenience
pub use client::{ApiClient, ApiClientBuilder, BASE_URL, DEFAULT_TIMEOUT};
pub use config::ClientConfig;
pub use endpoint::{Endpoint, PathRoot};
pub use error::{ApiError, ClientError, ConfigError, ErrorResponse};
pub use method::RestMethod;
pub use response::to_pretty_json;
