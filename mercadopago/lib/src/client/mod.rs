//! HTTP client module.
//!
//! This module provides the async client that executes MercadoPago requests
//! with explicit per-request headers and tracing instrumentation.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use mercadopago_lib::{ApiClient, BASE_URL};
//!
//! let client = ApiClient::new(BASE_URL, "APP_USR-xxx")?;
//! let methods = client.payment_methods().await?;
//! ```

mod executor;

pub use executor::{ApiClient, ApiClientBuilder, BASE_URL, DEFAULT_TIMEOUT};
