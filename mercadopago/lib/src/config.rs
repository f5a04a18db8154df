//! Environment-driven client configuration.
//!
//! The library never reads `.env` files itself; binaries load them (e.g. with
//! `dotenvy`) before calling [`ClientConfig::from_env`].

use std::fmt;
use std::time::Duration;

use crate::client::{ApiClient, BASE_URL, DEFAULT_TIMEOUT};
use crate::error::{ApiError, ConfigError};

/// Bearer credential for the client. Required.
pub const ACCESS_TOKEN_ENV: &str = "MERCADOPAGO_ACCESS_TOKEN";
/// Base URL override. Defaults to [`BASE_URL`].
pub const BASE_URL_ENV: &str = "MERCADOPAGO_BASE_URL";
/// Request timeout in whole seconds. Defaults to 60.
pub const TIMEOUT_ENV: &str = "MERCADOPAGO_TIMEOUT_SECS";

/// Settings needed to build an [`ApiClient`].
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub access_token: String,
    pub timeout: Duration,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Creates a configuration for the production API with the default timeout.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            access_token: access_token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] if `MERCADOPAGO_ACCESS_TOKEN` is
    /// unset or blank, or [`ConfigError::InvalidTimeout`] if
    /// `MERCADOPAGO_TIMEOUT_SECS` is not a whole number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let access_token =
            read(ACCESS_TOKEN_ENV).ok_or_else(|| ConfigError::missing_env(ACCESS_TOKEN_ENV))?;
        let base_url = read(BASE_URL_ENV).unwrap_or_else(|| BASE_URL.to_string());
        let timeout = match read(TIMEOUT_ENV) {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidTimeout { value: raw })?,
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            base_url,
            access_token,
            timeout,
        })
    }

    /// Builds an [`ApiClient`] from this configuration.
    ///
    /// ## Errors
    ///
    /// Returns [`ApiError::Config`] if the base URL is invalid.
    pub fn build_client(&self) -> Result<ApiClient, ApiError> {
        ApiClient::builder(&self.base_url, &self.access_token)
            .timeout(self.timeout)
            .build()
    }
}
