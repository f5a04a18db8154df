//! Client configuration errors.

use thiserror::Error;

/// Errors in client configuration.
///
/// These occur while building an [`ApiClient`](crate::ApiClient), before any
/// request is sent.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The URL parsed but cannot have paths joined onto it (e.g. `mailto:`).
    #[error("URL cannot be used as a base: {url}")]
    NotABase {
        /// The rejected URL.
        url: String,
    },

    /// Only `http` and `https` base URLs are supported.
    #[error("Unsupported URL scheme '{scheme}', expected http or https")]
    UnsupportedScheme {
        /// The rejected scheme.
        scheme: String,
    },

    /// A required environment variable is not set.
    #[error("Missing required environment variable: {name}")]
    MissingEnv {
        /// The name of the missing variable.
        name: &'static str,
    },

    /// The configured timeout is not a whole number of seconds.
    #[error("Invalid timeout '{value}': expected a whole number of seconds")]
    InvalidTimeout {
        /// The raw value that failed to parse.
        value: String,
    },
}

impl ConfigError {
    /// Creates a missing environment variable error.
    pub fn missing_env(name: &'static str) -> Self {
        Self::MissingEnv { name }
    }
}
