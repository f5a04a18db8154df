//! HTTP client and network errors.

use std::time::Duration;

use thiserror::Error;

/// Errors from the HTTP transport layer.
///
/// These are returned as-is from `reqwest`; no response body has been read
/// when one of these occurs.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to a network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Request exceeded the client's configured timeout.
    #[error("Request timeout after {duration_ms}ms")]
    Timeout {
        /// The configured timeout in milliseconds.
        duration_ms: u64,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    /// Classifies a transport error, separating out client timeouts.
    pub(crate) fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                duration_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                source: err,
            }
        } else {
            Self::Request(err)
        }
    }

    /// Returns `true` if the request was aborted by the client timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Timeout { .. } => true,
            Self::Request(e) => e.is_timeout(),
        }
    }

    /// Returns `true` if the connection could not be established.
    pub fn is_connect(&self) -> bool {
        match self {
            Self::Timeout { source, .. } => source.is_connect(),
            Self::Request(e) => e.is_connect(),
        }
    }
}
