//! Top-level API error type.

use super::{ClientError, ConfigError, ErrorResponse};
use thiserror::Error;

/// Top-level error type for all MercadoPago operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use mercadopago_lib::ApiError;
///
/// match client.payment_methods().await {
///     Ok(methods) => println!("{} methods", methods.len()),
///     Err(ApiError::Response(e)) => eprintln!("rejected: {e}"),
///     Err(e) => eprintln!("request failed: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be encoded. No request was sent.
    #[error("Failed to encode request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Transport errors (network, DNS, timeout).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The server rejected the request with a decodable error body.
    #[error(transparent)]
    Response(#[from] ErrorResponse),

    /// The server rejected the request and the body was not an error object.
    #[error("unknown error, status code: {status}")]
    UnknownStatus {
        /// The HTTP status code returned.
        status: u16,
    },

    /// A success response whose body did not match the expected shape.
    #[error("cannot parse response")]
    ParseResponse,

    /// Invalid client configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// Returns the HTTP status code when the server answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.status),
            Self::UnknownStatus { status } => Some(*status),
            Self::Client(ClientError::Request(e)) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if the request was aborted by the client timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Client(e) if e.is_timeout())
    }

    /// Returns the decoded server error body, if there is one.
    pub fn error_response(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Response(e) => Some(e),
            _ => None,
        }
    }
}
