//! Failure body returned by the MercadoPago API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::response::null_as_default;

/// Uniform error body for any non-success response.
///
/// The API reports failures as
/// `{"message": "...", "error": "...", "status": 400, "cause": [...]}`.
/// A decoded body doubles as the error value handed back to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Error)]
#[error("Status code: {status} - Error: {error} - Message: {message}")]
#[serde(default)]
pub struct ErrorResponse {
    /// Human-readable description.
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    /// Machine-readable category, e.g. `invalid_data`.
    #[serde(deserialize_with = "null_as_default")]
    pub error: String,
    /// HTTP status code.
    #[serde(deserialize_with = "null_as_default")]
    pub status: u16,
    /// Opaque detail objects, in the order the server sent them.
    #[serde(deserialize_with = "null_as_default")]
    pub cause: Vec<serde_json::Value>,
}

impl ErrorResponse {
    /// Decodes a failure body, filling in `status` from the transport when
    /// the body leaves it out.
    ///
    /// Returns `None` when the body is not an error object.
    pub(crate) fn from_body(body: &[u8], status: u16) -> Option<Self> {
        let mut decoded: Self = serde_json::from_slice(body).ok()?;
        if decoded.status == 0 {
            decoded.status = status;
        }
        Some(decoded)
    }
}
