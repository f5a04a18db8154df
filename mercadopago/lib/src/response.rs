//! Response classification and decoding.
//!
//! Every endpoint funnels its response through the same two steps: the
//! status code decides whether the body is a payload or an
//! [`ErrorResponse`], and the body is then decoded permissively.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::error::{ApiError, ErrorResponse};

/// Returns `true` for status codes the API uses to signal failure.
///
/// Anything below 200 or at/above 400 is a failure; 3xx counts as success.
pub(crate) fn is_failure(status: u16) -> bool {
    !(200..400).contains(&status)
}

/// Maps a failure response body to an error.
///
/// Undecodable bodies collapse into [`ApiError::UnknownStatus`]; the decode
/// error itself is discarded.
pub(crate) fn decode_failure(status: u16, body: &[u8]) -> ApiError {
    match ErrorResponse::from_body(body, status) {
        Some(err) => ApiError::Response(err),
        None => ApiError::UnknownStatus { status },
    }
}

/// Decodes a success response body into `T`.
pub(crate) fn decode_success<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|_| ApiError::ParseResponse)
}

/// Renders a value as JSON indented with four spaces.
///
/// ## Errors
///
/// Returns [`ApiError::Serialize`] if the value cannot be encoded.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer).map_err(ApiError::Serialize)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Deserializes `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
