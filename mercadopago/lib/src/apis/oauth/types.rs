//! OAuth client-credentials payloads.

use serde::{Deserialize, Serialize};

use crate::response::null_as_default;

/// Grant type sent by [`AccessTokenRequest::client_credentials`].
pub const CLIENT_CREDENTIALS: &str = "client_credentials";

/// Body of `POST oauth/token`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenRequest {
    pub client_secret: String,
    pub client_id: String,
    pub grant_type: String,
}

impl AccessTokenRequest {
    /// Creates a client-credentials grant for an application.
    pub fn client_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            client_secret: client_secret.into(),
            client_id: client_id.into(),
            grant_type: CLIENT_CREDENTIALS.to_string(),
        }
    }
}

/// An access token issued by the OAuth endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessToken {
    /// Bearer credential for subsequent API calls.
    #[serde(deserialize_with = "null_as_default")]
    pub access_token: String,
    /// Always `Bearer` in practice.
    #[serde(deserialize_with = "null_as_default")]
    pub token_type: String,
    /// Lifetime in seconds.
    #[serde(deserialize_with = "null_as_default")]
    pub expires_in: i64,
    /// Space-separated scopes.
    #[serde(deserialize_with = "null_as_default")]
    pub scope: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: i64,
    /// Present only for grants that issue one.
    pub refresh_token: Option<String>,
    pub public_key: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub live_mode: bool,
}
