//! OAuth client-credentials exchange.
//!
//! Client id and secret come from the application's production credentials
//! in the MercadoPago developer panel; test credentials are not accepted.
//!
//! ## Endpoints
//!
//! - `POST oauth/token` - resolved against the base URL without its `v1/` segment

mod types;

pub use types::{AccessToken, AccessTokenRequest, CLIENT_CREDENTIALS};

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::method::RestMethod;

pub(crate) const OAUTH_TOKEN: Endpoint =
    Endpoint::new("oauth_token", RestMethod::Post, "oauth/token")
        .unversioned()
        .accept_json();

impl ApiClient {
    /// Exchanges application credentials for an access token.
    ///
    /// ## Errors
    ///
    /// Returns [`ApiError::Response`] when the credentials are rejected
    /// (e.g. `invalid_client`), or any transport/decoding error from the
    /// shared request protocol.
    pub async fn get_access_token(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<AccessToken, ApiError> {
        let request = AccessTokenRequest::client_credentials(client_id, client_secret);
        self.execute(&OAUTH_TOKEN, Some(&request), self.token()).await
    }
}
