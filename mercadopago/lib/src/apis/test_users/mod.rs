//! Sandbox test-user creation.
//!
//! ## Endpoints
//!
//! - `POST users/test_user` - creates a test user in a marketplace site

mod types;

pub use types::{SiteId, TestUser, TestUserRequest};

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::method::RestMethod;

pub(crate) const TEST_USER: Endpoint =
    Endpoint::new("test_user", RestMethod::Post, "users/test_user").accept_json();

impl ApiClient {
    /// Creates a sandbox test user.
    ///
    /// Unlike every other endpoint this one authenticates with the
    /// `access_token` argument, not the client's own token: the caller names
    /// the integration the user is created under.
    ///
    /// ## Arguments
    ///
    /// * `access_token` - Bearer credential sent with this request only.
    /// * `site_id` - Marketplace code such as `MLA`, or a [`SiteId`].
    /// * `description` - Free-form label stored with the user.
    ///
    /// ## Errors
    ///
    /// Returns [`ApiError::Response`] for an unknown site id or a rejected
    /// token, or any transport/decoding error from the shared request protocol.
    pub async fn get_test_user(
        &self,
        access_token: &str,
        site_id: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<TestUser, ApiError> {
        let request = TestUserRequest {
            site_id: site_id.into(),
            description: description.into(),
        };
        self.execute(&TEST_USER, Some(&request), access_token).await
    }
}
