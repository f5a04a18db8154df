//! Payment method catalog.
//!
//! ## Endpoints
//!
//! - `GET payment_methods` - lists every payment method the account can use

mod types;

pub use types::{Bin, CardNumber, PaymentMethod, PaymentMethods, SecurityCode, Settings};

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::method::RestMethod;

pub(crate) const PAYMENT_METHODS: Endpoint =
    Endpoint::new("payment_methods", RestMethod::Get, "payment_methods");

impl ApiClient {
    /// Retrieves the payment methods available to the account.
    ///
    /// ## Errors
    ///
    /// Returns [`ApiError::Response`] when the token is rejected, or any
    /// transport/decoding error from the shared request protocol.
    pub async fn payment_methods(&self) -> Result<PaymentMethods, ApiError> {
        self.execute(&PAYMENT_METHODS, None::<&()>, self.token())
            .await
    }
}
