//! Credit-card tokenization.
//!
//! ## Endpoints
//!
//! - `POST v1/card_tokens` - exchanges raw card data for a card token

mod types;

pub use types::{CardToken, CardTokenRequest, CardholderName, Cardholder, Identification};

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::method::RestMethod;

pub(crate) const CARD_TOKENS: Endpoint =
    Endpoint::new("card_tokens", RestMethod::Post, "v1/card_tokens");

impl ApiClient {
    /// Tokenizes a credit card.
    ///
    /// The returned [`CardToken::id`] is what later payment calls use in place
    /// of the card data.
    ///
    /// ## Errors
    ///
    /// Returns [`ApiError::Response`] when the API rejects the card, or any
    /// transport/decoding error from the shared request protocol.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use mercadopago_lib::apis::card_tokens::CardTokenRequest;
    ///
    /// let request = CardTokenRequest::new("4111111111111111", 12, 2030, "123");
    /// let token = client.get_card_token(&request).await?;
    /// println!("token: {}", token.id);
    /// ```
    pub async fn get_card_token(&self, request: &CardTokenRequest) -> Result<CardToken, ApiError> {
        self.execute(&CARD_TOKENS, Some(request), self.token()).await
    }
}
