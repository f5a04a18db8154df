//! Card tokenization payloads.

use serde::{Deserialize, Serialize};

use crate::response::null_as_default;

/// Raw card data submitted for tokenization.
///
/// No client-side validation is performed; the API rejects bad card numbers
/// or expirations with an [`ErrorResponse`](crate::ErrorResponse).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTokenRequest {
    /// Full card number (PAN).
    pub card_number: String,
    /// Expiration month, 1-12.
    pub expiration_month: u32,
    /// Four-digit expiration year.
    pub expiration_year: u32,
    /// CVV / security code.
    pub security_code: String,
    /// Cardholder details.
    pub cardholder: CardholderName,
}

impl CardTokenRequest {
    /// Creates a request with an empty cardholder name.
    pub fn new(
        card_number: impl Into<String>,
        expiration_month: u32,
        expiration_year: u32,
        security_code: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            expiration_month,
            expiration_year,
            security_code: security_code.into(),
            cardholder: CardholderName::default(),
        }
    }

    /// Sets the name printed on the card.
    pub fn with_cardholder_name(mut self, name: impl Into<String>) -> Self {
        self.cardholder.name = name.into();
        self
    }
}

/// Cardholder block of a tokenization request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardholderName {
    /// Name as printed on the card.
    pub name: String,
}

/// A tokenized card, as returned by `POST v1/card_tokens`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardToken {
    /// The card token, used in place of card data for payments.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub first_six_digits: String,
    #[serde(deserialize_with = "null_as_default")]
    pub expiration_month: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub expiration_year: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub last_four_digits: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cardholder: Cardholder,
    /// Token status, e.g. `active`.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date_created: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date_last_updated: String,
    /// When the token stops being usable.
    #[serde(deserialize_with = "null_as_default")]
    pub date_due: String,
    #[serde(deserialize_with = "null_as_default")]
    pub luhn_validation: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub live_mode: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub require_esc: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub card_number_length: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub security_code_length: u32,
}

/// Cardholder block of a tokenized card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cardholder {
    pub name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub identification: Identification,
}

/// Identity document attached to a cardholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identification {
    /// Document type, e.g. `DNI`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub number: Option<String>,
}
