//! Payment method catalog types.

use serde::{Deserialize, Serialize};

use crate::response::null_as_default;

/// Response of `GET payment_methods`.
pub type PaymentMethods = Vec<PaymentMethod>;

/// One payment method available to the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentMethod {
    /// Identifier, e.g. `visa` or `pix`.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Category, e.g. `credit_card`, `ticket`, `bank_transfer`.
    #[serde(deserialize_with = "null_as_default")]
    pub payment_type_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub secure_thumbnail: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail: String,
    /// `supported` or `unsupported`.
    #[serde(deserialize_with = "null_as_default")]
    pub deferred_capture: String,
    /// Card-number and security-code rules, one entry per BIN range.
    #[serde(deserialize_with = "null_as_default")]
    pub settings: Vec<Settings>,
    #[serde(deserialize_with = "null_as_default")]
    pub additional_info_needed: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub min_allowed_amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_allowed_amount: f64,
    /// Minutes until the payment is credited.
    #[serde(deserialize_with = "null_as_default")]
    pub accreditation_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub financial_institutions: Vec<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub processing_modes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(deserialize_with = "null_as_default")]
    pub card_number: CardNumber,
    #[serde(deserialize_with = "null_as_default")]
    pub bin: Bin,
    #[serde(deserialize_with = "null_as_default")]
    pub security_code: SecurityCode,
}

/// BIN patterns that select this settings entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bin {
    #[serde(deserialize_with = "null_as_default")]
    pub pattern: String,
    #[serde(deserialize_with = "null_as_default")]
    pub exclusion_pattern: String,
    #[serde(deserialize_with = "null_as_default")]
    pub installments_pattern: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardNumber {
    #[serde(deserialize_with = "null_as_default")]
    pub length: u32,
    /// Checksum algorithm, usually `standard` (Luhn).
    #[serde(deserialize_with = "null_as_default")]
    pub validation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityCode {
    /// `mandatory` or `optional`.
    #[serde(deserialize_with = "null_as_default")]
    pub mode: String,
    #[serde(deserialize_with = "null_as_default")]
    pub length: u32,
    /// `back` or `front`.
    #[serde(deserialize_with = "null_as_default")]
    pub card_location: String,
}
