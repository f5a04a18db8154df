//! Sandbox test-user payloads.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::response::null_as_default;

/// MercadoPago marketplace a test user is created in.
///
/// Site ids are plain strings on the wire; this enum only names the known
/// ones. Any `impl Into<String>` is accepted where a site id is expected.
///
/// ## Examples
///
/// ```rust
/// use mercadopago_lib::apis::test_users::SiteId;
///
/// assert_eq!(SiteId::Argentina.to_string(), "MLA");
/// assert_eq!("mlb".parse::<SiteId>().unwrap(), SiteId::Brazil);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum SiteId {
    /// Mercado Libre Perú.
    #[strum(serialize = "MPE")]
    Peru,
    /// Mercado Libre Uruguay.
    #[strum(serialize = "MLU")]
    Uruguay,
    /// Mercado Libre Argentina.
    #[strum(serialize = "MLA")]
    Argentina,
    /// Mercado Libre Chile.
    #[strum(serialize = "MLC")]
    Chile,
    /// Mercado Libre Colombia.
    #[strum(serialize = "MCO")]
    Colombia,
    /// Mercado Libre Brasil.
    #[strum(serialize = "MLB")]
    Brazil,
    /// Mercado Libre México.
    #[strum(serialize = "MLM")]
    Mexico,
}

impl From<SiteId> for String {
    fn from(site: SiteId) -> Self {
        site.as_ref().to_string()
    }
}

/// Body of `POST users/test_user`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestUserRequest {
    pub site_id: String,
    pub description: String,
}

/// A sandbox user whose credentials can drive the other endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestUser {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub nickname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub password: String,
    #[serde(deserialize_with = "null_as_default")]
    pub site_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub site_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date_created: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date_last_updated: String,
}
