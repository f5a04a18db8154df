//! HTTP method types for the MercadoPago endpoints.

use strum::{Display, EnumString};

/// HTTP methods used by the supported endpoints.
///
/// ## Examples
///
/// ```rust
/// use mercadopago_lib::RestMethod;
///
/// let method = RestMethod::Post;
/// assert!(method.has_body());
///
/// let parsed: RestMethod = "GET".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Get);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource.
    Get,
    /// HTTP POST - Create a resource or trigger an action.
    Post,
}

impl RestMethod {
    /// Returns `true` if requests with this method carry a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}
