//! Static endpoint descriptors.
//!
//! Each supported MercadoPago endpoint is a `const` [`Endpoint`] describing
//! its method, relative path and header policy. The request protocol in
//! [`ApiClient`](crate::ApiClient) is driven entirely by these values.

use url::Url;

use crate::method::RestMethod;

/// Where an endpoint's relative path is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRoot {
    /// Joined directly onto the client's base URL.
    Base,
    /// Joined onto the base URL with a trailing `v1/` segment removed.
    Unversioned,
}

/// A single MercadoPago REST endpoint.
///
/// ## Examples
///
/// ```rust
/// use mercadopago_lib::{Endpoint, RestMethod};
/// use url::Url;
///
/// const TOKEN: Endpoint = Endpoint::new("oauth_token", RestMethod::Post, "oauth/token")
///     .unversioned()
///     .accept_json();
///
/// let base = Url::parse("https://api.mercadopago.com/v1/").unwrap();
/// let url = TOKEN.full_url(&base).unwrap();
/// assert_eq!(url.as_str(), "https://api.mercadopago.com/oauth/token");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    id: &'static str,
    method: RestMethod,
    path: &'static str,
    root: PathRoot,
    accept_json: bool,
}

impl Endpoint {
    /// Creates an endpoint rooted at the base URL without a JSON `Accept` header.
    ///
    /// Such requests carry reqwest's default `Accept: */*`.
    ///
    /// `path` must be relative (no leading `/`) so it extends the base path.
    pub const fn new(id: &'static str, method: RestMethod, path: &'static str) -> Self {
        Self {
            id,
            method,
            path,
            root: PathRoot::Base,
            accept_json: false,
        }
    }

    /// Anchors the path at the base URL minus its trailing `v1/` segment.
    pub const fn unversioned(self) -> Self {
        Self {
            root: PathRoot::Unversioned,
            ..self
        }
    }

    /// Sends `Accept: application/json; charset=utf-8` with requests.
    pub const fn accept_json(self) -> Self {
        Self {
            accept_json: true,
            ..self
        }
    }

    /// Returns the endpoint's identifier, used in tracing spans.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Returns the HTTP method for this endpoint.
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// Returns the relative path for this endpoint.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Returns where the path is anchored.
    pub fn root(&self) -> PathRoot {
        self.root
    }

    /// Returns `true` if requests carry a JSON `Accept` header.
    pub fn accepts_json(&self) -> bool {
        self.accept_json
    }

    /// Resolves the absolute request URL against a base URL.
    ///
    /// The base must end with `/` for the path to extend it rather than
    /// replace its last segment; [`ApiClient`](crate::ApiClient) guarantees this.
    pub fn full_url(&self, base_url: &Url) -> Result<Url, url::ParseError> {
        match self.root {
            PathRoot::Base => base_url.join(self.path),
            PathRoot::Unversioned => strip_version(base_url).join(self.path),
        }
    }
}

/// Removes a trailing `v1/` path segment, leaving other bases untouched.
fn strip_version(base_url: &Url) -> Url {
    let mut root = base_url.clone();
    if let Some(parent) = base_url.path().strip_suffix("/v1/") {
        root.set_path(&format!("{parent}/"));
    }
    root
}
