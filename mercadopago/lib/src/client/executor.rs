//! Request execution with tracing instrumentation.
//!
//! This module provides the [`ApiClient`] struct. Every endpoint method funnels
//! through [`ApiClient::execute`], which owns the shared request protocol:
//! encode, send with explicit headers, classify by status, decode.

use std::fmt;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{Span, debug, instrument};
use url::Url;

use crate::endpoint::Endpoint;
use crate::error::{ApiError, ClientError, ConfigError};
use crate::response::{decode_failure, decode_success, is_failure};

/// Production base URL of the MercadoPago API.
pub const BASE_URL: &str = "https://api.mercadopago.com/";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Value used for both `Content-Type` and `Accept`.
const JSON_MEDIA_TYPE: &str = "application/json; charset=utf-8";

/// Builder for configuring an [`ApiClient`].
#[derive(Debug)]
pub struct ApiClientBuilder {
    base_url: String,
    token: String,
    timeout: Duration,
}

impl ApiClientBuilder {
    fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the request timeout.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    ///
    /// let client = ApiClient::builder(BASE_URL, token)
    ///     .timeout(Duration::from_secs(10))
    ///     .build()?;
    /// ```
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the [`ApiClient`].
    ///
    /// ## Errors
    ///
    /// Returns [`ApiError::Config`] if the base URL is not an absolute
    /// http(s) URL, or [`ApiError::Client`] if the HTTP client cannot be
    /// constructed.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let base_url = parse_base_url(&self.base_url)?;

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;

        Ok(ApiClient {
            client,
            base_url,
            token: self.token,
            timeout: self.timeout,
        })
    }
}

/// Parses a base URL and normalizes it to end with `/`.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw)?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::NotABase {
            url: raw.to_string(),
        });
    }
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme {
            scheme: url.scheme().to_string(),
        });
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Async client for the MercadoPago REST API.
///
/// The client is immutable after construction and safe to share between
/// tasks; cloning it shares the underlying connection pool.
///
/// ## Examples
///
/// ```rust,ignore
/// use mercadopago_lib::{ApiClient, BASE_URL};
///
/// let client = ApiClient::new(BASE_URL, "APP_USR-xxx")?;
/// let token = client.get_access_token("client-id", "client-secret").await?;
/// println!("expires in {}s", token.expires_in);
/// ```
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    token: String,
    timeout: Duration,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ApiClient {
    /// Creates a new builder for configuring an API client.
    ///
    /// ## Arguments
    ///
    /// * `base_url` - Absolute http(s) URL all endpoint paths are joined onto.
    /// * `token` - Bearer credential sent with every request.
    pub fn builder(base_url: impl Into<String>, token: impl Into<String>) -> ApiClientBuilder {
        ApiClientBuilder::new(base_url, token)
    }

    /// Creates a new API client with the default timeout.
    ///
    /// ## Errors
    ///
    /// Returns [`ApiError::Config`] if `base_url` cannot be parsed as an
    /// absolute http(s) URL.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ApiError> {
        Self::builder(base_url, token).build()
    }

    /// Returns the normalized base URL for this client.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    /// Executes one endpoint round trip.
    ///
    /// ## Arguments
    ///
    /// * `endpoint` - The endpoint descriptor to call.
    /// * `body` - Request payload, encoded as JSON when present.
    /// * `token` - Bearer credential for the `Authorization` header.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The body cannot be encoded (no request is sent)
    /// - The transport fails (network, DNS, timeout)
    /// - The server answers with a status outside `200..400`
    /// - A success body does not decode into `T`
    #[instrument(
        name = "mercadopago_request",
        skip_all,
        fields(
            endpoint = endpoint.id(),
            http.method = %endpoint.method(),
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub(crate) async fn execute<B, T>(
        &self,
        endpoint: &Endpoint,
        body: Option<&B>,
        token: &str,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug_assert_eq!(
            body.is_some(),
            endpoint.method().has_body(),
            "{} request body presence must match its method",
            endpoint.id()
        );

        let payload = body
            .map(|b| serde_json::to_vec(b))
            .transpose()
            .map_err(ApiError::Serialize)?;

        let full_url = endpoint
            .full_url(&self.base_url)
            .map_err(ConfigError::InvalidUrl)?;
        Span::current().record("http.url", full_url.as_str());

        let mut request = self
            .client
            .request(endpoint.method().to_reqwest(), full_url)
            .header(CONTENT_TYPE, JSON_MEDIA_TYPE)
            .header(AUTHORIZATION, format!("Bearer {token}"));

        // reqwest fills in `Accept: */*` when none is set
        if endpoint.accepts_json() {
            request = request.header(ACCEPT, JSON_MEDIA_TYPE);
        }
        if let Some(payload) = payload {
            request = request.body(payload);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::from_transport(e, self.timeout))?;

        let status = response.status().as_u16();
        Span::current().record("http.status_code", status);

        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::from_transport(e, self.timeout))?;

        if is_failure(status) {
            let otel_status = if status >= 500 { "ERROR" } else { "UNSET" };
            Span::current().record("otel.status_code", otel_status);
            debug!(status, "request rejected");
            return Err(decode_failure(status, &body));
        }

        Span::current().record("otel.status_code", "OK");
        debug!(status, "request completed");

        decode_success(&body)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use super::*;
    use crate::method::RestMethod;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
    struct TestResponse {
        id: u64,
        name: String,
    }

    const GET_ITEM: Endpoint = Endpoint::new("get_item", RestMethod::Get, "items/1");
    const CREATE_ITEM: Endpoint =
        Endpoint::new("create_item", RestMethod::Post, "items").accept_json();

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(format!("{}/", server.uri()), "client-token").unwrap()
    }

    #[test]
    fn test_new_rejects_relative_url() {
        let result = ApiClient::new("hhttpp//asdasd", "");
        assert!(matches!(
            result,
            Err(ApiError::Config(ConfigError::InvalidUrl(_)))
        ));
    }

    #[test]
    fn test_new_rejects_empty_url() {
        assert!(matches!(
            ApiClient::new("", "token"),
            Err(ApiError::Config(ConfigError::InvalidUrl(_)))
        ));
    }

    #[test]
    fn test_new_rejects_non_base_url() {
        assert!(matches!(
            ApiClient::new("mailto:dev@example.test", "token"),
            Err(ApiError::Config(ConfigError::NotABase { .. }))
        ));
    }

    #[test]
    fn test_new_rejects_unsupported_scheme() {
        assert!(matches!(
            ApiClient::new("ftp://example.test/", "token"),
            Err(ApiError::Config(ConfigError::UnsupportedScheme { .. }))
        ));
    }

    #[test]
    fn test_new_accepts_production_url() {
        let client = ApiClient::new(BASE_URL, "").unwrap();
        assert_eq!(client.base_url().as_str(), BASE_URL);
        assert_eq!(client.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = ApiClient::new("https://example.test/v1", "token").unwrap();
        assert_eq!(client.base_url().as_str(), "https://example.test/v1/");
    }

    #[test]
    fn test_custom_timeout() {
        let client = ApiClient::builder("https://example.test/", "token")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = ApiClient::new("https://example.test/", "APP_USR-secret").unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("APP_USR-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiClient>();
    }

    #[tokio::test]
    async fn test_execute_get_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items/1"))
            .and(header("authorization", "Bearer client-token"))
            .and(header("content-type", "application/json; charset=utf-8"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                id: 1,
                name: "Alice".to_string(),
            }))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result: TestResponse = client
            .execute(&GET_ITEM, None::<&()>, client.token())
            .await
            .unwrap();

        assert_eq!(result.id, 1);
        assert_eq!(result.name, "Alice");
    }

    #[tokio::test]
    async fn test_execute_post_sends_body_and_accept() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/items"))
            .and(header("accept", "application/json; charset=utf-8"))
            .and(body_json(serde_json::json!({"name": "Bob"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(TestResponse {
                id: 2,
                name: "Bob".to_string(),
            }))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let body = serde_json::json!({"name": "Bob"});
        let result: TestResponse = client
            .execute(&CREATE_ITEM, Some(&body), "other-token")
            .await
            .unwrap();

        assert_eq!(result.id, 2);
    }

    #[cfg(debug_assertions)]
    #[tokio::test]
    #[should_panic(expected = "get_item request body presence must match its method")]
    async fn test_execute_rejects_body_on_get() {
        let client = ApiClient::new("http://127.0.0.1:9/", "client-token").unwrap();
        let body = serde_json::json!({"name": "Alice"});
        let _: Result<TestResponse, _> = client
            .execute(&GET_ITEM, Some(&body), client.token())
            .await;
    }

    #[tokio::test]
    async fn test_execute_leaves_accept_to_transport() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                id: 1,
                name: "Alice".to_string(),
            }))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let _: TestResponse = client
            .execute(&GET_ITEM, None::<&()>, client.token())
            .await
            .unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let accept = requests[0].headers.get("accept").and_then(|v| v.to_str().ok());
        assert_eq!(accept, Some("*/*"));
    }

    #[tokio::test]
    async fn test_execute_error_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items/1"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "message": "item not found",
                "error": "not_found",
                "status": 404,
                "cause": []
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result: Result<TestResponse, _> = client
            .execute(&GET_ITEM, None::<&()>, client.token())
            .await;

        let err = result.unwrap_err();
        let body = err.error_response().unwrap();
        assert_eq!(body.message, "item not found");
        assert_eq!(body.error, "not_found");
        assert_eq!(body.status, 404);
        assert_eq!(err.status_code(), Some(404));
    }

    #[tokio::test]
    async fn test_execute_unknown_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items/1"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result: Result<TestResponse, _> = client
            .execute(&GET_ITEM, None::<&()>, client.token())
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, ApiError::UnknownStatus { status: 500 }));
        assert_eq!(err.to_string(), "unknown error, status code: 500");
    }

    #[tokio::test]
    async fn test_execute_json_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result: Result<TestResponse, _> = client
            .execute(&GET_ITEM, None::<&()>, client.token())
            .await;

        assert!(matches!(result, Err(ApiError::ParseResponse)));
    }

    #[tokio::test]
    async fn test_execute_serialize_error_skips_network() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        // JSON object keys must be strings
        let mut body = BTreeMap::new();
        body.insert((1u8, 2u8), "tuple keys");

        let client = client_for(&mock_server);
        let result: Result<TestResponse, _> = client
            .execute(&CREATE_ITEM, Some(&body), client.token())
            .await;

        assert!(matches!(result, Err(ApiError::Serialize(_))));
    }

    #[tokio::test]
    async fn test_execute_connection_refused() {
        // Bind then release a port so nothing is listening on it
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = ApiClient::new(format!("http://127.0.0.1:{port}/"), "token").unwrap();
        let result: Result<TestResponse, _> = client
            .execute(&GET_ITEM, None::<&()>, client.token())
            .await;

        match result {
            Err(ApiError::Client(e)) => assert!(e.is_connect()),
            other => panic!("Expected transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_execute_client_timeout() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items/1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(TestResponse {
                        id: 1,
                        name: "Slow".to_string(),
                    })
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&mock_server)
            .await;

        let client = ApiClient::builder(format!("{}/", mock_server.uri()), "token")
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();

        let result: Result<TestResponse, _> = client
            .execute(&GET_ITEM, None::<&()>, client.token())
            .await;

        let err = result.unwrap_err();
        assert!(err.is_timeout(), "expected timeout, got {err:?}");
        assert!(matches!(
            err,
            ApiError::Client(ClientError::Timeout {
                duration_ms: 100,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_execute_caller_deadline_aborts() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let started = std::time::Instant::now();
        let result = tokio::time::timeout(
            Duration::from_millis(100),
            client.execute::<(), TestResponse>(&GET_ITEM, None, client.token()),
        )
        .await;

        assert!(result.is_err());
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_client_usable_after_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                id: 7,
                name: "Recovered".to_string(),
            }))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let first: Result<TestResponse, _> = client
            .execute(&GET_ITEM, None::<&()>, client.token())
            .await;
        assert!(matches!(first, Err(ApiError::UnknownStatus { status: 502 })));

        let second: TestResponse = client
            .execute(&GET_ITEM, None::<&()>, client.token())
            .await
            .unwrap();
        assert_eq!(second.id, 7);
    }

    #[tokio::test]
    async fn test_concurrent_calls_share_client() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                id: 1,
                name: "Shared".to_string(),
            }))
            .expect(8)
            .mount(&mock_server)
            .await;

        let client = Arc::new(client_for(&mock_server));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let client = Arc::clone(&client);
                tokio::spawn(async move {
                    client
                        .execute::<(), TestResponse>(&GET_ITEM, None, client.token())
                        .await
                })
            })
            .collect();

        for handle in handles {
            let result = handle.await.unwrap().unwrap();
            assert_eq!(result.name, "Shared");
        }
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn test_execute_emits_tracing_events() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/items/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                id: 1,
                name: "Traced".to_string(),
            }))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let _: TestResponse = client
            .execute(&GET_ITEM, None::<&()>, client.token())
            .await
            .unwrap();

        assert!(logs_contain("mercadopago_request"));
        assert!(logs_contain("request completed"));
        assert!(logs_contain("get_item"));
        assert!(!logs_contain("client-token"));
    }
}
