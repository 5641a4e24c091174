//! Wit.ai Client
//!
//! Holds the connection configuration and the typed REST helpers every
//! resource operation goes through.

use super::error::{Error, Result};
use super::http::{self, WitHttpClient, JSON_CONTENT_TYPE};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Body, Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::time::Duration;
use url::Url;

/// API version sent in the `Accept` header unless overridden
pub const DEFAULT_VERSION: &str = "20200513";

/// Base URL of the hosted API
pub const DEFAULT_API_BASE: &str = "https://api.wit.ai";

/// Request deadline unless overridden
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_USER_AGENT: &str = concat!("witai-rs/", env!("CARGO_PKG_VERSION"));

/// Main Wit.ai client
///
/// Configuration is fixed at construction, so a client can be cloned and
/// shared between tasks freely.
#[derive(Clone)]
pub struct WitClient {
    api_base: String,
    version: String,
    http: WitHttpClient,
}

impl fmt::Debug for WitClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WitClient")
            .field("api_base", &self.api_base)
            .field("version", &self.version)
            .field("timeout", &self.http.timeout())
            .finish_non_exhaustive()
    }
}

impl WitClient {
    /// Create a client for the default API version
    pub fn new(token: &str) -> Result<Self> {
        Self::builder(token).build()
    }

    /// Create a client for a specific API version
    pub fn with_version(token: &str, version: &str) -> Result<Self> {
        Self::builder(token).version(version).build()
    }

    pub fn builder(token: impl Into<String>) -> WitClientBuilder {
        WitClientBuilder::new(token)
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn timeout(&self) -> Duration {
        self.http.timeout()
    }

    /// Build a full API URL from a path starting with `/`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// Perform one authenticated call and hand back the live response
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        content_type: &str,
        body: Option<Body>,
    ) -> Result<Response> {
        self.http
            .request(method, &self.url(path), content_type, body)
            .await
    }

    /// Send `body` as JSON and hand back the live response
    pub async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Response> {
        let payload = serde_json::to_vec(body).map_err(Error::Encode)?;
        self.request(method, path, JSON_CONTENT_TYPE, Some(Body::from(payload)))
            .await
    }

    /// Make a GET request and decode the response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .request(Method::GET, path, JSON_CONTENT_TYPE, None)
            .await?;
        http::decode_json(response).await
    }

    /// Make a POST request with a JSON body and decode the response
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(Method::POST, path, body).await?;
        http::decode_json(response).await
    }

    /// Make a PUT request with a JSON body and decode the response
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(Method::PUT, path, body).await?;
        http::decode_json(response).await
    }

    /// Make a DELETE request, discarding the response body
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.request(Method::DELETE, path, JSON_CONTENT_TYPE, None)
            .await
            .map(drop)
    }

    /// Make a DELETE request with a JSON body and decode the response
    pub async fn delete_with<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(Method::DELETE, path, body).await?;
        http::decode_json(response).await
    }
}

/// Builder for [`WitClient`]
pub struct WitClientBuilder {
    token: String,
    version: String,
    api_base: String,
    timeout: Duration,
    user_agent: String,
    http_client: Option<Client>,
}

impl WitClientBuilder {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            version: DEFAULT_VERSION.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_client: None,
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Point the client at another deployment or a mock server
    pub fn base_url(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sent with every request, also through a caller-provided transport
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use a caller-provided transport (proxies, custom TLS, ...).
    /// The configured timeout still applies to every request.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<WitClient> {
        let api_base = self.api_base.trim_end_matches('/').to_string();
        let parsed = Url::parse(&api_base)
            .map_err(|e| Error::Config(format!("invalid base URL {api_base:?}: {e}")))?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "base URL must be an http(s) URL, got {api_base:?}"
            )));
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|_| Error::Config("token is not a valid header value".to_string()))?;
        auth.set_sensitive(true);

        let accept = HeaderValue::from_str(&format!("application/vnd.wit.{}+json", self.version))
            .map_err(|_| {
                Error::Config(format!("version {:?} is not a valid header value", self.version))
            })?;

        let user_agent = HeaderValue::from_str(&self.user_agent).map_err(|_| {
            Error::Config(format!("user agent {:?} is not a valid header value", self.user_agent))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, accept);
        headers.insert(USER_AGENT, user_agent);

        let client = match self.http_client {
            Some(client) => client,
            None => Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| Error::Config(format!("failed to create HTTP client: {e}")))?,
        };

        Ok(WitClient {
            api_base,
            version: self.version,
            http: WitHttpClient::new(client, headers, self.timeout),
        })
    }
}

/// Escape an identifier for use as a single path segment
pub fn path_segment(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}

/// Negative paging values become 0; 0 lets the server pick its default
pub fn clamp_page(value: i64) -> u64 {
    value.max(0).unsigned_abs()
}

/// Append clamped `limit`/`offset` parameters to a collection path
pub fn paginated(path: &str, limit: i64, offset: i64) -> String {
    format!(
        "{}?limit={}&offset={}",
        path,
        clamp_page(limit),
        clamp_page(offset)
    )
}
