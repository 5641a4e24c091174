//! HTTP transport for Wit.ai REST calls

use super::error::{Error, Result};
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Body, Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// Content type of every non-audio request
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and strips control characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.chars().count() > MAX_LOG_BODY_LENGTH {
        let head: String = body.chars().take(MAX_LOG_BODY_LENGTH).collect();
        format!("{}... [truncated, {} bytes total]", head, body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| c.is_control(), "")
}

/// Error body sent with a status >= 400.
///
/// Depending on the endpoint and API version the message is in `error` or in
/// `body`; newer versions add a machine-readable `code`.
#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    code: Option<Value>,
}

impl ErrorEnvelope {
    /// First non-empty of `error`, then `body`
    fn message(&self) -> Option<&str> {
        [&self.error, &self.body]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|m| !m.is_empty())
    }

    fn code(&self) -> Option<String> {
        match &self.code {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        }
    }
}

/// Turn a failed response body into an error
pub(crate) fn error_from_body(status: StatusCode, body: &[u8]) -> Error {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let message = envelope
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
            Error::Api {
                status,
                code: envelope.code(),
                message,
            }
        }
        Err(source) => Error::ErrorEnvelope { status, source },
    }
}

/// HTTP client wrapper for Wit.ai API calls
#[derive(Clone)]
pub struct WitHttpClient {
    client: Client,
    headers: HeaderMap,
    timeout: Duration,
}

impl WitHttpClient {
    /// Wrap a transport with the headers sent on every request
    pub fn new(client: Client, headers: HeaderMap, timeout: Duration) -> Self {
        Self {
            client,
            headers,
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send one request.
    ///
    /// Statuses >= 400 are turned into errors here; anything below is handed
    /// back as a live response whose body the caller decodes. Dropping the
    /// response releases the connection.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        content_type: &str,
        body: Option<Body>,
    ) -> Result<Response> {
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, url)
            .headers(self.headers.clone())
            .header(CONTENT_TYPE, content_type)
            .timeout(self.timeout);

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;

        let status = response.status();
        if status.as_u16() >= 400 {
            let body = response.bytes().await?;
            // Error bodies can echo user text; log a truncated copy only
            tracing::error!(
                "API error: {} - {}",
                status,
                sanitize_for_log(&String::from_utf8_lossy(&body))
            );
            return Err(error_from_body(status, &body));
        }

        Ok(response)
    }
}

/// Decode a success body into `T`
pub async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(Error::Decode)
}

/// Decode a body made of back-to-back JSON objects, keeping the last one.
///
/// A trailing fragment that fails to decode is ignored once at least one
/// object was read.
pub async fn decode_last_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.bytes().await?;
    last_json_object(&body)
}

pub(crate) fn last_json_object<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let mut last = None;

    for item in serde_json::Deserializer::from_slice(body).into_iter::<T>() {
        match item {
            Ok(value) => last = Some(value),
            Err(e) if last.is_some() => {
                tracing::warn!("Ignoring trailing fragment in streamed response: {}", e);
                break;
            }
            Err(e) => return Err(Error::Decode(e)),
        }
    }

    last.ok_or(Error::EmptyResponse)
}

/// Format a Wit.ai error for display
pub fn format_wit_error(error: &Error) -> String {
    match error {
        Error::Api {
            status, message, ..
        } => match *status {
            StatusCode::UNAUTHORIZED => {
                format!("Authentication failed ({message}). Check your Wit.ai token.")
            }
            StatusCode::FORBIDDEN => format!("Permission denied ({message})."),
            StatusCode::NOT_FOUND => format!("Resource not found ({message})."),
            StatusCode::TOO_MANY_REQUESTS => {
                format!("Rate limit exceeded ({message}). Please try again later.")
            }
            StatusCode::CONFLICT => format!("Resource conflict ({message})."),
            s if s.is_server_error() => {
                format!("Wit.ai service temporarily unavailable ({message}). Please try again.")
            }
            _ => format!("Request rejected: {message}"),
        },
        Error::Transport(e) if e.is_timeout() => {
            "Request timed out. Check your network connection and try again.".to_string()
        }
        Error::Transport(e) if e.is_connect() => {
            "Could not connect to Wit.ai. Check your network connection and base URL.".to_string()
        }
        other => other.to_string(),
    }
}
