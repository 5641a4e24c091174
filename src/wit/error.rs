//! Wit.ai client errors

use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used by every client operation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the Wit.ai client.
///
/// Nothing is retried; each variant reaches the caller exactly as it happened.
#[derive(Debug, Error)]
pub enum Error {
    /// The client could not be configured or the request could not be built
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// The request body could not be serialized
    #[error("unable to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// DNS, connection, timeout or body read failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a status >= 400 and a readable error message
    #[error("unable to make a request. error: {message}")]
    Api {
        status: StatusCode,
        code: Option<String>,
        message: String,
    },

    /// The API answered with a status >= 400 and an unreadable error body
    #[error("unable to decode error message ({status}): {source}")]
    ErrorEnvelope {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    /// The success body did not match the expected schema
    #[error("unable to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// A streamed response ended without a single JSON object
    #[error("response body contained no JSON object")]
    EmptyResponse,
}

impl Error {
    /// HTTP status attached to server-side failures
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } | Error::ErrorEnvelope { status, .. } => Some(*status),
            Error::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// True when the request never got an answer before the deadline
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_timeout())
    }
}
