//! Wit.ai Message and Speech
//!
//! Extracting meaning from text (`/message`) or audio (`/speech`).

use super::client::WitClient;
use super::entities::null_as_empty;
use super::error::{Error, Result};
use super::http;
use reqwest::{Body, Method};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// What to parse, and how
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageRequest {
    /// Text to parse; ignored by `/speech` beyond being echoed as `q`
    pub query: String,
    /// Maximum number of intents/entities/traits to return per kind
    pub n: Option<u32>,
    /// App tag to parse with instead of the live version
    pub tag: Option<String>,
    pub context: Option<MessageContext>,
}

impl MessageRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// Context used to resolve relative or ambiguous values
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MessageContext {
    /// RFC 3339 local time of the user, e.g. `2014-10-30T12:18:45-07:00`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reference_time: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub timezone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coords: Option<MessageCoords>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MessageCoords {
    pub lat: f32,
    pub long: f32,
}

/// Audio to send to `/speech`
#[derive(Debug)]
pub struct Speech {
    pub body: Body,
    /// e.g. `audio/raw;encoding=unsigned-integer;bits=16;rate=8000;endian=big`
    pub content_type: String,
}

impl Speech {
    pub fn new(body: impl Into<Body>, content_type: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            content_type: content_type.into(),
        }
    }
}

/// What the API understood
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(rename = "msg_id", default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub intents: Vec<MessageIntent>,
    /// Keyed by `name:role`
    #[serde(default)]
    pub entities: HashMap<String, Vec<MessageEntity>>,
    #[serde(default)]
    pub traits: HashMap<String, Vec<MessageTrait>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageIntent {
    pub id: String,
    pub name: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageEntity {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub end: u32,
    #[serde(default)]
    pub body: String,
    /// Resolved value; a string, number or object depending on the entity
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageTrait {
    #[serde(default)]
    pub id: String,
    pub value: String,
    #[serde(default)]
    pub confidence: f64,
}

/// Build the query string for `/message` and `/speech`.
///
/// Parameters always come in the order `q`, `n`, `tag`, `context`; every value
/// is percent-escaped, and the context is serialized to JSON first.
pub fn build_parse_query(req: &MessageRequest) -> Result<String> {
    let mut query = format!("?q={}", urlencoding::encode(&req.query));

    if let Some(n) = req.n.filter(|n| *n != 0) {
        query.push_str(&format!("&n={}", n));
    }

    if let Some(tag) = req.tag.as_deref().filter(|t| !t.is_empty()) {
        query.push_str(&format!("&tag={}", urlencoding::encode(tag)));
    }

    if let Some(context) = &req.context {
        let json = serde_json::to_string(context).map_err(Error::Encode)?;
        query.push_str(&format!("&context={}", urlencoding::encode(&json)));
    }

    Ok(query)
}

impl WitClient {
    /// Extract intents, entities and traits from text
    pub async fn parse(&self, req: &MessageRequest) -> Result<MessageResponse> {
        let query = build_parse_query(req)?;
        self.get(&format!("/message{}", query)).await
    }

    /// Extract intents, entities and traits from audio
    pub async fn speech(&self, req: &MessageRequest, speech: Speech) -> Result<MessageResponse> {
        let query = build_parse_query(req)?;
        let response = self
            .request(
                Method::POST,
                &format!("/speech{}", query),
                &speech.content_type,
                Some(speech.body),
            )
            .await?;
        http::decode_json(response).await
    }

    /// Parse with only the text, for the common case
    pub async fn parse_text(&self, text: &str) -> Result<MessageResponse> {
        self.parse(&MessageRequest::new(text)).await
    }
}
