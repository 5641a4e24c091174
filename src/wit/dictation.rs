//! Wit.ai Dictation
//!
//! Plain speech-to-text, without intent or entity extraction.

use super::client::WitClient;
use super::entities::null_as_empty;
use super::error::Result;
use super::http;
use reqwest::{Body, Method};
use serde::{Deserialize, Serialize};

/// Audio to transcribe
#[derive(Debug)]
pub struct DictationRequest {
    pub body: Body,
    /// e.g. `audio/wav` or `audio/raw;encoding=signed-integer;bits=16;rate=16k;endian=little`
    pub content_type: String,
}

impl DictationRequest {
    pub fn new(body: impl Into<Body>, content_type: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            content_type: content_type.into(),
        }
    }
}

/// A transcribed word and its character span
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictationToken {
    pub start: u32,
    pub end: u32,
    pub token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DictationSpeech {
    #[serde(default)]
    pub confidence: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tokens: Vec<DictationToken>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DictationResponse {
    #[serde(default)]
    pub speech: DictationSpeech,
    #[serde(default)]
    pub text: String,
    /// `PARTIAL_TRANSCRIPTION` or `FINAL_TRANSCRIPTION`
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl WitClient {
    /// Transcribe audio.
    ///
    /// The API streams partial transcriptions before the final one; the last
    /// complete object in the body is returned.
    pub async fn dictation(&self, req: DictationRequest) -> Result<DictationResponse> {
        let response = self
            .request(Method::POST, "/dictation", &req.content_type, Some(req.body))
            .await?;
        http::decode_last_json(response).await
    }
}
