//! Wit.ai Language detection

use super::client::WitClient;
use super::entities::null_as_empty;
use super::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Locales {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub detected_locales: Vec<Locale>,
}

impl Locales {
    /// Most confident locale, if any
    pub fn best(&self) -> Option<&Locale> {
        self.detected_locales
            .iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Locale {
    pub locale: String,
    pub confidence: f64,
}

impl WitClient {
    /// Detect the language of a piece of text
    pub async fn detect_language(&self, text: &str) -> Result<Locales> {
        self.get(&format!("/language?q={}", urlencoding::encode(text)))
            .await
    }
}
