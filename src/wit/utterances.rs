//! Wit.ai Utterances
//!
//! Annotated training sentences: listing what the app was trained with,
//! training new ones and removing old ones.

use super::client::{paginated, WitClient};
use super::entities::null_as_empty;
use super::error::Result;
use serde::{Deserialize, Serialize};

/// A validated utterance as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    #[serde(default)]
    pub intent: Option<UtteranceIntent>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entities: Vec<UtteranceEntity>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub traits: Vec<UtteranceTrait>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtteranceIntent {
    pub id: String,
    pub name: String,
}

/// An entity span inside an utterance; spans can nest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtteranceEntity {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    pub start: u32,
    pub end: u32,
    pub body: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entities: Vec<UtteranceEntity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtteranceTrait {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub value: String,
}

/// An utterance to train the app with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Training {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    pub entities: Vec<TrainingEntity>,
    pub traits: Vec<TrainingTrait>,
}

impl Training {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// An entity span to train; `entity` is `name:role`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrainingEntity {
    pub entity: String,
    pub start: u32,
    pub end: u32,
    pub body: String,
    pub entities: Vec<TrainingEntity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrainingTrait {
    #[serde(rename = "trait")]
    pub name: String,
    pub value: String,
}

/// Acknowledgement of a training submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingResponse {
    pub sent: bool,
    #[serde(default)]
    pub n: u64,
}

#[derive(Serialize)]
struct UtteranceText<'a> {
    text: &'a str,
}

impl WitClient {
    pub async fn list_utterances(&self, limit: i64, offset: i64) -> Result<Vec<Utterance>> {
        self.get(&paginated("/utterances", limit, offset)).await
    }

    pub async fn train_utterances(&self, trainings: &[Training]) -> Result<TrainingResponse> {
        self.post("/utterances", trainings).await
    }

    /// Remove utterances by their exact text
    pub async fn delete_utterances<S: AsRef<str>>(&self, texts: &[S]) -> Result<TrainingResponse> {
        let body: Vec<UtteranceText<'_>> = texts
            .iter()
            .map(|t| UtteranceText { text: t.as_ref() })
            .collect();
        self.delete_with("/utterances", &body).await
    }
}
