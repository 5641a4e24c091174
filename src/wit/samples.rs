//! Wit.ai Samples
//!
//! Legacy training endpoint, superseded by utterances but still served.

use super::client::{paginated, WitClient};
use super::entities::null_as_empty;
use super::error::Result;
use serde::{Deserialize, Serialize};

/// A sentence annotated with entities
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entities: Vec<SampleEntity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleEntity {
    pub entity: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_empty")]
    pub subentities: Vec<SampleEntity>,
}

/// Acknowledgement of a training submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateSampleResponse {
    pub sent: bool,
    #[serde(default)]
    pub n: u64,
}

impl WitClient {
    pub async fn list_samples(&self, limit: i64, offset: i64) -> Result<Vec<Sample>> {
        self.get(&paginated("/samples", limit, offset)).await
    }

    /// Submit annotated samples to train the app
    pub async fn validate_samples(&self, samples: &[Sample]) -> Result<ValidateSampleResponse> {
        self.post("/samples", samples).await
    }

    /// Remove validated samples; only `text` is needed
    pub async fn delete_samples(&self, samples: &[Sample]) -> Result<ValidateSampleResponse> {
        self.delete_with("/samples", samples).await
    }
}
