//! Wit.ai Intents

use super::client::{path_segment, WitClient};
use super::entities::{null_as_empty, Entity};
use super::error::Result;
use serde::{Deserialize, Serialize};

/// An intent and the entities it has been seen with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_empty")]
    pub entities: Vec<Entity>,
}

fn intent_path(name: &str) -> String {
    format!("/intents/{}", path_segment(name))
}

impl WitClient {
    pub async fn list_intents(&self) -> Result<Vec<Intent>> {
        self.get("/intents").await
    }

    pub async fn create_intent(&self, name: &str) -> Result<Intent> {
        let intent = Intent {
            name: name.to_string(),
            ..Default::default()
        };
        self.post("/intents", &intent).await
    }

    pub async fn get_intent(&self, name: &str) -> Result<Intent> {
        self.get(&intent_path(name)).await
    }

    /// Permanently delete an intent
    pub async fn delete_intent(&self, name: &str) -> Result<()> {
        self.delete(&intent_path(name)).await
    }
}
