//! Wit.ai Traits
//!
//! Traits classify a whole utterance (sentiment, politeness, ...) independently
//! of its intent.

use super::client::{path_segment, WitClient};
use super::entities::null_as_empty;
use super::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trait {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub values: Vec<TraitValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitValue {
    #[serde(default)]
    pub id: String,
    pub value: String,
}

#[derive(Serialize)]
struct NewTrait<'a, S: AsRef<str>> {
    name: &'a str,
    #[serde(serialize_with = "serialize_strs")]
    values: &'a [S],
}

#[derive(Serialize)]
struct NewTraitValue<'a> {
    value: &'a str,
}

fn serialize_strs<S, T>(values: &&[T], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    T: AsRef<str>,
{
    serializer.collect_seq(values.iter().map(AsRef::as_ref))
}

fn trait_path(name: &str) -> String {
    format!("/traits/{}", path_segment(name))
}

impl WitClient {
    pub async fn list_traits(&self) -> Result<Vec<Trait>> {
        self.get("/traits").await
    }

    /// Create a trait with its possible values
    pub async fn create_trait<S: AsRef<str>>(&self, name: &str, values: &[S]) -> Result<Trait> {
        self.post("/traits", &NewTrait { name, values }).await
    }

    pub async fn get_trait(&self, name: &str) -> Result<Trait> {
        self.get(&trait_path(name)).await
    }

    pub async fn delete_trait(&self, name: &str) -> Result<()> {
        self.delete(&trait_path(name)).await
    }

    pub async fn add_trait_value(&self, name: &str, value: &str) -> Result<Trait> {
        self.post(
            &format!("{}/values", trait_path(name)),
            &NewTraitValue { value },
        )
        .await
    }

    pub async fn delete_trait_value(&self, name: &str, value: &str) -> Result<()> {
        self.delete(&format!(
            "{}/values/{}",
            trait_path(name),
            path_segment(value)
        ))
        .await
    }
}
