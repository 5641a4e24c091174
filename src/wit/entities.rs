//! Wit.ai Entities
//!
//! Entities, their roles, keywords and keyword synonyms.

use super::client::{path_segment, WitClient};
use super::error::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A role an entity can play in an utterance.
///
/// The API returns roles as `{"id", "name"}` objects from some endpoints and
/// as bare names from others; both decode here. Roles are always sent as bare
/// names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityRole {
    pub id: Option<String>,
    pub name: String,
}

impl EntityRole {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

impl Serialize for EntityRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

impl<'de> Deserialize<'de> for EntityRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawRole {
            Name(String),
            Full {
                #[serde(default)]
                id: Option<String>,
                name: String,
            },
        }

        Ok(match RawRole::deserialize(deserializer)? {
            RawRole::Name(name) => EntityRole { id: None, name },
            RawRole::Full { id, name } => EntityRole { id, name },
        })
    }
}

/// A canonical keyword value and the synonyms that map to it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityKeyword {
    pub keyword: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub synonyms: Vec<String>,
}

/// An entity as sent to and returned by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_empty")]
    pub roles: Vec<EntityRole>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_empty")]
    pub lookups: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_empty")]
    pub keywords: Vec<EntityKeyword>,
}

/// Treat an explicit `null` list the same as a missing one
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Serialize)]
struct Synonym<'a> {
    synonym: &'a str,
}

fn entity_path(name: &str) -> String {
    format!("/entities/{}", path_segment(name))
}

fn keyword_path(entity: &str, keyword: &str) -> String {
    format!("{}/keywords/{}", entity_path(entity), path_segment(keyword))
}

impl WitClient {
    /// List the app's entities (id and name only)
    pub async fn list_entities(&self) -> Result<Vec<Entity>> {
        self.get("/entities").await
    }

    pub async fn create_entity(&self, entity: &Entity) -> Result<Entity> {
        self.post("/entities", entity).await
    }

    pub async fn get_entity(&self, name: &str) -> Result<Entity> {
        self.get(&entity_path(name)).await
    }

    /// Replace an entity's definition
    pub async fn update_entity(&self, name: &str, entity: &Entity) -> Result<Entity> {
        self.put(&entity_path(name), entity).await
    }

    pub async fn delete_entity(&self, name: &str) -> Result<()> {
        self.delete(&entity_path(name)).await
    }

    /// Remove one role from an entity
    pub async fn delete_entity_role(&self, entity: &str, role: &str) -> Result<()> {
        self.delete(&format!(
            "/entities/{}:{}",
            path_segment(entity),
            path_segment(role)
        ))
        .await
    }

    pub async fn add_entity_keyword(&self, entity: &str, keyword: &EntityKeyword) -> Result<Entity> {
        self.post(&format!("{}/keywords", entity_path(entity)), keyword)
            .await
    }

    pub async fn delete_entity_keyword(&self, entity: &str, keyword: &str) -> Result<()> {
        self.delete(&keyword_path(entity, keyword)).await
    }

    pub async fn add_entity_keyword_synonym(
        &self,
        entity: &str,
        keyword: &str,
        synonym: &str,
    ) -> Result<Entity> {
        self.post(
            &format!("{}/synonyms", keyword_path(entity, keyword)),
            &Synonym { synonym },
        )
        .await
    }

    pub async fn delete_entity_keyword_synonym(
        &self,
        entity: &str,
        keyword: &str,
        synonym: &str,
    ) -> Result<()> {
        self.delete(&format!(
            "{}/synonyms/{}",
            keyword_path(entity, keyword),
            path_segment(synonym)
        ))
        .await
    }
}
