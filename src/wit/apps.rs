//! Wit.ai Apps
//!
//! Listing and managing apps and their tags (named snapshots of a trained app).

use super::client::{paginated, path_segment, WitClient};
use super::error::Result;
use super::time::WitTime;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Training state of an app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingStatus {
    Done,
    Scheduled,
    Ongoing,
    #[serde(other)]
    Unknown,
}

/// App information
///
/// Server-assigned fields are skipped when empty so the same type can be sent
/// to create or update an app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct App {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lang: String,
    /// Left out of update bodies when `None`, so the visibility is kept
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<WitTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_training_duration_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub will_train_at: Option<WitTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_trained_at: Option<WitTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_status: Option<TrainingStatus>,
}

/// Returned when an app is created
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedApp {
    #[serde(default)]
    pub access_token: String,
    pub app_id: String,
}

/// A tag of an app. Some endpoints call the name `tag`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppTag {
    #[serde(alias = "tag")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<WitTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<WitTime>,
}

/// Returned when a tag is moved onto another snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovedAppTag {
    pub tag: String,
    #[serde(default)]
    pub desc: String,
    pub moved_to: String,
}

#[derive(Serialize)]
struct TagChange<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    desc: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    move_to: Option<&'a str>,
}

impl<'a> TagChange<'a> {
    fn from_tag(tag: &'a AppTag) -> Self {
        Self {
            tag: Some(tag.name.as_str()).filter(|s| !s.is_empty()),
            desc: Some(tag.desc.as_str()).filter(|s| !s.is_empty()),
            move_to: None,
        }
    }
}

fn app_path(id: &str) -> String {
    format!("/apps/{}", path_segment(id))
}

fn tag_path(app_id: &str, tag: &str) -> String {
    format!("{}/tags/{}", app_path(app_id), path_segment(tag))
}

impl WitClient {
    /// List the apps owned by the token's user
    pub async fn list_apps(&self, limit: i64, offset: i64) -> Result<Vec<App>> {
        self.get(&paginated("/apps", limit, offset)).await
    }

    pub async fn get_app(&self, id: &str) -> Result<App> {
        self.get(&app_path(id)).await
    }

    pub async fn create_app(&self, app: &App) -> Result<CreatedApp> {
        self.post("/apps", app).await
    }

    /// Update an app's settings; only non-empty fields and a set `private` are sent
    pub async fn update_app(&self, id: &str, app: &App) -> Result<()> {
        self.execute(Method::PUT, &app_path(id), app).await.map(drop)
    }

    pub async fn delete_app(&self, id: &str) -> Result<()> {
        self.delete(&app_path(id)).await
    }

    /// List an app's tags, grouped by the snapshot they point to
    pub async fn list_app_tags(&self, app_id: &str) -> Result<Vec<Vec<AppTag>>> {
        self.get(&format!("{}/tags", app_path(app_id))).await
    }

    pub async fn get_app_tag(&self, app_id: &str, tag: &str) -> Result<AppTag> {
        self.get(&tag_path(app_id, tag)).await
    }

    /// Snapshot the app's current state under a new tag.
    /// The server may normalize the name; the returned tag carries the final one.
    pub async fn create_app_tag(&self, app_id: &str, tag: &str) -> Result<AppTag> {
        let body = TagChange {
            tag: Some(tag),
            desc: None,
            move_to: None,
        };
        self.post(&format!("{}/tags", app_path(app_id)), &body).await
    }

    /// Rename a tag and/or change its description
    pub async fn update_app_tag(&self, app_id: &str, tag: &str, updated: &AppTag) -> Result<AppTag> {
        self.put(&tag_path(app_id, tag), &TagChange::from_tag(updated))
            .await
    }

    /// Point a tag at the snapshot of another tag
    pub async fn move_app_tag(
        &self,
        app_id: &str,
        tag: &str,
        to: &str,
        updated: &AppTag,
    ) -> Result<MovedAppTag> {
        let body = TagChange {
            move_to: Some(to),
            ..TagChange::from_tag(updated)
        };
        self.put(&tag_path(app_id, tag), &body).await
    }

    pub async fn delete_app_tag(&self, app_id: &str, tag: &str) -> Result<()> {
        self.delete(&tag_path(app_id, tag)).await
    }
}
