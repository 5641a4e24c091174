//! Wit.ai Export

use super::client::WitClient;
use super::error::Result;
use serde::Deserialize;

#[derive(Deserialize)]
struct ExportResponse {
    uri: String,
}

impl WitClient {
    /// Ask for a backup of the app; returns the URI of the zip to download
    pub async fn export(&self) -> Result<String> {
        let response: ExportResponse = self.get("/export").await?;
        Ok(response.uri)
    }
}
