//! Configuration Management
//!
//! Handles persistent configuration storage for the witai CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use witai::{WitClient, DEFAULT_API_BASE, DEFAULT_TIMEOUT, DEFAULT_VERSION};

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Server access token
    #[serde(default)]
    pub token: Option<String>,
    /// API version pinned in the Accept header
    #[serde(default)]
    pub version: Option<String>,
    /// API base URL, for proxies and test servers
    #[serde(default)]
    pub base_url: Option<String>,
    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Values given on the command line (or through the environment)
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub token: Option<String>,
    pub version: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("witai").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from a given file; a missing or unreadable file yields the defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed config {:?}: {}", path, e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Unable to read config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path().context("No configuration directory on this system")?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))?;

        // The file holds an access token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    /// Copy every value set in `overrides` into this config
    pub fn merge(&mut self, overrides: &Overrides) {
        if let Some(token) = &overrides.token {
            self.token = Some(token.clone());
        }
        if let Some(version) = &overrides.version {
            self.version = Some(version.clone());
        }
        if let Some(base_url) = &overrides.base_url {
            self.base_url = Some(base_url.clone());
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.timeout_secs = Some(timeout);
        }
    }

    /// Get effective token (CLI/env > config)
    pub fn effective_token(&self, overrides: &Overrides) -> Option<String> {
        overrides
            .token
            .clone()
            .or_else(|| self.token.clone())
            .filter(|t| !t.trim().is_empty())
    }

    /// Get effective API version (CLI > config > default)
    pub fn effective_version(&self, overrides: &Overrides) -> String {
        overrides
            .version
            .clone()
            .or_else(|| self.version.clone())
            .unwrap_or_else(|| DEFAULT_VERSION.to_string())
    }

    /// Get effective base URL (CLI > config > default)
    pub fn effective_base_url(&self, overrides: &Overrides) -> String {
        overrides
            .base_url
            .clone()
            .or_else(|| self.base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
    }

    /// Get effective timeout (CLI > config > default)
    pub fn effective_timeout(&self, overrides: &Overrides) -> Duration {
        overrides
            .timeout_secs
            .or(self.timeout_secs)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    /// Build a client from the effective settings
    pub fn client(&self, overrides: &Overrides) -> Result<WitClient> {
        let token = self.effective_token(overrides).context(
            "No access token. Pass --token, set WIT_TOKEN or run `witai configure --token <TOKEN>`",
        )?;

        let client = WitClient::builder(token)
            .version(self.effective_version(overrides))
            .base_url(self.effective_base_url(overrides))
            .timeout(self.effective_timeout(overrides))
            .build()?;

        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.json"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            token: Some("secret".to_string()),
            version: Some("20200513".to_string()),
            base_url: None,
            timeout_secs: Some(30),
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path), config);
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::default().save_to(&path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let config: Config = serde_json::from_str(r#"{"token": "t", "colour": "blue"}"#).unwrap();
        assert_eq!(config.token.as_deref(), Some("t"));
    }

    #[test]
    fn test_flags_win_over_file() {
        let config = Config {
            token: Some("from-file".to_string()),
            version: Some("20200101".to_string()),
            base_url: Some("http://localhost:9000".to_string()),
            timeout_secs: Some(3),
        };
        let overrides = Overrides {
            token: Some("from-flag".to_string()),
            timeout_secs: Some(7),
            ..Default::default()
        };

        assert_eq!(config.effective_token(&overrides).as_deref(), Some("from-flag"));
        assert_eq!(config.effective_version(&overrides), "20200101");
        assert_eq!(config.effective_base_url(&overrides), "http://localhost:9000");
        assert_eq!(config.effective_timeout(&overrides), Duration::from_secs(7));
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::default();
        let overrides = Overrides::default();

        assert!(config.effective_token(&overrides).is_none());
        assert_eq!(config.effective_version(&overrides), DEFAULT_VERSION);
        assert_eq!(config.effective_base_url(&overrides), DEFAULT_API_BASE);
        assert_eq!(config.effective_timeout(&overrides), DEFAULT_TIMEOUT);
        assert!(config.client(&overrides).is_err());
    }

    #[test]
    fn test_blank_token_is_missing() {
        let overrides = Overrides {
            token: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(Config::default().effective_token(&overrides).is_none());
    }

    #[test]
    fn test_merge_keeps_unset_values() {
        let mut config = Config {
            token: Some("old".to_string()),
            base_url: Some("http://localhost:9000".to_string()),
            ..Default::default()
        };
        config.merge(&Overrides {
            token: Some("new".to_string()),
            ..Default::default()
        });

        assert_eq!(config.token.as_deref(), Some("new"));
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:9000"));
    }

    #[test]
    fn test_client_from_config() {
        let config = Config {
            token: Some("t".to_string()),
            base_url: Some("http://127.0.0.1:1/".to_string()),
            ..Default::default()
        };
        let client = config.client(&Overrides::default()).unwrap();
        assert_eq!(client.api_base(), "http://127.0.0.1:1");
        assert_eq!(client.version(), DEFAULT_VERSION);
    }
}
