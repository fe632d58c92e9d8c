// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 120; // itinerary turns can be slow on the backend side

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    format!("TripWeave/{}", env!("CARGO_PKG_VERSION"))
}

/// Where the chat backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    pub fn default_path() -> PathBuf {
        crate::get_config_root().join("client.json")
    }

    /// Loads from the per-user config file, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Never fails: a missing file means defaults, a broken one is logged and ignored.
    pub fn load_from(path: &Path) -> Self {
        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable client config; using defaults — path={} error={:#}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No client config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ClientConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        log::debug!(
            "Loaded client config — path={} base_url={}",
            path.display(),
            config.base_url
        );
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn chat_url(&self) -> String {
        format!("{}/chat", self.base_url.trim_end_matches('/'))
    }

    pub fn health_url(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = ClientConfig::load_from(&dir.path().join("nope.json"));
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("client.json");
        fs::write(&path, r#"{"base_url": "http://10.0.0.5:9000/"}"#).unwrap();

        let config = ClientConfig::load_from(&path);
        assert_eq!(config.base_url, "http://10.0.0.5:9000/");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.chat_url(), "http://10.0.0.5:9000/chat");
        assert_eq!(config.health_url(), "http://10.0.0.5:9000/");
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("client.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(ClientConfig::load_from(&path), ClientConfig::default());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("client.json");
        let config = ClientConfig {
            base_url: "https://trips.example".to_string(),
            timeout_secs: 5,
            ..ClientConfig::default()
        };
        config.save_to(&path).unwrap();

        let loaded = ClientConfig::load_from(&path);
        assert_eq!(loaded, config);
        assert_eq!(loaded.timeout(), Duration::from_secs(5));
    }
}
