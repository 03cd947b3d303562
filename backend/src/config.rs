//! # Application Configuration
//!
//! Operator-set constants baked into a deployment. The browser build uses
//! [`AppConfig::default`]; native builds may load a YAML file instead:
//!
//! ```yaml
//! admin_username: "ogahribet"
//! admin_password: "jaticempaka16"
//! secret_code: "911"
//! storage_key: "jumat_berkah_data_v2"
//! submit_delay_ms: 1200
//! success_display_ms: 2000
//! ```
//!
//! Every field is optional in the file; anything left out keeps its default.
//!
//! The credentials and secret code are compared as plain strings. They keep
//! casual visitors out of the dashboard and nothing more: anyone who can read
//! the deployed bundle can read them.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub admin_username: String,
    pub admin_password: String,
    /// Typed into the hidden input to open the login prompt
    pub secret_code: String,
    /// Storage slot holding the serialized application data
    pub storage_key: String,
    /// Simulated latency between submitting a donation and recording it
    pub submit_delay_ms: u32,
    /// How long the success message stays up before the modal closes
    pub success_display_ms: u32,
    pub max_proof_image_bytes: usize,
    /// Quota applied by native storages; browsers enforce their own
    pub storage_quota_bytes: Option<usize>,
    pub debug_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            admin_username: "ogahribet".to_string(),
            admin_password: "jaticempaka16".to_string(),
            secret_code: "911".to_string(),
            storage_key: "jumat_berkah_data_v2".to_string(),
            submit_delay_ms: 1200,
            success_display_ms: 2000,
            max_proof_image_bytes: 2 * 1024 * 1024,
            storage_quota_bytes: Some(5 * 1024 * 1024),
            debug_logging: false,
        }
    }
}

impl AppConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: AppConfig =
            serde_yaml::from_str(yaml).context("Failed to parse configuration YAML")?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&content)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load the file if present, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring unreadable config file {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AppConfig::from_yaml_str("secret_code: \"4242\"\nsubmit_delay_ms: 10\n").unwrap();

        assert_eq!(config.secret_code, "4242");
        assert_eq!(config.submit_delay_ms, 10);
        assert_eq!(config.admin_username, "ogahribet");
        assert_eq!(config.storage_key, "jumat_berkah_data_v2");
        assert_eq!(config.success_display_ms, 2000);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(AppConfig::from_yaml_str("submit_delay_ms: [not a number").is_err());
    }

    #[test]
    fn test_load_or_default() {
        let dir = TempDir::new().unwrap();

        let missing = AppConfig::load_or_default(dir.path().join("missing.yaml"));
        assert_eq!(missing, AppConfig::default());

        let broken_path = dir.path().join("broken.yaml");
        fs::write(&broken_path, "storage_quota_bytes: lots").unwrap();
        assert_eq!(AppConfig::load_or_default(&broken_path), AppConfig::default());

        let good_path = dir.path().join("config.yaml");
        fs::write(&good_path, "admin_username: bendahara\nstorage_quota_bytes: ~\n").unwrap();
        let loaded = AppConfig::load_or_default(&good_path);
        assert_eq!(loaded.admin_username, "bendahara");
        assert_eq!(loaded.storage_quota_bytes, None);
    }
}
