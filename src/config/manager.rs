//! Owner of the current dashboard configuration
//!
//! `ConfigManager` is an explicit value constructed by the application's
//! composition root and handed to whoever needs it; there is no process-wide
//! singleton. Mutating operations take `&mut self`, so exclusive access is a
//! compile-time property. Callers that share a manager across threads pick
//! their own lock.

use crate::config::error::ConfigError;
use crate::config::{parser, serializer, validator};
use crate::models::Configuration;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Holds exactly one current configuration, replaced wholesale on every load
/// or update and never partially mutated.
#[derive(Debug, Default)]
pub struct ConfigManager {
    current: Configuration,
}

impl ConfigManager {
    /// Start with an empty configuration; the first successful load or
    /// update replaces it.
    pub fn new() -> Self {
        Self {
            current: Configuration::default(),
        }
    }

    /// Load a document from disk, replacing the current configuration on
    /// success. Failures leave the current configuration untouched.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let metadata = fs::metadata(path).map_err(|e| {
            ConfigError::FileAccess(format!("cannot stat {}: {e}", path.display()))
        })?;
        if metadata.len() == 0 {
            return Err(ConfigError::FileEmpty(path.to_path_buf()));
        }

        let config = parser::parse_file(path)?;
        info!(
            path = %path.display(),
            groups = config.groups.as_ref().map(Vec::len).unwrap_or(0),
            items = config.items.as_ref().map(Vec::len).unwrap_or(0),
            "configuration loaded"
        );
        self.current = config;
        Ok(())
    }

    /// Persist the current configuration.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        serializer::serialize_to_file(&self.current, path.as_ref())
    }

    /// Read-only view of the current configuration.
    pub fn configuration(&self) -> &Configuration {
        &self.current
    }

    /// Replace the current configuration wholesale. The replacement is
    /// validated first; an invalid one is rejected and the previous state
    /// retained unchanged.
    pub fn update_configuration(&mut self, config: Configuration) -> Result<(), ConfigError> {
        validator::validate(&config)?;
        self.current = config;
        Ok(())
    }

    /// Conventional location of the user's dashboard document.
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("longview")
            .join("longview.yaml")
    }
}
