//! Error taxonomy for the configuration engine
//!
//! One variant per failure kind; every operation returns the first failure it
//! hits and never downgrades it to a default value. Display strings carry the
//! full user-facing message, including any line and breadcrumb decoration
//! added by the parser.

use crate::config::validator::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Prefix added by [`ConfigError::Parse`]'s Display impl. The decorator
/// strips it from nested causes so re-wrapping cannot accumulate it.
pub(crate) const PARSE_ERROR_PREFIX: &str = "Failed to parse configuration file: ";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file does not exist: {0}")]
    FileNotFound(PathBuf),

    #[error("Configuration file is empty: {0}")]
    FileEmpty(PathBuf),

    #[error("Failed to access configuration file: {0}")]
    FileAccess(String),

    #[error("Failed to parse configuration file: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to write file: {0}")]
    Write(String),
}

impl ConfigError {
    /// Build a parse error, stripping any parse prefix already embedded in
    /// the message so nested wrapping stays idempotent.
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        let mut message: String = message.into();
        while let Some(rest) = message.strip_prefix(PARSE_ERROR_PREFIX) {
            message = rest.to_string();
        }
        ConfigError::Parse(message)
    }
}
