//! Semantic validation for dashboard configurations
//!
//! Validation is fail-fast: the first violated invariant is reported and no
//! further checks run. Order is version, then each group (presence of items,
//! then each item), then each top-level item. The functions are pure; calling
//! them repeatedly on the same configuration yields the same result.

use crate::models::{Configuration, Group, Item};
use thiserror::Error;

/// First invariant violation found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("version cannot be empty")]
    EmptyVersion,

    #[error("group '{group}' must contain at least one item")]
    EmptyGroup { group: String },

    #[error("item '{item}' value cannot be empty")]
    EmptyValue { item: String },

    #[error("item '{item}' size must be positive, got {width}x{height}")]
    NonPositiveSize {
        item: String,
        width: i64,
        height: i64,
    },

    #[error("item '{item}' refresh frequency must be positive, got {seconds}")]
    NonPositiveRefreshFrequency { item: String, seconds: i64 },
}

/// Check every invariant over a complete configuration, fail-fast.
pub fn validate(config: &Configuration) -> Result<(), ValidationError> {
    validate_version(&config.version)?;

    if let Some(groups) = &config.groups {
        for group in groups {
            validate_group(group)?;
        }
    }

    if let Some(items) = &config.items {
        for item in items {
            validate_item(item)?;
        }
    }

    Ok(())
}

pub fn validate_version(version: &str) -> Result<(), ValidationError> {
    if version.is_empty() {
        return Err(ValidationError::EmptyVersion);
    }
    Ok(())
}

pub fn validate_group(group: &Group) -> Result<(), ValidationError> {
    if group.items.is_empty() {
        return Err(ValidationError::EmptyGroup {
            group: group.display_name().to_string(),
        });
    }

    for item in &group.items {
        validate_item(item)?;
    }

    Ok(())
}

pub fn validate_item(item: &Item) -> Result<(), ValidationError> {
    if item.value.is_empty() {
        return Err(ValidationError::EmptyValue {
            item: item.display_name().to_string(),
        });
    }

    if let Some(size) = &item.size {
        if size.width <= 0 || size.height <= 0 {
            return Err(ValidationError::NonPositiveSize {
                item: item.display_name().to_string(),
                width: size.width,
                height: size.height,
            });
        }
    }

    if let Some(seconds) = item.refresh_frequency {
        if seconds <= 0 {
            return Err(ValidationError::NonPositiveRefreshFrequency {
                item: item.display_name().to_string(),
                seconds,
            });
        }
    }

    Ok(())
}
