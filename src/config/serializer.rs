//! YAML serialization for dashboard configurations
//!
//! The inverse of the parser for valid input: emits `version`, then `groups`,
//! then `items`, omitting absent optional fields, with item types rendered
//! through the canonical token mapping. No re-validation happens here; a
//! `Configuration` that exists has already been validated or hand-built by a
//! caller who owns the consequences.

use crate::config::error::ConfigError;
use crate::models::Configuration;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Render a configuration as a YAML document.
pub fn serialize(config: &Configuration) -> Result<String, ConfigError> {
    serde_yaml::to_string(config).map_err(|e| ConfigError::Write(e.to_string()))
}

/// Render a configuration and write it atomically (temp file + rename).
pub fn serialize_to_file(config: &Configuration, path: &Path) -> Result<(), ConfigError> {
    let content = serialize(config)?;

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, &content).map_err(|e| {
        ConfigError::Write(format!("cannot write {}: {e}", temp_path.display()))
    })?;
    fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Write(format!("cannot rename into {}: {e}", path.display())))?;

    debug!(path = %path.display(), bytes = content.len(), "configuration written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Group, Item, ItemType, Size};

    fn web_item(value: &str) -> Item {
        Item {
            name: None,
            kind: ItemType::Web,
            value: value.to_string(),
            size: None,
            refresh_frequency: None,
        }
    }

    #[test]
    fn version_comes_first_and_absent_fields_are_omitted() {
        let config = Configuration {
            version: "1.0".to_string(),
            groups: None,
            items: Some(vec![web_item("https://example.com")]),
        };
        let text = serialize(&config).unwrap();
        assert!(text.starts_with("version:"), "{text}");
        assert!(!text.contains("groups"), "{text}");
        assert!(!text.contains("name"), "{text}");
        assert!(!text.contains("size"), "{text}");
        assert!(!text.contains("refresh_frequency"), "{text}");
    }

    #[test]
    fn type_is_rendered_as_its_canonical_token() {
        let config = Configuration {
            version: "1.0".to_string(),
            groups: None,
            items: Some(vec![Item {
                name: None,
                kind: ItemType::IFrame,
                value: "<p>hi</p>".to_string(),
                size: None,
                refresh_frequency: None,
            }]),
        };
        let text = serialize(&config).unwrap();
        assert!(text.contains("type: iframe"), "{text}");
    }

    #[test]
    fn groups_serialize_with_names_and_nested_items() {
        let config = Configuration {
            version: "1.0".to_string(),
            groups: Some(vec![Group {
                name: Some("main".to_string()),
                items: vec![Item {
                    name: Some("dashboard".to_string()),
                    kind: ItemType::Web,
                    value: "https://example.com".to_string(),
                    size: Some(Size {
                        width: 800,
                        height: 600,
                    }),
                    refresh_frequency: Some(60),
                }],
            }]),
            items: None,
        };
        let text = serialize(&config).unwrap();
        assert!(text.contains("name: main"), "{text}");
        assert!(text.contains("width: 800"), "{text}");
        assert!(text.contains("refresh_frequency: 60"), "{text}");
    }

    #[test]
    fn write_failure_is_a_write_error() {
        let config = Configuration {
            version: "1.0".to_string(),
            groups: None,
            items: None,
        };
        let err =
            serialize_to_file(&config, Path::new("/nonexistent-dir/longview.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Write(_)));
    }
}
