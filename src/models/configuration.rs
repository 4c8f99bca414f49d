//! Top-level configuration document model
//!
//! A `Configuration` is the complete in-memory form of one dashboard
//! document: a version string plus optional ordered collections of groups
//! and top-level items. Instances are assembled atomically by the parser or
//! built field-by-field by callers; the validator enforces the semantic
//! invariants before a configuration becomes current.

use crate::models::item::Item;
use serde::Serialize;

/// A named, ordered collection of items.
///
/// A validated group is never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub items: Vec<Item>,
}

impl Group {
    /// Name to use in diagnostics when the group has none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }
}

/// One complete dashboard document.
///
/// `groups` and `items` distinguish absent (`None`) from present-but-empty
/// (`Some(vec![])`); serialization omits absent fields entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Configuration {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<Group>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
}
