//! Display item model for LongView dashboards
//!
//! An item is a single tile on the dashboard: a typed, sized, refreshable
//! piece of content identified by a value string (URL or inline content).

use serde::{Serialize, Serializer};
use std::fmt;

/// Content type of a dashboard item.
///
/// The enum-to-token mapping in [`ItemType::token`] is the single source of
/// truth for both parsing and serialization; adding a variant without a token
/// fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    /// A full web page, rendered from a URL
    Web,
    /// Inline iframe content
    IFrame,
    /// An image URL
    Image,
}

impl ItemType {
    /// Every variant, in canonical order.
    pub const ALL: [ItemType; 3] = [ItemType::Web, ItemType::IFrame, ItemType::Image];

    /// Canonical lower-case document token for this type.
    pub fn token(self) -> &'static str {
        match self {
            ItemType::Web => "web",
            ItemType::IFrame => "iframe",
            ItemType::Image => "image",
        }
    }

    /// Resolve a document token back to a type. Unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<ItemType> {
        Self::ALL.into_iter().find(|t| t.token() == token)
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl Serialize for ItemType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

/// Requested display size of an item, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Size {
    pub width: i64,
    pub height: i64,
}

/// A single dashboard entry.
///
/// `value` is interpreted per `kind`: a page URL for [`ItemType::Web`], iframe
/// content for [`ItemType::IFrame`], an image URL for [`ItemType::Image`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    /// Optional display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Content type; serialized under the document key `type`
    #[serde(rename = "type")]
    pub kind: ItemType,

    /// URL or content, never empty in a validated configuration
    pub value: String,

    /// Optional display size, both dimensions strictly positive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,

    /// Optional refresh interval in seconds, strictly positive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_frequency: Option<i64>,
}

impl Item {
    /// Name to use in diagnostics when the item has none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_mapping_is_bijective() {
        for ty in ItemType::ALL {
            assert_eq!(ItemType::from_token(ty.token()), Some(ty));
        }
    }

    #[test]
    fn unknown_token_is_rejected() {
        assert_eq!(ItemType::from_token("pdf"), None);
        assert_eq!(ItemType::from_token("Web"), None);
        assert_eq!(ItemType::from_token(""), None);
    }

    #[test]
    fn display_matches_token() {
        assert_eq!(ItemType::IFrame.to_string(), "iframe");
    }

    #[test]
    fn display_name_falls_back_to_unnamed() {
        let item = Item {
            name: None,
            kind: ItemType::Web,
            value: "https://example.com".to_string(),
            size: None,
            refresh_frequency: None,
        };
        assert_eq!(item.display_name(), "unnamed");
    }
}
