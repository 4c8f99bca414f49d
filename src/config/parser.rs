//! YAML document parsing for dashboard configurations
//!
//! The parser walks the generic YAML tree by hand rather than deriving
//! `Deserialize`: every failure must name the smallest node it can, carry a
//! line number when one is known, and leave a breadcrumb pointing at the last
//! node that did parse. A `Configuration` is assembled atomically; the first
//! failure aborts the whole load and no partial result escapes.

use crate::config::diagnostics::{decorate, DiagnosticTracker, NodeKind, SourceMap};
use crate::config::error::ConfigError;
use crate::config::validator;
use crate::models::{Configuration, Group, Item, ItemType, Size};
use serde_yaml::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse a complete document from text.
pub fn parse_str(content: &str) -> Result<Configuration, ConfigError> {
    let doc: Value = serde_yaml::from_str(content).map_err(|e| ConfigError::parse(e.to_string()))?;
    let map = SourceMap::scan(content);
    let mut tracker = DiagnosticTracker::default();

    let version = match doc.get("version") {
        Some(node) => scalar_string(node)
            .ok_or_else(|| ConfigError::parse("version must be a string".to_string()))?,
        None => return Err(ConfigError::parse("missing version field in configuration")),
    };
    validator::validate_version(&version)?;
    tracker.record(
        NodeKind::Version,
        &version,
        map.version_line(),
        map.line_text(map.version_line()),
    );

    let groups = match doc.get("groups") {
        Some(node) => Some(parse_groups(node, &map, &mut tracker)?),
        None => None,
    };

    let items = match doc.get("items") {
        Some(node) => Some(parse_top_items(node, &map, &mut tracker)?),
        None => None,
    };

    debug!(
        version = %version,
        groups = groups.as_ref().map(Vec::len).unwrap_or(0),
        items = items.as_ref().map(Vec::len).unwrap_or(0),
        "configuration parsed"
    );

    Ok(Configuration {
        version,
        groups,
        items,
    })
}

/// Parse a complete document from a file.
pub fn parse_file(path: &Path) -> Result<Configuration, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::FileAccess(format!("cannot open file {}: {e}", path.display())))?;
    parse_str(&content)
}

fn parse_groups(
    node: &Value,
    map: &SourceMap,
    tracker: &mut DiagnosticTracker,
) -> Result<Vec<Group>, ConfigError> {
    let seq = node
        .as_sequence()
        .ok_or_else(|| ConfigError::parse("groups must be a sequence"))?;

    let mut groups = Vec::with_capacity(seq.len());
    for (index, group_node) in seq.iter().enumerate() {
        let line = map.group_line(index);
        let group = parse_group(group_node, index, map, tracker).map_err(|err| {
            let context = format!("group '{}'", group_name(group_node));
            // The item-level decoration already added the breadcrumb; only
            // the outer context is contributed here.
            decorate_parse(err, &context, line, tracker, false)
        })?;
        groups.push(group);
    }
    Ok(groups)
}

fn parse_group(
    node: &Value,
    index: usize,
    map: &SourceMap,
    tracker: &mut DiagnosticTracker,
) -> Result<Group, ConfigError> {
    if !node.is_mapping() {
        return Err(ConfigError::parse("group must be a mapping"));
    }

    let name = optional_string(node, "name")?;
    if let Some(name) = &name {
        let line = map.group_line(index);
        tracker.record(NodeKind::Group, name, line, map.line_text(line));
    }

    let mut items = Vec::new();
    if let Some(items_node) = node.get("items") {
        let seq = items_node
            .as_sequence()
            .ok_or_else(|| ConfigError::parse("group items must be a sequence"))?;
        for (item_index, item_node) in seq.iter().enumerate() {
            let line = map.group_item_line(index, item_index);
            let item = parse_item(item_node, line, map, tracker)
                .map_err(|err| decorate_parse(err, "item", line, tracker, true))?;
            items.push(item);
        }
    }

    let group = Group { name, items };
    validator::validate_group(&group)?;
    Ok(group)
}

fn parse_top_items(
    node: &Value,
    map: &SourceMap,
    tracker: &mut DiagnosticTracker,
) -> Result<Vec<Item>, ConfigError> {
    let seq = node
        .as_sequence()
        .ok_or_else(|| ConfigError::parse("items must be a sequence"))?;

    let mut items = Vec::with_capacity(seq.len());
    for (index, item_node) in seq.iter().enumerate() {
        let line = map.top_item_line(index);
        let item = parse_item(item_node, line, map, tracker)
            .map_err(|err| decorate_parse(err, "item", line, tracker, true))?;
        items.push(item);
    }
    Ok(items)
}

fn parse_item(
    node: &Value,
    line: Option<usize>,
    map: &SourceMap,
    tracker: &mut DiagnosticTracker,
) -> Result<Item, ConfigError> {
    if !node.is_mapping() {
        return Err(ConfigError::parse("item must be a mapping"));
    }

    let name = optional_string(node, "name")?;
    if let Some(name) = &name {
        tracker.record(NodeKind::Item, name, line, map.line_text(line));
    }

    let token = required_string(node, "type")?;
    let kind = ItemType::from_token(&token)
        .ok_or_else(|| ConfigError::parse(format!("invalid type: {token}")))?;

    let value = required_string(node, "value")?;

    let size = match node.get("size") {
        Some(size_node) => Some(Size {
            width: required_integer(size_node, "width")?,
            height: required_integer(size_node, "height")?,
        }),
        None => None,
    };

    let refresh_frequency = match node.get("refresh_frequency") {
        Some(v) => Some(v.as_i64().ok_or_else(|| {
            ConfigError::parse("field 'refresh_frequency' must be an integer")
        })?),
        None => None,
    };

    let item = Item {
        name,
        kind,
        value,
        size,
        refresh_frequency,
    };
    validator::validate_item(&item)?;
    Ok(item)
}

/// Re-wrap a parse failure with positional context; validation and I/O
/// failures pass through untouched.
fn decorate_parse(
    err: ConfigError,
    context: &str,
    line: Option<usize>,
    tracker: &DiagnosticTracker,
    include_last_parsed: bool,
) -> ConfigError {
    match err {
        ConfigError::Parse(message) => ConfigError::Parse(decorate(
            context,
            line,
            &message,
            tracker,
            include_last_parsed,
        )),
        other => other,
    }
}

fn group_name(node: &Value) -> String {
    node.get("name")
        .and_then(scalar_string)
        .unwrap_or_else(|| "unnamed".to_string())
}

/// Read a scalar as a string, coercing numbers and booleans the way the YAML
/// library's typed accessors would.
fn scalar_string(node: &Value) -> Option<String> {
    match node {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn optional_string(node: &Value, key: &str) -> Result<Option<String>, ConfigError> {
    match node.get(key) {
        Some(v) => scalar_string(v)
            .map(Some)
            .ok_or_else(|| ConfigError::parse(format!("field '{key}' must be a string"))),
        None => Ok(None),
    }
}

fn required_string(node: &Value, key: &str) -> Result<String, ConfigError> {
    let v = node
        .get(key)
        .ok_or_else(|| ConfigError::parse(format!("missing required field '{key}'")))?;
    scalar_string(v).ok_or_else(|| ConfigError::parse(format!("field '{key}' must be a string")))
}

fn required_integer(node: &Value, key: &str) -> Result<i64, ConfigError> {
    let v = node
        .get(key)
        .ok_or_else(|| ConfigError::parse(format!("missing required field '{key}'")))?;
    v.as_i64()
        .ok_or_else(|| ConfigError::parse(format!("field '{key}' must be an integer")))
}
