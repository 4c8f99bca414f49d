//! Parse diagnostics: line numbers, breadcrumbs, and message decoration
//!
//! The YAML crate reports positions only for syntax errors, so the parser
//! keeps its own [`SourceMap`] of where the interesting nodes start, plus a
//! [`DiagnosticTracker`] remembering the last named node it got through. Both
//! are explicit values threaded through the parse; nothing here is shared or
//! hidden state. [`decorate`] is the pure function that turns an underlying
//! failure into the final user-facing message.

use crate::config::error::PARSE_ERROR_PREFIX;
use std::fmt;

/// Kind of a successfully parsed named node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Version,
    Group,
    Item,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NodeKind::Version => "version",
            NodeKind::Group => "group",
            NodeKind::Item => "item",
        })
    }
}

/// The single most recently parsed named node.
#[derive(Debug, Clone)]
pub struct ParsedNode {
    pub kind: NodeKind,
    pub name: String,
    /// 1-based source line, 0 when unknown
    pub line: usize,
    /// Source line text, for logging
    pub content: String,
}

/// Remembers the last named node the parser got through, so a later failure
/// can be anchored with "it broke somewhere after here".
#[derive(Debug, Default)]
pub struct DiagnosticTracker {
    last: Option<ParsedNode>,
}

impl DiagnosticTracker {
    pub fn record(&mut self, kind: NodeKind, name: &str, line: Option<usize>, content: &str) {
        self.last = Some(ParsedNode {
            kind,
            name: name.to_string(),
            line: line.unwrap_or(0),
            content: content.to_string(),
        });
    }

    pub fn last(&self) -> Option<&ParsedNode> {
        self.last.as_ref()
    }
}

/// Decorate an underlying parse failure with positional context.
///
/// Any already-embedded parse prefix is stripped (repeatedly) first. If the
/// failing node's line is known and the message does not already cite a line,
/// the message becomes `Error parsing <context> at line <N>: <message>`;
/// a message that already carries a line reference is kept verbatim so an
/// outer, less specific decoration never overwrites an inner one. With
/// `include_last_parsed`, a breadcrumb naming the tracker's node is appended
/// unless it would point at the failing line itself or is already present.
pub fn decorate(
    context: &str,
    line: Option<usize>,
    cause: &str,
    tracker: &DiagnosticTracker,
    include_last_parsed: bool,
) -> String {
    let mut message = strip_parse_prefix(cause).to_string();

    message = match line {
        Some(n) if n > 0 => {
            if mentions_line(&message) {
                message
            } else {
                format!("Error parsing {context} at line {n}: {message}")
            }
        }
        _ => {
            if message.starts_with("Error parsing ") {
                message
            } else {
                format!("Error parsing {context}: {message}")
            }
        }
    };

    if include_last_parsed {
        if let Some(last) = tracker.last() {
            if last.line > 0
                && Some(last.line) != line
                && !message.contains("Last successfully parsed")
            {
                message.push_str(&format!(
                    "\nLast successfully parsed: {} '{}' at line {}",
                    last.kind, last.name, last.line
                ));
            }
        }
    }

    message
}

fn strip_parse_prefix(message: &str) -> &str {
    let mut stripped = message;
    while let Some(rest) = stripped.strip_prefix(PARSE_ERROR_PREFIX) {
        stripped = rest;
    }
    stripped
}

fn mentions_line(message: &str) -> bool {
    message.contains(" line ")
}

/// Line positions of the nodes a document declares, recovered by a scan over
/// the raw text. Only used to decorate errors; the YAML parser remains the
/// single parser of record, so a scan that comes up empty merely loses line
/// numbers, never correctness.
#[derive(Debug, Default)]
pub struct SourceMap {
    version: Option<usize>,
    groups: Vec<GroupLines>,
    items: Vec<usize>,
    lines: Vec<String>,
}

#[derive(Debug)]
struct GroupLines {
    start: usize,
    items: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    None,
    Groups,
    Items,
    Other,
}

impl SourceMap {
    pub fn scan(content: &str) -> Self {
        let mut map = SourceMap {
            lines: content.lines().map(str::to_string).collect(),
            ..SourceMap::default()
        };

        let mut section = Section::None;
        // Indent of the dash lines that open groups and items respectively;
        // learned from the first entry seen at each level.
        let mut group_indent: Option<usize> = None;
        let mut item_indent: Option<usize> = None;

        for (idx, raw) in content.lines().enumerate() {
            let line_no = idx + 1;
            let text = raw.trim_start();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            let indent = raw.len() - text.len();
            let is_entry = text == "-" || text.starts_with("- ");

            if !is_entry && indent == 0 {
                let key = text.split(':').next().unwrap_or("").trim();
                section = match key {
                    "version" => {
                        map.version = Some(line_no);
                        Section::Other
                    }
                    "groups" => {
                        group_indent = None;
                        item_indent = None;
                        Section::Groups
                    }
                    "items" => {
                        item_indent = None;
                        Section::Items
                    }
                    _ => Section::Other,
                };
                continue;
            }

            if !is_entry {
                continue;
            }

            match section {
                Section::Groups => match group_indent {
                    None => {
                        group_indent = Some(indent);
                        item_indent = None;
                        map.groups.push(GroupLines {
                            start: line_no,
                            items: Vec::new(),
                        });
                    }
                    Some(g) if indent == g => {
                        item_indent = None;
                        map.groups.push(GroupLines {
                            start: line_no,
                            items: Vec::new(),
                        });
                    }
                    Some(g) if indent > g => {
                        let deeper = match item_indent {
                            None => {
                                item_indent = Some(indent);
                                true
                            }
                            Some(i) => indent == i,
                        };
                        if deeper {
                            if let Some(group) = map.groups.last_mut() {
                                group.items.push(line_no);
                            }
                        }
                    }
                    _ => {}
                },
                Section::Items => {
                    let matches = match item_indent {
                        None => {
                            item_indent = Some(indent);
                            true
                        }
                        Some(i) => indent == i,
                    };
                    if matches {
                        map.items.push(line_no);
                    }
                }
                _ => {}
            }
        }

        map
    }

    pub fn version_line(&self) -> Option<usize> {
        self.version
    }

    pub fn group_line(&self, index: usize) -> Option<usize> {
        self.groups.get(index).map(|g| g.start)
    }

    pub fn group_item_line(&self, group: usize, item: usize) -> Option<usize> {
        self.groups.get(group).and_then(|g| g.items.get(item)).copied()
    }

    pub fn top_item_line(&self, index: usize) -> Option<usize> {
        self.items.get(index).copied()
    }

    /// Trimmed text of a 1-based line, empty when out of range.
    pub fn line_text(&self, line: Option<usize>) -> &str {
        line.and_then(|n| n.checked_sub(1))
            .and_then(|i| self.lines.get(i))
            .map(|s| s.trim())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "\
version: \"1.0\"
groups:
  - name: main
    items:
      - name: build status
        type: image
        value: https://example.com/badge.svg
      - type: web
        value: https://example.com
items:
  - type: iframe
    value: <p>hello</p>
";

    #[test]
    fn scan_finds_node_lines() {
        let map = SourceMap::scan(DOC);
        assert_eq!(map.version_line(), Some(1));
        assert_eq!(map.group_line(0), Some(3));
        assert_eq!(map.group_item_line(0, 0), Some(5));
        assert_eq!(map.group_item_line(0, 1), Some(8));
        assert_eq!(map.top_item_line(0), Some(11));
        assert_eq!(map.top_item_line(1), None);
    }

    #[test]
    fn scan_handles_flush_left_sequences() {
        // serde_yaml emits sequence dashes at the same indent as the key
        let doc = "\
version: '1.0'
groups:
- name: g
  items:
  - type: web
    value: https://example.com
";
        let map = SourceMap::scan(doc);
        assert_eq!(map.group_line(0), Some(3));
        assert_eq!(map.group_item_line(0, 0), Some(5));
    }

    #[test]
    fn line_text_is_trimmed_and_total() {
        let map = SourceMap::scan(DOC);
        assert_eq!(map.line_text(Some(3)), "- name: main");
        assert_eq!(map.line_text(Some(999)), "");
        assert_eq!(map.line_text(None), "");
    }

    #[test]
    fn decorate_adds_line_and_context() {
        let tracker = DiagnosticTracker::default();
        let message = decorate("item", Some(7), "invalid type: pdf", &tracker, true);
        assert_eq!(message, "Error parsing item at line 7: invalid type: pdf");
    }

    #[test]
    fn decorate_keeps_inner_line_reference_verbatim() {
        let tracker = DiagnosticTracker::default();
        let inner = "Error parsing item at line 7: invalid type: pdf";
        let message = decorate("group 'main'", Some(3), inner, &tracker, false);
        assert_eq!(message, inner);
    }

    #[test]
    fn decorate_appends_breadcrumb_from_a_different_line() {
        let mut tracker = DiagnosticTracker::default();
        tracker.record(NodeKind::Group, "main", Some(3), "- name: main");
        let message = decorate("item", Some(7), "invalid type: pdf", &tracker, true);
        assert!(message.contains("at line 7"));
        assert!(message.ends_with("Last successfully parsed: group 'main' at line 3"));
    }

    #[test]
    fn decorate_suppresses_breadcrumb_on_the_failing_line() {
        let mut tracker = DiagnosticTracker::default();
        tracker.record(NodeKind::Item, "clock", Some(7), "- name: clock");
        let message = decorate("item", Some(7), "invalid type: pdf", &tracker, true);
        assert!(!message.contains("Last successfully parsed"));
    }

    #[test]
    fn decorate_strips_repeated_prefixes() {
        let tracker = DiagnosticTracker::default();
        let cause = format!(
            "{p}{p}something broke",
            p = crate::config::error::PARSE_ERROR_PREFIX
        );
        let message = decorate("item", None, &cause, &tracker, false);
        assert_eq!(message, "Error parsing item: something broke");
    }

    #[test]
    fn decorate_without_line_omits_line_clause() {
        let tracker = DiagnosticTracker::default();
        let message = decorate("group 'g'", None, "missing items", &tracker, false);
        assert_eq!(message, "Error parsing group 'g': missing items");
    }
}
