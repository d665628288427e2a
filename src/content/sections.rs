//! Section and document parsing
//!
//! A task introduction is a JSON array of `{title, content}` sections; a
//! simulation description is a single JSON `{title, content}` object. Both
//! fields predate the JSON encoding, so legacy rows may hold raw HTML or
//! plain text instead.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Leading `<h2>` heading of a legacy HTML payload
static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<h2>(.*?)</h2>").unwrap_or_else(|_| unreachable!("static pattern"))
});

/// One titled section of introduction/overview content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Section {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Section {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self { title: title.into(), content: content.into() }
    }

    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }
}

/// Title/content pair used by the simulation description field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Document {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

fn looks_like_json(raw: &str) -> bool {
    let trimmed = raw.trim_start();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

/// Decode a section array from its stored representation.
///
/// Tolerates: absent/empty input (one empty default section), a JSON value
/// that is not an array or holds malformed items (default section, warned),
/// malformed JSON (default section, warned), legacy HTML (heading extracted
/// as title), and legacy plain text (whole string as content).
pub fn parse_sections(raw: Option<&str>) -> Vec<Section> {
    let Some(raw) = raw else {
        return vec![Section::default()];
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return vec![Section::default()];
    }

    if !looks_like_json(trimmed) {
        return vec![legacy_section(trimmed)];
    }

    let parsed: Value = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, "malformed section content, using default");
            return vec![Section::default()];
        }
    };

    let Value::Array(items) = parsed else {
        tracing::warn!("section content is not an array, using default");
        return vec![Section::default()];
    };

    let sections: Vec<Section> = items
        .into_iter()
        .filter_map(|item| {
            let well_formed = item
                .as_object()
                .is_some_and(|fields| fields.contains_key("title") && fields.contains_key("content"));
            if well_formed {
                serde_json::from_value(item).ok()
            } else {
                None
            }
        })
        .collect();

    if sections.is_empty() {
        vec![Section::default()]
    } else {
        sections
    }
}

/// Split a legacy non-JSON payload into a single best-effort section
fn legacy_section(raw: &str) -> Section {
    if raw.contains('<') {
        if let Some(captures) = HEADING.captures(raw) {
            let title = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
            let content = HEADING.replace(raw, "").trim().to_string();
            return Section::new(title, content);
        }
        return Section::new("", raw);
    }
    Section::new("", raw)
}

/// Drop all-blank sections before serialization
pub fn normalize_sections(sections: &[Section]) -> Vec<Section> {
    sections
        .iter()
        .filter(|section| !section.is_blank())
        .cloned()
        .collect()
}

/// Encode sections for transmission; no sections encode as the empty string
pub fn encode_sections(sections: &[Section]) -> String {
    let kept = normalize_sections(sections);
    if kept.is_empty() {
        return String::new();
    }
    serde_json::to_string(&kept).unwrap_or_default()
}

/// Decode a description document from its stored representation.
///
/// Same tolerance rules as [`parse_sections`], but object-shaped; a stored
/// section array is flattened into one document (first title wins, contents
/// concatenated).
pub fn parse_document(raw: Option<&str>) -> Document {
    let Some(raw) = raw else {
        return Document::default();
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Document::default();
    }

    if !looks_like_json(trimmed) {
        let section = legacy_section(trimmed);
        return Document { title: section.title, content: section.content };
    }

    let parsed: Value = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, "malformed document content, keeping raw text");
            return Document { title: String::new(), content: trimmed.to_string() };
        }
    };

    if parsed.is_object() {
        serde_json::from_value(parsed).unwrap_or_default()
    } else if let Value::Array(items) = parsed {
        flatten_sections(items)
    } else {
        Document::default()
    }
}

fn flatten_sections(items: Vec<Value>) -> Document {
    let sections: Vec<Section> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    let Some(first) = sections.first() else {
        return Document::default();
    };
    if sections.len() == 1 {
        return Document { title: first.title.clone(), content: first.content.clone() };
    }

    let mut html = String::new();
    for (index, section) in sections.iter().enumerate() {
        if index > 0 && !section.title.trim().is_empty() {
            html.push_str(&format!("<h3>{}</h3>", section.title));
        }
        if !section.content.is_empty() {
            if section.content.contains('<') {
                html.push_str(&section.content);
            } else {
                html.push_str(&format!("<p>{}</p>", section.content.replace('\n', "<br>")));
            }
        }
    }
    Document { title: sections[0].title.clone(), content: html }
}

/// Encode a description document for transmission
pub fn encode_document(document: &Document) -> String {
    serde_json::to_string(document).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty_input_default() {
        assert_eq!(parse_sections(None), vec![Section::default()]);
        assert_eq!(parse_sections(Some("")), vec![Section::default()]);
        assert_eq!(parse_sections(Some("   ")), vec![Section::default()]);
    }

    #[test]
    fn test_malformed_json_defaults_without_error() {
        tracing_subscriber::fmt().with_test_writer().try_init().ok();
        let sections = parse_sections(Some("{not json"));
        assert_eq!(sections, vec![Section::new("", "")]);
    }

    #[test]
    fn test_non_array_json_defaults() {
        assert_eq!(parse_sections(Some(r#"{"title":"x","content":"y"}"#)), vec![Section::default()]);
        assert_eq!(parse_sections(Some("42")), vec![Section::default()]);
    }

    #[test]
    fn test_items_missing_keys_are_dropped() {
        let sections = parse_sections(Some(
            r#"[{"title":"Goals","content":"<p>x</p>"},{"heading":"bad"},null]"#,
        ));
        assert_eq!(sections, vec![Section::new("Goals", "<p>x</p>")]);
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        let sections = vec![Section::new("T", "<p>x</p>")];
        let encoded = encode_sections(&sections);
        assert_eq!(parse_sections(Some(&encoded)), sections);
    }

    #[test]
    fn test_normalize_drops_blank_sections() {
        let sections = vec![
            Section::new("", "  "),
            Section::new("Keep", ""),
            Section::new("", "kept too"),
        ];
        let kept = normalize_sections(&sections);
        assert_eq!(kept.len(), 2);
        assert_eq!(encode_sections(&[Section::default()]), "");
    }

    #[test]
    fn test_legacy_html_extracts_heading() {
        let section = parse_sections(Some("<h2>Welcome</h2><p>body</p>"));
        assert_eq!(section, vec![Section::new("Welcome", "<p>body</p>")]);
    }

    #[test]
    fn test_legacy_plain_text_becomes_content() {
        let section = parse_sections(Some("just some notes"));
        assert_eq!(section, vec![Section::new("", "just some notes")]);
    }

    #[test]
    fn test_document_object_shape() {
        let document = parse_document(Some(r#"{"title":"About","content":"<p>hi</p>"}"#));
        assert_eq!(document, Document { title: "About".into(), content: "<p>hi</p>".into() });
    }

    #[test]
    fn test_document_flattens_multi_section_array() {
        let document = parse_document(Some(
            r#"[{"title":"A","content":"first"},{"title":"B","content":"second"}]"#,
        ));
        assert_eq!(document.title, "A");
        assert_eq!(document.content, "<p>first</p><h3>B</h3><p>second</p>");
    }

    #[test]
    fn test_document_single_element_array() {
        let document = parse_document(Some(r#"[{"title":"A","content":"only"}]"#));
        assert_eq!(document, Document { title: "A".into(), content: "only".into() });
    }

    #[test]
    fn test_document_malformed_json_keeps_raw() {
        let document = parse_document(Some("{broken"));
        assert_eq!(document.title, "");
        assert_eq!(document.content, "{broken");
    }
}
