use crate::error::{Result, VersionBumpError};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Generic tree value for build descriptors.
///
/// Descriptor formats vary (Maven pom, package.json, Cargo.toml), so path
/// resolution works over this abstraction instead of a concrete document
/// type: a node is either a string-keyed map or scalar text.
#[derive(Debug, Clone, PartialEq)]
pub enum DocValue {
    Text(String),
    Map(BTreeMap<String, DocValue>),
}

impl DocValue {
    /// Returns the scalar text of a leaf node, or `None` for a map.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DocValue::Text(s) => Some(s),
            DocValue::Map(_) => None,
        }
    }
}

/// Descends a document tree following the given path segments.
///
/// Each segment must name a key in the current map node. On a missing key
/// (or when descent hits a scalar early) the error names the offending
/// segment and the trail walked so far.
///
/// # Returns
/// * `Ok(&DocValue)` - The node reached after consuming every segment
/// * `Err` - Descriptor error naming the missing segment and the trail
pub fn resolve_path<'a>(doc: &'a DocValue, segments: &[&str]) -> Result<&'a DocValue> {
    let mut trail = String::new();
    let mut current = doc;

    for segment in segments {
        let next = match current {
            DocValue::Map(map) => map.get(*segment),
            DocValue::Text(_) => None,
        };
        current = next.ok_or_else(|| {
            VersionBumpError::descriptor(format!(
                "Failed to find {} from {} when looking for version",
                segment, trail
            ))
        })?;
        trail.push('/');
        trail.push_str(segment);
    }

    Ok(current)
}

/// Loads and parses a descriptor file, dispatching on its extension.
///
/// Supported formats: `.xml`/`.pom` (XML), `.toml`, `.json`.
pub fn load_descriptor(path: &Path) -> Result<DocValue> {
    let text = fs::read_to_string(path).map_err(|e| {
        VersionBumpError::descriptor(format!(
            "Cannot read descriptor file {}: {}",
            path.display(),
            e
        ))
    })?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "xml" | "pom" => parse_xml(&text),
        "toml" => parse_toml(&text),
        "json" => parse_json(&text),
        other => Err(VersionBumpError::descriptor(format!(
            "Unsupported descriptor format '{}' for {}",
            other,
            path.display()
        ))),
    }
}

/// Parses an XML document into a [DocValue] tree.
///
/// The root element becomes the single key of the top-level map, so a Maven
/// pom resolves under `/project/...`. Elements with element children become
/// maps; leaf elements become their trimmed text. Repeated sibling names keep
/// the last occurrence.
pub fn parse_xml(text: &str) -> Result<DocValue> {
    let doc = roxmltree::Document::parse(text)
        .map_err(|e| VersionBumpError::descriptor(format!("Invalid XML descriptor: {}", e)))?;

    let root = doc.root_element();
    let mut map = BTreeMap::new();
    map.insert(root.tag_name().name().to_string(), xml_element_value(root));
    Ok(DocValue::Map(map))
}

fn xml_element_value(node: roxmltree::Node) -> DocValue {
    let children: Vec<_> = node.children().filter(|n| n.is_element()).collect();
    if children.is_empty() {
        return DocValue::Text(node.text().unwrap_or("").trim().to_string());
    }

    let mut map = BTreeMap::new();
    for child in children {
        map.insert(child.tag_name().name().to_string(), xml_element_value(child));
    }
    DocValue::Map(map)
}

/// Parses a TOML document into a [DocValue] tree.
pub fn parse_toml(text: &str) -> Result<DocValue> {
    let value: toml::Value = text
        .parse()
        .map_err(|e| VersionBumpError::descriptor(format!("Invalid TOML descriptor: {}", e)))?;
    Ok(toml_value(value))
}

fn toml_value(value: toml::Value) -> DocValue {
    match value {
        toml::Value::Table(table) => DocValue::Map(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_value(v)))
                .collect(),
        ),
        toml::Value::String(s) => DocValue::Text(s),
        other => DocValue::Text(other.to_string()),
    }
}

/// Parses a JSON document into a [DocValue] tree.
pub fn parse_json(text: &str) -> Result<DocValue> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| VersionBumpError::descriptor(format!("Invalid JSON descriptor: {}", e)))?;
    Ok(json_value(value))
}

fn json_value(value: serde_json::Value) -> DocValue {
    match value {
        serde_json::Value::Object(object) => DocValue::Map(
            object
                .into_iter()
                .map(|(k, v)| (k, json_value(v)))
                .collect(),
        ),
        serde_json::Value::String(s) => DocValue::Text(s),
        other => DocValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_nested_path() {
        let doc = parse_json(r#"{"a": {"b": 5}}"#).unwrap();
        let leaf = resolve_path(&doc, &["a", "b"]).unwrap();
        assert_eq!(leaf.as_text(), Some("5"));
    }

    #[test]
    fn test_resolve_missing_segment_reports_trail() {
        let doc = parse_json(r#"{"a": {"b": 5}}"#).unwrap();
        let err = resolve_path(&doc, &["a", "c"]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Failed to find c from /a"), "got: {}", msg);
    }

    #[test]
    fn test_resolve_missing_first_segment() {
        let doc = parse_json(r#"{"a": 1}"#).unwrap();
        let err = resolve_path(&doc, &["x"]).unwrap_err();
        assert!(err.to_string().contains("Failed to find x from "));
    }

    #[test]
    fn test_resolve_through_scalar_fails() {
        let doc = parse_json(r#"{"a": "leaf"}"#).unwrap();
        let err = resolve_path(&doc, &["a", "b"]).unwrap_err();
        assert!(err.to_string().contains("Failed to find b from /a"));
    }

    #[test]
    fn test_resolve_empty_path_returns_root() {
        let doc = parse_json(r#"{"a": 1}"#).unwrap();
        assert_eq!(resolve_path(&doc, &[]).unwrap(), &doc);
    }

    #[test]
    fn test_parse_pom_xml() {
        let pom = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
    <modelVersion>4.0.0</modelVersion>
    <groupId>com.example</groupId>
    <artifactId>demo</artifactId>
    <version>1.0.0</version>
</project>"#;
        let doc = parse_xml(pom).unwrap();
        let version = resolve_path(&doc, &["project", "version"]).unwrap();
        assert_eq!(version.as_text(), Some("1.0.0"));
    }

    #[test]
    fn test_parse_xml_nested_elements() {
        let xml = "<project><parent><version>2.1.0</version></parent><version>1.0.0</version></project>";
        let doc = parse_xml(xml).unwrap();
        let parent_version = resolve_path(&doc, &["project", "parent", "version"]).unwrap();
        assert_eq!(parent_version.as_text(), Some("2.1.0"));
    }

    #[test]
    fn test_parse_invalid_xml() {
        let err = parse_xml("<project><version>").unwrap_err();
        assert!(err.to_string().contains("Invalid XML"));
    }

    #[test]
    fn test_parse_toml_descriptor() {
        let doc = parse_toml("[package]\nversion = \"0.3.1\"\n").unwrap();
        let version = resolve_path(&doc, &["package", "version"]).unwrap();
        assert_eq!(version.as_text(), Some("0.3.1"));
    }

    #[test]
    fn test_parse_json_descriptor() {
        let doc = parse_json(r#"{"name": "demo", "version": "2.0.0"}"#).unwrap();
        let version = resolve_path(&doc, &["version"]).unwrap();
        assert_eq!(version.as_text(), Some("2.0.0"));
    }

    #[test]
    fn test_map_node_has_no_text() {
        let doc = parse_json(r#"{"a": {"b": 1}}"#).unwrap();
        let node = resolve_path(&doc, &["a"]).unwrap();
        assert_eq!(node.as_text(), None);
    }
}
