//! YAML parser for schema documents
//!
//! YAML is first read into [`serde_yaml::Value`] and then converted, because
//! YAML mappings may have non-string keys (`200:` under OpenAPI `responses`)
//! that a JSON tree cannot hold directly.

use schemaviz_core::error::{Result, SchemaVizError};
use serde_json::{Map, Value};
use serde_yaml::Value as YamlValue;
use std::fs;
use std::path::Path;

use super::DocumentParser;

/// `YAML` parser implementation
#[derive(Default)]
pub struct YamlParser;

impl YamlParser {
    /// Create a new `YAML` parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentParser for YamlParser {
    fn parse_str(&self, content: &str) -> Result<Value> {
        let mut yaml: YamlValue = serde_yaml::from_str(content).map_err(yaml_error)?;
        // `<<: *anchor` merge keys
        yaml.apply_merge().map_err(yaml_error)?;
        Ok(yaml_to_json(yaml))
    }

    fn parse_file(&self, path: &Path) -> Result<Value> {
        let content = fs::read_to_string(path).map_err(SchemaVizError::IoError)?;

        self.parse_str(&content).map_err(|e| match e {
            SchemaVizError::ParseError { message, location } => SchemaVizError::ParseError {
                message: format!("{message} in file {}", path.display()),
                location,
            },
            other => other,
        })
    }
}

fn yaml_error(e: serde_yaml::Error) -> SchemaVizError {
    SchemaVizError::parse_at(
        format!("YAML parsing error: {e}"),
        e.location().map_or_else(
            || "unknown location".to_string(),
            |l| format!("line {}, column {}", l.line(), l.column()),
        ),
    )
}

/// Convert a YAML tree into a JSON tree, keeping mapping order
fn yaml_to_json(value: YamlValue) -> Value {
    match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map_or(Value::Null, Value::Number)
            }
        }
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
        YamlValue::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                map.insert(key_to_string(&key), yaml_to_json(value));
            }
            Value::Object(map)
        }
        YamlValue::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn key_to_string(key: &YamlValue) -> String {
    match key {
        YamlValue::String(s) => s.clone(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Null => "null".to_string(),
        YamlValue::Tagged(tagged) => key_to_string(&tagged.value),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_schema_fragment() -> schemaviz_core::Result<()> {
        let yaml = r"
type: object
required: [id]
properties:
  id:
    type: string
  tags:
    type: array
    minItems: 1
";

        let parser = YamlParser::new();
        let value = parser.parse_str(yaml)?;

        assert_eq!(value["type"], json!("object"));
        assert_eq!(value["required"], json!(["id"]));
        assert_eq!(value["properties"]["tags"]["minItems"], json!(1));
        let keys: Vec<&str> = value["properties"]
            .as_object()
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default();
        assert_eq!(keys, ["id", "tags"]);
        Ok(())
    }

    #[test]
    fn test_non_string_keys_become_strings() -> schemaviz_core::Result<()> {
        let yaml = r"
responses:
  200:
    description: OK
  true: yes
";

        let value = YamlParser::new().parse_str(yaml)?;
        assert_eq!(value["responses"]["200"]["description"], json!("OK"));
        assert_eq!(value["responses"]["true"], json!("yes"));
        Ok(())
    }

    #[test]
    fn test_merge_keys_are_applied() -> schemaviz_core::Result<()> {
        let yaml = r"
base: &base
  id:
    type: string
type: object
properties:
  <<: *base
  name:
    type: string
";

        let value = YamlParser::new().parse_str(yaml)?;
        let properties = &value["properties"];
        assert!(properties.get("<<").is_none());
        assert_eq!(properties["id"], json!({"type": "string"}));
        assert_eq!(properties["name"], json!({"type": "string"}));
        Ok(())
    }

    #[test]
    fn test_empty_document_is_null() -> schemaviz_core::Result<()> {
        let value = YamlParser::new().parse_str("")?;
        assert!(value.is_null());
        Ok(())
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let yaml = "invalid: yaml: content:";

        let result = YamlParser::new().parse_str(yaml);

        if let Err(SchemaVizError::ParseError { message, .. }) = result {
            assert!(message.contains("YAML parsing error"));
        } else {
            panic!("Expected ParseError");
        }
    }
}
