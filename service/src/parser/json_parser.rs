//! JSON parser for schema documents

use schemaviz_core::error::{Result, SchemaVizError};
use serde_json::Value;
use std::fs;
use std::path::Path;

use super::DocumentParser;

/// `JSON` parser implementation
#[derive(Default)]
pub struct JsonParser;

impl JsonParser {
    /// Create a new `JSON` parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentParser for JsonParser {
    fn parse_str(&self, content: &str) -> Result<Value> {
        serde_json::from_str(content).map_err(|e| {
            SchemaVizError::parse_at(
                format!("JSON parsing error: {e}"),
                format!("line {}, column {}", e.line(), e.column()),
            )
        })
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_key_order() -> schemaviz_core::Result<()> {
        let json = r#"{"zeta": 1, "alpha": 2, "mid": 3}"#;

        let parser = JsonParser::new();
        let value = parser.parse_str(json)?;

        let keys: Vec<&str> = value
            .as_object()
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
        Ok(())
    }

    #[test]
    fn test_parse_invalid_json() {
        let json = r#"{"invalid": json content"#;

        let parser = JsonParser::new();
        let result = parser.parse_str(json);

        assert!(result.is_err());
        if let Err(SchemaVizError::ParseError { message, location }) = result {
            assert!(message.contains("JSON parsing error"));
            assert!(location.is_some());
        } else {
            panic!("Expected ParseError");
        }
    }
}
