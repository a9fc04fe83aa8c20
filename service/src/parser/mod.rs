//! Document parsing for schema files
//!
//! Schema documents are parsed into an ordered [`serde_json::Value`] tree
//! regardless of their serialization, so the flattener and the RDF
//! converters only ever deal with one representation.

use schemaviz_core::error::Result;
use serde_json::Value;
use std::path::Path;

pub mod json_parser;
pub mod yaml_parser;

pub use json_parser::JsonParser;
pub use yaml_parser::YamlParser;

/// Trait for document parsers
pub trait DocumentParser {
    /// Parse a document from string content
    ///
    /// # Errors
    ///
    /// Returns a `SchemaVizError` if parsing fails
    fn parse_str(&self, content: &str) -> Result<Value>;

    /// Parse a document from file
    ///
    /// # Errors
    ///
    /// Returns a `SchemaVizError` if:
    /// - File cannot be read
    /// - Parsing fails
    fn parse_file(&self, path: &Path) -> Result<Value>;
}

/// Serialization detected for a document path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// YAML document
    Yaml,
    /// JSON document
    Json,
}

/// Main parser that picks the format from the file extension
///
/// Extensions listed as YAML select the YAML parser; every other extension,
/// or none at all, falls back to JSON.
pub struct Parser {
    yaml: YamlParser,
    json: JsonParser,
    yaml_extensions: Vec<String>,
}

impl Parser {
    /// Create a parser treating `.yaml` and `.yml` as YAML
    #[must_use]
    pub fn new() -> Self {
        Self::with_yaml_extensions(vec!["yaml".to_string(), "yml".to_string()])
    }

    /// Create a parser with a custom list of YAML extensions
    #[must_use]
    pub fn with_yaml_extensions(yaml_extensions: Vec<String>) -> Self {
        Self {
            yaml: YamlParser::new(),
            json: JsonParser::new(),
            yaml_extensions,
        }
    }

    /// Detect the serialization of a path from its extension (case-insensitive)
    #[must_use]
    pub fn detect_format(&self, path: &Path) -> DocumentFormat {
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.yaml_extensions
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            });

        if is_yaml {
            DocumentFormat::Yaml
        } else {
            DocumentFormat::Json
        }
    }

    /// Parse a file, detecting its format from the extension
    ///
    /// # Errors
    ///
    /// Returns a `SchemaVizError` if the file cannot be read or parsed.
    pub fn parse_file(&self, path: &Path) -> Result<Value> {
        match self.detect_format(path) {
            DocumentFormat::Yaml => self.yaml.parse_file(path),
            DocumentFormat::Json => self.json.parse_file(path),
        }
    }

    /// Parse string content in the given format
    ///
    /// # Errors
    ///
    /// Returns a `SchemaVizError` if parsing fails.
    pub fn parse_str(&self, content: &str, format: DocumentFormat) -> Result<Value> {
        match format {
            DocumentFormat::Yaml => self.yaml.parse_str(content),
            DocumentFormat::Json => self.json.parse_str(content),
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_detection() {
        let parser = Parser::new();
        assert_eq!(
            parser.detect_format(&PathBuf::from("schema.yaml")),
            DocumentFormat::Yaml
        );
        assert_eq!(
            parser.detect_format(&PathBuf::from("schema.YML")),
            DocumentFormat::Yaml
        );
        assert_eq!(
            parser.detect_format(&PathBuf::from("schema.json")),
            DocumentFormat::Json
        );
        assert_eq!(
            parser.detect_format(&PathBuf::from("schema")),
            DocumentFormat::Json
        );
    }

    #[test]
    fn test_custom_yaml_extensions() {
        let parser = Parser::with_yaml_extensions(vec!["openapi".to_string()]);
        assert_eq!(
            parser.detect_format(&PathBuf::from("api.openapi")),
            DocumentFormat::Yaml
        );
        assert_eq!(
            parser.detect_format(&PathBuf::from("api.yaml")),
            DocumentFormat::Json
        );
    }
}
