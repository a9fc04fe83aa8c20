//! Error types for `schemaviz` operations

use thiserror::Error;

/// Main error type for `schemaviz` operations
#[derive(Error, Debug)]
pub enum SchemaVizError {
    /// Document parsing errors
    #[error("Failed to parse document: {message}")]
    ParseError {
        /// Error message
        message: String,
        /// File or position the error refers to, if known
        location: Option<String>,
    },

    /// Reference resolution errors
    #[error("Failed to resolve reference '{reference}': {reason}")]
    ReferenceError {
        /// Reference token as written in the document
        reference: String,
        /// Reason for failure
        reason: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO errors
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Errors raised while writing tabular output
    #[error("Output error: {0}")]
    OutputError(String),

    /// Errors raised while building, parsing or serializing RDF
    #[error("RDF error: {0}")]
    RdfError(String),

    /// A requested element does not exist in the input
    #[error("Not found: {0}")]
    NotFound(String),

    /// Generic errors with context
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for `schemaviz` operations
pub type Result<T> = std::result::Result<T, SchemaVizError>;

impl SchemaVizError {
    /// Create a new parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            location: None,
        }
    }

    /// Create a new parse error with location
    #[must_use]
    pub fn parse_at(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            location: Some(location.into()),
        }
    }

    /// Create a new reference error
    #[must_use]
    pub fn reference(reference: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ReferenceError {
            reference: reference.into(),
            reason: reason.into(),
        }
    }

    /// Create a new configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Create a new output error
    #[must_use]
    pub fn output(message: impl Into<String>) -> Self {
        Self::OutputError(message.into())
    }

    /// Create a new RDF error
    #[must_use]
    pub fn rdf(message: impl Into<String>) -> Self {
        Self::RdfError(message.into())
    }

    /// Create a not found error
    #[must_use]
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Create a serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError(message.into())
    }

    /// Create a generic error
    #[must_use]
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
            source: None,
        }
    }

    /// Create a generic error with source
    #[must_use]
    pub fn other_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<serde_json::Error> for SchemaVizError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for SchemaVizError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<toml::de::Error> for SchemaVizError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}

impl From<csv::Error> for SchemaVizError {
    fn from(err: csv::Error) -> Self {
        Self::OutputError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = SchemaVizError::parse("Invalid YAML");
        assert!(matches!(err, SchemaVizError::ParseError { .. }));

        let err = SchemaVizError::parse_at("Invalid syntax", "schema.yaml");
        match err {
            SchemaVizError::ParseError { location, .. } => {
                assert_eq!(location.as_deref(), Some("schema.yaml"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_display() {
        let err = SchemaVizError::reference("common.yaml#/Person", "File not found");
        let display = err.to_string();
        assert!(display.contains("common.yaml#/Person"));
        assert!(display.contains("File not found"));

        let err = SchemaVizError::not_found("schema 'Course' in components.schemas");
        assert_eq!(
            err.to_string(),
            "Not found: schema 'Course' in components.schemas"
        );
    }

    #[test]
    fn test_error_conversions() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: SchemaVizError = json_err.into();
        assert!(matches!(err, SchemaVizError::SerializationError(_)));

        let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: SchemaVizError = toml_err.into();
        assert!(matches!(err, SchemaVizError::ConfigError(_)));
    }

    #[test]
    fn test_other_keeps_source() {
        use std::error::Error as _;

        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SchemaVizError::other_with_source("Record 3 is not valid JSON", cause);
        assert_eq!(err.to_string(), "Record 3 is not valid JSON");
        assert!(err.source().is_some());

        assert!(SchemaVizError::other("plain").source().is_none());
    }
}
