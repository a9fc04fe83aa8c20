//! Configuration types for `schemaviz`

use crate::error::{Result, SchemaVizError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration for the `schemaviz` tools
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SchemaVizConfig {
    /// Schema flattening configuration
    pub flatten: FlattenConfig,

    /// Tabular output configuration
    pub output: OutputConfig,

    /// RDF conversion configuration
    pub rdf: RdfConfig,
}

/// Schema flattening configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlattenConfig {
    /// File extensions parsed as YAML; everything else is parsed as JSON
    pub yaml_extensions: Vec<String>,

    /// Path shown for properties of the root object
    pub root_label: String,

    /// Suffix appended to the path of each `anyOf` branch
    pub any_of_marker: String,

    /// Suffix appended to the path of each `oneOf` branch
    pub one_of_marker: String,

    /// Largest enum still listed inline in a type signature
    pub enum_inline_limit: usize,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self {
            yaml_extensions: vec!["yaml".to_string(), "yml".to_string()],
            root_label: "/".to_string(),
            any_of_marker: "[or]/".to_string(),
            one_of_marker: "[xor]/".to_string(),
            enum_inline_limit: 3,
        }
    }
}

/// Tabular formats the flattener output can be written as
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// Comma separated values
    #[default]
    Csv,
    /// Tab separated values
    Tsv,
    /// Excel workbook
    Xlsx,
}

impl TableFormat {
    /// File extension used when no output path is given
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Xlsx => "xlsx",
        }
    }

    /// Human readable name used in log messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Tsv => "TSV",
            Self::Xlsx => "XLSX",
        }
    }
}

/// Tabular output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when none is given on the command line
    pub format: TableFormat,

    /// Number of rows printed in the terminal preview
    pub preview_rows: usize,

    /// Worksheet name for workbook output
    pub xlsx_sheet_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: TableFormat::Csv,
            preview_rows: 10,
            xlsx_sheet_name: "Schema".to_string(),
        }
    }
}

/// RDF conversion configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RdfConfig {
    /// Prefix bound to the base IRI of generated vocabularies
    pub prefix: String,

    /// Language kept when reading multilingual vocabularies
    pub language: String,

    /// File name used when all SHACL shapes are merged into one graph
    pub merged_file_name: String,
}

impl Default for RdfConfig {
    fn default() -> Self {
        Self {
            prefix: "api".to_string(),
            language: "en".to_string(),
            merged_file_name: "ELM-for-DESM.ttl".to_string(),
        }
    }
}

impl SchemaVizConfig {
    /// Load configuration from a YAML file, or TOML when the extension is `.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or fails
    /// [`SchemaVizConfig::validate`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let config: Self = if is_toml {
            toml::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)
                .map_err(|e| SchemaVizError::config(format!("{}: {e}", path.display())))?
        };

        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check values the tools cannot work with
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.flatten.root_label.is_empty() {
            return Err(SchemaVizError::config("flatten.root_label must not be empty"));
        }
        if self.flatten.any_of_marker.is_empty() || self.flatten.one_of_marker.is_empty() {
            return Err(SchemaVizError::config(
                "flatten.any_of_marker and flatten.one_of_marker must not be empty",
            ));
        }
        if self.output.preview_rows == 0 {
            return Err(SchemaVizError::config("output.preview_rows must be at least 1"));
        }
        if self.output.xlsx_sheet_name.is_empty() || self.output.xlsx_sheet_name.len() > 31 {
            return Err(SchemaVizError::config(
                "output.xlsx_sheet_name must be between 1 and 31 characters",
            ));
        }
        if self.rdf.language.is_empty() {
            return Err(SchemaVizError::config("rdf.language must not be empty"));
        }
        Ok(())
    }
}
