//! Schema walker producing flat property records

use super::cardinality::Cardinality;
use super::loader::{DocumentLoader, LoaderStats, SchemaDocument};
use super::resolver::{ReferenceResolver, ResolutionStats};
use super::shape::{Combinator, SchemaShape, declares_type, is_object_like, reference_of};
use super::type_signature::type_signature;
use crate::parser::Parser;
use schemaviz_core::config::FlattenConfig;
use schemaviz_core::types::PropertyRecord;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Flattens a schema document into one record per declared property
///
/// Each call to [`SchemaFlattener::visualize`] starts from a clean state:
/// no records, no cached documents and no active references.
pub struct SchemaFlattener {
    resolver: ReferenceResolver,
    config: FlattenConfig,
    records: Vec<PropertyRecord>,
}

impl SchemaFlattener {
    /// Create a flattener resolving relative paths against `base_path`
    #[must_use]
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self::with_config(base_path, FlattenConfig::default())
    }

    /// Create a flattener with custom settings
    #[must_use]
    pub fn with_config(base_path: impl Into<PathBuf>, config: FlattenConfig) -> Self {
        let parser = Parser::with_yaml_extensions(config.yaml_extensions.clone());
        let loader = DocumentLoader::with_parser(base_path, parser);
        Self {
            resolver: ReferenceResolver::new(loader),
            config,
            records: Vec::new(),
        }
    }

    /// Settings in use
    #[must_use]
    pub const fn config(&self) -> &FlattenConfig {
        &self.config
    }

    /// Load `schema_file` and flatten it
    ///
    /// A missing or unparsable root file is logged and yields no records.
    pub fn visualize(&mut self, schema_file: impl AsRef<Path>) -> Vec<PropertyRecord> {
        self.reset();
        let document = self.resolver.loader_mut().load(schema_file.as_ref());
        info!("Flattening {}", document.path().display());
        self.flatten(&document)
    }

    /// Flatten a document that is already in memory
    ///
    /// File references inside it resolve against the directory of its path.
    pub fn visualize_document(&mut self, document: SchemaDocument) -> Vec<PropertyRecord> {
        self.reset();
        self.flatten(&Arc::new(document))
    }

    /// Loader counters of the last run
    #[must_use]
    pub const fn loader_stats(&self) -> LoaderStats {
        self.resolver.loader_stats()
    }

    /// Placeholders substituted during the last run
    #[must_use]
    pub const fn resolution_stats(&self) -> &ResolutionStats {
        self.resolver.stats()
    }

    fn reset(&mut self) {
        self.records.clear();
        self.resolver.reset();
    }

    fn flatten(&mut self, document: &Arc<SchemaDocument>) -> Vec<PropertyRecord> {
        self.visit(document.root(), "", &[], document);
        debug!(
            "Flattened {} properties, {:?}, {:?}",
            self.records.len(),
            self.resolver.loader_stats(),
            self.resolver.stats()
        );
        std::mem::take(&mut self.records)
    }

    fn visit(
        &mut self,
        fragment: &Value,
        path: &str,
        required: &[&str],
        document: &Arc<SchemaDocument>,
    ) {
        match SchemaShape::classify(fragment) {
            SchemaShape::Reference(reference) => self.follow(reference, path, required, document),
            SchemaShape::Combinator { kind, branches } => {
                let branch_path = match kind {
                    Combinator::AllOf => path.to_string(),
                    Combinator::AnyOf => format!("{path}{}", self.config.any_of_marker),
                    Combinator::OneOf => format!("{path}{}", self.config.one_of_marker),
                };
                for branch in branches {
                    self.visit(branch, &branch_path, required, document);
                }
            }
            SchemaShape::Object {
                properties,
                required: own_required,
            } => {
                if let Some(properties) = properties {
                    self.visit_properties(properties, path, &own_required, document);
                }
            }
            SchemaShape::Array { items } => {
                if is_object_like(items) {
                    self.visit(items, &format!("{path}[]"), &[], document);
                }
            }
            SchemaShape::Leaf => {}
        }
    }

    fn visit_properties(
        &mut self,
        properties: &Map<String, Value>,
        path: &str,
        required: &[&str],
        document: &Arc<SchemaDocument>,
    ) {
        let display_path = if path.is_empty() {
            self.config.root_label.clone()
        } else {
            path.to_string()
        };

        for (name, property) in properties {
            self.records.push(PropertyRecord::new(
                display_path.as_str(),
                name,
                type_signature(property, self.config.enum_inline_limit),
                Cardinality::derive(property, required, name).to_string(),
                description_of(property),
            ));

            let property_path = format!("{path}/{name}");
            if is_object_like(property) {
                self.visit(property, &property_path, &[], document);
            } else if declares_type(property, "array")
                && let Some(items) = property.get("items")
            {
                let items_path = format!("{property_path}[]");
                if is_object_like(items) {
                    self.visit(items, &items_path, &[], document);
                } else if let Some(reference) = reference_of(items) {
                    self.follow(reference, &items_path, &[], document);
                }
            } else if let Some(reference) = reference_of(property) {
                self.follow(reference, &property_path, &[], document);
            }
        }
    }

    fn follow(
        &mut self,
        reference: &str,
        path: &str,
        required: &[&str],
        document: &Arc<SchemaDocument>,
    ) {
        let resolved = self.resolver.resolve(reference, document);
        self.visit(resolved.fragment(), path, required, resolved.document());
        self.resolver.release(resolved);
    }
}

fn description_of(property: &Value) -> String {
    match property.get("description") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
