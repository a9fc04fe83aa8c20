//! JSON-LD documents assembled from JSON-encoded records
//!
//! ECIU exports are an array whose entries are JSON objects serialized as
//! strings. A [`ContextInjector`] decodes every entry, places the records
//! under `@graph` and attaches a shared `@context`, which makes the export
//! readable as linked data.

use super::graph::VocabularyGraph;
use oxigraph::io::{RdfFormat, RdfParser};
use schemaviz_core::error::{Result, SchemaVizError};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Wraps record arrays into JSON-LD documents sharing one `@context`
#[derive(Debug, Clone, PartialEq)]
pub struct ContextInjector {
    context: Value,
}

impl ContextInjector {
    /// Create an injector for the given `@context` value
    #[must_use]
    pub const fn new(context: Value) -> Self {
        Self { context }
    }

    /// Read the `@context` member of a JSON context file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not JSON, and a
    /// not-found error if it has no `@context` member.
    pub fn from_context_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut document: Value = serde_json::from_str(&content)?;
        let context = document
            .get_mut("@context")
            .map(Value::take)
            .ok_or_else(|| SchemaVizError::not_found(format!("@context in {}", path.display())))?;
        Ok(Self::new(context))
    }

    /// The injected `@context`
    #[must_use]
    pub const fn context(&self) -> &Value {
        &self.context
    }

    /// Terms of the context that name a namespace, usable as prefixes
    pub fn prefixes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.context
            .as_object()
            .into_iter()
            .flat_map(Map::iter)
            .filter(|(term, _)| !term.starts_with('@'))
            .filter_map(|(term, value)| value.as_str().map(|iri| (term.as_str(), iri)))
            .filter(|(_, iri)| iri.ends_with('/') || iri.ends_with('#'))
    }

    /// Build `{"@context": ..., "@graph": [...]}` from an array of records
    ///
    /// String entries are decoded as JSON; object entries are taken as they are.
    ///
    /// # Errors
    ///
    /// Returns an error if `records` is not an array or an entry is neither an
    /// object nor a string holding one.
    pub fn inject(&self, records: &Value) -> Result<Value> {
        let Value::Array(entries) = records else {
            return Err(SchemaVizError::other(
                "ECIU data should be an array but it is not",
            ));
        };

        let mut graph = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let node = match entry {
                Value::String(line) => serde_json::from_str(line).map_err(|e| {
                    SchemaVizError::other_with_source(format!("Record {index} is not valid JSON"), e)
                })?,
                Value::Object(_) => entry.clone(),
                other => {
                    return Err(SchemaVizError::other(format!(
                        "Record {index} is neither an object nor a JSON string: {other}"
                    )));
                }
            };
            if !node.is_object() {
                return Err(SchemaVizError::other(format!(
                    "Record {index} does not decode to an object"
                )));
            }
            graph.push(node);
        }
        info!("parsed {} records", graph.len());

        let mut document = Map::new();
        document.insert("@context".to_string(), self.context.clone());
        document.insert("@graph".to_string(), Value::Array(graph));
        Ok(Value::Object(document))
    }

    /// Read a JSON file of records and [`inject`](Self::inject) the context
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not JSON, or fails
    /// [`Self::inject`].
    pub fn inject_file(&self, path: &Path) -> Result<Value> {
        info!("Loading ECIU records from {}...", path.display());
        let content = fs::read_to_string(path)?;
        let records: Value = serde_json::from_str(&content)?;
        self.inject(&records)
    }

    /// Expand a JSON-LD document into triples, binding the context's namespaces
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the document cannot be encoded and a
    /// parse error if it is not valid JSON-LD.
    pub fn to_graph(&self, document: &Value) -> Result<VocabularyGraph> {
        let bytes = serde_json::to_vec(document)
            .map_err(|e| SchemaVizError::serialization(format!("Failed to encode JSON-LD: {e}")))?;
        let format = RdfFormat::from_extension("jsonld")
            .ok_or_else(|| SchemaVizError::rdf("JSON-LD is not a supported RDF format"))?;

        let mut graph = VocabularyGraph::with_prefixes(self.prefixes());
        for quad in RdfParser::from_format(format).for_reader(bytes.as_slice()) {
            let quad = quad.map_err(|e| SchemaVizError::parse(format!("JSON-LD parsing error: {e}")))?;
            graph.insert(quad.subject, quad.predicate, quad.object);
        }
        debug!("Expanded JSON-LD into {} triples", graph.len());
        Ok(graph)
    }

    /// Write `document` as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an output error if the file cannot be written.
    pub fn write_document(document: &Value, path: &Path) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(document)
            .map_err(|e| SchemaVizError::serialization(format!("Failed to encode JSON-LD: {e}")))?;
        fs::write(path, bytes).map_err(|e| {
            SchemaVizError::output(format!("Failed to write {}: {e}", path.display()))
        })
    }
}
