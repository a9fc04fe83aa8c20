//! Output graph for generated vocabularies

use super::format_for_path;
use indexmap::{IndexMap, IndexSet};
use oxigraph::io::{RdfFormat, RdfSerializer};
use oxigraph::model::{NamedNode, NamedNodeRef, NamedOrBlankNode, NamedOrBlankNodeRef, Term, Triple};
use schemaviz_core::error::{Result, SchemaVizError};
use std::fs;
use std::path::Path;

/// Insertion ordered, de-duplicated set of triples with a prefix table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyGraph {
    prefixes: IndexMap<String, String>,
    triples: IndexSet<Triple>,
}

impl VocabularyGraph {
    /// Create an empty graph without prefixes
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with the given prefixes bound
    #[must_use]
    pub fn with_prefixes<'a>(prefixes: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut graph = Self::new();
        for (prefix, iri) in prefixes {
            graph.bind(prefix, iri);
        }
        graph
    }

    /// Bind `prefix` to `iri`, replacing an earlier binding of the prefix
    pub fn bind(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.prefixes.insert(prefix.into(), iri.into());
    }

    /// Bound prefixes in binding order
    pub fn prefixes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(p, iri)| (p.as_str(), iri.as_str()))
    }

    /// Add a triple; returns `false` if it was already present
    pub fn insert(
        &mut self,
        subject: impl Into<NamedOrBlankNode>,
        predicate: impl Into<NamedNode>,
        object: impl Into<Term>,
    ) -> bool {
        self.triples.insert(Triple::new(subject, predicate, object))
    }

    /// Whether the graph holds the triple
    #[must_use]
    pub fn contains(
        &self,
        subject: impl Into<NamedOrBlankNode>,
        predicate: impl Into<NamedNode>,
        object: impl Into<Term>,
    ) -> bool {
        self.triples
            .contains(&Triple::new(subject, predicate, object))
    }

    /// Objects of every triple with the given subject and predicate
    pub fn objects<'a, 'b>(
        &'a self,
        subject: NamedOrBlankNodeRef<'b>,
        predicate: NamedNodeRef<'b>,
    ) -> impl Iterator<Item = &'a Term> + use<'a, 'b> {
        self.triples
            .iter()
            .filter(move |t| t.subject.as_ref() == subject && t.predicate.as_ref() == predicate)
            .map(|t| &t.object)
    }

    /// Triples in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Number of triples
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Whether the graph holds no triple
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Add the prefixes and triples of `other`
    pub fn merge(&mut self, other: Self) {
        for (prefix, iri) in other.prefixes {
            self.prefixes.entry(prefix).or_insert(iri);
        }
        self.triples.extend(other.triples);
    }

    /// Serialize in `format`, declaring the bound prefixes where the format allows
    ///
    /// # Errors
    ///
    /// Returns an RDF error if a prefix IRI is invalid or serialization fails.
    pub fn serialize(&self, format: RdfFormat) -> Result<Vec<u8>> {
        let mut serializer = RdfSerializer::from_format(format);
        for (prefix, iri) in &self.prefixes {
            serializer = serializer
                .with_prefix(prefix.as_str(), iri.as_str())
                .map_err(|e| SchemaVizError::rdf(format!("Invalid IRI for prefix {prefix}: {e}")))?;
        }

        let mut writer = serializer.for_writer(Vec::new());
        for triple in &self.triples {
            writer
                .serialize_triple(triple)
                .map_err(|e| SchemaVizError::rdf(format!("Failed to serialize triple: {e}")))?;
        }
        writer
            .finish()
            .map_err(|e| SchemaVizError::rdf(format!("Failed to finish RDF serialization: {e}")))
    }

    /// Serialize as Turtle text
    ///
    /// # Errors
    ///
    /// Returns an RDF error if serialization fails.
    pub fn to_turtle(&self) -> Result<String> {
        let bytes = self.serialize(RdfFormat::Turtle)?;
        String::from_utf8(bytes).map_err(|e| SchemaVizError::rdf(e.to_string()))
    }

    /// Write to `path` in the format its extension names, Turtle by default
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing the file fails.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let bytes = self.serialize(format_for_path(path))?;
        fs::write(path, bytes).map_err(|e| {
            SchemaVizError::output(format!("Failed to write {}: {e}", path.display()))
        })
    }
}
