//! Property tables (CSV) as an OWL ontology

use super::graph::VocabularyGraph;
use super::namespace::{owl, rdf, rdfs, schema};
use csv::{ReaderBuilder, StringRecord, Trim};
use oxigraph::model::{Literal, NamedNode};
use schemaviz_core::error::{Result, SchemaVizError};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns a property table must provide
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Property slug",
    "Property title",
    "Property definition",
    "Class",
];

/// Converts a property table into datatype properties of one ontology
#[derive(Debug, Clone)]
pub struct PropertyTableConverter {
    base: String,
}

impl PropertyTableConverter {
    /// Create a converter whose ontology IRI is `base`
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Convert a CSV file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or [`Self::convert_reader`] fails.
    pub fn convert_file(&self, path: &Path) -> Result<VocabularyGraph> {
        let file = File::open(path)?;
        self.convert_reader(file)
    }

    /// Convert CSV content with a header row
    ///
    /// # Errors
    ///
    /// Returns a not-found error if a required column is missing, an output
    /// error for malformed CSV and an RDF error for values that do not form
    /// valid IRIs.
    pub fn convert_reader(&self, reader: impl Read) -> Result<VocabularyGraph> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let headers = reader.headers()?.clone();
        let [slug, title, definition, class] = column_indices(&headers)?;

        let mut graph = VocabularyGraph::with_prefixes([
            ("rdf", rdf::NS),
            ("rdfs", rdfs::NS),
            ("owl", owl::NS),
            ("schema", schema::NS),
        ]);
        graph.insert(self.term("")?, rdf::TYPE, owl::ONTOLOGY);

        for row in reader.records() {
            let row = row?;
            let field = |index: usize| row.get(index).unwrap_or_default();

            let property = self.term(field(slug))?;
            graph.insert(property.clone(), rdf::TYPE, rdf::PROPERTY);
            graph.insert(property.clone(), rdf::TYPE, owl::DATATYPE_PROPERTY);
            graph.insert(property.clone(), rdfs::LABEL, Literal::new_simple_literal(field(title)));
            graph.insert(
                property.clone(),
                rdfs::COMMENT,
                Literal::new_simple_literal(field(definition)),
            );
            graph.insert(property, schema::DOMAIN_INCLUDES, self.term(field(class))?);
        }

        tracing::debug!("Converted property table into {} triples", graph.len());
        Ok(graph)
    }

    fn term(&self, local: &str) -> Result<NamedNode> {
        let iri = format!("{}{local}", self.base);
        NamedNode::new(&iri).map_err(|e| SchemaVizError::rdf(format!("Invalid IRI <{iri}>: {e}")))
    }
}

fn column_indices(headers: &StringRecord) -> Result<[usize; 4]> {
    let mut indices = [0; 4];
    for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| SchemaVizError::not_found(format!("column '{name}' in property table")))?;
    }
    Ok(indices)
}
