//! RDF vocabulary converters
//!
//! Converters read schemas, property tables, SHACL shapes or JSON-LD records
//! and emit a [`VocabularyGraph`]; vocabularies to inspect are read into an
//! [`RdfSource`].

use oxigraph::io::RdfFormat;
use std::path::Path;
use uuid::Uuid;

pub mod graph;
pub mod jsonld;
pub mod namespace;
pub mod openapi;
pub mod shacl;
pub mod skos;
pub mod source;
pub mod tabular;

pub use graph::VocabularyGraph;
pub use jsonld::ContextInjector;
pub use openapi::OpenApiConverter;
pub use shacl::{ShaclConverter, ShapeGraph};
pub use skos::{ConceptRow, ConceptScheme, VocabularyLister};
pub use source::RdfSource;
pub use tabular::PropertyTableConverter;

/// Fresh base IRI for runs that were not given one: `urn:uuid:<v4>#`
#[must_use]
pub fn default_base_iri() -> String {
    format!("urn:uuid:{}#", Uuid::new_v4())
}

/// RDF format named by the extension of `path`, Turtle when unknown
#[must_use]
pub fn format_for_path(path: &Path) -> RdfFormat {
    let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
        return RdfFormat::Turtle;
    };
    match extension.to_ascii_lowercase().as_str() {
        "nt" => RdfFormat::NTriples,
        "nq" => RdfFormat::NQuads,
        "trig" => RdfFormat::TriG,
        "n3" => RdfFormat::N3,
        "rdf" | "xml" => RdfFormat::RdfXml,
        _ => RdfFormat::Turtle,
    }
}
