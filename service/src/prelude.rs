//! Prelude module for `schemaviz`
//!
//! This module re-exports commonly used types and functions for convenient import.

// Re-export core types
pub use schemaviz_core::prelude::*;

// Flattening
pub use crate::flatten::{Cardinality, DocumentLoader, ReferenceResolver, SchemaDocument, SchemaFlattener};

// Output
pub use crate::output::{DelimitedWriter, TableWriter, XlsxWriter, render_preview, write_table};

// Parsing
pub use crate::parser::{DocumentFormat, DocumentParser, Parser};

// RDF
pub use crate::rdf::{
    ConceptScheme, ContextInjector, OpenApiConverter, PropertyTableConverter, RdfSource, ShaclConverter,
    VocabularyGraph, VocabularyLister,
};
