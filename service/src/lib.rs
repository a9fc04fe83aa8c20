//! # `schemaviz` Service
//!
//! Conversion tools around JSON Schema, OpenAPI and RDF vocabularies.
//!
//! ## Overview
//!
//! - **Flattening**: walk a JSON Schema / OpenAPI document, following `$ref`s
//!   across files, and produce one row per property (path, name, type,
//!   cardinality, description) written as CSV, TSV or XLSX
//! - **OpenAPI to RDF**: represent `components.schemas` as classes and properties
//! - **CSV to RDF**: turn a property table into an OWL ontology
//! - **SHACL to DESM**: rewrite node shapes as per-shape property graphs
//! - **SKOS listing**: print the concept schemes of a controlled vocabulary
//! - **ECIU to RDF**: wrap JSON-encoded records in a JSON-LD context and
//!   expand them to Turtle
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use schemaviz_service::flatten::SchemaFlattener;
//! use schemaviz_service::output::render_preview;
//!
//! let mut flattener = SchemaFlattener::new("schemas");
//! let records = flattener.visualize("api.yaml");
//! print!("{}", render_preview(&records, 10, false));
//! ```
//!
//! The `schemaviz` binary exposes every tool as a subcommand; see
//! [`cli::SchemaVizCommand`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)] // OpenAPI, SHACL, SKOS, DESM are proper nouns

/// Command-line application
pub mod cli;

/// Schema flattening with `$ref` resolution
pub mod flatten;

/// Tabular sinks and terminal previews
pub mod output;

/// JSON and YAML document parsing
pub mod parser;

/// RDF vocabulary converters and readers
pub mod rdf;

/// Prelude for convenient imports
pub mod prelude;

// Re-export commonly used types
pub use flatten::SchemaFlattener;
pub use output::{TableWriter, write_table};
pub use parser::Parser;
pub use rdf::{OpenApiConverter, PropertyTableConverter, ShaclConverter, VocabularyGraph, VocabularyLister};
pub use schemaviz_core::{PropertyRecord, Result, SchemaVizConfig, SchemaVizError};
