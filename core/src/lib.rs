//! # `schemaviz` Core
//!
//! Shared building blocks for the `schemaviz` conversion tools: the error
//! type, configuration structures and the flattened property record that the
//! schema walker produces.
//!
//! The behaviour (parsing, reference resolution, RDF conversion) lives in
//! `schemaviz-service`; this crate only holds what every part of it agrees on.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Core error types for `schemaviz` operations
pub mod error;

/// Configuration types for the flattener, output sinks and RDF converters
pub mod config;

/// Record types produced by the schema flattener
pub mod types;

// Re-export commonly used types
pub use config::SchemaVizConfig;
pub use error::{Result, SchemaVizError};
pub use types::{PropertyRecord, TABLE_COLUMNS};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::*;
    pub use crate::error::{Result, SchemaVizError};
    pub use crate::types::*;
}
