//! Schema flattening
//!
//! Walks a JSON Schema or OpenAPI document, following `$ref`s across files,
//! and emits one [`PropertyRecord`](schemaviz_core::types::PropertyRecord)
//! per declared property with its path, type signature, cardinality and
//! description.

pub mod cardinality;
pub mod loader;
pub mod reference;
pub mod resolver;
pub mod shape;
pub mod type_signature;
pub mod walker;

pub use cardinality::Cardinality;
pub use loader::{DocumentLoader, LoaderStats, SchemaDocument};
pub use reference::{Placeholder, ReferenceToken, VisitGuard};
pub use resolver::{ReferenceResolver, ResolutionStats, Resolved};
pub use shape::{Combinator, SchemaShape};
pub use type_signature::type_signature;
pub use walker::SchemaFlattener;
