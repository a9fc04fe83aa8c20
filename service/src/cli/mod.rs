//! Command-line tools of `schemaviz`.
//!
//! One subcommand per tool: schema flattening, OpenAPI and CSV conversion
//! to RDF, SHACL to DESM conversion and SKOS vocabulary listing.

mod app;
mod types;

pub use app::SchemaVizApp;
pub use types::{SchemaVizCli, SchemaVizCommand, TableFormatArg};

/// Main entry point for the CLI
///
/// # Errors
/// Returns error if the configuration cannot be loaded or the command fails.
pub fn run() -> schemaviz_core::error::Result<()> {
    SchemaVizApp::from_args().run()
}
