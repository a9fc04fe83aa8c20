//! `schemaviz` command-line interface
//!
//! This binary provides the `schemaviz` tool for flattening schemas into
//! property tables and for converting schemas, tables and shapes to RDF.

use schemaviz_service::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Errors are already reported on stderr by the application
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
