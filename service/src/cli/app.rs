//! `schemaviz` CLI application.

use super::types::{SchemaVizCli, SchemaVizCommand, TableFormatArg};
use crate::flatten::SchemaFlattener;
use crate::output::{render_preview, write_table};
use crate::rdf::{
    ContextInjector, OpenApiConverter, PropertyTableConverter, ShaclConverter, VocabularyGraph,
    VocabularyLister, default_base_iri,
};
use clap::Parser;
use schemaviz_core::config::SchemaVizConfig;
use schemaviz_core::error::Result;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Main `schemaviz` application
pub struct SchemaVizApp {
    cli: SchemaVizCli,
}

impl SchemaVizApp {
    /// Create the application from the process arguments
    #[must_use]
    pub fn from_args() -> Self {
        Self::new(SchemaVizCli::parse())
    }

    /// Create the application from already parsed arguments
    #[must_use]
    pub const fn new(cli: SchemaVizCli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    ///
    /// Failures are logged and printed to stderr as `Error: <message>`
    /// before being returned.
    ///
    /// # Errors
    ///
    /// Returns the error of the configuration loading or the command.
    pub fn run(self) -> Result<()> {
        self.init_logging();
        debug!("Starting schemaviz");

        match self.load_config().and_then(|config| self.execute_command(&config)) {
            Ok(()) => {
                debug!("Command completed successfully");
                Ok(())
            }
            Err(err) => {
                error!("Command failed: {err}");
                eprintln!("Error: {err}");
                Err(err)
            }
        }
    }

    fn init_logging(&self) {
        let level = if self.cli.quiet {
            "error"
        } else if self.cli.verbose {
            "debug"
        } else {
            "info"
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        // A subscriber may already be installed when embedded in a host program.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }

    fn load_config(&self) -> Result<SchemaVizConfig> {
        match &self.cli.config {
            Some(path) => SchemaVizConfig::from_file(path),
            None => Ok(SchemaVizConfig::default()),
        }
    }

    fn execute_command(&self, config: &SchemaVizConfig) -> Result<()> {
        match &self.cli.command {
            SchemaVizCommand::Visualize {
                schema,
                output,
                format,
            } => self.visualize(config, schema, output.as_deref(), *format),
            SchemaVizCommand::OpenApiToRdf {
                spec,
                schemas,
                base,
                prefix,
                output,
            } => {
                let prefix = prefix.as_ref().unwrap_or(&config.rdf.prefix);
                let graph = OpenApiConverter::new(base_or_fresh(base.as_ref()))
                    .with_prefix(prefix.as_str())
                    .convert_file(spec, schemas)?;
                emit(&graph, output.as_deref(), "OpenAPI vocabulary")
            }
            SchemaVizCommand::CsvToRdf { csv, base, output } => {
                let graph =
                    PropertyTableConverter::new(base_or_fresh(base.as_ref())).convert_file(csv)?;
                emit(&graph, output.as_deref(), "Property ontology")
            }
            SchemaVizCommand::ShaclToDesm {
                inputs,
                output,
                merge,
                language,
            } => {
                let language = language.as_ref().unwrap_or(&config.rdf.language);
                let converter = ShaclConverter::from_files(inputs, language)?;
                let merged = merge.then_some(config.rdf.merged_file_name.as_str());
                let written = converter.write_all(output, merged)?;
                info!("Wrote {} DESM graph(s) to {}", written.len(), output.display());
                Ok(())
            }
            SchemaVizCommand::EciuToRdf {
                source,
                context,
                output,
                turtle,
            } => {
                let injector = ContextInjector::from_context_file(context)?;
                let document = injector.inject_file(source)?;
                ContextInjector::write_document(&document, output)?;
                info!("JSON-LD saved to {}", output.display());
                let graph = injector.to_graph(&document)?;
                emit(&graph, Some(turtle.as_path()), "ECIU graph")
            }
            SchemaVizCommand::Vocabulary { input, language } => {
                let language = language.as_ref().unwrap_or(&config.rdf.language);
                let lister = VocabularyLister::from_file(input, language.as_str())?;
                let styled = std::io::stdout().is_terminal();
                for scheme in lister.schemes()? {
                    println!("{}", scheme.to_table().render(styled));
                }
                Ok(())
            }
        }
    }

    fn visualize(
        &self,
        config: &SchemaVizConfig,
        schema: &Path,
        output: Option<&Path>,
        format: Option<TableFormatArg>,
    ) -> Result<()> {
        let format = format.map_or(config.output.format, Into::into);
        let base = schema.parent().map(Path::to_path_buf).unwrap_or_default();
        let file_name = schema
            .file_name()
            .map_or_else(|| schema.to_path_buf(), PathBuf::from);

        let mut flattener = SchemaFlattener::with_config(base, config.flatten.clone());
        let records = flattener.visualize(&file_name);

        if records.is_empty() {
            println!("No properties found in the schema.");
            return Ok(());
        }

        let output = output.map_or_else(|| schema.with_extension(format.extension()), Path::to_path_buf);
        write_table(&records, &output, format, &config.output)?;

        if !self.cli.quiet {
            let styled = std::io::stdout().is_terminal();
            print!(
                "{}",
                render_preview(&records, config.output.preview_rows, styled)
            );
        }
        Ok(())
    }
}

fn base_or_fresh(base: Option<&String>) -> String {
    base.cloned().unwrap_or_else(default_base_iri)
}

/// Write `graph` to `output`, or print it as Turtle
fn emit(graph: &VocabularyGraph, output: Option<&Path>, what: &str) -> Result<()> {
    match output {
        Some(path) => {
            graph.write_to_file(path)?;
            info!("{what} saved to {}", path.display());
        }
        None => print!("{}", graph.to_turtle()?),
    }
    Ok(())
}
