//! CLI type definitions and enums

use clap::{Parser, Subcommand, ValueEnum};
use schemaviz_core::config::TableFormat;
use std::path::PathBuf;

/// `schemaviz` command-line interface
#[derive(Parser, Debug)]
#[command(
    name = "schemaviz",
    version,
    about = "Flatten schemas into tables and convert schemas, tables and shapes to RDF"
)]
pub struct SchemaVizCli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode - only errors are logged, no preview is printed
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file (YAML, or TOML with a `.toml` extension)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    pub command: SchemaVizCommand,
}

/// Table formats accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableFormatArg {
    /// Comma separated values
    Csv,
    /// Tab separated values
    Tsv,
    /// Excel workbook
    Xlsx,
}

impl From<TableFormatArg> for TableFormat {
    fn from(format: TableFormatArg) -> Self {
        match format {
            TableFormatArg::Csv => Self::Csv,
            TableFormatArg::Tsv => Self::Tsv,
            TableFormatArg::Xlsx => Self::Xlsx,
        }
    }
}

/// `schemaviz` subcommands
#[derive(Subcommand, Debug)]
pub enum SchemaVizCommand {
    /// Flatten a JSON Schema or OpenAPI document into a property table
    Visualize {
        /// Schema file (YAML or JSON)
        schema: PathBuf,
        /// Output file (default: schema path with the format's extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format (default: from configuration, csv otherwise)
        #[arg(short, long, value_enum)]
        format: Option<TableFormatArg>,
    },

    /// Represent OpenAPI component schemas as an RDF vocabulary
    #[command(name = "openapi2rdf")]
    OpenApiToRdf {
        /// OpenAPI document
        spec: PathBuf,
        /// Schemas to convert (default: all of `components.schemas`)
        schemas: Vec<String>,
        /// Base IRI for generated terms (default: a fresh `urn:uuid:`)
        #[arg(short, long)]
        base: Option<String>,
        /// Prefix bound to the base IRI (default: "api")
        #[arg(short, long)]
        prefix: Option<String>,
        /// RDF output file, format from its extension (default: Turtle on stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a property table (CSV) into an RDF ontology
    #[command(name = "csv2rdf")]
    CsvToRdf {
        /// CSV file with `Property slug`, `Property title`, `Property definition` and `Class` columns
        csv: PathBuf,
        /// Base IRI of the ontology (default: a fresh `urn:uuid:`)
        #[arg(short, long)]
        base: Option<String>,
        /// RDF output file, format from its extension (default: Turtle on stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert SHACL shapes and their ontologies into DESM property graphs
    #[command(name = "shacl2desm")]
    ShaclToDesm {
        /// SHACL and ontology files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
        /// Merge every shape into one graph
        #[arg(short, long)]
        merge: bool,
        /// Language of the literals to keep (default: from configuration, "en" otherwise)
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Wrap ECIU records in a JSON-LD context and convert them to RDF
    #[command(name = "eciu2rdf")]
    EciuToRdf {
        /// JSON array of records, each a JSON object or a string encoding one
        source: PathBuf,
        /// JSON file whose `@context` member is injected
        #[arg(long, default_value = "eciu-context.json")]
        context: PathBuf,
        /// JSON-LD output file
        #[arg(short, long, default_value = "eciu-parsed-ld.json")]
        output: PathBuf,
        /// RDF output file, format from its extension
        #[arg(short, long, default_value = "eciu-parsed.ttl")]
        turtle: PathBuf,
    },

    /// Print the SKOS concept schemes of a vocabulary as tables
    Vocabulary {
        /// Controlled vocabulary file
        input: PathBuf,
        /// Language of labels and definitions (default: from configuration, "en" otherwise)
        #[arg(short, long)]
        language: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        SchemaVizCli::command().debug_assert();
    }

    #[test]
    fn test_parse_visualize() -> Result<(), clap::Error> {
        let cli = SchemaVizCli::try_parse_from(["schemaviz", "-v", "visualize", "api.yaml", "-f", "xlsx"])?;
        assert!(cli.verbose);
        match cli.command {
            SchemaVizCommand::Visualize { schema, output, format } => {
                assert_eq!(schema, PathBuf::from("api.yaml"));
                assert_eq!(output, None);
                assert_eq!(format, Some(TableFormatArg::Xlsx));
            }
            other => panic!("unexpected command {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_shacl_defaults() -> Result<(), clap::Error> {
        let cli = SchemaVizCli::try_parse_from(["schemaviz", "shacl2desm", "a.ttl", "b.ttl", "-m"])?;
        match cli.command {
            SchemaVizCommand::ShaclToDesm {
                inputs,
                output,
                merge,
                language,
            } => {
                assert_eq!(inputs.len(), 2);
                assert_eq!(output, PathBuf::from("."));
                assert!(merge);
                assert_eq!(language, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_eciu_defaults() -> Result<(), clap::Error> {
        let cli = SchemaVizCli::try_parse_from(["schemaviz", "eciu2rdf", "export.json", "-t", "out.nt"])?;
        match cli.command {
            SchemaVizCommand::EciuToRdf {
                source,
                context,
                output,
                turtle,
            } => {
                assert_eq!(source, PathBuf::from("export.json"));
                assert_eq!(context, PathBuf::from("eciu-context.json"));
                assert_eq!(output, PathBuf::from("eciu-parsed-ld.json"));
                assert_eq!(turtle, PathBuf::from("out.nt"));
            }
            other => panic!("unexpected command {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(SchemaVizCli::try_parse_from(["schemaviz", "-q", "-v", "vocabulary", "x.ttl"]).is_err());
    }
}
