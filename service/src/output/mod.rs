//! Tabular sinks for flattened property records
//!
//! Every sink writes the same five columns, in [`TABLE_COLUMNS`] order, with
//! a header row first.
//!
//! [`TABLE_COLUMNS`]: schemaviz_core::TABLE_COLUMNS

use schemaviz_core::config::{OutputConfig, TableFormat};
use schemaviz_core::error::Result;
use schemaviz_core::types::PropertyRecord;
use std::path::Path;

pub mod csv;
pub mod preview;
pub mod table;
pub mod xlsx;

pub use self::csv::DelimitedWriter;
pub use self::preview::render_preview;
pub use self::table::{TableStyle, TextTable};
pub use self::xlsx::XlsxWriter;

/// A sink that persists flattened records to a file
pub trait TableWriter {
    /// Write the header row followed by one row per record
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    fn write_records(&self, records: &[PropertyRecord], path: &Path) -> Result<()>;
}

/// Writer for `format`, configured from `config`
#[must_use]
pub fn writer_for(format: TableFormat, config: &OutputConfig) -> Box<dyn TableWriter> {
    match format {
        TableFormat::Csv => Box::new(DelimitedWriter::csv()),
        TableFormat::Tsv => Box::new(DelimitedWriter::tsv()),
        TableFormat::Xlsx => Box::new(XlsxWriter::new(config.xlsx_sheet_name.clone())),
    }
}

/// Write `records` to `path` in `format`
///
/// # Errors
///
/// Returns an error if the sink fails to write the file.
pub fn write_table(
    records: &[PropertyRecord],
    path: &Path,
    format: TableFormat,
    config: &OutputConfig,
) -> Result<()> {
    writer_for(format, config).write_records(records, path)?;
    tracing::info!(
        "Schema visualization saved as {}: {}",
        format.label(),
        path.display()
    );
    Ok(())
}
