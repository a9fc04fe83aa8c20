//! Delimited text output (CSV and TSV)

use super::TableWriter;
use csv::{QuoteStyle, WriterBuilder};
use schemaviz_core::error::{Result, SchemaVizError};
use schemaviz_core::types::{PropertyRecord, TABLE_COLUMNS};
use std::io::Write;
use std::path::Path;

/// Writes records as delimiter separated text
#[derive(Debug, Clone, Copy)]
pub struct DelimitedWriter {
    delimiter: u8,
}

impl DelimitedWriter {
    /// Comma separated writer
    #[must_use]
    pub const fn csv() -> Self {
        Self { delimiter: b',' }
    }

    /// Tab separated writer
    #[must_use]
    pub const fn tsv() -> Self {
        Self { delimiter: b'\t' }
    }

    /// Field delimiter in use
    #[must_use]
    pub const fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Write header and records to any sink
    ///
    /// # Errors
    ///
    /// Returns an output error if writing to `sink` fails.
    pub fn write_to<W: Write>(&self, records: &[PropertyRecord], sink: W) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .quote_style(QuoteStyle::Necessary)
            .from_writer(sink);

        writer.write_record(TABLE_COLUMNS)?;
        for record in records {
            writer.write_record(record.columns())?;
        }
        writer
            .flush()
            .map_err(|e| SchemaVizError::output(format!("Failed to flush table: {e}")))
    }

    /// Render header and records into a string
    ///
    /// # Errors
    ///
    /// Returns an output error if the rendered table is not valid UTF-8.
    pub fn render(&self, records: &[PropertyRecord]) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(records, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| SchemaVizError::output(e.to_string()))
    }
}

impl TableWriter for DelimitedWriter {
    fn write_records(&self, records: &[PropertyRecord], path: &Path) -> Result<()> {
        let file = std::fs::File::create(path).map_err(|e| {
            SchemaVizError::output(format!("Failed to create {}: {e}", path.display()))
        })?;
        self.write_to(records, file)
    }
}
