//! Excel workbook output

use super::TableWriter;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use schemaviz_core::error::{Result, SchemaVizError};
use schemaviz_core::types::{PropertyRecord, TABLE_COLUMNS};
use std::path::Path;

const MAX_COLUMN_WIDTH: usize = 60;

/// Writes records to a single-sheet workbook
#[derive(Debug, Clone)]
pub struct XlsxWriter {
    sheet_name: String,
}

impl XlsxWriter {
    /// Create a writer naming its worksheet `sheet_name`
    #[must_use]
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
        }
    }

    /// Build the workbook in memory
    ///
    /// # Errors
    ///
    /// Returns an output error if the sheet name is invalid or a cell cannot
    /// be written.
    pub fn to_buffer(&self, records: &[PropertyRecord]) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let header_format = Format::new()
            .set_bold()
            .set_background_color(Color::Gray)
            .set_font_color(Color::White)
            .set_align(FormatAlign::Center)
            .set_border(FormatBorder::Thin);
        let cell_format = Format::new().set_border(FormatBorder::Thin);

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name).map_err(xlsx_error)?;

        let mut widths = TABLE_COLUMNS.map(str::len);
        for (col, header) in (0u16..).zip(TABLE_COLUMNS) {
            worksheet
                .write_string_with_format(0, col, header, &header_format)
                .map_err(xlsx_error)?;
        }

        for (row, record) in (1u32..).zip(records) {
            for ((col, value), width) in (0u16..).zip(record.columns()).zip(widths.iter_mut()) {
                worksheet
                    .write_string_with_format(row, col, value, &cell_format)
                    .map_err(xlsx_error)?;
                *width = (*width).max(value.chars().count());
            }
        }

        worksheet.set_freeze_panes(1, 0).map_err(xlsx_error)?;
        let last_row = u32::try_from(records.len()).unwrap_or(u32::MAX);
        worksheet.autofilter(0, 0, last_row, 4).map_err(xlsx_error)?;

        for (col, width) in (0u16..).zip(widths) {
            let width = u16::try_from(width.min(MAX_COLUMN_WIDTH) + 2).unwrap_or(u16::MAX);
            worksheet
                .set_column_width(col, f64::from(width))
                .map_err(xlsx_error)?;
        }

        workbook
            .save_to_buffer()
            .map_err(|e| SchemaVizError::output(format!("Failed to save workbook: {e}")))
    }
}

impl TableWriter for XlsxWriter {
    fn write_records(&self, records: &[PropertyRecord], path: &Path) -> Result<()> {
        let content = self.to_buffer(records)?;
        std::fs::write(path, content).map_err(|e| {
            SchemaVizError::output(format!("Failed to write file {}: {e}", path.display()))
        })
    }
}

fn xlsx_error(err: XlsxError) -> SchemaVizError {
    SchemaVizError::output(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_workbook_is_a_zip_archive() -> schemaviz_core::Result<()> {
        let records = vec![PropertyRecord::new("/", "id", "string", "1..1", "")];
        let buffer = XlsxWriter::new("Schema").to_buffer(&records)?;
        assert!(buffer.starts_with(b"PK"));
        Ok(())
    }

    #[test]
    fn test_invalid_sheet_name_is_rejected() {
        let result = XlsxWriter::new("bad[name]").to_buffer(&[]);
        assert!(matches!(result, Err(SchemaVizError::OutputError(_))));
    }

    #[test]
    fn test_write_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("schema.xlsx");
        XlsxWriter::new("Schema").write_records(&[], &path)?;
        assert!(std::fs::metadata(&path)?.len() > 0);
        Ok(())
    }
}
