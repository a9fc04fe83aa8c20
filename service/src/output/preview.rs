//! Terminal preview of a flattened table

use super::table::TextTable;
use schemaviz_core::types::{PropertyRecord, TABLE_COLUMNS};
use std::fmt::Write;

/// Render the first `limit` records, followed by a note on how many were left out
#[must_use]
pub fn render_preview(records: &[PropertyRecord], limit: usize, styled: bool) -> String {
    let mut table = TextTable::new(TABLE_COLUMNS);
    for record in records.iter().take(limit) {
        table.push_row(record.columns());
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "\nPreview of generated table ({} properties):",
        records.len()
    );
    let _ = writeln!(out, "{}", "=".repeat(80));
    out.push_str(&table.render(styled));
    if records.len() > limit {
        let _ = writeln!(out, "\n... and {} more properties", records.len() - limit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(count: usize) -> Vec<PropertyRecord> {
        (0..count)
            .map(|i| PropertyRecord::new("/", format!("p{i}"), "string", "0..1", ""))
            .collect()
    }

    #[test]
    fn test_preview_truncates() {
        let text = render_preview(&records(12), 10, false);
        assert!(text.contains("Preview of generated table (12 properties):"));
        assert!(text.contains("p9"));
        assert!(!text.contains("p10"));
        assert!(text.ends_with("... and 2 more properties\n"));
    }

    #[test]
    fn test_preview_without_overflow() {
        let text = render_preview(&records(3), 10, false);
        assert!(text.contains("p2"));
        assert!(!text.contains("more properties"));
    }
}
