//! Plain-text tables for terminal output

use colored::Colorize;
use std::fmt::Write;

/// Column layout of a rendered table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    /// Columns separated by two spaces, header underlined with dashes
    #[default]
    Plain,
    /// ASCII box around every cell
    Boxed,
}

/// A table of strings rendered with aligned columns
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    title: Option<String>,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    style: TableStyle,
}

impl TextTable {
    /// Create a table with the given column headers
    #[must_use]
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set a title printed above the table
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the layout
    #[must_use]
    pub const fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Append a row; missing cells render empty, extra cells are dropped
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells
            .into_iter()
            .map(Into::into)
            .take(self.headers.len())
            .collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Number of body rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no body rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table; `styled` adds terminal colors to title and header
    #[must_use]
    pub fn render(&self, styled: bool) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        if let Some(title) = &self.title {
            if styled {
                let _ = writeln!(out, "{}", title.bold());
            } else {
                let _ = writeln!(out, "{title}");
            }
        }

        match self.style {
            TableStyle::Plain => {
                let header = self.format_line(&self.headers, &widths, "", "  ", "");
                push_line(&mut out, &header, styled);
                let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
                out.push_str(&self.format_line(&rule, &widths, "", "  ", ""));
                out.push('\n');
                for row in &self.rows {
                    out.push_str(&self.format_line(row, &widths, "", "  ", ""));
                    out.push('\n');
                }
            }
            TableStyle::Boxed => {
                let border: String = widths
                    .iter()
                    .map(|w| format!("+{}", "-".repeat(w + 2)))
                    .collect::<String>()
                    + "+";
                out.push_str(&border);
                out.push('\n');
                let header = self.format_line(&self.headers, &widths, "| ", " | ", " |");
                push_line(&mut out, &header, styled);
                out.push_str(&border);
                out.push('\n');
                for row in &self.rows {
                    out.push_str(&self.format_line(row, &widths, "| ", " | ", " |"));
                    out.push('\n');
                }
                out.push_str(&border);
                out.push('\n');
            }
        }
        out
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn format_line(
        &self,
        cells: &[String],
        widths: &[usize],
        open: &str,
        separator: &str,
        close: &str,
    ) -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        let line = format!("{open}{}{close}", padded.join(separator));
        match self.style {
            TableStyle::Plain => line.trim_end().to_string(),
            TableStyle::Boxed => line,
        }
    }
}

fn push_line(out: &mut String, line: &str, styled: bool) {
    if styled {
        let _ = writeln!(out, "{}", line.bold());
    } else {
        out.push_str(line);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_table() {
        let mut table = TextTable::new(["Name", "Type"]);
        table.push_row(["id", "string"]);
        table.push_row(["description", "string"]);

        assert_eq!(
            table.render(false),
            "Name         Type\n\
             -----------  ------\n\
             id           string\n\
             description  string\n"
        );
    }

    #[test]
    fn test_boxed_table_with_title() {
        let mut table = TextTable::new(["URI", "Label"])
            .with_title("Colours")
            .with_style(TableStyle::Boxed);
        table.push_row(["ex:red", "Red"]);

        assert_eq!(
            table.render(false),
            "Colours\n\
             +--------+-------+\n\
             | URI    | Label |\n\
             +--------+-------+\n\
             | ex:red | Red   |\n\
             +--------+-------+\n"
        );
    }

    #[test]
    fn test_rows_are_padded_to_header_count() {
        let mut table = TextTable::new(["a", "b"]);
        table.push_row(["only"]);
        table.push_row(["x", "y", "dropped"]);
        assert_eq!(table.len(), 2);
        assert!(!table.render(false).contains("dropped"));
    }
}
