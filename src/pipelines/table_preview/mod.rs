//! Tabular file preview.
//!
//! Parses an uploaded CSV file into a header row plus data rows and renders
//! it unmodified. There is no validation or schema enforcement beyond CSV
//! well-formedness, and no interaction with the classifier.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sentiment_pipeline::table_preview::TablePreview;
//!
//! # fn main() -> sentiment_pipeline::error::Result<()> {
//! let table = TablePreview::from_path("reviews.csv")?;
//! println!("{} rows x {} columns", table.n_rows(), table.n_cols());
//! println!("{}", table.render());
//! # Ok(())
//! # }
//! ```

use crate::error::{PipelineError, Result};
use std::io::Read;
use std::path::Path;

/// A parsed tabular upload: header row plus data rows, values untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePreview {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TablePreview {
    /// Parse a CSV file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            PipelineError::TableParse(format!("failed to open {}: {e}", path.display()))
        })?;
        Self::from_reader(file)
    }

    /// Parse CSV from any reader, e.g. an upload body.
    ///
    /// The first record is taken as the header row. Rows of uneven width are
    /// accepted as-is.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = csv_reader.headers()?.iter().map(str::to_owned).collect();
        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_owned).collect());
        }
        Ok(Self { headers, rows })
    }

    /// Header row.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows, exactly as parsed.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the header row.
    pub fn n_cols(&self) -> usize {
        self.headers.len()
    }

    /// Render an aligned text table.
    ///
    /// Values are shown unchanged; short rows are padded with empty cells
    /// for display only, never in the stored data.
    pub fn render(&self) -> String {
        let n_cols = self
            .headers
            .len()
            .max(self.rows.iter().map(Vec::len).max().unwrap_or(0));

        let mut widths = vec![0usize; n_cols];
        for (i, header) in self.headers.iter().enumerate() {
            widths[i] = header.chars().count();
        }
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let separators: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(format_row(&self.headers, &widths));
        lines.push(format_row(&separators, &widths));
        for row in &self.rows {
            lines.push(format_row(row, &widths));
        }
        lines.join("\n")
    }
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        for _ in cell.chars().count()..*width {
            line.push(' ');
        }
    }
    line.trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "text,label\nGreat service!,positive\nNothing special,neutral\n";

    #[test]
    fn preserves_shape_and_values() {
        let table = TablePreview::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.n_cols(), 2);
        assert_eq!(table.headers(), ["text", "label"]);
        assert_eq!(table.rows()[0], ["Great service!", "positive"]);
        assert_eq!(table.rows()[1], ["Nothing special", "neutral"]);
    }

    #[test]
    fn ragged_rows_are_kept_as_parsed() {
        let table = TablePreview::from_reader("a,b,c\n1,2\n3,4,5,6\n".as_bytes()).unwrap();
        assert_eq!(table.rows()[0], ["1", "2"]);
        assert_eq!(table.rows()[1], ["3", "4", "5", "6"]);
    }

    #[test]
    fn render_aligns_columns_without_touching_values() {
        let table = TablePreview::from_reader(CSV.as_bytes()).unwrap();
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("text"));
        assert!(lines[1].starts_with("----"));
        assert!(rendered.contains("Great service!"));
        assert!(rendered.contains("Nothing special"));
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let err = TablePreview::from_reader(&b"a,b\n\xff\xfe,x\n"[..]).unwrap_err();
        assert!(matches!(err, PipelineError::TableParse(_)));
    }
}
