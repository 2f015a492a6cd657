//! Snapshots of rendered data tables and their CSV form.

use serde::{Deserialize, Serialize};

/// The visible text of a rendered table, row by row. Header rows are
/// ordinary rows; the snapshot carries no styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    rows: Vec<Vec<String>>,
}

impl TableSnapshot {
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the snapshot as CSV. Every cell is quote-wrapped with
    /// embedded quotes doubled, so commas and line breaks in cell text
    /// survive. Rows are joined with `\n` and there is no trailing newline.
    pub fn to_csv(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| csv_field(cell))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn csv_field(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}
