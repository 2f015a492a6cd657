//! The decision matrix: performance values of alternatives against criteria.

use crate::domain::foundation::GridShape;
use serde::{Deserialize, Serialize};

/// A row-major matrix of performance values, one row per alternative and
/// one column per criterion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Builds a matrix from row-major values. Rows are taken as given;
    /// use [`is_rectangular`](Self::is_rectangular) to check uniformity.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// A matrix with no rows.
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the first row, or zero for an empty matrix.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Value at (`row`, `col`), or `None` outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row)?.get(col).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Grid dimensions implied by the matrix.
    pub fn shape(&self) -> GridShape {
        GridShape::new(self.row_count(), self.column_count())
    }

    /// True when no cell is NaN. An empty matrix is well formed.
    pub fn is_well_formed(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.iter().all(|value| !value.is_nan()))
    }

    /// True when every row has the same length.
    pub fn is_rectangular(&self) -> bool {
        let width = self.column_count();
        self.rows.iter().all(|row| row.len() == width)
    }
}

/// Checks a grid of optional cells before coercion into a matrix: every
/// cell must be present and numeric. An empty grid passes.
pub fn validate_cells(cells: &[Vec<Option<f64>>]) -> bool {
    cells.iter().all(|row| {
        row.iter()
            .all(|cell| matches!(cell, Some(value) if !value.is_nan()))
    })
}
