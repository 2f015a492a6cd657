//! Typed addressing for the workbench's input form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Address of a single form field on the workbench page.
///
/// Services never build element selectors; they name fields through this
/// enum and let the page adapter map each key to a concrete control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKey {
    /// The field holding the number of alternatives.
    AlternativeCount,
    /// The field holding the number of criteria.
    CriterionCount,
    /// The name field of the alternative at `row`.
    AlternativeName(usize),
    /// The name field of the criterion at `col`.
    CriterionName(usize),
    /// The optimization-direction selector of the criterion at `col`.
    CriterionDirection(usize),
    /// The performance-value cell at (`row`, `col`) in the input grid.
    MatrixCell { row: usize, col: usize },
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlternativeCount => write!(f, "alternative-count"),
            Self::CriterionCount => write!(f, "criterion-count"),
            Self::AlternativeName(row) => write!(f, "alternative-name[{row}]"),
            Self::CriterionName(col) => write!(f, "criterion-name[{col}]"),
            Self::CriterionDirection(col) => write!(f, "criterion-direction[{col}]"),
            Self::MatrixCell { row, col } => write!(f, "cell[{row},{col}]"),
        }
    }
}

/// Dimensions of the input grid: one row per alternative, one column per
/// criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridShape {
    pub alternatives: usize,
    pub criteria: usize,
}

impl GridShape {
    pub fn new(alternatives: usize, criteria: usize) -> Self {
        Self {
            alternatives,
            criteria,
        }
    }

    /// Total number of value cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.alternatives * self.criteria
    }

    /// True when either dimension is zero.
    pub fn is_degenerate(&self) -> bool {
        self.alternatives == 0 || self.criteria == 0
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.alternatives, self.criteria)
    }
}
