//! Import of decision tables pasted or uploaded as delimited text.
//!
//! Two layouts are recognized. In the simple layout the first row names the
//! criteria and every criterion defaults to maximization:
//!
//! ```text
//! Alternative,Price,Quality
//! A1,5000,8
//! A2,4500,7
//! ```
//!
//! In the directed layout an extra first row gives each criterion's
//! optimization direction (`min`/`max`, or the `cost`/`benefit` synonyms)
//! and the criterion names move to the second row:
//!
//! ```text
//! ,min,max
//! Alternative,Price,Quality
//! A1,5000,8
//! ```
//!
//! The layout is detected from the first row: when every non-empty cell
//! after the first is a direction keyword, the table is directed.

use crate::domain::dataset::Dataset;
use crate::domain::foundation::{parse_decimal, CriterionDirection, ValidationError};
use crate::domain::matrix::DecisionMatrix;
use thiserror::Error;

/// Errors raised while interpreting an imported decision table.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ImportError {
    #[error("Decision table is empty")]
    Empty,

    #[error("Decision table header names no criteria")]
    NoCriteria,

    #[error("Decision table contains no alternative rows")]
    NoAlternatives,

    #[error("Direction row names {actual} directions for {expected} criteria")]
    DirectionCountMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Malformed(#[from] ValidationError),
}

/// Parses delimited text into a dataset.
///
/// Cell values that are empty or not numeric are taken as `0.0`, mirroring
/// the lenient handling of hand-edited spreadsheets. Rows whose first cell
/// is empty are skipped, and short rows are padded with zeros.
pub fn parse_decision_table(text: &str) -> Result<Dataset, ImportError> {
    let rows: Vec<Vec<String>> = text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(split_row)
        .collect();

    let Some(first_row) = rows.first() else {
        return Err(ImportError::Empty);
    };

    let directions_declared = is_direction_row(first_row);
    let header_index = usize::from(directions_declared);
    let header = rows.get(header_index).ok_or(ImportError::NoAlternatives)?;

    let criteria = leading_names(header);
    if criteria.is_empty() {
        return Err(ImportError::NoCriteria);
    }

    let directions = if directions_declared {
        let declared = parse_directions(first_row);
        if declared.len() != criteria.len() {
            return Err(ImportError::DirectionCountMismatch {
                expected: criteria.len(),
                actual: declared.len(),
            });
        }
        declared
    } else {
        vec![CriterionDirection::default(); criteria.len()]
    };

    let mut alternatives = Vec::new();
    let mut values = Vec::new();
    for row in rows.iter().skip(header_index + 1) {
        let name = row.first().map(|cell| cell.trim()).unwrap_or("");
        if name.is_empty() {
            continue;
        }
        alternatives.push(name.to_string());
        values.push(row_values(row, criteria.len()));
    }
    if alternatives.is_empty() {
        return Err(ImportError::NoAlternatives);
    }

    Ok(Dataset::try_new(
        alternatives,
        criteria,
        directions,
        DecisionMatrix::from_rows(values),
    )?)
}

/// Splits one CSV line into cells, honoring quote-wrapped fields with
/// doubled embedded quotes.
fn split_row(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                ',' => cells.push(std::mem::take(&mut current)),
                _ => current.push(ch),
            }
        }
    }
    cells.push(current);
    cells
}

/// True when every non-empty cell after the first parses as a direction
/// keyword, and at least one such cell exists.
fn is_direction_row(row: &[String]) -> bool {
    let mut keywords = 0;
    for cell in row.iter().skip(1) {
        let cell = cell.trim();
        if cell.is_empty() {
            continue;
        }
        if cell.parse::<CriterionDirection>().is_err() {
            return false;
        }
        keywords += 1;
    }
    keywords > 0
}

fn parse_directions(row: &[String]) -> Vec<CriterionDirection> {
    row.iter()
        .skip(1)
        .filter_map(|cell| cell.trim().parse().ok())
        .collect()
}

/// The leading run of non-empty names after the row's first cell.
fn leading_names(row: &[String]) -> Vec<String> {
    row.iter()
        .skip(1)
        .map(|cell| cell.trim())
        .take_while(|cell| !cell.is_empty())
        .map(String::from)
        .collect()
}

/// The row's value cells coerced to numbers, padded with zeros to `width`.
fn row_values(row: &[String], width: usize) -> Vec<f64> {
    (0..width)
        .map(|col| {
            row.get(col + 1)
                .and_then(|cell| parse_decimal(cell))
                .unwrap_or(0.0)
        })
        .collect()
}
