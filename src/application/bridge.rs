//! Bridge between the input grid's fields and the decision matrix.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{parse_decimal, FieldKey, GridShape};
use crate::domain::DecisionMatrix;
use crate::ports::FormFields;

/// Moves values between grid fields and [`DecisionMatrix`] in both
/// directions.
///
/// Collection is lenient the way the form is: absent fields and text that
/// does not parse both contribute `0.0`, so a half-filled grid still yields
/// a complete matrix.
pub struct MatrixFormBridge {
    fields: Arc<dyn FormFields>,
}

impl MatrixFormBridge {
    pub fn new(fields: Arc<dyn FormFields>) -> Self {
        Self { fields }
    }

    /// Reads the grid into a row-major matrix of the given shape.
    pub fn collect(&self, shape: GridShape) -> DecisionMatrix {
        let mut rows = Vec::with_capacity(shape.alternatives);
        for row in 0..shape.alternatives {
            let mut cells = Vec::with_capacity(shape.criteria);
            for col in 0..shape.criteria {
                let value = self
                    .fields
                    .field_value(FieldKey::MatrixCell { row, col })
                    .and_then(|text| parse_decimal(&text))
                    .unwrap_or(0.0);
                cells.push(value);
            }
            rows.push(cells);
        }
        debug!(shape = %shape, "matrix collected from grid");
        DecisionMatrix::from_rows(rows)
    }

    /// Writes the matrix into the grid, row by row. Cells the grid does not
    /// have are skipped; the return value counts the writes that landed.
    pub fn populate(&self, matrix: &DecisionMatrix) -> usize {
        let mut written = 0;
        for (row, cells) in matrix.rows().iter().enumerate() {
            for (col, value) in cells.iter().enumerate() {
                if self
                    .fields
                    .set_field_value(FieldKey::MatrixCell { row, col }, &value.to_string())
                {
                    written += 1;
                }
            }
        }
        debug!(written, "matrix populated into grid");
        written
    }
}
