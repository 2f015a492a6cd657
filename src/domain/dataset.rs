//! Named decision problems: alternatives, criteria and their values.

use crate::domain::foundation::{CriterionDirection, GridShape, ValidationError};
use crate::domain::matrix::DecisionMatrix;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A complete decision problem ready to be loaded into the input form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    alternatives: Vec<String>,
    criteria: Vec<String>,
    directions: Vec<CriterionDirection>,
    matrix: DecisionMatrix,
}

impl Dataset {
    /// Builds a dataset, checking that the directions and matrix agree with
    /// the alternative and criterion counts.
    pub fn try_new(
        alternatives: Vec<String>,
        criteria: Vec<String>,
        directions: Vec<CriterionDirection>,
        matrix: DecisionMatrix,
    ) -> Result<Self, ValidationError> {
        if directions.len() != criteria.len() {
            return Err(ValidationError::length_mismatch(
                "directions",
                criteria.len(),
                directions.len(),
            ));
        }
        if matrix.row_count() != alternatives.len() {
            return Err(ValidationError::length_mismatch(
                "matrix rows",
                alternatives.len(),
                matrix.row_count(),
            ));
        }
        if let Some(row) = matrix.rows().iter().find(|row| row.len() != criteria.len()) {
            return Err(ValidationError::length_mismatch(
                "matrix columns",
                criteria.len(),
                row.len(),
            ));
        }
        Ok(Self {
            alternatives,
            criteria,
            directions,
            matrix,
        })
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    pub fn directions(&self) -> &[CriterionDirection] {
        &self.directions
    }

    pub fn matrix(&self) -> &DecisionMatrix {
        &self.matrix
    }

    /// Grid dimensions needed to hold this dataset.
    pub fn shape(&self) -> GridShape {
        GridShape::new(self.alternatives.len(), self.criteria.len())
    }
}

static SAMPLE: Lazy<Dataset> = Lazy::new(|| {
    use CriterionDirection::{Max, Min};

    Dataset::try_new(
        vec!["A1", "A2", "A3", "A4", "A5"]
            .into_iter()
            .map(String::from)
            .collect(),
        vec!["Price", "Quality", "Durability", "Warranty"]
            .into_iter()
            .map(String::from)
            .collect(),
        vec![Min, Max, Max, Max],
        DecisionMatrix::from_rows(vec![
            vec![5000.0, 8.0, 7.0, 2.0],
            vec![4500.0, 7.0, 8.0, 3.0],
            vec![6000.0, 9.0, 6.0, 2.0],
            vec![5500.0, 8.0, 7.0, 3.0],
            vec![4800.0, 7.0, 8.0, 2.0],
        ]),
    )
    .expect("built-in sample dataset is internally consistent")
});

/// The built-in demonstration problem: five alternatives scored against
/// price, quality, durability and warranty.
pub fn sample_dataset() -> &'static Dataset {
    &SAMPLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_five_alternatives_and_four_criteria() {
        let sample = sample_dataset();
        assert_eq!(sample.shape(), GridShape::new(5, 4));
        assert_eq!(sample.alternatives().len(), 5);
        assert_eq!(sample.criteria().len(), 4);
    }

    #[test]
    fn sample_price_criterion_is_minimized() {
        let sample = sample_dataset();
        assert_eq!(sample.criteria()[0], "Price");
        assert_eq!(sample.directions()[0], CriterionDirection::Min);
        assert_eq!(sample.directions()[1], CriterionDirection::Max);
    }

    #[test]
    fn sample_matrix_is_complete() {
        let matrix = sample_dataset().matrix();
        assert!(matrix.is_rectangular());
        assert!(matrix.is_well_formed());
        assert_eq!(matrix.get(0, 0), Some(5000.0));
        assert_eq!(matrix.get(4, 3), Some(2.0));
    }

    #[test]
    fn rejects_direction_count_mismatch() {
        let result = Dataset::try_new(
            vec!["A1".into()],
            vec!["C1".into(), "C2".into()],
            vec![CriterionDirection::Max],
            DecisionMatrix::from_rows(vec![vec![1.0, 2.0]]),
        );
        assert!(matches!(
            result,
            Err(ValidationError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn rejects_matrix_row_count_mismatch() {
        let result = Dataset::try_new(
            vec!["A1".into(), "A2".into()],
            vec!["C1".into()],
            vec![CriterionDirection::Max],
            DecisionMatrix::from_rows(vec![vec![1.0]]),
        );
        assert!(matches!(
            result,
            Err(ValidationError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn rejects_ragged_matrix_row() {
        let result = Dataset::try_new(
            vec!["A1".into()],
            vec!["C1".into(), "C2".into()],
            vec![CriterionDirection::Max, CriterionDirection::Min],
            DecisionMatrix::from_rows(vec![vec![1.0]]),
        );
        assert!(matches!(
            result,
            Err(ValidationError::LengthMismatch { .. })
        ));
    }
}
