//! Dataset loading: sample data and imported tables into the form.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::application::bridge::MatrixFormBridge;
use crate::application::feedback::FeedbackService;
use crate::domain::foundation::{AlertSeverity, FieldKey};
use crate::domain::{parse_decision_table, sample_dataset, Dataset, ImportError};
use crate::ports::{FormFields, GridBuilder, GridError};

/// Errors raised while loading a dataset into the form.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Loads complete datasets into the input form: dimensions, grid, names,
/// directions and values, in the order the page needs them.
pub struct DatasetLoader {
    fields: Arc<dyn FormFields>,
    grid: Arc<dyn GridBuilder>,
    bridge: MatrixFormBridge,
    feedback: FeedbackService,
}

impl DatasetLoader {
    pub fn new(
        fields: Arc<dyn FormFields>,
        grid: Arc<dyn GridBuilder>,
        feedback: FeedbackService,
    ) -> Self {
        let bridge = MatrixFormBridge::new(Arc::clone(&fields));
        Self {
            fields,
            grid,
            bridge,
            feedback,
        }
    }

    /// Loads the built-in sample problem and confirms with a success alert.
    pub fn load_sample(&self) -> Result<(), GridError> {
        self.apply(sample_dataset())?;
        info!("sample dataset loaded");
        self.feedback
            .show_alert("Sample data loaded!", AlertSeverity::Success);
        Ok(())
    }

    /// Parses a delimited decision table and loads it. A table that cannot
    /// be interpreted raises a danger alert and returns the import error.
    pub fn import_table(&self, text: &str) -> Result<(), LoadError> {
        let dataset = match parse_decision_table(text) {
            Ok(dataset) => dataset,
            Err(error) => {
                warn!(%error, "decision table import failed");
                self.feedback
                    .show_alert(format!("Import failed: {error}"), AlertSeverity::Danger);
                return Err(error.into());
            }
        };

        self.apply(&dataset)?;
        info!(
            alternatives = dataset.alternatives().len(),
            criteria = dataset.criteria().len(),
            "decision table imported"
        );
        self.feedback.show_alert(
            format!(
                "Imported {} alternatives across {} criteria",
                dataset.alternatives().len(),
                dataset.criteria().len()
            ),
            AlertSeverity::Success,
        );
        Ok(())
    }

    fn apply(&self, dataset: &Dataset) -> Result<(), GridError> {
        let shape = dataset.shape();

        // 1. Dimension fields first, so the form reflects the new shape.
        self.fields
            .set_field_value(FieldKey::AlternativeCount, &shape.alternatives.to_string());
        self.fields
            .set_field_value(FieldKey::CriterionCount, &shape.criteria.to_string());

        // 2. The grid must exist before anything addresses its cells.
        self.grid.rebuild(shape)?;

        // 3. Criterion names and directions.
        for (col, name) in dataset.criteria().iter().enumerate() {
            self.fields.set_field_value(FieldKey::CriterionName(col), name);
            self.fields.set_field_value(
                FieldKey::CriterionDirection(col),
                dataset.directions()[col].as_str(),
            );
        }

        // 4. Alternative names.
        for (row, name) in dataset.alternatives().iter().enumerate() {
            self.fields
                .set_field_value(FieldKey::AlternativeName(row), name);
        }

        // 5. Matrix values.
        let written = self.bridge.populate(dataset.matrix());
        debug!(%shape, written, "dataset applied to form");
        Ok(())
    }
}
