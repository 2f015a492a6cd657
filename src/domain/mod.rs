//! Domain layer: pure types and logic with no page or I/O dependencies.

pub mod alert;
pub mod dataset;
pub mod foundation;
pub mod heatmap;
pub mod import;
pub mod matrix;
pub mod report;
pub mod table;

pub use alert::Alert;
pub use dataset::{sample_dataset, Dataset};
pub use heatmap::{correlation_color, CorrelationBand};
pub use import::{parse_decision_table, ImportError};
pub use matrix::{validate_cells, DecisionMatrix};
pub use report::ReportDocument;
pub use table::TableSnapshot;
