//! Foundation types shared across the domain layer.
//!
//! Value objects, typed identifiers and small parsing helpers with no
//! dependencies on the rest of the crate.

pub mod direction;
pub mod errors;
pub mod fields;
pub mod ids;
pub mod input;
pub mod numeric;
pub mod severity;

pub use direction::CriterionDirection;
pub use errors::ValidationError;
pub use fields::{FieldKey, GridShape};
pub use ids::{AlertId, RegionId, TableId};
pub use input::{Key, KeyEvent};
pub use numeric::{format_number, parse_decimal};
pub use severity::AlertSeverity;
