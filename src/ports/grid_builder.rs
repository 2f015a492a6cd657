//! Port for rebuilding the input grid.

use crate::domain::foundation::GridShape;
use thiserror::Error;

/// The page component that owns the input grid's structure.
///
/// `rebuild` tears down the existing grid and creates a fresh one with
/// every cell, name and direction field empty. Until a rebuild returns
/// `Ok`, cell fields for the new shape must be treated as nonexistent;
/// callers populate values only after a successful rebuild.
pub trait GridBuilder: Send + Sync {
    fn rebuild(&self, shape: GridShape) -> Result<(), GridError>;
}

/// Errors raised by grid rebuilds.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GridError {
    #[error("Grid shape {shape} is not buildable: {reason}")]
    InvalidShape { shape: GridShape, reason: String },

    #[error("Grid rebuild failed: {reason}")]
    RebuildFailed { reason: String },
}

impl GridError {
    /// Creates an InvalidShape error.
    pub fn invalid_shape(shape: GridShape, reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            shape,
            reason: reason.into(),
        }
    }

    /// Creates a RebuildFailed error.
    pub fn rebuild_failed(reason: impl Into<String>) -> Self {
        Self::RebuildFailed {
            reason: reason.into(),
        }
    }
}
