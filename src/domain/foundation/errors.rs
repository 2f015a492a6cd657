//! Error types for domain value objects and dataset construction.

use thiserror::Error;

/// Errors raised while constructing or validating domain values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' expected {expected} entries, got {actual}")]
    LengthMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an EmptyField error for the given field name.
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField {
            field: field.into(),
        }
    }

    /// Creates a LengthMismatch error for the given field name.
    pub fn length_mismatch(field: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Creates an InvalidFormat error for the given field name.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
