//! Optimization direction of a criterion.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a criterion rewards smaller or larger performance values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionDirection {
    /// Lower values are better (a cost criterion).
    Min,
    /// Higher values are better (a benefit criterion).
    #[default]
    Max,
}

impl CriterionDirection {
    /// Form-value representation, matching the direction selector options.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Min => "Minimize",
            Self::Max => "Maximize",
        }
    }
}

impl fmt::Display for CriterionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CriterionDirection {
    type Err = ValidationError;

    /// Parses a direction keyword. Accepts the cost/benefit synonyms used by
    /// imported decision tables, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "min" | "cost" => Ok(Self::Min),
            "max" | "benefit" => Ok(Self::Max),
            other => Err(ValidationError::invalid_format(
                "criterion_direction",
                format!("unknown keyword '{other}'"),
            )),
        }
    }
}
