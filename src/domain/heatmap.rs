//! Color scale for correlation heatmap cells.

use serde::{Deserialize, Serialize};

/// Strength band of a correlation coefficient.
///
/// Bands are resolved top-down with inclusive lower bounds, so boundary
/// values fall into the stronger band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CorrelationBand {
    StrongPositive,
    MildPositive,
    Neutral,
    MildNegative,
    StrongNegative,
}

impl CorrelationBand {
    /// Classifies a correlation coefficient. Anything that fails every
    /// threshold comparison, including NaN, lands in the strong-negative
    /// band.
    pub fn classify(value: f64) -> Self {
        if value >= 0.7 {
            Self::StrongPositive
        } else if value >= 0.3 {
            Self::MildPositive
        } else if value >= -0.3 {
            Self::Neutral
        } else if value >= -0.7 {
            Self::MildNegative
        } else {
            Self::StrongNegative
        }
    }

    /// Background color for heatmap cells in this band.
    pub fn color(&self) -> &'static str {
        match self {
            Self::StrongPositive => "#28a745",
            Self::MildPositive => "#90EE90",
            Self::Neutral => "#ffffff",
            Self::MildNegative => "#ffcccb",
            Self::StrongNegative => "#dc3545",
        }
    }
}

/// Shorthand for `CorrelationBand::classify(value).color()`.
pub fn correlation_color(value: f64) -> &'static str {
    CorrelationBand::classify(value).color()
}
