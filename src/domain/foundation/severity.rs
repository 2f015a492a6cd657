//! Severity levels for transient alerts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual severity of an alert, mapped by adapters onto the page's
/// contextual styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl AlertSeverity {
    /// Style-keyword representation used by the page's alert classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
