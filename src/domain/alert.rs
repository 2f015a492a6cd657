//! Transient alerts shown in the page's notification area.

use crate::domain::foundation::{AlertId, AlertSeverity};
use serde::{Deserialize, Serialize};

/// A dismissable notification with a severity style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    pub severity: AlertSeverity,
    pub message: String,
}

impl Alert {
    /// Creates an alert with a fresh identifier.
    pub fn new(severity: AlertSeverity, message: impl Into<String>) -> Self {
        Self {
            id: AlertId::new(),
            severity,
            message: message.into(),
        }
    }
}
