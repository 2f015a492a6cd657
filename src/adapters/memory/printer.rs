//! Capturing print surface for tests.

use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ReportDocument;
use crate::ports::{DeliveryError, PrintSurface};

/// Records every presented report instead of opening a window.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
pub struct CapturingPrintSurface {
    presented: RwLock<Vec<ReportDocument>>,
    fail: bool,
}

impl CapturingPrintSurface {
    pub fn new() -> Self {
        Self {
            presented: RwLock::new(Vec::new()),
            fail: false,
        }
    }

    /// A surface that rejects every report, simulating a blocked popup.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// All presented reports, in order.
    pub fn documents(&self) -> Vec<ReportDocument> {
        self.presented
            .read()
            .expect("presented lock poisoned")
            .clone()
    }

    pub fn print_count(&self) -> usize {
        self.presented.read().expect("presented lock poisoned").len()
    }
}

impl Default for CapturingPrintSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PrintSurface for CapturingPrintSurface {
    async fn present(&self, document: ReportDocument) -> Result<(), DeliveryError> {
        if self.fail {
            return Err(DeliveryError::unavailable("print window blocked"));
        }
        debug!(title = document.title(), "report captured");
        self.presented
            .write()
            .expect("presented lock poisoned")
            .push(document);
        Ok(())
    }
}
