//! Recording analysis trigger for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ports::AnalysisTrigger;

/// Counts activations of the analysis control.
pub struct RecordingAnalysisTrigger {
    available: bool,
    fired: AtomicUsize,
}

impl RecordingAnalysisTrigger {
    /// A trigger whose control is present on the page.
    pub fn armed() -> Self {
        Self {
            available: true,
            fired: AtomicUsize::new(0),
        }
    }

    /// A trigger whose control is absent from the page.
    pub fn absent() -> Self {
        Self {
            available: false,
            fired: AtomicUsize::new(0),
        }
    }

    /// How many times the control has been activated.
    pub fn fire_count(&self) -> usize {
        self.fired.load(Ordering::SeqCst)
    }
}

impl AnalysisTrigger for RecordingAnalysisTrigger {
    fn is_available(&self) -> bool {
        self.available
    }

    fn trigger(&self) {
        self.fired.fetch_add(1, Ordering::SeqCst);
    }
}
