//! Capturing download sink for tests.

use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::ports::{DeliveryError, Download, DownloadSink};

/// Records every delivered download instead of sending it anywhere.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
pub struct CapturingDownloadSink {
    deliveries: RwLock<Vec<Download>>,
    fail: bool,
}

impl CapturingDownloadSink {
    pub fn new() -> Self {
        Self {
            deliveries: RwLock::new(Vec::new()),
            fail: false,
        }
    }

    /// A sink that rejects every delivery, for error-path tests.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// All captured downloads, in delivery order.
    pub fn deliveries(&self) -> Vec<Download> {
        self.deliveries
            .read()
            .expect("deliveries lock poisoned")
            .clone()
    }

    /// The most recent download, if any.
    pub fn last(&self) -> Option<Download> {
        self.deliveries
            .read()
            .expect("deliveries lock poisoned")
            .last()
            .cloned()
    }

    pub fn delivery_count(&self) -> usize {
        self.deliveries
            .read()
            .expect("deliveries lock poisoned")
            .len()
    }
}

impl Default for CapturingDownloadSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DownloadSink for CapturingDownloadSink {
    async fn deliver(&self, download: Download) -> Result<(), DeliveryError> {
        if self.fail {
            return Err(DeliveryError::unavailable(
                "capturing sink configured to fail",
            ));
        }
        debug!(filename = %download.filename, bytes = download.bytes.len(), "download captured");
        self.deliveries
            .write()
            .expect("deliveries lock poisoned")
            .push(download);
        Ok(())
    }
}
