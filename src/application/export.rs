//! Table export service: rendered tables out to CSV downloads.

use std::sync::Arc;

use chrono::Local;
use tracing::{debug, warn};

use crate::domain::foundation::TableId;
use crate::ports::{ContentRegions, DeliveryError, Download, DownloadSink};

/// Exports rendered tables as CSV downloads.
pub struct TableExporter {
    regions: Arc<dyn ContentRegions>,
    sink: Arc<dyn DownloadSink>,
}

impl TableExporter {
    pub fn new(regions: Arc<dyn ContentRegions>, sink: Arc<dyn DownloadSink>) -> Self {
        Self { regions, sink }
    }

    /// Exports the table under the given filename.
    ///
    /// Returns `Ok(false)` when the table is absent from the page, in which
    /// case nothing is delivered. Delivery failures surface as errors.
    pub async fn export_csv(&self, table: &TableId, filename: &str) -> Result<bool, DeliveryError> {
        // 1. Snapshot the rendered table; a missing table is a skip.
        let snapshot = match self.regions.table_snapshot(table) {
            Some(snapshot) => snapshot,
            None => {
                warn!(%table, "export target missing, skipping");
                return Ok(false);
            }
        };

        // 2. Render CSV and hand it to the sink.
        let row_count = snapshot.rows().len();
        let download = Download::csv(filename, snapshot.to_csv());
        self.sink.deliver(download).await?;

        debug!(%table, filename, rows = row_count, "table exported");
        Ok(true)
    }

    /// A download filename with the current local time baked in, so repeated
    /// exports never collide.
    pub fn timestamped_filename(stem: &str) -> String {
        format!("{stem}-{}.csv", Local::now().format("%Y%m%d-%H%M%S"))
    }
}
