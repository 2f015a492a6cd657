//! Print service: captured page regions into printable reports.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::UiConfig;
use crate::domain::foundation::RegionId;
use crate::domain::ReportDocument;
use crate::ports::{ContentRegions, DeliveryError, PrintSurface};

/// Wraps a page region into a standalone report and presents it for
/// printing.
pub struct ReportPrinter {
    regions: Arc<dyn ContentRegions>,
    surface: Arc<dyn PrintSurface>,
    title: String,
    stylesheet_href: String,
}

impl ReportPrinter {
    pub fn new(
        regions: Arc<dyn ContentRegions>,
        surface: Arc<dyn PrintSurface>,
        ui: &UiConfig,
    ) -> Self {
        Self {
            regions,
            surface,
            title: ui.report_title.clone(),
            stylesheet_href: ui.report_stylesheet_url.clone(),
        }
    }

    /// Prints the region's current content.
    ///
    /// Returns `Ok(false)` when the region is absent and nothing was
    /// presented. Presentation failures surface as errors.
    pub async fn print_region(&self, region: &RegionId) -> Result<bool, DeliveryError> {
        // 1. Capture the region's markup; a missing region is a skip.
        let body = match self.regions.region_html(region) {
            Some(body) => body,
            None => {
                warn!(%region, "print target missing, skipping");
                return Ok(false);
            }
        };

        // 2. Wrap it into a standalone document and present it.
        let document = ReportDocument::new(&self.title, &self.stylesheet_href, body);
        self.surface.present(document).await?;

        debug!(%region, "print view opened");
        Ok(true)
    }
}
