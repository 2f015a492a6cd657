//! Port for presenting printable reports.

use super::download_sink::DeliveryError;
use crate::domain::ReportDocument;
use async_trait::async_trait;

/// Opens a report in a new browsing context and invokes its print flow.
///
/// The opened context stays alive after printing; closing it is the user's
/// decision, not the caller's.
#[async_trait]
pub trait PrintSurface: Send + Sync {
    async fn present(&self, document: ReportDocument) -> Result<(), DeliveryError>;
}
