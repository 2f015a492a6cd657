//! User feedback service: busy spinners and self-dismissing alerts.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::UiConfig;
use crate::domain::foundation::{AlertId, AlertSeverity, RegionId};
use crate::domain::Alert;
use crate::ports::FeedbackSurface;

/// Shows spinners and transient alerts through the feedback surface.
///
/// Alerts dismiss themselves after the configured delay. Dismissal is a
/// one-shot timer per alert; an alert removed earlier by other means makes
/// the timer a harmless no-op.
pub struct FeedbackService {
    surface: Arc<dyn FeedbackSurface>,
    dismiss_after: Duration,
    loading_message: String,
}

impl FeedbackService {
    pub fn new(surface: Arc<dyn FeedbackSurface>, ui: &UiConfig) -> Self {
        Self {
            surface,
            dismiss_after: ui.dismiss_duration(),
            loading_message: ui.loading_message.clone(),
        }
    }

    /// Replaces the region's content with a busy spinner. Returns `false`
    /// when the region is absent and nothing was shown.
    pub fn show_loading(&self, region: &RegionId) -> bool {
        let shown = self.surface.show_spinner(region, &self.loading_message);
        if !shown {
            warn!(%region, "spinner target missing, skipping");
        }
        shown
    }

    /// Shows an alert and schedules its dismissal. Returns the alert's id,
    /// or `None` when the page has no alert area.
    ///
    /// Must be called within a Tokio runtime; the dismissal timer runs as a
    /// spawned task.
    pub fn show_alert(
        &self,
        message: impl Into<String>,
        severity: AlertSeverity,
    ) -> Option<AlertId> {
        let alert = Alert::new(severity, message);
        let id = alert.id;

        if !self.surface.push_alert(alert) {
            warn!("alert area missing, dropping alert");
            return None;
        }
        debug!(%id, severity = severity.as_str(), "alert shown");

        let surface = Arc::clone(&self.surface);
        let delay = self.dismiss_after;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            surface.remove_alert(id);
        });

        Some(id)
    }
}
