//! Port for user feedback: alerts and busy spinners.

use crate::domain::foundation::{AlertId, RegionId};
use crate::domain::Alert;

/// The page surface that shows transient feedback.
pub trait FeedbackSurface: Send + Sync {
    /// Replaces the region's content with a busy spinner and status text.
    /// Returns `false` when the region is absent.
    fn show_spinner(&self, region: &RegionId, status_text: &str) -> bool;

    /// Shows the alert ahead of any alerts already on display, newest
    /// first. Returns `false` when the page has no alert area.
    fn push_alert(&self, alert: Alert) -> bool;

    /// Removes the alert if it is still on display. Returns `false` when it
    /// was already gone, which is a harmless outcome for delayed dismissal.
    fn remove_alert(&self, id: AlertId) -> bool;
}
