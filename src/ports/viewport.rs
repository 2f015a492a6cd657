//! Port for viewport behaviors: tooltips and scrolling.

use crate::domain::foundation::RegionId;

/// Page-level behaviors that need the live viewport.
pub trait Viewport: Send + Sync {
    /// Regions flagged for tooltip behavior on the current page.
    fn tooltip_targets(&self) -> Vec<RegionId>;

    /// Activates tooltip behavior on one region. Returns `false` when the
    /// region is not a tooltip target.
    fn activate_tooltip(&self, region: &RegionId) -> bool;

    /// Scrolls the viewport smoothly until the region's top edge aligns
    /// with the viewport's top. Returns `false` when the region is absent.
    fn scroll_to(&self, region: &RegionId) -> bool;
}
