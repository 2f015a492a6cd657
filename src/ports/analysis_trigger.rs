//! Port for the control that starts an analysis run.

/// The page's primary analysis control.
///
/// The analysis computation itself lives outside this crate; this port
/// models only the control that starts it, so keyboard shortcuts can
/// activate the same path as a click.
pub trait AnalysisTrigger: Send + Sync {
    /// Whether the control is present on the current page.
    fn is_available(&self) -> bool;

    /// Activates the control.
    fn trigger(&self);
}
