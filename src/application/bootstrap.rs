//! Page bootstrap: ready-time wiring and global keyboard shortcuts.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{Key, KeyEvent, RegionId};
use crate::ports::{AnalysisTrigger, Viewport};

/// One-time page setup and the handlers it installs.
pub struct PageBootstrap {
    viewport: Arc<dyn Viewport>,
    analysis: Arc<dyn AnalysisTrigger>,
}

impl PageBootstrap {
    pub fn new(viewport: Arc<dyn Viewport>, analysis: Arc<dyn AnalysisTrigger>) -> Self {
        Self { viewport, analysis }
    }

    /// Runs when the page content is ready: activates tooltip behavior on
    /// every flagged region. Returns how many activations took.
    pub fn on_ready(&self) -> usize {
        let mut activated = 0;
        for region in self.viewport.tooltip_targets() {
            if self.viewport.activate_tooltip(&region) {
                activated += 1;
            }
        }
        debug!(activated, "tooltips initialized");
        activated
    }

    /// Global keyboard handler. Ctrl+Enter starts an analysis run when the
    /// control is present; everything else is ignored. Returns whether the
    /// event was consumed.
    pub fn handle_key(&self, event: KeyEvent) -> bool {
        if event.ctrl && event.key == Key::Enter {
            if self.analysis.is_available() {
                self.analysis.trigger();
                debug!("analysis triggered by keyboard shortcut");
                return true;
            }
            debug!("analysis control absent, shortcut ignored");
        }
        false
    }

    /// Brings a region to the top of the viewport. Returns `false` when the
    /// region is absent.
    pub fn scroll_to(&self, region: &RegionId) -> bool {
        let scrolled = self.viewport.scroll_to(region);
        if !scrolled {
            debug!(%region, "scroll target missing, skipping");
        }
        scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryPage, RecordingAnalysisTrigger};

    fn bootstrap(
        page: &Arc<InMemoryPage>,
        trigger: &Arc<RecordingAnalysisTrigger>,
    ) -> PageBootstrap {
        PageBootstrap::new(
            Arc::clone(page) as Arc<dyn Viewport>,
            Arc::clone(trigger) as Arc<dyn AnalysisTrigger>,
        )
    }

    #[test]
    fn on_ready_activates_every_flagged_tooltip() {
        let page = Arc::new(InMemoryPage::new());
        page.flag_tooltip(RegionId::new("weights-help"));
        page.flag_tooltip(RegionId::new("method-help"));
        let trigger = Arc::new(RecordingAnalysisTrigger::armed());

        assert_eq!(bootstrap(&page, &trigger).on_ready(), 2);
        assert_eq!(page.active_tooltip_count(), 2);
    }

    #[test]
    fn on_ready_with_no_targets_is_quiet() {
        let page = Arc::new(InMemoryPage::new());
        let trigger = Arc::new(RecordingAnalysisTrigger::armed());
        assert_eq!(bootstrap(&page, &trigger).on_ready(), 0);
    }

    #[test]
    fn ctrl_enter_starts_an_analysis_run() {
        let page = Arc::new(InMemoryPage::new());
        let trigger = Arc::new(RecordingAnalysisTrigger::armed());
        let bootstrap = bootstrap(&page, &trigger);

        assert!(bootstrap.handle_key(KeyEvent::ctrl(Key::Enter)));
        assert_eq!(trigger.fire_count(), 1);
    }

    #[test]
    fn shortcut_without_the_control_is_ignored() {
        let page = Arc::new(InMemoryPage::new());
        let trigger = Arc::new(RecordingAnalysisTrigger::absent());
        let bootstrap = bootstrap(&page, &trigger);

        assert!(!bootstrap.handle_key(KeyEvent::ctrl(Key::Enter)));
        assert_eq!(trigger.fire_count(), 0);
    }

    #[test]
    fn other_keys_do_not_trigger() {
        let page = Arc::new(InMemoryPage::new());
        let trigger = Arc::new(RecordingAnalysisTrigger::armed());
        let bootstrap = bootstrap(&page, &trigger);

        assert!(!bootstrap.handle_key(KeyEvent::plain(Key::Enter)));
        assert!(!bootstrap.handle_key(KeyEvent::ctrl(Key::Char('e'))));
        assert!(!bootstrap.handle_key(KeyEvent::plain(Key::Escape)));
        assert_eq!(trigger.fire_count(), 0);
    }

    #[test]
    fn scroll_reports_missing_targets() {
        let page = Arc::new(InMemoryPage::new());
        page.insert_region(RegionId::new("results"), "<p>r</p>");
        let trigger = Arc::new(RecordingAnalysisTrigger::armed());
        let bootstrap = bootstrap(&page, &trigger);

        assert!(bootstrap.scroll_to(&RegionId::new("results")));
        assert!(!bootstrap.scroll_to(&RegionId::new("nowhere")));
        assert_eq!(page.scrolled(), [RegionId::new("results")]);
    }
}
