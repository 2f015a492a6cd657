//! In-memory page double.
//!
//! Backs the form, feedback, content, viewport and grid ports with plain
//! maps, so services run and assert against page state without a browser.
//! Intended for tests and the demo binary.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::domain::foundation::{AlertId, CriterionDirection, FieldKey, GridShape, RegionId, TableId};
use crate::domain::{Alert, TableSnapshot};
use crate::ports::{ContentRegions, FeedbackSurface, FormFields, GridBuilder, GridError, Viewport};

/// Largest grid dimension the page will build.
const MAX_GRID_DIMENSION: usize = 100;

/// A page whose fields, regions and alerts live in memory.
///
/// A fresh page carries only the two dimension fields, mirroring the static
/// part of the real form; grid-scoped fields appear when `rebuild` runs.
///
/// # Panics
///
/// Methods panic if an internal lock is poisoned, which only happens after
/// a previous panic in a test.
pub struct InMemoryPage {
    fields: RwLock<HashMap<FieldKey, String>>,
    regions: RwLock<HashMap<RegionId, String>>,
    tables: RwLock<HashMap<TableId, TableSnapshot>>,
    alerts: RwLock<Vec<Alert>>,
    alert_area_present: bool,
    tooltip_flags: RwLock<Vec<RegionId>>,
    active_tooltips: RwLock<HashSet<RegionId>>,
    scroll_log: RwLock<Vec<RegionId>>,
}

impl InMemoryPage {
    pub fn new() -> Self {
        let mut fields = HashMap::new();
        fields.insert(FieldKey::AlternativeCount, String::new());
        fields.insert(FieldKey::CriterionCount, String::new());
        Self {
            fields: RwLock::new(fields),
            regions: RwLock::new(HashMap::new()),
            tables: RwLock::new(HashMap::new()),
            alerts: RwLock::new(Vec::new()),
            alert_area_present: true,
            tooltip_flags: RwLock::new(Vec::new()),
            active_tooltips: RwLock::new(HashSet::new()),
            scroll_log: RwLock::new(Vec::new()),
        }
    }

    /// A page without an alert area, for exercising quiet degradation.
    pub fn without_alert_area() -> Self {
        Self {
            alert_area_present: false,
            ..Self::new()
        }
    }

    /// Seeds a content region with markup.
    pub fn insert_region(&self, region: RegionId, html: impl Into<String>) {
        self.regions
            .write()
            .expect("regions lock poisoned")
            .insert(region, html.into());
    }

    /// Seeds a rendered table.
    pub fn insert_table(&self, table: TableId, snapshot: TableSnapshot) {
        self.tables
            .write()
            .expect("tables lock poisoned")
            .insert(table, snapshot);
    }

    /// Seeds a form field that exists outside the grid.
    pub fn insert_field(&self, key: FieldKey, value: impl Into<String>) {
        self.fields
            .write()
            .expect("fields lock poisoned")
            .insert(key, value.into());
    }

    /// Removes a field, simulating a page variant without that control.
    pub fn remove_field(&self, key: FieldKey) {
        self.fields
            .write()
            .expect("fields lock poisoned")
            .remove(&key);
    }

    /// Marks a region as a tooltip target.
    pub fn flag_tooltip(&self, region: RegionId) {
        self.tooltip_flags
            .write()
            .expect("tooltip flags lock poisoned")
            .push(region);
    }

    /// Current value of a field, for assertions.
    pub fn field(&self, key: FieldKey) -> Option<String> {
        self.fields
            .read()
            .expect("fields lock poisoned")
            .get(&key)
            .cloned()
    }

    /// Alerts on display, newest first.
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.read().expect("alerts lock poisoned").clone()
    }

    /// Alert messages on display, newest first.
    pub fn alert_messages(&self) -> Vec<String> {
        self.alerts()
            .into_iter()
            .map(|alert| alert.message)
            .collect()
    }

    /// Regions scrolled to, in call order.
    pub fn scrolled(&self) -> Vec<RegionId> {
        self.scroll_log
            .read()
            .expect("scroll log lock poisoned")
            .clone()
    }

    /// Number of regions with an activated tooltip.
    pub fn active_tooltip_count(&self) -> usize {
        self.active_tooltips
            .read()
            .expect("active tooltips lock poisoned")
            .len()
    }
}

impl Default for InMemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl FormFields for InMemoryPage {
    fn field_value(&self, key: FieldKey) -> Option<String> {
        self.fields
            .read()
            .expect("fields lock poisoned")
            .get(&key)
            .cloned()
    }

    fn set_field_value(&self, key: FieldKey, value: &str) -> bool {
        let mut fields = self.fields.write().expect("fields lock poisoned");
        match fields.get_mut(&key) {
            Some(slot) => {
                *slot = value.to_string();
                true
            }
            None => false,
        }
    }
}

impl FeedbackSurface for InMemoryPage {
    fn show_spinner(&self, region: &RegionId, status_text: &str) -> bool {
        let mut regions = self.regions.write().expect("regions lock poisoned");
        match regions.get_mut(region) {
            Some(content) => {
                *content = format!(
                    "<div class=\"text-center\">\
                     <div class=\"spinner-border\" role=\"status\"></div>\
                     <p>{status_text}</p>\
                     </div>"
                );
                true
            }
            None => false,
        }
    }

    fn push_alert(&self, alert: Alert) -> bool {
        if !self.alert_area_present {
            return false;
        }
        self.alerts
            .write()
            .expect("alerts lock poisoned")
            .insert(0, alert);
        true
    }

    fn remove_alert(&self, id: AlertId) -> bool {
        let mut alerts = self.alerts.write().expect("alerts lock poisoned");
        let before = alerts.len();
        alerts.retain(|alert| alert.id != id);
        alerts.len() < before
    }
}

impl ContentRegions for InMemoryPage {
    fn region_html(&self, region: &RegionId) -> Option<String> {
        self.regions
            .read()
            .expect("regions lock poisoned")
            .get(region)
            .cloned()
    }

    fn table_snapshot(&self, table: &TableId) -> Option<TableSnapshot> {
        self.tables
            .read()
            .expect("tables lock poisoned")
            .get(table)
            .cloned()
    }
}

impl Viewport for InMemoryPage {
    fn tooltip_targets(&self) -> Vec<RegionId> {
        self.tooltip_flags
            .read()
            .expect("tooltip flags lock poisoned")
            .clone()
    }

    fn activate_tooltip(&self, region: &RegionId) -> bool {
        let flagged = self
            .tooltip_flags
            .read()
            .expect("tooltip flags lock poisoned")
            .contains(region);
        if !flagged {
            return false;
        }
        self.active_tooltips
            .write()
            .expect("active tooltips lock poisoned")
            .insert(region.clone());
        true
    }

    fn scroll_to(&self, region: &RegionId) -> bool {
        let exists = self
            .regions
            .read()
            .expect("regions lock poisoned")
            .contains_key(region);
        if !exists {
            return false;
        }
        self.scroll_log
            .write()
            .expect("scroll log lock poisoned")
            .push(region.clone());
        true
    }
}

impl GridBuilder for InMemoryPage {
    fn rebuild(&self, shape: GridShape) -> Result<(), GridError> {
        if shape.is_degenerate() {
            return Err(GridError::invalid_shape(shape, "a dimension is zero"));
        }
        if shape.alternatives > MAX_GRID_DIMENSION || shape.criteria > MAX_GRID_DIMENSION {
            return Err(GridError::invalid_shape(
                shape,
                format!("a dimension exceeds {MAX_GRID_DIMENSION}"),
            ));
        }

        let mut fields = self.fields.write().expect("fields lock poisoned");
        // Tear down the previous grid; only the static dimension fields
        // survive a rebuild.
        fields.retain(|key, _| {
            matches!(key, FieldKey::AlternativeCount | FieldKey::CriterionCount)
        });
        for row in 0..shape.alternatives {
            fields.insert(FieldKey::AlternativeName(row), String::new());
            for col in 0..shape.criteria {
                fields.insert(FieldKey::MatrixCell { row, col }, String::new());
            }
        }
        for col in 0..shape.criteria {
            fields.insert(FieldKey::CriterionName(col), String::new());
            fields.insert(
                FieldKey::CriterionDirection(col),
                CriterionDirection::default().as_str().to_string(),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AlertSeverity;

    #[test]
    fn fresh_page_has_only_dimension_fields() {
        let page = InMemoryPage::new();
        assert_eq!(page.field(FieldKey::AlternativeCount), Some(String::new()));
        assert_eq!(page.field(FieldKey::CriterionCount), Some(String::new()));
        assert_eq!(page.field(FieldKey::MatrixCell { row: 0, col: 0 }), None);
    }

    #[test]
    fn writes_to_absent_fields_are_skipped() {
        let page = InMemoryPage::new();
        assert!(!page.set_field_value(FieldKey::CriterionName(0), "Price"));
        assert!(page.set_field_value(FieldKey::AlternativeCount, "3"));
        assert_eq!(page.field(FieldKey::AlternativeCount), Some("3".into()));
    }

    #[test]
    fn rebuild_creates_empty_grid_fields() {
        let page = InMemoryPage::new();
        page.rebuild(GridShape::new(2, 3)).unwrap();

        assert_eq!(page.field(FieldKey::MatrixCell { row: 1, col: 2 }), Some(String::new()));
        assert_eq!(page.field(FieldKey::AlternativeName(1)), Some(String::new()));
        assert_eq!(page.field(FieldKey::CriterionName(2)), Some(String::new()));
        assert_eq!(page.field(FieldKey::CriterionDirection(0)), Some("max".into()));
        assert_eq!(page.field(FieldKey::MatrixCell { row: 2, col: 0 }), None);
    }

    #[test]
    fn rebuild_discards_previous_grid_values() {
        let page = InMemoryPage::new();
        page.rebuild(GridShape::new(3, 3)).unwrap();
        page.set_field_value(FieldKey::MatrixCell { row: 2, col: 2 }, "9");

        page.rebuild(GridShape::new(2, 2)).unwrap();
        assert_eq!(page.field(FieldKey::MatrixCell { row: 2, col: 2 }), None);
        assert_eq!(page.field(FieldKey::MatrixCell { row: 0, col: 0 }), Some(String::new()));
    }

    #[test]
    fn rebuild_preserves_dimension_field_values() {
        let page = InMemoryPage::new();
        page.set_field_value(FieldKey::AlternativeCount, "2");
        page.rebuild(GridShape::new(2, 2)).unwrap();
        assert_eq!(page.field(FieldKey::AlternativeCount), Some("2".into()));
    }

    #[test]
    fn rebuild_rejects_degenerate_and_oversized_shapes() {
        let page = InMemoryPage::new();
        assert!(matches!(
            page.rebuild(GridShape::new(0, 4)),
            Err(GridError::InvalidShape { .. })
        ));
        assert!(matches!(
            page.rebuild(GridShape::new(5, MAX_GRID_DIMENSION + 1)),
            Err(GridError::InvalidShape { .. })
        ));
    }

    #[test]
    fn alerts_stack_newest_first() {
        let page = InMemoryPage::new();
        page.push_alert(Alert::new(AlertSeverity::Info, "first"));
        page.push_alert(Alert::new(AlertSeverity::Info, "second"));
        assert_eq!(page.alert_messages(), ["second", "first"]);
    }

    #[test]
    fn remove_alert_is_idempotent() {
        let page = InMemoryPage::new();
        let alert = Alert::new(AlertSeverity::Info, "once");
        let id = alert.id;
        page.push_alert(alert);

        assert!(page.remove_alert(id));
        assert!(!page.remove_alert(id));
        assert!(page.alerts().is_empty());
    }

    #[test]
    fn missing_alert_area_swallows_alerts() {
        let page = InMemoryPage::without_alert_area();
        assert!(!page.push_alert(Alert::new(AlertSeverity::Info, "lost")));
        assert!(page.alerts().is_empty());
    }

    #[test]
    fn spinner_replaces_region_content() {
        let page = InMemoryPage::new();
        page.insert_region(RegionId::new("results"), "<table></table>");

        assert!(page.show_spinner(&RegionId::new("results"), "Processing..."));
        let html = page.region_html(&RegionId::new("results")).unwrap();
        assert!(html.contains("spinner-border"));
        assert!(html.contains("Processing..."));
    }

    #[test]
    fn spinner_on_missing_region_reports_false() {
        let page = InMemoryPage::new();
        assert!(!page.show_spinner(&RegionId::new("nowhere"), "..."));
    }

    #[test]
    fn scroll_targets_must_exist() {
        let page = InMemoryPage::new();
        page.insert_region(RegionId::new("results"), "x");

        assert!(page.scroll_to(&RegionId::new("results")));
        assert!(!page.scroll_to(&RegionId::new("nowhere")));
        assert_eq!(page.scrolled(), [RegionId::new("results")]);
    }

    #[test]
    fn tooltips_activate_only_on_flagged_regions() {
        let page = InMemoryPage::new();
        page.flag_tooltip(RegionId::new("weights-help"));

        assert!(page.activate_tooltip(&RegionId::new("weights-help")));
        assert!(!page.activate_tooltip(&RegionId::new("results")));
        assert_eq!(page.active_tooltip_count(), 1);
    }
}
