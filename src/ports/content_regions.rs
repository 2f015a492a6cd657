//! Port for reading rendered page content.

use crate::domain::foundation::{RegionId, TableId};
use crate::domain::TableSnapshot;

/// Read access to content the page has already rendered.
pub trait ContentRegions: Send + Sync {
    /// The region's current markup, or `None` when the region is absent.
    fn region_html(&self, region: &RegionId) -> Option<String>;

    /// The visible text of a rendered table, or `None` when the table is
    /// absent.
    fn table_snapshot(&self, table: &TableId) -> Option<TableSnapshot>;
}
