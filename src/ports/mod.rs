//! Ports: the interfaces through which services reach the page and the
//! host environment.
//!
//! Application services depend only on these traits. The real page adapter
//! lives in a wasm host; tests and the demo binary use the in-memory
//! adapters.

pub mod analysis_trigger;
pub mod content_regions;
pub mod download_sink;
pub mod feedback_surface;
pub mod form_fields;
pub mod grid_builder;
pub mod print_surface;
pub mod viewport;

pub use analysis_trigger::AnalysisTrigger;
pub use content_regions::ContentRegions;
pub use download_sink::{DeliveryError, Download, DownloadSink, CSV_CONTENT_TYPE};
pub use feedback_surface::FeedbackSurface;
pub use form_fields::FormFields;
pub use grid_builder::{GridBuilder, GridError};
pub use print_surface::PrintSurface;
pub use viewport::Viewport;
