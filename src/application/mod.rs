//! Application layer - services orchestrating the page through ports.
//!
//! Each service takes the ports it needs as `Arc<dyn Trait>` and carries no
//! page knowledge of its own, so the same services back the wasm host, the
//! demo binary and the tests.

pub mod bootstrap;
pub mod bridge;
pub mod export;
pub mod feedback;
pub mod loader;
pub mod print;

pub use bootstrap::PageBootstrap;
pub use bridge::MatrixFormBridge;
pub use export::TableExporter;
pub use feedback::FeedbackService;
pub use loader::{DatasetLoader, LoadError};
pub use print::ReportPrinter;
