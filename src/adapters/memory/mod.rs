//! In-memory adapters for tests and the demo binary.

pub mod analysis;
pub mod download;
pub mod page;
pub mod printer;

pub use analysis::RecordingAnalysisTrigger;
pub use download::CapturingDownloadSink;
pub use page::InMemoryPage;
pub use printer::CapturingPrintSurface;
