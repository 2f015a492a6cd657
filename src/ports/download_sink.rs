//! Port for handing generated files to the user.

use async_trait::async_trait;
use thiserror::Error;

/// Content type used for CSV downloads.
pub const CSV_CONTENT_TYPE: &str = "text/csv;charset=utf-8";

/// A generated file ready for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct Download {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Download {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// A CSV download with the canonical content type.
    pub fn csv(filename: impl Into<String>, content: String) -> Self {
        Self::new(filename, CSV_CONTENT_TYPE, content.into_bytes())
    }

    /// The payload reinterpreted as UTF-8 text, for assertions and logs.
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }
}

/// Delivers downloads to wherever the host sends files: the browser's
/// download flow, a directory on disk, or a capturing test double.
#[async_trait]
pub trait DownloadSink: Send + Sync {
    async fn deliver(&self, download: Download) -> Result<(), DeliveryError>;
}

/// Errors raised while delivering a download or presenting a report.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DeliveryError {
    #[error("Delivery target unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Invalid filename '{filename}': {reason}")]
    InvalidFilename { filename: String, reason: String },

    #[error("I/O failure during delivery: {reason}")]
    Io { reason: String },
}

impl DeliveryError {
    /// Creates an Unavailable error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Creates an InvalidFilename error.
    pub fn invalid_filename(filename: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFilename {
            filename: filename.into(),
            reason: reason.into(),
        }
    }

    /// Creates an Io error.
    pub fn io(reason: impl Into<String>) -> Self {
        Self::Io {
            reason: reason.into(),
        }
    }
}
