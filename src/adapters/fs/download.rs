//! Download sink backed by a directory on disk.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use crate::ports::{DeliveryError, Download, DownloadSink};

/// Writes each download into a target directory, standing in for the
/// browser's download flow when running natively.
pub struct DirectoryDownloadSink {
    dir: PathBuf,
}

impl DirectoryDownloadSink {
    /// The directory is created on first delivery if it does not exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn checked_filename(filename: &str) -> Result<&str, DeliveryError> {
        if filename.trim().is_empty() {
            return Err(DeliveryError::invalid_filename(filename, "empty name"));
        }
        if filename.contains(['/', '\\']) || filename.contains("..") {
            return Err(DeliveryError::invalid_filename(
                filename,
                "path separators are not allowed",
            ));
        }
        Ok(filename)
    }
}

#[async_trait]
impl DownloadSink for DirectoryDownloadSink {
    async fn deliver(&self, download: Download) -> Result<(), DeliveryError> {
        let filename = Self::checked_filename(&download.filename)?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| DeliveryError::io(e.to_string()))?;

        let path = self.dir.join(filename);
        tokio::fs::write(&path, &download.bytes)
            .await
            .map_err(|e| DeliveryError::io(e.to_string()))?;

        info!(path = %path.display(), bytes = download.bytes.len(), "download written");
        Ok(())
    }
}
