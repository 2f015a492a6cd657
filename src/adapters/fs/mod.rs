//! Filesystem adapters.

pub mod download;

pub use download::DirectoryDownloadSink;
