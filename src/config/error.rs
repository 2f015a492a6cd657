//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Alert dismissal delay must be between 1 and 600000 milliseconds")]
    InvalidAlertDismissal,

    #[error("Decimal places exceeds the supported precision (17)")]
    InvalidDecimalPlaces,

    #[error("Loading message must not be empty")]
    MissingLoadingMessage,

    #[error("Report title must not be empty")]
    MissingReportTitle,

    #[error("Report stylesheet URL must use http or https")]
    StylesheetMustBeHttp,

    #[error("Export output directory must not be empty")]
    MissingOutputDir,

    #[error("Export filename stem must not be empty or contain path separators")]
    InvalidFilenameStem,
}
