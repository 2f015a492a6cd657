//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `DECISION_DESK_` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use decision_desk::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Alerts dismiss after {} ms", config.ui.alert_dismiss_ms);
//! ```

mod error;
mod export;
mod ui;

pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use ui::UiConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has complete defaults, so the application starts with no
/// environment at all and individual values can be overridden one by one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Presentation configuration (alerts, formatting, reports)
    #[serde(default)]
    pub ui: UiConfig,

    /// Export configuration (CSV download destination and naming)
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DECISION_DESK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DECISION_DESK__UI__ALERT_DISMISS_MS=3000` -> `ui.alert_dismiss_ms = 3000`
    /// - `DECISION_DESK__EXPORT__OUTPUT_DIR=/tmp/out` -> `export.output_dir = /tmp/out`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DECISION_DESK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ui.validate()?;
        self.export.validate()?;
        Ok(())
    }
}
