//! Presentation configuration

use super::error::ValidationError;
use serde::Deserialize;
use std::time::Duration;

/// Formatting precision beyond which an f64 carries no information.
const MAX_DECIMAL_PLACES: usize = 17;

/// Presentation configuration (alerts, formatting, reports)
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// How long an alert stays on screen before auto-dismissal, in ms
    #[serde(default = "default_alert_dismiss_ms")]
    pub alert_dismiss_ms: u64,

    /// Decimal places used when formatting result values
    #[serde(default = "default_decimal_places")]
    pub decimal_places: usize,

    /// Status text shown next to the busy spinner
    #[serde(default = "default_loading_message")]
    pub loading_message: String,

    /// Title of printable reports
    #[serde(default = "default_report_title")]
    pub report_title: String,

    /// Stylesheet linked from printable reports
    #[serde(default = "default_report_stylesheet_url")]
    pub report_stylesheet_url: String,
}

fn default_alert_dismiss_ms() -> u64 {
    5000
}

fn default_decimal_places() -> usize {
    4
}

fn default_loading_message() -> String {
    "Processing...".to_string()
}

fn default_report_title() -> String {
    "Decision Support System - Analysis Report".to_string()
}

fn default_report_stylesheet_url() -> String {
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            alert_dismiss_ms: default_alert_dismiss_ms(),
            decimal_places: default_decimal_places(),
            loading_message: default_loading_message(),
            report_title: default_report_title(),
            report_stylesheet_url: default_report_stylesheet_url(),
        }
    }
}

impl UiConfig {
    /// Validate presentation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.alert_dismiss_ms == 0 || self.alert_dismiss_ms > 600_000 {
            return Err(ValidationError::InvalidAlertDismissal);
        }
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ValidationError::InvalidDecimalPlaces);
        }
        if self.loading_message.trim().is_empty() {
            return Err(ValidationError::MissingLoadingMessage);
        }
        if self.report_title.trim().is_empty() {
            return Err(ValidationError::MissingReportTitle);
        }
        if !self.report_stylesheet_url.starts_with("http://")
            && !self.report_stylesheet_url.starts_with("https://")
        {
            return Err(ValidationError::StylesheetMustBeHttp);
        }
        Ok(())
    }

    /// Alert dismissal delay as a duration
    pub fn dismiss_duration(&self) -> Duration {
        Duration::from_millis(self.alert_dismiss_ms)
    }
}
