//! Export configuration

use super::error::ValidationError;
use serde::Deserialize;

/// Export configuration (CSV download destination and naming)
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory that receives exported files when running natively
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Base name for exported files; a timestamp is appended
    #[serde(default = "default_filename_stem")]
    pub filename_stem: String,
}

fn default_output_dir() -> String {
    "exports".to_string()
}

fn default_filename_stem() -> String {
    "decision-matrix".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            filename_stem: default_filename_stem(),
        }
    }
}

impl ExportConfig {
    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_dir.trim().is_empty() {
            return Err(ValidationError::MissingOutputDir);
        }
        if self.filename_stem.trim().is_empty()
            || self.filename_stem.contains(['/', '\\'])
        {
            return Err(ValidationError::InvalidFilenameStem);
        }
        Ok(())
    }
}
