//! User settings for MoneyReport
//!
//! Manages user preferences: display language, default currency for new
//! transactions and report output options.

use serde::{Deserialize, Serialize};

use super::paths::MoneyReportPaths;
use crate::error::MoneyReportError;
use crate::export::report::DEFAULT_REPORT_FILE_NAME;
use crate::models::{Currency, Language};
use crate::reports::check_timestamp_format;

/// User settings for MoneyReport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Display language for labels, messages and reports
    #[serde(default)]
    pub language: Language,

    /// Currency preselected for new transactions
    #[serde(default)]
    pub default_currency: Currency,

    /// File name reports are exported under
    #[serde(default = "default_report_file_name")]
    pub report_file_name: String,

    /// strftime override for report timestamps (per-language default if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_format: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_report_file_name() -> String {
    DEFAULT_REPORT_FILE_NAME.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            language: Language::default(),
            default_currency: Currency::default(),
            report_file_name: default_report_file_name(),
            timestamp_format: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &MoneyReportPaths) -> Result<Self, MoneyReportError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
            MoneyReportError::Io(format!("Failed to read settings file: {}", e))
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            MoneyReportError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        if let Some(pattern) = &settings.timestamp_format {
            check_timestamp_format(pattern)?;
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MoneyReportPaths) -> Result<(), MoneyReportError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            MoneyReportError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            MoneyReportError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
