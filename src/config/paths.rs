//! Path management for MoneyReport
//!
//! ## Path Resolution Order
//!
//! 1. `MONEY_REPORT_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (e.g. `~/.config/money-report` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::MoneyReportError;

pub const DIR_ENV_VAR: &str = "MONEY_REPORT_DIR";

/// Manages all paths used by MoneyReport
#[derive(Debug, Clone)]
pub struct MoneyReportPaths {
    base_dir: PathBuf,
}

impl MoneyReportPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, MoneyReportError> {
        let base_dir = match std::env::var_os(DIR_ENV_VAR) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths under a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Directory exported reports are written to
    pub fn reports_dir(&self) -> PathBuf {
        self.base_dir.join("reports")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), MoneyReportError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MoneyReportError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.reports_dir()).map_err(|e| {
            MoneyReportError::Io(format!("Failed to create reports directory: {}", e))
        })?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, MoneyReportError> {
    ProjectDirs::from("", "", "money-report")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| MoneyReportError::Config("Could not determine home directory".into()))
}
