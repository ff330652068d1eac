//! Configuration module for MoneyReport
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence
//!
//! Only preferences are persisted; transactions live for a single session.

pub mod paths;
pub mod settings;

pub use paths::MoneyReportPaths;
pub use settings::Settings;
