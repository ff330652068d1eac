//! MoneyReport - personal expense and income ledger
//!
//! Records expenses and income for a session, lets the user browse and delete
//! them, and renders the ledger into a printable history report.
//!
//! # Architecture
//!
//! - `models`: transaction data types (ids, money, categories, currencies, languages)
//! - `registry`: valid categories, supported currencies and per-language labels
//! - `services`: candidate validation and the session ledger
//! - `audit`: in-memory trail of ledger changes
//! - `reports`: HTML history report formatting
//! - `export`: exporter and notifier collaborators, CSV output
//! - `display`: terminal tables
//! - `config`: paths and persisted settings
//! - `cli`: the interactive shell
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use money_report::models::{Category, Currency, Language, NewTransaction};
//! use money_report::reports::ReportFormatter;
//! use money_report::services::Ledger;
//!
//! let at = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(9, 30, 0).unwrap();
//! let mut ledger = Ledger::new();
//! ledger.add(NewTransaction::expense("Coffee", "5.5", Category::Food, Currency::Azn, at))?;
//!
//! let report = ReportFormatter::default().format(ledger.list(), Language::En)?;
//! assert!(report.as_str().contains("Coffee (Food) - 5.5 AZN"));
//! # Ok::<(), money_report::MoneyReportError>(())
//! ```

use std::sync::Once;

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod registry;
pub mod reports;
pub mod services;

pub use error::{MoneyReportError, MoneyResult, ValidationError};

static TRACING_INIT: Once = Once::new();

/// Install the stderr log subscriber; later calls are no-ops
///
/// The filter comes from `RUST_LOG`, falling back to `money_report=warn`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("money_report=warn"));

        // Another subscriber may already be installed by an embedding program
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
