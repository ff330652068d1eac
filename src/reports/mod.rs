//! Reports module for MoneyReport
//!
//! Renders a ledger snapshot into a shareable transaction history document.

pub mod history;

pub use history::{check_timestamp_format, ReportDocument, ReportFormatter};
