//! Export module for MoneyReport
//!
//! Hands rendered reports to the outside world:
//! - `Exporter`: the collaborator that turns document content into a file
//!   (or anything else addressable) and returns where it went
//! - `Notifier`: fire-and-forget user notifications
//! - `ReportExporter`: formats a snapshot and exports it, refusing to start
//!   a second export while one is still running
//! - CSV: spreadsheet-compatible transaction dump

pub mod csv;
pub mod exporter;
pub mod notifier;
pub mod report;

pub use self::csv::export_transactions_csv;
pub use exporter::{Exporter, FileExporter, MemoryExporter};
pub use notifier::{Notifier, TracingNotifier};
pub use report::ReportExporter;
