//! Busy-guarded report export
//!
//! Generating a report writes to a fixed file name, so two overlapping
//! exports would race on the same file. `ReportExporter` holds a busy flag
//! for the whole format-and-export call and rejects any export that starts
//! while another one is still outstanding.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use crate::error::{MoneyReportError, MoneyResult};
use crate::models::{Language, Transaction};
use crate::registry::{Message, Registry};
use crate::reports::{ReportDocument, ReportFormatter};

use super::csv::export_transactions_csv;
use super::exporter::Exporter;
use super::notifier::Notifier;

pub const DEFAULT_REPORT_FILE_NAME: &str = "TransactionReport.html";

/// Formats ledger snapshots and hands them to an exporter, one at a time
#[derive(Debug)]
pub struct ReportExporter {
    registry: Registry,
    formatter: ReportFormatter,
    file_name: String,
    busy: AtomicBool,
}

impl Default for ReportExporter {
    fn default() -> Self {
        Self::new(ReportFormatter::default(), DEFAULT_REPORT_FILE_NAME)
    }
}

impl ReportExporter {
    pub fn new(formatter: ReportFormatter, file_name: impl Into<String>) -> Self {
        Self {
            registry: Registry::builtin(),
            formatter,
            file_name: file_name.into(),
            busy: AtomicBool::new(false),
        }
    }

    /// Use a specific registry for notification texts
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Whether an export is currently in flight
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// File name CSV exports are written under (`.csv` next to the report)
    pub fn csv_file_name(&self) -> String {
        Path::new(&self.file_name)
            .with_extension("csv")
            .to_string_lossy()
            .into_owned()
    }

    /// Format `snapshot` and export it
    ///
    /// The user is notified of the outcome either way. The ledger is never
    /// touched, so a failed export can simply be retried.
    ///
    /// # Errors
    ///
    /// - `Busy` if another export has not finished yet
    /// - `UnknownCode` if the report cannot be rendered in `language`
    /// - `Export` if the exporter failed
    pub fn export(
        &self,
        snapshot: &[Transaction],
        language: Language,
        exporter: &mut dyn Exporter,
        notifier: &dyn Notifier,
    ) -> MoneyResult<PathBuf> {
        self.run_exclusive(&self.file_name, language, exporter, notifier, || {
            self.formatter
                .format(snapshot, language)
                .map(ReportDocument::into_string)
        })
    }

    /// Export `snapshot` as CSV under [`csv_file_name`](Self::csv_file_name)
    ///
    /// Shares the busy flag and notifications with [`export`](Self::export).
    pub fn export_csv(
        &self,
        snapshot: &[Transaction],
        language: Language,
        exporter: &mut dyn Exporter,
        notifier: &dyn Notifier,
    ) -> MoneyResult<PathBuf> {
        let file_name = self.csv_file_name();
        self.run_exclusive(&file_name, language, exporter, notifier, || {
            let mut buffer = Vec::new();
            export_transactions_csv(snapshot, &self.registry, language, &mut buffer)?;
            String::from_utf8(buffer).map_err(|e| MoneyReportError::Export(e.to_string()))
        })
    }

    fn run_exclusive(
        &self,
        file_name: &str,
        language: Language,
        exporter: &mut dyn Exporter,
        notifier: &dyn Notifier,
        render: impl FnOnce() -> MoneyResult<String>,
    ) -> MoneyResult<PathBuf> {
        let _guard = BusyGuard::acquire(&self.busy).ok_or_else(|| {
            warn!("report export requested while another is in progress");
            MoneyReportError::Busy("a report export is already in progress".into())
        })?;

        let result = render().and_then(|content| {
            exporter
                .export_document(&content, file_name)
                .map_err(|e| match e {
                    MoneyReportError::Export(_) => e,
                    other => MoneyReportError::Export(other.to_string()),
                })
        });

        match &result {
            Ok(location) => {
                info!(location = %location.display(), "report exported");
                self.notify(notifier, Message::ReportGenerated, language);
            }
            Err(e) => {
                warn!(error = %e, "report export failed");
                self.notify(notifier, Message::ReportFailed, language);
            }
        }

        result
    }

    fn notify(&self, notifier: &dyn Notifier, message: Message, language: Language) {
        match self.registry.message(message, language) {
            Ok(text) => notifier.notify(text),
            Err(e) => warn!(error = %e, "notification text missing"),
        }
    }
}

/// Holds the busy flag until dropped
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
