//! Interactive session state
//!
//! A `Session` owns everything that lives between two shell commands: the
//! ledger, its audit trail, the active language and the report exporter.
//! Nothing here outlives the process.

use std::cell::{Ref, RefCell};
use std::path::PathBuf;
use std::rc::Rc;

use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::warn;

use crate::audit::AuditTrail;
use crate::config::{MoneyReportPaths, Settings};
use crate::error::{MoneyReportError, MoneyResult, ValidationError};
use crate::export::{Exporter, FileExporter, Notifier, ReportExporter};
use crate::models::{
    AmountInput, Category, Language, NewTransaction, Transaction, TransactionId, TransactionKind,
};
use crate::registry::{Message, Registry};
use crate::reports::{ReportDocument, ReportFormatter};
use crate::services::Ledger;

/// Form input for a new transaction, as typed by the user
#[derive(Debug, Clone, Default)]
pub struct EntryInput {
    pub name: String,
    pub amount: String,
    pub category: Option<String>,
    pub currency: Option<String>,
    pub at: Option<String>,
}

/// Collects notifications until the shell prints them
#[derive(Debug, Default)]
struct QueuedNotifier {
    queue: RefCell<Vec<String>>,
}

impl Notifier for QueuedNotifier {
    fn notify(&self, message: &str) {
        self.queue.borrow_mut().push(message.to_string());
    }
}

/// State of one interactive session
pub struct Session {
    registry: Registry,
    settings: Settings,
    paths: MoneyReportPaths,
    language: Language,
    ledger: Ledger,
    audit: Rc<RefCell<AuditTrail>>,
    reports: ReportExporter,
    notices: QueuedNotifier,
}

impl Session {
    pub fn new(paths: MoneyReportPaths, settings: Settings) -> Self {
        Self::with_registry(paths, settings, Registry::builtin())
    }

    /// Create a session validating and labelling through `registry`
    pub fn with_registry(paths: MoneyReportPaths, settings: Settings, registry: Registry) -> Self {
        let audit = Rc::new(RefCell::new(AuditTrail::new()));

        let mut ledger = Ledger::with_registry(registry);
        ledger.subscribe(Rc::clone(&audit));

        let reports = ReportExporter::new(
            report_formatter(registry, &settings),
            settings.report_file_name.clone(),
        )
        .with_registry(registry);

        Self {
            registry,
            language: settings.language,
            settings,
            paths,
            ledger,
            audit,
            reports,
            notices: QueuedNotifier::default(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn audit(&self) -> Ref<'_, AuditTrail> {
        self.audit.borrow()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch the display language for the rest of the session
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Record an expense or income from form input
    pub fn record(&mut self, kind: TransactionKind, input: EntryInput) -> MoneyResult<Transaction> {
        let timestamp = match input.at.as_deref() {
            Some(text) => parse_timestamp(text)?,
            None => Local::now().naive_local(),
        };

        let category = input
            .category
            .unwrap_or_else(|| Category::default_for(kind).code().to_string());
        let currency = input
            .currency
            .unwrap_or_else(|| self.settings.default_currency.code().to_string());

        let candidate = NewTransaction {
            kind,
            name: input.name,
            amount: AmountInput::Raw(input.amount),
            category,
            currency,
            timestamp,
        };

        match self.ledger.add(candidate) {
            Ok(txn) => {
                self.notify(Message::added(kind));
                Ok(txn)
            }
            Err(err) => {
                if let Some(
                    ValidationError::EmptyName
                    | ValidationError::UnparseableAmount(_)
                    | ValidationError::NonPositiveAmount,
                ) = err.validation_reason()
                {
                    self.notify(Message::EnterNameAndAmount);
                }
                Err(err)
            }
        }
    }

    /// Delete a transaction by its id text (`txn-3` or `3`)
    pub fn delete(&mut self, id: &str) -> MoneyResult<Transaction> {
        let id: TransactionId = id
            .parse()
            .map_err(|_| MoneyReportError::transaction_not_found(id))?;
        let txn = self.ledger.remove(id)?;
        self.notify(Message::TransactionDeleted);
        Ok(txn)
    }

    /// Render the history report without exporting it
    pub fn render_report(&self) -> MoneyResult<ReportDocument> {
        report_formatter(self.registry, &self.settings).format(self.ledger.list(), self.language)
    }

    /// Export the history report into the reports directory
    pub fn export_report(&mut self) -> MoneyResult<PathBuf> {
        let mut exporter = FileExporter::new(self.paths.reports_dir());
        self.export_report_with(&mut exporter)
    }

    /// Export the history report through a specific exporter
    pub fn export_report_with(&mut self, exporter: &mut dyn Exporter) -> MoneyResult<PathBuf> {
        self.reports
            .export(self.ledger.list(), self.language, exporter, &self.notices)
    }

    /// Export the ledger as CSV next to the HTML report
    pub fn export_csv(&mut self) -> MoneyResult<PathBuf> {
        let mut exporter = FileExporter::new(self.paths.reports_dir());
        self.export_csv_with(&mut exporter)
    }

    /// Export the ledger as CSV through a specific exporter
    pub fn export_csv_with(&mut self, exporter: &mut dyn Exporter) -> MoneyResult<PathBuf> {
        self.reports
            .export_csv(self.ledger.list(), self.language, exporter, &self.notices)
    }

    /// Drain pending notifications
    pub fn take_notices(&self) -> Vec<String> {
        self.notices.queue.borrow_mut().drain(..).collect()
    }

    /// Localized text of a message in the active language
    pub fn message(&self, message: Message) -> MoneyResult<&'static str> {
        self.registry.message(message, self.language)
    }

    fn notify(&self, message: Message) {
        match self.registry.message(message, self.language) {
            Ok(text) => self.notices.notify(text),
            Err(e) => warn!(error = %e, "notification text missing"),
        }
    }
}

fn report_formatter(registry: Registry, settings: &Settings) -> ReportFormatter {
    let formatter = ReportFormatter::new(registry);
    match &settings.timestamp_format {
        Some(pattern) => formatter.with_timestamp_format(pattern.clone()),
        None => formatter,
    }
}

/// Parse a user-entered timestamp
///
/// Accepts `YYYY-MM-DD HH:MM[:SS]`, `YYYY-MM-DDTHH:MM[:SS]` and `YYYY-MM-DD`
/// (midnight).
pub fn parse_timestamp(text: &str) -> MoneyResult<NaiveDateTime> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];

    let text = text.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| {
            MoneyReportError::Config(format!(
                "Invalid date '{}'. Use YYYY-MM-DD or YYYY-MM-DD HH:MM",
                text
            ))
        })
}
