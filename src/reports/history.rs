//! Transaction history report
//!
//! Produces the markup document handed to the export collaborator:
//!
//! ```text
//! <h1>{title}</h1><ul><li>{name} ({category}) - {amount} {currency} | {timestamp}</li>...</ul>
//! ```
//!
//! An empty snapshot yields `<h1>{title}</h1><p>{no transactions}</p>`.
//! Output depends only on the snapshot, the language and the formatter's
//! configuration; the formatter performs no I/O.

use std::fmt::{self, Write};

use chrono::format::{Item, StrftimeItems};

use crate::error::{MoneyReportError, MoneyResult};
use crate::models::{Language, Transaction};
use crate::registry::{Message, Registry};

/// A rendered report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument(String);

impl ReportDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ReportDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Formatter for history reports
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    registry: Registry,
    timestamp_format: Option<String>,
}

impl ReportFormatter {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            timestamp_format: None,
        }
    }

    /// Render timestamps with a fixed strftime pattern instead of the
    /// language's own
    pub fn with_timestamp_format(mut self, pattern: impl Into<String>) -> Self {
        self.timestamp_format = Some(pattern.into());
        self
    }

    /// Render a snapshot in the given language
    ///
    /// # Errors
    ///
    /// Returns `UnknownCode` if a category or message has no label for the
    /// language in the registry, or `Config` if the timestamp pattern cannot
    /// be rendered.
    pub fn format(
        &self,
        snapshot: &[Transaction],
        language: Language,
    ) -> MoneyResult<ReportDocument> {
        let title = self.registry.message(Message::HistoryTitle, language)?;
        let mut out = format!("<h1>{}</h1>", escape_html(title));

        if snapshot.is_empty() {
            let empty = self.registry.message(Message::NoTransactions, language)?;
            out.push_str(&format!("<p>{}</p>", escape_html(empty)));
            return Ok(ReportDocument(out));
        }

        out.push_str("<ul>");
        for txn in snapshot {
            out.push_str(&self.format_entry(txn, language)?);
        }
        out.push_str("</ul>");

        Ok(ReportDocument(out))
    }

    /// Render a single `<li>` entry
    pub fn format_entry(&self, txn: &Transaction, language: Language) -> MoneyResult<String> {
        let label = self.registry.category_label(txn.category(), language)?;
        Ok(format!(
            "<li>{} ({}) - {} {} | {}</li>",
            escape_html(txn.name()),
            escape_html(label),
            txn.amount(),
            txn.currency().code(),
            self.format_timestamp(txn, language)?
        ))
    }

    fn format_timestamp(&self, txn: &Transaction, language: Language) -> MoneyResult<String> {
        let pattern = self
            .timestamp_format
            .as_deref()
            .unwrap_or_else(|| language.timestamp_format());

        // chrono reports bad specifiers as fmt::Error at render time
        let mut out = String::new();
        write!(out, "{}", txn.timestamp().format(pattern))
            .map_err(|_| invalid_timestamp_format(pattern))?;
        Ok(out)
    }
}

/// Check that a strftime pattern only uses specifiers chrono understands
pub fn check_timestamp_format(pattern: &str) -> MoneyResult<()> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(invalid_timestamp_format(pattern));
    }
    Ok(())
}

fn invalid_timestamp_format(pattern: &str) -> MoneyReportError {
    MoneyReportError::Config(format!("invalid timestamp format: '{}'", pattern))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
