//! CSV Export functionality
//!
//! Exports a ledger snapshot to CSV, one row per transaction, with the
//! category label resolved in the requested language.

use std::io::Write;

use crate::error::{MoneyReportError, MoneyResult};
use crate::models::{Language, Transaction};
use crate::registry::Registry;

const HEADER: [&str; 8] = [
    "ID", "Type", "Name", "Category", "Category Label", "Amount", "Currency", "Timestamp",
];

/// Export transactions to CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    registry: &Registry,
    language: Language,
    writer: W,
) -> MoneyResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER).map_err(export_error)?;

    for txn in transactions {
        let label = registry.category_label(txn.category(), language)?;
        wtr.write_record([
            txn.id().to_string(),
            txn.kind().to_string(),
            txn.name().to_string(),
            txn.category().code().to_string(),
            label.to_string(),
            txn.amount().to_string(),
            txn.currency().code().to_string(),
            txn.timestamp().format("%Y-%m-%d %H:%M:%S").to_string(),
        ])
        .map_err(export_error)?;
    }

    wtr.flush()
        .map_err(|e| MoneyReportError::Export(e.to_string()))?;
    Ok(())
}

fn export_error(e: csv::Error) -> MoneyReportError {
    MoneyReportError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Currency, NewTransaction};
    use crate::services::Ledger;
    use chrono::NaiveDate;

    #[test]
    fn test_export_transactions_csv() {
        let ts = NaiveDate::from_ymd_opt(2025, 6, 9)
            .unwrap()
            .and_hms_opt(7, 5, 0)
            .unwrap();
        let mut ledger = Ledger::new();
        ledger
            .add(NewTransaction::expense(
                "Groceries, weekly",
                "42.10",
                Category::Shopping,
                Currency::Eur,
                ts,
            ))
            .unwrap();
        ledger
            .add(NewTransaction::income("Consulting", "300", Category::Service, Currency::Usd, ts))
            .unwrap();

        let mut out = Vec::new();
        export_transactions_csv(ledger.list(), &Registry::builtin(), Language::En, &mut out)
            .unwrap();
        let csv = String::from_utf8(out).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines[0], "ID,Type,Name,Category,Category Label,Amount,Currency,Timestamp");
        assert_eq!(
            lines[1],
            "txn-1,expense,\"Groceries, weekly\",shopping,Shopping,42.1,EUR,2025-06-09 07:05:00"
        );
        assert_eq!(
            lines[2],
            "txn-2,income,Consulting,service,Service,300,USD,2025-06-09 07:05:00"
        );
    }

    #[test]
    fn test_empty_export_has_header_only() {
        let mut out = Vec::new();
        export_transactions_csv(&[], &Registry::builtin(), Language::Ru, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }
}
