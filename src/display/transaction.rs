//! Transaction display formatting
//!
//! Table views of the ledger for the interactive shell.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::MoneyResult;
use crate::models::{Language, Transaction, TransactionKind};
use crate::registry::{Message, Registry};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Date")]
    date: String,
}

/// Format a snapshot as a table, or the empty-state message
pub fn format_transaction_table(
    transactions: &[Transaction],
    registry: &Registry,
    language: Language,
) -> MoneyResult<String> {
    if transactions.is_empty() {
        return Ok(registry.message(Message::NoTransactions, language)?.to_string());
    }

    let rows = transactions
        .iter()
        .map(|txn| {
            let kind = match txn.kind() {
                TransactionKind::Expense => Message::Expenses,
                TransactionKind::Income => Message::Income,
            };
            Ok(TransactionRow {
                id: txn.id().to_string(),
                kind: registry.message(kind, language)?.to_string(),
                name: txn.name().to_string(),
                category: registry.category_label(txn.category(), language)?.to_string(),
                amount: format!(
                    "{} {}",
                    txn.amount(),
                    registry.currency_label(txn.currency(), language)?
                ),
                date: txn.timestamp().format(language.timestamp_format()).to_string(),
            })
        })
        .collect::<MoneyResult<Vec<_>>>()?;

    Ok(Table::new(rows).with(Style::rounded()).to_string())
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Label")]
    label: String,
}

/// List every category with its label, grouped by kind
pub fn format_category_list(registry: &Registry, language: Language) -> MoneyResult<String> {
    let mut rows = Vec::new();
    for kind in TransactionKind::ALL {
        for category in registry.valid_categories(kind) {
            rows.push(CategoryRow {
                kind: kind.to_string(),
                code: category.code().to_string(),
                label: registry.category_label(*category, language)?.to_string(),
            });
        }
    }

    Ok(Table::new(rows).with(Style::rounded()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Currency, NewTransaction};
    use crate::services::Ledger;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_table() {
        let out = format_transaction_table(&[], &Registry::builtin(), Language::En).unwrap();
        assert_eq!(out, "No transactions to display.");
    }

    #[test]
    fn test_table_rows() {
        let ts = NaiveDate::from_ymd_opt(2025, 7, 4)
            .unwrap()
            .and_hms_opt(20, 15, 0)
            .unwrap();
        let mut ledger = Ledger::new();
        ledger
            .add(NewTransaction::expense(
                "Tickets",
                "30",
                Category::Entertainment,
                Currency::Usd,
                ts,
            ))
            .unwrap();

        let out =
            format_transaction_table(ledger.list(), &Registry::builtin(), Language::En).unwrap();
        assert!(out.contains("txn-1"));
        assert!(out.contains("Expenses"));
        assert!(out.contains("Tickets"));
        assert!(out.contains("Entertainment"));
        assert!(out.contains("30 USD"));
        assert!(out.contains("7/4/2025, 8:15:00 PM"));
    }

    #[test]
    fn test_table_uses_currency_label() {
        let ts = NaiveDate::from_ymd_opt(2025, 7, 4)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let mut ledger = Ledger::new();
        ledger
            .add(NewTransaction::income("Rent", "2500", Category::Service, Currency::Ils, ts))
            .unwrap();

        let out =
            format_transaction_table(ledger.list(), &Registry::builtin(), Language::Ru).unwrap();
        assert!(out.contains("2500 NIS"));
        assert!(out.contains("Доходы"));
    }

    #[test]
    fn test_category_list() {
        let out = format_category_list(&Registry::builtin(), Language::Ru).unwrap();
        assert!(out.contains("food"));
        assert!(out.contains("Еда"));
        assert!(out.contains("salary"));
        assert!(out.contains("Зарплата"));
    }
}
