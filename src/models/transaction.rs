//! Transaction model
//!
//! A `Transaction` is immutable once created and can only be produced by the
//! validator, so every instance in circulation satisfies the ledger
//! invariants. `NewTransaction` is the unchecked candidate a form builds.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

use super::category::{Category, TransactionKind};
use super::currency::Currency;
use super::ids::TransactionId;
use super::money::Money;

/// A recorded expense or income
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    id: TransactionId,
    kind: TransactionKind,
    name: String,
    amount: Money,
    category: Category,
    currency: Currency,
    timestamp: NaiveDateTime,
}

impl Transaction {
    /// Assemble a transaction from already-validated parts
    pub(crate) fn from_validated(
        id: TransactionId,
        kind: TransactionKind,
        name: String,
        amount: Money,
        category: Category,
        currency: Currency,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            kind,
            name,
            amount,
            category,
            currency,
            timestamp,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Trimmed, non-empty display label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Always strictly positive
    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M"),
            self.name,
            self.amount,
            self.currency
        )
    }
}

/// Amount as entered: raw form text or an already numeric value
#[derive(Debug, Clone, PartialEq)]
pub enum AmountInput {
    Raw(String),
    Number(f64),
}

impl From<&str> for AmountInput {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

impl From<f64> for AmountInput {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<Money> for AmountInput {
    fn from(m: Money) -> Self {
        Self::Raw(m.to_string())
    }
}

/// Creation request for a transaction, not yet validated
///
/// Category and currency are carried as codes so that whatever a form
/// submits can be checked and rejected with a precise reason.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub name: String,
    pub amount: AmountInput,
    pub category: String,
    pub currency: String,
    pub timestamp: NaiveDateTime,
}

impl NewTransaction {
    /// Create a candidate with the kind's default category and the given currency
    pub fn new(
        kind: TransactionKind,
        name: impl Into<String>,
        amount: impl Into<AmountInput>,
        currency: Currency,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            amount: amount.into(),
            category: Category::default_for(kind).code().to_string(),
            currency: currency.code().to_string(),
            timestamp,
        }
    }

    /// Create an expense candidate
    pub fn expense(
        name: impl Into<String>,
        amount: impl Into<AmountInput>,
        category: Category,
        currency: Currency,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self::new(TransactionKind::Expense, name, amount, currency, timestamp)
            .with_category(category.code())
    }

    /// Create an income candidate
    pub fn income(
        name: impl Into<String>,
        amount: impl Into<AmountInput>,
        category: Category,
        currency: Currency,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self::new(TransactionKind::Income, name, amount, currency, timestamp)
            .with_category(category.code())
    }

    /// Replace the category code
    pub fn with_category(mut self, code: impl Into<String>) -> Self {
        self.category = code.into();
        self
    }

    /// Replace the currency code
    pub fn with_currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into();
        self
    }
}
