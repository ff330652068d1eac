//! Core data models for MoneyReport
//!
//! This module contains the data structures of the ledger domain:
//! transactions, their kinds and categories, currencies and languages.

pub mod category;
pub mod currency;
pub mod ids;
pub mod language;
pub mod money;
pub mod transaction;

pub use category::{Category, TransactionKind};
pub use currency::Currency;
pub use ids::{TransactionId, TransactionIdGenerator};
pub use language::Language;
pub use money::{Money, MoneyParseError};
pub use transaction::{AmountInput, NewTransaction, Transaction};
