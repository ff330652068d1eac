//! Service layer for MoneyReport
//!
//! The service layer holds the business rules: candidate validation and the
//! session ledger built on top of it.

pub mod ledger;
pub mod validator;

pub use ledger::{Ledger, LedgerEvent, LedgerObserver};
pub use validator::TransactionValidator;
