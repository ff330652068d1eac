//! Display formatting for terminal output
//!
//! Renders ledger snapshots and registry contents as terminal tables.

pub mod transaction;

pub use transaction::{format_category_list, format_transaction_table};
