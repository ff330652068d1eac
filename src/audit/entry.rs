//! Audit entry data structures
//!
//! Defines the operation types and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Transaction;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Transaction was added
    Create,
    /// Transaction was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation was recorded (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Display form of the transaction id
    pub transaction_id: String,

    /// Transaction name at the time of the operation
    pub transaction_name: String,

    /// Ledger size after the operation
    pub ledger_len: usize,

    /// JSON representation of the transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl AuditEntry {
    fn new(operation: Operation, txn: &Transaction, ledger_len: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            transaction_id: txn.id().to_string(),
            transaction_name: txn.name().to_string(),
            ledger_len,
            data: serde_json::to_value(txn).ok(),
        }
    }

    /// Entry for an added transaction
    pub fn create(txn: &Transaction, ledger_len: usize) -> Self {
        Self::new(Operation::Create, txn, ledger_len)
    }

    /// Entry for a deleted transaction
    pub fn delete(txn: &Transaction, ledger_len: usize) -> Self {
        Self::new(Operation::Delete, txn, ledger_len)
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {} {} ({}) -> {} in ledger",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.transaction_id,
            self.transaction_name,
            self.ledger_len
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Currency, NewTransaction};
    use crate::services::Ledger;
    use chrono::NaiveDate;

    fn sample() -> Transaction {
        let ts = NaiveDate::from_ymd_opt(2025, 4, 2)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Ledger::new()
            .add(NewTransaction::income("Paycheck", "1200", Category::Salary, Currency::Usd, ts))
            .unwrap()
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let txn = sample();
        let entry = AuditEntry::create(&txn, 1);

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.transaction_id, "txn-1");
        assert_eq!(entry.ledger_len, 1);
        let data = entry.data.unwrap();
        assert_eq!(data["name"], "Paycheck");
        assert_eq!(data["amount"], 120000);
        assert_eq!(data["category"], "salary");
        assert_eq!(data["currency"], "USD");
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::delete(&sample(), 0);
        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::Delete);
        assert_eq!(deserialized.transaction_name, "Paycheck");
    }

    #[test]
    fn test_human_readable_format() {
        let formatted = AuditEntry::create(&sample(), 1).format_human_readable();
        assert!(formatted.contains("CREATE"));
        assert!(formatted.contains("txn-1"));
        assert!(formatted.contains("Paycheck"));
    }
}
