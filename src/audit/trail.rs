//! In-memory audit trail
//!
//! Lives exactly as long as the session ledger it observes.

use crate::models::Transaction;
use crate::services::{LedgerEvent, LedgerObserver};

use super::entry::AuditEntry;

/// Append-only list of audit entries
#[derive(Debug, Default)]
pub struct AuditTrail {
    entries: Vec<AuditEntry>,
}

impl AuditTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in the order they were recorded
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// The most recent `count` entries, oldest first
    pub fn recent(&self, count: usize) -> &[AuditEntry] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LedgerObserver for AuditTrail {
    fn on_change(&mut self, event: &LedgerEvent, snapshot: &[Transaction]) {
        let entry = match event {
            LedgerEvent::Added(txn) => AuditEntry::create(txn, snapshot.len()),
            LedgerEvent::Removed(txn) => AuditEntry::delete(txn, snapshot.len()),
        };
        self.entries.push(entry);
    }
}
