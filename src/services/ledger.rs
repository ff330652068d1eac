//! Transaction ledger
//!
//! An insertion-ordered, session-scoped collection of validated transactions.
//! The only mutations are append-one (`add`) and remove-by-id (`remove`);
//! both are all-or-nothing and notify subscribed observers with the new
//! snapshot once they have been applied.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};

use crate::error::{MoneyReportError, MoneyResult};
use crate::models::{NewTransaction, Transaction, TransactionId, TransactionIdGenerator};
use crate::registry::Registry;

use super::validator::TransactionValidator;

/// A change that was applied to the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEvent {
    Added(Transaction),
    Removed(Transaction),
}

impl LedgerEvent {
    /// The transaction the event is about
    pub fn transaction(&self) -> &Transaction {
        match self {
            Self::Added(txn) | Self::Removed(txn) => txn,
        }
    }
}

/// Receives every ledger change together with the resulting snapshot
pub trait LedgerObserver {
    fn on_change(&mut self, event: &LedgerEvent, snapshot: &[Transaction]);
}

impl<O: LedgerObserver> LedgerObserver for Rc<RefCell<O>> {
    fn on_change(&mut self, event: &LedgerEvent, snapshot: &[Transaction]) {
        self.borrow_mut().on_change(event, snapshot);
    }
}

/// The ordered collection of all transactions of a session
#[derive(Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    ids: TransactionIdGenerator,
    validator: TransactionValidator,
    observers: Vec<Box<dyn LedgerObserver>>,
}

impl Ledger {
    /// Create an empty ledger using the built-in registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty ledger validating against a specific registry
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            validator: TransactionValidator::new(registry),
            ..Self::default()
        }
    }

    /// Register an observer for future changes
    pub fn subscribe(&mut self, observer: impl LedgerObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Validate a candidate and append it
    ///
    /// On a validation failure the ledger is left untouched.
    pub fn add(&mut self, input: NewTransaction) -> MoneyResult<Transaction> {
        let txn = self
            .validator
            .validate(input, &mut self.ids)
            .map_err(|reason| {
                debug!(%reason, "rejected transaction candidate");
                MoneyReportError::Validation(reason)
            })?;

        assert!(
            !self.contains(txn.id()),
            "transaction id {} issued twice",
            txn.id()
        );

        self.transactions.push(txn.clone());
        info!(id = %txn.id(), kind = %txn.kind(), "transaction added");
        self.notify(LedgerEvent::Added(txn.clone()));

        Ok(txn)
    }

    /// Remove the transaction with the given id, returning it
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no transaction has that id; the ledger is unchanged.
    pub fn remove(&mut self, id: TransactionId) -> MoneyResult<Transaction> {
        let position = self
            .position(id)
            .ok_or_else(|| MoneyReportError::transaction_not_found(id.to_string()))?;

        // Vec::remove shifts the tail, keeping relative order
        let txn = self.transactions.remove(position);
        info!(id = %id, "transaction removed");
        self.notify(LedgerEvent::Removed(txn.clone()));

        Ok(txn)
    }

    /// Read-only view of the transactions in insertion order
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Owned copy of the current transactions
    pub fn snapshot(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    /// Get a transaction by id
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id() == id)
    }

    pub fn contains(&self, id: TransactionId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|t| t.id() == id)
    }

    fn notify(&mut self, event: LedgerEvent) {
        for observer in &mut self.observers {
            observer.on_change(&event, &self.transactions);
        }
    }
}
