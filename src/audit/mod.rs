//! Audit trail of ledger mutations
//!
//! Records every add and delete applied to the session ledger, with the JSON
//! form of the affected transaction.
//!
//! - `AuditEntry`: a single operation with timestamp and entity data.
//! - `AuditTrail`: an in-memory, append-only list of entries. It is a
//!   `LedgerObserver`, so subscribing it to a ledger is all the wiring needed.
//!
//! # Example
//!
//! ```rust
//! use std::{cell::RefCell, rc::Rc};
//! use money_report::audit::AuditTrail;
//! use money_report::services::Ledger;
//!
//! let trail = Rc::new(RefCell::new(AuditTrail::new()));
//! let mut ledger = Ledger::new();
//! ledger.subscribe(Rc::clone(&trail));
//! assert!(trail.borrow().is_empty());
//! ```

mod entry;
mod trail;

pub use entry::{AuditEntry, Operation};
pub use trail::AuditTrail;
