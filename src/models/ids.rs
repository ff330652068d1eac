//! Transaction identifiers
//!
//! Ids are issued by a monotonic sequence owned by the ledger, so two
//! transactions created in the same instant still get distinct ids and an id
//! is never handed out twice during a session.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const DISPLAY_PREFIX: &str = "txn-";

/// Opaque unique identifier of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    /// Get the underlying sequence number
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Parse an ID from a string, with or without the `txn-` prefix
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        s.parse()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, self.0)
    }
}

impl FromStr for TransactionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

/// Monotonic id source; never yields the same id twice
#[derive(Debug, Default)]
pub struct TransactionIdGenerator {
    last: u64,
}

impl TransactionIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id
    pub fn next_id(&mut self) -> TransactionId {
        self.last += 1;
        TransactionId(self.last)
    }
}
