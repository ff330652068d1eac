//! Transaction kinds and categories
//!
//! Categories are a fixed set of codes partitioned by transaction kind: an
//! expense category is never valid on an income and vice versa.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a transaction is money spent or money received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [Self::Expense, Self::Income];

    /// Stable lowercase code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }

    /// Parse a kind from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "expense" | "expenses" => Some(Self::Expense),
            "income" => Some(Self::Income),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A transaction category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    // Expense
    Food,
    Transport,
    Entertainment,
    Shopping,
    Services,
    // Income
    Salary,
    Service,
}

const EXPENSE_CATEGORIES: &[Category] = &[
    Category::Food,
    Category::Transport,
    Category::Entertainment,
    Category::Shopping,
    Category::Services,
];

const INCOME_CATEGORIES: &[Category] = &[Category::Salary, Category::Service];

impl Category {
    /// Every registered category, expense categories first
    pub const ALL: [Category; 7] = [
        Self::Food,
        Self::Transport,
        Self::Entertainment,
        Self::Shopping,
        Self::Services,
        Self::Salary,
        Self::Service,
    ];

    /// Stable lowercase code, also the key into the label tables
    pub fn code(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Services => "services",
            Self::Salary => "salary",
            Self::Service => "service",
        }
    }

    /// The kind this category belongs to
    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Salary | Self::Service => TransactionKind::Income,
            _ => TransactionKind::Expense,
        }
    }

    /// Categories valid for a transaction kind, in display order
    pub fn valid_for(kind: TransactionKind) -> &'static [Category] {
        match kind {
            TransactionKind::Expense => EXPENSE_CATEGORIES,
            TransactionKind::Income => INCOME_CATEGORIES,
        }
    }

    /// Preselected category of a new transaction form
    pub fn default_for(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Expense => Self::Food,
            TransactionKind::Income => Self::Salary,
        }
    }

    /// Parse a category from its code (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.code() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| s.to_string())
    }
}
