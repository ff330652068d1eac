//! Custom error types for MoneyReport
//!
//! `ValidationError` says why a candidate transaction was refused;
//! `MoneyReportError` wraps it together with lookup, export and I/O failures.

use thiserror::Error;

/// Reasons a candidate transaction is rejected before it enters the ledger
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is empty or whitespace only
    #[error("transaction name must not be empty")]
    EmptyName,

    /// Amount text is not a number
    #[error("amount is not a number: '{0}'")]
    UnparseableAmount(String),

    /// Amount is zero or negative
    #[error("amount must be greater than zero")]
    NonPositiveAmount,

    /// Category code does not belong to the transaction kind
    #[error("category '{category}' is not valid for {kind} transactions")]
    InvalidCategoryForType { category: String, kind: String },

    /// Currency code is not in the supported set
    #[error("unsupported currency: '{0}'")]
    UnsupportedCurrency(String),
}

/// The main error type for MoneyReport operations
#[derive(Error, Debug)]
pub enum MoneyReportError {
    /// Candidate transaction rejected
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Registry lookup for a code that is not registered
    #[error("Unknown {domain} code: '{code}'")]
    UnknownCode { domain: &'static str, code: String },

    /// Export collaborator failed
    #[error("Export error: {0}")]
    Export(String),

    /// A report export is already in flight
    #[error("Busy: {0}")]
    Busy(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl MoneyReportError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create an "unknown code" error for a registry domain
    pub fn unknown_code(domain: &'static str, code: impl Into<String>) -> Self {
        Self::UnknownCode {
            domain,
            code: code.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The validation reason, if this is a validation error
    pub fn validation_reason(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MoneyReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MoneyReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for MoneyReport operations
pub type MoneyResult<T> = Result<T, MoneyReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MoneyReportError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = MoneyReportError::transaction_not_found("txn-7");
        assert_eq!(err.to_string(), "Transaction not found: txn-7");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_from() {
        let err: MoneyReportError = ValidationError::EmptyName.into();
        assert!(err.is_validation());
        assert_eq!(err.validation_reason(), Some(&ValidationError::EmptyName));
        assert_eq!(
            err.to_string(),
            "Validation error: transaction name must not be empty"
        );
    }

    #[test]
    fn test_unknown_code_error() {
        let err = MoneyReportError::unknown_code("category", "rent");
        assert_eq!(err.to_string(), "Unknown category code: 'rent'");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MoneyReportError = io_err.into();
        assert!(matches!(err, MoneyReportError::Io(_)));
    }
}
