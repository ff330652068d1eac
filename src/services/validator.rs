//! Transaction validation
//!
//! Turns a `NewTransaction` candidate into an immutable `Transaction`, or
//! reports the first rule it breaks. Checks run in a fixed order: name,
//! amount, category, currency.

use crate::error::ValidationError;
use crate::models::{
    AmountInput, Category, Currency, Money, NewTransaction, Transaction, TransactionIdGenerator,
};
use crate::registry::Registry;

/// Validator for transaction candidates
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionValidator {
    registry: Registry,
}

impl TransactionValidator {
    /// Create a validator backed by a registry
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Validate a candidate and, on success, assign it a fresh id
    ///
    /// The id generator is only advanced when every check passes.
    pub fn validate(
        &self,
        input: NewTransaction,
        ids: &mut TransactionIdGenerator,
    ) -> Result<Transaction, ValidationError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let amount = parse_amount(&input.amount)?;
        if !amount.is_positive() {
            return Err(ValidationError::NonPositiveAmount);
        }

        let category = Category::parse(&input.category)
            .filter(|c| self.registry.is_valid_category(input.kind, *c))
            .ok_or_else(|| ValidationError::InvalidCategoryForType {
                category: input.category.clone(),
                kind: input.kind.to_string(),
            })?;

        let currency = Currency::parse(&input.currency)
            .filter(|c| self.registry.supported_currencies().contains(c))
            .ok_or_else(|| ValidationError::UnsupportedCurrency(input.currency.clone()))?;

        Ok(Transaction::from_validated(
            ids.next_id(),
            input.kind,
            name.to_string(),
            amount,
            category,
            currency,
            input.timestamp,
        ))
    }
}

fn parse_amount(input: &AmountInput) -> Result<Money, ValidationError> {
    match input {
        AmountInput::Raw(raw) => {
            Money::parse(raw).map_err(|_| ValidationError::UnparseableAmount(raw.clone()))
        }
        AmountInput::Number(value) => Money::from_f64(*value)
            .map_err(|_| ValidationError::UnparseableAmount(value.to_string())),
    }
}
