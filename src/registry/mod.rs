//! Category/Currency Registry
//!
//! Read-only configuration: which categories are valid per transaction kind,
//! which currencies are supported, and the per-language labels of every
//! registered code. Lookups are pure and fail loudly on unregistered codes.

pub mod labels;

use std::fmt;

use crate::error::{MoneyReportError, MoneyResult};
use crate::models::{Category, Currency, Language, TransactionKind};

use labels::{LabelRow, CATEGORY_LABELS, CURRENCY_LABELS, MESSAGE_LABELS};

/// The namespace a code is looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelDomain {
    Category,
    Currency,
    Message,
}

impl LabelDomain {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Currency => "currency",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for LabelDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// User-facing messages with translated text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    Expenses,
    Income,
    HistoryTitle,
    NoTransactions,
    ExpenseAdded,
    IncomeAdded,
    TransactionDeleted,
    ReportGenerated,
    ReportFailed,
    EnterNameAndAmount,
    Error,
}

impl Message {
    /// Key into the message table
    pub fn code(&self) -> &'static str {
        match self {
            Self::Expenses => "expenses",
            Self::Income => "income",
            Self::HistoryTitle => "history",
            Self::NoTransactions => "noTransactions",
            Self::ExpenseAdded => "expenseAdded",
            Self::IncomeAdded => "incomeAdded",
            Self::TransactionDeleted => "transactionDeleted",
            Self::ReportGenerated => "reportGenerated",
            Self::ReportFailed => "reportFailed",
            Self::EnterNameAndAmount => "pleaseEnterNameAndAmount",
            Self::Error => "error",
        }
    }

    /// Confirmation shown after a transaction of this kind was recorded
    pub fn added(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Expense => Self::ExpenseAdded,
            TransactionKind::Income => Self::IncomeAdded,
        }
    }
}

/// Category/currency sets and their label tables
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    categories: &'static [LabelRow],
    currencies: &'static [LabelRow],
    messages: &'static [LabelRow],
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Registry {
    /// The registry with the built-in tables
    pub const fn builtin() -> Self {
        Self {
            categories: CATEGORY_LABELS,
            currencies: CURRENCY_LABELS,
            messages: MESSAGE_LABELS,
        }
    }

    /// A registry over custom label tables
    pub const fn with_tables(
        categories: &'static [LabelRow],
        currencies: &'static [LabelRow],
        messages: &'static [LabelRow],
    ) -> Self {
        Self {
            categories,
            currencies,
            messages,
        }
    }

    /// Categories valid for a transaction kind
    pub fn valid_categories(&self, kind: TransactionKind) -> &'static [Category] {
        Category::valid_for(kind)
    }

    /// The closed set of supported currencies
    pub fn supported_currencies(&self) -> &'static [Currency] {
        &Currency::ALL
    }

    /// Check whether a category code is valid for a kind
    pub fn is_valid_category(&self, kind: TransactionKind, category: Category) -> bool {
        self.valid_categories(kind).contains(&category)
    }

    /// Look up the label of `code` within `domain` in `language`
    ///
    /// # Errors
    ///
    /// Returns `UnknownCode` if the code has no row in the domain's table, or
    /// the row has no label for the language.
    pub fn label_of(
        &self,
        domain: LabelDomain,
        code: &str,
        language: Language,
    ) -> MoneyResult<&'static str> {
        let table = match domain {
            LabelDomain::Category => self.categories,
            LabelDomain::Currency => self.currencies,
            LabelDomain::Message => self.messages,
        };

        table
            .iter()
            .find(|(row_code, _)| *row_code == code)
            .and_then(|(_, labels)| {
                labels
                    .iter()
                    .find(|(lang, _)| *lang == language)
                    .map(|(_, label)| *label)
            })
            .ok_or_else(|| MoneyReportError::unknown_code(domain.name(), code))
    }

    /// Label of a category
    pub fn category_label(
        &self,
        category: Category,
        language: Language,
    ) -> MoneyResult<&'static str> {
        self.label_of(LabelDomain::Category, category.code(), language)
    }

    /// Display label of a currency
    pub fn currency_label(
        &self,
        currency: Currency,
        language: Language,
    ) -> MoneyResult<&'static str> {
        self.label_of(LabelDomain::Currency, currency.code(), language)
    }

    /// Translated text of a message
    pub fn message(&self, message: Message, language: Language) -> MoneyResult<&'static str> {
        self.label_of(LabelDomain::Message, message.code(), language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_every_language() {
        let registry = Registry::builtin();
        for category in Category::ALL {
            for language in Language::ALL {
                assert!(registry.category_label(category, language).is_ok());
            }
        }
    }

    #[test]
    fn test_every_currency_has_every_language() {
        let registry = Registry::builtin();
        for currency in registry.supported_currencies() {
            for language in Language::ALL {
                assert!(registry.currency_label(*currency, language).is_ok());
            }
        }
    }

    #[test]
    fn test_category_labels() {
        let registry = Registry::builtin();
        assert_eq!(registry.category_label(Category::Food, Language::En).unwrap(), "Food");
        assert_eq!(registry.category_label(Category::Food, Language::Ru).unwrap(), "Еда");
        assert_eq!(
            registry.category_label(Category::Service, Language::En).unwrap(),
            "Service"
        );
    }

    #[test]
    fn test_currency_label_differs_from_code() {
        let registry = Registry::builtin();
        assert_eq!(registry.currency_label(Currency::Ils, Language::En).unwrap(), "NIS");
    }

    #[test]
    fn test_messages() {
        let registry = Registry::builtin();
        assert_eq!(
            registry.message(Message::HistoryTitle, Language::En).unwrap(),
            "History"
        );
        assert_eq!(
            registry.message(Message::added(TransactionKind::Income), Language::Ru).unwrap(),
            "Доход добавлен!"
        );
    }

    #[test]
    fn test_unknown_code_fails_loudly() {
        let registry = Registry::builtin();
        let err = registry
            .label_of(LabelDomain::Category, "rent", Language::En)
            .unwrap_err();
        assert!(matches!(err, MoneyReportError::UnknownCode { domain: "category", .. }));

        // A currency code is not a category code
        assert!(registry
            .label_of(LabelDomain::Category, "AZN", Language::En)
            .is_err());
    }

    #[test]
    fn test_missing_language_is_unknown() {
        const PARTIAL: &[LabelRow] = &[("food", &[(Language::En, "Food")])];
        let registry = Registry::with_tables(PARTIAL, CURRENCY_LABELS, MESSAGE_LABELS);
        assert!(registry.category_label(Category::Food, Language::En).is_ok());
        assert!(registry.category_label(Category::Food, Language::Ru).is_err());
    }

    #[test]
    fn test_valid_categories() {
        let registry = Registry::builtin();
        assert!(registry.is_valid_category(TransactionKind::Expense, Category::Food));
        assert!(!registry.is_valid_category(TransactionKind::Income, Category::Food));
        assert_eq!(registry.supported_currencies().len(), 5);
    }
}
