//! Built-in label tables
//!
//! Each row maps a code to its label in every supported language. Adding a
//! category, currency or language means adding rows here.

use crate::models::Language::{self, En, Ru};

/// A code and its per-language labels
pub type LabelRow = (&'static str, &'static [(Language, &'static str)]);

pub const CATEGORY_LABELS: &[LabelRow] = &[
    ("food", &[(En, "Food"), (Ru, "Еда")]),
    ("transport", &[(En, "Transport"), (Ru, "Транспорт")]),
    ("entertainment", &[(En, "Entertainment"), (Ru, "Развлечения")]),
    ("shopping", &[(En, "Shopping"), (Ru, "Покупки")]),
    ("services", &[(En, "Services"), (Ru, "Услуги")]),
    ("salary", &[(En, "Salary"), (Ru, "Зарплата")]),
    ("service", &[(En, "Service"), (Ru, "Услуга")]),
];

pub const CURRENCY_LABELS: &[LabelRow] = &[
    ("AZN", &[(En, "AZN"), (Ru, "AZN")]),
    ("USD", &[(En, "USD"), (Ru, "USD")]),
    ("EUR", &[(En, "EUR"), (Ru, "EUR")]),
    ("ILS", &[(En, "NIS"), (Ru, "NIS")]),
    ("RUB", &[(En, "RUB"), (Ru, "RUB")]),
];

pub const MESSAGE_LABELS: &[LabelRow] = &[
    ("expenses", &[(En, "Expenses"), (Ru, "Расходы")]),
    ("income", &[(En, "Income"), (Ru, "Доходы")]),
    ("history", &[(En, "History"), (Ru, "История")]),
    (
        "noTransactions",
        &[(En, "No transactions to display."), (Ru, "Нет транзакций для отображения.")],
    ),
    ("expenseAdded", &[(En, "Expense added!"), (Ru, "Расход добавлен!")]),
    ("incomeAdded", &[(En, "Income added!"), (Ru, "Доход добавлен!")]),
    (
        "transactionDeleted",
        &[(En, "Transaction deleted!"), (Ru, "Транзакция удалена!")],
    ),
    ("reportGenerated", &[(En, "Report generated!"), (Ru, "Отчет сформирован!")]),
    (
        "reportFailed",
        &[(En, "Failed to generate the report."), (Ru, "Не удалось сформировать отчет.")],
    ),
    (
        "pleaseEnterNameAndAmount",
        &[(En, "Please enter name and amount"), (Ru, "Пожалуйста, введите название и сумму")],
    ),
    ("error", &[(En, "Error"), (Ru, "Ошибка")]),
];
