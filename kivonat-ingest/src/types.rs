use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Normalized output of statement parsing (one row in the exported CSV).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Value date; `None` when the raw date token could not be parsed.
    pub date: Option<NaiveDate>,
    /// Positive number means credit/income; negative means debit/spend.
    /// `None` when the raw amount token could not be parsed.
    pub amount: Option<f64>,
    /// Free text accumulated from the record's lines, whitespace-collapsed.
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }
}

impl TransactionRecord {
    /// Direction derived from the amount sign. Zero and missing amounts
    /// have no direction.
    pub fn kind(&self) -> Option<TransactionKind> {
        match self.amount {
            Some(a) if a > 0.0 => Some(TransactionKind::Income),
            Some(a) if a < 0.0 => Some(TransactionKind::Expense),
            _ => None,
        }
    }
}
