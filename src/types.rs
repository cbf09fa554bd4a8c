use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Description used when the message names no counterparty.
    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }

    pub(crate) fn describe(self, counterparty: Option<&str>) -> String {
        match (self, counterparty) {
            (TransactionType::Income, Some(name)) => format!("Income from {}", name),
            (TransactionType::Expense, Some(name)) => format!("Transfer to {}", name),
            (kind, None) => kind.label().to_string(),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => f.write_str("income"),
            TransactionType::Expense => f.write_str("expense"),
        }
    }
}

/// Calendar date of a transaction.
///
/// SMS messages always resolve to an ISO date. CSV exports may carry date cells
/// that no known format accepts; those are kept verbatim instead of dropping the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionDate {
    Iso(NaiveDate),
    Raw(String),
}

impl TransactionDate {
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            TransactionDate::Iso(date) => Some(*date),
            TransactionDate::Raw(_) => None,
        }
    }
}

impl From<NaiveDate> for TransactionDate {
    fn from(date: NaiveDate) -> Self {
        TransactionDate::Iso(date)
    }
}

impl fmt::Display for TransactionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionDate::Iso(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            TransactionDate::Raw(raw) => f.write_str(raw),
        }
    }
}

/// A transaction extracted from one bank notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Always strictly positive.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub balance: Option<Decimal>,
    pub from_person: Option<String>,
    pub description: String,
    pub transaction_date: TransactionDate,
    pub transaction_time: NaiveTime,
    pub ref_no: Option<String>,
    pub sms_content: String,
}
