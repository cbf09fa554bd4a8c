//! Income/expense classification.
//!
//! A message is matched against an ordered list of [`Flow`]s. A flow applies when
//! the message contains one of its keywords, and succeeds when one of its amount
//! rules resolves a positive amount. The first successful flow decides the type,
//! so income wording wins over debit wording that appears in the same message.

use chrono::NaiveTime;
use tracing::debug;

use crate::extract::amount::{csv_expense_rules, csv_income_rules, expense_rules, income_rules};
use crate::extract::prelude::*;
use crate::types::{Transaction, TransactionDate, TransactionType};

pub const INCOME_KEYWORDS: &[&str] = &["credited", "received", "deposit"];

pub const EXPENSE_KEYWORDS: &[&str] = &[
    "debited",
    "transfered",
    "transferred",
    "withdrawn",
    "paid",
    "payment",
];

pub struct Flow {
    pub kind: TransactionType,
    pub keywords: &'static [&'static str],
    pub rules: fn() -> &'static [Rule<AmountMatch>],
}

impl Flow {
    fn applies_to(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Flows for free-text SMS messages.
pub const SMS_FLOWS: &[Flow] = &[
    Flow {
        kind: TransactionType::Income,
        keywords: INCOME_KEYWORDS,
        rules: income_rules,
    },
    Flow {
        kind: TransactionType::Expense,
        keywords: EXPENSE_KEYWORDS,
        rules: expense_rules,
    },
];

/// Flows for the Content column of CSV exports, which only use the narrower phrasing.
pub const CSV_FLOWS: &[Flow] = &[
    Flow {
        kind: TransactionType::Income,
        keywords: INCOME_KEYWORDS,
        rules: csv_income_rules,
    },
    Flow {
        kind: TransactionType::Expense,
        keywords: EXPENSE_KEYWORDS,
        rules: csv_expense_rules,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub kind: TransactionType,
    pub matched: AmountMatch,
}

/// Classifies `message`, or returns `None` when it is not a transaction.
pub fn classify(message: &str, flows: &[Flow]) -> Option<Classified> {
    let lowered = message.to_lowercase();

    flows
        .iter()
        .filter(|flow| flow.applies_to(&lowered))
        .find_map(|flow| {
            let (rule, matched) = first_match((flow.rules)(), message)?;
            debug!(kind = %flow.kind, rule = rule.name(), "Matched amount pattern");
            Some(Classified {
                kind: flow.kind,
                matched,
            })
        })
}

impl Classified {
    /// Builds the record once date and time have been resolved by the caller.
    pub fn into_transaction(
        self,
        message: &str,
        date: TransactionDate,
        time: NaiveTime,
    ) -> Transaction {
        let from_person = self
            .matched
            .counterparty
            .or_else(|| extract_counterparty(message, self.kind));

        Transaction {
            transaction_type: self.kind,
            amount: self.matched.amount,
            balance: extract_balance(message),
            description: self.kind.describe(from_person.as_deref()),
            from_person,
            transaction_date: date,
            transaction_time: time,
            ref_no: extract_reference(message),
            sms_content: message.to_string(),
        }
    }
}
