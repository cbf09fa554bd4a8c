//! Amount pattern tables.
//!
//! Each table is ordered most specific first. The CSV tables are the narrower
//! phrasing found in exported statements.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Captures;
use rust_decimal::Decimal;

use super::rules::{Rule, trimmed_group};

/// Thousands-separated numeral: `1,000.00`, `250`, `12,345.67`.
pub(crate) const NUMERAL: &str = r"(\d[\d,]*(?:\.\d+)?)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountMatch {
    pub amount: Decimal,
    /// Some phrasings name the counterparty in the same clause as the amount.
    pub counterparty: Option<String>,
}

/// Parses a numeral after stripping thousands separators.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(&raw.trim().replace(',', "")).ok()
}

/// Like [`parse_decimal`], but only strictly positive values count as an amount.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    parse_decimal(raw).filter(|amount| *amount > Decimal::ZERO)
}

fn amount_only(caps: &Captures<'_>) -> Option<AmountMatch> {
    Some(AmountMatch {
        amount: parse_amount(caps.get(1)?.as_str())?,
        counterparty: None,
    })
}

fn named_amount(caps: &Captures<'_>) -> Option<AmountMatch> {
    Some(AmountMatch {
        amount: parse_amount(caps.get(2)?.as_str())?,
        counterparty: trimmed_group(caps, 1),
    })
}

fn rule(name: &'static str, template: &str) -> Rule<AmountMatch> {
    Rule::new(name, &template.replace("{amount}", NUMERAL), amount_only)
}

pub fn income_rules() -> &'static [Rule<AmountMatch>] {
    static RULES: OnceLock<Vec<Rule<AmountMatch>>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            rule("credited_with", r"credited\s+with\s+ETB\s*{amount}"),
            Rule::new(
                "credited_by",
                &r"credited\s+by\s+(.+?)\s+with\s+ETB\s*{amount}".replace("{amount}", NUMERAL),
                named_amount,
            ),
            rule("received", r"received\s+ETB\s*{amount}"),
            rule("deposit_of", r"deposit\s+of\s+ETB\s*{amount}"),
        ]
    })
}

pub fn expense_rules() -> &'static [Rule<AmountMatch>] {
    static RULES: OnceLock<Vec<Rule<AmountMatch>>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            rule("debited_including", r"debited\s+with\s+ETB\s*{amount}\s+including"),
            rule("debited_with", r"debited\s+with\s+ETB\s*{amount}"),
            rule("transferred_to", r"transferr?ed\s+ETB\s*{amount}\s+to\b"),
            rule("paid", r"paid\s+ETB\s*{amount}"),
        ]
    })
}

pub fn csv_income_rules() -> &'static [Rule<AmountMatch>] {
    static RULES: OnceLock<Vec<Rule<AmountMatch>>> = OnceLock::new();
    RULES.get_or_init(|| vec![rule("credited_with", r"credited\s+with\s+ETB\s*{amount}")])
}

pub fn csv_expense_rules() -> &'static [Rule<AmountMatch>] {
    static RULES: OnceLock<Vec<Rule<AmountMatch>>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            rule("debited_with", r"debited\s+with\s+ETB\s*{amount}"),
            rule("have_transferred", r"have\s+transferr?ed\s+ETB\s*{amount}"),
        ]
    })
}
