use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveTime, Timelike};
use regex::Captures;
use rust_decimal::Decimal;

use super::amount::{NUMERAL, parse_decimal};
use super::rules::{Rule, first_match, trimmed_group};
use crate::types::TransactionType;

// Letters plus the punctuation that shows up in personal and merchant names.
// Digits are excluded so a name never swallows a trailing date.
const NAME: &str = r"([A-Za-z][A-Za-z '&-]*?)";

fn balance(caps: &Captures<'_>) -> Option<Decimal> {
    parse_decimal(&caps[1])
}

fn balance_rules() -> &'static [Rule<Decimal>] {
    static RULES: OnceLock<Vec<Rule<Decimal>>> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            ("current_balance_is", r"Current\s+Balance\s+is\s+ETB\s*{amount}"),
            ("balance_is", r"Balance\s+is\s+ETB\s*{amount}"),
            ("balance_colon", r"Balance:\s*ETB\s*{amount}"),
        ]
        .into_iter()
        .map(|(name, template)| Rule::new(name, &template.replace("{amount}", NUMERAL), balance))
        .collect()
    })
}

/// Running balance reported by the bank, if the message states one.
pub fn extract_balance(text: &str) -> Option<Decimal> {
    first_match(balance_rules(), text).map(|(_, balance)| balance)
}

fn first_group(caps: &Captures<'_>) -> Option<String> {
    trimmed_group(caps, 1)
}

fn name_rules(templates: &[(&'static str, &str)]) -> Vec<Rule<String>> {
    templates
        .iter()
        .map(|&(name, template)| Rule::new(name, &template.replace("{name}", NAME), first_group))
        .collect()
}

fn sender_rules() -> &'static [Rule<String>] {
    static RULES: OnceLock<Vec<Rule<String>>> = OnceLock::new();
    RULES.get_or_init(|| {
        name_rules(&[
            ("from_comma", r"\bfrom\s+{name}\s*,"),
            ("from_on", r"\bfrom\s+{name}\s+on\b"),
            ("from_at", r"\bfrom\s+{name}\s+at\b"),
            ("from_period", r"\bfrom\s+{name}\s*\."),
        ])
    })
}

fn recipient_rules() -> &'static [Rule<String>] {
    static RULES: OnceLock<Vec<Rule<String>>> = OnceLock::new();
    RULES.get_or_init(|| {
        name_rules(&[
            ("to_on", r"\bto\s+{name}\s+on\b"),
            ("to_comma", r"\bto\s+{name}\s*,"),
            ("to_period", r"\bto\s+{name}\s*\."),
        ])
    })
}

/// Sender of an income, recipient of an expense.
pub fn extract_counterparty(text: &str, kind: TransactionType) -> Option<String> {
    let rules = match kind {
        TransactionType::Income => sender_rules(),
        TransactionType::Expense => recipient_rules(),
    };
    first_match(rules, text).map(|(_, name)| name)
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn date_rules() -> &'static [Rule<NaiveDate>] {
    static RULES: OnceLock<Vec<Rule<NaiveDate>>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            Rule::new("on_day_month_year", r"\bon\s+(\d{2})/(\d{2})/(\d{4})\b", |caps| {
                ymd(&caps[3], &caps[2], &caps[1])
            }),
            Rule::new("day_month_year", r"\b(\d{2})/(\d{2})/(\d{4})\b", |caps| {
                ymd(&caps[3], &caps[2], &caps[1])
            }),
            Rule::new("month_day_year", r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b", |caps| {
                ymd(&caps[3], &caps[1], &caps[2])
            }),
        ]
    })
}

/// Date stated in the message. Two-digit `DD/MM/YYYY` is read day-first; the
/// single-digit `M/D/YYYY` form, or a day-first reading that is not a real
/// calendar date, is read month-first.
pub fn find_date(text: &str) -> Option<NaiveDate> {
    first_match(date_rules(), text).map(|(_, date)| date)
}

pub fn extract_date(text: &str, today: NaiveDate) -> NaiveDate {
    find_date(text).unwrap_or(today)
}

fn time(caps: &Captures<'_>) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(&caps[1], "%H:%M:%S").ok()
}

fn time_rules() -> &'static [Rule<NaiveTime>] {
    static RULES: OnceLock<Vec<Rule<NaiveTime>>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            Rule::new("at_time", r"\bat\s+(\d{1,2}:\d{2}:\d{2})\b", time),
            Rule::new("bare_time", r"\b(\d{1,2}:\d{2}:\d{2})\b", time),
        ]
    })
}

pub fn find_time(text: &str) -> Option<NaiveTime> {
    first_match(time_rules(), text).map(|(_, time)| time)
}

pub fn extract_time(text: &str, now: NaiveTime) -> NaiveTime {
    find_time(text).unwrap_or_else(|| whole_seconds(now))
}

/// Drops sub-second precision so fallback times format as `HH:MM:SS`.
pub(crate) fn whole_seconds(time: NaiveTime) -> NaiveTime {
    time.with_nanosecond(0).unwrap_or(time)
}

fn reference_rules() -> &'static [Rule<String>] {
    static RULES: OnceLock<Vec<Rule<String>>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            Rule::new("ref_no", r"\bRef\s+No\.?\s*:?\s*([A-Za-z0-9]+)", first_group),
            Rule::new("reference_no", r"\bReference\s+No\.?\s*:\s*([A-Za-z0-9]+)", first_group),
            Rule::new("ref_colon", r"\bRef:\s*([A-Za-z0-9]+)", first_group),
            Rule::new("id_equals", r"\bid=([A-Za-z0-9]+)", first_group),
            Rule::new("id_colon", r"\bID:\s*([A-Za-z0-9]+)", first_group),
        ]
    })
}

/// Bank-issued transaction identifier.
pub fn extract_reference(text: &str) -> Option<String> {
    first_match(reference_rules(), text).map(|(_, reference)| reference)
}
