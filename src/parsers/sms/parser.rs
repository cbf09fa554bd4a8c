use chrono::{Local, NaiveDateTime};
use tracing::debug;

use super::segment::segment;
use crate::classify::{EXPENSE_KEYWORDS, INCOME_KEYWORDS, SMS_FLOWS, classify};
use crate::extract::prelude::*;
use crate::parsers::traits::Parser;
use crate::types::Transaction;

pub struct SmsParser;

impl SmsParser {
    /// Parses one message that is already known to be a single notification.
    pub fn parse_message(message: &str) -> Option<Transaction> {
        Self::parse_message_at(message, Local::now().naive_local())
    }

    pub fn parse_message_at(message: &str, now: NaiveDateTime) -> Option<Transaction> {
        let classified = classify(message, SMS_FLOWS)?;
        let date = extract_date(message, now.date());
        let time = extract_time(message, now.time());

        Some(classified.into_transaction(message, date.into(), time))
    }
}

impl Parser for SmsParser {
    type Output = Transaction;

    fn is_supported(filename: Option<&str>, content: &str) -> bool {
        let is_csv = filename
            .map(|name| name.to_lowercase().ends_with(".csv"))
            .unwrap_or(false);
        if is_csv {
            return false;
        }

        let lowered = content.to_lowercase();
        lowered.contains("etb")
            || INCOME_KEYWORDS
                .iter()
                .chain(EXPENSE_KEYWORDS)
                .any(|keyword| lowered.contains(keyword))
    }

    fn parse_at(content: &str, now: NaiveDateTime) -> Vec<Self::Output> {
        let messages = segment(content);
        let transactions: Vec<Transaction> = messages
            .iter()
            .filter_map(|message| {
                let parsed = Self::parse_message_at(message, now);
                if parsed.is_none() {
                    debug!(chars = message.chars().count(), "Skipping unrecognised message");
                }
                parsed
            })
            .collect();

        debug!(
            candidates = messages.len(),
            transactions = transactions.len(),
            "Parsed SMS text"
        );
        transactions
    }
}
