//! Stateless field extractors shared by the SMS and CSV parsers.

pub mod amount;
pub mod fields;
pub mod rules;

pub mod prelude {
    pub use super::amount::{AmountMatch, parse_amount};
    pub use super::fields::{
        extract_balance, extract_counterparty, extract_date, extract_reference, extract_time,
        find_date, find_time,
    };
    pub use super::rules::{Rule, first_match};
}
