//! Extract transactions from bank SMS notifications and CSV exports of them.
//!
//! ```rust,ignore
//! use bank_sms_rs::ParserBuilder;
//!
//! let transactions = ParserBuilder::new()
//!     .content(&pasted_messages)
//!     .parse()?;
//! ```
//!
//! Parsing is best-effort: text that does not look like a transaction is
//! skipped, never reported as an error.

mod builder;
mod types;

pub mod classify;
pub mod errors;
pub mod extract;
pub mod parsers;

pub use builder::{FileFormat, ParserBuilder};
pub use parsers::prelude::*;
pub use types::{Transaction, TransactionDate, TransactionType};
