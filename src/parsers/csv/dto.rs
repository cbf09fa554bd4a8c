use chrono::NaiveDateTime;

use super::types::{CsvDate, parse_csv_time};
use crate::classify::{CSV_FLOWS, classify};
use crate::extract::fields::whole_seconds;
use crate::extract::prelude::*;
use crate::types::{Transaction, TransactionDate};

/// Positions of the columns the parser reads, resolved from the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvColumns {
    pub date: Option<usize>,
    pub time: Option<usize>,
    pub content: usize,
    pub width: usize,
}

impl CsvColumns {
    /// Header names are matched case-insensitively, ignoring quotes and padding.
    /// Returns `None` when there is no `content` column.
    pub fn from_header(header: &[String]) -> Option<Self> {
        let names: Vec<String> = header
            .iter()
            .map(|name| name.replace('"', "").trim().to_lowercase())
            .collect();
        let position = |wanted: &str| names.iter().position(|name| name == wanted);

        Some(CsvColumns {
            date: position("date"),
            time: position("time"),
            content: position("content")?,
            width: names.len(),
        })
    }

    /// Picks the cells of one data row, or `None` when the row is too short.
    pub fn row(&self, record: &[String]) -> Option<CsvRow> {
        if record.len() < self.width {
            return None;
        }

        Some(CsvRow {
            date: self.date.map(|i| CsvDate::from(record[i].as_str())),
            time: self.time.map(|i| record[i].clone()),
            content: record[self.content].clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct CsvRow {
    pub date: Option<CsvDate>,
    pub time: Option<String>,
    pub content: String,
}

impl CsvRow {
    /// Classifies the Content cell. Date and time come from their columns when
    /// present, then from the Content text, then from `now`.
    pub fn into_transaction(self, now: NaiveDateTime) -> Option<Transaction> {
        let classified = classify(&self.content, CSV_FLOWS)?;

        let date = match self.date.filter(|date| !date.is_blank()) {
            Some(date) => date.normalize(),
            None => TransactionDate::Iso(extract_date(&self.content, now.date())),
        };
        let time = self
            .time
            .as_deref()
            .and_then(parse_csv_time)
            .or_else(|| find_time(&self.content))
            .unwrap_or_else(|| whole_seconds(now.time()));

        Some(classified.into_transaction(&self.content, date, time))
    }
}
