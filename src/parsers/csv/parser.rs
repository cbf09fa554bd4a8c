use chrono::NaiveDateTime;
use tracing::{debug, warn};

use super::dto::CsvColumns;
use super::tokenizer::tokenize;
use crate::parsers::traits::Parser;
use crate::types::Transaction;

pub struct CsvParser;

impl CsvParser {
    /// Tokenizes `content` once and resolves its header row.
    ///
    /// Returns the columns together with the data rows that follow the header,
    /// or `None` when the content is empty or has no `content` column.
    pub fn read_table(content: &str) -> Option<(CsvColumns, Vec<Vec<String>>)> {
        let mut rows = tokenize(content);
        if rows.is_empty() {
            debug!("Empty CSV content");
            return None;
        }

        let header = rows.remove(0);
        let Some(columns) = CsvColumns::from_header(&header) else {
            warn!(columns = header.len(), "CSV header has no content column");
            return None;
        };
        Some((columns, rows))
    }

    /// Whether the header row names a `content` column. Lets callers tell an
    /// unusable file apart from one where no row was recognised.
    pub fn has_content_column(content: &str) -> bool {
        Self::read_table(content).is_some()
    }

    /// Parses the data rows of a table already resolved by [`CsvParser::read_table`].
    pub fn parse_table(
        columns: &CsvColumns,
        rows: Vec<Vec<String>>,
        now: NaiveDateTime,
    ) -> Vec<Transaction> {
        let mut transactions = Vec::new();
        // line numbers are 1-based and count the header
        for (index, record) in rows.into_iter().enumerate() {
            let line = index + 2;
            let Some(row) = columns.row(&record) else {
                debug!(
                    line,
                    fields = record.len(),
                    expected = columns.width,
                    "Skipping short CSV row"
                );
                continue;
            };
            match row.into_transaction(now) {
                Some(txn) => transactions.push(txn),
                None => debug!(line, "Skipping CSV row without a recognised transaction"),
            }
        }

        debug!(transactions = transactions.len(), "Parsed CSV content");
        transactions
    }
}

impl Parser for CsvParser {
    type Output = Transaction;

    fn is_supported(filename: Option<&str>, content: &str) -> bool {
        // 1. Verificar extensão (se filename fornecido)
        let has_csv_extension = filename
            .map(|name| name.to_lowercase().ends_with(".csv"))
            .unwrap_or(false);

        // 2. Verificar se a primeira linha tem a coluna Content
        let first_line = content.lines().next().unwrap_or("");
        let looks_like_csv = first_line
            .split(',')
            .any(|name| name.replace('"', "").trim().eq_ignore_ascii_case("content"));

        match filename {
            Some(_) => has_csv_extension && looks_like_csv,
            None => looks_like_csv,
        }
    }

    fn parse_at(content: &str, now: NaiveDateTime) -> Vec<Self::Output> {
        match Self::read_table(content) {
            Some((columns, rows)) => Self::parse_table(&columns, rows, now),
            None => Vec::new(),
        }
    }
}
