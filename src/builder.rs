use std::fs;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    errors::{StatementParseError, StatementResult},
    parsers::prelude::*,
    types::Transaction,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileFormat {
    /// Free text holding one or more SMS notifications.
    #[serde(rename = "sms")]
    Sms,
    /// CSV export with a `Content` column holding the notification text.
    #[serde(rename = "csv")]
    Csv,
}

impl FileFormat {
    /// A CSV header without a `content` column is an error at this layer.
    fn parse(&self, content: &str, now: NaiveDateTime) -> StatementResult<Vec<Transaction>> {
        match self {
            FileFormat::Sms => Ok(SmsParser::parse_at(content, now)),
            FileFormat::Csv => {
                let (columns, rows) = CsvParser::read_table(content)
                    .ok_or(StatementParseError::CsvMissingContentColumn)?;
                Ok(CsvParser::parse_table(&columns, rows, now))
            }
        }
    }

    fn detect(filename: Option<&str>, content: Option<&str>) -> StatementResult<Self> {
        if let Some(content) = content {
            if CsvParser::is_supported(filename, content) {
                return Ok(FileFormat::Csv);
            }
            if SmsParser::is_supported(filename, content) {
                return Ok(FileFormat::Sms);
            }
        }

        if let Some(filename) = filename {
            if let Some(ext) = filename.rsplit('.').next() {
                match ext.to_lowercase().as_str() {
                    "csv" => return Ok(FileFormat::Csv),
                    "txt" | "sms" => return Ok(FileFormat::Sms),
                    _ => {}
                }
            }
        }

        Err(StatementParseError::UnsupportedFormat)
    }
}

#[derive(Default)]
pub struct ParserBuilder {
    content: Option<Vec<u8>>,
    filepath: Option<String>,
    format: Option<FileFormat>,
    reference_time: Option<NaiveDateTime>,
}

impl ParserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.as_bytes().to_vec());
        self
    }

    /// Raw upload bytes; decoded as UTF-8 when parsing.
    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.content = Some(bytes.to_vec());
        self
    }

    pub fn filename(mut self, filename: &str) -> Self {
        self.filepath = Some(filename.to_string());
        self
    }

    pub fn format(mut self, format: FileFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Clock used when a message carries no date or time. Defaults to local now.
    pub fn reference_time(mut self, now: NaiveDateTime) -> Self {
        self.reference_time = Some(now);
        self
    }

    /// Parses the configured content (or file).
    ///
    /// An empty result is not an error. A CSV whose header has no `content`
    /// column is reported as [`StatementParseError::CsvMissingContentColumn`].
    pub fn parse(self) -> StatementResult<Vec<Transaction>> {
        let bytes = self
            .content
            .map(Ok)
            .unwrap_or_else(|| {
                self.filepath
                    .as_deref()
                    .ok_or(StatementParseError::MissingContentAndFilepath)
                    .and_then(|path| fs::read(path).map_err(Into::into))
            })?;
        let content = String::from_utf8(bytes)?;

        let format = self
            .format
            .map(Ok)
            .unwrap_or_else(|| FileFormat::detect(self.filepath.as_deref(), Some(&content)))?;

        let now = self.reference_time.unwrap_or_else(|| Local::now().naive_local());
        let transactions = format.parse(&content, now)?;
        debug!(?format, transactions = transactions.len(), "Parsed content");

        Ok(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionType;
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const SAMPLE_SMS: &str = "Dear Customer your Account has been credited with ETB 1,000.00 from Jane Doe, Ref No ABC123. Your Current Balance is ETB 5,000.00

Dear Customer your Account has been debited with ETB 40.00 on 02/02/2024.";

    const SAMPLE_CSV: &str = "Date,Time,Content
01/15/2024,14:30:00,\"Dear Customer your Account has been credited with ETB 2,500.00 from Jane Doe, thanks\"
";

    fn reference_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_builder_missing_content() {
        let result = ParserBuilder::new().parse();
        assert!(matches!(result, Err(StatementParseError::MissingContentAndFilepath)));
    }

    #[test]
    fn test_builder_new() {
        let builder = ParserBuilder::new();
        assert!(builder.content.is_none());
        assert!(builder.filepath.is_none());
        assert!(builder.format.is_none());
        assert!(builder.reference_time.is_none());
    }

    #[test]
    fn test_builder_chaining() {
        let builder = ParserBuilder::new()
            .content("content")
            .filename("file.csv")
            .format(FileFormat::Csv)
            .reference_time(reference_now());

        assert_eq!(builder.content.as_deref(), Some("content".as_bytes()));
        assert_eq!(builder.filepath.as_deref(), Some("file.csv"));
        assert_eq!(builder.format, Some(FileFormat::Csv));
        assert_eq!(builder.reference_time, Some(reference_now()));
    }

    #[rstest]
    #[case(None, Some(SAMPLE_CSV), Some(FileFormat::Csv))]
    #[case(Some("export.csv"), Some(SAMPLE_CSV), Some(FileFormat::Csv))]
    #[case(None, Some(SAMPLE_SMS), Some(FileFormat::Sms))]
    #[case(Some("inbox.txt"), Some(SAMPLE_SMS), Some(FileFormat::Sms))]
    #[case(Some("export.CSV"), None, Some(FileFormat::Csv))]
    #[case(Some("inbox.sms"), None, Some(FileFormat::Sms))]
    #[case(Some("notes.md"), Some("shopping list"), None)]
    #[case(None, None, None)]
    fn test_file_format_detect(
        #[case] filename: Option<&str>,
        #[case] content: Option<&str>,
        #[case] expected: Option<FileFormat>,
    ) {
        let result = FileFormat::detect(filename, content);
        match expected {
            Some(format) => assert_eq!(result.unwrap(), format),
            None => assert!(matches!(result, Err(StatementParseError::UnsupportedFormat))),
        }
    }

    #[test]
    fn test_parse_sms_content() {
        let txns = ParserBuilder::new()
            .content(SAMPLE_SMS)
            .reference_time(reference_now())
            .parse()
            .unwrap();

        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].transaction_type, TransactionType::Income);
        assert_eq!(txns[0].amount, Decimal::from_str("1000.00").unwrap());
        assert_eq!(txns[0].transaction_date.to_string(), "2026-10-16");
        assert_eq!(txns[1].transaction_type, TransactionType::Expense);
        assert_eq!(txns[1].transaction_date.to_string(), "2024-02-02");
    }

    #[test]
    fn test_parse_csv_bytes() {
        let txns = ParserBuilder::new()
            .bytes(SAMPLE_CSV.as_bytes())
            .filename("export.csv")
            .parse()
            .unwrap();

        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].from_person.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_parse_invalid_utf8() {
        let result = ParserBuilder::new()
            .bytes(&[0x66, 0xff, 0xfe, 0x0a])
            .format(FileFormat::Sms)
            .parse();

        assert!(matches!(result, Err(StatementParseError::InvalidEncoding(_))));
    }

    #[test]
    fn test_parse_csv_without_content_column() {
        let result = ParserBuilder::new()
            .content("Date,Time,Body\n01/15/2024,14:30:00,credited with ETB 10.00\n")
            .format(FileFormat::Csv)
            .parse();

        assert!(matches!(result, Err(StatementParseError::CsvMissingContentColumn)));
    }

    #[rstest]
    #[case("")]
    #[case("Date,Time,Body\n")]
    fn test_parse_csv_without_usable_header(#[case] content: &str) {
        let result = ParserBuilder::new()
            .content(content)
            .format(FileFormat::Csv)
            .parse();

        assert!(matches!(result, Err(StatementParseError::CsvMissingContentColumn)));
    }

    #[test]
    fn test_parse_csv_header_only_is_empty() {
        let txns = ParserBuilder::new()
            .content("Date,Time,Content\n")
            .format(FileFormat::Csv)
            .parse()
            .unwrap();
        assert!(txns.is_empty());
    }

    #[test]
    fn test_parse_nothing_recognised_is_empty_not_error() {
        let txns = ParserBuilder::new()
            .content("Your OTP is 123456, do not share it")
            .format(FileFormat::Sms)
            .parse()
            .unwrap();
        assert!(txns.is_empty());
    }

    #[test]
    fn test_parse_unsupported_format() {
        let result = ParserBuilder::new()
            .content("random content without any bank wording")
            .parse();

        assert!(matches!(result, Err(StatementParseError::UnsupportedFormat)));
    }

    #[test]
    fn test_parse_missing_file() {
        let result = ParserBuilder::new()
            .filename("/definitely/not/here/inbox.txt")
            .parse();

        assert!(matches!(result, Err(StatementParseError::ReadContentFailed(_))));
    }

    #[test]
    fn test_file_format_serialization() {
        let json = serde_json::to_string(&FileFormat::Csv).unwrap();
        assert_eq!(json, "\"csv\"");

        let deserialized: FileFormat = serde_json::from_str("\"sms\"").unwrap();
        assert_eq!(deserialized, FileFormat::Sms);
    }
}
