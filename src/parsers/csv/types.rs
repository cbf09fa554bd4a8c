use crate::errors::StatementParseError;
use crate::types::TransactionDate;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Formatos de data aceitos nas exportações CSV, em ordem de tentativa.
///
/// Dia/mês/ano com barras não entra aqui: `01/02/2024` é lido como 2 de janeiro,
/// igual ao parser de datas genérico usado pelos consumidores das exportações.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
    "%d %b %Y",
    "%d %B %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%m/%d/%Y %H:%M:%S"];

/// Representa a data crua de uma coluna `Date` de exportação CSV.
///
/// Este wrapper centraliza a lógica de parsing e a normalização para ISO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvDate(String);

impl CsvDate {
    /// Tenta converter a string de data para `NaiveDate` aceitando os formatos mais comuns
    pub fn parse(&self) -> Result<NaiveDate, StatementParseError> {
        let s = self.0.trim();

        if let Some(date) = DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        {
            return Ok(date);
        }
        if let Some(datetime) = DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        {
            return Ok(datetime.date());
        }
        if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
            return Ok(datetime.date_naive());
        }

        Err(StatementParseError::CsvDateInvalidFormat)
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Data ISO quando reconhecida; caso contrário a string original, sem alteração.
    pub fn normalize(self) -> TransactionDate {
        match self.parse() {
            Ok(date) => TransactionDate::Iso(date),
            Err(_) => TransactionDate::Raw(self.0),
        }
    }
}

impl From<String> for CsvDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CsvDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<CsvDate> for NaiveDate {
    type Error = StatementParseError;

    fn try_from(date: CsvDate) -> Result<Self, Self::Error> {
        date.parse()
    }
}

/// Hora de uma coluna `Time`; aceita `HH:MM:SS` e `HH:MM`.
pub fn parse_csv_time(raw: &str) -> Option<NaiveTime> {
    let s = raw.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

// -----------------------------------------------------------------------------
// Testes
// -----------------------------------------------------------------------------
