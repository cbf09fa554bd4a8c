pub mod dto;
pub mod parser;
pub mod tokenizer;
pub mod types;

pub mod prelude {
    pub use super::dto::{CsvColumns, CsvRow};
    pub use super::parser::CsvParser;
    pub use super::tokenizer::tokenize;
    pub use super::types::CsvDate;
}
