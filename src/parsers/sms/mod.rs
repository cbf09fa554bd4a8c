pub mod parser;
pub mod segment;

pub mod prelude {
    pub use super::parser::SmsParser;
    pub use super::segment::segment;
}
