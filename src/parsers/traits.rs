use chrono::{Local, NaiveDateTime};

pub trait Parser {
    type Output;

    /// Parses `content`, resolving missing dates and times against `now`.
    ///
    /// Never fails: content that cannot be recognized yields fewer (or no) outputs.
    fn parse_at(content: &str, now: NaiveDateTime) -> Vec<Self::Output>;

    fn parse(content: &str) -> Vec<Self::Output> {
        Self::parse_at(content, Local::now().naive_local())
    }

    fn is_supported(filename: Option<&str>, content: &str) -> bool;
}
