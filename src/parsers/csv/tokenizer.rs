//! Character-level CSV tokenizer.
//!
//! Quoted fields may contain commas, doubled quotes and literal line breaks, so
//! rows cannot be found by splitting on newlines first.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Unquoted,
    Quoted,
    /// Inside a quoted field, just after a `"`: either an escaped quote or the
    /// end of the quoted section.
    QuotedSawQuote,
}

#[derive(Debug, Default)]
pub struct Tokenizer {
    state: State,
    field: String,
    row: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn feed(&mut self, c: char) {
        self.state = match (self.state, c) {
            (State::Quoted, '"') => State::QuotedSawQuote,
            (State::Quoted, c) => {
                self.field.push(c);
                State::Quoted
            }
            (State::QuotedSawQuote, '"') => {
                self.field.push('"');
                State::Quoted
            }
            (_, '"') => State::Quoted,
            (_, ',') => {
                self.end_field();
                State::Unquoted
            }
            // "\r\n" ends the row at '\r'; the '\n' then closes an empty row, which is dropped.
            (_, '\r' | '\n') => {
                self.end_row();
                State::Unquoted
            }
            (_, c) => {
                self.field.push(c);
                State::Unquoted
            }
        };
    }

    /// Flushes a trailing row that has no final line terminator.
    pub fn finish(mut self) -> Vec<Vec<String>> {
        if !self.field.is_empty() || !self.row.is_empty() {
            self.end_row();
        }
        self.rows
    }

    fn end_field(&mut self) {
        self.row.push(std::mem::take(&mut self.field));
    }

    fn end_row(&mut self) {
        self.end_field();
        let row = std::mem::take(&mut self.row);
        if !(row.len() == 1 && row[0].is_empty()) {
            self.rows.push(row);
        }
    }
}

/// Splits CSV text into rows of unquoted field values.
pub fn tokenize(input: &str) -> Vec<Vec<String>> {
    let mut tokenizer = Tokenizer::new();
    input.chars().for_each(|c| tokenizer.feed(c));
    tokenizer.finish()
}
