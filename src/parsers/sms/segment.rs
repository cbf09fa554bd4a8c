use std::sync::OnceLock;

use regex::Regex;

/// Candidates shorter than this (in characters, after trimming) are noise.
pub const MIN_MESSAGE_CHARS: usize = 10;

fn boundary_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:\r?\n){2,}|Dear|Your Account").expect("invalid message boundary regex")
    })
}

/// Splits pasted text into individual message candidates.
///
/// Messages are separated by blank lines, or start directly at a greeting
/// ("Dear", "Your Account") even without a blank line. The greeting stays with
/// the message it opens. A greeting word in the middle of a message also starts
/// a new candidate; that is a known limitation of the heuristic.
pub fn segment(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for boundary in boundary_re().find_iter(text) {
        pieces.push(&text[start..boundary.start()]);
        start = if is_greeting(boundary.as_str()) {
            boundary.start()
        } else {
            boundary.end()
        };
    }
    pieces.push(&text[start..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| piece.chars().count() >= MIN_MESSAGE_CHARS)
        .collect()
}

fn is_greeting(boundary: &str) -> bool {
    !boundary.starts_with(['\r', '\n'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_segment_blank_lines() {
        let text = "First message credited with ETB 10\n\nSecond message debited with ETB 5\n\n\n\nThird message paid ETB 1";
        let parts = segment(text);
        assert_eq!(
            parts,
            vec![
                "First message credited with ETB 10",
                "Second message debited with ETB 5",
                "Third message paid ETB 1",
            ]
        );
    }

    #[test]
    fn test_segment_crlf_blank_lines() {
        let parts = segment("Message number one\r\n\r\nMessage number two");
        assert_eq!(parts, vec!["Message number one", "Message number two"]);
    }

    #[test]
    fn test_segment_on_greetings_without_blank_lines() {
        let text = "Dear Customer, credited with ETB 10. Dear Customer, debited with ETB 5. Your Account 1000 was debited";
        let parts = segment(text);
        assert_eq!(
            parts,
            vec![
                "Dear Customer, credited with ETB 10.",
                "Dear Customer, debited with ETB 5.",
                "Your Account 1000 was debited",
            ]
        );
    }

    #[test]
    fn test_segment_greeting_mid_sentence_splits() {
        let parts = segment("Payment to my Dear friend Abebe was completed");
        assert_eq!(parts, vec!["Payment to my", "Dear friend Abebe was completed"]);
    }

    #[test]
    fn test_segment_single_line_message() {
        let parts = segment("  credited with ETB 1,000.00  ");
        assert_eq!(parts, vec!["credited with ETB 1,000.00"]);
    }

    #[rstest]
    #[case("")]
    #[case("short")]
    #[case("   \n\n  ")]
    #[case("123456789")]
    fn test_segment_drops_noise(#[case] text: &str) {
        assert!(segment(text).is_empty());
    }

    #[test]
    fn test_segment_length_counts_characters_not_bytes() {
        // eight characters, twenty-four bytes
        assert!(segment("ብርብርብርብር").is_empty());
        assert_eq!(segment("ብር ተቀብለዋል ብር").len(), 1);
    }

    #[test]
    fn test_segment_count_is_monotonic_when_appending() {
        let message = "Dear Customer your account has been credited with ETB 10.00";
        let mut text = String::new();
        let mut previous = 0;

        for _ in 0..5 {
            if !text.is_empty() {
                text.push_str("\n\n");
            }
            text.push_str(message);
            let count = segment(&text).len();
            assert!(count >= previous);
            previous = count;
        }
        assert_eq!(previous, 5);
    }
}
