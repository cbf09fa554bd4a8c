use regex::{Captures, Regex, RegexBuilder};

/// One entry of an ordered pattern table.
///
/// A rule pairs a compiled case-insensitive pattern with the function that turns
/// its captures into a value. Tables are evaluated with [`first_match`], so the
/// position of a rule in its table is its precedence.
pub struct Rule<T> {
    name: &'static str,
    regex: Regex,
    extract: fn(&Captures<'_>) -> Option<T>,
}

impl<T> Rule<T> {
    /// Compiles `pattern`. Patterns are static literals, so a bad one is a bug
    /// caught the first time its table is built.
    pub fn new(name: &'static str, pattern: &str, extract: fn(&Captures<'_>) -> Option<T>) -> Self {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .unwrap_or_else(|e| panic!("invalid {} pattern: {}", name, e));

        Self { name, regex, extract }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Applies the rule to the first occurrence of its pattern in `text`.
    pub fn apply(&self, text: &str) -> Option<T> {
        self.regex
            .captures(text)
            .and_then(|caps| (self.extract)(&caps))
    }
}

/// Returns the value produced by the first rule that matches and extracts,
/// together with that rule. Later rules are never tried once one succeeds.
pub fn first_match<'r, T>(rules: &'r [Rule<T>], text: &str) -> Option<(&'r Rule<T>, T)> {
    rules
        .iter()
        .find_map(|rule| rule.apply(text).map(|value| (rule, value)))
}

/// Text of capture group `index`, trimmed, or `None` when empty.
pub(crate) fn trimmed_group(caps: &Captures<'_>, index: usize) -> Option<String> {
    caps.get(index)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(caps: &Captures<'_>) -> Option<u32> {
        caps[1].parse().ok()
    }

    fn rejecting(_: &Captures<'_>) -> Option<u32> {
        None
    }

    #[test]
    fn test_first_match_respects_table_order() {
        let rules = vec![
            Rule::new("specific", r"total (\d+) including", digits),
            Rule::new("generic", r"(\d+)", digits),
        ];

        let (rule, value) = first_match(&rules, "total 42 including fees, 7 items").unwrap();
        assert_eq!(rule.name(), "specific");
        assert_eq!(value, 42);

        let (rule, value) = first_match(&rules, "7 items").unwrap();
        assert_eq!(rule.name(), "generic");
        assert_eq!(value, 7);
    }

    #[test]
    fn test_first_match_falls_through_when_extractor_rejects() {
        let rules = vec![
            Rule::new("rejected", r"(\d+)", rejecting),
            Rule::new("accepted", r"(\d+)", digits),
        ];

        let (rule, value) = first_match(&rules, "code 9").unwrap();
        assert_eq!(rule.name(), "accepted");
        assert_eq!(value, 9);
    }

    #[test]
    fn test_rules_are_case_insensitive() {
        let rule = Rule::new("word", r"credited (\d+)", digits);
        assert_eq!(rule.apply("CREDITED 5"), Some(5));
    }

    #[test]
    fn test_first_match_none() {
        let rules = vec![Rule::new("digits", r"(\d+)", digits)];
        assert!(first_match(&rules, "no numbers here").is_none());
    }
}
