//! Cardholder name extraction.

use super::contains_listed_word;
use super::tables::IGNORE_LIST_LOWER;
use super::validation::is_valid_name;

/// Cardholder name extractor.
#[derive(Debug, Clone, Default)]
pub struct NameExtractor {
    /// Lowercased words ignored in addition to the built-in list.
    extra_ignore_words: Vec<String>,
}

impl NameExtractor {
    /// Create a new name extractor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore these words as well as the built-in issuer list.
    pub fn with_extra_ignore_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_ignore_words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Whether the fragment carries issuer branding or a boilerplate label.
    pub fn is_ignorable(&self, text: &str) -> bool {
        contains_listed_word(text, IGNORE_LIST_LOWER.as_slice())
            || contains_listed_word(text, self.extra_ignore_words.as_slice())
    }

    /// Every fragment that could be the cardholder name, in fragment order.
    /// Fragments equal to one of `avoid` (the card number, the expiry date)
    /// are skipped.
    pub fn candidates<'a>(&self, fragments: &'a [String], avoid: &[&str]) -> Vec<&'a str> {
        fragments
            .iter()
            .map(String::as_str)
            .filter(|f| !avoid.contains(f))
            .filter(|f| !self.is_ignorable(f))
            .filter(|f| is_valid_name(f))
            .collect()
    }

    /// The last name candidate, or an empty string.
    pub fn extract(&self, fragments: &[String], avoid: &[&str]) -> String {
        self.candidates(fragments, avoid)
            .last()
            .map(|s| s.to_string())
            .unwrap_or_default()
    }
}

/// Extract the cardholder name from normalized fragments.
pub fn extract_name(fragments: &[String], card_number: &str, expiry_date: &str) -> String {
    NameExtractor::new().extract(fragments, &[card_number, expiry_date])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fragments(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_ignore_list_excluded() {
        let frags = fragments(&["VISA", "John Smith", "04/25", "1234567890123456"]);
        assert_eq!(extract_name(&frags, "1234567890123456", "04/25"), "John Smith");
    }

    #[test]
    fn test_last_candidate_wins() {
        let frags = fragments(&["PLATINUM", "JANE ROE", "VALID THRU", "JOHN DOE"]);
        assert_eq!(extract_name(&frags, "", ""), "JOHN DOE");
    }

    #[test]
    fn test_label_words_excluded() {
        let extractor = NameExtractor::new();

        assert!(extractor.is_ignorable("VALID THRU"));
        assert!(extractor.is_ignorable("Bank"));
        assert!(extractor.is_ignorable("MEMBER SINCE MM YY"));
        assert!(!extractor.is_ignorable("JOHN DOE"));
    }

    #[test]
    fn test_shape_rules() {
        let frags = fragments(&["JOHN DOE", "john doe", "J0HN D0E"]);
        let extractor = NameExtractor::new();
        assert_eq!(extractor.candidates(&frags, &[]), vec!["JOHN DOE"]);
    }

    #[test]
    fn test_exact_avoid_match() {
        let frags = fragments(&["JOHN DOE"]);
        assert_eq!(NameExtractor::new().extract(&frags, &["JOHN DOE"]), "");
    }

    #[test]
    fn test_extra_ignore_words() {
        let frags = fragments(&["JOHN DOE", "PRIVILEGE"]);
        assert_eq!(extract_name(&frags, "", ""), "PRIVILEGE");

        let extractor = NameExtractor::new().with_extra_ignore_words(["Privilege"]);
        assert_eq!(extractor.extract(&frags, &[]), "JOHN DOE");
    }

    #[test]
    fn test_no_candidates() {
        assert_eq!(extract_name(&fragments(&["VISA", "4111"]), "", ""), "");
        assert_eq!(extract_name(&[], "", ""), "");
    }
}
