//! Card number extraction.
//!
//! OCR on embossed cards splits, duplicates and misreads digit blocks. The
//! extractor corrects look-alike letters, joins the fragments that look like
//! card numbers (or, failing that, every numeric fragment), drops repeated
//! 4-digit blocks and caps the result at 19 digits.

use tracing::debug;

use super::tables::{corrected_digit, AMEX_ALIASES_LOWER};
use super::validation::{is_numeric, is_valid_card_number, MAX_CARD_NUMBER_LENGTH};
use super::{contains_listed_word, remove_whitespace, FieldExtractor};

/// Size of the digit groups printed on cards.
pub const BLOCK_SIZE: usize = 4;

/// Card number field extractor.
#[derive(Debug, Clone)]
pub struct CardNumberExtractor {
    amex_correction: bool,
}

impl CardNumberExtractor {
    /// Create a new card number extractor.
    pub fn new() -> Self {
        Self {
            amex_correction: true,
        }
    }

    /// Set whether to strip the American Express "member since" year.
    pub fn with_amex_correction(mut self, enabled: bool) -> Self {
        self.amex_correction = enabled;
        self
    }
}

impl Default for CardNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CardNumberExtractor {
    type Output = String;

    fn extract(&self, fragments: &[String]) -> String {
        let candidates: Vec<String> = fragments.iter().map(|f| substitute_confusables(f)).collect();

        let valid: Vec<&str> = candidates
            .iter()
            .map(String::as_str)
            .filter(|c| is_valid_card_number(c))
            .collect();

        let mut digits = if valid.is_empty() {
            candidates
                .iter()
                .map(String::as_str)
                .filter(|c| is_numeric(c))
                .collect::<String>()
        } else {
            valid.concat()
        };

        if !is_valid_card_number(&digits) {
            digits = dedup_blocks(&digits);
        }
        digits = digits.chars().take(MAX_CARD_NUMBER_LENGTH).collect();

        if self.amex_correction && is_american_express(fragments) {
            if let Some(year) = member_since_year(fragments) {
                debug!("Removing member since year {} from Amex number", year);
                digits = digits.replacen(year.as_str(), "", 1);
            }
        }

        digits
    }
}

/// Extract the card number from normalized fragments with default settings.
pub fn extract_card_number(fragments: &[String]) -> String {
    CardNumberExtractor::new().extract(fragments)
}

/// Drop whitespace and replace look-alike letters with the digits they stand for.
pub fn substitute_confusables(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| corrected_digit(c).unwrap_or(c))
        .collect()
}

/// Split into consecutive blocks of `size` characters; the last may be shorter.
pub fn split_blocks(text: &str, size: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars.chunks(size.max(1)).map(|chunk| chunk.iter().collect()).collect()
}

/// Drop repeated 4-character blocks, keeping the first occurrence of each.
pub fn dedup_blocks(digits: &str) -> String {
    let mut seen = std::collections::HashSet::new();
    split_blocks(digits, BLOCK_SIZE)
        .into_iter()
        .filter(|block| seen.insert(block.clone()))
        .collect()
}

/// Group digits into blocks of four separated by single spaces.
pub fn format_card_number(digits: &str) -> String {
    split_blocks(digits, BLOCK_SIZE).join(" ")
}

/// Whether any fragment names American Express.
pub fn is_american_express(fragments: &[String]) -> bool {
    fragments
        .iter()
        .any(|f| contains_listed_word(f, AMEX_ALIASES_LOWER.as_slice()))
}

/// First two-digit fragment, the "member since" year on Amex cards.
fn member_since_year(fragments: &[String]) -> Option<String> {
    fragments
        .iter()
        .map(|f| remove_whitespace(f))
        .find(|f| f.chars().count() == 2 && f.chars().all(|c| c.is_ascii_digit()))
}
