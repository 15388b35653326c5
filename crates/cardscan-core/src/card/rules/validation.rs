//! Shape checks shared by the field extractors.

use super::patterns::NAME_PATTERN;

/// Shortest accepted card number is one longer than this.
pub const MIN_CARD_NUMBER_EXCLUSIVE: usize = 14;
/// Longest accepted card number.
pub const MAX_CARD_NUMBER_LENGTH: usize = 19;

/// Card number shape: 15 to 19 characters, all digits.
pub fn is_valid_card_number(number: &str) -> bool {
    let len = number.chars().count();
    len > MIN_CARD_NUMBER_EXCLUSIVE && len <= MAX_CARD_NUMBER_LENGTH && is_numeric(number)
}

/// Whether the text is digits only once whitespace is ignored. Empty text is
/// not numeric.
pub fn is_numeric(text: &str) -> bool {
    let mut digits = text.chars().filter(|c| !c.is_whitespace()).peekable();
    digits.peek().is_some() && digits.all(|c| c.is_ascii_digit())
}

/// Name shape: letters, dots and spaces, starting with an uppercase letter.
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name) && name.chars().next().is_some_and(char::is_uppercase)
}
