//! Rule-based field extractors for payment cards.
//!
//! All extractors work on normalized fragments (see [`normalize`]) in the
//! order the recognizer emitted them; later fragments win ties.

pub mod normalize;
pub mod number;
pub mod expiry;
pub mod name;
pub mod tables;
pub mod validation;
pub mod patterns;

pub use normalize::{normalize, normalize_all};
pub use number::{extract_card_number, dedup_blocks, format_card_number, CardNumberExtractor};
pub use expiry::{extract_expiry_date, ExpiryDateExtractor};
pub use name::{extract_name, NameExtractor};
pub use validation::{is_numeric, is_valid_card_number, is_valid_name};

/// Trait for field extractors that only need the fragment list.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from normalized fragments.
    fn extract(&self, fragments: &[String]) -> Self::Output;
}

/// Remove every whitespace character, interior ones included.
pub fn remove_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Whether any space-separated word of `text` occurs, case-insensitively,
/// inside any of the `entries`. Entries must already be lowercase.
pub fn contains_listed_word<S: AsRef<str>>(text: &str, entries: &[S]) -> bool {
    text.split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .any(|word| entries.iter().any(|entry| entry.as_ref().contains(word.as_str())))
}
