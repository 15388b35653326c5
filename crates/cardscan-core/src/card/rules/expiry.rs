//! Expiry date extraction.

use super::validation::is_numeric;
use super::{remove_whitespace, FieldExtractor};

/// Expiry date field extractor.
///
/// Reads the two characters on each side of the first `/` in the last
/// fragment that looks like a date. Both sides must be two digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpiryDateExtractor;

impl ExpiryDateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for ExpiryDateExtractor {
    type Output = String;

    fn extract(&self, fragments: &[String]) -> String {
        let Some(date) = fragments
            .iter()
            .filter(|f| f.chars().count() > 4 && f.contains('/'))
            .map(|f| remove_whitespace(f))
            .last()
        else {
            return String::new();
        };

        let chars: Vec<char> = date.chars().collect();
        let Some(slash) = chars.iter().position(|&c| c == '/') else {
            return String::new();
        };

        let month = window(&chars, slash.checked_sub(2));
        let year = window(&chars, Some(slash + 1));

        if is_numeric(&month) && is_numeric(&year) {
            format!("{}/{}", month, year)
        } else {
            String::new()
        }
    }
}

/// Extract the expiry date from normalized fragments.
pub fn extract_expiry_date(fragments: &[String]) -> String {
    ExpiryDateExtractor::new().extract(fragments)
}

/// Two characters starting at `start`, or empty when that runs off either end.
fn window(chars: &[char], start: Option<usize>) -> String {
    match start {
        Some(start) if start + 2 <= chars.len() => chars[start..start + 2].iter().collect(),
        _ => String::new(),
    }
}
