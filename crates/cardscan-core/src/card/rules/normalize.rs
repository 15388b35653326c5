//! Fragment normalization.
//!
//! Trims punctuation, then symbols, then whitespace from both ends of a
//! fragment. Interior characters are never touched. The three passes repeat
//! until nothing changes, since whitespace can shield a symbol from the pass
//! that would strip it (`"( $5 )"`).

use super::patterns::{EDGE_PUNCTUATION, EDGE_SYMBOLS};

/// Normalize one recognized fragment.
pub fn normalize(text: &str) -> String {
    let mut current = trim_boundary(text);
    loop {
        let trimmed = trim_boundary(&current);
        if trimmed.len() == current.len() {
            return trimmed;
        }
        current = trimmed;
    }
}

/// Normalize every fragment, keeping order.
pub fn normalize_all<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
    texts.iter().map(|t| normalize(t.as_ref())).collect()
}

fn trim_boundary(text: &str) -> String {
    let text = EDGE_PUNCTUATION.replace_all(text, "");
    let text = EDGE_SYMBOLS.replace_all(&text, "");
    text.trim_matches(char::is_whitespace).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_trims_boundaries_only() {
        assert_eq!(normalize("  JOHN DOE. "), "JOHN DOE");
        assert_eq!(normalize("(4111-1111)"), "4111-1111");
        assert_eq!(normalize("VISA®"), "VISA");
        assert_eq!(normalize("$ 12."), "12");
        assert_eq!(normalize("Discover it® Cash Back"), "Discover it® Cash Back");
    }

    #[test]
    fn test_empty_and_all_trimmed() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("...$$$"), "");
    }

    #[test]
    fn test_fullwidth_and_emoji_trimmed() {
        assert_eq!(normalize("JOHN DOE\u{FF0E}"), "JOHN DOE");
        assert_eq!(normalize("\u{FF08}09/28\u{FF09}"), "09/28");
        assert_eq!(normalize("\u{2E3A}VISA"), "VISA");
        assert_eq!(normalize("\u{1F4B3} 4111"), "4111");
        assert_eq!(normalize("JOHN\u{FF04}"), "JOHN");
        assert_eq!(normalize("\u{FF08}JOHN\u{FF0E}DOE\u{FF09}"), "JOHN\u{FF0E}DOE");
    }

    #[test]
    fn test_shielded_symbol_is_trimmed() {
        assert_eq!(normalize("( $5 )"), "5");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            " 09/28 ",
            "VALID THRU",
            "( $5 )",
            "\u{2022}\u{2022}\u{2022}\u{2022} 1234",
            "«JOHN» ™",
            "- + - 4111 + - +",
            ". \t$ ® x ® $ \t.",
            "J.P. Morgan",
        ];

        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "input {sample:?}");
        }
    }

    #[test]
    fn test_normalize_all_keeps_order() {
        assert_eq!(
            normalize_all(&["  VISA", "04/25.", "JOHN DOE"]),
            vec!["VISA", "04/25", "JOHN DOE"]
        );
    }
}
