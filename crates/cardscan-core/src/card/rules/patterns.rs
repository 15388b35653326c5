//! Common regex patterns for card field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Cardholder names: latin letters, dots and spaces only
    pub static ref NAME_PATTERN: Regex = Regex::new(r"^[A-Za-z. ]+$").unwrap();

    // Leading or trailing runs of Unicode punctuation (categories P*)
    pub static ref EDGE_PUNCTUATION: Regex = Regex::new(r"^\p{P}+|\p{P}+$").unwrap();

    // Leading or trailing runs of Unicode symbols (categories S*)
    pub static ref EDGE_SYMBOLS: Regex = Regex::new(r"^\p{S}+|\p{S}+$").unwrap();
}
