//! Static tables: issuer ignore list, OCR confusion map and Amex aliases.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Issuer, bank and program names plus boilerplate labels printed on cards.
/// None of these is ever a cardholder name.
pub const IGNORE_LIST: &[&str] = &[
    "VISA", "MasterCard", "Amex", "AMERICAN", "EXPRESS", "Slice",
    "Platinum", "Gold", "Credit", "Debit", "Card", "Bank", "Pay",
    "Month", "Year", "Master", "Maestro", "Expresss", "AmericanExpress",
    "Amazon", "Amazon Pay", "Amazonpay", "Bank of america", "Chase",
    "Wells Fargo", "Capital One", "Citi", "Citibank", "Discover", "Synchrony",
    "U.S. Bank", "Rewards", "Advantage", "DBS", "Standard Chartered",
    "Deutche", "Security", "BLACK EDITION", "MM", "YY", "Valid", "Thru", "Signature",
    "Coral", "Rupay", "Date", "Code", "SBI", "SBI Card", "SimplySave",
    "SimplyClick", "LEAGUE", "ICICI", "ICICI Bank", "Discover it® Cash Back",
    "Sam's Club Mastercard", "Sam's Club", "U.S. Bank Visa® Platinum Card",
    "U.S. Bank Visa", "Wells Fargo Reflect", "Wells Fargo Reflect Card",
    "Barclays", "Navy FCU", "USSA", "Goldman Sachs", "PNC Bank",
    "Credit One Bank", "TD Bank", "First National", "From", "Octane", "CRN", "Corporate",
    "Kotak", "Kotak Mahindra Bank", "J.P. Morgan", "J P Morgan", "JP Morgan",
];

/// Spellings that identify an American Express card.
pub const AMEX_ALIASES: &[&str] = &["AMERICAN", "EXPRESS", "AmericanExpress", "American Express"];

/// Characters OCR commonly reads in place of a digit, and the digit meant.
pub const CONFUSION_PAIRS: &[(char, char)] = &[
    ('b', '6'),
    ('B', '8'),
    ('e', '2'),
    ('I', '1'),
    ('l', '1'),
    ('L', '1'),
    ('J', '1'),
    ('j', '1'),
    ('g', '9'),
    ('D', '0'),
    ('S', '5'),
    ('s', '5'),
    ('T', '7'),
    ('O', '0'),
    ('o', '0'),
    ('q', '9'),
    ('Q', '0'),
];

lazy_static! {
    pub static ref CONFUSION_MAP: HashMap<char, char> = CONFUSION_PAIRS.iter().copied().collect();

    pub static ref IGNORE_LIST_LOWER: Vec<String> =
        IGNORE_LIST.iter().map(|entry| entry.to_lowercase()).collect();

    pub static ref AMEX_ALIASES_LOWER: Vec<String> =
        AMEX_ALIASES.iter().map(|alias| alias.to_lowercase()).collect();
}

/// Digit a confusable character stands for, if any.
pub fn corrected_digit(c: char) -> Option<char> {
    CONFUSION_MAP.get(&c).copied()
}
