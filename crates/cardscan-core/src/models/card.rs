//! Card field models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::card::rules::format_card_number;

/// Output key for the card number.
pub const CARD_NUMBER_KEY: &str = "cardNumber";
/// Output key for the cardholder name.
pub const NAME_KEY: &str = "name";
/// Output key for the expiry date.
pub const EXPIRY_DATE_KEY: &str = "expiryDate";

/// Fields extracted from one captured card image.
///
/// Every field defaults to the empty string when it could not be resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedFields {
    /// Ungrouped card number digits.
    pub card_number: String,

    /// Cardholder name as printed on the card.
    pub name: String,

    /// Expiry date in `MM/YY` form.
    pub expiry_date: String,
}

impl ExtractedFields {
    /// Card number grouped into blocks of four for display.
    pub fn formatted_card_number(&self) -> String {
        format_card_number(&self.card_number)
    }

    /// Field mapping with the ungrouped card number. All keys are always present.
    pub fn parsed_data(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            (CARD_NUMBER_KEY, self.card_number.clone()),
            (NAME_KEY, self.name.clone()),
            (EXPIRY_DATE_KEY, self.expiry_date.clone()),
        ])
    }

    /// Field mapping with the card number grouped for display.
    pub fn display_data(&self) -> BTreeMap<&'static str, String> {
        let mut data = self.parsed_data();
        data.insert(CARD_NUMBER_KEY, self.formatted_card_number());
        data
    }

    /// Output keys of the fields that could not be extracted.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            (CARD_NUMBER_KEY, &self.card_number),
            (NAME_KEY, &self.name),
            (EXPIRY_DATE_KEY, &self.expiry_date),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(key, _)| key)
        .collect()
    }

    /// True when nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.card_number.is_empty() && self.name.is_empty() && self.expiry_date.is_empty()
    }
}
