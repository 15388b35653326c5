//! Payment card parser combining the rule-based field extractors.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::card::ExtractedFields;
use crate::models::config::ExtractionConfig;

use super::rules::{
    normalize_all, CardNumberExtractor, ExpiryDateExtractor, FieldExtractor, NameExtractor,
};
use super::CardParser;

/// Result of card field extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted card fields.
    pub fields: ExtractedFields,
    /// Normalized fragments the fields were extracted from.
    pub normalized: Vec<String>,
    /// Fragments that passed every name check, in fragment order.
    pub name_candidates: Vec<String>,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Parser for credit and debit cards.
///
/// Holds only immutable settings, so one instance can serve any number of
/// threads. Each call to [`CardParser::parse`] recomputes everything from the
/// fragments it is given.
#[derive(Debug, Clone, Default)]
pub struct PaymentParser {
    number: CardNumberExtractor,
    expiry: ExpiryDateExtractor,
    name: NameExtractor,
}

impl PaymentParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_amex_correction(config.amex_member_since_correction)
            .with_extra_ignore_words(&config.extra_ignore_words)
    }

    /// Set American Express "member since" correction.
    pub fn with_amex_correction(mut self, enabled: bool) -> Self {
        self.number = self.number.with_amex_correction(enabled);
        self
    }

    /// Exclude more words from name candidacy.
    pub fn with_extra_ignore_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.name = self.name.with_extra_ignore_words(words);
        self
    }
}

impl CardParser for PaymentParser {
    fn parse(&self, texts: &[String]) -> ExtractionResult {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("Parsing card from {} recognized fragments", texts.len());
        debug!("Recognized texts: {:?}", texts);

        let normalized = normalize_all(texts);

        let card_number = self.number.extract(&normalized);
        if card_number.is_empty() {
            warnings.push("Could not extract card number".to_string());
        }

        let expiry_date = self.expiry.extract(&normalized);
        if expiry_date.is_empty() {
            warnings.push("Could not extract expiry date".to_string());
        }

        let name_candidates: Vec<String> = self
            .name
            .candidates(&normalized, &[card_number.as_str(), expiry_date.as_str()])
            .into_iter()
            .map(str::to_string)
            .collect();
        debug!("Name candidates: {:?}", name_candidates);

        let name = name_candidates.last().cloned().unwrap_or_default();
        if name.is_empty() {
            warnings.push("Could not extract cardholder name".to_string());
        }

        let fields = ExtractedFields {
            card_number,
            name,
            expiry_date,
        };

        debug!(
            "Extracted card fields with {} missing",
            fields.missing_fields().len()
        );

        ExtractionResult {
            fields,
            normalized,
            name_candidates,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}
