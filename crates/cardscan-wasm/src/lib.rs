//! WASM bindings for payment card OCR field extraction.
//!
//! Recognition runs on the host (a webview, a native camera layer); these
//! bindings take the recognized texts and return the card fields.

use wasm_bindgen::prelude::*;

use cardscan_core::card::rules::{format_card_number as format_digits, is_valid_card_number};
use cardscan_core::{CardParser, PaymentParser, RecognizedFragment, Region};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract card fields from an array of recognized texts.
///
/// Returns `{ cardNumber, name, expiryDate }` with the ungrouped card number.
#[wasm_bindgen]
pub fn extract_card_fields(texts: JsValue) -> Result<JsValue, JsValue> {
    CardExtractor::new().extract(texts)
}

/// Whether the digits have card number shape (15 to 19 digits).
#[wasm_bindgen]
pub fn validate_card_number(number: &str) -> bool {
    is_valid_card_number(number)
}

/// Group card number digits in blocks of four.
#[wasm_bindgen]
pub fn format_card_number(number: &str) -> String {
    format_digits(number)
}

fn to_texts(texts: JsValue) -> Result<Vec<String>, JsValue> {
    serde_wasm_bindgen::from_value(texts).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Card extractor class for browser use.
#[wasm_bindgen]
pub struct CardExtractor {
    parser: PaymentParser,
}

#[wasm_bindgen]
impl CardExtractor {
    /// Create a new card extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: PaymentParser::new(),
        }
    }

    /// Configure American Express "member since" correction.
    #[wasm_bindgen]
    pub fn set_amex_correction(&mut self, enabled: bool) {
        self.parser = self.parser.clone().with_amex_correction(enabled);
    }

    /// Exclude another word from name candidacy.
    #[wasm_bindgen]
    pub fn add_ignore_word(&mut self, word: &str) {
        self.parser = self.parser.clone().with_extra_ignore_words([word]);
    }

    /// Extract card fields from recognized texts.
    #[wasm_bindgen]
    pub fn extract(&self, texts: JsValue) -> Result<JsValue, JsValue> {
        let result = self.parser.parse(&to_texts(texts)?);

        serde_wasm_bindgen::to_value(&result.fields)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get extraction result with metadata.
    #[wasm_bindgen]
    pub fn extract_with_metadata(&self, texts: JsValue) -> Result<JsValue, JsValue> {
        let result = self.parser.parse(&to_texts(texts)?);

        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ExtractResult {
            fields: cardscan_core::ExtractedFields,
            formatted_card_number: String,
            normalized: Vec<String>,
            warnings: Vec<String>,
            processing_time_ms: u64,
        }

        let output = ExtractResult {
            formatted_card_number: result.fields.formatted_card_number(),
            fields: result.fields,
            normalized: result.normalized,
            warnings: result.warnings,
            processing_time_ms: result.processing_time_ms,
        };

        serde_wasm_bindgen::to_value(&output)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for CardExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Fragments recognized on the host side, collected one by one.
#[wasm_bindgen]
pub struct FragmentsJs {
    fragments: Vec<RecognizedFragment>,
}

#[wasm_bindgen]
impl FragmentsJs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// Add a fragment with its pixel region.
    #[wasm_bindgen]
    pub fn add_fragment(&mut self, text: &str, x: f32, y: f32, width: f32, height: f32) {
        self.fragments
            .push(RecognizedFragment::new(text, Region::new(x, y, width, height)));
    }

    /// Add a fragment whose box is normalized with a bottom-left origin.
    #[wasm_bindgen]
    pub fn add_normalized_fragment(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        image_width: u32,
        image_height: u32,
    ) {
        let region =
            Region::from_normalized(Region::new(x, y, width, height), image_width, image_height);
        self.fragments.push(RecognizedFragment::new(text, region));
    }

    /// Number of fragments collected.
    #[wasm_bindgen]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// All fragments, unfiltered.
    #[wasm_bindgen]
    pub fn raw(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.fragments)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Extract card fields from the collected fragments.
    #[wasm_bindgen]
    pub fn extract_fields(&self) -> Result<JsValue, JsValue> {
        let texts: Vec<String> = self.fragments.iter().map(|f| f.text.clone()).collect();
        let result = PaymentParser::new().parse(&texts);

        serde_wasm_bindgen::to_value(&result.fields)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for FragmentsJs {
    fn default() -> Self {
        Self::new()
    }
}
