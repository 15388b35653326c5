//! Core library for payment card OCR.
//!
//! This crate provides:
//! - Recognized text fragments and the OCR collaborator seam
//! - Fragment normalization (boundary punctuation/symbol/whitespace trimming)
//! - Card field extraction (card number, cardholder name, expiry date)
//! - A card reader that runs OCR and parsing as one step

pub mod error;
pub mod models;
pub mod ocr;
pub mod card;

pub use error::{CardScanError, OcrError, Result};
pub use models::card::ExtractedFields;
pub use models::config::{CardScanConfig, ExtractionConfig, OutputConfig};
pub use ocr::{FragmentDump, RecognizedFragment, Region, TextDetection};
pub use card::{CardParser, CardReader, ExtractionResult, PaymentParser, ReaderType};
