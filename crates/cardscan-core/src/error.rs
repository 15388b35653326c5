//! Error types for the cardscan-core library.
//!
//! Field extraction itself never fails: a field that cannot be resolved is an
//! empty string. Errors only come from the OCR stage and the surrounding I/O.

use thiserror::Error;

/// Main error type for the cardscan library.
#[derive(Error, Debug)]
pub enum CardScanError {
    /// OCR stage failed upstream of extraction.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors reported by the OCR collaborator.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// The recognized fragments could not be read back.
    #[error("unreadable fragments: {0}")]
    Unreadable(String),
}

/// Result type for the cardscan library.
pub type Result<T> = std::result::Result<T, CardScanError>;
