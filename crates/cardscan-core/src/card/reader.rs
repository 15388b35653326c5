//! Card reader: OCR followed by field extraction.

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::config::ExtractionConfig;
use crate::ocr::{fragment_texts, RecognizedFragment, TextDetection};

use super::parser::{ExtractionResult, PaymentParser};
use super::CardParser;

/// Kind of document the reader parses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReaderType {
    /// Credit or debit payment card.
    #[default]
    CreditCard,
}

impl ReaderType {
    /// Parser for this document kind.
    pub fn parser(&self, config: &ExtractionConfig) -> Box<dyn CardParser + Send + Sync> {
        match self {
            ReaderType::CreditCard => Box::new(PaymentParser::from_config(config)),
        }
    }
}

/// Reads card information through an OCR collaborator.
///
/// OCR failures are returned as errors before any extraction runs; once
/// fragments are available, parsing always succeeds.
pub struct CardReader<D> {
    detector: D,
    reader_type: ReaderType,
    config: ExtractionConfig,
}

impl<D: TextDetection> CardReader<D> {
    /// Create a credit card reader over `detector`.
    pub fn new(detector: D) -> Self {
        Self {
            detector,
            reader_type: ReaderType::default(),
            config: ExtractionConfig::default(),
        }
    }

    /// Set the document kind.
    pub fn with_reader_type(mut self, reader_type: ReaderType) -> Self {
        self.reader_type = reader_type;
        self
    }

    /// Set extraction configuration.
    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    /// Recognize text in `input` and extract the card fields.
    pub fn read_information(&self, input: &D::Input) -> Result<ExtractionResult> {
        let fragments = self.recognize(input)?;
        let texts = fragment_texts(&fragments);

        Ok(self.reader_type.parser(&self.config).parse(&texts))
    }

    /// Recognize text in `input` and return every fragment unfiltered.
    pub fn read_raw_data(&self, input: &D::Input) -> Result<Vec<RecognizedFragment>> {
        self.recognize(input)
    }

    fn recognize(&self, input: &D::Input) -> Result<Vec<RecognizedFragment>> {
        let fragments = self.detector.detect_text(input).map_err(|e| {
            warn!("Text recognition failed: {}", e);
            e
        })?;
        debug!("Recognized {} fragments", fragments.len());
        Ok(fragments)
    }
}
