//! Card field extraction module.

mod parser;
mod reader;
pub mod rules;

pub use parser::{ExtractionResult, PaymentParser};
pub use reader::{CardReader, ReaderType};

/// Trait for card parsers. Parsing never fails; unresolved fields come back
/// as empty strings.
pub trait CardParser {
    /// Parse raw recognized texts, in recognizer order.
    fn parse(&self, texts: &[String]) -> ExtractionResult;
}
