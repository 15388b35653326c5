//! Configuration structures for card scanning.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Main configuration for the cardscan pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardScanConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Card field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Strip the "member since" year that OCR merges into American Express numbers.
    pub amex_member_since_correction: bool,

    /// Words excluded from name candidacy on top of the built-in issuer list.
    pub extra_ignore_words: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            amex_member_since_correction: true,
            extra_ignore_words: Vec::new(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Group the card number into blocks of four when displaying results.
    pub group_card_number: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            group_card_number: true,
        }
    }
}

impl CardScanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CardScanError;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: CardScanConfig =
            serde_json::from_str(r#"{"extraction":{"extra_ignore_words":["Privilege"]}}"#).unwrap();

        assert!(config.extraction.amex_member_since_correction);
        assert_eq!(config.extraction.extra_ignore_words, vec!["Privilege".to_string()]);
        assert!(config.output.group_card_number);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = CardScanConfig::default();
        config.output.group_card_number = false;
        config.save(&path).unwrap();

        let loaded = CardScanConfig::from_file(&path).unwrap();
        assert!(!loaded.output.group_card_number);
    }

    #[test]
    fn test_invalid_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let err = CardScanConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, CardScanError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = CardScanConfig::from_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CardScanError::Io(_)));

        let err = CardScanConfig::default()
            .save(&dir.path().join("no-such-dir").join("config.json"))
            .unwrap_err();
        assert!(matches!(err, CardScanError::Io(_)));
    }
}
