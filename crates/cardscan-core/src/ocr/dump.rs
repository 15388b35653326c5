//! Replaying recognized fragments from a dump file.
//!
//! A dump is either a JSON array of `{ "text", "region" }` objects (the raw
//! output of a recognizer) or plain text with one fragment per line.

use std::path::Path;

use tracing::debug;

use super::{RecognizedFragment, TextDetection};
use crate::error::OcrError;

/// Detector that reads previously recognized fragments from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FragmentDump;

impl TextDetection for FragmentDump {
    type Input = Path;

    fn detect_text(&self, input: &Path) -> Result<Vec<RecognizedFragment>, OcrError> {
        let content = std::fs::read_to_string(input)
            .map_err(|e| OcrError::Unreadable(format!("{}: {}", input.display(), e)))?;

        let fragments = parse_fragment_dump(&content)?;
        debug!("Loaded {} fragments from {}", fragments.len(), input.display());

        Ok(fragments)
    }
}

/// Parse dump content into fragments.
pub fn parse_fragment_dump(content: &str) -> Result<Vec<RecognizedFragment>, OcrError> {
    if content.trim_start().starts_with('[') {
        return serde_json::from_str(content).map_err(|e| OcrError::Unreadable(e.to_string()));
    }

    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(RecognizedFragment::text_only)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocr::Region;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_json_dump() {
        let content = r#"[
            {"text": "VISA", "region": {"x": 10.0, "y": 5.0, "width": 60.0, "height": 20.0}},
            {"text": "4111 1111 1111 1111"}
        ]"#;

        let fragments = parse_fragment_dump(content).unwrap();
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].region, Region::new(10.0, 5.0, 60.0, 20.0));
        assert_eq!(fragments[1].text, "4111 1111 1111 1111");
    }

    #[test]
    fn test_parse_line_dump_skips_blank_lines() {
        let fragments = parse_fragment_dump("VISA\n\n  JOHN DOE\n09/28\n").unwrap();
        let texts: Vec<&str> = fragments.iter().map(|f| f.text.as_str()).collect();

        assert_eq!(texts, vec!["VISA", "  JOHN DOE", "09/28"]);
    }

    #[test]
    fn test_malformed_json_is_unreadable() {
        let err = parse_fragment_dump("[{\"text\": 42}]").unwrap_err();
        assert!(matches!(err, OcrError::Unreadable(_)));
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = FragmentDump
            .detect_text(&dir.path().join("missing.json"))
            .unwrap_err();
        assert!(matches!(err, OcrError::Unreadable(_)));
    }
}
