//! Recognized text fragments and the OCR collaborator seam.
//!
//! Recognition itself happens outside this crate (a platform vision
//! framework, an ONNX engine, a replayed dump). Whatever produces the
//! fragments implements [`TextDetection`].

mod dump;

pub use dump::{parse_fragment_dump, FragmentDump};

use serde::{Deserialize, Serialize};

use crate::error::OcrError;

/// Axis-aligned rectangle in image pixel space, origin at the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Region {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Convert a normalized bounding box with a bottom-left origin (the form
    /// vision frameworks report) to pixel coordinates with a top-left origin.
    pub fn from_normalized(bbox: Region, image_width: u32, image_height: u32) -> Self {
        let width = image_width as f32;
        let height = image_height as f32;

        Self {
            x: bbox.x * width,
            y: (1.0 - bbox.max_y()) * height,
            width: bbox.width * width,
            height: bbox.height * height,
        }
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }
}

/// One OCR hit: the recognized text and where it was found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedFragment {
    /// Recognized text content.
    pub text: String,

    /// Bounding region in image pixels.
    #[serde(default)]
    pub region: Region,
}

impl RecognizedFragment {
    pub fn new(text: impl Into<String>, region: Region) -> Self {
        Self {
            text: text.into(),
            region,
        }
    }

    /// Fragment with no known location.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self::new(text, Region::default())
    }
}

/// Texts of the fragments, in recognizer order.
pub fn fragment_texts(fragments: &[RecognizedFragment]) -> Vec<String> {
    fragments.iter().map(|f| f.text.clone()).collect()
}

/// The OCR collaborator: turns some input (an image, a pixel buffer, a file)
/// into recognized fragments. Fragment order must be preserved exactly as the
/// recognizer emitted it.
pub trait TextDetection {
    /// What the detector reads from.
    type Input: ?Sized;

    /// Recognize all text fragments in `input`.
    fn detect_text(&self, input: &Self::Input) -> Result<Vec<RecognizedFragment>, OcrError>;
}
