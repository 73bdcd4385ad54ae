//! Tesseract 5.x engine via the `leptess` bindings.
//!
//! Tesseract's C API consumes an encoded image (leptonica decodes it), so
//! each page is PNG-encoded in memory before recognition. Word-level
//! results come from the TSV renderer, which carries everything the
//! pipeline needs in one call: text, confidence, box, and line number.

use super::{parse_tsv, OcrEngine, OcrError, WordToken};
use image::{GrayImage, ImageFormat};
use leptess::{LepTess, Variable};
use std::io::Cursor;
use tracing::debug;

/// OCR engine backed by a persistent Tesseract instance.
///
/// Construction loads the language data once; `recognize_words` can then be
/// called for every page in the batch.
pub struct TesseractEngine {
    lt: LepTess,
}

impl TesseractEngine {
    /// Initialise Tesseract for `language` (e.g. `"eng"`, `"eng+fra"`) with
    /// the given page segmentation mode.
    pub fn new(language: &str, page_seg_mode: u32) -> Result<Self, OcrError> {
        let mut lt = LepTess::new(None, language).map_err(|e| {
            OcrError::Init(format!(
                "language '{}' could not be loaded: {}",
                language, e
            ))
        })?;

        lt.set_variable(Variable::TesseditPagesegMode, &page_seg_mode.to_string())
            .map_err(|e| OcrError::Init(format!("failed to set PSM: {}", e)))?;

        Ok(Self { lt })
    }
}

impl OcrEngine for TesseractEngine {
    fn recognize_words(&mut self, gray: &GrayImage) -> Result<Vec<WordToken>, OcrError> {
        let mut png_buf = Cursor::new(Vec::new());
        gray.write_to(&mut png_buf, ImageFormat::Png)
            .map_err(|e| OcrError::Recognition(format!("PNG encoding failed: {}", e)))?;

        self.lt
            .set_image_from_mem(png_buf.get_ref())
            .map_err(|e| OcrError::Recognition(format!("failed to set image: {}", e)))?;

        let tsv = self
            .lt
            .get_tsv_text(0)
            .map_err(|e| OcrError::Recognition(format!("TSV output not valid UTF-8: {}", e)))?;

        let tokens = parse_tsv(&tsv);
        debug!(words = tokens.len(), "Tesseract recognition complete");
        Ok(tokens)
    }
}
