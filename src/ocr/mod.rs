//! OCR collaborator interface.
//!
//! The pipeline does no text detection or character recognition itself; it
//! consumes word tokens from an [`OcrEngine`]. The contract is deliberately
//! small so any engine can be substituted: per recognized word the engine
//! reports the text, a confidence score on Tesseract's 0–100 scale, a pixel
//! bounding box, and a line index grouping words into visual lines.
//!
//! The default implementation is [`TesseractEngine`], which drives
//! Tesseract 5.x through the `leptess` bindings and parses its TSV output.
//! Tests substitute an in-memory fake.

mod tesseract;

pub use tesseract::TesseractEngine;

use image::GrayImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pixel bounding box of a recognized word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordBox {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

impl WordBox {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Pixel area of the box.
    pub const fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }
}

/// A single recognized word as reported by the OCR collaborator.
///
/// Immutable once created; discarded after its page is processed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordToken {
    /// Recognized text, as emitted by the engine (not trimmed).
    pub text: String,
    /// Recognition confidence, 0–100.
    pub confidence: f32,
    /// Pixel bounding box within the source image.
    pub bbox: WordBox,
    /// Visual-line grouping key. Only transitions between consecutive
    /// tokens matter; the value need not be globally unique across a page.
    pub line_index: u32,
}

/// Errors raised by an OCR engine.
#[derive(Debug, Error)]
pub enum OcrError {
    /// Engine construction failed (missing language data, bad install).
    #[error("Failed to initialize Tesseract: {0}")]
    Init(String),

    /// Recognition failed on an image.
    #[error("Failed to run OCR: {0}")]
    Recognition(String),
}

/// An OCR engine that recognizes words in a grayscale page image.
///
/// Implementations must report tokens in reading/emission order: the
/// assembler groups words into lines purely by `line_index` transitions
/// between consecutive tokens.
pub trait OcrEngine {
    /// Recognize all words in `gray`, in emission order.
    fn recognize_words(&mut self, gray: &GrayImage) -> Result<Vec<WordToken>, OcrError>;
}

/// Parse Tesseract TSV output into word tokens.
///
/// Tesseract emits one row per layout element; the columns are
/// `level page_num block_num par_num line_num word_num left top width height
/// conf text`. Only level-5 rows are words; lower levels are structural
/// (page/block/paragraph/line) and carry `conf` −1 and no text. Malformed
/// rows are skipped rather than failing the page.
pub(crate) fn parse_tsv(tsv: &str) -> Vec<WordToken> {
    let mut tokens = Vec::new();

    for line in tsv.lines() {
        let mut fields = line.splitn(12, '\t');
        let Some(level) = fields.next().and_then(|f| f.parse::<u32>().ok()) else {
            // Header row or junk.
            continue;
        };
        if level != 5 {
            continue;
        }

        let parsed = (|| {
            let _page_num = fields.next()?;
            let _block_num = fields.next()?;
            let _par_num = fields.next()?;
            let line_num = fields.next()?.trim().parse::<u32>().ok()?;
            let _word_num = fields.next()?;
            let x = fields.next()?.trim().parse::<u32>().ok()?;
            let y = fields.next()?.trim().parse::<u32>().ok()?;
            let w = fields.next()?.trim().parse::<u32>().ok()?;
            let h = fields.next()?.trim().parse::<u32>().ok()?;
            let conf = fields.next()?.trim().parse::<f32>().ok()?;
            let text = fields.next()?.trim_end_matches('\r').to_string();
            Some((line_num, x, y, w, h, conf, text))
        })();

        let Some((line_num, x, y, w, h, conf, text)) = parsed else {
            continue;
        };

        tokens.push(WordToken {
            text,
            confidence: conf,
            bbox: WordBox::new(x, y, w, h),
            line_index: line_num,
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_TSV: &str = "\
1\t1\t0\t0\t0\t0\t0\t0\t640\t480\t-1\t\n\
2\t1\t1\t0\t0\t0\t36\t92\t300\t60\t-1\t\n\
4\t1\t1\t1\t1\t0\t36\t92\t300\t24\t-1\t\n\
5\t1\t1\t1\t1\t1\t36\t92\t60\t24\t96.06\tHello\n\
5\t1\t1\t1\t1\t2\t104\t92\t72\t24\t91.50\tWorld\n\
5\t1\t1\t1\t2\t1\t36\t128\t48\t24\t88.00\tNext\n";

    #[test]
    fn parses_word_rows_only() {
        let tokens = parse_tsv(SAMPLE_TSV);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "Hello");
        assert_eq!(tokens[0].confidence, 96.06);
        assert_eq!(tokens[0].bbox, WordBox::new(36, 92, 60, 24));
        assert_eq!(tokens[0].line_index, 1);
        assert_eq!(tokens[2].line_index, 2);
    }

    #[test]
    fn emission_order_is_preserved() {
        let tokens = parse_tsv(SAMPLE_TSV);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Hello", "World", "Next"]);
    }

    #[test]
    fn header_and_malformed_rows_are_skipped() {
        let tsv = "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext\n\
                   5\t1\t1\t1\tnot-a-number\t1\t0\t0\t10\t10\t80\tbroken\n\
                   5\t1\t1\t1\t1\t1\t0\t0\t10\t10\t80\tok\n\
                   5\t1\t1\n";
        let tokens = parse_tsv(tsv);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "ok");
    }

    #[test]
    fn word_text_is_not_trimmed_by_the_parser() {
        // Leading/trailing spaces inside the text column survive parsing;
        // the acceptance filter owns the trimming policy.
        let tsv = "5\t1\t1\t1\t1\t1\t0\t0\t10\t10\t80\t  spaced \n";
        let tokens = parse_tsv(tsv);
        assert_eq!(tokens[0].text, "  spaced ");
    }

    #[test]
    fn empty_tsv_yields_no_tokens() {
        assert!(parse_tsv("").is_empty());
    }

    #[test]
    fn box_area() {
        assert_eq!(WordBox::new(0, 0, 10, 4).area(), 40);
        assert_eq!(WordBox::new(5, 5, 0, 4).area(), 0);
    }
}
