//! # scan2md
//!
//! Convert scanned page images to Markdown, inferring **bold** emphasis
//! from visual ink density rather than font metadata.
//!
//! ## Why this crate?
//!
//! OCR engines report what the text *says*, not how heavy it was printed.
//! Font-metadata approaches need a digital original; a scan has only
//! pixels. This crate measures how much of each word's bounding box is
//! covered in ink after per-word adaptive binarization, then marks as bold
//! the words whose ink density stands out from their own page's
//! distribution — robust across scan contrast, resolution, and typeface.
//!
//! ## Pipeline Overview
//!
//! ```text
//! images/
//!  │
//!  ├─ 1. Scan     collect .png/.jpg/.jpeg/.tiff/.bmp files
//!  ├─ 2. OCR      word boxes + confidences + line indices (Tesseract)
//!  ├─ 3. Density  per-word ink ratio via region-adaptive Otsu threshold
//!  ├─ 4. Classify page-relative bold cutoff (mean + k·stddev)
//!  ├─ 5. Assemble line-grouped Markdown with **bold** markers
//!  └─ 6. Output   one <stem>.md per converted image
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scan2md::{convert_dir, ConversionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::builder()
//!         .images_dir("images")
//!         .output_dir("output")
//!         .build()?;
//!     let batch = convert_dir(&config)?;
//!     eprintln!(
//!         "{}/{} images converted, {} bold words",
//!         batch.stats.converted, batch.stats.total_files, batch.stats.bold_words
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Substituting the OCR engine
//!
//! The pipeline only post-processes OCR output; recognition itself is
//! delegated through the [`OcrEngine`] trait. The default is Tesseract via
//! `leptess`, but any engine that reports per-word text, a 0–100
//! confidence, a pixel box, and a line index can be plugged into the
//! `*_with_engine` entry points.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `scan2md` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! scan2md = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod ocr;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder};
pub use convert::{convert_dir, convert_dir_with_engine, convert_page, convert_page_with_engine};
pub use error::{PageError, Scan2MdError};
pub use ocr::{OcrEngine, OcrError, TesseractEngine, WordBox, WordToken};
pub use output::{BatchOutput, BatchStats, PageOutcome, PageStatus};
pub use progress::{BatchProgressCallback, NoopProgressCallback, ProgressCallback};
