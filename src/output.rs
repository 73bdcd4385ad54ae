//! Result types returned by the conversion entry points.
//!
//! A batch run produces one [`PageOutcome`] per input image plus aggregate
//! [`BatchStats`]. Per-image soft conditions (no text) and failures live in
//! [`PageStatus`] so a single bad scan never discards the rest of the run.

use crate::error::PageError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What happened to a single input image.
#[derive(Debug, Serialize, Deserialize)]
pub struct PageOutcome {
    /// Path of the input image file.
    pub input: PathBuf,
    /// Path of the written Markdown file, when one was produced.
    pub output: Option<PathBuf>,
    /// Conversion status for this image.
    pub status: PageStatus,
}

impl PageOutcome {
    /// True when this image produced an output file.
    pub fn is_converted(&self) -> bool {
        matches!(self.status, PageStatus::Converted { .. })
    }
}

/// Per-image conversion status.
#[derive(Debug, Serialize, Deserialize)]
pub enum PageStatus {
    /// The image was converted and its Markdown written.
    Converted {
        /// The assembled Markdown text (also written to `output`).
        markdown: String,
        /// Words that passed the confidence/emptiness filter.
        accepted_words: usize,
        /// Accepted words classified as bold.
        bold_words: usize,
        /// Markdown paragraphs emitted.
        lines: usize,
    },
    /// OCR returned no usable tokens after filtering; no file written.
    NoText,
    /// The image failed; see the contained error. Batch continued.
    Failed(PageError),
}

/// Aggregate statistics for a batch run.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BatchStats {
    /// Image files found in the input directory.
    pub total_files: usize,
    /// Files that produced a Markdown output.
    pub converted: usize,
    /// Files where OCR found no usable text.
    pub no_text: usize,
    /// Files that failed with a [`PageError`].
    pub failed: usize,
    /// Accepted words across all converted pages.
    pub total_words: usize,
    /// Bold-classified words across all converted pages.
    pub bold_words: usize,
    /// Wall-clock duration of the whole batch in milliseconds.
    pub duration_ms: u64,
}

/// Everything a batch run produced.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchOutput {
    /// One outcome per input image, in processing order.
    pub pages: Vec<PageOutcome>,
    /// Aggregate statistics.
    pub stats: BatchStats,
}

impl BatchOutput {
    /// True when the input directory contained no matching image files.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
