//! Batch conversion entry points.
//!
//! [`convert_dir`] is the primary entry point: scan a directory of page
//! images, run each through the OCR → density → classify → assemble
//! pipeline, and write one Markdown file per converted image. Images are
//! processed strictly one at a time in directory-listing order; every
//! threshold and accumulator is page-local, so no state crosses image
//! boundaries.
//!
//! The `*_with_engine` variants accept any [`OcrEngine`] so callers (and
//! tests) can substitute their own collaborator; the plain variants
//! construct the default Tesseract engine from the config.

use crate::config::ConversionConfig;
use crate::error::{PageError, Scan2MdError};
use crate::ocr::{OcrEngine, TesseractEngine, WordToken};
use crate::output::{BatchOutput, BatchStats, PageOutcome, PageStatus};
use crate::pipeline::{assemble, classify, density, input, postprocess};
use image::GrayImage;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Parallel record pairing each OCR token with its acceptance decision and
/// ink density. One entry per token, indexed identically to the token
/// stream; rejected tokens carry density 0.0 and never influence the
/// threshold or the output.
struct ScoredWord {
    token: WordToken,
    accepted: bool,
    density: f64,
}

/// Convert every image in `config.images_dir` and write Markdown files to
/// `config.output_dir`.
///
/// # Returns
/// `Ok(BatchOutput)` on success, even if some images failed
/// (check `output.stats.failed`). An input directory with no matching
/// image files yields an empty `BatchOutput`, not an error.
///
/// # Errors
/// Returns `Err(Scan2MdError)` only for fatal conditions:
/// - Input directory missing or unreadable
/// - Output directory cannot be created
/// - OCR engine fails to initialise
pub fn convert_dir(config: &ConversionConfig) -> Result<BatchOutput, Scan2MdError> {
    let mut engine = resolve_engine(config)?;
    convert_dir_with_engine(&mut engine, config)
}

/// [`convert_dir`] with a caller-supplied OCR engine.
pub fn convert_dir_with_engine(
    engine: &mut dyn OcrEngine,
    config: &ConversionConfig,
) -> Result<BatchOutput, Scan2MdError> {
    let batch_start = Instant::now();

    let files = input::collect_image_files(&config.images_dir)?;
    if files.is_empty() {
        info!("No images found in {}", config.images_dir.display());
        return Ok(BatchOutput {
            pages: Vec::new(),
            stats: BatchStats {
                duration_ms: batch_start.elapsed().as_millis() as u64,
                ..BatchStats::default()
            },
        });
    }

    std::fs::create_dir_all(&config.output_dir).map_err(|e| Scan2MdError::OutputDirCreate {
        path: config.output_dir.clone(),
        source: e,
    })?;

    let total = files.len();
    if let Some(ref cb) = config.progress_callback {
        cb.on_batch_start(total);
    }

    let mut pages = Vec::with_capacity(total);
    let mut stats = BatchStats {
        total_files: total,
        ..BatchStats::default()
    };

    for (i, path) in files.iter().enumerate() {
        let file_num = i + 1;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if let Some(ref cb) = config.progress_callback {
            cb.on_page_start(file_num, total, &name);
        }

        let (status, output_path) = match process_image(engine, path, config) {
            PageStatus::Converted {
                markdown,
                accepted_words,
                bold_words,
                lines,
            } => {
                let out = output_path_for(path, &config.output_dir);
                match write_markdown(&out, &markdown) {
                    Ok(()) => {
                        info!("Saved results to {}", out.display());
                        (
                            PageStatus::Converted {
                                markdown,
                                accepted_words,
                                bold_words,
                                lines,
                            },
                            Some(out),
                        )
                    }
                    Err(e) => {
                        warn!("Failed to write {}: {}", out.display(), e);
                        (PageStatus::Failed(e), None)
                    }
                }
            }
            other => (other, None),
        };

        match &status {
            PageStatus::Converted {
                markdown,
                accepted_words,
                bold_words,
                ..
            } => {
                stats.converted += 1;
                stats.total_words += accepted_words;
                stats.bold_words += bold_words;
                if let Some(ref cb) = config.progress_callback {
                    cb.on_page_complete(file_num, total, &name, markdown.len());
                }
            }
            PageStatus::NoText => {
                stats.no_text += 1;
                if let Some(ref cb) = config.progress_callback {
                    cb.on_page_no_text(file_num, total, &name);
                }
            }
            PageStatus::Failed(e) => {
                stats.failed += 1;
                if let Some(ref cb) = config.progress_callback {
                    cb.on_page_error(file_num, total, &name, &e.to_string());
                }
            }
        }

        pages.push(PageOutcome {
            input: path.clone(),
            output: output_path,
            status,
        });
    }

    stats.duration_ms = batch_start.elapsed().as_millis() as u64;
    info!(
        "Batch complete: {}/{} images converted in {}ms",
        stats.converted, stats.total_files, stats.duration_ms
    );

    if let Some(ref cb) = config.progress_callback {
        cb.on_batch_complete(total, stats.converted);
    }

    Ok(BatchOutput { pages, stats })
}

/// Convert a single page image to Markdown without writing a file.
///
/// The returned outcome's `output` field is always `None`; use
/// [`convert_dir`] for file output.
pub fn convert_page(
    path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<PageOutcome, Scan2MdError> {
    let mut engine = resolve_engine(config)?;
    Ok(convert_page_with_engine(&mut engine, path, config))
}

/// [`convert_page`] with a caller-supplied OCR engine.
pub fn convert_page_with_engine(
    engine: &mut dyn OcrEngine,
    path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> PageOutcome {
    let path = path.as_ref();
    PageOutcome {
        input: path.to_path_buf(),
        output: None,
        status: process_image(engine, path, config),
    }
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// Construct the default Tesseract engine from the config.
fn resolve_engine(config: &ConversionConfig) -> Result<TesseractEngine, Scan2MdError> {
    TesseractEngine::new(&config.language, config.page_seg_mode).map_err(|e| {
        Scan2MdError::OcrInit {
            language: config.language.clone(),
            detail: e.to_string(),
        }
    })
}

/// Run the per-page pipeline: decode → grayscale → OCR → accept-filter →
/// densities → bold threshold → assemble.
fn process_image(
    engine: &mut dyn OcrEngine,
    path: &Path,
    config: &ConversionConfig,
) -> PageStatus {
    info!("Processing {}", path.display());

    let img = match image::open(path) {
        Ok(img) => img,
        Err(e) => {
            return PageStatus::Failed(PageError::ImageLoad {
                path: path.to_path_buf(),
                detail: e.to_string(),
            })
        }
    };
    let gray = img.to_luma8();

    let tokens = match engine.recognize_words(&gray) {
        Ok(tokens) => tokens,
        Err(e) => {
            return PageStatus::Failed(PageError::Ocr {
                path: path.to_path_buf(),
                detail: e.to_string(),
            })
        }
    };

    // Pass one: score every token, keeping the records index-aligned with
    // the token stream.
    let scored = score_tokens(&gray, tokens, config.min_confidence);

    let accepted: Vec<f64> = scored
        .iter()
        .filter(|s| s.accepted)
        .map(|s| s.density)
        .collect();
    if accepted.is_empty() {
        info!("No text found in {}", path.display());
        return PageStatus::NoText;
    }

    // The threshold is recomputed from this page's own densities; no state
    // crosses image boundaries.
    let threshold = classify::bold_threshold(&accepted, config.bold_multiplier);
    debug!(
        threshold,
        words = accepted.len(),
        "Bold threshold computed"
    );

    // Pass two: consume only accepted records, in emission order.
    let mut bold_words = 0usize;
    let markdown = assemble::assemble(scored.iter().filter(|s| s.accepted).map(|s| {
        let bold = classify::is_bold(s.density, threshold);
        if bold {
            bold_words += 1;
        }
        (s.token.text.as_str(), bold, s.token.line_index)
    }));
    let markdown = postprocess::clean_markdown(&markdown);
    let lines = markdown.trim_end().split("\n\n").count();

    PageStatus::Converted {
        markdown,
        accepted_words: accepted.len(),
        bold_words,
        lines,
    }
}

/// Score every token: accept it only when its confidence strictly exceeds
/// the cutoff AND its trimmed text is non-empty, and compute the ink
/// density for accepted tokens only.
fn score_tokens(gray: &GrayImage, tokens: Vec<WordToken>, min_confidence: f32) -> Vec<ScoredWord> {
    tokens
        .into_iter()
        .map(|token| {
            let accepted =
                token.confidence > min_confidence && !token.text.trim().is_empty();
            let density = if accepted {
                density::estimate_density(gray, &token.bbox)
            } else {
                0.0
            };
            ScoredWord {
                token,
                accepted,
                density,
            }
        })
        .collect()
}

/// Derive the output path: `<output_dir>/<input-stem>.md`.
///
/// Two inputs sharing a stem (differing only in extension) map to the same
/// output file and silently overwrite each other. Known limitation.
fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    let mut name = stem.to_os_string();
    name.push(".md");
    output_dir.join(name)
}

/// Atomic write: temp file in the target directory, then rename, so a
/// crash mid-write never leaves a partial `.md` behind.
fn write_markdown(path: &Path, markdown: &str) -> Result<(), PageError> {
    let tmp = path.with_extension("md.tmp");
    std::fs::write(&tmp, markdown).map_err(|e| PageError::OutputWrite {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    std::fs::rename(&tmp, path).map_err(|e| PageError::OutputWrite {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}
