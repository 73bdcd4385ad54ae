//! Error types for the scan2md library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`Scan2MdError`] — **Fatal**: the batch cannot proceed at all
//!   (input directory missing, output directory cannot be created, the OCR
//!   engine fails to initialise). Returned as `Err(Scan2MdError)` from the
//!   top-level `convert*` functions.
//!
//! * [`PageError`] — **Non-fatal**: a single image failed (undecodable
//!   file, OCR glitch, write failure) but all other images are fine. Stored
//!   inside [`crate::output::PageOutcome`] so callers can inspect partial
//!   success rather than losing the whole batch to one bad scan.
//!
//! Soft conditions are not errors at all: a page with no usable text yields
//! [`crate::output::PageStatus::NoText`], and a directory with no matching
//! images yields an empty [`crate::output::BatchOutput`].

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the scan2md library.
///
/// Per-image failures use [`PageError`] and are stored in
/// [`crate::output::PageOutcome`] rather than propagated here.
#[derive(Debug, Error)]
pub enum Scan2MdError {
    /// Input directory was not found or could not be listed.
    #[error("Image directory not found: '{path}'\nCheck the path exists and is readable.")]
    InputDirNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not create the output directory. Without a write target the
    /// batch cannot produce anything, so this aborts the run.
    #[error("Failed to create output directory '{path}': {source}")]
    OutputDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Tesseract failed to initialise (missing language data, bad install).
    #[error(
        "Failed to initialise OCR engine for language '{language}': {detail}\n\
         Make sure Tesseract language data is installed \
         (e.g. 'apt install tesseract-ocr-eng' or 'brew install tesseract-lang')."
    )]
    OcrInit { language: String, detail: String },

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A non-fatal error for a single page image.
///
/// Stored in [`crate::output::PageOutcome`] when an image fails. The batch
/// continues with the remaining images.
#[derive(Debug, Error, serde::Serialize, serde::Deserialize)]
pub enum PageError {
    /// The file exists but could not be decoded as an image.
    #[error("Could not read image '{path}': {detail}")]
    ImageLoad { path: PathBuf, detail: String },

    /// The OCR engine returned an error for this image.
    #[error("OCR failed on '{path}': {detail}")]
    Ocr { path: PathBuf, detail: String },

    /// Could not write the output Markdown file.
    #[error("Failed to write output file '{path}': {detail}")]
    OutputWrite { path: PathBuf, detail: String },
}
