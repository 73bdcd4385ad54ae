//! Pipeline stages for image-to-Markdown conversion.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. a different binarization scheme) without
//! touching other stages.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ ocr ──▶ density ──▶ classify ──▶ assemble ──▶ postprocess
//! (dir scan) (words) (ink ratio)  (bold?)     (lines)      (cleanup)
//! ```
//!
//! 1. [`input`]    — collect image files from the input directory
//! 2. `crate::ocr` — recognize word tokens (external collaborator)
//! 3. [`density`]  — per-word ink density via region-adaptive binarization
//! 4. [`classify`] — page-relative bold threshold over accepted densities
//! 5. [`assemble`] — group words into Markdown paragraphs by line index
//! 6. [`postprocess`] — deterministic whitespace cleanup before writing

pub mod assemble;
pub mod classify;
pub mod density;
pub mod input;
pub mod postprocess;
