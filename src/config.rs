//! Configuration types for image-to-Markdown conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. Keeping every knob in one struct makes
//! it trivial to share configs across calls, serialise them for logging, and
//! diff two runs to understand why their outputs differ.
//!
//! # Design choice: builder over constructor
//! A many-field constructor is unreadable and breaks on every new field.
//! The builder pattern lets callers set only what they care about and rely on
//! well-documented defaults for the rest.

use crate::error::Scan2MdError;
use crate::progress::BatchProgressCallback;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Configuration for an image-to-Markdown conversion batch.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use scan2md::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .images_dir("scans")
///     .output_dir("md")
///     .bold_multiplier(0.75)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// Directory scanned for input images. Default: `"images"`.
    ///
    /// Only files with a `.png`, `.jpg`, `.jpeg`, `.tiff`, or `.bmp`
    /// extension (case-insensitive) are picked up; everything else is
    /// ignored silently.
    pub images_dir: PathBuf,

    /// Directory Markdown files are written to. Default: `"output"`.
    ///
    /// Created on demand. Each converted image produces
    /// `<output_dir>/<input-stem>.md`; two inputs sharing a stem (differing
    /// only in extension) overwrite each other's output. Known limitation.
    pub output_dir: PathBuf,

    /// Tesseract language codes, e.g. `"eng"` or `"eng+fra"`. Default: `"eng"`.
    pub language: String,

    /// OCR confidence cutoff on Tesseract's 0–100 scale. Default: 40.0.
    ///
    /// A word is accepted only when its confidence is *strictly* greater
    /// than this value. 40 drops most recognition noise (speckles, torn
    /// glyph fragments) while keeping genuinely faint print; raise it on
    /// clean scans to tighten output, lower it on poor ones to lose less
    /// text.
    pub min_confidence: f32,

    /// Sensitivity knob for bold detection. Default: 0.5.
    ///
    /// A word is bold when its ink density exceeds
    /// `mean + bold_multiplier × stddev` of the page's own densities.
    /// Higher values require stronger deviation from the page average,
    /// reducing false positives on noisy scans at the cost of missing
    /// lightly-bold text.
    pub bold_multiplier: f64,

    /// Tesseract page segmentation mode. Default: 3 (fully automatic).
    pub page_seg_mode: u32,

    /// Optional per-page progress callback.
    pub progress_callback: Option<Arc<dyn BatchProgressCallback>>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("images"),
            output_dir: PathBuf::from("output"),
            language: "eng".to_string(),
            min_confidence: 40.0,
            bold_multiplier: 0.5,
            page_seg_mode: 3,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("images_dir", &self.images_dir)
            .field("output_dir", &self.output_dir)
            .field("language", &self.language)
            .field("min_confidence", &self.min_confidence)
            .field("bold_multiplier", &self.bold_multiplier)
            .field("page_seg_mode", &self.page_seg_mode)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn BatchProgressCallback>"),
            )
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn images_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.images_dir = dir.into();
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn language(mut self, lang: impl Into<String>) -> Self {
        self.config.language = lang.into();
        self
    }

    pub fn min_confidence(mut self, conf: f32) -> Self {
        self.config.min_confidence = conf.clamp(0.0, 100.0);
        self
    }

    pub fn bold_multiplier(mut self, k: f64) -> Self {
        self.config.bold_multiplier = k.max(0.0);
        self
    }

    pub fn page_seg_mode(mut self, psm: u32) -> Self {
        self.config.page_seg_mode = psm;
        self
    }

    pub fn progress_callback(mut self, cb: Arc<dyn BatchProgressCallback>) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Scan2MdError> {
        let c = &self.config;
        if !c.bold_multiplier.is_finite() {
            return Err(Scan2MdError::InvalidConfig(format!(
                "Bold multiplier must be finite, got {}",
                c.bold_multiplier
            )));
        }
        if !(0.0..=100.0).contains(&c.min_confidence) {
            return Err(Scan2MdError::InvalidConfig(format!(
                "Confidence threshold must be 0–100, got {}",
                c.min_confidence
            )));
        }
        if c.language.trim().is_empty() {
            return Err(Scan2MdError::InvalidConfig(
                "Language must be a non-empty Tesseract language code".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_directory_convention() {
        let c = ConversionConfig::default();
        assert_eq!(c.images_dir, PathBuf::from("images"));
        assert_eq!(c.output_dir, PathBuf::from("output"));
        assert_eq!(c.language, "eng");
        assert_eq!(c.min_confidence, 40.0);
        assert_eq!(c.bold_multiplier, 0.5);
        assert_eq!(c.page_seg_mode, 3);
    }

    #[test]
    fn builder_clamps_out_of_range_values() {
        let c = ConversionConfig::builder()
            .min_confidence(250.0)
            .bold_multiplier(-1.0)
            .build()
            .unwrap();
        assert_eq!(c.min_confidence, 100.0);
        assert_eq!(c.bold_multiplier, 0.0);
    }

    #[test]
    fn build_rejects_empty_language() {
        let result = ConversionConfig::builder().language("  ").build();
        assert!(matches!(result, Err(Scan2MdError::InvalidConfig(_))));
    }

    #[test]
    fn debug_impl_skips_callback_internals() {
        let c = ConversionConfig::default();
        let dbg = format!("{c:?}");
        assert!(dbg.contains("images_dir"));
        assert!(dbg.contains("bold_multiplier"));
    }
}
