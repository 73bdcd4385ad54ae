//! Progress-callback trait for per-image batch events.
//!
//! Inject an [`Arc<dyn BatchProgressCallback>`] via
//! [`crate::config::ConversionConfigBuilder::progress_callback`] to receive
//! events as the batch works through each image file.
//!
//! # Why callbacks instead of channels?
//!
//! The callback approach is the least-invasive integration point: callers can
//! forward events to a terminal progress bar, a log file, or a database record
//! without the library knowing anything about how the host application
//! communicates. The trait is `Send + Sync` so an `Arc` to it can be shared
//! freely even though the batch itself runs on a single thread.

use std::sync::Arc;

/// Called by the batch driver as it processes each image file.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. Events arrive strictly in order: images are
/// processed one at a time.
pub trait BatchProgressCallback: Send + Sync {
    /// Called once before any image is processed.
    ///
    /// # Arguments
    /// * `total_files` — number of image files that will be processed
    fn on_batch_start(&self, total_files: usize) {
        let _ = total_files;
    }

    /// Called just before an image is loaded and OCR'd.
    ///
    /// # Arguments
    /// * `file_num` — 1-indexed position in the batch
    /// * `total`    — total files in the batch
    /// * `name`     — file name of the image
    fn on_page_start(&self, file_num: usize, total: usize, name: &str) {
        let _ = (file_num, total, name);
    }

    /// Called when an image is successfully converted and written.
    ///
    /// # Arguments
    /// * `markdown_len` — byte length of the produced Markdown
    fn on_page_complete(&self, file_num: usize, total: usize, name: &str, markdown_len: usize) {
        let _ = (file_num, total, name, markdown_len);
    }

    /// Called when OCR found no usable text in an image. No output file is
    /// written for it.
    fn on_page_no_text(&self, file_num: usize, total: usize, name: &str) {
        let _ = (file_num, total, name);
    }

    /// Called when an image fails (decode error, OCR error, write error).
    fn on_page_error(&self, file_num: usize, total: usize, name: &str, error: &str) {
        let _ = (file_num, total, name, error);
    }

    /// Called once after all images have been attempted.
    ///
    /// # Arguments
    /// * `total_files` — files in the batch
    /// * `converted`   — files that produced an output Markdown file
    fn on_batch_complete(&self, total_files: usize, converted: usize) {
        let _ = (total_files, converted);
    }
}

/// A no-op implementation for callers that don't need progress events.
///
/// This is the default when no callback is configured.
pub struct NoopProgressCallback;

impl BatchProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ConversionConfig`].
pub type ProgressCallback = Arc<dyn BatchProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct TrackingCallback {
        starts: AtomicUsize,
        completes: AtomicUsize,
        no_text: AtomicUsize,
        errors: AtomicUsize,
        batch_total: AtomicUsize,
    }

    impl BatchProgressCallback for TrackingCallback {
        fn on_batch_start(&self, total_files: usize) {
            self.batch_total.store(total_files, Ordering::SeqCst);
        }

        fn on_page_start(&self, _n: usize, _t: usize, _name: &str) {
            self.starts.fetch_add(1, Ordering::SeqCst);
        }

        fn on_page_complete(&self, _n: usize, _t: usize, _name: &str, _len: usize) {
            self.completes.fetch_add(1, Ordering::SeqCst);
        }

        fn on_page_no_text(&self, _n: usize, _t: usize, _name: &str) {
            self.no_text.fetch_add(1, Ordering::SeqCst);
        }

        fn on_page_error(&self, _n: usize, _t: usize, _name: &str, _e: &str) {
            self.errors.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_batch_start(3);
        cb.on_page_start(1, 3, "a.png");
        cb.on_page_complete(1, 3, "a.png", 42);
        cb.on_page_no_text(2, 3, "b.png");
        cb.on_page_error(3, 3, "c.png", "decode failed");
        cb.on_batch_complete(3, 1);
    }

    #[test]
    fn tracking_callback_receives_events() {
        let tracker = TrackingCallback {
            starts: AtomicUsize::new(0),
            completes: AtomicUsize::new(0),
            no_text: AtomicUsize::new(0),
            errors: AtomicUsize::new(0),
            batch_total: AtomicUsize::new(0),
        };

        tracker.on_batch_start(3);
        tracker.on_page_start(1, 3, "a.png");
        tracker.on_page_complete(1, 3, "a.png", 100);
        tracker.on_page_start(2, 3, "b.png");
        tracker.on_page_no_text(2, 3, "b.png");
        tracker.on_page_start(3, 3, "c.png");
        tracker.on_page_error(3, 3, "c.png", "truncated file");

        assert_eq!(tracker.batch_total.load(Ordering::SeqCst), 3);
        assert_eq!(tracker.starts.load(Ordering::SeqCst), 3);
        assert_eq!(tracker.completes.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.no_text.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.errors.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: Arc<dyn BatchProgressCallback> = Arc::new(NoopProgressCallback);
        cb.on_batch_start(10);
        cb.on_page_start(1, 10, "x.png");
        cb.on_page_complete(1, 10, "x.png", 512);
    }
}
