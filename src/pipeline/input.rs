//! Input collection: find the image files a batch should process.
//!
//! Only the extension decides whether a file is picked up; no content
//! sniffing happens here. Decoding problems surface later as per-page
//! errors so one corrupt file cannot hide the rest of the directory.

use crate::error::Scan2MdError;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File extensions treated as page images (case-insensitive).
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "tiff", "bmp"];

/// Collect image files from `dir`, in directory-listing order.
///
/// The order is whatever the OS returns from `read_dir` — platform-dependent
/// and intentionally not sorted, since each file is processed independently.
/// An empty result is not an error; callers report "no images found" and
/// exit cleanly.
pub fn collect_image_files(dir: &Path) -> Result<Vec<PathBuf>, Scan2MdError> {
    let entries = std::fs::read_dir(dir).map_err(|e| Scan2MdError::InputDirNotFound {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Scan2MdError::InputDirNotFound {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if has_image_extension(&path) {
            files.push(path);
        }
    }

    debug!(count = files.len(), dir = %dir.display(), "Collected image files");
    Ok(files)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}
