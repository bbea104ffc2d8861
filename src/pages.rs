use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::error::IndexError;

const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Collects the scanned page images under `root`, sorted lexicographically.
///
/// The sort order is the scan order: category propagation depends on pages
/// being processed exactly in this sequence, so the listing must be stable
/// and reproducible across runs.
///
/// # Errors
/// Returns [`IndexError::NoPages`] when no image is found, which aborts the
/// run before any OCR work starts.
pub fn collect_page_images(root: &Path) -> Result<Vec<PathBuf>, IndexError> {
    let mut pages: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| {
                    IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
                })
        })
        .collect();

    pages.sort();
    debug!("found {} page image(s) under {}", pages.len(), root.display());

    if pages.is_empty() {
        return Err(IndexError::NoPages(root.to_path_buf()));
    }

    Ok(pages)
}
