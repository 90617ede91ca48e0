// SPDX-License-Identifier: MPL-2.0
//! Ingestion of dropped or picked files.
//!
//! Validation happens here at the boundary: every file must carry an
//! `image/*` type (judged by extension, the desktop stand-in for a browser
//! MIME check). Rejections are per-file and never abort the rest of a drop.
//! Accepted files become `Pending` entries; their dimensions resolve later
//! through the per-file decode task.

use crate::collage::Entry;
use std::path::{Path, PathBuf};

/// Extensions the ingestion pipeline accepts, with their MIME types.
const IMAGE_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("ico", "image/x-icon"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("webp", "image/webp"),
    ("svg", "image/svg+xml"),
];

/// Extension list for file dialog filters.
#[must_use]
pub fn dialog_extensions() -> Vec<&'static str> {
    IMAGE_TYPES.iter().map(|(ext, _)| *ext).collect()
}

/// Returns the MIME type for a file extension, if it is an image type.
#[must_use]
pub fn mime_for_extension(extension: &str) -> Option<&'static str> {
    let lower = extension.to_lowercase();
    IMAGE_TYPES
        .iter()
        .find(|(ext, _)| *ext == lower)
        .map(|(_, mime)| *mime)
}

/// Returns whether the path looks like an image file.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(mime_for_extension)
        .is_some_and(|mime| mime.starts_with("image/"))
}

/// Result of screening one dropped file.
#[derive(Debug)]
pub enum DropOutcome {
    /// The file was accepted; a `Pending` entry was created for it.
    Accepted { entry: Entry, path: PathBuf },
    /// The file is not an image; no entry was created.
    Rejected { file_name: String },
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Screens a batch of dropped files, creating a `Pending` entry per image
/// file and a rejection for everything else.
#[must_use]
pub fn screen_dropped_files(paths: Vec<PathBuf>) -> Vec<DropOutcome> {
    paths
        .into_iter()
        .map(|path| {
            let file_name = file_name_of(&path);
            if is_supported_image(&path) {
                DropOutcome::Accepted {
                    entry: Entry::new(file_name),
                    path,
                }
            } else {
                DropOutcome::Rejected { file_name }
            }
        })
        .collect()
}
