//! Input Collection
//!
//! Expands file paths, directories and glob patterns into the ordered list
//! of images to process. Overlapping inputs are not deduplicated.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Recognized image extensions (matched case-insensitively, without the dot)
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "tiff", "bmp", "gif"];

/// Check whether a path has a recognized image extension
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

/// Resolve every raw input, in the order given, into image paths.
///
/// - an existing image file is taken as-is
/// - an existing directory contributes every image below it, sorted
/// - anything else is treated as a glob pattern relative to the working directory
///
/// Inputs that match nothing are not an error here.
pub fn collect_image_paths<S: AsRef<str>>(inputs: &[S]) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    for raw in inputs {
        let raw = raw.as_ref();
        let path = Path::new(raw);
        let before = paths.len();

        if path.is_file() && is_image_path(path) {
            paths.push(path.to_path_buf());
        } else if path.is_dir() {
            let mut found = Vec::new();
            walk_dir(path, &mut found);
            found.sort();
            paths.extend(found.into_iter().filter(|p| is_image_path(p)));
        } else {
            paths.extend(expand_glob(raw));
        }

        debug!("Input {:?} matched {} image(s)", raw, paths.len() - before);
    }

    paths
}

/// Recursively gather regular files below `dir`. Symlinked directories are
/// not followed.
fn walk_dir(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Skipping unreadable directory {:?}: {}", dir, e);
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                continue;
            }
        };
        let path = entry.path();
        let is_symlink = entry.file_type().map(|t| t.is_symlink()).unwrap_or(false);

        if path.is_dir() {
            if !is_symlink {
                walk_dir(&path, out);
            }
        } else if path.is_file() {
            out.push(path);
        }
    }
}

/// Expand a glob pattern into sorted image files
fn expand_glob(pattern: &str) -> Vec<PathBuf> {
    let matches = match glob::glob(pattern) {
        Ok(matches) => matches,
        Err(e) => {
            warn!("Ignoring invalid glob pattern {:?}: {}", pattern, e);
            return Vec::new();
        }
    };

    let mut found: Vec<PathBuf> = matches
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping unreadable glob match: {}", e);
                None
            }
        })
        .filter(|path| path.is_file() && is_image_path(path))
        .collect();
    found.sort();
    found
}
