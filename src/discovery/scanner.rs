//! File system scanner for keymap sources.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// File name QMK uses for keymap sources.
pub const KEYMAP_FILENAME: &str = "keymap.c";

/// Recursively find `keymap.c` files under a directory.
///
/// Results are sorted so output order does not depend on the file system.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_keymap_source(path))
        .filter(|path| !manifest.is_excluded(path.strip_prefix(root).unwrap_or(path.as_path())))
        .collect();

    found.sort();
    found
}

/// Check if a path names a keymap source.
pub fn is_keymap_source(path: &Path) -> bool {
    path.file_name().and_then(|n| n.to_str()) == Some(KEYMAP_FILENAME)
}
