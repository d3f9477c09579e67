//! Configuration lookup and keymap source discovery.
//!
//! # Example
//!
//! ```ignore
//! use keyart::discovery::{find_manifest, discover_sources};
//!
//! let manifest = find_manifest(None)?;
//! let sources = discover_sources(&["qmk_firmware/keyboards/ergodox_ez".into()], &manifest)?;
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::{KeyartError, Result};

pub use manifest::Manifest;
pub use scanner::{is_keymap_source, scan_directory, KEYMAP_FILENAME};

/// The name of the project configuration file.
pub const MANIFEST_FILENAME: &str = "keyart.yaml";

/// Load the project configuration.
///
/// An explicit path must exist. Without one, `keyart.yaml` in the current
/// directory is used when present, and the defaults otherwise.
pub fn find_manifest(explicit: Option<&Path>) -> Result<Manifest> {
    match explicit {
        Some(path) => Manifest::load(path),
        None => load_manifest_in(Path::new(".")),
    }
}

/// Load `keyart.yaml` from a directory, falling back to defaults.
pub fn load_manifest_in(dir: &Path) -> Result<Manifest> {
    let path = dir.join(MANIFEST_FILENAME);
    if path.exists() {
        Manifest::load(&path)
    } else {
        Ok(Manifest::default())
    }
}

/// Expand command-line paths into keymap source files.
///
/// Files are kept as given; directories are scanned for `keymap.c`.
pub fn discover_sources(paths: &[PathBuf], manifest: &Manifest) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();

    for path in paths {
        if path.is_dir() {
            sources.extend(scan_directory(path, manifest));
        } else if path.is_file() {
            sources.push(path.clone());
        } else {
            return Err(KeyartError::Io {
                path: path.clone(),
                message: "No such file or directory".to_string(),
            });
        }
    }

    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_manifest_in_missing() {
        let dir = tempdir().unwrap();

        assert_eq!(load_manifest_in(dir.path()).unwrap(), Manifest::default());
    }

    #[test]
    fn test_load_manifest_in_present() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "layout: TINY\n").unwrap();

        assert_eq!(load_manifest_in(dir.path()).unwrap().layout, "TINY");
    }

    #[test]
    fn test_find_manifest_explicit_missing() {
        let err = find_manifest(Some(Path::new("/nonexistent/keyart.yaml"))).unwrap_err();

        assert!(matches!(err, KeyartError::Io { .. }));
    }

    #[test]
    fn test_discover_sources_mixes_files_and_dirs() {
        let dir = tempdir().unwrap();
        let single = dir.path().join("my_keymap.c");
        fs::write(&single, "").unwrap();
        let nested = dir.path().join("kb/keymaps/me");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("keymap.c"), "").unwrap();

        let sources =
            discover_sources(&[single.clone(), dir.path().join("kb")], &Manifest::default()).unwrap();

        assert_eq!(sources, vec![single, nested.join("keymap.c")]);
    }

    #[test]
    fn test_discover_sources_missing_path() {
        let result = discover_sources(&[PathBuf::from("/nonexistent/keymap.c")], &Manifest::default());

        assert!(matches!(result, Err(KeyartError::Io { .. })));
    }
}
