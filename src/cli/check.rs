//! Check command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover_sources, Manifest};
use crate::error::{KeyartError, Result};
use crate::output::{display_path, plural, Printer};
use crate::validation::{check_coverage, print_diagnostics, ValidationResult};

use super::load_keymap;

/// Check that keymap layers fit a layout
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Keymap sources, or directories to search for keymap.c
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Layout to check against
    #[arg(long, short)]
    pub layout: Option<String>,
}

pub fn run(args: CheckArgs, manifest: &Manifest, printer: &Printer) -> Result<()> {
    let registry = manifest.layout_registry();
    let layout = registry.get(args.layout.as_deref().unwrap_or(manifest.layout.as_str()))?;
    let options = manifest.parser_options();

    let mut total = ValidationResult::new();
    for source in discover_sources(&args.paths, manifest)? {
        let layers = load_keymap(&source, &options, printer)?;
        let result = check_coverage(&layers, layout);

        if result.is_ok() {
            printer.status("Checked", &display_path(&source));
        } else {
            printer.warning("Checked", &display_path(&source));
            print_diagnostics(&result, printer);
        }
        total.merge(result);
    }

    let summary = format!(
        "{}, {}",
        plural(total.error_count(), "error", "errors"),
        plural(total.warning_count(), "warning", "warnings")
    );

    if total.has_errors() {
        printer.error("Failed", &summary);
        return Err(KeyartError::Check {
            message: summary,
            help: Some("Fix the errors above; warnings alone do not fail the check".to_string()),
        });
    }

    printer.status("Finished", &summary);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_keymap(body: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keymap.c");
        fs::write(
            &path,
            format!("const uint16_t PROGMEM keymaps[][MATRIX_ROWS][MATRIX_COLS] = {{\n{}\n}};\n", body),
        )
        .unwrap();
        (dir, path)
    }

    #[test]
    fn test_check_warnings_pass() {
        let (_dir, path) = write_keymap("[0] = KEYMAP(KC_A, KC_B),");

        let args = CheckArgs {
            paths: vec![path],
            layout: None,
        };

        assert!(run(args, &Manifest::default(), &Printer::plain()).is_ok());
    }

    #[test]
    fn test_check_empty_layer_fails() {
        let (_dir, path) = write_keymap("[0] = KEYMAP(),");

        let args = CheckArgs {
            paths: vec![path],
            layout: None,
        };

        assert!(matches!(
            run(args, &Manifest::default(), &Printer::plain()),
            Err(KeyartError::Check { .. })
        ));
    }
}
