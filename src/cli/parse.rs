//! Parse command implementation.
//!
//! Prints the layers found in a keymap, as a summary or as JSON.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::Manifest;
use crate::error::{KeyartError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::LayerSet;

use super::load_keymap;

/// Print the layers parsed from a keymap
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Keymap source file
    pub file: PathBuf,

    /// Print all layers as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ParseArgs, manifest: &Manifest, printer: &Printer) -> Result<()> {
    let layers = load_keymap(&args.file, &manifest.parser_options(), printer)?;

    if args.json {
        println!("{}", to_json(&layers, &args.file)?);
        return Ok(());
    }

    for layer in &layers {
        let keys = plural(layer.len(), "key", "keys");
        printer.info("Layer", &format!("{} {}", layer.name, printer.dim(&keys)));
    }
    printer.status(
        "Parsed",
        &format!("{} from {}", plural(layers.len(), "layer", "layers"), display_path(&args.file)),
    );

    Ok(())
}

fn to_json(layers: &LayerSet, file: &Path) -> Result<String> {
    serde_json::to_string_pretty(layers).map_err(|e| KeyartError::Io {
        path: file.to_path_buf(),
        message: format!("Failed to serialize layers: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Layer;

    #[test]
    fn test_to_json_keeps_source_order() {
        let layers: LayerSet = vec![
            Layer::new("SYMB", vec!["KC_1".to_string()]),
            Layer::new("BASE", vec!["KC_A".to_string(), "LT(1,KC_B)".to_string()]),
        ]
        .into_iter()
        .collect();

        let json = to_json(&layers, Path::new("keymap.c")).unwrap();

        let symb = json.find("\"SYMB\"").unwrap();
        let base = json.find("\"BASE\"").unwrap();
        assert!(symb < base);
        assert!(json.contains("\"1\": \"LT(1,KC_B)\""));
    }
}
