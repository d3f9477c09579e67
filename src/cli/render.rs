//! Render command implementation.
//!
//! Parses keymap sources and prints or writes one diagram per layer.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover_sources, is_keymap_source, Manifest};
use crate::error::{KeyartError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{DiagramRenderer, RenderedLayer};
use crate::types::{Layer, LayerSet};

use super::load_keymap;

/// Render keymap layers as keyboard diagrams
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Keymap sources, or directories to search for keymap.c
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Layout to render into (default from keyart.yaml, else EXTRA_WIDE)
    #[arg(long, short)]
    pub layout: Option<String>,

    /// Only render these layers (repeatable)
    #[arg(long = "layer")]
    pub layers: Vec<String>,

    /// Write one file per layer into this directory instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: RenderArgs, manifest: &Manifest, printer: &Printer) -> Result<()> {
    let registry = manifest.layout_registry();
    let layout = registry.get(args.layout.as_deref().unwrap_or(manifest.layout.as_str()))?;
    let renderer = DiagramRenderer::new(layout);
    let options = manifest.parser_options();
    let output_dir = args.output.as_ref().or(manifest.output.as_ref());

    if let Some(dir) = output_dir {
        fs::create_dir_all(dir).map_err(|e| KeyartError::Io {
            path: dir.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let sources = discover_sources(&args.paths, manifest)?;
    let mut total = 0;

    for source in &sources {
        let layers = load_keymap(source, &options, printer)?;
        let selected = select_layers(&layers, &args.layers)?;
        let rendered: Vec<RenderedLayer> = selected.iter().map(|l| renderer.render(l)).collect();

        match output_dir {
            Some(dir) => {
                for layer in &rendered {
                    let path = dir.join(output_file_name(source, &layer.name));
                    fs::write(&path, &layer.diagram).map_err(|e| KeyartError::Io {
                        path: path.clone(),
                        message: format!("Failed to write diagram: {}", e),
                    })?;
                    printer.status("Wrote", &display_path(&path));
                }
            }
            None => {
                for layer in &rendered {
                    println!("Layer {}", layer.name);
                    println!("{}", layer.diagram);
                }
            }
        }

        total += rendered.len();
    }

    printer.status(
        "Rendered",
        &format!(
            "{} from {} with {}",
            plural(total, "layer", "layers"),
            plural(sources.len(), "keymap", "keymaps"),
            printer.cyan(&layout.name)
        ),
    );

    Ok(())
}

/// Pick the requested layers, or all of them when none are named.
fn select_layers<'a>(layers: &'a LayerSet, names: &[String]) -> Result<Vec<&'a Layer>> {
    if names.is_empty() {
        return Ok(layers.iter().collect());
    }

    names
        .iter()
        .map(|name| {
            layers.get(name).ok_or_else(|| KeyartError::Config {
                message: format!("Unknown layer: {}", name),
                help: Some(format!(
                    "Layers in this keymap: {}",
                    layers.names().collect::<Vec<_>>().join(", ")
                )),
            })
        })
        .collect()
}

/// Output file for a layer: `<keymap>.<layer>.txt`.
///
/// A `keymap.c` is named after its directory (`keymaps/arlenk/keymap.c` ->
/// `arlenk`), any other file after its stem. Path separators in the layer
/// name become `_`.
fn output_file_name(source: &Path, layer: &str) -> String {
    let stem = if is_keymap_source(source) {
        source
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
    } else {
        source.file_stem().and_then(|n| n.to_str())
    };
    let layer: String = layer
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{}.{}.txt", stem.unwrap_or("keymap"), layer)
}
