pub mod check;
pub mod completions;
pub mod layouts;
pub mod parse;
pub mod render;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::error::{KeyartError, Result};
use crate::output::Printer;
use crate::parser::{parse_keymap_with, ParserOptions};
use crate::types::LayerSet;

/// keyart - QMK keymap diagram renderer
#[derive(Parser, Debug)]
#[command(name = "keyart")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to keyart.yaml (default: ./keyart.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Show debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render keymap layers as keyboard diagrams
    Render(render::RenderArgs),

    /// Print the layers parsed from a keymap
    Parse(parse::ParseArgs),

    /// Check that layers fit a layout
    Check(check::CheckArgs),

    /// List available layouts
    Layouts,

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Read and parse a keymap source, reporting each layer to the printer.
pub fn load_keymap(path: &Path, options: &ParserOptions, printer: &Printer) -> Result<LayerSet> {
    let source = fs::read_to_string(path).map_err(|e| KeyartError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;

    let mut observer = printer;
    parse_keymap_with(&source, options, &mut observer)
}
