//! keyart - QMK keymap diagram renderer
//!
//! A library for extracting the layer definitions of a QMK `keymap.c` and
//! drawing each layer into an ASCII-art keyboard layout.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;
pub mod validation;

pub use discovery::{discover_sources, find_manifest, Manifest};
pub use error::{KeyartError, Result};
pub use parser::{parse_keymap, parse_keymap_lines, parse_keymap_with, ParseObserver, ParserOptions, Silent};
pub use render::{fill_template, key_label, render_layer, DiagramRenderer, RenderedLayer};
pub use types::{BuiltinLayouts, Layer, LayerSet, LayoutRegistry, LayoutTemplate, DEFAULT_LAYOUT};
pub use validation::{check_coverage, Diagnostic, Severity, ValidationResult};
