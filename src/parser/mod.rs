//! Parser for QMK keymap sources.
//!
//! Turns the `keymaps` array of a `keymap.c` into a `LayerSet` without a C
//! parser. The pipeline runs in four steps:
//!
//! 1. `extract` - find the declaration, strip comments, check its shape
//! 2. `group` - join multi-line layer definitions into one line each
//! 3. `layer` - split each line into a layer name and key tokens
//! 4. `tokens` - split constructor arguments at top-level commas
//!
//! # Usage
//!
//! ```ignore
//! use keyart::parser::parse_keymap;
//!
//! let source = std::fs::read_to_string("keymaps/arlenk/keymap.c")?;
//! let layers = parse_keymap(&source)?;
//!
//! for layer in &layers {
//!     println!("{}: {} keys", layer.name, layer.len());
//! }
//! ```

mod extract;
mod group;
mod layer;
mod observer;
mod options;
pub mod span;
mod tokens;

pub use extract::{extract_layer_definitions, DECLARATION_END, DECLARATION_START};
pub use group::group_layer_definitions;
pub use layer::parse_layer_line;
pub use observer::{ParseObserver, Silent};
pub use options::{ParserOptions, DEFAULT_CONSTRUCTORS};
pub use span::{LineSpan, Spanned};
pub use tokens::{split_key_tokens, KeyTokens};

use crate::error::{KeyartError, Result};
use crate::types::LayerSet;

/// Parse a keymap source with the default options.
pub fn parse_keymap(source: &str) -> Result<LayerSet> {
    parse_keymap_with(source, &ParserOptions::default(), &mut Silent)
}

/// Parse a keymap source.
pub fn parse_keymap_with(
    source: &str,
    options: &ParserOptions,
    observer: &mut dyn ParseObserver,
) -> Result<LayerSet> {
    let lines: Vec<&str> = source.lines().collect();
    parse_keymap_lines(&lines, options, observer)
}

/// Parse the layers of a keymap given as source lines.
pub fn parse_keymap_lines<S: AsRef<str>>(
    lines: &[S],
    options: &ParserOptions,
    observer: &mut dyn ParseObserver,
) -> Result<LayerSet> {
    let definitions = extract_layer_definitions(lines)?;
    let grouped = group_layer_definitions(&definitions);

    let mut layers = LayerSet::new();
    for line in &grouped {
        let layer = parse_layer_line(&line.value, options, observer)
            .map_err(|e| with_location(e, line.span))?;
        layers.insert(layer);
    }

    Ok(layers)
}

/// Point a parse error at the source lines it came from.
fn with_location(error: KeyartError, span: LineSpan) -> KeyartError {
    match error {
        KeyartError::Parse { message, help } => KeyartError::Parse {
            message: format!("{} ({})", message, span),
            help,
        },
        other => other,
    }
}
