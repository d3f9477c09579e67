//! Rendering module for keyart.
//!
//! Fills layout templates with key labels, one diagram per layer.

mod diagram;
mod placeholder;

pub use diagram::{fill_template, key_label, render_layer, DiagramRenderer, RenderedLayer, KEY_CATEGORY_PREFIX};
pub use placeholder::{find_placeholders, Placeholder, PLACEHOLDER_PREFIX, PLACEHOLDER_WIDTH};
