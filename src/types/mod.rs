//! Core domain types for keyart.
//!
//! - `Layer` / `LayerSet` - parsed keymap layers
//! - `LayoutTemplate` - ASCII-art diagrams with `KEY_NN` placeholders
//! - `BuiltinLayouts` / `LayoutRegistry` - named layouts

mod layer;
mod layout;

pub use layer::{Layer, LayerSet};
pub use layout::{BuiltinLayouts, LayoutRegistry, LayoutTemplate, DEFAULT_LAYOUT};
