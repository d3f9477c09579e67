//! Diagram renderer - fills layout templates with key labels.

use crate::types::{Layer, LayerSet, LayoutTemplate};

use super::placeholder::{find_placeholders, PLACEHOLDER_WIDTH};

/// Key category prefix removed from labels (`KC_ESC` -> `ESC`).
pub const KEY_CATEGORY_PREFIX: &str = "KC_";

/// Format a key token as a fixed-width label.
///
/// The first `KC_` is removed, the rest is centered in a field as wide as a
/// placeholder and cut to that width.
pub fn key_label(token: &str) -> String {
    let label = token.replacen(KEY_CATEGORY_PREFIX, "", 1);
    center(&label, PLACEHOLDER_WIDTH)
        .chars()
        .take(PLACEHOLDER_WIDTH)
        .collect()
}

/// Center text in a field of `width` characters.
///
/// Odd padding puts the extra space on the right, except when both the
/// padding and the width are odd.
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = width - len;
    let left = pad / 2 + (pad & width & 1);
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}

/// Replace each placeholder in `template` with the label of its slot.
///
/// Placeholders are substituted in one left-to-right pass, so labels are
/// never re-scanned. Placeholders whose slot `key_for` does not know are
/// left untouched.
pub fn fill_template<'a, F>(template: &str, key_for: F) -> String
where
    F: Fn(usize) -> Option<&'a str>,
{
    let mut output = String::with_capacity(template.len());
    let mut copied = 0;

    for placeholder in find_placeholders(template) {
        if let Some(token) = key_for(placeholder.slot) {
            output.push_str(&template[copied..placeholder.range.start]);
            output.push_str(&key_label(token));
            copied = placeholder.range.end;
        }
    }

    output.push_str(&template[copied..]);
    output
}

/// Render a single layer into a template.
pub fn render_layer(template: &str, layer: &Layer) -> String {
    fill_template(template, |slot| layer.get(slot))
}

/// A layer rendered as a diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLayer {
    pub name: String,
    pub diagram: String,
}

/// Renders layers with one layout.
pub struct DiagramRenderer<'a> {
    layout: &'a LayoutTemplate,
}

impl<'a> DiagramRenderer<'a> {
    pub fn new(layout: &'a LayoutTemplate) -> Self {
        Self { layout }
    }

    /// Render one layer.
    pub fn render(&self, layer: &Layer) -> RenderedLayer {
        RenderedLayer {
            name: layer.name.clone(),
            diagram: render_layer(&self.layout.diagram, layer),
        }
    }

    /// Render every layer of a set, in source order.
    pub fn render_all(&self, layers: &LayerSet) -> Vec<RenderedLayer> {
        layers.iter().map(|layer| self.render(layer)).collect()
    }
}
