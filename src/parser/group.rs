//! Regrouping of extracted lines into one logical line per layer.

use super::span::Spanned;

/// Marker that starts a layer definition (`[NAME] = ...`).
const LAYER_MARKER: char = '[';

/// Join (potentially) multi-line layer definitions into one line per layer.
///
/// A layer starts at every line beginning with `[` and runs until the next
/// such line. Lines are trimmed and concatenated with no separator. Lines
/// before the first marker form a group of their own.
pub fn group_layer_definitions(lines: &[Spanned<String>]) -> Vec<Spanned<String>> {
    let mut layers: Vec<Spanned<String>> = Vec::new();
    let mut current: Option<Spanned<String>> = None;

    for line in lines {
        let trimmed = line.value.trim();

        if trimmed.starts_with(LAYER_MARKER) {
            layers.extend(current.take());
        }

        match current.as_mut() {
            Some(group) => {
                group.value.push_str(trimmed);
                group.span = group.span.merge(line.span);
            }
            None => current = Some(Spanned::new(trimmed.to_string(), line.span)),
        }
    }

    layers.extend(current);
    layers
}
