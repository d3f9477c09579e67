//! Coverage checks between layers and a layout.
//!
//! Each check returns a `ValidationResult`. Rendering never depends on them.

use std::collections::BTreeSet;

use crate::types::{Layer, LayerSet, LayoutTemplate};

use super::warning::{Diagnostic, ValidationResult};

/// Format up to eight slot numbers, then a count of the rest.
fn slot_list(slots: &[usize]) -> String {
    const SHOWN: usize = 8;
    let mut list: Vec<String> = slots.iter().take(SHOWN).map(|s| s.to_string()).collect();
    if slots.len() > SHOWN {
        list.push(format!("and {} more", slots.len() - SHOWN));
    }
    list.join(", ")
}

/// Check for layers with no keys.
pub fn check_empty_layers(layers: &LayerSet) -> ValidationResult {
    let mut result = ValidationResult::new();

    for layer in layers {
        if layer.is_blank() {
            result.push(
                Diagnostic::error(
                    "keyart::check::empty-layer",
                    &layer.name,
                    format!("Layer '{}' has no keys", layer.name),
                )
                .with_help("List the layer's keys inside the constructor call"),
            );
        }
    }

    result
}

/// Check for slots the layout has no placeholder for.
pub fn check_unplaced_slots(layers: &LayerSet, layout: &LayoutTemplate) -> ValidationResult {
    let placed = layout.slots();
    let mut result = ValidationResult::new();

    for layer in layers {
        let unplaced: Vec<usize> = (0..layer.len()).filter(|s| !placed.contains(s)).collect();
        if !unplaced.is_empty() {
            result.push(
                Diagnostic::warning(
                    "keyart::check::unplaced-slot",
                    &layer.name,
                    format!(
                        "Layer '{}' has {} key(s) not shown by layout {}: slots {}",
                        layer.name,
                        unplaced.len(),
                        layout.name,
                        slot_list(&unplaced)
                    ),
                )
                .with_help("Pick a layout with more placeholders"),
            );
        }
    }

    result
}

/// Check for placeholders a layer leaves unfilled.
pub fn check_unfilled_placeholders(layers: &LayerSet, layout: &LayoutTemplate) -> ValidationResult {
    let placed = layout.slots();
    let mut result = ValidationResult::new();

    for layer in layers.iter().filter(|l| !l.is_blank()) {
        let unfilled = unfilled_slots(layer, &placed);
        if !unfilled.is_empty() {
            result.push(Diagnostic::warning(
                "keyart::check::unfilled-placeholder",
                &layer.name,
                format!(
                    "Layer '{}' leaves {} placeholder(s) of layout {} unfilled: slots {}",
                    layer.name,
                    unfilled.len(),
                    layout.name,
                    slot_list(&unfilled)
                ),
            ));
        }
    }

    result
}

fn unfilled_slots(layer: &Layer, placed: &BTreeSet<usize>) -> Vec<usize> {
    placed.iter().copied().filter(|&s| s >= layer.len()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layers(defs: &[(&str, usize)]) -> LayerSet {
        defs.iter()
            .map(|(name, n)| Layer::new(*name, (0..*n).map(|i| format!("KC_{}", i)).collect()))
            .collect()
    }

    fn tiny() -> LayoutTemplate {
        LayoutTemplate::new("TINY", "KEY_00 KEY_01 KEY_02")
    }

    #[test]
    fn test_exact_fit_is_clean() {
        let set = layers(&[("0", 3)]);

        assert!(check_unplaced_slots(&set, &tiny()).is_ok());
        assert!(check_unfilled_placeholders(&set, &tiny()).is_ok());
        assert!(check_empty_layers(&set).is_ok());
    }

    #[test]
    fn test_unplaced_slots() {
        let result = check_unplaced_slots(&layers(&[("0", 5)]), &tiny());

        let d = result.iter().next().unwrap();
        assert_eq!(d.code, "keyart::check::unplaced-slot");
        assert_eq!(d.layer, "0");
        assert!(d.message.ends_with("slots 3, 4"), "{}", d.message);
    }

    #[test]
    fn test_unfilled_placeholders() {
        let result = check_unfilled_placeholders(&layers(&[("0", 1), ("1", 3)]), &tiny());

        assert_eq!(result.warning_count(), 1);
        assert_eq!(result.iter().next().unwrap().layer, "0");
    }

    #[test]
    fn test_empty_layer_is_error() {
        let mut set = LayerSet::new();
        set.insert(Layer::new("EMPTY", vec![String::new()]));

        assert_eq!(check_empty_layers(&set).error_count(), 1);
        assert!(check_unfilled_placeholders(&set, &tiny()).is_ok());
    }

    #[test]
    fn test_slot_list_truncates() {
        let slots: Vec<usize> = (70..80).collect();

        assert_eq!(slot_list(&slots), "70, 71, 72, 73, 74, 75, 76, 77, and 2 more");
    }
}
