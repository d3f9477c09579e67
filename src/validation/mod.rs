//! Coverage checks for parsed keymaps.
//!
//! Compares a `LayerSet` with the layout it is rendered into and reports
//! errors and warnings. Used by `keyart check`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::output::Printer;
use crate::types::{LayerSet, LayoutTemplate};

/// Run all checks for a layer set and layout.
pub fn check_coverage(layers: &LayerSet, layout: &LayoutTemplate) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_empty_layers(layers));
    result.merge(checks::check_unplaced_slots(layers, layout));
    result.merge(checks::check_unfilled_placeholders(layers, layout));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        eprintln!("  {}[{}]: {}", printer.severity(d.severity), d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    {} {}", printer.dim("help:"), help);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BuiltinLayouts, Layer, DEFAULT_LAYOUT};

    #[test]
    fn test_full_ergodox_layer_is_clean() {
        let layout = BuiltinLayouts::get(DEFAULT_LAYOUT).unwrap();
        let layers: LayerSet = vec![Layer::new("0", vec!["KC_TRNS".to_string(); 76])]
            .into_iter()
            .collect();

        assert!(check_coverage(&layers, &layout).is_ok());
    }

    #[test]
    fn test_short_layer_warns() {
        let layout = BuiltinLayouts::get(DEFAULT_LAYOUT).unwrap();
        let layers: LayerSet = vec![Layer::new("0", vec!["KC_A".to_string(); 10])]
            .into_iter()
            .collect();

        let result = check_coverage(&layers, &layout);

        assert!(!result.has_errors());
        assert_eq!(result.warning_count(), 1);
    }
}
