//! Placeholder scanning for layout templates.
//!
//! Placeholders are `KEY_` followed by exactly two decimal digits, the
//! zero-padded slot index (`KEY_00` .. `KEY_99`).

use std::ops::Range;

/// Literal that starts every placeholder.
pub const PLACEHOLDER_PREFIX: &str = "KEY_";

/// Width of a placeholder, and of every rendered key label.
pub const PLACEHOLDER_WIDTH: usize = PLACEHOLDER_PREFIX.len() + 2;

/// A placeholder occurrence in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Slot index the placeholder stands for.
    pub slot: usize,
    /// Byte range of the placeholder text in the template.
    pub range: Range<usize>,
}

/// Find every placeholder in a template, left to right, without overlaps.
pub fn find_placeholders(template: &str) -> impl Iterator<Item = Placeholder> + '_ {
    template.match_indices(PLACEHOLDER_PREFIX).filter_map(move |(start, _)| {
        let digits_start = start + PLACEHOLDER_PREFIX.len();
        let digits = template.get(digits_start..digits_start + 2)?;
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let slot = digits.parse().ok()?;
        Some(Placeholder {
            slot,
            range: start..digits_start + 2,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_width() {
        assert_eq!(PLACEHOLDER_WIDTH, 6);
    }

    #[test]
    fn test_find_placeholders() {
        let found: Vec<_> = find_placeholders("| KEY_00 | KEY_12 |").collect();

        assert_eq!(
            found,
            vec![
                Placeholder { slot: 0, range: 2..8 },
                Placeholder { slot: 12, range: 11..17 },
            ]
        );
    }

    #[test]
    fn test_find_placeholders_skips_malformed() {
        let slots: Vec<_> = find_placeholders("KEY_A1 KEY_1 KEY_07 KEY_").map(|p| p.slot).collect();

        assert_eq!(slots, vec![7]);
    }
}
