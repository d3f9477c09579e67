//! Keymap declaration extraction.
//!
//! Finds the `keymaps` array in a QMK `keymap.c` and returns the cleaned
//! lines between its opening and closing lines. The declaration must look
//! like this, with the opening and closing lines on their own:
//!
//! ```text
//! const uint16_t PROGMEM keymaps[][MATRIX_ROWS][MATRIX_COLS] = {
//!   [0] = LAYOUT_ergodox(KC_EQUAL, KC_1, ...),
//!   [1] = LAYOUT_ergodox(
//!       KC_ESCAPE, KC_F1,  // comments are stripped
//!       ...),
//! };
//! ```

use tracing::debug;

use crate::error::{KeyartError, Result};

use super::span::{LineSpan, Spanned};

/// Start of the keymap array declaration.
pub const DECLARATION_START: &str = "const uint16_t PROGMEM keymaps";

/// Line that closes the keymap array declaration.
pub const DECLARATION_END: &str = "};";

const BLOCK_COMMENT_OPEN: &str = "/*";
const BLOCK_COMMENT_CLOSE: &str = "*/";
const LINE_COMMENT: &str = "//";

/// Extract the layer definition lines of the keymap declaration.
///
/// Returned lines are trimmed, comment-free and non-empty, each tagged with
/// its 1-based source line.
pub fn extract_layer_definitions<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Spanned<String>>> {
    let (start_index, start_line) = lines
        .iter()
        .map(|line| line.as_ref().trim())
        .enumerate()
        .find(|(_, line)| line.starts_with(DECLARATION_START))
        .ok_or_else(|| KeyartError::NotFound {
            message: format!("no line starts with `{}`", DECLARATION_START),
            help: Some("Is this a QMK keymap.c file?".to_string()),
        })?;

    if !start_line.ends_with('{') {
        return Err(KeyartError::Structural {
            line: start_index + 1,
            message: "declarations must open on their own line".to_string(),
            help: Some(format!("End the `{}` line with `{{`", DECLARATION_START)),
        });
    }

    let mut definitions = Vec::new();
    let mut comment_start: Option<usize> = None;

    for (index, raw) in lines.iter().enumerate().skip(start_index + 1) {
        let line_number = index + 1;
        let trimmed = raw.as_ref().trim();

        if trimmed.starts_with(BLOCK_COMMENT_OPEN) && comment_start.is_none() {
            comment_start = Some(line_number);
        }

        if let Some(opened) = comment_start {
            if trimmed.ends_with(BLOCK_COMMENT_CLOSE) {
                debug!(from = opened, to = line_number, "skipped block comment");
                comment_start = None;
            }
            continue;
        }

        let code = strip_line_comment(trimmed);

        if code.contains('{') {
            return Err(KeyartError::Structural {
                line: line_number,
                message: format!("unexpected nested declaration: {}", code),
                help: Some("Only one level of braces (the keymaps array) is supported".to_string()),
            });
        }

        if code.contains(DECLARATION_END) {
            if trimmed != DECLARATION_END {
                return Err(KeyartError::Structural {
                    line: line_number,
                    message: format!("declaration end must be on its own line: {}", trimmed),
                    help: Some(format!("Put `{}` alone on the last line", DECLARATION_END)),
                });
            }
            debug!(lines = definitions.len(), end = line_number, "extracted keymap declaration");
            return Ok(definitions);
        }

        if !code.is_empty() {
            definitions.push(Spanned::new(code.to_string(), LineSpan::line(line_number)));
        }
    }

    debug!(lines = definitions.len(), "keymap declaration has no closing line");
    Ok(definitions)
}

/// Strip a trailing `//` comment.
fn strip_line_comment(line: &str) -> &str {
    match line.find(LINE_COMMENT) {
        Some(index) => line[..index].trim(),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "const uint16_t PROGMEM keymaps[][MATRIX_ROWS][MATRIX_COLS] = {";

    fn values(lines: &[Spanned<String>]) -> Vec<&str> {
        lines.iter().map(|l| l.value.as_str()).collect()
    }

    #[test]
    fn test_extract_simple() {
        let source = [START, "[0] = KEYMAP(KC_A,KC_B),", "};"];

        let result = extract_layer_definitions(&source).unwrap();

        assert_eq!(values(&result), vec!["[0] = KEYMAP(KC_A,KC_B),"]);
        assert_eq!(result[0].span, LineSpan::line(2));
    }

    #[test]
    fn test_extract_ignores_lines_outside_declaration() {
        let source = [
            "#include \"ergodox_ez.h\"",
            "",
            START,
            "  [0] = KEYMAP(KC_A),",
            "};",
            "void matrix_init_user(void) {",
        ];

        let result = extract_layer_definitions(&source).unwrap();

        assert_eq!(values(&result), vec!["[0] = KEYMAP(KC_A),"]);
    }

    #[test]
    fn test_extract_missing_start() {
        let source = ["int main(void) {", "}"];

        let err = extract_layer_definitions(&source).unwrap_err();

        assert!(matches!(err, KeyartError::NotFound { .. }));
    }

    #[test]
    fn test_extract_start_not_on_own_line() {
        let source = ["const uint16_t PROGMEM keymaps[][MATRIX_ROWS][MATRIX_COLS] = { [0] = KEYMAP(KC_A) };"];

        let err = extract_layer_definitions(&source).unwrap_err();

        assert!(matches!(err, KeyartError::Structural { line: 1, .. }));
    }

    #[test]
    fn test_extract_strips_line_comments() {
        let source = [START, "[0] = KEYMAP( // left hand", "KC_A,KC_B),", "// whole line", "};"];

        let result = extract_layer_definitions(&source).unwrap();

        assert_eq!(values(&result), vec!["[0] = KEYMAP(", "KC_A,KC_B),"]);
    }

    #[test]
    fn test_extract_skips_block_comments() {
        let source = [
            START,
            "/* Keymap 0: Basic layer",
            " * ,--------.",
            " * | = { }  |",
            " */",
            "[0] = KEYMAP(KC_A),",
            "/* one line */",
            "};",
        ];

        let result = extract_layer_definitions(&source).unwrap();

        assert_eq!(values(&result), vec!["[0] = KEYMAP(KC_A),"]);
        assert_eq!(result[0].span, LineSpan::line(6));
    }

    #[test]
    fn test_extract_nested_brace() {
        let source = [START, "[0] = { KC_A },", "};"];

        let err = extract_layer_definitions(&source).unwrap_err();

        assert!(matches!(err, KeyartError::Structural { line: 2, .. }));
    }

    #[test]
    fn test_extract_end_with_trailing_code() {
        let source = [START, "[0] = KEYMAP(KC_A),", "}; int x;"];

        let err = extract_layer_definitions(&source).unwrap_err();

        assert!(matches!(err, KeyartError::Structural { line: 3, .. }));
    }

    #[test]
    fn test_extract_end_with_trailing_comment() {
        let source = [START, "[0] = KEYMAP(KC_A),", "};  // trailing junk"];

        let err = extract_layer_definitions(&source).unwrap_err();

        assert!(matches!(err, KeyartError::Structural { line: 3, .. }));
    }

    #[test]
    fn test_extract_end_inside_line_comment_is_not_end() {
        let source = [START, "[0] = KEYMAP(KC_A), // }; not yet", "[1] = KEYMAP(KC_B),", "};"];

        let result = extract_layer_definitions(&source).unwrap();

        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_extract_unterminated_returns_scanned_lines() {
        let source = [START, "[0] = KEYMAP(KC_A),"];

        let result = extract_layer_definitions(&source).unwrap();

        assert_eq!(values(&result), vec!["[0] = KEYMAP(KC_A),"]);
    }

    #[test]
    fn test_extract_drops_blank_lines() {
        let source = [START, "", "   ", "[0] = KEYMAP(KC_A),", "", "};"];

        let result = extract_layer_definitions(&source).unwrap();

        assert_eq!(result.len(), 1);
    }
}
