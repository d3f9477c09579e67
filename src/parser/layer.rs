//! Layer line parsing.
//!
//! A logical layer line looks like
//! `[0] = KEYMAP(KC_EQUAL,KC_1,KC_2, ... RCTL_T(KC_ENTER)),`
//! and becomes a `Layer` named `0` with one slot per key token.

use tracing::debug;

use crate::error::{KeyartError, Result};
use crate::types::Layer;

use super::observer::ParseObserver;
use super::options::ParserOptions;
use super::tokens::split_key_tokens;

/// Suffix closing every constructor call.
const CALL_END: &str = "),";

/// Parse a single logical layer line.
pub fn parse_layer_line(
    line: &str,
    options: &ParserOptions,
    observer: &mut dyn ParseObserver,
) -> Result<Layer> {
    let mut parts = line.trim().split('=');
    let (name_part, call_part) = match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(call), None) => (name.trim(), call.trim()),
        _ => {
            return Err(KeyartError::Parse {
                message: format!("could not parse layer line: {}", line.trim()),
                help: Some("Expected exactly one `=` as in `[NAME] = LAYOUT(...),`".to_string()),
            })
        }
    };

    let name = name_part
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| KeyartError::Parse {
            message: format!("error parsing layer name: {}", name_part),
            help: Some("Layer names are written in brackets, e.g. `[BASE]`".to_string()),
        })?;

    let call = if options.normalize_case {
        call_part.to_uppercase()
    } else {
        call_part.to_string()
    };

    let args = options
        .match_constructor(&call)
        .and_then(|prefix| call[prefix.len()..].strip_suffix(CALL_END))
        .ok_or_else(|| KeyartError::Parse {
            message: format!("error parsing layer keys: {}", call),
            help: Some(format!(
                "Keys must be wrapped in one of {} and end with `{}`",
                options.constructors.join(", "),
                CALL_END
            )),
        })?;

    observer.parsing_layer(name);

    let keys: Vec<String> = split_key_tokens(args).map(str::to_string).collect();
    debug!(layer = name, slots = keys.len(), "parsed layer");

    Ok(Layer::new(name, keys))
}
