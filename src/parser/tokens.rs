//! Splitting of constructor arguments into key tokens.

/// Lazy iterator over the key tokens of a constructor argument string.
///
/// Commas only separate tokens at parenthesis depth zero, so
/// `LT(1,KC_A),KC_B` yields `LT(1,KC_A)` and `KC_B`. Each token is trimmed.
/// The final token is always yielded, even when it is empty after a
/// trailing comma.
///
/// Parenthesis balance is not checked: an unbalanced `(` swallows every
/// following comma, and a stray `)` makes the depth negative so commas stop
/// splitting until it is matched.
#[derive(Debug, Clone)]
pub struct KeyTokens<'a> {
    rest: Option<&'a str>,
}

impl<'a> KeyTokens<'a> {
    pub fn new(args: &'a str) -> Self {
        Self { rest: Some(args) }
    }
}

impl<'a> Iterator for KeyTokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        let mut depth: isize = 0;

        for (i, c) in rest.char_indices() {
            match c {
                '(' => depth += 1,
                ')' => depth -= 1,
                ',' if depth == 0 => {
                    self.rest = Some(&rest[i + 1..]);
                    return Some(rest[..i].trim());
                }
                _ => {}
            }
        }

        self.rest = None;
        Some(rest.trim())
    }
}

/// Split a constructor argument string into key tokens.
pub fn split_key_tokens(args: &str) -> KeyTokens<'_> {
    KeyTokens::new(args)
}
