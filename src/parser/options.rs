//! Parser configuration.

/// Constructor calls recognized by default.
///
/// Different firmware generations wrap layer keys in different macros;
/// configurator exports use `KEYMAP(` or `LAYOUT_ergodox(`.
pub const DEFAULT_CONSTRUCTORS: &[&str] = &["KEYMAP(", "LAYOUT(", "LAYOUT_ergodox("];

/// Options for parsing layer lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Recognized constructor-call prefixes, including the opening parenthesis.
    /// Tried in order; the first match is stripped.
    pub constructors: Vec<String>,

    /// Upper-case the right-hand side of each layer line before matching.
    pub normalize_case: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            constructors: DEFAULT_CONSTRUCTORS.iter().map(|c| c.to_string()).collect(),
            normalize_case: false,
        }
    }
}

impl ParserOptions {
    /// Options recognizing a single constructor name.
    ///
    /// `"KEYMAP"` and `"KEYMAP("` are equivalent.
    pub fn single(constructor: impl Into<String>) -> Self {
        Self {
            constructors: vec![with_open_paren(constructor.into())],
            normalize_case: false,
        }
    }

    /// Replace the recognized constructors.
    pub fn with_constructors<I, S>(mut self, constructors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constructors = constructors
            .into_iter()
            .map(|c| with_open_paren(c.into()))
            .collect();
        self
    }

    /// Enable or disable case normalization.
    pub fn with_normalize_case(mut self, normalize_case: bool) -> Self {
        self.normalize_case = normalize_case;
        self
    }

    /// Find the constructor prefix a constructor call starts with.
    ///
    /// With case normalization on, `call` is already upper-cased, so prefixes
    /// are compared upper-cased too.
    pub fn match_constructor(&self, call: &str) -> Option<&str> {
        self.constructors.iter().map(String::as_str).find(|prefix| {
            if self.normalize_case {
                call.get(..prefix.len())
                    .is_some_and(|head| head == prefix.to_uppercase())
            } else {
                call.starts_with(prefix)
            }
        })
    }
}

fn with_open_paren(mut constructor: String) -> String {
    if !constructor.ends_with('(') {
        constructor.push('(');
    }
    constructor
}
