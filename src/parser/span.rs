//! Source line tracking for error messages.

use std::fmt;

/// A range of source lines (1-indexed, inclusive on both ends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

impl LineSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A span covering exactly one line.
    pub fn line(line: usize) -> Self {
        Self::new(line, line)
    }

    /// Merge two spans into one covering both.
    pub fn merge(self, other: LineSpan) -> LineSpan {
        LineSpan {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for LineSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "line {}", self.start)
        } else {
            write!(f, "lines {}-{}", self.start, self.end)
        }
    }
}

/// A value with the source lines it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub value: T,
    pub span: LineSpan,
}

impl<T> Spanned<T> {
    pub fn new(value: T, span: LineSpan) -> Self {
        Self { value, span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_display_single_line() {
        assert_eq!(LineSpan::line(7).to_string(), "line 7");
    }

    #[test]
    fn test_span_display_range() {
        assert_eq!(LineSpan::new(3, 9).to_string(), "lines 3-9");
    }

    #[test]
    fn test_span_merge() {
        let merged = LineSpan::new(4, 5).merge(LineSpan::new(2, 3));

        assert_eq!(merged, LineSpan::new(2, 5));
    }
}
