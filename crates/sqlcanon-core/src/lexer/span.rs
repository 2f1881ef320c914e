//! Source location tracking for tokens, parse tree nodes and AST nodes.

use serde::Serialize;

/// A half-open byte range in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates an empty span at `offset`.
    #[must_use]
    pub const fn at(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Returns true if the span covers no input.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The smallest span covering both `self` and `other`.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        let start = if other.start < self.start {
            other.start
        } else {
            self.start
        };
        let end = if other.end > self.end {
            other.end
        } else {
            self.end
        };
        Self::new(start, end)
    }

    /// Returns the slice of `source` covered by this span, or `""` when the
    /// span does not fall on character boundaries of `source`.
    #[must_use]
    pub fn slice(self, source: &str) -> &str {
        source.get(self.start..self.end).unwrap_or_default()
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::at(0)
    }
}

/// Converts a byte offset into a `(line, column)` pair.
///
/// Lines are 1-based, columns are 0-based and counted in characters.
#[must_use]
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let before = source
        .char_indices()
        .take_while(|&(i, _)| i < offset)
        .map(|(_, ch)| ch);
    before.fold((1, 0), |(line, col), ch| {
        if ch == '\n' {
            (line + 1, 0)
        } else {
            (line, col + 1)
        }
    })
}
