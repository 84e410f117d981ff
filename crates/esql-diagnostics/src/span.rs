//! Source span and location tracking for Entity SQL query text
//!
//! Offsets are counted in characters (Unicode scalar values) from the start of
//! the query text, not in bytes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open span `[start, end)` of character offsets into query text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start character offset (inclusive)
    pub start: usize,
    /// End character offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span from start and end offsets
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a zero-width span at a position
    #[inline]
    pub const fn point(pos: usize) -> Self {
        Self { start: pos, end: pos }
    }

    /// Get the length of the span in characters
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the span is empty
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check if the end lies before the start
    #[inline]
    pub const fn is_reversed(&self) -> bool {
        self.start > self.end
    }

    /// Check if this span contains a position
    #[inline]
    pub const fn contains_pos(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Slice the covered text out of `source`.
    ///
    /// Returns `None` when the span is reversed or reaches past the end of `source`.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        if self.is_reversed() {
            return None;
        }
        let start = char_to_byte(source, self.start)?;
        let end = char_to_byte(source, self.end)?;
        source.get(start..end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Source location with line and column information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
    /// Character offset from start (0-based)
    pub offset: usize,
    /// Length in characters
    pub length: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub const fn new(line: usize, column: usize, offset: usize, length: usize) -> Self {
        Self {
            line,
            column,
            offset,
            length,
        }
    }

    /// Create from a span and source text
    pub fn from_span(span: Span, source: &str) -> Self {
        let (line, column) = offset_to_line_col(source, span.start);
        Self {
            line,
            column,
            offset: span.start,
            length: span.len(),
        }
    }

    /// Get the span for this location
    pub const fn span(&self) -> Span {
        Span::new(self.offset, self.offset + self.length)
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::new(1, 1, 0, 0)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Convert a character offset to line and column numbers
pub fn offset_to_line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;

    for ch in source.chars().take(offset) {
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }

    (line, col)
}

/// Number of characters in `source`, the upper bound for any span end
pub fn char_len(source: &str) -> usize {
    source.chars().count()
}

/// Map a character offset to a byte index; the offset one past the last character is valid
fn char_to_byte(source: &str, offset: usize) -> Option<usize> {
    source
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(source.len()))
        .nth(offset)
}
