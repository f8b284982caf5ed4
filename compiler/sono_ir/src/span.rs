//! Source location spans.
//!
//! Compact 8-byte byte-range representation. Spans produced by the scanner
//! are contiguous and exhaustive: concatenating every token's span text in
//! sequence order reconstructs the source exactly.

use std::fmt;

/// Byte range into the source buffer.
///
/// Layout: 8 bytes total.
/// - `start`: byte offset from file start
/// - `end`: byte offset (exclusive)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Empty span positioned at `at`. Used for absent grammar parts that
    /// still carry a position (e.g. an empty numerator).
    #[inline]
    pub const fn empty(at: u32) -> Self {
        Span { start: at, end: at }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if the span covers zero bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `pos` falls within the span.
    #[inline]
    pub const fn contains(&self, pos: u32) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Resolve the span against the source it was cut from.
    #[inline]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start as usize..self.end as usize]
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<std::ops::Range<u32>> for Span {
    fn from(range: std::ops::Range<u32>) -> Self {
        Span::new(range.start, range.end)
    }
}
