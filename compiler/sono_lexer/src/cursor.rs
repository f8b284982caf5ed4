//! Byte cursor over a source buffer.
//!
//! The scanner works on raw bytes; every delimiter in the grammar is ASCII,
//! so multi-byte UTF-8 sequences pass through region scans untouched.

/// Forward-only byte cursor. Lookahead never panics; past-the-end reads
/// return `None`.
pub(crate) struct Cursor<'src> {
    bytes: &'src [u8],
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(bytes: &'src [u8]) -> Self {
        Cursor { bytes, pos: 0 }
    }

    /// Current byte offset.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// The byte at the cursor, if any.
    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Unconsumed remainder of the buffer.
    pub(crate) fn rest(&self) -> &'src [u8] {
        &self.bytes[self.pos..]
    }

    pub(crate) fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.bytes.len());
    }

    /// Advance while `pred` holds, returning the number of bytes consumed.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if !pred(byte) {
                break;
            }
            self.pos += 1;
        }
        self.pos - start
    }
}
