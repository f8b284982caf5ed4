//! Depth-aware iteration over one list's direct elements.
//!
//! The cursor walks the tokens between a list's markers, treating every
//! nested sublist as a single element: stepping onto a sublist lands on its
//! opening marker and stepping again continues after its closing marker.
//! Iteration is clamped to the list's own markers at both ends.

use sono_ir::{Token, TokenList};

use crate::lists::List;

pub struct ListCursor<'a> {
    tokens: &'a TokenList,
    head: usize,
    tail: usize,
    depth: i32,
    pos: usize,
}

impl<'a> ListCursor<'a> {
    /// Position on the first token after the list's opening marker.
    pub fn new(tokens: &'a TokenList, list: &List) -> Self {
        ListCursor {
            tokens,
            head: list.head,
            tail: list.tail,
            depth: list.depth,
            pos: list.head + 1,
        }
    }

    /// Arena index of the current token.
    pub fn index(&self) -> usize {
        self.pos
    }

    pub fn token(&self) -> &'a Token {
        self.tokens.get(self.pos)
    }

    pub fn text(&self) -> &'a str {
        self.tokens.token_text(self.pos)
    }

    /// Whether the cursor sits on the closing marker.
    pub fn at_tail(&self) -> bool {
        self.pos == self.tail
    }

    pub fn at_head(&self) -> bool {
        self.pos == self.head
    }

    /// Step to the next direct element. Tokens nested deeper than the
    /// list's own content belong to a sublist's interior and are skipped;
    /// a sublist's closing marker is skipped together with it. Stops at
    /// the closing marker and never advances past it.
    pub fn advance(&mut self) {
        if self.at_tail() {
            return;
        }
        self.step_forward();
        if self.token().is_close_marker() && !self.at_tail() {
            self.step_forward();
        }
    }

    fn step_forward(&mut self) {
        self.pos += 1;
        while self.tokens.get(self.pos).indent > self.depth + 1 {
            self.pos += 1;
        }
    }

    /// Step to the previous direct element; a sublist is retreated over in
    /// one step, landing on its opening marker. Stops at the opening
    /// marker and never retreats past it.
    pub fn retreat(&mut self) {
        if self.at_head() {
            return;
        }
        self.step_back();
        if self.token().is_close_marker() && !self.at_head() {
            self.step_back();
        }
    }

    fn step_back(&mut self) {
        self.pos -= 1;
        while self.tokens.get(self.pos).indent > self.depth + 1 {
            self.pos -= 1;
        }
    }

    /// Advance until the current token is not whitespace (or the tail is
    /// reached).
    pub fn skip_whitespace(&mut self) {
        while !self.at_tail() && self.token().is_whitespace() {
            self.advance();
        }
    }
}
