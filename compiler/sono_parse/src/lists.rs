//! List pairing and the list registry.
//!
//! Lists are paired by indentation depth: an opening marker's partner is the
//! first closing marker (plain or unpack) at the same `indent`. For balanced
//! input this pairing is unique and non-crossing because `indent` derives
//! from the running paren sums. Unbalanced input is rejected up front so
//! every registered head is guaranteed a tail.

use sono_ir::{Token, TokenList};
use tracing::trace;

/// Structural failure of the paren skeleton. Positions are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("Unmatched opening parenthesis at line: {line}, column: {column}")]
    UnmatchedOpen { line: u32, column: u32 },
    #[error("Unmatched closing parenthesis at line: {line}, column: {column}")]
    UnmatchedClose { line: u32, column: u32 },
}

impl ListError {
    fn unmatched_open(token: &Token) -> Self {
        ListError::UnmatchedOpen {
            line: token.line + 1,
            column: token.column + 1,
        }
    }

    fn unmatched_close(token: &Token) -> Self {
        ListError::UnmatchedClose {
            line: token.line + 1,
            column: token.column + 1,
        }
    }
}

/// One paired list: arena indices of its markers and its nesting depth.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct List {
    pub head: usize,
    pub tail: usize,
    /// The head marker's `indent`; 0 for top-level lists.
    pub depth: i32,
}

/// All lists of a file, ordered by head position for binary search.
#[derive(Debug, Default)]
pub struct ListRegistry {
    lists: Vec<List>,
}

impl ListRegistry {
    /// Pair every list in a classified token arena.
    ///
    /// Fails on the first structural defect: a closing marker with no open
    /// list, or an opening marker that never closes.
    pub fn build(tokens: &TokenList) -> Result<Self, ListError> {
        let mut balance = 0i32;
        for token in tokens.iter() {
            if token.is_open_marker() {
                balance += 1;
            } else if token.is_close_marker() {
                balance -= 1;
                if balance < 0 {
                    return Err(ListError::unmatched_close(token));
                }
            }
        }

        let mut lists = Vec::new();
        for (head, token) in tokens.iter().enumerate() {
            if !token.is_open_marker() {
                continue;
            }
            let tail = (head + 1..tokens.len())
                .find(|&j| {
                    let candidate = tokens.get(j);
                    candidate.is_close_marker() && candidate.indent == token.indent
                })
                .ok_or_else(|| ListError::unmatched_open(token))?;
            trace!(head, tail, depth = token.indent, "paired list");
            lists.push(List {
                head,
                tail,
                depth: token.indent,
            });
        }
        Ok(ListRegistry { lists })
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, List> {
        self.lists.iter()
    }

    /// The list whose head is nearest at or before token `ix`: the innermost
    /// enclosing candidate. `None` before the first head.
    pub fn enclosing(&self, ix: usize) -> Option<&List> {
        let at = self.lists.partition_point(|list| list.head <= ix);
        at.checked_sub(1).map(|i| &self.lists[i])
    }

    /// Lists that are not nested inside any other list.
    pub fn top_level(&self) -> impl Iterator<Item = &List> {
        self.lists.iter().filter(|list| list.depth == 0)
    }
}
