//! Error reporting for the Sono front end.
//!
//! The lexer and classifier detect problems as an offending token plus a
//! byte offset inside it; [`report`] turns that pair into a caret diagnostic
//! that shows the full source line(s) around the token with a marker line
//! underneath.

mod report;

pub use report::report;

/// A classification failure, fully rendered for display.
///
/// Carries the formatted diagnostic so callers can print it without holding
/// onto the token arena.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("{message}")]
pub struct LexicalError {
    message: String,
}

impl LexicalError {
    pub(crate) fn new(message: String) -> Self {
        LexicalError { message }
    }

    /// The rendered diagnostic text.
    pub fn message(&self) -> &str {
        &self.message
    }
}
