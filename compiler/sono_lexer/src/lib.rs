//! Lexical front end: source scanning and token classification.
//!
//! [`tokenize`] is the single entry point. It cuts the source into
//! contiguous regions, measures line/column/nesting metrics for each, then
//! classifies every region against the token grammars. The result is a
//! [`TokenList`] arena in which whitespace is preserved and every source
//! byte is covered by exactly one token.
//!
//! Classification is all-or-nothing: the first invalid region aborts the
//! file with a rendered [`LexicalError`].

mod classify;
mod cursor;
mod ident;
mod keywords;
mod number;
mod scanner;
mod string;


pub use sono_diagnostic::LexicalError;
use sono_ir::TokenList;
use tracing::debug;

/// Scan and classify `source` into a token arena.
pub fn tokenize(source: impl Into<String>) -> Result<TokenList, LexicalError> {
    let source = source.into();
    let tokens = scanner::scan(&source);
    let mut list = TokenList::from_parts(source, tokens);
    classify::classify_all(&mut list)?;
    debug!(tokens = list.len(), "tokenized");
    Ok(list)
}
