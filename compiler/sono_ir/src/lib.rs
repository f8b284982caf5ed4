//! Shared front-end types for the Sono compiler.
//!
//! This crate holds the data model the rest of the toolchain is built on:
//! byte [`Span`]s into the source buffer, the classified [`Token`] with its
//! position metrics and tagged [`TokenDetail`] payload, the reserved
//! [`Keyword`] set, and the [`TokenList`] arena that owns every token of a
//! compiled file.
//!
//! Design rules:
//! - Tokens are written exactly once (during classification) and are
//!   immutable afterwards.
//! - Everything downstream (lists, cursors, the declaration scan) refers to
//!   tokens by arena index, never by pointer: equality is index equality.
//! - The arena owns the source text, so spans resolve for the whole life of
//!   the file's processing context and are dropped together with it.

mod keyword;
mod span;
mod token;

pub use keyword::Keyword;
pub use span::Span;
pub use token::{
    Base, Encoding, IdentifierDetail, NumberDetail, Quote, StrDetail, Token, TokenDetail,
    TokenList, TokenRender,
};
