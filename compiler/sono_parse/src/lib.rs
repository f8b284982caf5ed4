//! Structural layer over the token arena: list pairing, list iteration,
//! and top-level declaration scanning.

mod cursor;
mod decl;
mod lists;

pub use cursor::ListCursor;
pub use decl::{scan_declarations, Decl, DeclKind, FileDecls};
pub use lists::{List, ListError, ListRegistry};
