//! Reserved word resolution.
//!
//! Length-bucketed lookup: the region's length rejects most identifiers
//! before any string comparison. Keywords range from 2 (`if`, `do`) to 13
//! (`this-function`, `this-template`) bytes.

use sono_ir::Keyword;

/// Look up a reserved keyword by its exact text.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<Keyword> {
    let len = text.len();
    if !(2..=13).contains(&len) {
        return None;
    }
    match len {
        2 => match text {
            "if" => Some(Keyword::If),
            "do" => Some(Keyword::Do),
            _ => None,
        },
        3 => match text {
            "new" => Some(Keyword::New),
            "doc" => Some(Keyword::Doc),
            "for" => Some(Keyword::For),
            "try" => Some(Keyword::Try),
            "any" => Some(Keyword::Any),
            "min" => Some(Keyword::Min),
            "max" => Some(Keyword::Max),
            "nan" => Some(Keyword::Nan),
            _ => None,
        },
        4 => match text {
            "list" => Some(Keyword::List),
            "cast" => Some(Keyword::Cast),
            "case" => Some(Keyword::Case),
            "goto" => Some(Keyword::Goto),
            "main" => Some(Keyword::Main),
            "void" => Some(Keyword::Void),
            "null" => Some(Keyword::Null),
            "true" => Some(Keyword::True),
            "this" => Some(Keyword::This),
            _ => None,
        },
        5 => match text {
            "class" => Some(Keyword::Class),
            "scope" => Some(Keyword::Scope),
            "label" => Some(Keyword::Label),
            "while" => Some(Keyword::While),
            "break" => Some(Keyword::Break),
            "yield" => Some(Keyword::Yield),
            "throw" => Some(Keyword::Throw),
            "catch" => Some(Keyword::Catch),
            "false" => Some(Keyword::False),
            _ => None,
        },
        6 => match text {
            "module" => Some(Keyword::Module),
            "switch" => Some(Keyword::Switch),
            "return" => Some(Keyword::Return),
            "delete" => Some(Keyword::Delete),
            _ => None,
        },
        7 => match text {
            "concept" => Some(Keyword::Concept),
            "mutable" => Some(Keyword::Mutable),
            "default" => Some(Keyword::Default),
            "epsilon" => Some(Keyword::Epsilon),
            _ => None,
        },
        8 => match text {
            "function" => Some(Keyword::Function),
            "readable" => Some(Keyword::Readable),
            "writable" => Some(Keyword::Writable),
            "continue" => Some(Keyword::Continue),
            "infinity" => Some(Keyword::Infinity),
            _ => None,
        },
        9 => match text {
            "this-list" => Some(Keyword::ThisList),
            "this-file" => Some(Keyword::ThisFile),
            "this-line" => Some(Keyword::ThisLine),
            "this-byte" => Some(Keyword::ThisByte),
            _ => None,
        },
        10 => match text {
            "this-scope" => Some(Keyword::ThisScope),
            "this-class" => Some(Keyword::ThisClass),
            _ => None,
        },
        11 => match text {
            "this-module" => Some(Keyword::ThisModule),
            "this-column" => Some(Keyword::ThisColumn),
            _ => None,
        },
        12 => match text {
            "this-concept" => Some(Keyword::ThisConcept),
            _ => None,
        },
        13 => match text {
            "this-function" => Some(Keyword::ThisFunction),
            "this-template" => Some(Keyword::ThisTemplate),
            _ => None,
        },
        _ => None,
    }
}
