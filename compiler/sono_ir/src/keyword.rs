//! The reserved word set of the Sono language.
//!
//! Keywords are recognized by the classifier when a whole token region (or
//! nothing less) matches one of these spellings. They are also rejected as
//! qualified-identifier segments and as pack/unpack identifiers.

use std::fmt;

/// A reserved keyword.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Keyword {
    // Declaration keywords
    Module,
    Concept,
    Class,
    Function,
    Scope,
    Label,
    Readable,
    Writable,
    Mutable,
    New,
    List,
    Cast,
    Doc,

    // Flow control keywords
    If,
    Switch,
    Case,
    While,
    For,
    Do,
    Break,
    Continue,
    Goto,
    Return,
    Yield,
    Throw,
    Try,
    Catch,
    Main,

    // Special value keywords
    Any,
    Delete,
    Default,
    Void,
    Null,
    True,
    False,
    Min,
    Max,
    Infinity,
    Nan,
    Epsilon,
    This,
    ThisScope,
    ThisFunction,
    ThisClass,
    ThisTemplate,
    ThisConcept,
    ThisModule,
    ThisList,
    ThisFile,
    ThisLine,
    ThisColumn,
    ThisByte,
}

impl Keyword {
    /// The source spelling of the keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Module => "module",
            Keyword::Concept => "concept",
            Keyword::Class => "class",
            Keyword::Function => "function",
            Keyword::Scope => "scope",
            Keyword::Label => "label",
            Keyword::Readable => "readable",
            Keyword::Writable => "writable",
            Keyword::Mutable => "mutable",
            Keyword::New => "new",
            Keyword::List => "list",
            Keyword::Cast => "cast",
            Keyword::Doc => "doc",
            Keyword::If => "if",
            Keyword::Switch => "switch",
            Keyword::Case => "case",
            Keyword::While => "while",
            Keyword::For => "for",
            Keyword::Do => "do",
            Keyword::Break => "break",
            Keyword::Continue => "continue",
            Keyword::Goto => "goto",
            Keyword::Return => "return",
            Keyword::Yield => "yield",
            Keyword::Throw => "throw",
            Keyword::Try => "try",
            Keyword::Catch => "catch",
            Keyword::Main => "main",
            Keyword::Any => "any",
            Keyword::Delete => "delete",
            Keyword::Default => "default",
            Keyword::Void => "void",
            Keyword::Null => "null",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Min => "min",
            Keyword::Max => "max",
            Keyword::Infinity => "infinity",
            Keyword::Nan => "nan",
            Keyword::Epsilon => "epsilon",
            Keyword::This => "this",
            Keyword::ThisScope => "this-scope",
            Keyword::ThisFunction => "this-function",
            Keyword::ThisClass => "this-class",
            Keyword::ThisTemplate => "this-template",
            Keyword::ThisConcept => "this-concept",
            Keyword::ThisModule => "this-module",
            Keyword::ThisList => "this-list",
            Keyword::ThisFile => "this-file",
            Keyword::ThisLine => "this-line",
            Keyword::ThisColumn => "this-column",
            Keyword::ThisByte => "this-byte",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_spelling() {
        assert_eq!(Keyword::Module.to_string(), "module");
        assert_eq!(Keyword::ThisScope.to_string(), "this-scope");
    }
}
