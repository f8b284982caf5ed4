//! Classified tokens and the per-file token arena.
//!
//! A [`Token`] is a span into the source plus derived position metrics and a
//! [`TokenDetail`] payload filled in by the classifier. All tokens of a file
//! live in one append-only [`TokenList`] arena that also owns the source
//! text; lists and cursors address tokens by arena index.

use std::fmt;

use smallvec::SmallVec;

use crate::{Keyword, Span};

/// Radix of a number literal, selected by its 2-character base tag.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Base {
    /// `0b`: digits `0`/`1`.
    Binary,
    /// `0o`: digits `0`-`7`.
    Octal,
    /// `0d`, or no tag at all.
    #[default]
    Decimal,
    /// `0x`: hex digits; exponent marker `p` since `e` is a digit.
    Hex,
    /// `0a`: digits `0`-`9` plus `a`-`z`; exponent marker `^`.
    Base36,
    /// `0s`: alphanumerics plus `+` and `\`; exponent marker `^`.
    Base64,
}

impl Base {
    /// Map the letter of a `0<letter>` base tag to its radix.
    pub const fn from_tag_letter(letter: u8) -> Option<Base> {
        match letter {
            b'b' => Some(Base::Binary),
            b'o' => Some(Base::Octal),
            b'd' => Some(Base::Decimal),
            b'x' => Some(Base::Hex),
            b'a' => Some(Base::Base36),
            b's' => Some(Base::Base64),
            _ => None,
        }
    }

    /// The character that introduces an exponent for this base.
    ///
    /// Bases whose digit alphabet contains `e` use a different marker.
    pub const fn exponent_marker(self) -> u8 {
        match self {
            Base::Binary | Base::Octal | Base::Decimal => b'e',
            Base::Hex => b'p',
            Base::Base36 | Base::Base64 => b'^',
        }
    }

    /// Whether `byte` may appear in a digit run of this base.
    ///
    /// The group separators `'` and `_` are legal in every base.
    pub const fn legal_digit(self, byte: u8) -> bool {
        if byte == b'\'' || byte == b'_' {
            return true;
        }
        match self {
            Base::Binary => matches!(byte, b'0' | b'1'),
            Base::Octal => matches!(byte, b'0'..=b'7'),
            Base::Decimal => byte.is_ascii_digit(),
            Base::Hex => byte.is_ascii_hexdigit(),
            Base::Base36 => byte.is_ascii_alphanumeric(),
            Base::Base64 => byte.is_ascii_alphanumeric() || byte == b'+' || byte == b'\\',
        }
    }
}

/// Character width of a string literal, from its `u8`/`u16`/`u32` prefix.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Encoding {
    #[default]
    Bits8,
    Bits16,
    Bits32,
}

impl Encoding {
    /// Width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Encoding::Bits8 => 8,
            Encoding::Bits16 => 16,
            Encoding::Bits32 => 32,
        }
    }
}

/// Delimiter style of a string literal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Quote {
    Double,
    Single,
    Backtick,
    /// `R"<tag>( ... )<tag>"`: verbatim content, no escapes.
    Raw,
}

/// Payload of an identifier token, plain or pack/unpack.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IdentifierDetail {
    /// The leaf name (last segment).
    pub leaf: Span,
    /// Qualification path: every segment before the leaf, in order.
    pub path: SmallVec<[Span; 4]>,
    /// `...name`: variadic collection.
    pub pack: bool,
    /// `name...`: variadic expansion.
    pub unpack: bool,
}

/// Payload of a number token, decomposed into its grammar parts.
///
/// Absent optional parts are `None`; the three digit runs are spans that may
/// be empty but still carry the position where the run would sit.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NumberDetail {
    pub sign: Option<Span>,
    pub base_tag: Option<Span>,
    pub base: Base,
    pub numerator: Span,
    pub decimal_point: Option<Span>,
    pub denominator: Span,
    pub exponent_marker: Option<Span>,
    pub exponent_sign: Option<Span>,
    pub exponent: Span,
}

/// Payload of a string literal token.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrDetail {
    pub encoding: Encoding,
    pub quote: Quote,
    /// Raw-form delimiter tag; `None` for quoted forms.
    pub raw_tag: Option<Span>,
    /// Content between the delimiters, escapes uninterpreted.
    pub content: Span,
    /// Both delimiters were present and agreed.
    pub matched: bool,
}

/// Classified token payload. One variant per micro-grammar.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum TokenDetail {
    /// `(`, `)`, or `)...`.
    List { close: bool, unpack: bool },
    /// A punctuation-only run.
    Operator { text: Span },
    /// A reserved word.
    Keyword(Keyword),
    Identifier(IdentifierDetail),
    Number(NumberDetail),
    Str(StrDetail),
    /// Scanner default; also the final classification of whitespace runs.
    #[default]
    Whitespace,
}

/// One token: region, position metrics, and classified detail.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// Byte region in the source. Regions are contiguous and exhaustive.
    pub span: Span,
    /// 0-based ordinal among all tokens, whitespace included.
    pub seq: u32,
    /// 0-based line: newline count over all strictly preceding regions.
    pub line: u32,
    /// 0-based column: byte distance from the token start back to the
    /// nearest preceding newline (or buffer start).
    pub column: u32,
    /// Running `(` count over all tokens up to and including this one.
    pub paren: i32,
    /// Running `)` count (negative) up to and including this one.
    pub close: i32,
    /// Nesting depth of this token's content: `paren + close`, minus one if
    /// the token itself is an opening marker (an opener reports the depth of
    /// what it opens, not its own).
    pub indent: i32,
    pub detail: TokenDetail,
}

impl Token {
    /// Whether this token is a whitespace run.
    pub fn is_whitespace(&self) -> bool {
        matches!(self.detail, TokenDetail::Whitespace)
    }

    /// Whether this token opens a list.
    pub fn is_open_marker(&self) -> bool {
        matches!(self.detail, TokenDetail::List { close: false, .. })
    }

    /// Whether this token closes a list (plain or unpack close).
    pub fn is_close_marker(&self) -> bool {
        matches!(self.detail, TokenDetail::List { close: true, .. })
    }
}

/// Append-only, order-stable arena holding every token of one file.
///
/// Owns the source text so spans stay resolvable for the lifetime of the
/// file's processing context. Built once per file; immutable after
/// classification.
#[derive(Clone, Debug, Default)]
pub struct TokenList {
    source: String,
    tokens: Vec<Token>,
}

impl TokenList {
    /// Assemble an arena from scanned parts.
    pub fn from_parts(source: String, tokens: Vec<Token>) -> Self {
        TokenList { source, tokens }
    }

    /// The full source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Resolve an arbitrary span against the source.
    pub fn text(&self, span: Span) -> &str {
        span.text(&self.source)
    }

    /// The region text of the token at `ix`.
    pub fn token_text(&self, ix: usize) -> &str {
        self.tokens[ix].span.text(&self.source)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, ix: usize) -> &Token {
        &self.tokens[ix]
    }

    /// Mutable access for the classifier. Tokens must not be mutated after
    /// classification completes.
    pub fn get_mut(&mut self, ix: usize) -> &mut Token {
        &mut self.tokens[ix]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Debug/trace rendering adapter for the token at `ix`.
    pub fn render(&self, ix: usize) -> TokenRender<'_> {
        TokenRender { list: self, ix }
    }
}

/// Renders one token's kind and decomposed detail fields for tooling and
/// trace output. Not part of the compiled artifact's output path.
pub struct TokenRender<'a> {
    list: &'a TokenList,
    ix: usize,
}

impl fmt::Display for TokenRender<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = self.list.get(self.ix);
        let pad = "  ".repeat(token.indent.max(0) as usize);
        match &token.detail {
            TokenDetail::List { close, unpack } => {
                let marker = match (close, unpack) {
                    (false, _) => "(",
                    (true, false) => ")",
                    (true, true) => ")...",
                };
                write!(f, "{pad}list: {marker} {},{}", token.line + 1, token.column + 1)
            }
            TokenDetail::Operator { text } => {
                write!(f, "{pad}operator: {}", self.list.text(*text))
            }
            TokenDetail::Keyword(kw) => {
                write!(f, "{pad}keyword: {kw}")
            }
            TokenDetail::Identifier(id) => {
                write!(f, "{pad}identifier: ")?;
                if id.pack {
                    write!(f, "...")?;
                }
                for segment in &id.path {
                    write!(f, "{} ", self.list.text(*segment))?;
                }
                write!(f, "{}", self.list.text(id.leaf))?;
                if id.unpack {
                    write!(f, "...")?;
                }
                Ok(())
            }
            TokenDetail::Number(n) => {
                let opt = |span: &Option<Span>| span.map_or("", |s| self.list.text(s));
                writeln!(f, "{pad}number: {}", self.list.token_text(self.ix))?;
                writeln!(f, "{pad}   Sign: {}", opt(&n.sign))?;
                writeln!(f, "{pad}   Base: {}", opt(&n.base_tag))?;
                writeln!(f, "{pad}   Numerator: {}", self.list.text(n.numerator))?;
                writeln!(f, "{pad}   Decimal point: {}", opt(&n.decimal_point))?;
                writeln!(f, "{pad}   Denominator: {}", self.list.text(n.denominator))?;
                writeln!(f, "{pad}   Exponent point: {}", opt(&n.exponent_marker))?;
                writeln!(f, "{pad}   Exponent sign: {}", opt(&n.exponent_sign))?;
                write!(f, "{pad}   Exponent: {}", self.list.text(n.exponent))
            }
            TokenDetail::Str(s) => {
                writeln!(f, "{pad}string:")?;
                writeln!(f, "{pad}   Encoding: u{}", s.encoding.bits())?;
                writeln!(f, "{pad}   Quote: {:?}", s.quote)?;
                if let Some(tag) = s.raw_tag {
                    writeln!(f, "{pad}   Delimiter: {}", self.list.text(tag))?;
                }
                let content = self.list.text(s.content);
                if matches!(s.quote, Quote::Raw) {
                    write!(f, "{pad}   Characters: {}", content.replace('\n', "\\n"))
                } else {
                    write!(f, "{pad}   Characters: {content}")
                }
            }
            TokenDetail::Whitespace => write!(f, "{pad}whitespace"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn base_alphabets() {
        assert!(Base::Binary.legal_digit(b'1'));
        assert!(!Base::Binary.legal_digit(b'2'));
        assert!(Base::Octal.legal_digit(b'7'));
        assert!(!Base::Octal.legal_digit(b'8'));
        assert!(Base::Hex.legal_digit(b'f'));
        assert!(!Base::Hex.legal_digit(b'g'));
        assert!(Base::Base36.legal_digit(b'z'));
        assert!(Base::Base64.legal_digit(b'+'));
        assert!(!Base::Decimal.legal_digit(b'a'));
        // Separators are legal everywhere.
        assert!(Base::Binary.legal_digit(b'_'));
        assert!(Base::Hex.legal_digit(b'\''));
    }

    #[test]
    fn exponent_markers_avoid_digit_alphabet() {
        assert_eq!(Base::Decimal.exponent_marker(), b'e');
        assert_eq!(Base::Hex.exponent_marker(), b'p');
        assert_eq!(Base::Base36.exponent_marker(), b'^');
        assert_eq!(Base::Base64.exponent_marker(), b'^');
    }

    #[test]
    fn marker_predicates() {
        let mut token = Token {
            span: Span::new(0, 1),
            seq: 0,
            line: 0,
            column: 0,
            paren: 1,
            close: 0,
            indent: 0,
            detail: TokenDetail::List {
                close: false,
                unpack: false,
            },
        };
        assert!(token.is_open_marker());
        assert!(!token.is_close_marker());
        token.detail = TokenDetail::List {
            close: true,
            unpack: true,
        };
        assert!(token.is_close_marker());
        token.detail = TokenDetail::Whitespace;
        assert!(token.is_whitespace());
    }
}
