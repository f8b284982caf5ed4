//! Region segmentation and position metrics.
//!
//! The scanner cuts the source into contiguous, exhaustive regions without
//! judging their content: string literals (so embedded spaces and parens do
//! not split them), single list markers, whitespace runs, and generic runs
//! of everything else. Classification of the non-trivial regions happens
//! later; here every token starts out as whitespace detail.
//!
//! A second pass derives the position metrics each token carries: sequence
//! number, line, column, and the running paren/close sums that define
//! `indent`.

use memchr::{memchr_iter, memrchr};
use sono_ir::{Span, Token, TokenDetail};

use crate::cursor::Cursor;

/// Longest allowed raw string delimiter tag.
const MAX_RAW_TAG: usize = 16;

/// Whitespace per the grammar: space plus the C0 range TAB through CR.
pub(crate) fn is_space(byte: u8) -> bool {
    byte == b' ' || (0x09..=0x0D).contains(&byte)
}

/// Split `source` into regions and compute per-token position metrics.
///
/// The output covers every source byte exactly once, in order. All details
/// are [`TokenDetail::Whitespace`] placeholders at this stage.
pub(crate) fn scan(source: &str) -> Vec<Token> {
    let bytes = source.as_bytes();
    let mut cursor = Cursor::new(bytes);
    let mut spans = Vec::new();

    while let Some(byte) = cursor.peek() {
        let start = cursor.pos();
        if let Some(len) = string_literal_len(bytes, start) {
            cursor.advance(len);
        } else if byte == b'(' {
            cursor.advance(1);
        } else if byte == b')' {
            if cursor.rest().starts_with(b")...") {
                cursor.advance(4);
            } else {
                cursor.advance(1);
            }
        } else if is_space(byte) {
            cursor.eat_while(is_space);
        } else {
            cursor.eat_while(|b| !is_space(b) && b != b'(' && b != b')');
        }
        spans.push(Span::new(start as u32, cursor.pos() as u32));
    }

    measure(bytes, &spans)
}

/// Attach sequence, line, column, and nesting metrics to each region.
fn measure(bytes: &[u8], spans: &[Span]) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(spans.len());
    let mut line = 0u32;
    let mut paren = 0i32;
    let mut close = 0i32;
    for (seq, &span) in spans.iter().enumerate() {
        let start = span.start as usize;
        let region = &bytes[start..span.end as usize];
        // Column measures back to the nearest newline strictly before the
        // token, or to the start of the buffer.
        let line_origin = memrchr(b'\n', &bytes[..start]).map_or(0, |at| at + 1);
        let opens = region.first() == Some(&b'(');
        if opens {
            paren += 1;
        }
        if region.first() == Some(&b')') {
            close -= 1;
        }
        tokens.push(Token {
            span,
            seq: seq as u32,
            line,
            column: (start - line_origin) as u32,
            paren,
            close,
            indent: paren + close - i32::from(opens),
            detail: TokenDetail::Whitespace,
        });
        line += memchr_iter(b'\n', region).count() as u32;
    }
    tokens
}

/// Length of a complete string literal starting at `start`, if one is there.
///
/// Tries the optional `u<digits>` encoding prefix first; a prefix not
/// followed by a string form is not a string start (the region falls through
/// to a generic run).
fn string_literal_len(bytes: &[u8], start: usize) -> Option<usize> {
    if bytes.get(start) == Some(&b'u') {
        let digits = bytes[start + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits > 0 {
            let body = start + 1 + digits;
            if let Some(len) = string_body_len(bytes, body) {
                return Some(1 + digits + len);
            }
        }
    }
    string_body_len(bytes, start)
}

/// Length of a raw or quoted string body starting exactly at `at`.
fn string_body_len(bytes: &[u8], at: usize) -> Option<usize> {
    match bytes.get(at)? {
        b'R' if bytes.get(at + 1) == Some(&b'"') => raw_len(bytes, at),
        b'"' | b'\'' | b'`' => quoted_len(bytes, at),
        _ => None,
    }
}

/// `R"<tag>( ... )<tag>"` with a verbatim body. The tag runs to the first
/// `(` and must be short and free of spaces, backslashes, and parens; the
/// body ends at the first occurrence of the closing `)<tag>"` sequence.
fn raw_len(bytes: &[u8], at: usize) -> Option<usize> {
    let tag_start = at + 2;
    let mut open = tag_start;
    loop {
        match bytes.get(open)? {
            b'(' => break,
            b')' | b'\\' => return None,
            &b if is_space(b) => return None,
            _ if open - tag_start >= MAX_RAW_TAG => return None,
            _ => open += 1,
        }
    }
    let mut needle = Vec::with_capacity(open - tag_start + 2);
    needle.push(b')');
    needle.extend_from_slice(&bytes[tag_start..open]);
    needle.push(b'"');
    let found = memchr::memmem::find(&bytes[open + 1..], &needle)?;
    Some(open + 1 + found + needle.len() - at)
}

/// Quoted string body: closes at the first unescaped occurrence of the
/// opening quote. A backslash escapes the next byte; a bare newline, or a
/// backslash immediately before a newline or the end of input, rules the
/// form out. If no proper close exists but an escaped quote does, the
/// earliest escaped quote is reinterpreted as the close (the backslash
/// before it becomes an ordinary character).
fn quoted_len(bytes: &[u8], at: usize) -> Option<usize> {
    let quote = bytes[at];
    let mut fallback = None;
    let mut i = at + 1;
    loop {
        match bytes.get(i) {
            Some(&b) if b == quote => return Some(i + 1 - at),
            Some(b'\n') | None => return fallback.map(|f| f + 1 - at),
            Some(b'\\') => match bytes.get(i + 1) {
                Some(b'\n') | None => return fallback.map(|f| f + 1 - at),
                Some(&b) => {
                    if b == quote && fallback.is_none() {
                        fallback = Some(i + 1);
                    }
                    i += 2;
                }
            },
            Some(_) => i += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn regions(source: &str) -> Vec<&str> {
        scan(source)
            .iter()
            .map(|t| t.span.text(source))
            .collect()
    }

    #[test]
    fn splits_on_spaces_and_markers() {
        assert_eq!(
            regions("(add x 1)"),
            vec!["(", "add", " ", "x", " ", "1", ")"]
        );
    }

    #[test]
    fn unpack_close_is_one_region() {
        assert_eq!(regions("(f a)..."), vec!["(", "f", " ", "a", ")..."]);
        // A close followed by fewer than three dots is a bare close.
        assert_eq!(regions(")..x"), vec![")", "..x"]);
    }

    #[test]
    fn strings_swallow_spaces_and_parens() {
        assert_eq!(regions(r#"("a (b)" c)"#), vec!["(", r#""a (b)""#, " ", "c", ")"]);
        assert_eq!(regions("'x y'"), vec!["'x y'"]);
        assert_eq!(regions("`a b`"), vec!["`a b`"]);
    }

    #[test]
    fn encoding_prefix_extends_the_string_region() {
        assert_eq!(regions(r#"u8"hi" u32'x'"#), vec![r#"u8"hi""#, " ", "u32'x'"]);
        // Prefix without a following string form is an ordinary run.
        assert_eq!(regions("u8x u8"), vec!["u8x", " ", "u8"]);
    }

    #[test]
    fn raw_strings_run_to_the_matching_tag() {
        assert_eq!(
            regions(r#"R"eos(a "quote" (nested))eos" rest"#),
            vec![r#"R"eos(a "quote" (nested))eos""#, " ", "rest"]
        );
        // Unterminated raw strings fall back to generic segmentation.
        assert_eq!(regions(r#"R"x(abc"#), vec!["R\"x", "(", "abc"]);
    }

    #[test]
    fn escaped_quotes_do_not_close() {
        assert_eq!(regions(r#""a\"b" c"#), vec![r#""a\"b""#, " ", "c"]);
        // No real close: the escaped quote is reinterpreted as the close.
        assert_eq!(regions(r#""a\""#), vec![r#""a\""#]);
    }

    #[test]
    fn newline_breaks_a_quoted_string() {
        assert_eq!(regions("\"ab\ncd\""), vec!["\"ab", "\n", "cd\""]);
    }

    #[test]
    fn regions_are_contiguous_and_exhaustive() {
        let source = "(a \"s\" 0x1f)...\n";
        let tokens = scan(source);
        let mut at = 0;
        for token in &tokens {
            assert_eq!(token.span.start, at);
            at = token.span.end;
        }
        assert_eq!(at as usize, source.len());
    }

    #[test]
    fn lines_count_strictly_preceding_newlines() {
        let tokens = scan("a\nb\n\nc");
        let lines: Vec<u32> = tokens.iter().map(|t| t.line).collect();
        // Regions: "a", "\n", "b", "\n\n", "c"
        assert_eq!(lines, vec![0, 0, 1, 1, 3]);
    }

    #[test]
    fn columns_measure_from_the_preceding_newline() {
        let tokens = scan("ab (c\n  d)");
        let source = "ab (c\n  d)";
        let by_text: Vec<(&str, u32)> = tokens
            .iter()
            .map(|t| (t.span.text(source), t.column))
            .collect();
        assert_eq!(
            by_text,
            vec![
                ("ab", 0),
                (" ", 2),
                ("(", 3),
                ("c", 4),
                ("\n  ", 5),
                ("d", 2),
                (")", 3),
            ]
        );
    }

    #[test]
    fn indent_tracks_nesting_depth() {
        let source = "(a (b) c)";
        let tokens = scan(source);
        let depths: Vec<(&str, i32)> = tokens
            .iter()
            .map(|t| (t.span.text(source), t.indent))
            .collect();
        assert_eq!(
            depths,
            vec![
                ("(", 0),
                ("a", 1),
                (" ", 1),
                ("(", 1),
                ("b", 2),
                (")", 1),
                (" ", 1),
                ("c", 1),
                (")", 0),
            ]
        );
    }
}
