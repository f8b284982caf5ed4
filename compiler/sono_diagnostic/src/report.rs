//! Caret rendering.
//!
//! A diagnostic shows the offending token's enclosing physical line(s)
//! with a marker line underneath: `+` under the token's first and last
//! column, `^` under the reported offset. The marker line mirrors any
//! newlines inside the shown text so multi-line tokens render one marker
//! sub-line per physical line.

use sono_ir::TokenList;

use crate::LexicalError;

/// Render a classification failure at byte `offset` inside token
/// `offending` into a [`LexicalError`].
///
/// Works on any token whose span and line are set, classified or not; it
/// reads only regions and neighboring tokens' newline content.
pub fn report(list: &TokenList, offending: usize, offset: usize, message: &str) -> LexicalError {
    let token = list.get(offending);
    let (line_start, line_end) = enclosing_lines(list, offending);
    let line = &list.source().as_bytes()[line_start..line_end];

    let mut arrow = vec![b' '; line.len()];
    let token_start = token.span.start as usize - line_start;
    let token_end = token_start.max((token.span.end as usize).saturating_sub(1) - line_start);
    let mut caret = token_start + offset;
    if !arrow.is_empty() {
        let last = arrow.len() - 1;
        arrow[token_start.min(last)] = b'+';
        arrow[token_end.min(last)] = b'+';
        caret = caret.min(last);
        arrow[caret] = b'^';
    }
    for (i, &byte) in line.iter().enumerate() {
        if byte == b'\n' {
            arrow[i] = b'\n';
        }
    }

    let mut text = format!(
        "Lexical error at line: {}, column: {}\n{message}:\n",
        token.line + 1,
        caret + 1,
    );
    // Interleave each physical line with its marker sub-line.
    let line = String::from_utf8_lossy(line);
    let arrow = String::from_utf8_lossy(&arrow);
    for (source_line, arrow_line) in line.split('\n').zip(arrow.split('\n')) {
        text.push_str(source_line);
        text.push('\n');
        text.push_str(arrow_line);
        text.push('\n');
    }
    text.pop();
    LexicalError::new(text)
}

/// Byte bounds of the physical line(s) containing token `offending`.
///
/// Scans backward for the nearest preceding token containing a newline and
/// starts just after its last one; scans forward for the nearest token at
/// or after the offending one containing a newline and ends at that token's
/// region end (when it is the offending token itself) or at the end of the
/// token before it.
fn enclosing_lines(list: &TokenList, offending: usize) -> (usize, usize) {
    let start = (0..offending)
        .rev()
        .find_map(|i| {
            let token = list.get(i);
            list.token_text(i)
                .rfind('\n')
                .map(|at| token.span.start as usize + at + 1)
        })
        .unwrap_or(0);
    let end = (offending..list.len())
        .find(|&j| list.token_text(j).contains('\n'))
        .map(|j| {
            let stop = if j == offending { j } else { j - 1 };
            list.get(stop).span.end as usize
        })
        .unwrap_or_else(|| list.get(list.len() - 1).span.end as usize);
    (start, end)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sono_ir::{Span, Token, TokenDetail, TokenList};

    use super::report;

    /// Build an arena by cutting `source` at the given byte offsets.
    fn arena(source: &str, cuts: &[usize]) -> TokenList {
        let mut bounds = vec![0];
        bounds.extend_from_slice(cuts);
        bounds.push(source.len());
        let mut tokens = Vec::new();
        let mut line = 0u32;
        for (seq, pair) in bounds.windows(2).enumerate() {
            let span = Span::new(pair[0] as u32, pair[1] as u32);
            tokens.push(Token {
                span,
                seq: seq as u32,
                line,
                column: 0,
                paren: 0,
                close: 0,
                indent: 0,
                detail: TokenDetail::Whitespace,
            });
            line += span.text(source).matches('\n').count() as u32;
        }
        TokenList::from_parts(source.to_owned(), tokens)
    }

    #[test]
    fn caret_on_single_line() {
        // Tokens: "abc", " ", "x..y", "\n"
        let list = arena("abc x..y\n", &[3, 4, 8]);
        let err = report(&list, 2, 2, "Empty segment in qualified identifier");
        assert_eq!(
            err.message(),
            "Lexical error at line: 1, column: 7\n\
             Empty segment in qualified identifier:\n\
             abc x..y\n\
             \u{20}   + ^+"
        );
    }

    #[test]
    fn line_bounds_skip_to_previous_newline() {
        // Tokens: "one\n", "bad", "\n", "two"
        let list = arena("one\nbad\ntwo", &[4, 7, 8]);
        let err = report(&list, 1, 0, "Unknown token");
        assert_eq!(
            err.message(),
            "Lexical error at line: 2, column: 1\n\
             Unknown token:\n\
             bad\n\
             ^ +"
        );
    }

    #[test]
    fn multi_line_token_interleaves_marker_lines() {
        // Tokens: "\"a\nb", " "
        let list = arena("\"a\nb ", &[4]);
        let err = report(&list, 0, 0, "Mismatching quote");
        assert_eq!(
            err.message(),
            "Lexical error at line: 1, column: 1\n\
             Mismatching quote:\n\
             \"a\n\
             ^\u{20}\n\
             b\n\
             +"
        );
    }

    #[test]
    fn offset_clamps_to_line_end() {
        let list = arena("x", &[]);
        let err = report(&list, 0, 9, "No digits found in number");
        assert_eq!(
            err.message(),
            "Lexical error at line: 1, column: 1\n\
             No digits found in number:\n\
             x\n\
             ^"
        );
    }
}
