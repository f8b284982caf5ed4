//! String literal classification.
//!
//! Handles the optional `u8`/`u16`/`u32` encoding prefix, quote matching for
//! the three quoted forms, escape sequence checks, and delimiter tag
//! matching for raw strings. Content is recorded as a span with escapes left
//! uninterpreted.

use sono_ir::{Encoding, Quote, Span, StrDetail, TokenDetail};

use crate::classify::Fault;

/// Whether a generic run should be read as a string literal.
///
/// True for a region starting with a quote, a raw opener `R"`, or an
/// encoding prefix immediately followed by either. A prefix with anything
/// else after it is an ordinary identifier run.
pub(crate) fn is_string_start(bytes: &[u8]) -> bool {
    fn starts_form(bytes: &[u8]) -> bool {
        matches!(bytes.first(), Some(b'"' | b'\'' | b'`'))
            || (bytes.first() == Some(&b'R') && bytes.get(1) == Some(&b'"'))
    }
    if starts_form(bytes) {
        return true;
    }
    if bytes.first() == Some(&b'u') {
        let digits = bytes[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        return digits > 0 && starts_form(&bytes[1 + digits..]);
    }
    false
}

pub(crate) fn classify_string(region: &str, base_pos: u32) -> Result<TokenDetail, Fault> {
    let bytes = region.as_bytes();
    let span_at = |range: std::ops::Range<usize>| {
        Span::new(base_pos + range.start as u32, base_pos + range.end as u32)
    };

    let mut encoding = Encoding::Bits8;
    let mut body_off = 0;
    if bytes.first() == Some(&b'u') && bytes.get(1).is_some_and(u8::is_ascii_digit) {
        let digits = bytes[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        encoding = match &region[1..1 + digits] {
            "8" => Encoding::Bits8,
            "16" => Encoding::Bits16,
            "32" => Encoding::Bits32,
            _ => return Err(Fault::new(1, "Unrecognized literal string encoding")),
        };
        body_off = 1 + digits;
    }
    let body = &bytes[body_off..];

    if body.first() == Some(&b'R') {
        return classify_raw(region, body_off, encoding, &span_at);
    }

    let quote_byte = body[0];
    let quote = match quote_byte {
        b'\'' => Quote::Single,
        b'`' => Quote::Backtick,
        _ => Quote::Double,
    };
    if body.len() == 1 {
        // A lone quote never closed; there is nothing to pair against.
        return Ok(TokenDetail::Str(StrDetail {
            encoding,
            quote,
            raw_tag: None,
            content: span_at(body_off + 1..body_off + 1),
            matched: false,
        }));
    }
    if body[body.len() - 1] != quote_byte {
        return Err(Fault::new(body_off + body.len() - 1, "Mismatching quote"));
    }

    let content = &body[1..body.len() - 1];
    check_escapes(content, body_off + 1)?;

    Ok(TokenDetail::Str(StrDetail {
        encoding,
        quote,
        raw_tag: None,
        content: span_at(body_off + 1..body_off + body.len() - 1),
        matched: true,
    }))
}

/// Walk the escape sequences of quoted content. Only `\u`/`\U` can fail;
/// hex, octal, and single-character escapes are length-checked by shape.
fn check_escapes(content: &[u8], content_off: usize) -> Result<(), Fault> {
    let mut i = 0;
    while i < content.len() {
        if content[i] != b'\\' {
            i += 1;
            continue;
        }
        let Some(&kind) = content.get(i + 1) else {
            break;
        };
        match kind {
            b'x' => {
                i += 2;
                i += content[i..].iter().take_while(|b| b.is_ascii_hexdigit()).count();
            }
            b'0'..=b'7' => {
                i += 2;
                i += content[i..]
                    .iter()
                    .take(2)
                    .take_while(|b| matches!(b, b'0'..=b'7'))
                    .count();
            }
            b'u' | b'U' => {
                let need = if kind == b'u' { 4 } else { 8 };
                let start = i + 2;
                let have = content.len().saturating_sub(start).min(need);
                for j in 0..have {
                    if !content[start + j].is_ascii_hexdigit() {
                        return Err(Fault::new(
                            content_off + start + j,
                            "Illegal character found in unicode literal",
                        ));
                    }
                }
                if have < need {
                    return Err(Fault::new(
                        content_off + content.len(),
                        "Insufficient characters found for unicode literal",
                    ));
                }
                i = start + need;
            }
            _ => i += 2,
        }
    }
    Ok(())
}

/// `R"<tag>( ... )<tag>"`: both delimiter tags must agree byte-for-byte.
fn classify_raw(
    region: &str,
    body_off: usize,
    encoding: Encoding,
    span_at: &impl Fn(std::ops::Range<usize>) -> Span,
) -> Result<TokenDetail, Fault> {
    let bytes = region.as_bytes();
    let malformed = || Fault::new(region.len(), "Mismatching raw string delimiter");

    // Opening tag sits between R" and the first parenthesis.
    let tag_start = body_off + 2;
    let open = bytes[tag_start..]
        .iter()
        .position(|&b| b == b'(')
        .map(|p| tag_start + p)
        .ok_or_else(malformed)?;
    let tag_len = open - tag_start;

    if bytes.last() != Some(&b'"') {
        return Err(malformed());
    }
    let inner_end = region.len() - 1;
    // Closing shape is )<tag>" with the same tag length.
    if inner_end < open + 1 + tag_len + 1 {
        return Err(malformed());
    }
    let close_tag_start = inner_end - tag_len;
    if bytes[close_tag_start - 1] != b')' {
        return Err(malformed());
    }
    if bytes[tag_start..open] != bytes[close_tag_start..inner_end] {
        return Err(Fault::new(close_tag_start, "Mismatching raw string delimiter"));
    }

    Ok(TokenDetail::Str(StrDetail {
        encoding,
        quote: Quote::Raw,
        raw_tag: Some(span_at(tag_start..open)),
        content: span_at(open + 1..close_tag_start - 1),
        matched: true,
    }))
}
