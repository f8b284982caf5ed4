//! Identifier, operator, and pack/unpack classification.
//!
//! A non-delimiter run resolves, in order, to an operator (all punctuation),
//! a reserved keyword, or a period-qualified identifier. Pack (`...rest`)
//! and unpack (`rest...`) forms are recognized before any of those and
//! validate their inner name separately.

use smallvec::SmallVec;
use sono_ir::{IdentifierDetail, Span, TokenDetail};

use crate::classify::Fault;
use crate::keywords;

/// Classify a `...rest` (pack) or `rest...` (unpack) region.
pub(crate) fn classify_pack_unpack(
    region: &str,
    base: u32,
    pack: bool,
) -> Result<TokenDetail, Fault> {
    let (rest, offset) = if pack {
        (&region[3..], 3)
    } else {
        (&region[..region.len() - 3], 0)
    };
    let form = if pack { "pack" } else { "unpack" };

    if let Some(idx) = rest.find('.') {
        return Err(Fault::new(
            idx + offset,
            format!("Period found in identifier {form}"),
        ));
    }
    if !rest.bytes().next().is_some_and(is_name_start) {
        return Err(Fault::new(
            offset,
            format!("Identifier {form} must begin with letters or underscore"),
        ));
    }
    if keywords::lookup(rest).is_some() {
        return Err(Fault::new(
            offset,
            format!("Identifier {form} cannot be a keyword"),
        ));
    }

    let start = base + offset as u32;
    Ok(TokenDetail::Identifier(IdentifierDetail {
        leaf: Span::new(start, start + rest.len() as u32),
        path: SmallVec::new(),
        pack,
        unpack: !pack,
    }))
}

/// Classify a generic run: operator, keyword, or qualified identifier.
pub(crate) fn classify_word(region: &str, base: u32) -> Result<TokenDetail, Fault> {
    if region.bytes().all(|b| b.is_ascii_punctuation()) {
        if let Some(idx) = region.find('.') {
            return Err(Fault::new(idx, "Period found in operator"));
        }
        return Ok(TokenDetail::Operator {
            text: Span::new(base, base + region.len() as u32),
        });
    }

    if let Some(keyword) = keywords::lookup(region) {
        return Ok(TokenDetail::Keyword(keyword));
    }

    let mut segments: SmallVec<[Span; 4]> = SmallVec::new();
    for (offset, segment) in split_qualified(region) {
        if segment.is_empty() {
            return Err(Fault::new(offset, "Empty segment in qualified identifier"));
        }
        if !segment.bytes().next().is_some_and(is_name_start) {
            return Err(Fault::new(
                offset,
                "Identifier or identifier segment must begin with a letter, underscore or hyphen",
            ));
        }
        if keywords::lookup(segment).is_some() {
            return Err(Fault::new(offset, "Identifier segment cannot be a keyword"));
        }
        let start = base + offset as u32;
        segments.push(Span::new(start, start + segment.len() as u32));
    }

    // split_qualified always yields at least one segment for a non-empty run.
    let leaf = segments.pop().unwrap_or_else(|| Span::new(base, base));
    Ok(TokenDetail::Identifier(IdentifierDetail {
        leaf,
        path: segments,
        pack: false,
        unpack: false,
    }))
}

fn is_name_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// Period-separated segments with their byte offsets, trailing empties
/// included so `a.` and `a..b` report the empty segment position.
fn split_qualified(region: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    region.split('.').map(move |segment| {
        let at = offset;
        offset += segment.len() + 1;
        (at, segment)
    })
}
