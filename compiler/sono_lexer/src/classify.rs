//! Token classification dispatch.
//!
//! Each scanned region is resolved to its detail by trying the
//! micro-grammars in a fixed priority order: list markers, pack/unpack,
//! operators, numbers, strings, keywords and identifiers, whitespace. The
//! first grammar whose trigger matches owns the region; its validator
//! either fills in the detail or reports a fault at a byte offset inside
//! the region.

use sono_diagnostic::{report, LexicalError};
use sono_ir::{TokenDetail, TokenList};
use tracing::trace;

use crate::ident::{classify_pack_unpack, classify_word};
use crate::number::{classify_number, is_number_start};
use crate::scanner::is_space;
use crate::string::{classify_string, is_string_start};

/// A validation failure local to one region: a byte offset into the region
/// and the diagnostic message, before line context is attached.
#[derive(Debug)]
pub(crate) struct Fault {
    offset: usize,
    message: String,
}

impl Fault {
    pub(crate) fn new(offset: usize, message: impl Into<String>) -> Self {
        Fault {
            offset,
            message: message.into(),
        }
    }

    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }
}

/// Classify every token in place. Stops at the first fault; there is no
/// partial recovery, the whole file either classifies or errors.
pub(crate) fn classify_all(list: &mut TokenList) -> Result<(), LexicalError> {
    for ix in 0..list.len() {
        let detail = {
            let region = list.token_text(ix);
            let base = list.get(ix).span.start;
            dispatch(region, base)
                .map_err(|fault| report(list, ix, fault.offset(), fault.message()))?
        };
        trace!(ix, ?detail, "classified");
        list.get_mut(ix).detail = detail;
    }
    Ok(())
}

fn dispatch(region: &str, base: u32) -> Result<TokenDetail, Fault> {
    match region {
        "(" => {
            return Ok(TokenDetail::List {
                close: false,
                unpack: false,
            })
        }
        ")" => {
            return Ok(TokenDetail::List {
                close: true,
                unpack: false,
            })
        }
        ")..." => {
            return Ok(TokenDetail::List {
                close: true,
                unpack: true,
            })
        }
        _ => {}
    }

    let bytes = region.as_bytes();
    if region.starts_with("...") {
        return classify_pack_unpack(region, base, true);
    }
    if region.ends_with("...") {
        return classify_pack_unpack(region, base, false);
    }
    if bytes.iter().all(|b| b.is_ascii_punctuation()) {
        return classify_word(region, base);
    }
    if is_number_start(bytes[0]) {
        return classify_number(region, base);
    }
    if is_string_start(bytes) {
        return classify_string(region, base);
    }
    if !bytes.iter().any(|&b| is_space(b)) {
        return classify_word(region, base);
    }
    if bytes.iter().all(|&b| is_space(b)) {
        return Ok(TokenDetail::Whitespace);
    }
    // Unreachable with the current grammars; kept so a segmentation bug
    // surfaces as a diagnostic instead of a misclassification.
    Err(Fault::new(0, "Unknown token"))
}
