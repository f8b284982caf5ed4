//! Number classification.
//!
//! Grammar: optional sign, optional 2-byte base tag, at most one decimal
//! point splitting numerator from denominator, and an optional trailing
//! exponent introduced by the base's marker character. Each digit run is
//! checked against the base's alphabet; offsets in faults are byte positions
//! inside the region.

use sono_ir::{Base, NumberDetail, Span, TokenDetail};

use crate::classify::Fault;

/// Whether a generic run should be read as a number at all.
pub(crate) fn is_number_start(byte: u8) -> bool {
    matches!(byte, b'+' | b'-' | b'.') || byte.is_ascii_digit()
}

pub(crate) fn classify_number(region: &str, base_pos: u32) -> Result<TokenDetail, Fault> {
    let bytes = region.as_bytes();
    let span_at = |range: std::ops::Range<usize>| {
        Span::new(base_pos + range.start as u32, base_pos + range.end as u32)
    };

    let mut i = 0;
    let sign = if matches!(bytes.first(), Some(b'+' | b'-')) {
        i = 1;
        Some(span_at(0..1))
    } else {
        None
    };

    let mut base = Base::Decimal;
    let base_tag = if bytes.get(i) == Some(&b'0')
        && bytes.get(i + 1).is_some_and(u8::is_ascii_alphabetic)
    {
        base = Base::from_tag_letter(bytes[i + 1])
            .ok_or_else(|| Fault::new(i + 1, "Unknown base"))?;
        let tag = span_at(i..i + 2);
        i += 2;
        Some(tag)
    } else {
        None
    };

    let leading_point = if bytes.get(i) == Some(&b'.') {
        let point = span_at(i..i + 1);
        i += 1;
        Some(point)
    } else {
        None
    };

    // Remainder after sign, tag, and any leading point. At most one further
    // point may split it; anything beyond that has no number shape at all.
    let rem = &bytes[i..];
    let rem_off = i;
    let inner_point = rem.iter().position(|&b| b == b'.');
    let (before, after) = match inner_point {
        Some(p) => {
            if rem[p + 1..].contains(&b'.') {
                return Err(Fault::new(rem_off, "Number token does not match"));
            }
            (&rem[..p], &rem[p + 1..])
        }
        None => (rem, &rem[rem.len()..]),
    };
    if before.is_empty() && after.is_empty() {
        return Err(Fault::new(rem_off, "No digits found in number"));
    }

    let marker = base.exponent_marker();
    let detail;
    if let Some(p) = inner_point {
        if leading_point.is_some() {
            return Err(Fault::new(rem_off + p, "Second decimal point found in number"));
        }
        if let Some(at) = before.iter().position(|&b| b == marker) {
            return Err(Fault::new(
                rem_off + at,
                "Exponent point found before decimal point",
            ));
        }
        let denom_off = rem_off + p + 1;
        let exp = extract_exponent(after, denom_off, marker, &span_at)?;
        detail = NumberDetail {
            sign,
            base_tag,
            base,
            numerator: span_at(rem_off..rem_off + p),
            decimal_point: Some(span_at(rem_off + p..rem_off + p + 1)),
            denominator: span_at(denom_off..denom_off + exp.run_len),
            exponent_marker: exp.marker,
            exponent_sign: exp.sign,
            exponent: exp.digits,
        };
    } else {
        let exp = extract_exponent(before, rem_off, marker, &span_at)?;
        let run = span_at(rem_off..rem_off + exp.run_len);
        let empty = Span::empty(base_pos + rem_off as u32);
        let (numerator, denominator) = if leading_point.is_some() {
            (empty, run)
        } else {
            (run, empty)
        };
        detail = NumberDetail {
            sign,
            base_tag,
            base,
            numerator,
            decimal_point: leading_point,
            denominator,
            exponent_marker: exp.marker,
            exponent_sign: exp.sign,
            exponent: exp.digits,
        };
    }

    // A number carries digits in its numerator or denominator; an exponent
    // alone does not qualify.
    if detail.numerator.is_empty() && detail.denominator.is_empty() {
        return Err(Fault::new(rem_off, "No digits found in number"));
    }

    check_digits(region, base_pos, base, detail.numerator, "numerator")?;
    check_digits(region, base_pos, base, detail.denominator, "denominator")?;
    check_digits(region, base_pos, base, detail.exponent, "exponent")?;

    Ok(TokenDetail::Number(detail))
}

struct Exponent {
    /// Length of the digit run once the exponent suffix is trimmed off.
    run_len: usize,
    marker: Option<Span>,
    sign: Option<Span>,
    digits: Span,
}

/// Split a trailing `<marker><sign?><digits>` suffix off a digit run.
fn extract_exponent(
    run: &[u8],
    run_off: usize,
    marker: u8,
    span_at: &impl Fn(std::ops::Range<usize>) -> Span,
) -> Result<Exponent, Fault> {
    let Some(m) = run.iter().position(|&b| b == marker) else {
        return Ok(Exponent {
            run_len: run.len(),
            marker: None,
            sign: None,
            digits: span_at(run_off + run.len()..run_off + run.len()),
        });
    };
    let mut d = m + 1;
    let sign = if matches!(run.get(d), Some(b'+' | b'-')) {
        d += 1;
        Some(span_at(run_off + m + 1..run_off + m + 2))
    } else {
        None
    };
    if d == run.len() {
        return Err(Fault::new(run_off + m + 2, "Exponent not found"));
    }
    Ok(Exponent {
        run_len: m,
        marker: Some(span_at(run_off + m..run_off + m + 1)),
        sign,
        digits: span_at(run_off + d..run_off + run.len()),
    })
}

/// Report the first byte outside the base's digit alphabet.
fn check_digits(
    region: &str,
    base_pos: u32,
    base: Base,
    run: Span,
    aspect: &str,
) -> Result<(), Fault> {
    let start = (run.start - base_pos) as usize;
    let end = (run.end - base_pos) as usize;
    for (idx, &byte) in region.as_bytes()[start..end].iter().enumerate() {
        if !base.legal_digit(byte) {
            return Err(Fault::new(
                start + idx,
                format!("Illegal character found in {aspect}"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sono_ir::{Base, NumberDetail, Span, TokenDetail};

    use super::classify_number;

    fn number(region: &str) -> NumberDetail {
        match classify_number(region, 0).unwrap() {
            TokenDetail::Number(n) => n,
            other => panic!("expected number, got {other:?}"),
        }
    }

    fn fault(region: &str) -> (usize, String) {
        let fault = classify_number(region, 0).unwrap_err();
        (fault.offset(), fault.message().to_owned())
    }

    #[test]
    fn plain_integer() {
        let n = number("42");
        assert_eq!(n.base, Base::Decimal);
        assert_eq!(n.numerator, Span::new(0, 2));
        assert!(n.denominator.is_empty());
        assert!(n.sign.is_none() && n.base_tag.is_none() && n.decimal_point.is_none());
    }

    #[test]
    fn signed_fraction_with_exponent() {
        let n = number("-12.5e+3");
        assert_eq!(n.sign, Some(Span::new(0, 1)));
        assert_eq!(n.numerator, Span::new(1, 3));
        assert_eq!(n.decimal_point, Some(Span::new(3, 4)));
        assert_eq!(n.denominator, Span::new(4, 5));
        assert_eq!(n.exponent_marker, Some(Span::new(5, 6)));
        assert_eq!(n.exponent_sign, Some(Span::new(6, 7)));
        assert_eq!(n.exponent, Span::new(7, 8));
    }

    #[test]
    fn leading_point_puts_digits_in_the_denominator() {
        let n = number(".5");
        assert!(n.numerator.is_empty());
        assert_eq!(n.decimal_point, Some(Span::new(0, 1)));
        assert_eq!(n.denominator, Span::new(1, 2));
    }

    #[test]
    fn base_tags_pick_alphabet_and_marker() {
        let n = number("0xdead");
        assert_eq!(n.base, Base::Hex);
        assert_eq!(n.base_tag, Some(Span::new(0, 2)));
        assert_eq!(n.numerator, Span::new(2, 6));

        // Hex uses p, so e stays a digit.
        let n = number("0x1e");
        assert!(n.exponent_marker.is_none());
        let n = number("0x1p4");
        assert_eq!(n.exponent, Span::new(4, 5));

        let n = number("0b1011");
        assert_eq!(n.base, Base::Binary);
        let n = number("0a1z^2");
        assert_eq!(n.base, Base::Base36);
        assert_eq!(n.exponent, Span::new(5, 6));
        let n = number(r"0sAb+\^3");
        assert_eq!(n.base, Base::Base64);
        assert_eq!(n.numerator, Span::new(2, 6));
    }

    #[test]
    fn unknown_base_points_at_the_letter() {
        assert_eq!(fault("0q12"), (1, "Unknown base".to_owned()));
        assert_eq!(fault("-0q1"), (2, "Unknown base".to_owned()));
    }

    #[test]
    fn group_separators_are_digits() {
        let n = number("1_000'000");
        assert_eq!(n.numerator, Span::new(0, 9));
    }

    #[test]
    fn second_decimal_point_errors() {
        assert_eq!(fault(".1.2"), (2, "Second decimal point found in number".to_owned()));
    }

    #[test]
    fn three_points_have_no_number_shape() {
        assert_eq!(fault("1.2.3"), (0, "Number token does not match".to_owned()));
    }

    #[test]
    fn exponent_before_decimal_point_errors() {
        assert_eq!(
            fault("1e2.5"),
            (1, "Exponent point found before decimal point".to_owned())
        );
    }

    #[test]
    fn missing_exponent_digits_error() {
        assert_eq!(fault("1e"), (3, "Exponent not found".to_owned()));
        assert_eq!(fault("1e+"), (3, "Exponent not found".to_owned()));
        assert_eq!(fault("1.5e"), (5, "Exponent not found".to_owned()));
    }

    #[test]
    fn exponent_only_has_no_digits() {
        assert_eq!(fault(".e5"), (1, "No digits found in number".to_owned()));
        assert_eq!(fault("0x"), (2, "No digits found in number".to_owned()));
    }

    #[test]
    fn illegal_digits_report_their_position() {
        assert_eq!(
            fault("0b102"),
            (4, "Illegal character found in numerator".to_owned())
        );
        assert_eq!(
            fault("1.2x3"),
            (3, "Illegal character found in denominator".to_owned())
        );
        assert_eq!(
            fault("1e2x"),
            (3, "Illegal character found in exponent".to_owned())
        );
        assert_eq!(
            fault("0o9"),
            (2, "Illegal character found in numerator".to_owned())
        );
    }
}
