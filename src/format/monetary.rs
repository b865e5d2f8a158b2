//! Brazilian-locale monetary string parsing and formatting.
//!
//! The form layer feeds these functions raw text on every keystroke, so the
//! parser must tolerate partially-typed values ("1.0" is a decimal in
//! progress, not a malformed thousands group) and must never panic. Failure
//! is always reported as [`EngineError::InvalidMonetaryValue`].
//!
//! The locale convention is `.` for thousands grouping and `,` for the
//! decimal separator. When both separators appear, the one that occurs later
//! is the decimal separator; a dot after a comma is rejected as inconsistent
//! formatting.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};

/// The outcome of normalizing raw user input.
enum Normalized {
    /// A decimal value still being typed; kept as display text with the
    /// dot already swapped for a comma.
    Partial(String),
    /// A fully-interpreted numeric value.
    Value(Decimal),
}

/// Formats a value with two decimals, `,` as the decimal separator and `.`
/// as the thousands separator.
///
/// Rounding is half away from zero, the convention used for currency
/// display. The sign is preserved.
///
/// # Example
///
/// ```
/// use holerite_engine::format::format_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("1234567.5").unwrap();
/// assert_eq!(format_amount(value), "1.234.567,50");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());

    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, f),
        None => (text.as_str(), "00"),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{},{}", sign, grouped, frac_part)
}

/// Reformats raw user input in the generic style.
///
/// Zero renders as `"0,00"` and a leading minus sign is honored. A value
/// still being typed (one dot with fewer than three trailing digits) is
/// echoed back with the dot swapped for a comma rather than reformatted.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonetaryValue`] when the text cannot be
/// interpreted: inconsistent separators (a dot after a comma), malformed
/// thousands groups, or leftovers that do not form a number.
pub fn reformat_amount(raw: &str) -> EngineResult<String> {
    match normalize(raw, true)? {
        Normalized::Partial(text) => Ok(text),
        Normalized::Value(value) => Ok(format_amount(value)),
    }
}

/// Reformats raw user input in the line-item style.
///
/// Line items are unsigned and an exact-zero value renders as the empty
/// string, so blank amounts in the discount/earning columns stay blank.
///
/// # Errors
///
/// Same conditions as [`reformat_amount`].
pub fn reformat_line_item(raw: &str) -> EngineResult<String> {
    match normalize(raw, false)? {
        Normalized::Partial(text) => Ok(text),
        Normalized::Value(value) => {
            if value.is_zero() {
                Ok(String::new())
            } else {
                Ok(format_amount(value))
            }
        }
    }
}

/// Parses raw user input in the generic style into a numeric value.
///
/// A partially-typed decimal parses as its numeric value ("1,0" is 1.0).
pub fn parse_amount(raw: &str) -> EngineResult<Decimal> {
    numeric(normalize(raw, true)?, raw)
}

/// Parses raw user input in the line-item style into a numeric value.
pub fn parse_line_item(raw: &str) -> EngineResult<Decimal> {
    numeric(normalize(raw, false)?, raw)
}

/// Converts a normalization outcome to a numeric value.
fn numeric(normalized: Normalized, raw: &str) -> EngineResult<Decimal> {
    match normalized {
        Normalized::Value(value) => Ok(value),
        Normalized::Partial(text) => {
            let dotted = text.replace(',', ".");
            let trimmed = dotted.strip_suffix('.').unwrap_or(&dotted);
            Decimal::from_str(trimmed).map_err(|_| EngineError::InvalidMonetaryValue {
                input: raw.to_string(),
            })
        }
    }
}

/// Normalizes raw text into either a partial display string or a value.
///
/// The branch order is load-bearing: live-typing passthrough runs before
/// the thousands-group interpretation, which runs before the multi-dot
/// collapse and the separator resolution.
fn normalize(raw: &str, signed: bool) -> EngineResult<Normalized> {
    let invalid = || EngineError::InvalidMonetaryValue {
        input: raw.to_string(),
    };

    // Strip everything that cannot be part of a monetary string.
    let mut value: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',' || (signed && *c == '-'))
        .collect();

    // Live-typing passthrough: one dot with fewer than three trailing
    // digits is a decimal separator in progress, not a thousands group.
    if is_partial_decimal(&value, signed) {
        return Ok(Normalized::Partial(value.replace('.', ",")));
    }

    // An integer written with thousands groups ("1.000", "-1.000.000").
    if is_grouped_integer(&value, signed) {
        let digits = value.replace('.', "");
        let number = Decimal::from_str(&digits).map_err(|_| invalid())?;
        return Ok(Normalized::Value(number));
    }

    // More than one dot: every group between the first and the last dot
    // must have exactly three digits; the last dot stays as the decimal
    // separator candidate.
    if value.matches('.').count() > 1 {
        let parts: Vec<&str> = value.split('.').collect();
        if parts[1..parts.len() - 1].iter().all(|p| p.len() == 3) {
            let head = parts[..parts.len() - 1].concat();
            value = format!("{}.{}", head, parts[parts.len() - 1]);
        } else {
            return Err(invalid());
        }
    }

    // Separator resolution: whichever separator occurs later is the
    // decimal one. A dot after a comma is not Brazilian formatting.
    let has_comma = value.contains(',');
    let has_dot = value.contains('.');
    if has_comma && has_dot {
        if value.rfind(',') > value.rfind('.') {
            value = value.replace('.', "").replace(',', ".");
        } else {
            return Err(invalid());
        }
    } else if has_comma {
        value = value.replace(',', ".");
    }

    if value.is_empty() {
        return Ok(Normalized::Value(Decimal::ZERO));
    }

    let number = Decimal::from_str(&value).map_err(|_| invalid())?;
    Ok(Normalized::Value(number))
}

/// Matches `digits.digits` with fewer than three fractional digits, with an
/// optional leading minus in the signed variant.
fn is_partial_decimal(value: &str, signed: bool) -> bool {
    let body = if signed {
        value.strip_prefix('-').unwrap_or(value)
    } else {
        value
    };
    let Some((int_part, frac_part)) = body.split_once('.') else {
        return false;
    };
    !int_part.is_empty()
        && int_part.chars().all(|c| c.is_ascii_digit())
        && frac_part.len() < 3
        && frac_part.chars().all(|c| c.is_ascii_digit())
        && body.matches('.').count() == 1
}

/// Matches an integer written with thousands groups.
///
/// The generic (signed) variant accepts any number of groups, including
/// none; the line-item variant only promotes a single exact group
/// (`\d{1,3}.\d{3}`), leaving everything else to the later branches.
fn is_grouped_integer(value: &str, signed: bool) -> bool {
    if signed {
        let body = value.strip_prefix('-').unwrap_or(value);
        let parts: Vec<&str> = body.split('.').collect();
        let Some((first, groups)) = parts.split_first() else {
            return false;
        };
        (1..=3).contains(&first.len())
            && first.chars().all(|c| c.is_ascii_digit())
            && groups
                .iter()
                .all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit()))
    } else {
        let Some((int_part, group)) = value.split_once('.') else {
            return false;
        };
        (1..=3).contains(&int_part.len())
            && int_part.chars().all(|c| c.is_ascii_digit())
            && group.len() == 3
            && group.chars().all(|c| c.is_ascii_digit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(dec("1234.56")), "1.234,56");
        assert_eq!(format_amount(dec("1000000")), "1.000.000,00");
        assert_eq!(format_amount(dec("999.99")), "999,99");
    }

    #[test]
    fn test_format_amount_zero_and_sign() {
        assert_eq!(format_amount(Decimal::ZERO), "0,00");
        assert_eq!(format_amount(dec("-1234.5")), "-1.234,50");
    }

    #[test]
    fn test_format_amount_rounds_half_away_from_zero() {
        assert_eq!(format_amount(dec("2.775")), "2,78");
        assert_eq!(format_amount(dec("2.7735")), "2,77");
    }

    #[test]
    fn test_live_typing_passthrough() {
        assert_eq!(reformat_amount("1.0").unwrap(), "1,0");
        assert_eq!(reformat_amount("1.").unwrap(), "1,");
        assert_eq!(reformat_line_item("12.34").unwrap(), "12,34");
    }

    #[test]
    fn test_exact_thousands_group_promotes_to_integer() {
        assert_eq!(reformat_line_item("1.000").unwrap(), "1.000,00");
        assert_eq!(reformat_amount("1.000").unwrap(), "1.000,00");
        assert_eq!(reformat_amount("1.000.000").unwrap(), "1.000.000,00");
    }

    #[test]
    fn test_multi_dot_collapse() {
        // The middle group has three digits, so the first dot is a
        // thousands separator and the last marks the decimals.
        assert_eq!(reformat_line_item("1.000.00").unwrap(), "1.000,00");
        assert!(reformat_line_item("1.00.000").is_err());
    }

    #[test]
    fn test_brazilian_separator_resolution() {
        assert_eq!(reformat_amount("1.234,56").unwrap(), "1.234,56");
        assert_eq!(parse_amount("1.234,56").unwrap(), dec("1234.56"));
        assert_eq!(reformat_amount("100000,00").unwrap(), "100.000,00");
    }

    #[test]
    fn test_dot_after_comma_is_invalid() {
        let err = parse_amount("1,234.56").unwrap_err();
        assert!(matches!(err, EngineError::InvalidMonetaryValue { .. }));
        assert!(reformat_line_item("1,234.56").is_err());
    }

    #[test]
    fn test_comma_only_is_decimal_separator() {
        assert_eq!(parse_amount("12,5").unwrap(), dec("12.5"));
        assert_eq!(reformat_amount("12,5").unwrap(), "12,50");
    }

    #[test]
    fn test_extraneous_characters_are_stripped() {
        assert_eq!(reformat_amount("R$ 1.234,56").unwrap(), "1.234,56");
        assert_eq!(parse_amount("R$ 1.234,56").unwrap(), dec("1234.56"));
    }

    #[test]
    fn test_empty_and_non_numeric_input_is_zero() {
        // Stripping can leave nothing behind; that is zero, not an error.
        assert_eq!(reformat_amount("").unwrap(), "0,00");
        assert_eq!(reformat_amount("abc").unwrap(), "0,00");
        assert_eq!(parse_amount("abc").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_line_item_zero_renders_blank() {
        assert_eq!(reformat_line_item("0").unwrap(), "");
        assert_eq!(reformat_line_item("").unwrap(), "");
        assert_eq!(reformat_line_item("0,00").unwrap(), "");
    }

    #[test]
    fn test_line_item_strips_sign() {
        // The unsigned variant drops the minus during stripping.
        assert_eq!(reformat_line_item("-150,00").unwrap(), "150,00");
    }

    #[test]
    fn test_negative_generic_values() {
        assert_eq!(reformat_amount("-1.234,5").unwrap(), "-1.234,50");
        assert_eq!(parse_amount("-1.000").unwrap(), dec("-1000"));
    }

    #[test]
    fn test_malformed_after_normalization_is_invalid() {
        assert!(parse_amount("1,2,3").is_err());
        assert!(reformat_amount("-").is_err());
        assert!(reformat_amount("1-2").is_err());
    }

    #[test]
    fn test_single_dot_long_fraction_is_plain_decimal() {
        // Five fractional digits cannot be a thousands group or a partial.
        assert_eq!(reformat_amount("1.00000").unwrap(), "1,00");
        assert_eq!(parse_amount("1.00000").unwrap(), dec("1.00000"));
    }

    #[test]
    fn test_round_trip_format_parse() {
        for s in ["0.00", "0.01", "999.99", "1000.00", "1234567.89"] {
            let value = dec(s);
            assert_eq!(parse_amount(&format_amount(value)).unwrap(), value);
        }
    }

    #[test]
    fn test_partial_parses_as_numeric_value() {
        assert_eq!(parse_amount("1.0").unwrap(), dec("1.0"));
        assert_eq!(parse_amount("1.").unwrap(), dec("1"));
        assert_eq!(parse_line_item("12.3").unwrap(), dec("12.3"));
    }
}
