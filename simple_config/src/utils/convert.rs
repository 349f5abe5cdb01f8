//! Scalar conversion of literal text into integers, doubles and booleans.
//!
//! These are pure functions; they never log. Lookup errors built on top of
//! them carry the section and key context.

use super::text::is_space;
use crate::logging::codes::{self, Code};

/// Conversion failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("cannot convert '{text}' to {target}")]
    InvalidFormat { text: String, target: &'static str },

    #[error("'{text}' is out of range of {target}")]
    OutOfRange { text: String, target: &'static str },
}

impl ConversionError {
    pub fn error_code(&self) -> Code {
        match self {
            Self::InvalidFormat { .. } => codes::lookup::INVALID_FORMAT,
            Self::OutOfRange { .. } => codes::lookup::OUT_OF_RANGE,
        }
    }

    fn invalid(text: &str, target: &'static str) -> Self {
        Self::InvalidFormat {
            text: text.to_string(),
            target,
        }
    }

    fn out_of_range(text: &str, target: &'static str) -> Self {
        Self::OutOfRange {
            text: text.to_string(),
            target,
        }
    }
}

const INT_TARGET: &str = "int";
const DOUBLE_TARGET: &str = "double";
const BOOL_TARGET: &str = "bool";

/// Split an optional `+`/`-` off the front.
fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

fn strip_hex_prefix(text: &str) -> Option<&str> {
    text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))
}

/// Convert `text` to an `i32` in the given `base`.
///
/// Leading whitespace and a sign are accepted. Base 0 picks 16 when the
/// digits start with `0x`/`0X` and 10 otherwise; a leading `0` alone does
/// not mean octal. Base 16 also accepts the `0x` prefix. Range is checked
/// before trailing characters, so an overflowing prefix reports
/// `OutOfRange`.
pub fn str_to_int(text: &str, base: u32) -> Result<i32, ConversionError> {
    if base != 0 && !(2..=36).contains(&base) {
        return Err(ConversionError::invalid(text, INT_TARGET));
    }

    let (negative, unsigned) = split_sign(text.trim_start_matches(is_space));

    let (radix, digits) = match (base, strip_hex_prefix(unsigned)) {
        (0 | 16, Some(rest)) => (16, rest),
        (0, None) => (10, unsigned),
        (b, _) => (b, unsigned),
    };

    // i64 holds any i32 magnitude plus one more digit without overflowing
    let limit: i64 = if negative {
        -(i32::MIN as i64)
    } else {
        i32::MAX as i64
    };
    let mut magnitude: i64 = 0;
    let mut overflow = false;
    let mut consumed = 0;

    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            break;
        };
        consumed += c.len_utf8();
        if !overflow {
            magnitude = magnitude * radix as i64 + digit as i64;
            overflow = magnitude > limit;
        }
    }

    if overflow {
        return Err(ConversionError::out_of_range(text, INT_TARGET));
    }
    if consumed == 0 || consumed != digits.len() {
        return Err(ConversionError::invalid(text, INT_TARGET));
    }

    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).map_err(|_| ConversionError::out_of_range(text, INT_TARGET))
}

/// Convert `text` to an `f64`.
///
/// Accepts leading whitespace, a sign, a decimal mantissa (`1`, `1.`, `.5`,
/// `1.5`) and an optional `e`/`E` exponent with its own sign. Overflow to
/// infinity and underflow of a non-zero mantissa to zero are `OutOfRange`.
///
/// Hexadecimal text is `InvalidFormat`, including lexer output such as
/// `0x10` or `0x1.8`; read hex integers with [`str_to_int`].
pub fn str_to_double(text: &str) -> Result<f64, ConversionError> {
    let number = text.trim_start_matches(is_space);
    let bytes = number.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let mut mantissa_digits = 0;
    let mut mantissa_nonzero = false;
    let mut scan_digits = |pos: &mut usize| {
        while let Some(b) = bytes.get(*pos).filter(|b| b.is_ascii_digit()) {
            mantissa_digits += 1;
            mantissa_nonzero |= *b != b'0';
            *pos += 1;
        }
    };

    scan_digits(&mut pos);
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        scan_digits(&mut pos);
    }
    if mantissa_digits == 0 {
        return Err(ConversionError::invalid(text, DOUBLE_TARGET));
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exponent_start = pos;
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
        if pos == exponent_start {
            return Err(ConversionError::invalid(text, DOUBLE_TARGET));
        }
    }

    if pos != bytes.len() {
        return Err(ConversionError::invalid(text, DOUBLE_TARGET));
    }

    let value: f64 = number
        .parse()
        .map_err(|_| ConversionError::invalid(text, DOUBLE_TARGET))?;

    if value.is_infinite() || (value == 0.0 && mantissa_nonzero) {
        return Err(ConversionError::out_of_range(text, DOUBLE_TARGET));
    }

    Ok(value)
}

/// Convert `text` to a `bool`.
///
/// `TRUE`/`FALSE` in any case, otherwise an integer where non-zero is true.
pub fn str_to_bool(text: &str) -> Result<bool, ConversionError> {
    if text.eq_ignore_ascii_case("true") {
        return Ok(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return Ok(false);
    }

    str_to_int(text, 0)
        .map(|value| value != 0)
        .map_err(|error| match error {
            ConversionError::InvalidFormat { .. } => ConversionError::invalid(text, BOOL_TARGET),
            ConversionError::OutOfRange { .. } => ConversionError::out_of_range(text, BOOL_TARGET),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_str_to_int_decimal_and_hex() {
        assert_eq!(str_to_int("12345", 0), Ok(12345));
        assert_eq!(str_to_int("-12345", 0), Ok(-12345));
        assert_eq!(str_to_int("+7", 0), Ok(7));
        assert_eq!(str_to_int("0x12345", 0), Ok(0x12345));
        assert_eq!(str_to_int("-0x1234FFFF", 0), Ok(-0x1234FFFF));
        assert_eq!(str_to_int("0XfF", 0), Ok(255));
        assert_eq!(str_to_int(" \t42", 0), Ok(42));
    }

    #[test]
    fn test_str_to_int_explicit_base() {
        assert_eq!(str_to_int("12345", 16), Ok(0x12345));
        assert_eq!(str_to_int("0x10", 16), Ok(16));
        assert_eq!(str_to_int("1001", 2), Ok(9));
        assert_eq!(str_to_int("z", 36), Ok(35));
    }

    #[test]
    fn test_str_to_int_leading_zero_is_decimal() {
        assert_eq!(str_to_int("010", 0), Ok(10));
        assert_eq!(str_to_int("0", 0), Ok(0));
    }

    #[test]
    fn test_str_to_int_range_limits() {
        assert_eq!(str_to_int("2147483647", 0), Ok(i32::MAX));
        assert_eq!(str_to_int("-2147483648", 0), Ok(i32::MIN));
        assert_matches!(
            str_to_int("2147483648", 0),
            Err(ConversionError::OutOfRange { .. })
        );
        assert_matches!(
            str_to_int("4000000000", 0),
            Err(ConversionError::OutOfRange { .. })
        );
        assert_matches!(
            str_to_int("-4000000000", 0),
            Err(ConversionError::OutOfRange { .. })
        );
        assert_matches!(
            str_to_int("99999999999999999999abc", 0),
            Err(ConversionError::OutOfRange { .. })
        );
    }

    #[test]
    fn test_str_to_int_invalid_forms() {
        for text in ["", "   ", " abc", "123abc", "123 123", "123.123", "-", "0x", "12 "] {
            assert_matches!(
                str_to_int(text, 0),
                Err(ConversionError::InvalidFormat { .. }),
                "input {:?}",
                text
            );
        }
        assert_matches!(str_to_int("2", 2), Err(ConversionError::InvalidFormat { .. }));
    }

    #[test]
    fn test_str_to_int_rejects_unsupported_base() {
        assert_matches!(
            str_to_int("10", 1),
            Err(ConversionError::InvalidFormat { target: "int", .. })
        );
        assert_matches!(str_to_int("10", 37), Err(ConversionError::InvalidFormat { .. }));
    }

    #[test]
    fn test_str_to_double_valid_forms() {
        assert_eq!(str_to_double("123.512341234"), Ok(123.512341234));
        assert_eq!(str_to_double("-1235123.41234"), Ok(-1235123.41234));
        assert_eq!(str_to_double("-1235.214e10"), Ok(-1235.214e10));
        assert_eq!(str_to_double("-1432.4352e3"), Ok(-1432435.2));
        assert_eq!(str_to_double("1."), Ok(1.0));
        assert_eq!(str_to_double(".5"), Ok(0.5));
        assert_eq!(str_to_double("  2E-2"), Ok(0.02));
        assert_eq!(str_to_double("0.0"), Ok(0.0));
        assert_eq!(str_to_double("100"), Ok(100.0));
    }

    #[test]
    fn test_str_to_double_out_of_range() {
        assert_matches!(
            str_to_double("100e1000000"),
            Err(ConversionError::OutOfRange { target: "double", .. })
        );
        assert_matches!(
            str_to_double("-100e10000000"),
            Err(ConversionError::OutOfRange { .. })
        );
        assert_matches!(str_to_double("1e-400"), Err(ConversionError::OutOfRange { .. }));
    }

    #[test]
    fn test_str_to_double_invalid_forms() {
        for text in [
            "", "abcd", "123.Z", "123.0   13", ".", "1e", "1e+", "inf", "NaN", "0x1p3", "0x10",
            "0x1.8",
        ] {
            assert_matches!(
                str_to_double(text),
                Err(ConversionError::InvalidFormat { .. }),
                "input {:?}",
                text
            );
        }
    }

    #[test]
    fn test_str_to_bool() {
        assert_eq!(str_to_bool("true"), Ok(true));
        assert_eq!(str_to_bool("True"), Ok(true));
        assert_eq!(str_to_bool("false"), Ok(false));
        assert_eq!(str_to_bool("FALSE"), Ok(false));
        assert_eq!(str_to_bool("1"), Ok(true));
        assert_eq!(str_to_bool("0"), Ok(false));
        assert_eq!(str_to_bool("-3"), Ok(true));
        assert_matches!(
            str_to_bool("abc"),
            Err(ConversionError::InvalidFormat { target: "bool", .. })
        );
        assert_matches!(
            str_to_bool("4000000000"),
            Err(ConversionError::OutOfRange { .. })
        );
    }

    #[test]
    fn test_error_codes_and_messages() {
        let invalid = str_to_int("abc", 0).unwrap_err();
        assert_eq!(invalid.error_code(), codes::lookup::INVALID_FORMAT);
        assert_eq!(invalid.to_string(), "cannot convert 'abc' to int");

        let range = str_to_double("1e999").unwrap_err();
        assert_eq!(range.error_code(), codes::lookup::OUT_OF_RANGE);
        assert_eq!(range.to_string(), "'1e999' is out of range of double");
    }
}
