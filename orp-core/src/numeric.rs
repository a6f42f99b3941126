//! Numeric checks on free-form text.
//!
//! Form fields in an observation request arrive as text. [`is_numeric`] answers
//! "does this parse to a finite number", and [`parse_float_prefix`] reads the
//! leading number of a string the way lenient form parsers do, ignoring any
//! trailing garbage.
//!
//! ```
//! use orp_core::numeric::{is_numeric, parse_float_prefix};
//!
//! assert!(is_numeric("42"));
//! assert!(!is_numeric("Infinity"));
//! assert_eq!(parse_float_prefix("30.5.5"), Some(30.5));
//! ```

/// Returns `true` if `value` parses as a finite number.
///
/// Surrounding whitespace is ignored. Text that only starts with a number
/// (`"12abc"`), the empty string, `NaN` and infinities are all rejected.
pub fn is_numeric<S: AsRef<str>>(value: S) -> bool {
    let text = value.as_ref().trim();
    if text.is_empty() || parse_float_prefix(text).is_none() {
        return false;
    }
    text.parse::<f64>().map_or(false, f64::is_finite)
}

/// Parses the longest numeric prefix of `text`.
///
/// Accepts leading whitespace, an optional sign, digits with at most one
/// decimal point, and an exponent when digits follow the `e`. Returns `None`
/// if no digit precedes the first non-numeric character, so `"."` and `"abc"`
/// yield `None` while `"5."`, `".5"` and `"7px"` parse.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let mut mantissa_digits = 0;
    let mut seen_point = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => mantissa_digits += 1,
            b'.' if !seen_point => seen_point = true,
            _ => break,
        }
        end += 1;
    }

    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while bytes.get(exp_end).map_or(false, u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}
