//! # Monetary Amounts (BRL)
//!
//! Validation and pt-BR rendering of amounts entered in fee, task, and
//! ledger forms.
//!
//! Text input is read the way browser form handlers read it: leading
//! whitespace is skipped and the longest numeric prefix is taken, so
//! `"12.34"`, `" 12.34"`, and `"12.34 reais"` are all 12.34. Note the
//! decimal separator on input is `.`; `"12,34"` reads as 12.
//!
//! ## Rendering
//!
//! pt-BR uses `.` for thousands and `,` for decimals. Rounding is half away
//! from zero on the exact binary value of the `f64`, so `0.125` renders as
//! `0,13` while `1.005` (stored as 1.00499...) renders as `1,00`.

use crate::error::ValidationError;
use crate::normalize::is_input_whitespace;

/// Currency symbol prefix, including the separating space.
pub const CURRENCY_PREFIX: &str = "R$ ";

/// Upper bound on rendered fraction digits.
pub const MAX_FRACTION_DIGITS: usize = 20;

/// A money value as received from a caller: already numeric, or text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoneyInput<'a> {
    /// A numeric amount.
    Number(f64),
    /// Text to be parsed with [`parse_float`].
    Text(&'a str),
}

impl From<f64> for MoneyInput<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for MoneyInput<'_> {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for MoneyInput<'_> {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for MoneyInput<'_> {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl<'a> From<&'a str> for MoneyInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for MoneyInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl MoneyInput<'_> {
    /// The numeric value, or `None` when text has no numeric prefix.
    pub fn to_f64(self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(n),
            Self::Text(s) => parse_float(s),
        }
    }
}

/// True iff the value is a finite number `>= 0`.
///
/// Negative amounts, NaN, infinities, and text with no numeric prefix fail.
pub fn validate_money_value<'a>(value: impl Into<MoneyInput<'a>>) -> bool {
    value
        .into()
        .to_f64()
        .is_some_and(|n| n.is_finite() && n >= 0.0)
}

/// Parse a validated, non-negative amount.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidMoneyValue`] with the original text
/// when [`validate_money_value`] would return `false`.
pub fn parse_money(input: &str) -> Result<f64, ValidationError> {
    match parse_float(input) {
        Some(n) if n.is_finite() && n >= 0.0 => Ok(n),
        _ => Err(ValidationError::InvalidMoneyValue(input.to_string())),
    }
}

/// Read the longest leading decimal number, after skipping whitespace.
///
/// Accepts an optional sign, digits with an optional `.` fraction, an
/// optional exponent, and the literal `Infinity`. Returns `None` when no
/// digits are found. Trailing text is ignored.
pub fn parse_float(input: &str) -> Option<f64> {
    let s = input.trim_start_matches(is_input_whitespace);
    let bytes = s.as_bytes();
    let len = bytes.len();
    let scan_digits = |mut i: usize| {
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    end = scan_digits(end);
    let mut mantissa_digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_end = scan_digits(end + 1);
        mantissa_digits += frac_end - (end + 1);
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp = end + 1;
        if exp < len && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        let exp_end = scan_digits(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Render an amount as Brazilian reais: `R$ 1.234,50`.
///
/// Exactly two fraction digits. Negative amounts (including `-0.0`) carry
/// the sign before the symbol: `-R$ 1.234,50`. NaN renders as `R$ NaN`
/// and infinities as `R$ ∞` / `-R$ ∞`.
pub fn format_money(value: f64) -> String {
    let sign = if value.is_sign_negative() && !value.is_nan() {
        "-"
    } else {
        ""
    };
    format!("{sign}{CURRENCY_PREFIX}{}", format_decimal_br(value.abs(), 2, 2))
}

/// Render a number with pt-BR grouping and decimal separators.
///
/// At least `min_fraction` and at most `max_fraction` fraction digits are
/// shown; trailing zeros beyond the minimum are dropped. `max_fraction` is
/// capped at [`MAX_FRACTION_DIGITS`] and raised to `min_fraction` if lower.
///
/// ```
/// use lexdoc_core::format_decimal_br;
///
/// assert_eq!(format_decimal_br(1234.5, 2, 2), "1.234,50");
/// assert_eq!(format_decimal_br(1234.5678, 0, 3), "1.234,568");
/// assert_eq!(format_decimal_br(1000000.0, 0, 3), "1.000.000");
/// ```
pub fn format_decimal_br(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}∞");
    }

    let min_fraction = min_fraction.min(MAX_FRACTION_DIGITS);
    let max_fraction = max_fraction.clamp(min_fraction, MAX_FRACTION_DIGITS);
    let rendered = format!("{:.*}", max_fraction, round_ties_away(value.abs(), max_fraction));

    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let mut frac = frac_part.to_string();
    while frac.len() > min_fraction && frac.ends_with('0') {
        frac.pop();
    }

    let mut out = format!("{sign}{}", group_thousands(int_part));
    if !frac.is_empty() {
        out.push(',');
        out.push_str(&frac);
    }
    out
}

/// Move an exact rounding tie at `digits` fraction digits to the next
/// representable value above it, so that `{:.N}` (half-to-even) rounds it
/// away from zero. Only values `odd / 2^(digits+1)` can be exact ties.
fn round_ties_away(abs: f64, digits: usize) -> f64 {
    let step = 0.5_f64.powi(digits as i32 + 1);
    let scaled = abs / step;
    if scaled < 9_007_199_254_740_992.0 && scaled.fract() == 0.0 && scaled % 2.0 == 1.0 {
        f64::from_bits(abs.to_bits() + 1)
    } else {
        abs
    }
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The rendered amount reads back to the cent-rounded value.
        #[test]
        fn format_money_reads_back(cents in 0u64..10_000_000_000) {
            let value = cents as f64 / 100.0;
            let rendered = format_money(value);
            prop_assert!(rendered.starts_with(CURRENCY_PREFIX));
            let plain: String = rendered[CURRENCY_PREFIX.len()..]
                .chars()
                .filter(|c| *c != '.')
                .map(|c| if c == ',' { '.' } else { c })
                .collect();
            let back: f64 = plain.parse().unwrap();
            prop_assert!((back - value).abs() < 0.005 + f64::EPSILON * value);
        }

        /// Non-negative finite numbers always validate, negative ones never.
        #[test]
        fn validate_sign(value in -1.0e12f64..1.0e12) {
            prop_assert_eq!(validate_money_value(value), value >= 0.0);
            prop_assert_eq!(validate_money_value(value.to_string().as_str()), value >= 0.0);
        }
    }
}
