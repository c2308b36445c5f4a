//! # Normalizer
//!
//! Strips punctuation, whitespace, and every other non-digit character from
//! user input. Every validator and formatter in this crate starts here, so
//! validation depends only on digit content, never on where the user put
//! the dots and dashes.

/// Remove every character that is not an ASCII digit.
///
/// Total and idempotent. Non-ASCII digits (e.g. Arabic-Indic numerals) are
/// removed as well.
///
/// ```
/// use lexdoc_core::normalize;
///
/// assert_eq!(normalize("111.444.777-35"), "11144477735");
/// assert_eq!(normalize("(11) 98765-4321"), "11987654321");
/// assert_eq!(normalize("no digits"), "");
/// ```
pub fn normalize(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Numeric values of the ASCII digits in `input`, in order.
pub(crate) fn digit_values(input: &str) -> Vec<u8> {
    input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// True when every digit equals the first one (including the empty case).
pub(crate) fn all_same(digits: &[u8]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

/// Whitespace as browsers define it for form input: Unicode `Zs` spaces,
/// tab, vertical tab, form feed, the byte-order mark, and the line
/// terminators LF, CR, U+2028, U+2029. U+0085 (NEL) is not included.
pub(crate) fn is_input_whitespace(c: char) -> bool {
    match c {
        '\u{0085}' => false,
        '\u{FEFF}' => true,
        c => c.is_whitespace(),
    }
}

/// `input` with leading and trailing [`is_input_whitespace`] removed.
pub(crate) fn trim_input(input: &str) -> &str {
    input.trim_matches(is_input_whitespace)
}

/// Interleave `digits` with separators at fixed group boundaries.
///
/// `groups` lists `(length, separator_before)` pairs. The caller guarantees
/// that the group lengths add up to `digits.len()`.
pub(crate) fn mask(digits: &str, groups: &[(usize, &str)]) -> String {
    let mut out = String::with_capacity(digits.len() + groups.len() * 2);
    let mut pos = 0;
    for (len, sep) in groups {
        out.push_str(sep);
        out.push_str(&digits[pos..pos + len]);
        pos += len;
    }
    out
}
