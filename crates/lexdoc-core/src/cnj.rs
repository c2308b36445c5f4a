//! # CNJ: Unified Judicial Case Number
//!
//! The 20-digit case number mandated by the National Council of Justice
//! (Resolution 65/2008), displayed as `NNNNNNN-DD.AAAA.J.TR.OOOO`:
//!
//! | Field | Digits | Meaning |
//! |-------|--------|---------|
//! | `NNNNNNN` | 7 | Sequential number within the originating unit and year |
//! | `DD` | 2 | Check digits (ISO 7064 MOD 97-10) |
//! | `AAAA` | 4 | Filing year |
//! | `J` | 1 | Judicial segment ([`JudicialSegment`]) |
//! | `TR` | 2 | Tribunal within the segment |
//! | `OOOO` | 4 | Originating unit |
//!
//! ## Validation levels
//!
//! [`validate_cnj`] checks the digit count only. [`verify_cnj_check_digits`]
//! additionally runs the MOD 97-10 arithmetic and is opt-in: case numbers
//! imported from older systems do not always carry correct check digits.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::normalize::{digit_values, normalize};

/// Number of digits in a CNJ case number.
pub const CNJ_LEN: usize = 20;

/// Length of a fully masked CNJ case number.
pub const CNJ_MASKED_LEN: usize = 25;

/// Check that the input normalizes to exactly 20 digits.
///
/// This is a shape check only. Use [`verify_cnj_check_digits`] when the
/// check digits must also be correct.
pub fn validate_cnj(input: &str) -> bool {
    digit_values(input).len() == CNJ_LEN
}

/// Render a 20-digit case number as `NNNNNNN-DD.AAAA.J.TR.OOOO`.
///
/// Inputs that do not normalize to 20 digits come back as their normalized
/// digits with no mask applied.
pub fn format_cnj(input: &str) -> String {
    let digits = normalize(input);
    if digits.len() != CNJ_LEN {
        return digits;
    }
    format_cnj_incremental(&digits)
}

/// Mask a partially typed case number.
///
/// Separators appear only once the digit that follows them exists, so the
/// output never ends in a separator. Digits beyond the twentieth are
/// dropped. Feeding the output back in yields the same output.
///
/// ```
/// use lexdoc_core::format_cnj_incremental;
///
/// assert_eq!(format_cnj_incremental("1234567"), "1234567");
/// assert_eq!(format_cnj_incremental("12345678"), "1234567-8");
/// assert_eq!(format_cnj_incremental("0001234-08.2023.8"), "0001234-08.2023.8");
/// ```
pub fn format_cnj_incremental(input: &str) -> String {
    let digits = normalize(input);
    let mut out = String::with_capacity(CNJ_MASKED_LEN);
    for (index, digit) in digits.chars().take(CNJ_LEN).enumerate() {
        if let Some(sep) = separator_before(index) {
            out.push(sep);
        }
        out.push(digit);
    }
    out
}

fn separator_before(index: usize) -> Option<char> {
    match index {
        7 => Some('-'),
        9 | 13 | 14 | 16 => Some('.'),
        _ => None,
    }
}

/// True iff `input` is already masked exactly as `NNNNNNN-DD.AAAA.J.TR.OOOO`.
///
/// Stricter than [`validate_cnj`]: no surrounding whitespace, no missing or
/// extra separators.
pub fn is_formatted_cnj(input: &str) -> bool {
    input.len() == CNJ_MASKED_LEN
        && input.bytes().enumerate().all(|(i, b)| match i {
            7 => b == b'-',
            10 | 15 | 17 | 20 => b == b'.',
            _ => b.is_ascii_digit(),
        })
}

/// Compute the check digits `DD` for the 18 non-check digits of a case
/// number, given in the order `NNNNNNN AAAA J TR OOOO`.
///
/// The result is in `2..=98` and is rendered with two digits.
pub fn cnj_check_digits(base: &[u8; 18]) -> u8 {
    let remainder = mod97(base.iter().copied().chain([0, 0]));
    (98 - remainder) as u8
}

/// Verify the MOD 97-10 check digits of a 20-digit case number.
///
/// Returns `false` for anything that fails [`validate_cnj`].
pub fn verify_cnj_check_digits(input: &str) -> bool {
    let digits = digit_values(input);
    if digits.len() != CNJ_LEN {
        return false;
    }
    let reordered = digits[..7]
        .iter()
        .chain(&digits[9..])
        .chain(&digits[7..9])
        .copied();
    mod97(reordered) == 1
}

fn mod97(digits: impl Iterator<Item = u8>) -> u32 {
    digits.fold(0, |acc, d| (acc * 10 + u32::from(d)) % 97)
}

/// The `J` field of a case number: which branch of the judiciary it
/// belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JudicialSegment {
    /// 1: Supreme Federal Court (STF).
    SupremeFederalCourt,
    /// 2: National Council of Justice (CNJ).
    NationalCouncilOfJustice,
    /// 3: Superior Court of Justice (STJ).
    SuperiorCourtOfJustice,
    /// 4: Federal courts.
    Federal,
    /// 5: Labor courts.
    Labor,
    /// 6: Electoral courts.
    Electoral,
    /// 7: Federal military courts.
    FederalMilitary,
    /// 8: State courts.
    State,
    /// 9: State military courts.
    StateMilitary,
}

impl JudicialSegment {
    /// Map the `J` digit to its segment. `0` is not assigned.
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            1 => Some(Self::SupremeFederalCourt),
            2 => Some(Self::NationalCouncilOfJustice),
            3 => Some(Self::SuperiorCourtOfJustice),
            4 => Some(Self::Federal),
            5 => Some(Self::Labor),
            6 => Some(Self::Electoral),
            7 => Some(Self::FederalMilitary),
            8 => Some(Self::State),
            9 => Some(Self::StateMilitary),
            _ => None,
        }
    }

    /// The `J` digit for this segment.
    pub fn digit(self) -> u8 {
        match self {
            Self::SupremeFederalCourt => 1,
            Self::NationalCouncilOfJustice => 2,
            Self::SuperiorCourtOfJustice => 3,
            Self::Federal => 4,
            Self::Labor => 5,
            Self::Electoral => 6,
            Self::FederalMilitary => 7,
            Self::State => 8,
            Self::StateMilitary => 9,
        }
    }

    /// Returns the snake_case identifier, matching the serde format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SupremeFederalCourt => "supreme_federal_court",
            Self::NationalCouncilOfJustice => "national_council_of_justice",
            Self::SuperiorCourtOfJustice => "superior_court_of_justice",
            Self::Federal => "federal",
            Self::Labor => "labor",
            Self::Electoral => "electoral",
            Self::FederalMilitary => "federal_military",
            Self::State => "state",
            Self::StateMilitary => "state_military",
        }
    }
}

impl std::fmt::Display for JudicialSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A case number with the CNJ shape, stored as 20 digits.
///
/// Construction checks the digit count only, like [`validate_cnj`]; call
/// [`CnjNumber::has_valid_check_digits`] for the arithmetic check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CnjNumber(String);

impl_validating_deserialize!(CnjNumber);

impl CnjNumber {
    /// Create a case number from masked or bare input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCnj`] if the input does not
    /// normalize to 20 digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        if !validate_cnj(&raw) {
            return Err(ValidationError::InvalidCnj(raw));
        }
        Ok(Self(normalize(&raw)))
    }

    /// Assemble a case number from its fields, computing the check digits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCnj`] if a field does not fit its
    /// digit width.
    pub fn assemble(
        sequential: u32,
        year: u16,
        segment: JudicialSegment,
        tribunal: u8,
        origin: u16,
    ) -> Result<Self, ValidationError> {
        if sequential > 9_999_999 || year > 9999 || tribunal > 99 || origin > 9999 {
            return Err(ValidationError::InvalidCnj(format!(
                "{sequential}/{year}/{}/{tribunal}/{origin}",
                segment.digit()
            )));
        }

        let body = format!(
            "{sequential:07}{year:04}{}{tribunal:02}{origin:04}",
            segment.digit()
        );
        let mut base = [0u8; 18];
        for (slot, d) in base.iter_mut().zip(digit_values(&body)) {
            *slot = d;
        }
        let check = cnj_check_digits(&base);

        Ok(Self(format!("{}{check:02}{}", &body[..7], &body[7..])))
    }

    /// The 20 digits, no punctuation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `NNNNNNN`: sequential number.
    pub fn sequential(&self) -> &str {
        &self.0[..7]
    }

    /// `DD`: check digits as written.
    pub fn check_digits(&self) -> &str {
        &self.0[7..9]
    }

    /// `AAAA`: filing year.
    pub fn year(&self) -> &str {
        &self.0[9..13]
    }

    /// `J`: judicial segment, or `None` for the unassigned digit 0.
    pub fn segment(&self) -> Option<JudicialSegment> {
        let digit = self.0.as_bytes()[13] - b'0';
        JudicialSegment::from_digit(digit)
    }

    /// `TR`: tribunal.
    pub fn tribunal(&self) -> &str {
        &self.0[14..16]
    }

    /// `OOOO`: originating unit.
    pub fn origin(&self) -> &str {
        &self.0[16..]
    }

    /// True if `DD` matches the MOD 97-10 check.
    pub fn has_valid_check_digits(&self) -> bool {
        verify_cnj_check_digits(&self.0)
    }

    /// The masked form `NNNNNNN-DD.AAAA.J.TR.OOOO`.
    pub fn formatted(&self) -> String {
        format_cnj(&self.0)
    }
}

impl std::fmt::Display for CnjNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for CnjNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
