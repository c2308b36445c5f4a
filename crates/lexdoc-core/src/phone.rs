//! # Phone Numbers
//!
//! Brazilian numbers with a 2-digit area code (DDD): 10 digits for
//! landlines and legacy mobiles, 11 digits for mobiles carrying the leading
//! 9. No country code.

use serde::Serialize;

use crate::error::ValidationError;
use crate::normalize::{mask, normalize};

/// Digit count of a landline number including the area code.
pub const LANDLINE_LEN: usize = 10;

/// Digit count of a mobile number including the area code.
pub const MOBILE_LEN: usize = 11;

/// True if the input normalizes to 10 or 11 digits.
pub fn validate_phone(input: &str) -> bool {
    matches!(normalize(input).len(), LANDLINE_LEN | MOBILE_LEN)
}

/// Render as `(XX) XXXXX-XXXX` (11 digits) or `(XX) XXXX-XXXX` (10 digits).
///
/// Any other length comes back as the normalized digits, unmasked.
pub fn format_phone(input: &str) -> String {
    let digits = normalize(input);
    match digits.len() {
        MOBILE_LEN => mask(&digits, &[(2, "("), (5, ") "), (4, "-")]),
        LANDLINE_LEN => mask(&digits, &[(2, "("), (4, ") "), (4, "-")]),
        _ => digits,
    }
}

/// A validated phone number, stored as 10 or 11 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Phone(String);

impl_validating_deserialize!(Phone);

impl Phone {
    /// Create a phone number from formatted or bare input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPhone`] if the input does not
    /// normalize to 10 or 11 digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        if !validate_phone(&raw) {
            return Err(ValidationError::InvalidPhone(raw));
        }
        Ok(Self(normalize(&raw)))
    }

    /// The digits, no punctuation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 2-digit area code.
    pub fn area_code(&self) -> &str {
        &self.0[..2]
    }

    /// The local number without the area code.
    pub fn subscriber(&self) -> &str {
        &self.0[2..]
    }

    /// True for 11-digit numbers.
    pub fn is_mobile(&self) -> bool {
        self.0.len() == MOBILE_LEN
    }

    /// The masked form.
    pub fn formatted(&self) -> String {
        format_phone(&self.0)
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for Phone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
