//! # CNPJ: Cadastro Nacional da Pessoa Jurídica
//!
//! Legal-entity number: an 8-digit company root, a 4-digit branch number,
//! and 2 check digits, displayed as `XX.XXX.XXX/XXXX-XX`.
//!
//! ## Check digits
//!
//! Weights cycle from `len - 7` down to 2 and wrap back to 9, giving
//! `5,4,3,2,9,8,7,6,5,4,3,2` over the 12-digit body and
//! `6,5,4,3,2,9,8,7,6,5,4,3,2` over body plus first check digit. A
//! remainder below 2 maps to 0, anything else to `11 - remainder`.

use serde::Serialize;

use crate::error::ValidationError;
use crate::normalize::{all_same, digit_values, mask, normalize};

/// Number of digits in a CNPJ.
pub const CNPJ_LEN: usize = 14;

/// Branch number of a company's headquarters.
pub const HEADQUARTERS_BRANCH: &str = "0001";

/// Check a CNPJ for digit count, degenerate sequences, and both check digits.
pub fn validate_cnpj(input: &str) -> bool {
    let digits = digit_values(input);
    if digits.len() != CNPJ_LEN || all_same(&digits) {
        return false;
    }

    let mut base = [0u8; 12];
    base.copy_from_slice(&digits[..12]);
    cnpj_check_digits(&base) == [digits[12], digits[13]]
}

/// Render a CNPJ as `XX.XXX.XXX/XXXX-XX`.
///
/// Inputs that do not normalize to 14 digits come back as their normalized
/// digits with no mask applied.
pub fn format_cnpj(input: &str) -> String {
    let digits = normalize(input);
    if digits.len() != CNPJ_LEN {
        return digits;
    }
    mask(&digits, &[(2, ""), (3, "."), (3, "."), (4, "/"), (2, "-")])
}

/// Compute the two check digits for a 12-digit CNPJ body.
pub fn cnpj_check_digits(base: &[u8; 12]) -> [u8; 2] {
    let first = cyclic_digit(base);

    let mut extended = [0u8; 13];
    extended[..12].copy_from_slice(base);
    extended[12] = first;

    [first, cyclic_digit(&extended)]
}

fn cyclic_digit(body: &[u8]) -> u8 {
    let mut weight = body.len() as u32 - 7;
    let mut sum = 0u32;
    for &d in body {
        sum += u32::from(d) * weight;
        weight -= 1;
        if weight < 2 {
            weight = 9;
        }
    }
    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

/// A validated CNPJ, stored as 14 digits without punctuation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cnpj(String);

impl_validating_deserialize!(Cnpj);

impl Cnpj {
    /// Create a CNPJ from formatted or bare input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCnpj`] with the original input if
    /// [`validate_cnpj`] rejects it.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        if !validate_cnpj(&raw) {
            return Err(ValidationError::InvalidCnpj(raw));
        }
        Ok(Self(normalize(&raw)))
    }

    /// The 14 digits, no punctuation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 8-digit company root shared by every branch.
    pub fn root(&self) -> &str {
        &self.0[..8]
    }

    /// The 4-digit branch number.
    pub fn branch(&self) -> &str {
        &self.0[8..12]
    }

    /// True for the headquarters registration (branch `0001`).
    pub fn is_headquarters(&self) -> bool {
        self.branch() == HEADQUARTERS_BRANCH
    }

    /// The masked form `XX.XXX.XXX/XXXX-XX`.
    pub fn formatted(&self) -> String {
        format_cnpj(&self.0)
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for Cnpj {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
