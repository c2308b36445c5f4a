//! # CPF: Cadastro de Pessoas Físicas
//!
//! Individual taxpayer number: 9 base digits followed by 2 check digits,
//! displayed as `XXX.XXX.XXX-XX`.
//!
//! ## Check digits
//!
//! Both check digits use a descending weighted sum modulo 11. The first
//! covers digits 0..=8 with weights 10..=2, the second covers digits 0..=9
//! with weights 11..=2. A result of 10 or 11 maps to 0.
//!
//! Repeated-digit sequences (`000.000.000-00`, `111.111.111-11`, ...) satisfy
//! the arithmetic but are not issued, so they are rejected explicitly.

use serde::Serialize;

use crate::error::ValidationError;
use crate::normalize::{all_same, digit_values, mask, normalize};

/// Number of digits in a CPF.
pub const CPF_LEN: usize = 11;

/// Check a CPF for digit count, degenerate sequences, and both check digits.
///
/// Punctuation is ignored: `"111.444.777-35"` and `"11144477735"` are
/// equivalent.
pub fn validate_cpf(input: &str) -> bool {
    let digits = digit_values(input);
    if digits.len() != CPF_LEN || all_same(&digits) {
        return false;
    }

    let mut base = [0u8; 9];
    base.copy_from_slice(&digits[..9]);
    cpf_check_digits(&base) == [digits[9], digits[10]]
}

/// Render a CPF as `XXX.XXX.XXX-XX`.
///
/// Inputs that do not normalize to 11 digits come back as their normalized
/// digits with no mask applied. Validate first if a well-formed result is
/// required.
pub fn format_cpf(input: &str) -> String {
    let digits = normalize(input);
    if digits.len() != CPF_LEN {
        return digits;
    }
    mask(&digits, &[(3, ""), (3, "."), (3, "."), (2, "-")])
}

/// Compute the two check digits for a 9-digit CPF base.
///
/// Each element of `base` must be in `0..=9`.
pub fn cpf_check_digits(base: &[u8; 9]) -> [u8; 2] {
    let first = weighted_digit(base, 10);

    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;

    [first, weighted_digit(&extended, 11)]
}

fn weighted_digit(digits: &[u8], top_weight: u32) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip((2..=top_weight).rev())
        .map(|(&d, w)| u32::from(d) * w)
        .sum();
    match 11 - sum % 11 {
        d if d >= 10 => 0,
        d => d as u8,
    }
}

/// A validated CPF, stored as 11 digits without punctuation.
///
/// # Validation
///
/// - Exactly 11 digits after stripping punctuation
/// - Not a repeated-digit sequence
/// - Both check digits correct
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cpf(String);

impl_validating_deserialize!(Cpf);

impl Cpf {
    /// Create a CPF from formatted or bare input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCpf`] with the original input if
    /// [`validate_cpf`] rejects it.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        if !validate_cpf(&raw) {
            return Err(ValidationError::InvalidCpf(raw));
        }
        Ok(Self(normalize(&raw)))
    }

    /// The 11 digits, no punctuation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The masked form `XXX.XXX.XXX-XX`.
    pub fn formatted(&self) -> String {
        format_cpf(&self.0)
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for Cpf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
