//! # Error Hierarchy
//!
//! Structured error types for lexdoc, built with `thiserror`.
//!
//! Validators and formatters never return errors: malformed input is an
//! expected outcome reported as `false` or as the unmasked digits. Errors
//! exist only for the validated newtypes, whose constructors reject input
//! that does not satisfy the identifier's rules, and for kind lookup.

use thiserror::Error;

/// Top-level error type for lexdoc.
#[derive(Error, Debug)]
pub enum LexdocError {
    /// Identifier validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors for identifier newtypes.
///
/// Each variant carries the rejected input verbatim and names the expected
/// format, so a caller can surface the message to a user without
/// reformatting it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// CPF has the wrong digit count, is a repeated-digit sequence, or fails
    /// its check digits.
    #[error("invalid CPF: \"{0}\" (expected 11 digits with valid check digits, XXX.XXX.XXX-XX)")]
    InvalidCpf(String),

    /// CNPJ has the wrong digit count, is a repeated-digit sequence, or fails
    /// its check digits.
    #[error("invalid CNPJ: \"{0}\" (expected 14 digits with valid check digits, XX.XXX.XXX/XXXX-XX)")]
    InvalidCnpj(String),

    /// Party document is neither an 11-digit CPF nor a 14-digit CNPJ.
    #[error("invalid CPF/CNPJ: \"{0}\" (expected a valid 11-digit CPF or 14-digit CNPJ)")]
    InvalidTaxDocument(String),

    /// CNJ case number does not have 20 digits.
    #[error("invalid CNJ number: \"{0}\" (expected 20 digits, NNNNNNN-DD.AAAA.J.TR.OOOO)")]
    InvalidCnj(String),

    /// Phone number does not have 10 or 11 digits.
    #[error("invalid phone number: \"{0}\" (expected 10 or 11 digits including area code)")]
    InvalidPhone(String),

    /// E-mail address fails the structural check.
    #[error("invalid e-mail address: \"{0}\" (expected local@domain.tld)")]
    InvalidEmail(String),

    /// Amount is not a finite, non-negative number.
    #[error("invalid money value: \"{0}\" (expected a finite amount >= 0)")]
    InvalidMoneyValue(String),

    /// Identifier kind name is not recognised.
    #[error("unknown identifier kind: \"{0}\" (expected one of cpf, cnpj, cnj, phone, email, money)")]
    UnknownKind(String),

    /// Party kind is neither PF nor PJ.
    #[error("unknown party kind: \"{0}\" (expected PF or PJ)")]
    UnknownPartyKind(String),
}
