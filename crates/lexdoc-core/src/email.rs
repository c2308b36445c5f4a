//! # E-mail Addresses
//!
//! A soft syntactic check: `local@domain.tld` with no whitespace and exactly
//! one `@`. It does not implement RFC 5322 and says nothing about whether
//! the mailbox exists. Treat a pass as "plausibly typed", not "deliverable".

use serde::Serialize;

use crate::error::ValidationError;
use crate::normalize::{is_input_whitespace, trim_input};

/// Check the shape `local@domain.tld`.
///
/// Accepted iff the whole input
/// - contains no whitespace,
/// - contains exactly one `@` with at least one character before it,
/// - has a `.` after the `@` with at least one character on each side.
pub fn validate_email(input: &str) -> bool {
    if input.chars().any(is_input_whitespace) {
        return false;
    }
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// A structurally valid e-mail address.
///
/// Surrounding whitespace is trimmed before validation; case is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Email(String);

impl_validating_deserialize!(Email);

impl Email {
    /// Create an e-mail address, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidEmail`] if [`validate_email`]
    /// rejects the trimmed input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let trimmed = trim_input(&raw);
        if !validate_email(trimmed) {
            return Err(ValidationError::InvalidEmail(raw));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The address as stored.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything before the `@`.
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or("", |(local, _)| local)
    }

    /// Everything after the `@`.
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
