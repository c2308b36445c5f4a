//! # Identifier Kinds
//!
//! One enum naming every kind of value this crate checks, and the dispatch
//! from a kind to its validator and formatter. Matches on
//! [`IdentifierKind`] are exhaustive, so adding a kind forces every caller
//! to handle it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::cnj::{format_cnj, validate_cnj};
use crate::cnpj::{format_cnpj, validate_cnpj};
use crate::cpf::{format_cpf, validate_cpf};
use crate::email::validate_email;
use crate::error::ValidationError;
use crate::money::{format_money, parse_float, validate_money_value};
use crate::normalize::trim_input;
use crate::phone::{format_phone, validate_phone};

/// Every kind of value with a validator in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// Individual taxpayer number.
    Cpf,
    /// Legal-entity number.
    Cnpj,
    /// Unified judicial case number.
    Cnj,
    /// Phone number with area code.
    Phone,
    /// E-mail address.
    Email,
    /// Monetary amount in reais.
    Money,
}

impl IdentifierKind {
    /// All kinds in declaration order.
    pub fn all() -> &'static [IdentifierKind] {
        &[
            Self::Cpf,
            Self::Cnpj,
            Self::Cnj,
            Self::Phone,
            Self::Email,
            Self::Money,
        ]
    }

    /// The snake_case identifier, matching the serde format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
            Self::Cnj => "cnj",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Money => "money",
        }
    }

    /// Label for messages shown to people.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
            Self::Cnj => "CNJ number",
            Self::Phone => "phone number",
            Self::Email => "e-mail address",
            Self::Money => "amount",
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierKind {
    type Err = ValidationError;

    /// Parse from the identifiers produced by [`IdentifierKind::as_str`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpf" => Ok(Self::Cpf),
            "cnpj" => Ok(Self::Cnpj),
            "cnj" => Ok(Self::Cnj),
            "phone" => Ok(Self::Phone),
            "email" => Ok(Self::Email),
            "money" => Ok(Self::Money),
            other => Err(ValidationError::UnknownKind(other.to_string())),
        }
    }
}

/// Run the validator for `kind`.
pub fn validate(kind: IdentifierKind, input: &str) -> bool {
    match kind {
        IdentifierKind::Cpf => validate_cpf(input),
        IdentifierKind::Cnpj => validate_cnpj(input),
        IdentifierKind::Cnj => validate_cnj(input),
        IdentifierKind::Phone => validate_phone(input),
        IdentifierKind::Email => validate_email(input),
        IdentifierKind::Money => validate_money_value(input),
    }
}

/// Run the formatter for `kind`.
///
/// Digit-based kinds follow their formatter's passthrough rule. E-mail has
/// no mask and comes back trimmed. Money text is parsed first; text with no
/// numeric prefix comes back trimmed. Negative zero keeps its sign, so
/// `"-0"` validates and renders as `-R$ 0,00`.
pub fn format(kind: IdentifierKind, input: &str) -> String {
    match kind {
        IdentifierKind::Cpf => format_cpf(input),
        IdentifierKind::Cnpj => format_cnpj(input),
        IdentifierKind::Cnj => format_cnj(input),
        IdentifierKind::Phone => format_phone(input),
        IdentifierKind::Email => trim_input(input).to_string(),
        IdentifierKind::Money => match parse_float(input) {
            Some(n) => format_money(n),
            None => trim_input(input).to_string(),
        },
    }
}

/// The formatted value if `input` is valid for `kind`, otherwise `None`.
pub fn canonical(kind: IdentifierKind, input: &str) -> Option<String> {
    validate(kind, input).then(|| format(kind, input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_kinds_unique() {
        let mut seen = std::collections::HashSet::new();
        for kind in IdentifierKind::all() {
            assert!(seen.insert(kind), "duplicate kind: {kind}");
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn as_str_roundtrip() {
        for kind in IdentifierKind::all() {
            assert_eq!(kind.as_str().parse::<IdentifierKind>().unwrap(), *kind);
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!("rg".parse::<IdentifierKind>().is_err());
        assert!("CPF".parse::<IdentifierKind>().is_err());
        assert!("".parse::<IdentifierKind>().is_err());
    }

    #[test]
    fn serde_matches_as_str() {
        for kind in IdentifierKind::all() {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let back: IdentifierKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *kind);
        }
    }

    #[test]
    fn validate_dispatches() {
        assert!(validate(IdentifierKind::Cpf, "11144477735"));
        assert!(validate(IdentifierKind::Cnpj, "11222333000181"));
        assert!(validate(IdentifierKind::Cnj, "00012345620238260100"));
        assert!(validate(IdentifierKind::Phone, "11987654321"));
        assert!(validate(IdentifierKind::Email, "a@b.com"));
        assert!(validate(IdentifierKind::Money, "12.34"));
        assert!(!validate(IdentifierKind::Money, "-12.34"));
    }

    #[test]
    fn format_dispatches() {
        assert_eq!(format(IdentifierKind::Cpf, "11144477735"), "111.444.777-35");
        assert_eq!(format(IdentifierKind::Cnpj, "11222333000181"), "11.222.333/0001-81");
        assert_eq!(
            format(IdentifierKind::Cnj, "00012345620238260100"),
            "0001234-56.2023.8.26.0100"
        );
        assert_eq!(format(IdentifierKind::Phone, "1133334444"), "(11) 3333-4444");
        assert_eq!(format(IdentifierKind::Email, " a@b.com "), "a@b.com");
        assert_eq!(format(IdentifierKind::Money, "1234.5"), "R$ 1.234,50");
        assert_eq!(format(IdentifierKind::Money, " abc "), "abc");
    }

    #[test]
    fn money_negative_zero_validates_and_keeps_sign() {
        assert!(validate(IdentifierKind::Money, "-0"));
        assert_eq!(format(IdentifierKind::Money, "-0"), "-R$ 0,00");
        assert_eq!(
            canonical(IdentifierKind::Money, "-0.00").as_deref(),
            Some("-R$ 0,00")
        );
        assert_eq!(format(IdentifierKind::Money, "0"), "R$ 0,00");
    }

    #[test]
    fn canonical_only_for_valid_input() {
        assert_eq!(
            canonical(IdentifierKind::Cpf, "11144477735").as_deref(),
            Some("111.444.777-35")
        );
        assert_eq!(canonical(IdentifierKind::Cpf, "11144477736"), None);
        assert_eq!(canonical(IdentifierKind::Phone, "123"), None);
    }
}
