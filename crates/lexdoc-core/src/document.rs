//! # Party Documents
//!
//! Clients are registered either as individuals (pessoa física, PF),
//! identified by CPF, or as companies (pessoa jurídica, PJ), identified by
//! CNPJ. The registration form chooses the validator from the party kind;
//! imported records carry only the number, so [`TaxDocument::new`] detects
//! the kind from the digit count.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::cnpj::{format_cnpj, validate_cnpj, Cnpj, CNPJ_LEN};
use crate::cpf::{format_cpf, validate_cpf, Cpf, CPF_LEN};
use crate::error::ValidationError;
use crate::normalize::digit_values;

/// Whether a party is an individual or a legal entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartyKind {
    /// Pessoa física, identified by CPF.
    #[serde(rename = "PF")]
    Individual,
    /// Pessoa jurídica, identified by CNPJ.
    #[serde(rename = "PJ")]
    Company,
}

impl PartyKind {
    /// `"PF"` or `"PJ"`, matching the serde format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "PF",
            Self::Company => "PJ",
        }
    }

    /// Name of the document this kind of party is identified by.
    pub fn document_label(self) -> &'static str {
        match self {
            Self::Individual => "CPF",
            Self::Company => "CNPJ",
        }
    }
}

impl std::fmt::Display for PartyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartyKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PF" => Ok(Self::Individual),
            "PJ" => Ok(Self::Company),
            other => Err(ValidationError::UnknownPartyKind(other.to_string())),
        }
    }
}

/// Validate the document that identifies a party of the given kind.
pub fn validate_document(kind: PartyKind, input: &str) -> bool {
    match kind {
        PartyKind::Individual => validate_cpf(input),
        PartyKind::Company => validate_cnpj(input),
    }
}

/// Format the document that identifies a party of the given kind.
pub fn format_document(kind: PartyKind, input: &str) -> String {
    match kind {
        PartyKind::Individual => format_cpf(input),
        PartyKind::Company => format_cnpj(input),
    }
}

/// A validated CPF or CNPJ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum TaxDocument {
    /// An individual's CPF.
    Cpf(Cpf),
    /// A company's CNPJ.
    Cnpj(Cnpj),
}

impl_validating_deserialize!(TaxDocument);

impl TaxDocument {
    /// Detect CPF or CNPJ by digit count and validate accordingly.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCpf`] or
    /// [`ValidationError::InvalidCnpj`] when the digit count matches but the
    /// number is invalid, and [`ValidationError::InvalidTaxDocument`] for any
    /// other digit count.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        match digit_values(&raw).len() {
            CPF_LEN => Cpf::new(raw).map(Self::Cpf),
            CNPJ_LEN => Cnpj::new(raw).map(Self::Cnpj),
            _ => Err(ValidationError::InvalidTaxDocument(raw)),
        }
    }

    /// The party kind implied by the document.
    pub fn kind(&self) -> PartyKind {
        match self {
            Self::Cpf(_) => PartyKind::Individual,
            Self::Cnpj(_) => PartyKind::Company,
        }
    }

    /// The digits, no punctuation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cpf(cpf) => cpf.as_str(),
            Self::Cnpj(cnpj) => cnpj.as_str(),
        }
    }

    /// The masked form.
    pub fn formatted(&self) -> String {
        match self {
            Self::Cpf(cpf) => cpf.formatted(),
            Self::Cnpj(cnpj) => cnpj.formatted(),
        }
    }
}

impl std::fmt::Display for TaxDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for TaxDocument {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
