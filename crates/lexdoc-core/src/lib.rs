#![deny(missing_docs)]

//! # lexdoc-core: Brazilian Identifier Validation and Formatting
//!
//! Validators and canonical formatters for the identifiers a legal practice
//! handles every day: CPF, CNPJ, CNJ case numbers, phone numbers, e-mail
//! addresses, and amounts in reais.
//!
//! ## Design Principles
//!
//! 1. **Digits first.** Every validator and formatter starts from
//!    [`normalize`]. Validation depends on digit content only, never on
//!    where the punctuation was typed.
//!
//! 2. **Malformed input is not an error.** `validate_*` returns `false`.
//!    `format_*` returns the normalized digits unmasked when the digit count
//!    does not fit the mask. Nothing panics on user input.
//!
//! 3. **Newtypes for stored values.** [`Cpf`], [`Cnpj`], [`CnjNumber`],
//!    [`Phone`], [`Email`], and [`TaxDocument`] validate at construction
//!    and at deserialization, store the canonical digits, and display the
//!    canonical mask.
//!
//! 4. **Pure functions.** No I/O, no logging, no shared state. Every
//!    function is safe to call from any thread and to memoize.
//!
//! ## Canonical masks
//!
//! | Kind | Mask |
//! |------|------|
//! | CPF | `DDD.DDD.DDD-DD` |
//! | CNPJ | `DD.DDD.DDD/DDDD-DD` |
//! | CNJ | `DDDDDDD-DD.DDDD.D.DD.DDDD` |
//! | Phone | `(DD) DDDDD-DDDD` / `(DD) DDDD-DDDD` |
//! | Money | `R$ D.DDD,DD` |

/// Implement `Deserialize` for a newtype by deserializing a `String` and
/// routing it through the type's `new()` constructor, so invalid values are
/// rejected at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod cnj;
pub mod cnpj;
pub mod cpf;
pub mod document;
pub mod email;
pub mod error;
pub mod filesize;
pub mod kind;
pub mod money;
pub mod normalize;
pub mod phone;

// Re-export primary items at crate root for ergonomic imports.
pub use cnj::{
    cnj_check_digits, format_cnj, format_cnj_incremental, is_formatted_cnj, validate_cnj,
    verify_cnj_check_digits, CnjNumber, JudicialSegment,
};
pub use cnpj::{cnpj_check_digits, format_cnpj, validate_cnpj, Cnpj};
pub use cpf::{cpf_check_digits, format_cpf, validate_cpf, Cpf};
pub use document::{format_document, validate_document, PartyKind, TaxDocument};
pub use email::{validate_email, Email};
pub use error::{LexdocError, ValidationError};
pub use filesize::format_file_size;
pub use kind::IdentifierKind;
pub use money::{
    format_decimal_br, format_money, parse_float, parse_money, validate_money_value, MoneyInput,
};
pub use normalize::normalize;
pub use phone::{format_phone, validate_phone, Phone};
