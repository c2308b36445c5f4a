//! # Identifier Fixture Tests
//!
//! Pins the canonical outputs that downstream government and judiciary
//! systems expect, and the cross-module properties every formatter shares:
//! formatting never loses or reorders digits, and formatted values still
//! validate.

use lexdoc_core::kind::{canonical, format, validate};
use lexdoc_core::{
    format_cnj, format_cnj_incremental, format_cnpj, format_cpf, format_money, format_phone,
    normalize, validate_cnj, validate_cnpj, validate_cpf, validate_email, validate_money_value,
    validate_phone, IdentifierKind, TaxDocument,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Documented fixtures
// ---------------------------------------------------------------------------

#[test]
fn cpf_fixtures() {
    assert!(validate_cpf("11144477735"));
    assert!(!validate_cpf("11111111111"));
    assert_eq!(format_cpf("11144477735"), "111.444.777-35");
}

#[test]
fn cnpj_fixtures() {
    assert!(validate_cnpj("11222333000181"));
    assert_eq!(format_cnpj("11222333000181"), "11.222.333/0001-81");
}

#[test]
fn cnj_fixtures() {
    assert!(validate_cnj("00012345620238260100"));
    assert!(!validate_cnj("1234"));
    assert_eq!(format_cnj("00012345620238260100"), "0001234-56.2023.8.26.0100");
}

#[test]
fn phone_fixtures() {
    assert!(validate_phone("11987654321"));
    assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
    assert!(!validate_phone("123"));
}

#[test]
fn email_fixtures() {
    assert!(validate_email("a@b.com"));
    assert!(!validate_email("invalid"));
}

#[test]
fn money_fixtures() {
    assert_eq!(format_money(1234.5), "R$ 1.234,50");
    assert!(!validate_money_value(-1.0));
    assert!(validate_money_value("12.34"));
}

// ---------------------------------------------------------------------------
// Cross-module properties
// ---------------------------------------------------------------------------

#[test]
fn formatted_values_still_validate() {
    let cases = [
        (IdentifierKind::Cpf, "11144477735"),
        (IdentifierKind::Cnpj, "11222333000181"),
        (IdentifierKind::Cnj, "00012345620238260100"),
        (IdentifierKind::Phone, "11987654321"),
        (IdentifierKind::Phone, "1133334444"),
    ];
    for (kind, raw) in cases {
        let formatted = format(kind, raw);
        assert!(validate(kind, &formatted), "{kind}: {formatted}");
        assert_eq!(normalize(&formatted), raw, "{kind} lost digits");
    }
}

#[test]
fn canonical_matches_documented_masks() {
    assert_eq!(
        canonical(IdentifierKind::Cnpj, "11.222.333/0001-81").as_deref(),
        Some("11.222.333/0001-81")
    );
    assert_eq!(
        canonical(IdentifierKind::Cnj, "0001234-56.2023.8.26.0100").as_deref(),
        Some("0001234-56.2023.8.26.0100")
    );
    assert_eq!(canonical(IdentifierKind::Cnj, "0001234-56"), None);
}

#[test]
fn incremental_cnj_typing_session() {
    let full = "00012345620238260100";
    let mut field = String::new();
    for digit in full.chars() {
        field.push(digit);
        field = format_cnj_incremental(&field);
    }
    assert_eq!(field, format_cnj(full));
}

#[test]
fn tax_document_accepts_either_kind() {
    for raw in ["111.444.777-35", "11.222.333/0001-81"] {
        let doc: TaxDocument = raw.parse().unwrap();
        assert_eq!(doc.to_string(), raw);
    }
}

// ---------------------------------------------------------------------------
// Properties over generated input
// ---------------------------------------------------------------------------

proptest! {
    /// Every formatter returns the same digits it was given.
    #[test]
    fn formatters_preserve_digits(input in "[0-9 .\\-/()]{0,30}") {
        let digits = normalize(&input);
        for kind in [
            IdentifierKind::Cpf,
            IdentifierKind::Cnpj,
            IdentifierKind::Cnj,
            IdentifierKind::Phone,
        ] {
            prop_assert_eq!(normalize(&format(kind, &input)), digits.clone());
        }
    }

    /// Validation depends on digits only: re-punctuating changes nothing.
    #[test]
    fn validation_ignores_punctuation(digits in "[0-9]{0,22}", sep in "[ .\\-/]") {
        let spaced: String = digits
            .chars()
            .flat_map(|c| [c, sep.chars().next().unwrap_or(' ')])
            .collect();
        for kind in [
            IdentifierKind::Cpf,
            IdentifierKind::Cnpj,
            IdentifierKind::Cnj,
            IdentifierKind::Phone,
        ] {
            prop_assert_eq!(validate(kind, &digits), validate(kind, &spaced));
        }
    }
}
