//! # Validate: Check values of one identifier kind.
//!
//! ```bash
//! lexdoc validate cpf 111.444.777-35 111.444.777-36
//! lexdoc validate cnj --strict-cnj 0001234-08.2023.8.26.0100
//! ```
//!
//! Prints `valid <canonical>` or `invalid <input>` per value. Exits 0 when
//! every value is valid, 1 otherwise.

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use lexdoc_core::kind::{canonical, validate as validate_kind};
use lexdoc_core::{verify_cnj_check_digits, IdentifierKind};

use crate::config::CliConfig;
use crate::{collect_values, emit};

/// Arguments for `lexdoc validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Identifier kind (cpf, cnpj, cnj, phone, email, money).
    /// When omitted, `default_kind` from the config file is used and the
    /// values are read from stdin.
    pub kind: Option<IdentifierKind>,

    /// Values to check. Reads one per line from stdin when omitted.
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Also verify CNJ check digits (MOD 97-10).
    #[arg(long)]
    pub strict_cnj: bool,
}

/// One validation result.
#[derive(Debug, Serialize)]
struct ValidationRecord<'a> {
    kind: IdentifierKind,
    input: &'a str,
    valid: bool,
    canonical: Option<String>,
}

/// Validate `value` as `kind`, adding the CNJ check-digit test when `strict`.
pub fn check(kind: IdentifierKind, value: &str, strict: bool) -> bool {
    let valid = validate_kind(kind, value);
    if valid && strict && kind == IdentifierKind::Cnj {
        return verify_cnj_check_digits(value);
    }
    valid
}

/// Execute the validate subcommand.
pub fn run_validate(
    args: &ValidateArgs,
    config: &CliConfig,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<u8> {
    let kind = config.resolve_kind(args.kind)?;
    let strict = args.strict_cnj || config.strict_cnj;
    let values = collect_values(&args.values, input)?;

    let mut invalid = 0usize;
    for value in &values {
        let valid = check(kind, value, strict);
        tracing::debug!(%kind, value = %value, valid, "validated");
        let canonical = if valid { canonical(kind, value) } else { None };
        let text = match &canonical {
            Some(c) => format!("valid   {c}"),
            None => {
                invalid += 1;
                tracing::warn!("invalid {}: {value}", kind.label());
                format!("invalid {value}")
            }
        };
        let record = ValidationRecord {
            kind,
            input: value,
            valid,
            canonical,
        };
        emit(out, config.output, &text, &record)?;
    }

    tracing::info!(%kind, total = values.len(), invalid, "validation finished");
    Ok(u8::from(invalid > 0))
}
