//! # Format: Render values in their canonical mask.
//!
//! ```bash
//! lexdoc format cnpj 11222333000181
//! lexdoc format phone < phones.txt
//! ```
//!
//! Formatting never fails: values whose digit count does not fit the mask
//! come back as bare digits.

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use lexdoc_core::kind::format as format_kind;
use lexdoc_core::IdentifierKind;

use crate::config::CliConfig;
use crate::{collect_values, emit};

/// Arguments for `lexdoc format`.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Identifier kind (cpf, cnpj, cnj, phone, email, money).
    /// When omitted, `default_kind` from the config file is used and the
    /// values are read from stdin.
    pub kind: Option<IdentifierKind>,

    /// Values to format. Reads one per line from stdin when omitted.
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,
}

#[derive(Debug, Serialize)]
struct FormatRecord<'a> {
    kind: IdentifierKind,
    input: &'a str,
    formatted: &'a str,
}

/// Execute the format subcommand.
pub fn run_format(
    args: &FormatArgs,
    config: &CliConfig,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<u8> {
    let kind = config.resolve_kind(args.kind)?;
    let values = collect_values(&args.values, input)?;

    for value in &values {
        let formatted = format_kind(kind, value);
        tracing::debug!(%kind, value = %value, formatted = %formatted, "formatted");
        let record = FormatRecord {
            kind,
            input: value,
            formatted: &formatted,
        };
        emit(out, config.output, &formatted, &record)?;
    }

    tracing::info!(%kind, total = values.len(), "formatting finished");
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn run(kind: IdentifierKind, values: &[&str], config: &CliConfig) -> String {
        let args = FormatArgs {
            kind: Some(kind),
            values: values.iter().map(|v| v.to_string()).collect(),
        };
        let mut out = Vec::new();
        let code = run_format(&args, config, "".as_bytes(), &mut out).unwrap();
        assert_eq!(code, 0);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn formats_each_value() {
        let out = run(
            IdentifierKind::Cnpj,
            &["11222333000181", "11.222.333/0001-81"],
            &CliConfig::default(),
        );
        assert_eq!(out, "11.222.333/0001-81\n11.222.333/0001-81\n");
    }

    #[test]
    fn wrong_length_passes_digits_through() {
        let out = run(IdentifierKind::Cpf, &["123.45"], &CliConfig::default());
        assert_eq!(out, "12345\n");
    }

    #[test]
    fn phone_masks_by_length() {
        let out = run(
            IdentifierKind::Phone,
            &["11987654321", "1133334444"],
            &CliConfig::default(),
        );
        assert_eq!(out, "(11) 98765-4321\n(11) 3333-4444\n");
    }

    #[test]
    fn money_parses_text() {
        let out = run(IdentifierKind::Money, &["1234.5"], &CliConfig::default());
        assert_eq!(out, "R$ 1.234,50\n");
    }

    #[test]
    fn reads_stdin_with_default_kind() {
        let config = CliConfig {
            default_kind: Some(IdentifierKind::Cnj),
            ..CliConfig::default()
        };
        let args = FormatArgs {
            kind: None,
            values: Vec::new(),
        };
        let mut out = Vec::new();
        run_format(&args, &config, "00012345620238260100\n".as_bytes(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0001234-56.2023.8.26.0100\n");
    }

    #[test]
    fn json_output() {
        let config = CliConfig {
            output: OutputFormat::Json,
            ..CliConfig::default()
        };
        let out = run(IdentifierKind::Cpf, &["11144477735"], &config);
        let record: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(record["kind"], "cpf");
        assert_eq!(record["input"], "11144477735");
        assert_eq!(record["formatted"], "111.444.777-35");
    }
}
