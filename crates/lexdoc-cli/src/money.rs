//! # Money: Render amounts as pt-BR currency.
//!
//! ```bash
//! lexdoc money 1234.5 0.1 -3
//! ```
//!
//! Amounts must be finite and non-negative. Invalid amounts are reported
//! and set exit status 1.

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use lexdoc_core::{format_money, parse_money};

use crate::config::CliConfig;
use crate::{collect_values, emit};

/// Arguments for `lexdoc money`.
#[derive(Args, Debug)]
pub struct MoneyArgs {
    /// Amounts with `.` as the decimal separator. Reads one per line from
    /// stdin when omitted.
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,
}

#[derive(Debug, Serialize)]
struct MoneyRecord<'a> {
    input: &'a str,
    valid: bool,
    amount: Option<f64>,
    formatted: Option<String>,
}

/// Execute the money subcommand.
pub fn run_money(
    args: &MoneyArgs,
    config: &CliConfig,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<u8> {
    let values = collect_values(&args.values, input)?;

    let mut invalid = 0usize;
    for value in &values {
        let (text, record) = match parse_money(value) {
            Ok(amount) => {
                let formatted = format_money(amount);
                tracing::debug!(value = %value, amount, "parsed amount");
                let record = MoneyRecord {
                    input: value,
                    valid: true,
                    amount: Some(amount),
                    formatted: Some(formatted.clone()),
                };
                (formatted, record)
            }
            Err(e) => {
                invalid += 1;
                tracing::warn!("{e}");
                let record = MoneyRecord {
                    input: value,
                    valid: false,
                    amount: None,
                    formatted: None,
                };
                (format!("invalid {value}"), record)
            }
        };
        emit(out, config.output, &text, &record)?;
    }

    tracing::info!(total = values.len(), invalid, "money formatting finished");
    Ok(u8::from(invalid > 0))
}
