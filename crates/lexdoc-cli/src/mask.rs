//! # Mask: Apply the as-you-type CNJ mask.
//!
//! Renders partially typed case numbers the way an input field masks them
//! on each keystroke: separators appear once the digit after them is
//! typed, and digits past the twentieth are dropped.
//!
//! ```bash
//! lexdoc mask 00012345 0001234562023
//! ```

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use lexdoc_core::cnj::CNJ_MASKED_LEN;
use lexdoc_core::format_cnj_incremental;

use crate::config::CliConfig;
use crate::{collect_values, emit};

/// Arguments for `lexdoc mask`.
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// Partial or complete case numbers. Reads one per line from stdin
    /// when omitted.
    pub values: Vec<String>,
}

#[derive(Debug, Serialize)]
struct MaskRecord<'a> {
    input: &'a str,
    masked: &'a str,
    complete: bool,
}

/// Execute the mask subcommand.
pub fn run_mask(
    args: &MaskArgs,
    config: &CliConfig,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<u8> {
    let values = collect_values(&args.values, input)?;
    for value in &values {
        let masked = format_cnj_incremental(value);
        tracing::debug!(value = %value, masked = %masked, "masked");
        let record = MaskRecord {
            input: value,
            masked: &masked,
            complete: masked.len() == CNJ_MASKED_LEN,
        };
        emit(out, config.output, &masked, &record)?;
    }
    Ok(0)
}
