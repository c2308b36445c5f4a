//! # lexdoc-cli: Command-Line Front End for lexdoc
//!
//! Provides the `lexdoc` command-line interface for batch checking and
//! scripting over the `lexdoc-core` validators and formatters.
//!
//! ## Subcommands
//!
//! - `lexdoc validate`: Check values of one identifier kind.
//! - `lexdoc format`: Render values in their canonical mask.
//! - `lexdoc mask`: Apply the as-you-type CNJ mask.
//! - `lexdoc money`: Render amounts as pt-BR currency.
//!
//! Every subcommand takes values as arguments, or reads one value per
//! non-empty line from stdin when none are given:
//!
//! ```bash
//! lexdoc validate cpf 111.444.777-35
//! lexdoc --json format cnj < case_numbers.txt
//! lexdoc money 1234.5 0.1
//! ```
//!
//! Results go to stdout, one line (or one JSON object) per value. Logs go
//! to stderr.

pub mod config;
pub mod format;
pub mod mask;
pub mod money;
pub mod validate;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use config::OutputFormat;
use lexdoc_core::LexdocError;

/// The values to process: the command-line values if any were given,
/// otherwise each non-empty line of `input`, trimmed.
pub fn collect_values(values: &[String], input: impl BufRead) -> Result<Vec<String>> {
    if !values.is_empty() {
        return Ok(values.to_vec());
    }
    let mut collected = Vec::new();
    for line in input.lines() {
        let line = line.context("reading values from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            collected.push(trimmed.to_string());
        }
    }
    tracing::debug!(count = collected.len(), "read values from stdin");
    Ok(collected)
}

/// Write one result: `text` in text mode, `record` as a JSON line otherwise.
pub fn emit<T: Serialize>(
    out: &mut impl Write,
    output: OutputFormat,
    text: &str,
    record: &T,
) -> Result<()> {
    match output {
        OutputFormat::Text => writeln!(out, "{text}").context("writing output")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, record)
                .map_err(LexdocError::from)
                .context("serializing output record")?;
            writeln!(out).context("writing output")?;
        }
    }
    Ok(())
}
