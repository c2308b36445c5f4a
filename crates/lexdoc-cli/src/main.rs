//! # lexdoc CLI entry point
//!
//! Parses command-line arguments, loads the optional config file, and
//! dispatches to subcommand handlers. Results go to stdout; logs go to
//! stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lexdoc_cli::config::CliConfig;
use lexdoc_cli::format::{run_format, FormatArgs};
use lexdoc_cli::mask::{run_mask, MaskArgs};
use lexdoc_cli::money::{run_money, MoneyArgs};
use lexdoc_cli::validate::{run_validate, ValidateArgs};

/// Validate and format Brazilian legal-practice identifiers: CPF, CNPJ,
/// CNJ case numbers, phone numbers, e-mail addresses, and BRL amounts.
#[derive(Parser, Debug)]
#[command(name = "lexdoc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true, env = "LEXDOC_CONFIG")]
    config: Option<PathBuf>,

    /// Write one JSON object per value instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check values of one identifier kind; exits 1 if any is invalid.
    Validate(ValidateArgs),

    /// Render values in their canonical mask.
    Format(FormatArgs),

    /// Apply the as-you-type CNJ mask to partial case numbers.
    Mask(MaskArgs),

    /// Render amounts as pt-BR currency; exits 1 if any is invalid.
    Money(MoneyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("lexdoc CLI v{} starting", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let config = CliConfig::load(cli.config.as_deref())?.with_json(cli.json);
    tracing::debug!(?config, "resolved configuration");

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Validate(args) => run_validate(&args, &config, stdin, &mut stdout),
        Commands::Format(args) => run_format(&args, &config, stdin, &mut stdout),
        Commands::Mask(args) => run_mask(&args, &config, stdin, &mut stdout),
        Commands::Money(args) => run_money(&args, &config, stdin, &mut stdout),
    }
}
