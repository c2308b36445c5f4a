//! # CLI Configuration
//!
//! Optional YAML file holding defaults for the `lexdoc` subcommands:
//!
//! ```yaml
//! output: json        # text | json
//! strict_cnj: true    # add the MOD 97-10 check to CNJ validation
//! default_kind: cpf   # kind used when a subcommand omits it
//! ```
//!
//! The path comes from `--config` or the `LEXDOC_CONFIG` environment
//! variable. Command-line flags override file values.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use lexdoc_core::IdentifierKind;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV: &str = "LEXDOC_CONFIG";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One human-readable line per value.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Output format.
    pub output: OutputFormat,
    /// Verify CNJ check digits in addition to the 20-digit shape.
    pub strict_cnj: bool,
    /// Kind used by `validate` and `format` when none is given.
    pub default_kind: Option<IdentifierKind>,
}

impl CliConfig {
    /// Parse a config document.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("parsing lexdoc config YAML")
    }

    /// Read and parse the config file at `path`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file: {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("invalid config in {}", path.display()))
    }

    /// Load the config named by `path`, or by `LEXDOC_CONFIG` when `path` is
    /// `None`. With neither set, returns the defaults.
    ///
    /// A path that was named explicitly must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => match std::env::var_os(CONFIG_ENV) {
                Some(env_path) if !env_path.is_empty() => Self::from_path(Path::new(&env_path)),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Apply the global `--json` flag.
    pub fn with_json(mut self, json: bool) -> Self {
        if json {
            self.output = OutputFormat::Json;
        }
        self
    }

    /// The kind to use: the explicit one, else the configured default.
    pub fn resolve_kind(&self, explicit: Option<IdentifierKind>) -> Result<IdentifierKind> {
        explicit.or(self.default_kind).with_context(|| {
            let choices = IdentifierKind::all()
                .iter()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!("no identifier kind given and no default_kind configured (one of: {choices})")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = CliConfig::from_yaml("{}").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.output, OutputFormat::Text);
        assert!(!config.strict_cnj);
        assert!(config.default_kind.is_none());
    }

    #[test]
    fn parses_every_field() {
        let config =
            CliConfig::from_yaml("output: json\nstrict_cnj: true\ndefault_kind: cnpj\n").unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.strict_cnj);
        assert_eq!(config.default_kind, Some(IdentifierKind::Cnpj));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = CliConfig::from_yaml("outptu: json\n").unwrap_err();
        assert!(format!("{err:#}").contains("outptu"));
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!(CliConfig::from_yaml("default_kind: rg\n").is_err());
    }

    #[test]
    fn from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexdoc.yaml");
        std::fs::write(&path, "strict_cnj: true\n").unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        assert!(config.strict_cnj);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let err = CliConfig::load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("absent.yaml"));
    }

    #[test]
    fn invalid_file_names_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "output: xml\n").unwrap();
        let err = CliConfig::from_path(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.yaml"));
    }

    #[test]
    fn json_flag_overrides_file() {
        let config = CliConfig::default().with_json(true);
        assert_eq!(config.output, OutputFormat::Json);
        let config = CliConfig {
            output: OutputFormat::Json,
            ..CliConfig::default()
        }
        .with_json(false);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn resolve_kind_prefers_explicit() {
        let config = CliConfig {
            default_kind: Some(IdentifierKind::Cpf),
            ..CliConfig::default()
        };
        assert_eq!(
            config.resolve_kind(Some(IdentifierKind::Phone)).unwrap(),
            IdentifierKind::Phone
        );
        assert_eq!(config.resolve_kind(None).unwrap(), IdentifierKind::Cpf);
    }

    #[test]
    fn resolve_kind_without_default_lists_choices() {
        let err = CliConfig::default().resolve_kind(None).unwrap_err();
        assert!(err.to_string().contains("cpf, cnpj, cnj, phone, email, money"));
    }
}
