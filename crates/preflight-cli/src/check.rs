//! # Check Subcommand
//!
//! Loads the resolved config file, validates it against the built-in schema
//! and writes the outcome.
//!
//! Text output is the stable contract consumed by startup scripts:
//!
//! ```text
//! Config validation failed with errors:
//!  - Missing key Locale
//!  - MaxMemory must be one of ['off', 'auto'] or float in (0, 100]
//! ```

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use preflight_core::{ConfigSource, ConfigStore};
use preflight_schema::{ErrorLog, Validator};

/// Output format for check results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Arguments for the `preflight check` subcommand.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// JSON shape of a check result.
#[derive(Serialize, Debug)]
struct CheckReport<'a> {
    valid: bool,
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    load_error: Option<String>,
    errors: Option<&'a ErrorLog>,
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 when the config is valid, 1 when it cannot be
/// loaded or has violations.
pub fn run_check(args: &CheckArgs, source: &ConfigSource, out: &mut impl Write) -> Result<u8> {
    let path = source.path();

    let store = match ConfigStore::load(path) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(path = %e.path().display(), "{e}");
            match args.format {
                OutputFormat::Text => writeln!(out, "Failed to load config.")?,
                OutputFormat::Json => write_json(
                    out,
                    &CheckReport {
                        valid: false,
                        path: path.display().to_string(),
                        load_error: Some(e.to_string()),
                        errors: None,
                    },
                )?,
            }
            return Ok(1);
        }
    };

    let log = Validator::new().validate(&store);

    match args.format {
        OutputFormat::Text => write_text(out, &log)?,
        OutputFormat::Json => write_json(
            out,
            &CheckReport {
                valid: log.is_valid(),
                path: path.display().to_string(),
                load_error: None,
                errors: Some(&log),
            },
        )?,
    }

    Ok(if log.is_valid() { 0 } else { 1 })
}

fn write_text(out: &mut impl Write, log: &ErrorLog) -> Result<()> {
    if log.is_valid() {
        writeln!(out, "Config is valid.")?;
        return Ok(());
    }

    writeln!(out, "Config validation failed with errors:")?;
    for violation in log {
        writeln!(out, " - {violation}")?;
    }
    Ok(())
}

fn write_json(out: &mut impl Write, report: &CheckReport<'_>) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(report).context("failed to serialize check report")?;
    writeln!(out, "{rendered}")?;
    Ok(())
}
