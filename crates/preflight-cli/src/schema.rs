//! # Schema Subcommand
//!
//! Prints the built-in schema so operators can see what a valid file needs.

use std::io::Write;

use anyhow::{bail, Result};
use clap::Args;

use preflight_schema::{SectionSpec, SCHEMA};

/// Arguments for the `preflight schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {
    /// Only print this section (exact name, e.g. `Watchdog`).
    #[arg(long, value_name = "NAME")]
    pub section: Option<String>,
}

/// Execute the schema subcommand.
pub fn run_schema(args: &SchemaArgs, out: &mut impl Write) -> Result<u8> {
    let sections: Vec<&SectionSpec> = match &args.section {
        Some(name) => SCHEMA.iter().filter(|s| s.name == name.as_str()).collect(),
        None => SCHEMA.iter().collect(),
    };

    if sections.is_empty() {
        let known: Vec<&str> = SCHEMA.iter().map(|s| s.name).collect();
        bail!(
            "unknown section '{}' (expected one of: {})",
            args.section.as_deref().unwrap_or_default(),
            known.join(", ")
        );
    }

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "[{}]", section.name)?;
        let width = section.fields.iter().map(|f| f.key.len()).max().unwrap_or(0);
        for field in section.fields {
            writeln!(out, "  {:<width$}  {}", field.key, field.rule.describe())?;
        }
    }
    Ok(0)
}
