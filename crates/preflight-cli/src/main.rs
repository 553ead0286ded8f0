//! # preflight CLI entry point
//!
//! Parses command-line arguments, initializes tracing, and dispatches to
//! subcommand handlers. With no subcommand, `check` runs.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use preflight_cli::check::{run_check, CheckArgs};
use preflight_cli::config_source_from_env;
use preflight_cli::schema::{run_schema, SchemaArgs};

/// Pre-flight configuration checker.
///
/// Validates the application's INI configuration against its schema and
/// reports every problem at once.
#[derive(Parser, Debug)]
#[command(name = "preflight", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the configuration file. Overrides the CONFIG_PATH
    /// environment variable and the built-in default.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load and validate the configuration file.
    Check(CheckArgs),

    /// Print the expected sections, keys and value rules.
    Schema(SchemaArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout().lock();

    let result = match cli.command.unwrap_or_else(|| Commands::Check(CheckArgs::default())) {
        Commands::Check(args) => {
            let source = config_source_from_env(cli.config);
            run_check(&args, &source, &mut stdout)
        }
        Commands::Schema(args) => run_schema(&args, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use preflight_cli::check::OutputFormat;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_has_no_subcommand() {
        let cli = Cli::try_parse_from(["preflight"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn global_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["preflight", "check", "--config", "/tmp/c.ini", "--format", "json"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.ini")));
        match cli.command {
            Some(Commands::Check(args)) => assert_eq!(args.format, OutputFormat::Json),
            other => panic!("expected check, got {other:?}"),
        }
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["preflight", "-vv", "schema"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
