//! # preflight-cli — Command-Line Interface for the Preflight Checker
//!
//! Provides the `preflight` binary, run before the main application starts
//! to catch misconfiguration early.
//!
//! ## Subcommands
//!
//! - `preflight check` (default) — load the config file, validate it, report.
//! - `preflight schema` — list every expected section, key and rule.
//!
//! ## Exit Codes
//!
//! ```bash
//! preflight                         # 0: "Config is valid."
//! preflight --config missing.ini    # 1: "Failed to load config."
//! preflight --config bad.ini        # 1: "Config validation failed with errors:"
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers here take parsed args and
//!   a writer so they can be tested without a process.
//! - Handlers delegate to `preflight-core` and `preflight-schema`; no
//!   validation logic here.

pub mod check;
pub mod schema;

use std::path::PathBuf;

use preflight_core::{ConfigSource, CONFIG_PATH_ENV};

/// Resolve the config source for this process: `--config`, then the
/// `CONFIG_PATH` environment variable, then the built-in default.
pub fn config_source_from_env(explicit: Option<PathBuf>) -> ConfigSource {
    let env_override = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    ConfigSource::resolve(explicit, env_override)
}
