//! # Error Types
//!
//! Load-time failures. Validation failures are not errors in this sense:
//! they are collected as data by `preflight-schema` and never abort a run.
//!
//! ## Design
//!
//! - A load error is fatal to the run; validation is skipped entirely.
//! - Every variant names the resolved path so the operator can tell which
//!   of the explicit, environment, or default locations was used.

use std::path::PathBuf;

use thiserror::Error;

/// Error while loading the configuration file into a [`ConfigStore`](crate::ConfigStore).
#[derive(Error, Debug)]
pub enum LoadError {
    /// Nothing usable exists at the resolved path.
    #[error("Config file not found: {}", path.display())]
    NotFound {
        /// The resolved path that was probed.
        path: PathBuf,
    },

    /// The file exists but could not be read as UTF-8 text.
    #[error("cannot read config file {}: {source}", path.display())]
    Read {
        /// The resolved path.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not INI text the parser can tokenize.
    #[error("cannot parse config file {}: {reason}", path.display())]
    Parse {
        /// The resolved path.
        path: PathBuf,
        /// Parser diagnostic, including line and column.
        reason: String,
    },
}

impl LoadError {
    /// The path the failed load was attempted against.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::NotFound { path }
            | LoadError::Read { path, .. }
            | LoadError::Parse { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_path() {
        let err = LoadError::NotFound {
            path: PathBuf::from("/etc/missing.ini"),
        };
        assert_eq!(err.to_string(), "Config file not found: /etc/missing.ini");
        assert_eq!(err.path(), std::path::Path::new("/etc/missing.ini"));
    }
}
