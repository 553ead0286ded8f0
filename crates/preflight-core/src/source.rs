//! # Config Path Resolution
//!
//! Precedence: explicit path > environment override > built-in default.
//!
//! The environment is never consulted here. Callers read `CONFIG_PATH`
//! themselves (the CLI does it through clap) and pass the value in.

use std::path::{Path, PathBuf};

/// Path used when neither an explicit path nor an override is given.
pub const DEFAULT_CONFIG_PATH: &str = "/var/opt/kaspersky/config.ini";

/// Name of the environment variable carrying the path override.
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

/// Where a configuration file is read from, after precedence is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    path: PathBuf,
    origin: SourceOrigin,
}

/// Which precedence tier produced the resolved path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceOrigin {
    /// Passed directly by the caller.
    Explicit,
    /// Taken from the environment override.
    Environment,
    /// Fell back to [`DEFAULT_CONFIG_PATH`].
    Default,
}

impl ConfigSource {
    /// Resolve the config path from an explicit argument and an optional
    /// environment override value. Empty overrides count as unset.
    pub fn resolve(explicit: Option<PathBuf>, env_override: Option<PathBuf>) -> Self {
        let source = if let Some(path) = explicit {
            Self {
                path,
                origin: SourceOrigin::Explicit,
            }
        } else if let Some(path) = env_override.filter(|p| !p.as_os_str().is_empty()) {
            Self {
                path,
                origin: SourceOrigin::Environment,
            }
        } else {
            Self {
                path: PathBuf::from(DEFAULT_CONFIG_PATH),
                origin: SourceOrigin::Default,
            }
        };

        tracing::debug!(
            path = %source.path.display(),
            origin = ?source.origin,
            "resolved config path"
        );
        source
    }

    /// Use `path` as-is.
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        Self::resolve(Some(path.into()), None)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn origin(&self) -> SourceOrigin {
        self.origin
    }
}

impl Default for ConfigSource {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}
