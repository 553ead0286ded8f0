//! # Configuration Store
//!
//! Immutable snapshot of an INI file: section name → key → raw string value.
//!
//! The INI grammar itself is delegated to `rust-ini`. This module only
//! decides what counts as a load failure and how the parsed document is
//! folded into lookups:
//!
//! - Section names are case-sensitive (`[General]` ≠ `[general]`).
//! - Keys are case-insensitive; they are stored lowercased.
//! - A key repeated within a section keeps its last value.
//! - A section header repeated in the file merges into one section.
//! - Keys appearing before the first section header are ignored.
//! - `[DEFAULT]` is an ordinary section; its keys are not inherited.
//! - A leading UTF-8 byte order mark is skipped.
//! - Values are kept verbatim apart from surrounding whitespace; quotes
//!   and backslashes are not interpreted.

use std::collections::HashMap;
use std::path::Path;

use ini::{Ini, ParseOption};

use crate::error::LoadError;

/// One `[section]` of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    entries: HashMap<String, String>,
}

impl Section {
    /// Look up a key, ignoring ASCII case.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: &str, value: &str) {
        self.entries
            .insert(key.to_ascii_lowercase(), value.to_string());
    }
}

/// Parsed configuration, produced once per run and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    sections: HashMap<String, Section>,
}

impl ConfigStore {
    /// Load and parse the file at `path`.
    ///
    /// # Errors
    ///
    /// - [`LoadError::NotFound`] if `path` is not an existing regular file.
    /// - [`LoadError::Read`] if the file cannot be read as UTF-8.
    /// - [`LoadError::Parse`] if the text is not INI.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        if !path.is_file() {
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_ini_str(&text).map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::info!(
            path = %path.display(),
            sections = store.sections.len(),
            "loaded config file"
        );
        Ok(store)
    }

    /// Parse INI text directly.
    pub fn from_ini_str(text: &str) -> Result<Self, ini::ParseError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let opts = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        };
        let doc = Ini::load_from_str_opt(text, opts)?;

        let mut sections: HashMap<String, Section> = HashMap::new();
        for (name, props) in doc.iter() {
            let Some(name) = name else {
                if !props.is_empty() {
                    tracing::debug!(keys = props.len(), "ignoring keys outside any section");
                }
                continue;
            };
            let section = sections.entry(name.to_string()).or_default();
            for (key, value) in props.iter() {
                section.insert(key, value);
            }
        }

        Ok(Self { sections })
    }

    /// Look up a section by exact name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Section names, sorted alphabetically.
    pub fn section_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sections.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}
