//! # Config Validation
//!
//! Runs every rule of a schema against a loaded [`ConfigStore`] and collects
//! every failure. Validation never stops early and never returns an error:
//! the outcome is an [`ErrorLog`], empty when the configuration is valid.
//!
//! ## Error Accumulation
//!
//! - A missing section yields one `Missing [<section>] section` entry and
//!   none of that section's keys are checked.
//! - A missing key yields one `Missing key <key>` entry; its rule is not run.
//! - A present key whose value fails its rule yields the rule's message.
//!
//! Entries are appended in schema declaration order, so two runs over the
//! same store produce identical logs.

use std::fmt;

use preflight_core::{ConfigStore, Section};
use serde::Serialize;

use crate::schema::{FieldSpec, SectionSpec, SCHEMA};

/// What went wrong for a single log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required section is absent.
    MissingSection,
    /// A required key is absent from its section.
    MissingKey,
    /// The value is present but fails its rule.
    InvalidValue,
}

/// One entry in the [`ErrorLog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Section the entry belongs to.
    pub section: &'static str,
    /// Offending key, absent for section-level entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<&'static str>,
    pub kind: ViolationKind,
    /// Human-readable message, e.g. `Missing key Locale`.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Ordered, append-only record of all violations from one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorLog {
    violations: Vec<Violation>,
}

impl ErrorLog {
    /// True when nothing was recorded.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// The messages alone, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.message.as_str()).collect()
    }

    fn push(&mut self, violation: Violation) {
        tracing::debug!(
            section = violation.section,
            key = violation.key,
            kind = ?violation.kind,
            "{}",
            violation.message
        );
        self.violations.push(violation);
    }
}

impl<'a> IntoIterator for &'a ErrorLog {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl fmt::Display for ErrorLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Checks a [`ConfigStore`] against a static schema.
///
/// Holds no state beyond the schema reference; one validator can be reused
/// for any number of runs.
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    schema: &'static [SectionSpec],
}

impl Validator {
    /// Validator for the built-in [`SCHEMA`].
    pub fn new() -> Self {
        Self::with_schema(SCHEMA)
    }

    /// Validator for a caller-supplied schema table.
    pub fn with_schema(schema: &'static [SectionSpec]) -> Self {
        Self { schema }
    }

    /// Run every rule and return the complete log.
    pub fn validate(&self, store: &ConfigStore) -> ErrorLog {
        let mut log = ErrorLog::default();
        for spec in self.schema {
            validate_section(spec, store, &mut log);
        }

        tracing::info!(
            sections = self.schema.len(),
            violations = log.len(),
            "validation finished"
        );
        log
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_section(spec: &SectionSpec, store: &ConfigStore, log: &mut ErrorLog) {
    let Some(section) = store.section(spec.name) else {
        log.push(Violation {
            section: spec.name,
            key: None,
            kind: ViolationKind::MissingSection,
            message: format!("Missing [{}] section", spec.name),
        });
        return;
    };

    tracing::debug!(section = spec.name, keys = spec.fields.len(), "checking section");
    for field in spec.fields {
        validate_field(spec.name, field, section, log);
    }
}

fn validate_field(
    section_name: &'static str,
    field: &FieldSpec,
    section: &Section,
    log: &mut ErrorLog,
) {
    let Some(raw) = section.get(field.key) else {
        log.push(Violation {
            section: section_name,
            key: Some(field.key),
            kind: ViolationKind::MissingKey,
            message: format!("Missing key {}", field.key),
        });
        return;
    };

    if let Err(message) = field.rule.check(field.key, raw) {
        log.push(Violation {
            section: section_name,
            key: Some(field.key),
            kind: ViolationKind::InvalidValue,
            message,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    static TINY: &[SectionSpec] = &[SectionSpec {
        name: "Only",
        fields: &[
            FieldSpec {
                key: "Flag",
                rule: Rule::Bool,
            },
            FieldSpec {
                key: "Count",
                rule: Rule::IntRange { min: 1, max: 3 },
            },
        ],
    }];

    fn store(text: &str) -> ConfigStore {
        ConfigStore::from_ini_str(text).unwrap()
    }

    #[test]
    fn custom_schema_valid() {
        let log = Validator::with_schema(TINY).validate(&store("[Only]\nFlag=yes\nCount=2\n"));
        assert!(log.is_valid());
        assert_eq!(log.to_string(), "");
    }

    #[test]
    fn custom_schema_collects_all_failures_in_order() {
        let log = Validator::with_schema(TINY).validate(&store("[Only]\nCount=9\n"));
        assert_eq!(
            log.messages(),
            vec!["Missing key Flag", "Count must be integer in [1, 3]"]
        );
        assert_eq!(log.violations()[0].kind, ViolationKind::MissingKey);
        assert_eq!(log.violations()[1].kind, ViolationKind::InvalidValue);
        assert_eq!(log.violations()[1].key, Some("Count"));
    }

    #[test]
    fn missing_section_skips_keys() {
        let log = Validator::with_schema(TINY).validate(&store("[Other]\nFlag=1\n"));
        assert_eq!(log.len(), 1);
        let v = &log.violations()[0];
        assert_eq!(v.kind, ViolationKind::MissingSection);
        assert_eq!(v.key, None);
        assert_eq!(v.message, "Missing [Only] section");
    }

    #[test]
    fn display_joins_messages_by_line() {
        let log = Validator::with_schema(TINY).validate(&store("[Only]\n"));
        assert_eq!(log.to_string(), "Missing key Flag\nMissing key Count");
    }

    #[test]
    fn serializes_as_array_of_entries() {
        let log = Validator::with_schema(TINY).validate(&store(""));
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "section": "Only",
                "kind": "missing_section",
                "message": "Missing [Only] section"
            }])
        );
    }

    #[test]
    fn empty_schema_is_always_valid() {
        static EMPTY: &[SectionSpec] = &[];
        assert!(Validator::with_schema(EMPTY).validate(&store("")).is_valid());
    }
}
