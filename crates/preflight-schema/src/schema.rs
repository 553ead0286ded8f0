//! # Built-in Schema
//!
//! The expected sections, their keys, and the rule for each key, as a static
//! table. Declaration order is significant: violations are reported in the
//! order sections and keys appear here.

use crate::rule::{FloatRange, Rule};

/// One expected key and the rule its value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub rule: Rule,
}

/// One required section and its ordered fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpec {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

const fn field(key: &'static str, rule: Rule) -> FieldSpec {
    FieldSpec { key, rule }
}

const MEMORY_PERCENT: Rule = Rule::Enum {
    choices: &["off", "auto"],
    float_range: Some(FloatRange::new(0.0, 100.0)),
};

pub const GENERAL_FIELDS: &[FieldSpec] = &[
    field("ScanMemoryLimit", Rule::IntRange { min: 1024, max: 8192 }),
    field(
        "PackageType",
        Rule::Enum {
            choices: &["rpm", "deb"],
            float_range: None,
        },
    ),
    field("ExecArgMax", Rule::IntRange { min: 10, max: 100 }),
    field("AdditionalDNSLookup", Rule::Bool),
    field("CoreDumps", Rule::Bool),
    field("RevealSensitiveInfoInTraces", Rule::Bool),
    field("ExecEnvMax", Rule::IntRange { min: 10, max: 100 }),
    field(
        "MaxInotifyWatches",
        Rule::IntRange {
            min: 1000,
            max: 1_000_000,
        },
    ),
    field("CoreDumpsPath", Rule::AbsoluteExistingDir),
    field("UseFanotify", Rule::Bool),
    field("KsvlaMode", Rule::Bool),
    field("MachineId", Rule::Uuid),
    field("StartupTraces", Rule::Bool),
    field("MaxInotifyInstances", Rule::IntRange { min: 1024, max: 8192 }),
    field("Locale", Rule::Locale),
];

pub const WATCHDOG_FIELDS: &[FieldSpec] = &[
    field(
        "ConnectTimeout",
        Rule::SuffixedIntRange {
            suffix: "m",
            min: 1,
            max: 120,
        },
    ),
    field("MaxVirtualMemory", MEMORY_PERCENT),
    field("MaxMemory", MEMORY_PERCENT),
    field("PingInterval", Rule::IntRange { min: 100, max: 10_000 }),
];

/// The schema checked by [`Validator::new`](crate::Validator::new).
pub static SCHEMA: &[SectionSpec] = &[
    SectionSpec {
        name: "General",
        fields: GENERAL_FIELDS,
    },
    SectionSpec {
        name: "Watchdog",
        fields: WATCHDOG_FIELDS,
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn sections_in_declared_order() {
        let names: Vec<&str> = SCHEMA.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["General", "Watchdog"]);
    }

    #[test]
    fn field_counts() {
        assert_eq!(GENERAL_FIELDS.len(), 15);
        assert_eq!(WATCHDOG_FIELDS.len(), 4);
    }

    #[test]
    fn keys_unique_within_each_section() {
        for section in SCHEMA {
            let mut seen = HashSet::new();
            for f in section.fields {
                assert!(
                    seen.insert(f.key.to_ascii_lowercase()),
                    "duplicate key {} in [{}]",
                    f.key,
                    section.name
                );
            }
        }
    }

    #[test]
    fn int_ranges_are_well_formed() {
        for section in SCHEMA {
            for f in section.fields {
                match f.rule {
                    Rule::IntRange { min, max } | Rule::SuffixedIntRange { min, max, .. } => {
                        assert!(min <= max, "{}: min > max", f.key)
                    }
                    _ => {}
                }
            }
        }
    }
}
