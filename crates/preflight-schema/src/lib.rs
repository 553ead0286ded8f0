//! # preflight-schema — Field Rules & Config Validation
//!
//! Checks a loaded [`ConfigStore`](preflight_core::ConfigStore) against the
//! fixed schema of required sections and typed keys, and reports every
//! violation at once.
//!
//! ## Rules (`rule`)
//!
//! [`Rule`] is a closed set of value predicates: bounded integers,
//! keyword enumerations with an optional float fallback, booleans, absolute
//! existing directories, UUIDs, unit-suffixed integers and locale tags.
//!
//! ## Schema (`schema`)
//!
//! [`SCHEMA`] is a static table of [`SectionSpec`]s, each an ordered list of
//! [`FieldSpec`]s. Adding a key is a data change, not new control flow.
//!
//! ## Validation (`validate`)
//!
//! [`Validator::validate`] walks the table in order and returns an
//! [`ErrorLog`]. An empty log means the configuration is valid.
//!
//! ## Crate Policy
//!
//! - Depends only on `preflight-core` internally.
//! - Validation never panics and never returns `Err`; every failure becomes
//!   a log entry and the run continues with the next key.

pub mod rule;
pub mod schema;
pub mod validate;

pub use rule::{FloatRange, Rule, LOCALE_PATTERN};
pub use schema::{FieldSpec, SectionSpec, GENERAL_FIELDS, SCHEMA, WATCHDOG_FIELDS};
pub use validate::{ErrorLog, Validator, Violation, ViolationKind};

/// Validate `store` against the built-in schema.
pub fn validate(store: &preflight_core::ConfigStore) -> ErrorLog {
    Validator::new().validate(store)
}
