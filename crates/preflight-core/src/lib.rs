//! # preflight-core — Foundational Types for the Preflight Checker
//!
//! This crate owns everything that happens before validation: deciding which
//! file to read, reading it, and handing the validator an immutable
//! section → key → raw value store. It knows nothing about the schema.
//!
//! ## Key Design Principles
//!
//! 1. **Explicit path resolution.** [`ConfigSource`] carries the default path
//!    and the environment override as plain values. Nothing in this crate
//!    reads the process environment, so tests can supply any path.
//!
//! 2. **Loading is not validating.** [`ConfigStore::load`] fails only when no
//!    store can be produced (file absent, unreadable, or not INI at all).
//!    Missing sections and malformed values are the validator's business.
//!
//! 3. **Case-insensitive keys.** Option names are folded to lowercase on
//!    load, the way INI option names are conventionally matched. Section
//!    names stay case-sensitive.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `preflight-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod source;
pub mod store;

// Re-export primary types for ergonomic imports.
pub use error::LoadError;
pub use source::{ConfigSource, SourceOrigin, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
pub use store::{ConfigStore, Section};
