//! Core contracts for concord
//!
//! This crate defines how a type declares what "same", "before" and
//! "bucket" mean for its values:
//! - Equality: `Identified`, `equals`, `identity_eq!`
//! - Ordering: `Ranked`, `less_than`, `is_tie`, `rank_ordering!`
//! - Hashing: `hash_code`, `HasherKind`, `identity_contract!`
//! - Laws: `LawChecker` / `LawReport` for sampling contract consistency
//! - Timestamp: microsecond ordering key
//! - Config: `ConcordConfig` loaded from `concord.toml`
//! - Error: `ConcordError`, `ContractViolation`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod contract;
pub mod error;

pub use config::{ConcordConfig, SortPolicy, CONFIG_FILE_NAME, DEFAULT_MAX_LAW_SAMPLES};
pub use error::{ConcordError, ConcordResult, ContractViolation};

// Re-export contract types at crate root for convenience
pub use contract::{
    compare_rank, equals, hash_code, hash_code_with, is_tie, less_than, same_identity,
    HasherKind, Identified, LawChecker, LawReport, Ranked, Timestamp,
};
