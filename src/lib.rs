//! Concord - equality, ordering and hashing contracts for custom data types
//!
//! A type opts into each contract separately, and the standard collection
//! operations only behave when the contracts agree with each other.
//!
//! # Quick Start
//!
//! ```
//! use concord::{to_set, Identified, Song};
//!
//! let playlist = to_set(vec![
//!     Song::new("1", "Paige", "Action"),
//!     Song::new("2", "Sunghee", "Melo"),
//!     Song::new("1", "Paige", "Rock"),
//! ]);
//! assert_eq!(playlist.len(), 2);
//! assert!(playlist.iter().any(|song| song.identity() == "2"));
//! ```
//!
//! # Architecture
//!
//! - `concord-core`: the contracts, the law checkers, config and errors
//! - `concord-collections`: sort, search and keyed containers over them
//! - `concord-models`: example records that opt into the contracts

pub use concord_collections::{
    contains, contains_where, first_index, first_index_where, is_sorted, sort, sort_with, sorted,
    sorted_with, to_lookup, to_lookup_with, to_set, to_set_with, ContractMap, ContractSet,
};
pub use concord_core::{
    compare_rank, equals, hash_code, hash_code_with, identity_contract, identity_eq, is_tie,
    less_than, rank_ordering, same_identity, ConcordConfig, ConcordError, ConcordResult,
    ContractViolation, HasherKind, Identified, LawChecker, LawReport, Ranked, SortPolicy,
    Timestamp, CONFIG_FILE_NAME, DEFAULT_MAX_LAW_SAMPLES,
};
pub use concord_models::{AppTheme, ByRegistration, SharedUser, Song, User, UserProfile};
