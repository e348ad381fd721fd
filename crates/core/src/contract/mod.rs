//! Contract types for equality, ordering and hashing
//!
//! A type opts into each contract separately. The contracts only work
//! together when they agree:
//!
//! 1. **Equivalence**: `==` is reflexive, symmetric and transitive
//! 2. **Order agrees with equality**: `a == b` iff neither `a < b` nor `b < a`
//! 3. **Hash agrees with equality**: `a == b` implies `hash(a) == hash(b)`
//! 4. **Keyed containers stay unique**: no set or table holds two equal keys
//!
//! ## Module Structure
//!
//! - `equality`: `Identified`, `equals`, `identity_eq!` (law 1)
//! - `ordering`: `Ranked`, `less_than`, `rank_ordering!` (law 2)
//! - `hashing`: `hash_code`, `HasherKind`, `identity_contract!` (law 3)
//! - `laws`: sample-based checkers for laws 1-3
//! - `timestamp`: microsecond timestamps used as ordering keys
//!
//! ## Usage
//!
//! ```
//! use concord_core::contract::{hash_code, Identified};
//!
//! #[derive(Debug)]
//! struct Track {
//!     id: String,
//!     genre: String,
//! }
//!
//! impl Identified for Track {
//!     type Key = String;
//!     fn identity(&self) -> &String {
//!         &self.id
//!     }
//! }
//!
//! concord_core::identity_contract!(Track);
//!
//! let a = Track { id: "1".into(), genre: "Action".into() };
//! let b = Track { id: "1".into(), genre: "Rock".into() };
//! assert_eq!(a, b);
//! assert_eq!(hash_code(&a), hash_code(&b));
//! ```

pub mod equality;
pub mod hashing;
pub mod laws;
pub mod ordering;
pub mod timestamp;

// Re-exports
pub use equality::{equals, same_identity, Identified};
pub use hashing::{hash_code, hash_code_with, HasherKind};
pub use laws::{LawChecker, LawReport};
pub use ordering::{compare_rank, is_tie, less_than, Ranked};
pub use timestamp::Timestamp;
