//! Collection operations over the concord contracts
//!
//! Each operation asks for exactly the contract it needs:
//!
//! | Operation                     | Needs        | Notes                         |
//! |-------------------------------|--------------|-------------------------------|
//! | `sort`, `sorted`              | `Ord`        | stable by default             |
//! | `first_index`, `contains`     | `PartialEq`  | linear scan, first match      |
//! | `to_set`, `to_lookup`         | `Eq + Hash`  | one entry per equivalence class |
//!
//! `ContractMap` and `ContractSet` bucket by `concord_core::hash_code_with`
//! and resolve collisions with `==`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dedup;
pub mod search;
pub mod sort;
pub mod table;

pub use dedup::{to_lookup, to_lookup_with, to_set, to_set_with};
pub use search::{contains, contains_where, first_index, first_index_where};
pub use sort::{is_sorted, sort, sort_with, sorted, sorted_with};
pub use table::{ContractMap, ContractSet};
