//! Building keyed containers from sequences.
//!
//! Duplicates by equality collapse to one entry. The representative that
//! survives a collapse is unspecified; see `table` for details.

use crate::table::{ContractMap, ContractSet};
use concord_core::HasherKind;
use std::hash::Hash;
use tracing::debug;

/// Deduplicate values into a set using the default hasher.
pub fn to_set<T, I>(values: I) -> ContractSet<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    to_set_with(HasherKind::default(), values)
}

/// Deduplicate values into a set using the given hasher.
pub fn to_set_with<T, I>(hasher: HasherKind, values: I) -> ContractSet<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut set = ContractSet::with_hasher(hasher);
    let mut seen = 0usize;
    for value in values {
        seen += 1;
        set.insert(value);
    }
    debug!(
        input = seen,
        unique = set.len(),
        collapsed = seen - set.len(),
        %hasher,
        "Built contract set"
    );
    set
}

/// Build a lookup table; later values replace earlier ones for equal keys.
pub fn to_lookup<K, V, I>(entries: I) -> ContractMap<K, V>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
{
    to_lookup_with(HasherKind::default(), entries)
}

/// Build a lookup table using the given hasher.
pub fn to_lookup_with<K, V, I>(hasher: HasherKind, entries: I) -> ContractMap<K, V>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
{
    let mut map = ContractMap::with_hasher(hasher);
    let mut replaced = 0usize;
    for (key, value) in entries {
        if map.insert(key, value).is_some() {
            replaced += 1;
        }
    }
    debug!(entries = map.len(), replaced, %hasher, "Built lookup table");
    map
}
