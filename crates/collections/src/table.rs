//! Hash-keyed containers built directly on the contracts.
//!
//! `ContractMap` buckets entries by their hash code and resolves collisions
//! inside a bucket with `==`. Nothing else is consulted, so the container
//! is exactly as correct as the key type's contracts:
//!
//! - equal keys with equal hashes meet in one bucket and collapse
//! - equal keys with *different* hashes land in different buckets and are
//!   both kept, which is the bug `identity_contract!` exists to prevent
//!
//! ## Survivorship
//!
//! When an equal key is inserted again the map replaces the value. Which
//! key *instance* stays in the table is unspecified, and the same holds for
//! which duplicate survives in a `ContractSet`. Callers must not rely on
//! either.

use concord_core::{hash_code_with, HasherKind};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::borrow::Borrow;
use std::hash::Hash;

type Bucket<K, V> = SmallVec<[(K, V); 1]>;

/// Lookup table keyed by value equality.
#[derive(Debug, Clone)]
pub struct ContractMap<K, V> {
    buckets: FxHashMap<u64, Bucket<K, V>>,
    len: usize,
    hasher: HasherKind,
}

impl<K, V> Default for ContractMap<K, V> {
    fn default() -> Self {
        Self::with_hasher(HasherKind::default())
    }
}

impl<K, V> ContractMap<K, V> {
    /// Empty table using the default hasher
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty table using the given hasher
    pub fn with_hasher(hasher: HasherKind) -> Self {
        ContractMap {
            buckets: FxHashMap::default(),
            len: 0,
            hasher,
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// No entries
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Hasher that assigns buckets
    pub fn hasher(&self) -> HasherKind {
        self.hasher
    }

    /// Number of distinct hash codes in use.
    ///
    /// Lower than `len()` only when unequal keys collide.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Iterate entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .values()
            .flat_map(|bucket| bucket.iter().map(|(key, value)| (key, value)))
    }

    /// Iterate keys in unspecified order
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Iterate values in unspecified order
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Consume the table into its entries
    pub fn into_entries(self) -> Vec<(K, V)> {
        self.buckets.into_values().flatten().collect()
    }
}

impl<K: Eq + Hash, V> ContractMap<K, V> {
    /// Insert an entry.
    ///
    /// If an equal key is present its value is replaced and returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let code = hash_code_with(self.hasher, &key);
        let bucket = self.buckets.entry(code).or_default();
        if let Some(slot) = bucket.iter_mut().find(|(existing, _)| *existing == key) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        bucket.push((key, value));
        self.len += 1;
        None
    }

    /// Look up the entry whose key equals `key`
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        let code = hash_code_with(self.hasher, key);
        self.buckets.get(&code).and_then(|bucket| {
            bucket
                .iter()
                .find(|(existing, _)| <K as Borrow<Q>>::borrow(existing) == key)
                .map(|(existing, value)| (existing, value))
        })
    }

    /// Look up the value for `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.get_key_value(key).map(|(_, value)| value)
    }

    /// Whether an equal key is present
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.get_key_value(key).is_some()
    }
}

impl<K: Eq + Hash, V> Extend<(K, V)> for ContractMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, entries: I) {
        for (key, value) in entries {
            self.insert(key, value);
        }
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for ContractMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        let mut map = ContractMap::new();
        map.extend(entries);
        map
    }
}

/// Set holding one representative per equivalence class.
#[derive(Debug, Clone)]
pub struct ContractSet<T> {
    map: ContractMap<T, ()>,
}

impl<T> Default for ContractSet<T> {
    fn default() -> Self {
        ContractSet {
            map: ContractMap::default(),
        }
    }
}

impl<T> ContractSet<T> {
    /// Empty set using the default hasher
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty set using the given hasher
    pub fn with_hasher(hasher: HasherKind) -> Self {
        ContractSet {
            map: ContractMap::with_hasher(hasher),
        }
    }

    /// Number of representatives
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// No representatives
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of distinct hash codes in use
    pub fn bucket_count(&self) -> usize {
        self.map.bucket_count()
    }

    /// Iterate representatives in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.map.keys()
    }

    /// Consume the set into its representatives
    pub fn into_vec(self) -> Vec<T> {
        self.map
            .into_entries()
            .into_iter()
            .map(|(value, ())| value)
            .collect()
    }
}

impl<T: Eq + Hash> ContractSet<T> {
    /// Insert a value. Returns `false` if an equal value was already present.
    pub fn insert(&mut self, value: T) -> bool {
        self.map.insert(value, ()).is_none()
    }

    /// Whether a value equal to `value` is present
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.map.contains_key(value)
    }

    /// The representative equal to `value`, if any
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.map.get_key_value(value).map(|(representative, _)| representative)
    }
}

impl<T: Eq + Hash> Extend<T> for ContractSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }
}

impl<T: Eq + Hash> FromIterator<T> for ContractSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut set = ContractSet::new();
        set.extend(values);
        set
    }
}
