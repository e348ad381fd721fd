//! Hash contract
//!
//! Equal values must hash identically. The converse is not required:
//! collisions are resolved with equality.
//!
//! A hash must be a pure function of the identity-relevant fields. Feeding
//! a non-identity field into the hasher is a correctness bug: two values
//! the equality contract calls equal would land in different buckets, and a
//! set would keep both.
//!
//! ## Pairing rule
//!
//! There is deliberately no macro that produces `Hash` alone.
//! [`identity_contract!`] generates `PartialEq`, `Eq` and `Hash` from the
//! same [`Identified`] key, which is the only narrowed-hash path offered.
//!
//! ## Hashers
//!
//! | Kind  | Hasher                     | Notes                         |
//! |-------|----------------------------|-------------------------------|
//! | `Fx`  | `rustc_hash::FxHasher`     | default, fast, deterministic  |
//! | `Sip` | std `DefaultHasher::new()` | fixed keys, deterministic     |
//!
//! Both produce the same code for the same input on every run, which keeps
//! test expectations and bucket layouts reproducible.
//!
//! [`identity_contract!`]: crate::identity_contract
//! [`Identified`]: crate::contract::Identified

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Which hasher turns a value into a hash code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HasherKind {
    /// `rustc_hash::FxHasher`
    #[default]
    Fx,
    /// SipHash with fixed keys
    Sip,
}

impl HasherKind {
    /// Name as written in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            HasherKind::Fx => "fx",
            HasherKind::Sip => "sip",
        }
    }
}

impl std::fmt::Display for HasherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hash code of a value using the default hasher.
#[inline]
pub fn hash_code<T: Hash + ?Sized>(value: &T) -> u64 {
    hash_code_with(HasherKind::default(), value)
}

/// Hash code of a value using the given hasher.
pub fn hash_code_with<T: Hash + ?Sized>(kind: HasherKind, value: &T) -> u64 {
    match kind {
        HasherKind::Fx => {
            let mut hasher = FxHasher::default();
            value.hash(&mut hasher);
            hasher.finish()
        }
        HasherKind::Sip => {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }
    }
}

/// Implement `PartialEq`, `Eq` and `Hash` for a type through its
/// [`Identified`] key.
///
/// [`Identified`]: crate::contract::Identified
#[macro_export]
macro_rules! identity_contract {
    ($ty:ty) => {
        $crate::identity_eq!($ty);

        impl ::core::hash::Hash for $ty {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash($crate::contract::Identified::identity(self), state)
            }
        }
    };
}
