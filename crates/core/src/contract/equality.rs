//! Equality contract
//!
//! Rust's `PartialEq`/`Eq` already express "these two values are the same".
//! What this module adds is a way to say *which fields* decide sameness.
//!
//! ## Two policies
//!
//! | Policy     | How to opt in                       | Compares             |
//! |------------|-------------------------------------|----------------------|
//! | Structural | `#[derive(PartialEq, Eq)]`          | every field          |
//! | Identity   | `Identified` + [`identity_eq!`]     | `identity()` only    |
//!
//! Field-less enums only ever need the structural policy: derived equality
//! is tag equality.
//!
//! ## Symmetry
//!
//! A hand-written `eq` can easily look at `self.x` on one side and
//! `other.y` on the other. The identity macros compare the same projection
//! on both operands, so symmetry holds by construction.
//!
//! [`identity_eq!`]: crate::identity_eq

use std::fmt::Debug;
use std::hash::Hash;

/// A type whose sameness is decided by a projection of its fields.
///
/// `identity()` must return only identity-relevant data. Everything else
/// on the type is ignored by equality and hashing derived from it.
pub trait Identified {
    /// The identity-relevant projection
    type Key: ?Sized + Eq + Hash + Debug;

    /// Borrow the identity of this value
    fn identity(&self) -> &Self::Key;
}

/// Decide whether two values are equivalent.
///
/// Total and side-effect free.
#[inline]
pub fn equals<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    a == b
}

/// Compare two identified values by identity alone.
#[inline]
pub fn same_identity<T: Identified + ?Sized>(a: &T, b: &T) -> bool {
    a.identity() == b.identity()
}

/// Implement `PartialEq` and `Eq` for a type through its [`Identified`] key.
///
/// Use this when the type takes part in equality but not in hashing.
/// Types that also need `Hash` should use [`identity_contract!`] instead,
/// which derives both from the same key.
///
/// [`Identified`]: crate::contract::Identified
/// [`identity_contract!`]: crate::identity_contract
#[macro_export]
macro_rules! identity_eq {
    ($ty:ty) => {
        impl ::core::cmp::PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::contract::same_identity(self, other)
            }
        }

        impl ::core::cmp::Eq for $ty {}
    };
}
