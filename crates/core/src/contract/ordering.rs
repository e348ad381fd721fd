//! Ordering contract
//!
//! A type that can be sorted must agree with itself: if two values are
//! equal, neither may be less than the other. Deriving `PartialEq` from
//! every field while hand-writing `Ord` from one field breaks that rule
//! silently (sorts still "work", but ties and lookups disagree).
//!
//! The [`Ranked`] trait names the single projection ordering looks at;
//! [`rank_ordering!`] then generates `PartialEq`, `Eq`, `PartialOrd` and
//! `Ord` from that projection so equality and ordering cannot drift apart.
//!
//! [`rank_ordering!`]: crate::rank_ordering

use std::cmp::Ordering;

/// A type ordered by a projection of its fields.
pub trait Ranked {
    /// The ordering key
    type Rank: ?Sized + Ord;

    /// Borrow the ordering key of this value
    fn rank(&self) -> &Self::Rank;
}

/// `a` sorts strictly before `b`.
#[inline]
pub fn less_than<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a < b
}

/// Neither value is less than the other.
///
/// Under a consistent contract this is exactly `a == b`.
#[inline]
pub fn is_tie<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    !less_than(a, b) && !less_than(b, a)
}

/// Compare two ranked values by rank alone.
#[inline]
pub fn compare_rank<T: Ranked + ?Sized>(a: &T, b: &T) -> Ordering {
    a.rank().cmp(b.rank())
}

/// Implement `PartialEq`, `Eq`, `PartialOrd` and `Ord` for a type through
/// its [`Ranked`] key.
///
/// [`Ranked`]: crate::contract::Ranked
#[macro_export]
macro_rules! rank_ordering {
    ($ty:ty) => {
        impl ::core::cmp::PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::contract::compare_rank(self, other) == ::core::cmp::Ordering::Equal
            }
        }

        impl ::core::cmp::Eq for $ty {}

        impl ::core::cmp::PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }

        impl ::core::cmp::Ord for $ty {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                $crate::contract::compare_rank(self, other)
            }
        }
    };
}
