//! Membership and position queries over ordered sequences.
//!
//! These scan linearly and report the first match. A slice has an order,
//! and "first" is part of the answer, so no hashing is involved.

/// Lowest index whose element equals `target`.
pub fn first_index<T: PartialEq>(values: &[T], target: &T) -> Option<usize> {
    first_index_where(values, |value| value == target)
}

/// Lowest index whose element satisfies `predicate`.
pub fn first_index_where<T, F>(values: &[T], predicate: F) -> Option<usize>
where
    F: FnMut(&T) -> bool,
{
    values.iter().position(predicate)
}

/// Some element equals `target`.
pub fn contains<T: PartialEq>(values: &[T], target: &T) -> bool {
    contains_where(values, |value| value == target)
}

/// Some element satisfies `predicate`.
pub fn contains_where<T, F>(values: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    values.iter().any(predicate)
}
