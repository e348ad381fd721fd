//! Sorting over the ordering contract.
//!
//! `sort` and `sorted` are stable: values that tie under `Ord` keep their
//! input order. `sort_with`/`sorted_with` accept `SortPolicy::Unstable`
//! when tie order does not matter.

use concord_core::SortPolicy;
use tracing::debug;

/// Sort in place with the stable policy.
pub fn sort<T: Ord>(values: &mut [T]) {
    sort_with(SortPolicy::Stable, values);
}

/// Sort in place with the given policy.
pub fn sort_with<T: Ord>(policy: SortPolicy, values: &mut [T]) {
    match policy {
        SortPolicy::Stable => values.sort(),
        SortPolicy::Unstable => values.sort_unstable(),
    }
    debug!(len = values.len(), ?policy, "Sorted sequence");
}

/// Collect and sort with the stable policy, leaving the source untouched.
pub fn sorted<T, I>(values: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    sorted_with(SortPolicy::Stable, values)
}

/// Collect and sort with the given policy.
pub fn sorted_with<T, I>(policy: SortPolicy, values: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut collected: Vec<T> = values.into_iter().collect();
    sort_with(policy, &mut collected);
    collected
}

/// Every adjacent pair is in order.
pub fn is_sorted<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}
