//! Ordering Law Tests
//!
//! Ordering must agree with equality: equal values are never less than
//! each other. `ByRegistration` orders, and compares, users by their
//! registration timestamp alone.

use crate::common::*;
use concord::{
    is_sorted, is_tie, less_than, sort, sorted, sorted_with, ByRegistration, LawChecker,
    SortPolicy, Timestamp, User,
};
use proptest::prelude::*;

fn by_registration(users: Vec<User>) -> Vec<ByRegistration> {
    users.into_iter().map(ByRegistration::from).collect()
}

// ============================================================================
// Order agrees with equality
// ============================================================================

#[test]
fn registration_order_agrees_with_equality() {
    init_tracing();
    let ranked = by_registration(sample_users());
    let checker = LawChecker::default();
    assert!(checker.check_equality(&ranked).is_clean());
    assert!(checker.check_ordering(&ranked).is_clean());
}

#[test]
fn equal_registration_is_a_tie() {
    let a = ByRegistration(User::new(2, "Lily", at(1)));
    let b = ByRegistration(User::new(3, "Paul", at(1)));
    assert_eq!(a, b);
    assert!(is_tie(&a, &b));
    assert!(!less_than(&a, &b));
    assert!(!less_than(&b, &a));
}

#[test]
fn registration_ignores_identifier_and_name() {
    let early = ByRegistration(User::new(99, "Zed", at(1)));
    let late = ByRegistration(User::new(1, "Amy", at(2)));
    assert!(early < late);
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn sort_orders_users_chronologically() {
    let mut users = by_registration(sample_users());
    sort(&mut users);
    assert!(is_sorted(&users));

    let stamps: Vec<u64> = users.iter().map(|u| u.user().registered_at.as_secs()).collect();
    assert_eq!(stamps, vec![1, 1, 3, 5, 9]);
}

#[test]
fn stable_sort_keeps_tied_users_in_input_order() {
    let users = by_registration(sample_users());
    let names: Vec<String> = sorted(users)
        .into_iter()
        .map(|u| u.into_inner().name)
        .collect();
    // Lily and Paul both registered at t=1; Lily came first in the input.
    assert_eq!(names, vec!["Lily", "Paul", "hello", "Paige", "Sunghee"]);
}

#[test]
fn unstable_sort_orders_but_may_swap_ties() {
    let users = sorted_with(SortPolicy::Unstable, by_registration(sample_users()));
    assert!(is_sorted(&users));
    let first_two: Vec<&str> = users[..2].iter().map(|u| u.user().name.as_str()).collect();
    assert!(first_two.contains(&"Lily") && first_two.contains(&"Paul"));
}

#[test]
fn sorted_leaves_source_untouched() {
    let users = by_registration(sample_users());
    let snapshot: Vec<u64> = users.iter().map(|u| u.user().id).collect();
    let _ = sorted(users.iter().cloned());
    let after: Vec<u64> = users.iter().map(|u| u.user().id).collect();
    assert_eq!(snapshot, after);
}

// ============================================================================
// Generated samples
// ============================================================================

fn ranked_strategy() -> impl Strategy<Value = ByRegistration> {
    (0u64..100, 0u64..6).prop_map(|(id, secs)| {
        ByRegistration(User::new(id, format!("user{}", id), Timestamp::from_secs(secs)))
    })
}

proptest! {
    #[test]
    fn equal_implies_neither_less(a in ranked_strategy(), b in ranked_strategy()) {
        if a == b {
            prop_assert!(!less_than(&a, &b));
            prop_assert!(!less_than(&b, &a));
        }
        prop_assert_eq!(a == b, is_tie(&a, &b));
    }

    #[test]
    fn sorted_preserves_length_and_is_idempotent(users in prop::collection::vec(ranked_strategy(), 0..24)) {
        let once = sorted(users.clone());
        prop_assert_eq!(once.len(), users.len());
        prop_assert!(is_sorted(&once));

        let twice = sorted(once.clone());
        let ids_once: Vec<u64> = once.iter().map(|u| u.user().id).collect();
        let ids_twice: Vec<u64> = twice.iter().map(|u| u.user().id).collect();
        prop_assert_eq!(ids_once, ids_twice);
    }

    #[test]
    fn sorted_is_a_permutation(users in prop::collection::vec(ranked_strategy(), 0..24)) {
        let mut before: Vec<u64> = users.iter().map(|u| u.user().id).collect();
        let mut after: Vec<u64> = sorted(users).iter().map(|u| u.user().id).collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }
}
