//! Shared test utilities for the integration suites.
//!
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]

use concord::{AppTheme, SharedUser, Song, Timestamp, User};
use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Route `tracing` output through the test harness writer.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// Timestamp at a whole number of seconds past epoch
pub fn at(secs: u64) -> Timestamp {
    Timestamp::from_secs(secs)
}

/// Users with repeated ids and repeated registration times
pub fn sample_users() -> Vec<User> {
    vec![
        User::new(1, "Paige", at(5)),
        User::new(2, "Lily", at(1)),
        User::new(1, "hello", at(3)),
        User::new(3, "Paul", at(1)),
        User::new(2, "Sunghee", at(9)),
    ]
}

/// The playlist from the hashable example, plus one more id collision
pub fn sample_songs() -> Vec<Song> {
    vec![
        Song::new("1", "Paige", "Action"),
        Song::new("2", "Sunghee", "Melo"),
        Song::new("1", "Paige", "Rock"),
        Song::new("3", "Lily", "Jazz"),
        Song::new("2", "Paul", "Melo"),
    ]
}

/// Handles where some share a profile and some only share an id
pub fn sample_handles() -> Vec<SharedUser> {
    let paige = SharedUser::new(1, "Paige");
    vec![
        paige.clone(),
        SharedUser::new(1, "Lily"),
        paige,
        SharedUser::new(2, "Paul"),
    ]
}

/// Every theme, with a repeat
pub fn sample_themes() -> Vec<AppTheme> {
    vec![AppTheme::DarkMode, AppTheme::LightMode, AppTheme::DarkMode]
}
