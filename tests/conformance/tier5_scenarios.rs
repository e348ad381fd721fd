//! Playground Scenario Tests
//!
//! The walkthroughs that motivate the contracts, end to end.

use crate::common::*;
use concord::{
    first_index, less_than, sort, sorted, to_set, AppTheme, ByRegistration, SharedUser, Song,
    Timestamp, User,
};
use std::time::Duration;

#[test]
fn earlier_registration_sorts_first() {
    init_tracing();
    let user1 = User::new(1, "A", Timestamp::from_now(Duration::from_secs(5)));
    let user2 = User::new(2, "B", Timestamp::from_now(Duration::from_secs(1)));

    let first = ByRegistration(user1.clone());
    let second = ByRegistration(user2.clone());
    assert!(less_than(&second, &first));
    assert!(user2.registered_before(&user1));

    let mut users = vec![first, second];
    sort(&mut users);
    assert_eq!(users[0].user().name, "B");

    let new_users = sorted(users.clone());
    let names: Vec<&str> = new_users.iter().map(|u| u.user().name.as_str()).collect();
    assert_eq!(names, vec!["B", "A"]);
}

#[test]
fn users_with_same_identifier_are_the_same() {
    let user1 = User::new(1, "X", at(0));
    let user2 = User::new(1, "Y", at(0));
    assert_eq!(user1, user2);
}

#[test]
fn duplicate_student_names_collapse() {
    let students = to_set(vec!["Paige".to_string(), "Paige".to_string()]);
    assert_eq!(students.len(), 1);
}

#[test]
fn playlist_of_three_songs_has_two_entries() {
    let song1 = Song::new("1", "Paige", "Action");
    let song2 = Song::new("2", "Sunghee", "Melo");
    let song3 = Song::new("1", "Paige", "Rock");

    let music_playlist = to_set(vec![song1, song2, song3]);
    assert_eq!(music_playlist.len(), 2);
}

#[test]
fn first_index_of_reference_value_at_front() {
    let user_model1 = SharedUser::new(1, "Paige");
    let user_model2 = SharedUser::new(2, "Lily");
    let collection_of_users = vec![user_model1.clone(), user_model2];
    assert_eq!(first_index(&collection_of_users, &user_model1), Some(0));
}

#[test]
fn themes_differ() {
    let current_theme = AppTheme::DarkMode;
    let new_theme = AppTheme::LightMode;
    assert_ne!(current_theme, new_theme);
}
