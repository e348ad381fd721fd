//! Collection Operation Tests
//!
//! `first_index` and `contains` scan with `==`; `to_set` and `to_lookup`
//! bucket with the hash and resolve with `==`.

use crate::common::*;
use concord::{
    contains, contains_where, first_index, first_index_where, to_lookup, to_set, to_set_with,
    ContractSet, HasherKind, SharedUser, Song, User,
};
use proptest::prelude::*;

// ============================================================================
// first_index / contains
// ============================================================================

#[test]
fn first_index_returns_lowest_equal_position() {
    let users = sample_users();
    // id 1 appears at 0 and 2; id 2 at 1 and 4.
    assert_eq!(first_index(&users, &User::new(1, "anyone", at(0))), Some(0));
    assert_eq!(first_index(&users, &User::new(2, "anyone", at(0))), Some(1));
    assert_eq!(first_index(&users, &User::new(8, "nobody", at(0))), None);
}

#[test]
fn first_index_on_shared_handles() {
    let handles = sample_handles();
    let paul = SharedUser::new(2, "Paul");
    assert_eq!(first_index(&handles, &paul), Some(3));
    assert_eq!(
        first_index_where(&handles, |h| h.same_instance(&handles[2])),
        Some(0)
    );
}

#[test]
fn contains_by_target_and_by_predicate() {
    let songs = sample_songs();
    assert!(contains(&songs, &Song::new("3", "", "")));
    assert!(!contains(&songs, &Song::new("4", "", "")));
    assert!(contains_where(&songs, |s| s.genre == "Jazz"));
    assert!(!contains_where(&songs, |s| s.artist == "Nobody"));
}

// ============================================================================
// to_set
// ============================================================================

#[test]
fn to_set_keeps_one_song_per_id() {
    init_tracing();
    let playlist = to_set(sample_songs());
    assert_eq!(playlist.len(), 3);
    for id in ["1", "2", "3"] {
        assert!(playlist.contains(&Song::new(id, "", "")));
    }
}

#[test]
fn to_set_survivor_is_one_of_the_duplicates() {
    let playlist = to_set(sample_songs());
    let survivor = playlist.get(&Song::new("2", "", "")).unwrap();
    assert!(survivor.artist == "Sunghee" || survivor.artist == "Paul");
}

#[test]
fn to_set_with_sip_matches_fx_membership() {
    let fx = to_set(sample_users());
    let sip = to_set_with(HasherKind::Sip, sample_users());
    assert_eq!(fx.len(), 3);
    assert_eq!(sip.len(), 3);
    for user in sample_users() {
        assert!(fx.contains(&user));
        assert!(sip.contains(&user));
    }
}

#[test]
fn themes_deduplicate_by_tag() {
    let themes: ContractSet<_> = sample_themes().into_iter().collect();
    assert_eq!(themes.len(), 2);
}

// ============================================================================
// to_lookup
// ============================================================================

#[test]
fn student_scores_lookup() {
    let student_scores = to_lookup(vec![
        ("Paige".to_string(), 60),
        ("Lily".to_string(), 50),
        ("Paul".to_string(), 80),
    ]);
    assert_eq!(student_scores.len(), 3);
    assert_eq!(student_scores.get("Paige"), Some(&60));
    assert_eq!(student_scores.get("Lily"), Some(&50));
    assert_eq!(student_scores.get("Paul"), Some(&80));
    assert_eq!(student_scores.get("Sunghee"), None);
}

#[test]
fn lookup_keyed_by_song_identity() {
    let plays = to_lookup(sample_songs().into_iter().map(|s| {
        let artist = s.artist.clone();
        (s, artist)
    }));
    assert_eq!(plays.len(), 3);
    // Later entries replace the value for an equal key.
    assert_eq!(plays.get(&Song::new("2", "", "")).map(String::as_str), Some("Paul"));
}

// ============================================================================
// Generated samples
// ============================================================================

proptest! {
    #[test]
    fn set_never_holds_two_equal_songs(ids in prop::collection::vec("[1-5]", 0..20)) {
        let songs: Vec<Song> = ids.iter().map(|id| Song::new(id.clone(), "a", "b")).collect();
        let set = to_set(songs.clone());

        let members: Vec<&Song> = set.iter().collect();
        for (i, a) in members.iter().enumerate() {
            for b in &members[i + 1..] {
                prop_assert_ne!(*a, *b);
            }
        }
        for song in &songs {
            prop_assert!(set.contains(song));
        }
    }

    #[test]
    fn contains_agrees_with_first_index(ids in prop::collection::vec(0u64..6, 0..16), target in 0u64..6) {
        let users: Vec<User> = ids.iter().map(|&id| User::new(id, "x", at(id))).collect();
        let probe = User::new(target, "probe", at(0));
        prop_assert_eq!(contains(&users, &probe), first_index(&users, &probe).is_some());
        if let Some(i) = first_index(&users, &probe) {
            prop_assert_eq!(users[i].id, target);
            prop_assert!(users[..i].iter().all(|u| u.id != target));
        }
    }
}
