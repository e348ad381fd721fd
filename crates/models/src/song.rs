//! Songs identified by id.

use concord_core::Identified;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A song. Only `id` takes part in equality and hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    /// Identity
    pub id: String,
    /// Performing artist
    pub artist: String,
    /// Genre label
    pub genre: String,
}

impl Song {
    /// Create a song
    pub fn new(id: impl Into<String>, artist: impl Into<String>, genre: impl Into<String>) -> Self {
        Song {
            id: id.into(),
            artist: artist.into(),
            genre: genre.into(),
        }
    }
}

impl Identified for Song {
    type Key = String;

    fn identity(&self) -> &String {
        &self.id
    }
}

concord_core::identity_contract!(Song);

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} [{}]", self.id, self.artist, self.genre)
    }
}
