//! Users, compared two different ways.
//!
//! A `User` is *the same user* as another when their ids match; name and
//! registration time are ignored. Sorting users chronologically needs a
//! different notion of sameness (same registration instant), so it lives
//! on the `ByRegistration` newtype instead of on `User` itself. Keeping
//! them apart lets each type satisfy "equal implies neither is less".

use concord_core::{Identified, Ranked, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered user with value semantics.
///
/// `Clone` produces an independent copy; nothing is shared between the
/// original and the clone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Identity
    pub id: u64,
    /// Display name, not identity-relevant
    pub name: String,
    /// When the user registered, not identity-relevant
    pub registered_at: Timestamp,
}

impl User {
    /// Create a user
    pub fn new(id: u64, name: impl Into<String>, registered_at: Timestamp) -> Self {
        User {
            id,
            name: name.into(),
            registered_at,
        }
    }

    /// Registered strictly earlier than `other`
    pub fn registered_before(&self, other: &User) -> bool {
        self.registered_at.is_before(other.registered_at)
    }

    /// View this user through its registration order
    pub fn by_registration(self) -> ByRegistration {
        ByRegistration(self)
    }
}

impl Identified for User {
    type Key = u64;

    fn identity(&self) -> &u64 {
        &self.id
    }
}

concord_core::identity_contract!(User);

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

/// A user ordered, and compared, by registration time only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ByRegistration(pub User);

impl ByRegistration {
    /// Unwrap the user
    pub fn into_inner(self) -> User {
        self.0
    }

    /// Borrow the user
    pub fn user(&self) -> &User {
        &self.0
    }
}

impl Ranked for ByRegistration {
    type Rank = Timestamp;

    fn rank(&self) -> &Timestamp {
        &self.0.registered_at
    }
}

concord_core::rank_ordering!(ByRegistration);

impl From<User> for ByRegistration {
    fn from(user: User) -> Self {
        ByRegistration(user)
    }
}
