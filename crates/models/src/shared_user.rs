//! Shared-ownership user handles.
//!
//! `SharedUser` is the reference-semantics counterpart of `User`: cloning
//! a handle does not copy the profile, both handles point at the same one.
//! Equality still compares field values (the profile id), never the
//! pointer. Pointer identity is available separately as `same_instance`.

use concord_core::Identified;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Profile data behind a `SharedUser`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Identity
    pub id: u64,
    /// Display name, not identity-relevant
    pub name: String,
}

/// Cheaply clonable handle to a shared `UserProfile`.
#[derive(Debug, Clone)]
pub struct SharedUser(Arc<UserProfile>);

impl SharedUser {
    /// Allocate a new profile and return the first handle to it
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        SharedUser(Arc::new(UserProfile {
            id,
            name: name.into(),
        }))
    }

    /// Profile id
    pub fn id(&self) -> u64 {
        self.0.id
    }

    /// Profile name
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Borrow the shared profile
    pub fn profile(&self) -> &UserProfile {
        &self.0
    }

    /// Both handles point at the same allocation.
    ///
    /// This is reference identity, which `==` deliberately does not use.
    pub fn same_instance(&self, other: &SharedUser) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Number of live handles to this profile
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl From<UserProfile> for SharedUser {
    fn from(profile: UserProfile) -> Self {
        SharedUser(Arc::new(profile))
    }
}

impl Identified for SharedUser {
    type Key = u64;

    fn identity(&self) -> &u64 {
        &self.0.id
    }
}

concord_core::identity_eq!(SharedUser);

impl fmt::Display for SharedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.0.name, self.0.id)
    }
}
