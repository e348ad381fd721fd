//! Example records for the concord contracts
//!
//! | Type             | Semantics | Equality          | Hash   | Order              |
//! |------------------|-----------|-------------------|--------|--------------------|
//! | `User`           | value     | `id`              | `id`   | -                  |
//! | `ByRegistration` | value     | `registered_at`   | -      | `registered_at`    |
//! | `SharedUser`     | shared    | profile `id`      | -      | -                  |
//! | `Song`           | value     | `id`              | `id`   | -                  |
//! | `AppTheme`       | value     | tag (derived)     | tag    | -                  |
//!
//! Value types are copied by `Clone`; `SharedUser` clones a reference to one
//! shared profile.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod shared_user;
pub mod song;
pub mod theme;
pub mod user;

pub use shared_user::{SharedUser, UserProfile};
pub use song::Song;
pub use theme::AppTheme;
pub use user::{ByRegistration, User};
