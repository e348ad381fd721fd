//! Registration timestamps
//!
//! A `Timestamp` is the ordering key for chronological contracts: two users
//! compared "by registration" are compared by nothing but this value.
//!
//! ## Precision
//!
//! Timestamps are microseconds since Unix epoch (1970-01-01 00:00:00 UTC),
//! stored as `u64`. The derived `Ord` is the numeric order, so equal
//! timestamps are exactly the ties of the ordering.
//!
//! ## Usage
//!
//! ```
//! use concord_core::Timestamp;
//! use std::time::Duration;
//!
//! let soon = Timestamp::from_now(Duration::from_secs(5));
//! let sooner = Timestamp::from_now(Duration::from_secs(1));
//! assert!(sooner.is_before(soon));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Microsecond-precision point in time.
///
/// ## Invariants
///
/// - Never negative
/// - Equality, ordering and hashing all use the same microsecond value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Unix epoch (1970-01-01 00:00:00 UTC)
    pub const EPOCH: Timestamp = Timestamp(0);

    /// Maximum representable timestamp
    pub const MAX: Timestamp = Timestamp(u64::MAX);

    // =========================================================================
    // Constructors
    // =========================================================================

    /// Timestamp for the current moment.
    ///
    /// Returns epoch if the system clock reads earlier than Unix epoch.
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Timestamp::from(duration)
    }

    /// Timestamp `offset` after the current moment.
    pub fn from_now(offset: Duration) -> Self {
        Timestamp::now().saturating_add(offset)
    }

    /// Create a timestamp from microseconds since epoch
    #[inline]
    pub const fn from_micros(micros: u64) -> Self {
        Timestamp(micros)
    }

    /// Create a timestamp from milliseconds since epoch
    #[inline]
    pub const fn from_millis(millis: u64) -> Self {
        Timestamp(millis.saturating_mul(1_000))
    }

    /// Create a timestamp from seconds since epoch
    #[inline]
    pub const fn from_secs(secs: u64) -> Self {
        Timestamp(secs.saturating_mul(1_000_000))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Microseconds since Unix epoch
    #[inline]
    pub const fn as_micros(&self) -> u64 {
        self.0
    }

    /// Whole seconds since Unix epoch
    #[inline]
    pub const fn as_secs(&self) -> u64 {
        self.0 / 1_000_000
    }

    /// Convert to a calendar time.
    ///
    /// Returns `None` past the range chrono can represent.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.as_secs()).ok()?;
        let nanos = (self.0 % 1_000_000) as u32 * 1_000;
        DateTime::<Utc>::from_timestamp(secs, nanos)
    }

    // =========================================================================
    // Comparison helpers
    // =========================================================================

    /// Add a duration, saturating at `Timestamp::MAX`.
    pub fn saturating_add(&self, duration: Duration) -> Self {
        let micros = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX);
        Timestamp(self.0.saturating_add(micros))
    }

    /// Strictly earlier than `other`
    #[inline]
    pub fn is_before(&self, other: Timestamp) -> bool {
        self.0 < other.0
    }

    /// Strictly later than `other`
    #[inline]
    pub fn is_after(&self, other: Timestamp) -> bool {
        self.0 > other.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::EPOCH
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_datetime() {
            Some(datetime) => write!(f, "{}", datetime.to_rfc3339()),
            None => write!(f, "{}us", self.0),
        }
    }
}

impl From<u64> for Timestamp {
    fn from(micros: u64) -> Self {
        Timestamp::from_micros(micros)
    }
}

impl From<Duration> for Timestamp {
    /// Interpret a duration as time since epoch
    fn from(duration: Duration) -> Self {
        Timestamp::EPOCH.saturating_add(duration)
    }
}
