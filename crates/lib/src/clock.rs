//! Time provider abstraction
//!
//! Recipes and user records carry creation timestamps. The [`Clock`] trait lets
//! the state managers take those timestamps from an injected source, so tests
//! can pin them while production uses the system time.
//!
//! # Example
//!
//! ```
//! use flavorbook::{Clock, SystemClock};
//!
//! let clock = SystemClock;
//! let created_at = clock.now();
//! assert!(created_at.timestamp() > 0);
//! ```

use std::fmt::Debug;

use chrono::{DateTime, Utc};

#[cfg(any(test, feature = "testing"))]
use std::sync::Mutex;

/// A time provider for creation timestamps.
pub trait Clock: Send + Sync + Debug {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current instant as an RFC3339 string, the persisted form.
    fn now_rfc3339(&self) -> String {
        self.now().to_rfc3339()
    }
}

/// Production clock backed by [`chrono::Utc::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Test clock that hands out strictly increasing instants.
///
/// Each call to [`Clock::now`] returns the current value and then moves the
/// clock forward by `step` milliseconds, so records created one after another
/// get distinct, ordered timestamps.
///
/// ```
/// use flavorbook::{Clock, FixedClock};
///
/// let clock = FixedClock::new(1_704_067_200_000);
/// let first = clock.now();
/// let second = clock.now();
/// assert!(second > first);
/// assert!(first.to_rfc3339().starts_with("2024-01-01T00:00:00"));
/// ```
#[cfg(any(test, feature = "testing"))]
pub struct FixedClock {
    millis: Mutex<i64>,
    step: i64,
}

#[cfg(any(test, feature = "testing"))]
impl FixedClock {
    /// Create a clock starting at `millis` since the Unix epoch, advancing 1ms per read.
    pub fn new(millis: i64) -> Self {
        Self::with_step(millis, 1)
    }

    /// Create a clock that advances by `step` milliseconds per read.
    pub fn with_step(millis: i64, step: i64) -> Self {
        Self {
            millis: Mutex::new(millis),
            step,
        }
    }

    /// Move the clock forward without reading it.
    pub fn advance(&self, ms: i64) {
        *self.lock() += ms;
    }

    /// Current value in milliseconds, without advancing.
    pub fn get(&self) -> i64 {
        *self.lock()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, i64> {
        self.millis
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(any(test, feature = "testing"))]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        let mut millis = self.lock();
        let current = *millis;
        *millis += self.step;
        DateTime::from_timestamp_millis(current).unwrap_or_default()
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for FixedClock {
    fn default() -> Self {
        // 2024-01-01 00:00:00 UTC
        Self::new(1_704_067_200_000)
    }
}

#[cfg(any(test, feature = "testing"))]
impl Debug for FixedClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedClock")
            .field("millis", &self.get())
            .field("step", &self.step)
            .finish()
    }
}
