//! Wall-clock abstraction for testability
//!
//! SLA status depends on "now" at evaluation time, which makes the
//! evaluation non-deterministic against the real clock. This trait lets
//! production code read the system clock while tests pin time to a fixed,
//! manually-advanced instant.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use sla_common::time::clock::{Clock, MockClock};
//!
//! let start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let clock = MockClock::new(start);
//! clock.advance(chrono::Duration::hours(2));
//! assert_eq!(clock.now(), start + chrono::Duration::hours(2));
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{Duration, NaiveDateTime, Utc};

/// Trait for reading the current wall-clock time.
pub trait Clock: Send + Sync {
    /// Current wall-clock time as a naive datetime.
    ///
    /// Calendar arithmetic downstream is timezone-agnostic; implementations
    /// pick the zone (the system clock uses UTC).
    fn now(&self) -> NaiveDateTime;
}

/// Real system clock. Use this in production code.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// Mock clock for deterministic tests.
///
/// Clones share the same underlying instant, so a test can keep a handle
/// while the code under test holds another.
#[derive(Debug, Clone)]
pub struct MockClock {
    now: Arc<Mutex<NaiveDateTime>>,
}

impl MockClock {
    /// Create a mock clock pinned to `start`.
    pub fn new(start: NaiveDateTime) -> Self {
        Self { now: Arc::new(Mutex::new(start)) }
    }

    /// Move the clock to an absolute instant.
    ///
    /// Recovers from a poisoned lock: a panicking test thread must not make
    /// later mutations silently disappear.
    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }

    /// Advance the clock by a duration without real time passing.
    pub fn advance(&self, delta: Duration) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) += delta;
    }
}

impl Clock for MockClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap().and_hms_opt(9, 0, 0).unwrap()
    }

    #[test]
    fn mock_clock_is_pinned() {
        let clock = MockClock::new(instant());
        assert_eq!(clock.now(), instant());
        assert_eq!(clock.now(), instant());
    }

    #[test]
    fn mock_clock_advances_and_sets() {
        let clock = MockClock::new(instant());
        clock.advance(Duration::minutes(90));
        assert_eq!(clock.now(), instant() + Duration::minutes(90));

        clock.set(instant());
        assert_eq!(clock.now(), instant());
    }

    #[test]
    fn clones_share_the_same_instant() {
        let clock = MockClock::new(instant());
        let handle = clock.clone();
        handle.advance(Duration::seconds(30));
        assert_eq!(clock.now(), instant() + Duration::seconds(30));
    }

    #[test]
    fn mutations_apply_after_a_poisoning_panic() {
        let clock = MockClock::new(instant());
        let handle = clock.clone();
        let _ = std::thread::spawn(move || {
            let _guard = handle.now.lock().unwrap();
            panic!("poison the clock");
        })
        .join();

        clock.advance(Duration::seconds(10));
        assert_eq!(clock.now(), instant() + Duration::seconds(10));

        clock.set(instant());
        assert_eq!(clock.now(), instant());
    }

    #[test]
    fn system_clock_monotone_enough() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
