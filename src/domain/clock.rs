//! Injectable wall-clock time source.
//!
//! All validity checks and aggregation windows are computed from a `Clock`
//! rather than hidden `Utc::now()` calls, so tests can simulate expiration
//! and window boundaries deterministically.

use chrono::{DateTime, Utc};

/// Source of "now" for validity predicates and aggregation windows.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
