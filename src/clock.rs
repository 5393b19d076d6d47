//! Wall-clock abstraction for response timestamps.

use chrono::{DateTime, Utc};

#[cfg(test)]
use mockall::automock;

/// Source of "now" for server-generated timestamps. Can be mocked in tests.
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Real implementation backed by the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
