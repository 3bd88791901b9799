//! Time source abstraction.
//!
//! # Responsibility
//! - Provide "now" and "today" to repositories and services.
//! - Allow tests to pin time without touching the system clock.
//!
//! # Invariants
//! - `now()` is UTC; `today()` is the calendar day on the local clock.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Source of wall-clock time for record stamping and day-keyed caches.
pub trait Clock {
    /// Current instant in UTC, used for `createdAt`/`uploadDate`/journal dates.
    fn now(&self) -> DateTime<Utc>;
    /// Current calendar day, used for the daily quote cache key.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the host system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: DateTime<Utc>,
    today: NaiveDate,
}

impl FixedClock {
    /// Pins the clock; `today` is the UTC day of `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            today: now.date_naive(),
        }
    }

    /// Pins the clock to midnight UTC of `day`.
    pub fn on_day(day: NaiveDate) -> Self {
        Self::new(day.and_time(chrono::NaiveTime::MIN).and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
