//! Wall-clock source for log timestamps

use chrono::{DateTime, FixedOffset, Local};

/// Supplies the timestamp stamped on each line
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Current local time, with the local UTC offset
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let now = Local::now();
        now.with_timezone(now.offset())
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
