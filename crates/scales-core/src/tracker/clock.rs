//! Source of "today" for plan start dates and day counts.

use jiff::{civil::Date, Zoned};

/// Provides the current calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> Date;
}

/// Wall clock in the system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        Zoned::now().date()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
