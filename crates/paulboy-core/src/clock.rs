//! Wall-clock source.
//!
//! The core never reads the system clock directly: the event loop asks a
//! [`ClockSource`] for the current [`WallTime`] and passes it into
//! `tick`/`evaluate`, so tests drive time by hand.

use chrono::{Local, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

/// A point in local wall-clock time at minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallTime {
    /// Hour of day (0-23).
    pub hour: u8,
    /// Minute of hour (0-59).
    pub minute: u8,
    /// Calendar date.
    pub date: NaiveDate,
}

impl WallTime {
    pub fn new(hour: u8, minute: u8, date: NaiveDate) -> Self {
        Self { hour, minute, date }
    }

    /// Minutes since midnight.
    pub fn minute_of_day(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }
}

/// Supplies the current wall-clock time.
pub trait ClockSource {
    fn now(&self) -> WallTime;
}

/// The local system clock.
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> WallTime {
        let now = Local::now();
        WallTime {
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            date: now.date_naive(),
        }
    }
}
