//! Wall-clock time for clock mode
//!
//! In clock mode the scoreboard shows hours and minutes, and the AI paddles
//! deliberately miss around minute/hour rollovers so the score can change.
//! The simulation never reads the system clock itself; time arrives through
//! [`Clock`] so matches stay reproducible.

use chrono::Timelike;
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// A time of day, local to whoever supplies it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClockTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl ClockTime {
    /// Out-of-range fields carry over and the result wraps at 24h
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self::from_seconds_of_day(day_seconds(hours, minutes, seconds))
    }

    /// Build from seconds since midnight (wraps at 24h)
    pub fn from_seconds_of_day(secs: u32) -> Self {
        let secs = secs % SECONDS_PER_DAY;
        Self {
            hours: secs / 3600,
            minutes: (secs / 60) % 60,
            seconds: secs % 60,
        }
    }

    pub fn seconds_of_day(&self) -> u32 {
        day_seconds(self.hours, self.minutes, self.seconds)
    }

    /// This time plus `secs` seconds, wrapping at midnight
    pub fn advanced(&self, secs: u32) -> Self {
        Self::from_seconds_of_day(self.seconds_of_day() + secs % SECONDS_PER_DAY)
    }

    /// Scoreboard values: (hours, minutes)
    pub fn as_scores(&self) -> [u32; 2] {
        [self.hours, self.minutes]
    }
}

/// Total seconds reduced into a single day, widened so no field can overflow
fn day_seconds(hours: u32, minutes: u32, seconds: u32) -> u32 {
    let total = u64::from(hours) * 3600 + u64::from(minutes) * 60 + u64::from(seconds);
    (total % u64::from(SECONDS_PER_DAY)) as u32
}

/// Which rollovers a paddle should miss on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DropRate {
    /// Miss once per minute (during the first 20s of every minute but :00)
    pub minutes: bool,
    /// Miss once per hour (during minute :00)
    pub hours: bool,
}

impl DropRate {
    pub const MINUTES: DropRate = DropRate {
        minutes: true,
        hours: false,
    };
    pub const HOURS: DropRate = DropRate {
        minutes: false,
        hours: true,
    };

    /// Whether `now` falls in a window where this paddle should miss
    pub fn wants_drop(&self, now: ClockTime) -> bool {
        (self.minutes && now.minutes > 0 && now.seconds < DROP_WINDOW_SECS)
            || (self.hours && now.minutes == 0)
    }
}

/// Seconds into a minute during which a minute drop may fire; past it the
/// per-paddle "already dropped" latch is released.
pub const DROP_WINDOW_SECS: u32 = 20;

/// Source of the current time of day
pub trait Clock {
    fn now(&self) -> ClockTime;
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ClockTime {
        let now = chrono::Local::now();
        ClockTime::new(now.hour(), now.minute(), now.second())
    }
}

/// A clock pinned to a fixed time, for tests and replays
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedClock(pub ClockTime);

impl Clock for FixedClock {
    fn now(&self) -> ClockTime {
        self.0
    }
}
