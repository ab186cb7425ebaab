//! Wall-clock samples and the hand angles derived from them.

use chrono::{Local, Timelike};
use serde::Serialize;

/// Degrees swept by the hour hand per hour (360 / 12).
const DEGREES_PER_HOUR: f64 = 30.0;

/// Degrees swept by the minute and second hands per unit (360 / 60).
const DEGREES_PER_MINUTE: f64 = 6.0;

/// An immutable snapshot of the local time of day.
///
/// Components are always in range: the constructor folds larger values
/// back into `0..24` / `0..60`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TimeSample {
    hour24: u32,
    minute: u32,
    second: u32,
}

impl TimeSample {
    /// Create a sample, folding each component into its valid range.
    pub fn new(hour24: u32, minute: u32, second: u32) -> Self {
        Self {
            hour24: hour24 % 24,
            minute: minute % 60,
            second: second % 60,
        }
    }

    /// Take a sample from anything carrying a time of day.
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        // Leap seconds show up as second 59 with an extra nanosecond count
        Self::new(time.hour(), time.minute(), time.second())
    }

    /// Sample the local wall clock.
    pub fn now() -> Self {
        Self::from_time(&Local::now())
    }

    pub fn hour24(&self) -> u32 {
        self.hour24
    }

    /// Hour folded onto the 12-hour dial (0 = twelve o'clock).
    pub fn hour12(&self) -> u32 {
        self.hour24 % 12
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }
}

impl std::fmt::Display for TimeSample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour24, self.minute, self.second)
    }
}

/// Rotation of each hand in degrees, clockwise from twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    /// Compute the three hand angles for a sample.
    ///
    /// The hour hand creeps with the minutes and the minute hand creeps
    /// with the seconds. The second hand steps without interpolation.
    pub fn from_sample(sample: &TimeSample) -> Self {
        let minute = f64::from(sample.minute());
        let second = f64::from(sample.second());

        Self {
            hour: (f64::from(sample.hour12()) + minute / 60.0) * DEGREES_PER_HOUR,
            minute: (minute + second / 60.0) * DEGREES_PER_MINUTE,
            second: second * DEGREES_PER_MINUTE,
        }
    }
}

/// Anything able to produce the current time of day on demand.
pub trait TimeSource {
    fn sample(&self) -> TimeSample;
}

impl<T: TimeSource + ?Sized> TimeSource for Box<T> {
    fn sample(&self) -> TimeSample {
        (**self).sample()
    }
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn sample(&self) -> TimeSample {
        TimeSample::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedClock(pub TimeSample);

impl TimeSource for FixedClock {
    fn sample(&self) -> TimeSample {
        self.0
    }
}
