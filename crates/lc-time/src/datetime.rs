//! `DateTime` — a civil date plus a time of day, to the second.
//!
//! The time zone is implicit: event instants, exclusion instants, and query
//! windows are all expressed in the calendar's local civil time.

use crate::date::Date;
use lc_core::errors::{Error, Result};
use lc_core::JulianDay;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// A local civil date-time with whole-second resolution.
///
/// Ordering is chronological.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateTime {
    date: Date,
    seconds: u32,
}

impl DateTime {
    /// Build from civil fields.
    ///
    /// # Errors
    /// [`Error::InvalidDate`] if the date is invalid, or if `hour > 23`,
    /// `minute > 59`, or `second > 59`.
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Result<Self> {
        let date = Date::from_ymd(year, month, day)?;
        if hour > 23 || minute > 59 || second > 59 {
            return Err(Error::InvalidDate(format!(
                "time {hour:02}:{minute:02}:{second:02} out of range"
            )));
        }
        Ok(Self {
            date,
            seconds: hour as u32 * 3600 + minute as u32 * 60 + second as u32,
        })
    }

    /// Midnight at the start of `date`.
    pub fn at_midnight(date: Date) -> Self {
        Self { date, seconds: 0 }
    }

    /// `date` at `seconds` past midnight.
    ///
    /// # Errors
    /// [`Error::InvalidDate`] if `seconds >= 86400`.
    pub fn from_date_and_seconds(date: Date, seconds: u32) -> Result<Self> {
        if seconds >= SECONDS_PER_DAY {
            return Err(Error::InvalidDate(format!(
                "seconds of day {seconds} out of range [0, {SECONDS_PER_DAY})"
            )));
        }
        Ok(Self { date, seconds })
    }

    /// Convert a fractional Julian Day to the nearest whole second.
    pub fn from_julian_day(jd: JulianDay) -> Self {
        let midnight = (jd + 0.5).floor();
        let mut jdn = midnight as i32;
        let mut seconds = ((jd + 0.5 - midnight) * SECONDS_PER_DAY as f64).round() as u32;
        if seconds >= SECONDS_PER_DAY {
            jdn += 1;
            seconds -= SECONDS_PER_DAY;
        }
        Self {
            date: Date::from_julian_day_number(jdn),
            seconds,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The civil date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_of_day(&self) -> u32 {
        self.seconds
    }

    /// Hour (0–23).
    pub fn hour(&self) -> u8 {
        (self.seconds / 3600) as u8
    }

    /// Minute (0–59).
    pub fn minute(&self) -> u8 {
        (self.seconds / 60 % 60) as u8
    }

    /// Second (0–59).
    pub fn second(&self) -> u8 {
        (self.seconds % 60) as u8
    }

    /// Fractional Julian Day of this instant.
    pub fn to_julian_day(&self) -> JulianDay {
        self.date.midnight_julian_day() + self.seconds as f64 / SECONDS_PER_DAY as f64
    }

    /// Seconds since 1970-01-01 00:00 of the same civil clock.
    pub fn timestamp(&self) -> i64 {
        self.date.unix_days() as i64 * SECONDS_PER_DAY as i64 + self.seconds as i64
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Shift by a signed number of seconds.
    pub fn add_seconds(self, secs: i64) -> Self {
        let total = self.seconds as i64 + secs;
        let days = total.div_euclid(SECONDS_PER_DAY as i64);
        let rem = total.rem_euclid(SECONDS_PER_DAY as i64);
        Self {
            date: self.date.add_days(days as i32),
            seconds: rem as u32,
        }
    }

    /// Same time of day on another date.
    pub fn with_date(self, date: Date) -> Self {
        Self { date, ..self }
    }

    /// Signed number of seconds from `self` to `other`.
    pub fn seconds_until(self, other: DateTime) -> i64 {
        other.timestamp() - self.timestamp()
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}:{:02}",
            self.date,
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

impl std::fmt::Debug for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DateTime({self})")
    }
}
