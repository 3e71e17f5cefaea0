//! `Date` type.
//!
//! A date on the proleptic Gregorian calendar, stored as its Julian Day
//! Number (the integer day count whose noon is the fractional Julian Day of
//! the same number).
//!
//! # Range
//! Years −9999 through 9999 are accepted by [`Date::from_ymd`].  Arithmetic
//! on an existing date is unchecked; the underlying day count never
//! overflows for any realistic offset.

use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use lc_core::errors::{Error, Result};
use lc_core::JulianDay;

/// Julian Day Number of 1970-01-01.
pub const UNIX_EPOCH_JDN: i32 = 2_440_588;

/// A calendar date represented by its Julian Day Number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Date(i32);

impl Date {
    /// Smallest year accepted by [`Date::from_ymd`].
    pub const MIN_YEAR: i32 = -9999;

    /// Largest year accepted by [`Date::from_ymd`].
    pub const MAX_YEAR: i32 = 9999;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    ///
    /// # Errors
    /// [`Error::InvalidDate`] if any field is outside its calendar range.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::InvalidDate(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidDate(format!(
                "month {month} out of range [1, 12]"
            )));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::InvalidDate(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(jdn_from_ymd(year, month, day)))
    }

    /// Create a date from a Julian Day Number.
    pub fn from_julian_day_number(jdn: i32) -> Self {
        Date(jdn)
    }

    /// The civil date on which a fractional Julian Day falls.
    ///
    /// Julian days start at noon, so `2451544.5` (midnight) is already
    /// 2000-01-01.
    pub fn from_julian_day(jd: JulianDay) -> Self {
        Date((jd + 0.5).floor() as i32)
    }

    /// Create a date from the number of days since 1970-01-01.
    pub fn from_unix_days(days: i32) -> Self {
        Date(days + UNIX_EPOCH_JDN)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the Julian Day Number.
    pub fn julian_day_number(&self) -> i32 {
        self.0
    }

    /// Julian Day at 00:00 of this date.
    pub fn midnight_julian_day(&self) -> JulianDay {
        self.0 as JulianDay - 0.5
    }

    /// Days elapsed since 1970-01-01 (negative before it).
    pub fn unix_days(&self) -> i32 {
        self.0 - UNIX_EPOCH_JDN
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (i32, u8, u8) {
        ymd_from_jdn(self.0)
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.ymd().0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, m, d) = self.ymd();
        let mut doy = MONTH_OFFSET[m as usize - 1] + d as u16;
        if m > 2 && is_leap_year(y) {
            doy += 1;
        }
        doy
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // JDN 0 is a Monday.
        match self.0.rem_euclid(7) {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.
    pub fn add_days(self, n: i32) -> Self {
        Date(self.0 + n)
    }

    /// Advance by a period expressed in the given time unit.
    ///
    /// Month and year steps clamp the day to the end of the target month
    /// (Jan 31 + 1 month = Feb 28/29).
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => Ok(self.add_days(n)),
            TimeUnit::Weeks => Ok(self.add_days(n * 7)),
            TimeUnit::Months => {
                let (y, m, d) = self.ymd();
                let (new_y, new_m) = add_months(y, m, n);
                if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&new_y) {
                    return Err(Error::InvalidDate(format!("year {new_y} out of range")));
                }
                let new_d = d.min(days_in_month(new_y, new_m));
                Ok(Date(jdn_from_ymd(new_y, new_m, new_d)))
            }
            TimeUnit::Years => self.advance(n * 12, TimeUnit::Months),
        }
    }

    /// Return the first day of the month containing this date.
    pub fn start_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(jdn_from_ymd(y, m, 1))
    }

    /// Return the *n*-th occurrence of `weekday` in the month of `year`/`month`.
    ///
    /// For example, `nth_weekday(2, Weekday::Sunday, 2024, 5)` returns the
    /// second Sunday of May 2024 (2024-05-12).
    ///
    /// # Errors
    /// Returns an error if `n` is zero or larger than the number of such
    /// weekdays in the month.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: i32, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidArgument("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let first_wd = first.weekday().ordinal();
        let target_wd = weekday.ordinal();
        let skip = (target_wd as i32 - first_wd as i32).rem_euclid(7) as u8;
        let day = 1 + skip + 7 * (n - 1);
        if day > days_in_month(year, month) {
            return Err(Error::InvalidArgument(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs)
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs)
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        self.0 += rhs;
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        self.0 -= rhs;
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// `(year, month)` advanced by `n` months.
pub(crate) fn add_months(year: i32, month: u8, n: i32) -> (i32, u8) {
    let total = year * 12 + (month as i32 - 1) + n;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u8)
}

/// Julian Day Number of a proleptic Gregorian date.
fn jdn_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    // Shift the year to start in March so the leap day is last.
    let y = if month <= 2 { year - 1 } else { year };
    let m = month as i32;
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + day as i32 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468 + UNIX_EPOCH_JDN
}

/// Decompose a Julian Day Number into (year, month, day).
fn ymd_from_jdn(jdn: i32) -> (i32, u8, u8) {
    let z = jdn - UNIX_EPOCH_JDN + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let y = yoe + era * 400 + i32::from(m <= 2);
    (y, m, d)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_julian_day_numbers() {
        assert_eq!(Date::from_ymd(2000, 1, 1).unwrap().julian_day_number(), 2_451_545);
        assert_eq!(Date::from_ymd(1970, 1, 1).unwrap().julian_day_number(), UNIX_EPOCH_JDN);
        assert_eq!(Date::from_ymd(1858, 11, 17).unwrap().julian_day_number(), 2_400_001);
        // Proleptic Gregorian -4713-11-24 is JDN 0.
        assert_eq!(Date::from_ymd(-4713, 11, 24).unwrap().julian_day_number(), 0);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29),
            (2100, 2, 28),
            (2023, 6, 15),
            (-500, 3, 1),
            (0, 2, 29),
            (9999, 12, 31),
            (-9999, 1, 1),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d), "mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_invalid_fields() {
        assert!(matches!(Date::from_ymd(2023, 4, 31), Err(Error::InvalidDate(_))));
        assert!(matches!(Date::from_ymd(2023, 2, 29), Err(Error::InvalidDate(_))));
        assert!(matches!(Date::from_ymd(2023, 13, 1), Err(Error::InvalidDate(_))));
        assert!(matches!(Date::from_ymd(2023, 1, 0), Err(Error::InvalidDate(_))));
        assert!(matches!(Date::from_ymd(10_000, 1, 1), Err(Error::InvalidDate(_))));
    }

    #[test]
    fn test_weekday() {
        assert_eq!(Date::from_ymd(2000, 1, 1).unwrap().weekday(), Weekday::Saturday);
        assert_eq!(Date::from_ymd(2023, 1, 22).unwrap().weekday(), Weekday::Sunday);
        assert_eq!(Date::from_ymd(1970, 1, 1).unwrap().weekday(), Weekday::Thursday);
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(Date::from_ymd(2023, 1, 1).unwrap().day_of_year(), 1);
        assert_eq!(Date::from_ymd(2023, 12, 31).unwrap().day_of_year(), 365);
        assert_eq!(Date::from_ymd(2024, 12, 31).unwrap().day_of_year(), 366);
        assert_eq!(Date::from_ymd(2024, 3, 1).unwrap().day_of_year(), 61);
    }

    #[test]
    fn test_advance_months_clamps() {
        let d = Date::from_ymd(2024, 1, 31).unwrap();
        assert_eq!(d.advance(1, TimeUnit::Months).unwrap().ymd(), (2024, 2, 29));
        assert_eq!(d.advance(-2, TimeUnit::Months).unwrap().ymd(), (2023, 11, 30));
        assert_eq!(d.advance(1, TimeUnit::Years).unwrap().ymd(), (2025, 1, 31));
        assert_eq!(d.advance(2, TimeUnit::Weeks).unwrap().ymd(), (2024, 2, 14));
    }

    #[test]
    fn test_unix_days() {
        let d = Date::from_ymd(2023, 1, 22).unwrap();
        assert_eq!(d.unix_days(), 19_379);
        assert_eq!(Date::from_unix_days(19_379), d);
    }

    #[test]
    fn test_from_julian_day_boundaries() {
        assert_eq!(Date::from_julian_day(2_451_544.5).ymd(), (2000, 1, 1));
        assert_eq!(Date::from_julian_day(2_451_544.499_999).ymd(), (1999, 12, 31));
        assert_eq!(Date::from_julian_day(2_451_545.499_999).ymd(), (2000, 1, 1));
    }
}
