//! The lunar months spanning one Gregorian year.
//!
//! A [`LunarYear`] for solar year `Y` holds the 25 solar terms from 冬至 of
//! `Y − 1` to 冬至 of `Y`, and the 14 lunar months that start with the
//! month containing the first of those solstices (month 11 of lunar year
//! `Y − 1`).  Those 14 months cover every day of `Y`.
//!
//! # Leap months
//! When 13 new moons fall between the two solstice months, one of the 13
//! months lacks a principal term.  The first such month is the leap month:
//! it repeats the previous month's number and every later month is
//! renumbered down by one.
//!
//! The last one or two months of the table are provisional: a leap month
//! right after the closing solstice is only detected by the table of `Y + 1`.

use crate::solar_terms::{
    new_moon_tt, new_moons_15, solar_term_tt, solar_terms_25, SolarTerm, SYNODIC_MONTH,
};
use lc_core::errors::{Error, Result};
use lc_core::fail;
use lc_core::{JulianDay, Settings};
use lc_math::solvers1d::NewtonControl;
use lc_time::{delta_t, timescale, Date};
use tracing::{debug, warn};

/// Number of month records in a table.
pub const MONTHS_PER_TABLE: usize = 14;

/// One lunar month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarMonthRecord {
    /// Lunar year the month belongs to.
    pub lunar_year: i32,
    /// Month number 1–12.
    pub ordinal: u8,
    /// Whether this is the intercalary repeat of `ordinal`.
    pub is_leap: bool,
    /// Instant of the opening new moon, local civil time.
    pub new_moon: JulianDay,
    /// Civil date of the first day.
    pub first_day: Date,
    /// Length in days, 29 or 30.
    pub days: u8,
}

impl LunarMonthRecord {
    /// Whether `date` falls in this month.
    pub fn contains(&self, date: Date) -> bool {
        date >= self.first_day && date < self.first_day + self.days as i32
    }

    /// Civil date of lunar day `day`, if the month has that many days.
    pub fn date_of_day(&self, day: u8) -> Option<Date> {
        (1..=self.days)
            .contains(&day)
            .then(|| self.first_day + (day as i32 - 1))
    }
}

/// Position of a civil day in the lunar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDayInfo {
    /// Lunar year.
    pub lunar_year: i32,
    /// Lunar month number 1–12.
    pub month: u8,
    /// Whether the month is a leap month.
    pub is_leap: bool,
    /// Lunar day 1–30.
    pub day: u8,
    /// Length of the lunar month.
    pub days_in_month: u8,
    /// Solar term falling on this day, if any.
    pub solar_term: Option<SolarTerm>,
    /// Number of 节 (odd-index terms from 小寒) reached since January 1,
    /// 0–12.  Selects the stem-branch month.
    pub month_branch: u8,
}

/// Lunar months and solar terms for one Gregorian year.
#[derive(Debug, Clone, PartialEq)]
pub struct LunarYear {
    year: i32,
    solar_terms: [JulianDay; 25],
    months: Vec<LunarMonthRecord>,
    leap_fallback: bool,
}

impl LunarYear {
    /// Compute the table for Gregorian year `year`.
    ///
    /// Years outside the modelled ∆T range are still computed, with a
    /// warning.
    ///
    /// # Errors
    /// [`Error::InvalidDate`] if `year` cannot be represented, and
    /// [`Error::NonConvergent`] if a root search fails.
    pub fn build(year: i32, settings: &Settings) -> Result<Self> {
        if !(Date::MIN_YEAR + 1..=Date::MAX_YEAR - 1).contains(&year) {
            return Err(Error::InvalidDate(format!(
                "lunar tables are available for years {} to {}",
                Date::MIN_YEAR + 1,
                Date::MAX_YEAR - 1
            )));
        }
        if !delta_t::is_supported_year(year) {
            warn!(year, "year outside delta-T model range, lunar table is approximate");
        }
        let control = NewtonControl::from(settings);
        let offset = settings.utc_offset_days();
        let local_day = Date::from_julian_day;

        let solar_terms = solar_terms_25(year - 1, SolarTerm::DongZhi, settings)?;

        // First new moon: on or before the day of the opening solstice.
        let solstice_tt = solar_term_tt(year - 1, SolarTerm::DongZhi, &control)?;
        let mut first_nm = new_moon_tt(solstice_tt, &control)?;
        if local_day(timescale::tt_to_local(first_nm, offset)) > local_day(solar_terms[0]) {
            first_nm = new_moon_tt(first_nm - SYNODIC_MONTH, &control)?;
        }
        let new_moons = new_moons_15(first_nm, settings)?;
        let first_days: Vec<Date> = new_moons.iter().map(|&jd| local_day(jd)).collect();

        // Sequence numbers count months from month 11 of `year - 1`.
        let mut seq: [i32; MONTHS_PER_TABLE] = std::array::from_fn(|i| i as i32);
        let mut leap_index = None;
        let mut leap_fallback = false;
        if first_days[13] <= local_day(solar_terms[24]) {
            leap_index = (1..=12).find(|&i| first_days[i + 1] <= local_day(solar_terms[2 * i]));
            match leap_index {
                Some(i) => seq[i..].iter_mut().for_each(|s| *s -= 1),
                None => {
                    leap_fallback = true;
                    warn!(year, "13 lunar months between solstices but none lacks a principal term");
                }
            }
        }

        let months = (0..MONTHS_PER_TABLE)
            .map(|i| {
                let n = seq[i] + 10;
                LunarMonthRecord {
                    lunar_year: year - 1 + n.div_euclid(12),
                    ordinal: (n.rem_euclid(12) + 1) as u8,
                    is_leap: leap_index == Some(i),
                    new_moon: new_moons[i],
                    first_day: first_days[i],
                    days: (first_days[i + 1] - first_days[i]) as u8,
                }
            })
            .collect();

        debug!(year, ?leap_index, "built lunar year");
        Ok(Self {
            year,
            solar_terms,
            months,
            leap_fallback,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The Gregorian year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The 14 month records, in order.
    pub fn months(&self) -> &[LunarMonthRecord] {
        &self.months
    }

    /// Solar terms from 冬至 of the previous year through 冬至 of this year,
    /// local civil time.  Odd indices are 节, even indices 中气.
    pub fn solar_terms(&self) -> &[JulianDay; 25] {
        &self.solar_terms
    }

    /// The leap month, if one lies in this table.
    pub fn leap_month(&self) -> Option<&LunarMonthRecord> {
        self.months.iter().find(|m| m.is_leap)
    }

    /// `true` when the year needed a leap month but none could be placed.
    pub fn used_leap_fallback(&self) -> bool {
        self.leap_fallback
    }

    /// The month containing `date`.
    pub fn month_containing(&self, date: Date) -> Option<&LunarMonthRecord> {
        self.months.iter().find(|m| m.contains(date))
    }

    /// Find a month by lunar year, number and leap flag.
    pub fn find_month(&self, lunar_year: i32, ordinal: u8, is_leap: bool) -> Option<&LunarMonthRecord> {
        self.months
            .iter()
            .find(|m| m.lunar_year == lunar_year && m.ordinal == ordinal && m.is_leap == is_leap)
    }

    /// Civil date of solar term `index` (0 = 冬至 of the previous year).
    pub fn solar_term_date(&self, index: usize) -> Date {
        Date::from_julian_day(self.solar_terms[index])
    }

    // ── Day queries ───────────────────────────────────────────────────────────

    /// Lunar position of Gregorian `month`/`day` of this year.
    ///
    /// # Errors
    /// [`Error::InvalidDate`] if the date does not exist.
    pub fn solar_day_to_lunar_day(&self, month: u8, day: u8) -> Result<LunarDayInfo> {
        let date = Date::from_ymd(self.year, month, day)?;
        let Some(record) = self.month_containing(date) else {
            fail!("{date} is not covered by the lunar table of {}", self.year);
        };

        // The two terms of Gregorian month m are entries 2m−1 and 2m.
        let first = 2 * month as usize - 1;
        let solar_term = (first..=first + 1)
            .find(|&i| self.solar_term_date(i) == date)
            .map(|i| SolarTerm::from_index(i + 18));

        let month_branch = (1..=23)
            .step_by(2)
            .filter(|&i| self.solar_term_date(i) <= date)
            .count() as u8;

        Ok(LunarDayInfo {
            lunar_year: record.lunar_year,
            month: record.ordinal,
            is_leap: record.is_leap,
            day: (date - record.first_day + 1) as u8,
            days_in_month: record.days,
            solar_term,
            month_branch,
        })
    }
}
