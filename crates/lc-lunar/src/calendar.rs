//! `LunarCalendar` — the query surface of the lunar engine.

use crate::cache::YearCache;
use crate::festival::{lunar_festival, solar_festival};
use crate::lunar_year::{LunarDayInfo, LunarMonthRecord, LunarYear};
use crate::naming;
use lc_core::errors::{Error, Result};
use lc_core::Settings;
use lc_time::date::days_in_month;
use lc_time::Date;
use std::sync::Arc;
use tracing::warn;

/// Number of cells in a 6 × 7 month grid.
pub const GRID_CELLS: usize = 42;

/// A day with all of its lunar display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedLunarDay {
    /// The Gregorian date.
    pub date: Date,
    /// Structured lunar position.
    pub info: LunarDayInfo,
    /// Stem-branch year, e.g. 癸卯.
    pub year_ganzhi: String,
    /// Stem-branch month.
    pub month_ganzhi: String,
    /// Stem-branch day.
    pub day_ganzhi: String,
    /// Zodiac animal of the lunar year.
    pub zodiac: &'static str,
    /// Month name, 闰 prefixed for a leap month.
    pub month_name: String,
    /// Day name, 初一 … 三十.
    pub day_name: &'static str,
    /// Solar term name, empty when no term falls on this day.
    pub solar_term_name: &'static str,
    /// Comma-joined solar festivals.
    pub solar_festival: String,
    /// Lunar festival.
    pub lunar_festival: String,
}

/// A Gregorian month laid out for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarMonthTable {
    /// Gregorian year.
    pub year: i32,
    /// Gregorian month.
    pub month: u8,
    /// Column of the 1st in a Sunday-first week (0 = Sunday).
    pub first_weekday: u8,
    /// Days in the month.
    pub days: u8,
    /// One entry per day; with padding, 42 entries starting on a Sunday.
    pub entries: Vec<NamedLunarDay>,
}

/// Festivals falling on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayFestivals {
    /// The date.
    pub date: Date,
    /// Solar festivals first, then the lunar one.
    pub festivals: Vec<String>,
}

/// Chinese lunisolar calendar backed by a per-year table cache.
#[derive(Debug, Clone)]
pub struct LunarCalendar {
    settings: Settings,
    cache: Arc<YearCache>,
}

impl Default for LunarCalendar {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            cache: Arc::new(YearCache::default()),
        }
    }
}

impl LunarCalendar {
    /// A calendar with its own cache.
    ///
    /// # Errors
    /// Propagates [`Settings::validate`].
    pub fn new(settings: Settings) -> Result<Self> {
        Self::with_cache(settings, Arc::new(YearCache::new(settings)))
    }

    /// A calendar sharing `cache`.
    ///
    /// # Errors
    /// Propagates [`Settings::validate`], and returns
    /// [`Error::InvalidArgument`] when `cache` was created for different
    /// settings.
    pub fn with_cache(settings: Settings, cache: Arc<YearCache>) -> Result<Self> {
        settings.validate()?;
        if cache.settings() != &settings {
            return Err(Error::InvalidArgument(format!(
                "cache holds tables for {:?}, calendar uses {:?}",
                cache.settings(),
                settings
            )));
        }
        Ok(Self { settings, cache })
    }

    /// The settings in use.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The shared cache.
    pub fn cache(&self) -> &Arc<YearCache> {
        &self.cache
    }

    /// Drop all cached year tables.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// The table of Gregorian year `year`, from the cache or freshly built.
    pub fn lunar_year(&self, year: i32) -> Result<Arc<LunarYear>> {
        self.cache
            .get_or_build(year, || LunarYear::build(year, &self.settings))
    }

    // ── Day queries ───────────────────────────────────────────────────────────

    /// Structured lunar position of `date`.
    ///
    /// Days in the trailing provisional months of a year table are resolved
    /// against the next year's table, which sees the following solstice.
    pub fn lunar_day_info(&self, date: Date) -> Result<LunarDayInfo> {
        let (y, m, d) = date.ymd();
        let table = self.lunar_year(y)?;
        let mut info = table.solar_day_to_lunar_day(m, d)?;
        if m == 12 && !date_before_next_table(&table, date) {
            let record = self.lunar_month_containing(date)?;
            apply_month(&mut info, &record, date);
        }
        Ok(info)
    }

    /// The lunar month containing `date`, with its final numbering.
    pub fn lunar_month_containing(&self, date: Date) -> Result<LunarMonthRecord> {
        let year = date.year();
        let table = self.lunar_year(year)?;
        if date.month() == 12 && !date_before_next_table(&table, date) {
            let next = self.lunar_year(year + 1)?;
            if let Some(record) = next.month_containing(date) {
                return Ok(*record);
            }
        }
        table.month_containing(date).copied().ok_or_else(|| {
            Error::Runtime(format!("{date} is not covered by the lunar table of {year}"))
        })
    }

    /// Lunar date and display names of Gregorian `year`-`month`-`day`.
    ///
    /// # Errors
    /// [`Error::InvalidDate`] for a nonexistent date, before any
    /// astronomical work.
    pub fn lunar_info_for_date(&self, year: i32, month: u8, day: u8) -> Result<NamedLunarDay> {
        let date = Date::from_ymd(year, month, day)?;
        self.named_day(date)
    }

    fn named_day(&self, date: Date) -> Result<NamedLunarDay> {
        let info = self.lunar_day_info(date)?;
        Ok(NamedLunarDay {
            date,
            year_ganzhi: naming::year_ganzhi(info.lunar_year),
            month_ganzhi: naming::month_ganzhi(date.year(), info.month_branch),
            day_ganzhi: naming::day_ganzhi(date),
            zodiac: naming::zodiac(info.lunar_year),
            month_name: naming::month_name(info.month, info.is_leap),
            day_name: naming::day_name(info.day),
            solar_term_name: info.solar_term.map_or("", |t| t.name()),
            solar_festival: solar_festival(date),
            lunar_festival: lunar_festival(&info, self.is_new_years_eve(date, &info)?),
            info,
        })
    }

    /// Whether the day after `date` is 正月初一.
    fn is_new_years_eve(&self, date: Date, info: &LunarDayInfo) -> Result<bool> {
        if info.month != 12 || info.day != info.days_in_month {
            return Ok(false);
        }
        let next = self.lunar_day_info(date + 1)?;
        Ok(next.month == 1 && !next.is_leap && next.day == 1)
    }

    /// All days of a Gregorian month, optionally padded with the tail of
    /// the previous month and the head of the next to fill a 6 × 7 grid
    /// whose first column is Sunday.
    pub fn lunar_month_table(&self, year: i32, month: u8, fill: bool) -> Result<LunarMonthTable> {
        let first = Date::from_ymd(year, month, 1)?;
        let days = days_in_month(year, month);
        let first_weekday = first.weekday().sunday_based_index();

        let (start, count) = if fill {
            (first - first_weekday as i32, GRID_CELLS)
        } else {
            (first, days as usize)
        };
        let entries = (0..count)
            .map(|i| self.named_day(start + i as i32))
            .collect::<Result<Vec<_>>>()?;

        Ok(LunarMonthTable {
            year,
            month,
            first_weekday,
            days,
            entries,
        })
    }

    /// Every day in `start..=end` that carries a festival.
    ///
    /// An inverted range yields an empty list.
    pub fn festivals_in_range(&self, start: Date, end: Date) -> Result<Vec<DayFestivals>> {
        if start > end {
            warn!(%start, %end, "festival range start is after end");
            return Ok(Vec::new());
        }
        let mut out = Vec::new();
        let mut date = start;
        while date <= end {
            let info = self.lunar_day_info(date)?;
            let mut festivals: Vec<String> = solar_festival(date)
                .split(',')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            let lunar = lunar_festival(&info, self.is_new_years_eve(date, &info)?);
            if !lunar.is_empty() {
                festivals.push(lunar);
            }
            if !festivals.is_empty() {
                out.push(DayFestivals { date, festivals });
            }
            date += 1;
        }
        Ok(out)
    }

    // ── Lunar → solar ─────────────────────────────────────────────────────────

    /// Gregorian date of lunar `day` of `month` (leap or not) in
    /// `lunar_year`, or `None` when that month or day does not exist.
    pub fn solar_date_for_lunar(
        &self,
        lunar_year: i32,
        month: u8,
        is_leap: bool,
        day: u8,
    ) -> Result<Option<Date>> {
        if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
            return Err(Error::InvalidDate(format!(
                "lunar month {month} day {day} out of range"
            )));
        }
        // Months 11 and 12 open the following solar year's table, which is
        // also the one that can place a leap 11th or 12th month.
        let table_year = if month >= 11 { lunar_year + 1 } else { lunar_year };
        let table = self.lunar_year(table_year)?;
        Ok(table
            .find_month(lunar_year, month, is_leap)
            .and_then(|record| record.date_of_day(day)))
    }

    /// The lunar months overlapping Gregorian years `first..=last`, in
    /// order, each listed once.
    pub fn lunar_months_between(&self, first: i32, last: i32) -> Result<Vec<LunarMonthRecord>> {
        let from = Date::from_ymd(first, 1, 1)?;
        let to = Date::from_ymd(last, 12, 31)?;
        let mut out: Vec<LunarMonthRecord> = Vec::new();
        for year in first..=last + 1 {
            let table = self.lunar_year(year)?;
            for record in table.months() {
                match out.iter().position(|m| m.first_day == record.first_day) {
                    // A later table knows better about its opening months.
                    Some(i) => out[i] = *record,
                    None => out.push(*record),
                }
            }
        }
        out.retain(|m| m.first_day <= to && m.first_day + m.days as i32 > from);
        out.sort_by_key(|m| m.first_day);
        Ok(out)
    }
}

/// Whether `date` precedes the first month of the next year's table.
fn date_before_next_table(table: &LunarYear, date: Date) -> bool {
    // The next table opens with the month holding this year's 冬至.
    let solstice = table.solar_term_date(24);
    match table.month_containing(solstice) {
        Some(m) => date < m.first_day,
        None => true,
    }
}

fn apply_month(info: &mut LunarDayInfo, record: &LunarMonthRecord, date: Date) {
    info.lunar_year = record.lunar_year;
    info.month = record.ordinal;
    info.is_leap = record.is_leap;
    info.day = (date - record.first_day + 1) as u8;
    info.days_in_month = record.days;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spring_festival_2023() {
        let cal = LunarCalendar::default();
        let day = cal.lunar_info_for_date(2023, 1, 22).unwrap();
        assert_eq!(day.month_name, "正月");
        assert_eq!(day.day_name, "初一");
        assert_eq!(day.year_ganzhi, "癸卯");
        assert_eq!(day.zodiac, "兔");
        assert_eq!(day.day_ganzhi, "庚辰");
        assert_eq!(day.month_ganzhi, "癸丑");
        assert_eq!(day.lunar_festival, "春节");
    }

    #[test]
    fn invalid_date_is_rejected_up_front() {
        let cal = LunarCalendar::default();
        assert!(matches!(
            cal.lunar_info_for_date(2023, 4, 31),
            Err(Error::InvalidDate(_))
        ));
        assert!(cal.cache().is_empty());
    }

    #[test]
    fn leap_eleventh_month_of_2033() {
        let cal = LunarCalendar::default();
        let day = cal.lunar_info_for_date(2033, 12, 25).unwrap();
        assert!(day.info.is_leap);
        assert_eq!(day.month_name, "闰冬月");
        assert_eq!(day.info.lunar_year, 2033);

        let month = cal.lunar_month_containing(Date::from_ymd(2033, 12, 25).unwrap()).unwrap();
        assert_eq!((month.ordinal, month.is_leap), (11, true));
        assert_eq!(month.first_day, Date::from_ymd(2033, 12, 22).unwrap());
    }

    #[test]
    fn month_grid_is_padded_to_six_weeks() {
        let cal = LunarCalendar::default();
        let t = cal.lunar_month_table(2023, 1, true).unwrap();
        assert_eq!(t.first_weekday, 0);
        assert_eq!(t.entries.len(), GRID_CELLS);
        assert_eq!(t.entries[0].date, Date::from_ymd(2023, 1, 1).unwrap());

        let t = cal.lunar_month_table(2023, 3, true).unwrap();
        assert_eq!(t.first_weekday, 3);
        assert_eq!(t.entries[0].date, Date::from_ymd(2023, 2, 26).unwrap());
        assert_eq!(t.entries[41].date, Date::from_ymd(2023, 4, 8).unwrap());

        let t = cal.lunar_month_table(2023, 2, false).unwrap();
        assert_eq!(t.entries.len(), 28);
    }

    #[test]
    fn festivals_around_new_year_2023() {
        let cal = LunarCalendar::default();
        let start = Date::from_ymd(2023, 1, 20).unwrap();
        let end = Date::from_ymd(2023, 1, 23).unwrap();
        let list = cal.festivals_in_range(start, end).unwrap();
        let dates: Vec<_> = list.iter().map(|d| d.date.to_string()).collect();
        assert_eq!(dates, ["2023-01-21", "2023-01-22"]);
        assert_eq!(list[0].festivals, ["除夕"]);
        assert_eq!(list[1].festivals, ["春节"]);
        assert!(cal.festivals_in_range(end, start).unwrap().is_empty());
    }

    #[test]
    fn lunar_to_solar() {
        let cal = LunarCalendar::default();
        assert_eq!(
            cal.solar_date_for_lunar(2023, 1, false, 1).unwrap(),
            Some(Date::from_ymd(2023, 1, 22).unwrap())
        );
        assert_eq!(
            cal.solar_date_for_lunar(2023, 2, true, 1).unwrap(),
            Some(Date::from_ymd(2023, 3, 22).unwrap())
        );
        assert_eq!(cal.solar_date_for_lunar(2024, 2, true, 1).unwrap(), None);
        assert_eq!(
            cal.solar_date_for_lunar(2033, 11, true, 1).unwrap(),
            Some(Date::from_ymd(2033, 12, 22).unwrap())
        );
        assert!(cal.solar_date_for_lunar(2023, 13, false, 1).is_err());
    }

    #[test]
    fn months_overlapping_2023() {
        let cal = LunarCalendar::default();
        let months = cal.lunar_months_between(2023, 2023).unwrap();
        assert_eq!(months.len(), 13);
        assert_eq!((months[0].lunar_year, months[0].ordinal), (2022, 12));
        assert_eq!(months[0].first_day, Date::from_ymd(2022, 12, 23).unwrap());
        assert!(months[3].is_leap);
        assert_eq!(months[3].ordinal, 2);
        assert_eq!(months[3].first_day, Date::from_ymd(2023, 3, 22).unwrap());
        assert!(!months[4].is_leap);
        let last = months[12];
        assert_eq!((last.lunar_year, last.ordinal), (2023, 11));
        assert_eq!(last.first_day, Date::from_ymd(2023, 12, 13).unwrap());
    }

    #[test]
    fn shared_cache_and_clear() {
        let cache = Arc::new(YearCache::new(Settings::default()));
        let a = LunarCalendar::with_cache(Settings::default(), Arc::clone(&cache)).unwrap();
        let b = LunarCalendar::with_cache(Settings::default(), Arc::clone(&cache)).unwrap();
        a.lunar_year(2024).unwrap();
        assert!(cache.get(2024).is_some());
        b.clear_cache();
        assert!(cache.is_empty());
    }

    #[test]
    fn cache_is_bound_to_its_settings() {
        let cache = Arc::new(YearCache::new(Settings::default()));
        let utc = Settings::new().with_utc_offset_minutes(0);
        assert!(matches!(
            LunarCalendar::with_cache(utc, Arc::clone(&cache)),
            Err(Error::InvalidArgument(_))
        ));
        let own = LunarCalendar::new(utc).unwrap();
        assert_eq!(own.cache().settings(), &utc);
        assert!(LunarCalendar::with_cache(utc, Arc::clone(own.cache())).is_ok());
    }

    #[test]
    fn rejects_invalid_settings() {
        assert!(LunarCalendar::new(Settings::new().with_solver_step(0.0)).is_err());
    }
}
