//! Integration tests for civil dates, instants and time scales.

use approx::assert_abs_diff_eq;
use lc_time::date::{days_in_month, is_leap_year};
use lc_time::{delta_t, timescale, Date, DateTime, TimeUnit, Weekday};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Civil calendar ───────────────────────────────────────────────────────────

#[test]
fn consecutive_days_are_consistent() {
    let start = date(1899, 12, 31);
    let end = date(2101, 1, 1);
    let mut prev = start;
    let mut d = start + 1;
    while d <= end {
        let (y, m, dd) = d.ymd();
        assert!(dd >= 1 && dd <= days_in_month(y, m), "{d}");
        if dd == 1 {
            assert_eq!(prev.day_of_month(), days_in_month(prev.year(), prev.month()));
        } else {
            assert_eq!(prev.day_of_month() + 1, dd);
        }
        assert_eq!(prev.weekday().sunday_based_index() as i32, ((d - 1).unix_days() + 4).rem_euclid(7));
        assert_eq!(Date::from_ymd(y, m, dd).unwrap(), d);
        prev = d;
        d += 1;
    }
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2023));
    assert!(is_leap_year(-4));
    assert_eq!(days_in_month(2024, 2), 29);
}

#[test]
fn month_arithmetic_clamps() {
    assert_eq!(date(2024, 1, 31).advance(1, TimeUnit::Months).unwrap(), date(2024, 2, 29));
    assert_eq!(date(2024, 2, 29).advance(1, TimeUnit::Years).unwrap(), date(2025, 2, 28));
    assert_eq!(date(2024, 3, 15).advance(-2, TimeUnit::Weeks).unwrap(), date(2024, 3, 1));
    assert!(date(9999, 12, 1).advance(1, TimeUnit::Months).is_err());
}

#[test]
fn nth_weekday() {
    assert_eq!(Date::nth_weekday(2, Weekday::Sunday, 2024, 5).unwrap(), date(2024, 5, 12));
    assert_eq!(Date::nth_weekday(3, Weekday::Sunday, 2023, 6).unwrap(), date(2023, 6, 18));
    assert!(Date::nth_weekday(5, Weekday::Monday, 2023, 2).is_err());
}

// ─── Time scales ──────────────────────────────────────────────────────────────

#[test]
fn local_and_terrestrial_time_round_trip() {
    let jd = DateTime::new(2023, 12, 22, 11, 27, 0).unwrap().to_julian_day();
    let offset = 8.0 / 24.0;
    let tt = timescale::local_to_tt(jd, offset);
    assert_abs_diff_eq!(timescale::tt_to_local(tt, offset), jd, epsilon = 1e-9);
    // TT runs a little over a minute ahead of UTC in 2023.
    let lead = (timescale::utc_to_tt(jd) - jd) * 86_400.0;
    assert!((65.0..80.0).contains(&lead), "{lead}");
}

#[test]
fn delta_t_is_finite_over_the_model_range() {
    for year in (-2000..=3000).step_by(7) {
        let dt = delta_t::delta_t(year, 6);
        assert!(dt.is_finite(), "{year}");
    }
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn julian_day_round_trip(days in -2_000_000i32..1_000_000, secs in 0u32..86_400) {
        let d = Date::from_unix_days(days);
        let t = DateTime::from_date_and_seconds(d, secs).unwrap();
        let back = DateTime::from_julian_day(t.to_julian_day());
        prop_assert_eq!(back, t);
    }

    #[test]
    fn ymd_round_trip(days in -2_000_000i32..1_000_000) {
        let d = Date::from_unix_days(days);
        let (y, m, dd) = d.ymd();
        prop_assert_eq!(Date::from_ymd(y, m, dd).unwrap(), d);
        prop_assert_eq!(d.weekday().sunday_based_index() as i32, (days + 4).rem_euclid(7));
    }
}
