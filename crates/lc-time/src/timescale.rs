//! Conversions between Terrestrial Time, UTC, and local civil time.
//!
//! All values are fractional Julian Days.  ∆T is looked up for the civil
//! year and month the instant falls in.

use crate::date::Date;
use crate::delta_t::{delta_t_days, is_supported_year};
use lc_core::JulianDay;
use tracing::trace;

/// TT → UTC.
pub fn tt_to_utc(jd_tt: JulianDay) -> JulianDay {
    jd_tt - delta_t_at(jd_tt)
}

/// UTC → TT.
pub fn utc_to_tt(jd_utc: JulianDay) -> JulianDay {
    jd_utc + delta_t_at(jd_utc)
}

/// TT → local civil time `offset_days` east of UTC.
pub fn tt_to_local(jd_tt: JulianDay, offset_days: f64) -> JulianDay {
    tt_to_utc(jd_tt) + offset_days
}

/// Local civil time `offset_days` east of UTC → TT.
pub fn local_to_tt(jd_local: JulianDay, offset_days: f64) -> JulianDay {
    utc_to_tt(jd_local - offset_days)
}

fn delta_t_at(jd: JulianDay) -> f64 {
    let (year, month, _) = Date::from_julian_day(jd).ymd();
    if !is_supported_year(year) {
        trace!(year, "delta-T extrapolated outside modelled range");
    }
    delta_t_days(year, month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn utc_tt_roundtrip() {
        let jd = 2_459_967.5;
        assert_abs_diff_eq!(tt_to_utc(utc_to_tt(jd)), jd, epsilon = 1e-9);
    }

    #[test]
    fn local_offset_applied() {
        let jd = 2_459_967.5;
        let local = tt_to_local(jd, 8.0 / 24.0);
        assert_abs_diff_eq!(local - tt_to_utc(jd), 8.0 / 24.0, epsilon = 1e-9);
        assert_abs_diff_eq!(local_to_tt(local, 8.0 / 24.0), jd, epsilon = 1e-9);
    }

    #[test]
    fn tt_is_ahead_of_utc_today() {
        let jd = 2_459_967.5;
        let dt_seconds = (jd - tt_to_utc(jd)) * 86_400.0;
        assert!(dt_seconds > 60.0 && dt_seconds < 80.0, "{dt_seconds}");
    }
}
