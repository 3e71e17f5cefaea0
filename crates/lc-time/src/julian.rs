//! Julian day epochs and the time arguments used by the ephemeris series.

use lc_core::{JulianDay, Real};

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000: JulianDay = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_JULIAN_CENTURY: Real = 36_525.0;

/// Days per Julian millennium.
pub const DAYS_PER_JULIAN_MILLENNIUM: Real = 365_250.0;

/// Julian centuries of TT elapsed since J2000.0.
#[inline]
pub fn julian_centuries(jd: JulianDay) -> Real {
    (jd - J2000) / DAYS_PER_JULIAN_CENTURY
}

/// Julian millennia of TT elapsed since J2000.0.
#[inline]
pub fn julian_millennia(jd: JulianDay) -> Real {
    (jd - J2000) / DAYS_PER_JULIAN_MILLENNIUM
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn epoch_is_zero() {
        assert_eq!(julian_centuries(J2000), 0.0);
        assert_eq!(julian_millennia(J2000), 0.0);
    }

    #[test]
    fn one_century_later() {
        assert_abs_diff_eq!(julian_centuries(J2000 + 36_525.0), 1.0);
        assert_abs_diff_eq!(julian_millennia(J2000 + 36_525.0), 0.1);
    }
}
