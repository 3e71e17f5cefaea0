//! ∆T = TT − UTC, in seconds.
//!
//! Piecewise polynomial expressions of Espenak & Meeus (NASA Five Millennium
//! Canon of Solar Eclipses), evaluated at the middle of the given month.
//! Outside −1999..=3000 the long-term parabola is used; the result is still
//! finite but its accuracy degrades quickly.

use lc_core::errors::{Error, Result};
use lc_core::Real;

/// Lowest year covered by the ∆T polynomials.
pub const MIN_SUPPORTED_YEAR: i32 = -1999;

/// Highest year covered by the ∆T polynomials.
pub const MAX_SUPPORTED_YEAR: i32 = 3000;

/// Whether `year` is inside the range where ∆T is modelled.
pub fn is_supported_year(year: i32) -> bool {
    (MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&year)
}

/// Strict range check for callers that want to refuse degraded output.
///
/// # Errors
/// [`Error::YearOutOfSupportedRange`] outside −1999..=3000.
pub fn check_supported_year(year: i32) -> Result<()> {
    if is_supported_year(year) {
        Ok(())
    } else {
        Err(Error::YearOutOfSupportedRange {
            year,
            min: MIN_SUPPORTED_YEAR,
            max: MAX_SUPPORTED_YEAR,
        })
    }
}

/// ∆T in seconds for the middle of `month` (1–12) of `year`.
pub fn delta_t(year: i32, month: u8) -> Real {
    let y = year as Real + (month as Real - 0.5) / 12.0;
    delta_t_decimal_year(y)
}

/// ∆T in days, for direct use on Julian Days.
pub fn delta_t_days(year: i32, month: u8) -> Real {
    delta_t(year, month) / 86_400.0
}

fn long_term(y: Real) -> Real {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// ∆T in seconds for a decimal year.
pub fn delta_t_decimal_year(y: Real) -> Real {
    if y < -500.0 {
        long_term(y)
    } else if y < 500.0 {
        let u = y / 100.0;
        poly(
            u,
            &[
                10583.6,
                -1014.41,
                33.78311,
                -5.952053,
                -0.1798452,
                0.022174192,
                0.0090316521,
            ],
        )
    } else if y < 1600.0 {
        let u = (y - 1000.0) / 100.0;
        poly(
            u,
            &[
                1574.2,
                -556.01,
                71.23472,
                0.319781,
                -0.8503463,
                -0.005050998,
                0.0083572073,
            ],
        )
    } else if y < 1700.0 {
        let t = y - 1600.0;
        poly(t, &[120.0, -0.9808, -0.01532, 1.0 / 7129.0])
    } else if y < 1800.0 {
        let t = y - 1700.0;
        poly(t, &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0])
    } else if y < 1860.0 {
        let t = y - 1800.0;
        poly(
            t,
            &[
                13.72,
                -0.332447,
                0.0068612,
                0.0041116,
                -0.00037436,
                0.0000121272,
                -0.0000001699,
                0.000000000875,
            ],
        )
    } else if y < 1900.0 {
        let t = y - 1860.0;
        poly(
            t,
            &[7.62, 0.5737, -0.251754, 0.01680668, -0.0004473624, 1.0 / 233_174.0],
        )
    } else if y < 1920.0 {
        let t = y - 1900.0;
        poly(t, &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197])
    } else if y < 1941.0 {
        let t = y - 1920.0;
        poly(t, &[21.20, 0.84493, -0.076100, 0.0020936])
    } else if y < 1961.0 {
        let t = y - 1950.0;
        poly(t, &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0])
    } else if y < 1986.0 {
        let t = y - 1975.0;
        poly(t, &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0])
    } else if y < 2005.0 {
        let t = y - 2000.0;
        poly(
            t,
            &[63.86, 0.3345, -0.060374, 0.0017275, 0.000651814, 0.00002373599],
        )
    } else if y < 2050.0 {
        let t = y - 2000.0;
        poly(t, &[62.92, 0.32217, 0.005589])
    } else if y < 2150.0 {
        long_term(y) - 0.5628 * (2150.0 - y)
    } else {
        long_term(y)
    }
}

/// Horner evaluation of `c[0] + c[1]·x + c[2]·x² + …`.
fn poly(x: Real, c: &[Real]) -> Real {
    c.iter().rev().fold(0.0, |acc, &k| acc * x + k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        // Published values: ~63.8 s in 2000, ~69 s around 2020, ~29 s in 1950.
        assert!((delta_t(2000, 1) - 63.8).abs() < 0.5);
        assert!((delta_t(2020, 1) - 71.0).abs() < 2.5);
        assert!((delta_t(1950, 1) - 29.0).abs() < 0.5);
        assert!((delta_t(1900, 1) - (-2.8)).abs() < 0.5);
    }

    #[test]
    fn roughly_continuous_at_band_edges() {
        for edge in [
            -500, 500, 1600, 1700, 1800, 1860, 1900, 1920, 1941, 1961, 1986, 2005, 2050, 2150,
        ] {
            let e = edge as Real;
            let jump = (delta_t_decimal_year(e - 1e-6) - delta_t_decimal_year(e)).abs();
            assert!(jump < 5.0, "discontinuity of {jump} s at {edge}");
        }
    }

    #[test]
    fn finite_everywhere_in_range() {
        for year in -2000..=3000 {
            for month in [1, 6, 12] {
                assert!(delta_t(year, month).is_finite(), "{year}-{month}");
            }
        }
    }

    #[test]
    fn strict_check() {
        assert!(check_supported_year(2023).is_ok());
        assert!(matches!(
            check_supported_year(3001),
            Err(Error::YearOutOfSupportedRange { year: 3001, .. })
        ));
    }
}
