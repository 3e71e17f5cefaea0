//! Angle helpers.
//!
//! Every angle in the workspace is carried in radians.  Series
//! coefficients are published in degrees or arcseconds and converted at the
//! point of use.

use lc_core::{Radians, Real};
use std::f64::consts::{PI, TAU};

/// Radians per arcsecond.
pub const RAD_PER_ARCSEC: Real = PI / (180.0 * 3600.0);

/// Degrees → radians.
#[inline]
pub fn deg_to_rad(deg: Real) -> Radians {
    deg.to_radians()
}

/// Arcseconds → radians.
#[inline]
pub fn arcsec_to_rad(arcsec: Real) -> Radians {
    arcsec * RAD_PER_ARCSEC
}

/// Reduce an angle to `[0, 2π)`.
#[inline]
pub fn mod2pi(x: Radians) -> Radians {
    let r = x.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if r >= TAU {
        0.0
    } else {
        r
    }
}

/// Reduce an angle to `(−π, π]`.
#[inline]
pub fn modpi(x: Radians) -> Radians {
    let r = mod2pi(x);
    if r > PI {
        r - TAU
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn mod2pi_basics() {
        assert_abs_diff_eq!(mod2pi(-PI / 2.0), 1.5 * PI, epsilon = 1e-15);
        assert_abs_diff_eq!(mod2pi(5.0 * PI), PI, epsilon = 1e-12);
        assert_eq!(mod2pi(0.0), 0.0);
        assert_eq!(mod2pi(-1e-300), 0.0);
    }

    #[test]
    fn modpi_basics() {
        assert_abs_diff_eq!(modpi(1.5 * PI), -0.5 * PI, epsilon = 1e-15);
        assert_abs_diff_eq!(modpi(PI), PI, epsilon = 1e-15);
        assert_abs_diff_eq!(modpi(-PI), PI, epsilon = 1e-15);
    }

    #[test]
    fn unit_conversions() {
        assert_abs_diff_eq!(deg_to_rad(180.0), PI);
        assert_abs_diff_eq!(arcsec_to_rad(3600.0 * 180.0), PI, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn reduced_ranges(x in -1.0e6f64..1.0e6) {
            let a = mod2pi(x);
            prop_assert!((0.0..TAU).contains(&a));
            let b = modpi(x);
            prop_assert!(b > -PI && b <= PI);
            prop_assert!(modpi(a - b).abs() < 1e-9);
        }
    }
}
