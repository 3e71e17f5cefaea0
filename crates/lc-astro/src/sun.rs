//! Apparent geocentric longitude of the Sun.

use crate::nutation::nutation_in_longitude;
use crate::vsop87::{earth_heliocentric_latitude, earth_heliocentric_longitude, earth_sun_distance};
use lc_core::{JulianDay, Radians};
use lc_math::angle::{arcsec_to_rad, deg_to_rad};
use lc_math::mod2pi;
use lc_time::julian::julian_centuries;
use std::f64::consts::PI;

/// Constant of annual aberration, arcseconds at 1 AU.
pub const ABERRATION_ARCSEC: f64 = 20.4898;

/// Correction from the VSOP87 dynamical frame to FK5, for longitude.
///
/// `l`, `b` are the heliocentric longitude and latitude; the same value
/// applies to the geocentric ones since both signs flip.
pub fn fk5_longitude_correction(l: Radians, b: Radians, jd: JulianDay) -> Radians {
    let t = julian_centuries(jd);
    let lp = l - deg_to_rad(1.397) * t - deg_to_rad(0.000_31) * t * t;
    arcsec_to_rad(-0.090_33 + 0.039_16 * (lp.cos() + lp.sin()) * b.tan())
}

/// The Sun's apparent geocentric ecliptic longitude, in `[0, 2π)`.
///
/// Heliocentric Earth longitude turned around by π, plus nutation in
/// longitude and the FK5 correction, minus annual aberration.  `jd` is in
/// Terrestrial Time.
pub fn sun_geocentric_longitude(jd: JulianDay) -> Radians {
    let l = earth_heliocentric_longitude(jd);
    let b = earth_heliocentric_latitude(jd);
    let r = earth_sun_distance(jd);
    let t = julian_centuries(jd);

    let lon = l + nutation_in_longitude(t) + fk5_longitude_correction(l, b, jd);
    mod2pi(lon + PI - arcsec_to_rad(ABERRATION_ARCSEC / r))
}
