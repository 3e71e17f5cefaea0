//! # lc-astro
//!
//! Low-precision ephemeris of the Sun and Moon, sufficient to time solar
//! terms and new moons to within seconds over the historical range.
//!
//! Every function takes a Julian Day in Terrestrial Time and returns an
//! angle in radians (or a distance in AU).  All of them are total: a finite
//! input never produces NaN.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Moon's geocentric longitude.
pub mod moon;

/// IAU 2000B nutation.
pub mod nutation;

/// Sun's apparent geocentric longitude.
pub mod sun;

/// Truncated VSOP87 Earth series.
pub mod vsop87;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use moon::moon_geocentric_longitude;
pub use nutation::{nutation, nutation_in_longitude, nutation_in_obliquity};
pub use sun::sun_geocentric_longitude;
pub use vsop87::{earth_heliocentric_latitude, earth_heliocentric_longitude, earth_sun_distance};
