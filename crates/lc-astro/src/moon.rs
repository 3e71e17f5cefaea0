//! Geocentric ecliptic longitude of the Moon.
//!
//! Main periodic terms of ELP-2000/82 as abridged in Meeus, *Astronomical
//! Algorithms* chapter 47, good to roughly ten arcseconds, i.e. well under a
//! minute of time on a new moon.

use crate::nutation::nutation_in_longitude;
use lc_core::{JulianDay, Radians, Real};
use lc_math::angle::deg_to_rad;
use lc_math::mod2pi;
use lc_time::julian::julian_centuries;

/// Mean arguments of the lunar theory, in radians.
#[derive(Debug, Clone, Copy)]
pub struct LunarArguments {
    /// Moon's mean longitude L′.
    pub mean_longitude: Radians,
    /// Mean elongation D.
    pub elongation: Radians,
    /// Sun's mean anomaly M.
    pub sun_anomaly: Radians,
    /// Moon's mean anomaly M′.
    pub moon_anomaly: Radians,
    /// Argument of latitude F.
    pub latitude_argument: Radians,
    /// Eccentricity factor E of the Earth's orbit.
    pub eccentricity: Real,
}

impl LunarArguments {
    /// Arguments for `t` Julian centuries of TT since J2000.0.
    pub fn new(t: Real) -> Self {
        let deg = |c0: Real, c1: Real, c2: Real, c3: Real, c4: Real| {
            deg_to_rad(c0 + t * (c1 + t * (c2 + t * (c3 + t * c4))))
        };
        Self {
            mean_longitude: deg(
                218.316_459_1,
                481_267.881_342_36,
                -0.001_326_8,
                1.0 / 538_841.0,
                -1.0 / 65_194_000.0,
            ),
            elongation: deg(
                297.850_204_2,
                445_267.111_516_8,
                -0.001_630_0,
                1.0 / 545_868.0,
                -1.0 / 113_065_000.0,
            ),
            sun_anomaly: deg(
                357.529_109_2,
                35_999.050_290_9,
                -0.000_153_6,
                1.0 / 24_490_000.0,
                0.0,
            ),
            moon_anomaly: deg(
                134.963_411_4,
                477_198.867_631_3,
                0.008_997_0,
                1.0 / 69_699.0,
                -1.0 / 14_712_000.0,
            ),
            latitude_argument: deg(
                93.272_099_3,
                483_202.017_527_3,
                -0.003_402_9,
                -1.0 / 3_526_000.0,
                1.0 / 863_310_000.0,
            ),
            eccentricity: 1.0 - t * (0.002_516 + 0.000_007_4 * t),
        }
    }
}

/// Multipliers of D, M, M′, F and the coefficient of `sin` in 10⁻⁶ degrees.
#[rustfmt::skip]
static LONGITUDE_TERMS: [([i8; 4], i32); 59] = [
    ([ 0,  0,  1,  0],  6288774),
    ([ 2,  0, -1,  0],  1274027),
    ([ 2,  0,  0,  0],   658314),
    ([ 0,  0,  2,  0],   213618),
    ([ 0,  1,  0,  0],  -185116),
    ([ 0,  0,  0,  2],  -114332),
    ([ 2,  0, -2,  0],    58793),
    ([ 2, -1, -1,  0],    57066),
    ([ 2,  0,  1,  0],    53322),
    ([ 2, -1,  0,  0],    45758),
    ([ 0,  1, -1,  0],   -40923),
    ([ 1,  0,  0,  0],   -34720),
    ([ 0,  1,  1,  0],   -30383),
    ([ 2,  0,  0, -2],    15327),
    ([ 0,  0,  1,  2],   -12528),
    ([ 0,  0,  1, -2],    10980),
    ([ 4,  0, -1,  0],    10675),
    ([ 0,  0,  3,  0],    10034),
    ([ 4,  0, -2,  0],     8548),
    ([ 2,  1, -1,  0],    -7888),
    ([ 2,  1,  0,  0],    -6766),
    ([ 1,  0, -1,  0],    -5163),
    ([ 1,  1,  0,  0],     4987),
    ([ 2, -1,  1,  0],     4036),
    ([ 2,  0,  2,  0],     3994),
    ([ 4,  0,  0,  0],     3861),
    ([ 2,  0, -3,  0],     3665),
    ([ 0,  1, -2,  0],    -2689),
    ([ 2,  0, -1,  2],    -2602),
    ([ 2, -1, -2,  0],     2390),
    ([ 1,  0,  1,  0],    -2348),
    ([ 2, -2,  0,  0],     2236),
    ([ 0,  1,  2,  0],    -2120),
    ([ 0,  2,  0,  0],    -2069),
    ([ 2, -2, -1,  0],     2048),
    ([ 2,  0,  1, -2],    -1773),
    ([ 2,  0,  0,  2],    -1595),
    ([ 4, -1, -1,  0],     1215),
    ([ 0,  0,  2,  2],    -1110),
    ([ 3,  0, -1,  0],     -892),
    ([ 2,  1,  1,  0],     -810),
    ([ 4, -1, -2,  0],      759),
    ([ 0,  2, -1,  0],     -713),
    ([ 2,  2, -1,  0],     -700),
    ([ 2,  1, -2,  0],      691),
    ([ 2, -1,  0, -2],      596),
    ([ 4,  0,  1,  0],      549),
    ([ 0,  0,  4,  0],      537),
    ([ 4, -1,  0,  0],      520),
    ([ 1,  0, -2,  0],     -487),
    ([ 2,  1,  0, -2],     -399),
    ([ 0,  0,  2, -2],     -381),
    ([ 1,  1,  1,  0],      351),
    ([ 3,  0, -2,  0],     -340),
    ([ 4,  0, -3,  0],      330),
    ([ 2, -1,  2,  0],      327),
    ([ 0,  2,  1,  0],     -323),
    ([ 1,  1, -1,  0],      299),
    ([ 2,  0,  3,  0],      294),
];

/// Sum of the periodic longitude terms plus the Venus, Jupiter and Earth
/// flattening perturbations, in 10⁻⁶ degrees.
fn longitude_perturbation(a: &LunarArguments, t: Real) -> Real {
    let e = a.eccentricity;
    let periodic: Real = LONGITUDE_TERMS
        .iter()
        .map(|&([d, m, mp, f], coef)| {
            let arg = d as Real * a.elongation
                + m as Real * a.sun_anomaly
                + mp as Real * a.moon_anomaly
                + f as Real * a.latitude_argument;
            let scale = match m.abs() {
                0 => 1.0,
                1 => e,
                _ => e * e,
            };
            coef as Real * scale * arg.sin()
        })
        .sum();

    let a1 = deg_to_rad(119.75 + 131.849 * t);
    let a2 = deg_to_rad(53.09 + 479_264.290 * t);
    periodic
        + 3958.0 * a1.sin()
        + 1962.0 * (a.mean_longitude - a.latitude_argument).sin()
        + 318.0 * a2.sin()
}

/// The Moon's apparent geocentric ecliptic longitude, in `[0, 2π)`.
///
/// `jd` is in Terrestrial Time.
pub fn moon_geocentric_longitude(jd: JulianDay) -> Radians {
    let t = julian_centuries(jd);
    let args = LunarArguments::new(t);
    let sigma = longitude_perturbation(&args, t);
    mod2pi(args.mean_longitude + deg_to_rad(sigma * 1e-6) + nutation_in_longitude(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12.0 TD: apparent λ = 133.167 265° (133.162 655° + Δψ).
        let lon = moon_geocentric_longitude(2_448_724.5).to_degrees();
        assert!((lon - 133.167_265).abs() < 2e-4, "λ = {lon}");
    }

    #[test]
    fn eccentricity_factor() {
        let a = LunarArguments::new(-0.077_221_081_451);
        assert!((a.eccentricity - 1.000_194).abs() < 1e-6);
    }

    #[test]
    fn finite_across_supported_years() {
        let mut jd = 990_557.5;
        while jd < 2_817_152.5 {
            let lon = moon_geocentric_longitude(jd);
            assert!(lon.is_finite() && (0.0..std::f64::consts::TAU).contains(&lon));
            jd += 17.3;
        }
    }
}
