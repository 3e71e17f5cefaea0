//! Truncated VSOP87D series for the Earth.
//!
//! Heliocentric ecliptic longitude `L`, latitude `B` and radius vector `R`
//! referred to the mean dynamical ecliptic and equinox of date, after
//! Meeus, *Astronomical Algorithms* (2nd ed.), appendix III.  Each table
//! holds the terms `A·cos(B + C·τ)` of one power of τ, with `A` in units of
//! 10⁻⁸ rad (or 10⁻⁸ AU for `R`) and τ in Julian millennia from J2000.0.
//!
//! Truncation error on the longitude is below one arcsecond over several
//! millennia around J2000, i.e. a few seconds of time on a solar term.

use lc_core::{JulianDay, Radians, Real};
use lc_math::mod2pi;
use lc_time::julian::julian_millennia;

/// One periodic term: amplitude, phase, frequency.
#[derive(Debug, Clone, Copy)]
struct Term(Real, Real, Real);

fn sum_series(terms: &[Term], tau: Real) -> Real {
    terms.iter().map(|&Term(a, b, c)| a * (b + c * tau).cos()).sum()
}

/// Evaluates `Σ_k τ^k · S_k(τ)` for the series `S_0, S_1, …`, in units of 10⁻⁸.
fn evaluate(series: &[&[Term]], tau: Real) -> Real {
    series
        .iter()
        .rev()
        .fold(0.0, |acc, terms| acc * tau + sum_series(terms, tau))
        * 1e-8
}

/// Earth's heliocentric ecliptic longitude in `[0, 2π)`.
pub fn earth_heliocentric_longitude(jd: JulianDay) -> Radians {
    let tau = julian_millennia(jd);
    mod2pi(evaluate(&[&L0, &L1, &L2, &L3, &L4, &L5], tau))
}

/// Earth's heliocentric ecliptic latitude.
pub fn earth_heliocentric_latitude(jd: JulianDay) -> Radians {
    let tau = julian_millennia(jd);
    evaluate(&[&B0, &B1], tau)
}

/// Earth–Sun distance in astronomical units.
pub fn earth_sun_distance(jd: JulianDay) -> Real {
    let tau = julian_millennia(jd);
    evaluate(&[&R0, &R1, &R2, &R3, &R4], tau)
}

// ── Series tables ─────────────────────────────────────────────────────────────

#[rustfmt::skip]
static L0: [Term; 64] = [
    Term(175347046.0, 0.0, 0.0),
    Term(3341656.0, 4.6692568, 6283.0758500),
    Term(34894.0, 4.62610, 12566.15170),
    Term(3497.0, 2.7441, 5753.3849),
    Term(3418.0, 2.8289, 3.5231),
    Term(3136.0, 3.6277, 77713.7715),
    Term(2676.0, 4.4181, 7860.4194),
    Term(2343.0, 6.1352, 3930.2097),
    Term(1324.0, 0.7425, 11506.7698),
    Term(1273.0, 2.0371, 529.6910),
    Term(1199.0, 1.1096, 1577.3435),
    Term(990.0, 5.233, 5884.927),
    Term(902.0, 2.045, 26.298),
    Term(857.0, 3.508, 398.149),
    Term(780.0, 1.179, 5223.694),
    Term(753.0, 2.533, 5507.553),
    Term(505.0, 4.583, 18849.228),
    Term(492.0, 4.205, 775.523),
    Term(357.0, 2.920, 0.067),
    Term(317.0, 5.849, 11790.629),
    Term(284.0, 1.899, 796.298),
    Term(271.0, 0.315, 10977.079),
    Term(243.0, 0.345, 5486.778),
    Term(206.0, 4.806, 2544.314),
    Term(205.0, 1.869, 5573.143),
    Term(202.0, 2.458, 6069.777),
    Term(156.0, 0.833, 213.299),
    Term(132.0, 3.411, 2942.463),
    Term(126.0, 1.083, 20.775),
    Term(115.0, 0.645, 0.980),
    Term(103.0, 0.636, 4694.003),
    Term(102.0, 0.976, 15720.839),
    Term(102.0, 4.267, 7.114),
    Term(99.0, 6.21, 2146.17),
    Term(98.0, 0.68, 155.42),
    Term(86.0, 5.98, 161000.69),
    Term(85.0, 1.30, 6275.96),
    Term(85.0, 3.67, 71430.70),
    Term(80.0, 1.81, 17260.15),
    Term(79.0, 3.04, 12036.46),
    Term(75.0, 1.76, 5088.63),
    Term(74.0, 3.50, 3154.69),
    Term(74.0, 4.68, 801.82),
    Term(70.0, 0.83, 9437.76),
    Term(62.0, 3.98, 8827.39),
    Term(61.0, 1.82, 7084.90),
    Term(57.0, 2.78, 6286.60),
    Term(56.0, 4.39, 14143.50),
    Term(56.0, 3.47, 6279.55),
    Term(52.0, 0.19, 12139.55),
    Term(52.0, 1.33, 1748.02),
    Term(51.0, 0.28, 5856.48),
    Term(49.0, 0.49, 1194.45),
    Term(41.0, 5.37, 8429.24),
    Term(41.0, 2.40, 19651.05),
    Term(39.0, 6.17, 10447.39),
    Term(37.0, 6.04, 10213.29),
    Term(37.0, 2.57, 1059.38),
    Term(36.0, 1.71, 2352.87),
    Term(36.0, 1.78, 6812.77),
    Term(33.0, 0.59, 17789.85),
    Term(30.0, 0.44, 83996.85),
    Term(30.0, 2.74, 1349.87),
    Term(25.0, 3.16, 4690.48),
];

#[rustfmt::skip]
static L1: [Term; 34] = [
    Term(628331966747.0, 0.0, 0.0),
    Term(206059.0, 2.678235, 6283.075850),
    Term(4303.0, 2.6351, 12566.1517),
    Term(425.0, 1.590, 3.523),
    Term(119.0, 5.796, 26.298),
    Term(109.0, 2.966, 1577.344),
    Term(93.0, 2.59, 18849.23),
    Term(72.0, 1.14, 529.69),
    Term(68.0, 1.87, 398.15),
    Term(67.0, 4.41, 5507.55),
    Term(59.0, 2.89, 5223.69),
    Term(56.0, 2.17, 155.42),
    Term(45.0, 0.40, 796.30),
    Term(36.0, 0.47, 775.52),
    Term(29.0, 2.65, 7.11),
    Term(21.0, 5.34, 0.98),
    Term(19.0, 1.85, 5486.78),
    Term(19.0, 4.97, 213.30),
    Term(17.0, 2.99, 6275.96),
    Term(16.0, 0.03, 2544.31),
    Term(16.0, 1.43, 2146.17),
    Term(15.0, 1.21, 10977.08),
    Term(12.0, 2.83, 1748.02),
    Term(12.0, 3.26, 5088.63),
    Term(12.0, 5.27, 1194.45),
    Term(12.0, 2.08, 4694.00),
    Term(11.0, 0.77, 553.57),
    Term(10.0, 1.30, 6286.60),
    Term(10.0, 4.24, 1349.87),
    Term(9.0, 2.70, 242.73),
    Term(9.0, 5.64, 951.72),
    Term(8.0, 5.30, 2352.87),
    Term(6.0, 2.65, 9437.76),
    Term(6.0, 4.67, 4690.48),
];

#[rustfmt::skip]
static L2: [Term; 20] = [
    Term(52919.0, 0.0, 0.0),
    Term(8720.0, 1.0721, 6283.0758),
    Term(309.0, 0.867, 12566.152),
    Term(27.0, 0.05, 3.52),
    Term(16.0, 5.19, 26.30),
    Term(16.0, 3.68, 155.42),
    Term(10.0, 0.76, 18849.23),
    Term(9.0, 2.06, 77713.77),
    Term(7.0, 0.83, 775.52),
    Term(5.0, 4.66, 1577.34),
    Term(4.0, 1.03, 7.11),
    Term(4.0, 3.44, 5573.14),
    Term(3.0, 5.14, 796.30),
    Term(3.0, 6.05, 5507.55),
    Term(3.0, 1.19, 242.73),
    Term(3.0, 6.12, 529.69),
    Term(3.0, 0.31, 398.15),
    Term(3.0, 2.28, 553.57),
    Term(2.0, 4.38, 5223.69),
    Term(2.0, 3.75, 0.98),
];

#[rustfmt::skip]
static L3: [Term; 7] = [
    Term(289.0, 5.844, 6283.076),
    Term(35.0, 0.0, 0.0),
    Term(17.0, 5.49, 12566.15),
    Term(3.0, 5.20, 155.42),
    Term(1.0, 4.72, 3.52),
    Term(1.0, 5.30, 18849.23),
    Term(1.0, 5.97, 242.73),
];

#[rustfmt::skip]
static L4: [Term; 3] = [
    Term(114.0, 3.142, 0.0),
    Term(8.0, 4.13, 6283.08),
    Term(1.0, 3.84, 12566.15),
];

#[rustfmt::skip]
static L5: [Term; 1] = [
    Term(1.0, 3.14, 0.0),
];

#[rustfmt::skip]
static B0: [Term; 5] = [
    Term(280.0, 3.199, 84334.662),
    Term(102.0, 5.422, 5507.553),
    Term(80.0, 3.88, 5223.69),
    Term(44.0, 3.70, 2352.87),
    Term(32.0, 4.00, 1577.34),
];

#[rustfmt::skip]
static B1: [Term; 2] = [
    Term(9.0, 3.90, 5507.55),
    Term(6.0, 1.73, 5223.69),
];

#[rustfmt::skip]
static R0: [Term; 40] = [
    Term(100013989.0, 0.0, 0.0),
    Term(1670700.0, 3.0984635, 6283.0758500),
    Term(13956.0, 3.05525, 12566.15170),
    Term(3084.0, 5.1985, 77713.7715),
    Term(1628.0, 1.1739, 5753.3849),
    Term(1576.0, 2.8469, 7860.4194),
    Term(925.0, 5.453, 11506.770),
    Term(542.0, 4.564, 3930.210),
    Term(472.0, 3.661, 5884.927),
    Term(346.0, 0.964, 5507.553),
    Term(329.0, 5.900, 5223.694),
    Term(307.0, 0.299, 5573.143),
    Term(243.0, 4.273, 11790.629),
    Term(212.0, 5.847, 1577.344),
    Term(186.0, 5.022, 10977.079),
    Term(175.0, 3.012, 18849.228),
    Term(110.0, 5.055, 5486.778),
    Term(98.0, 0.89, 6069.78),
    Term(86.0, 5.69, 15720.84),
    Term(86.0, 1.27, 161000.69),
    Term(65.0, 0.27, 17260.15),
    Term(63.0, 0.92, 529.69),
    Term(57.0, 2.01, 83996.85),
    Term(56.0, 5.24, 71430.70),
    Term(49.0, 3.25, 2544.31),
    Term(47.0, 2.58, 775.52),
    Term(45.0, 5.54, 9437.76),
    Term(43.0, 6.01, 6275.96),
    Term(39.0, 5.36, 4694.00),
    Term(38.0, 2.39, 8827.39),
    Term(37.0, 0.83, 19651.05),
    Term(37.0, 4.90, 12139.55),
    Term(36.0, 1.67, 12036.46),
    Term(35.0, 1.84, 2942.46),
    Term(33.0, 0.24, 7084.90),
    Term(32.0, 0.18, 5088.63),
    Term(32.0, 1.78, 398.15),
    Term(28.0, 1.21, 6286.60),
    Term(28.0, 1.90, 6279.55),
    Term(26.0, 4.59, 10447.39),
];

#[rustfmt::skip]
static R1: [Term; 10] = [
    Term(103019.0, 1.107490, 6283.075850),
    Term(1721.0, 1.0644, 12566.1517),
    Term(702.0, 3.142, 0.0),
    Term(32.0, 1.02, 18849.23),
    Term(31.0, 2.84, 5507.55),
    Term(25.0, 1.32, 5223.69),
    Term(18.0, 1.42, 1577.34),
    Term(10.0, 5.91, 10977.08),
    Term(9.0, 1.42, 6275.96),
    Term(9.0, 0.27, 5486.78),
];

#[rustfmt::skip]
static R2: [Term; 6] = [
    Term(4359.0, 5.7846, 6283.0758),
    Term(124.0, 5.579, 12566.152),
    Term(12.0, 3.14, 0.0),
    Term(9.0, 3.63, 77713.77),
    Term(6.0, 1.87, 5573.14),
    Term(3.0, 5.47, 18849.23),
];

#[rustfmt::skip]
static R3: [Term; 2] = [
    Term(145.0, 4.273, 6283.076),
    Term(7.0, 3.92, 12566.15),
];

#[rustfmt::skip]
static R4: [Term; 1] = [
    Term(4.0, 2.56, 6283.08),
];
