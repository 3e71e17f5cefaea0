//! Nutation in longitude and obliquity.
//!
//! IAU 2000B luni-solar series (77 terms, IERS Conventions 2010 table 5.3b),
//! good to about a milliarcsecond between 1995 and 2050 and far more precise
//! than the calendar needs elsewhere.

use lc_core::{Radians, Real};
use lc_math::angle::arcsec_to_rad;

/// The five Delaunay arguments `[l, l′, F, D, Ω]` in radians.
///
/// * `l`  mean anomaly of the Moon
/// * `l′` mean anomaly of the Sun
/// * `F`  mean argument of latitude of the Moon
/// * `D`  mean elongation of the Moon from the Sun
/// * `Ω`  mean longitude of the Moon's ascending node
///
/// `t` is Julian centuries of TT since J2000.0.
pub fn delaunay_arguments(t: Real) -> [Radians; 5] {
    let poly = |c: [Real; 5]| {
        arcsec_to_rad(c[0] + t * (c[1] + t * (c[2] + t * (c[3] + t * c[4]))))
    };
    [
        poly([485_868.249_036, 1_717_915_923.217_8, 31.879_2, 0.051_635, -0.000_244_70]),
        poly([1_287_104.793_05, 129_596_581.048_1, -0.553_2, 0.000_136, -0.000_011_49]),
        poly([335_779.526_232, 1_739_527_262.847_8, -12.751_2, -0.001_037, 0.000_004_17]),
        poly([1_072_260.703_69, 1_602_961_601.209_0, -6.370_6, 0.006_593, -0.000_031_69]),
        poly([450_160.398_036, -6_962_890.543_1, 7.472_2, 0.007_702, -0.000_059_39]),
    ]
}

/// Multipliers of `[l, l′, F, D, Ω]`, then `S`, `S′` (Δψ, sine) and
/// `C`, `C′` (Δε, cosine) in units of 0.1 µas.
#[rustfmt::skip]
static TERMS: [([i8; 5], i64, i64, i64, i64); 77] = [
    ([  0,   0,   0,   0,   1],  -172064161, -174666,   92052331,   9086),
    ([  0,   0,   2,  -2,   2],   -13170906,   -1675,    5730336,  -3015),
    ([  0,   0,   2,   0,   2],    -2276413,    -234,     978459,   -485),
    ([  0,   0,   0,   0,   2],     2074554,     207,    -897492,    470),
    ([  0,   1,   0,   0,   0],     1475877,   -3633,      73871,   -184),
    ([  0,   1,   2,  -2,   2],     -516821,    1226,     224386,   -677),
    ([  1,   0,   0,   0,   0],      711159,      73,      -6750,      0),
    ([  0,   0,   2,   0,   1],     -387298,    -367,     200728,     18),
    ([  1,   0,   2,   0,   2],     -301461,     -36,     129025,    -63),
    ([  0,  -1,   2,  -2,   2],      215829,    -494,     -95929,    299),
    ([  0,   0,   2,  -2,   1],      128227,     137,     -68982,     -9),
    ([ -1,   0,   2,   0,   2],      123457,      11,     -53311,     32),
    ([ -1,   0,   0,   2,   0],      156994,      10,      -1235,      0),
    ([  1,   0,   0,   0,   1],       63110,      63,     -33228,      0),
    ([ -1,   0,   0,   0,   1],      -57976,     -63,      31429,      0),
    ([ -1,   0,   2,   2,   2],      -59641,     -11,      25543,    -11),
    ([  1,   0,   2,   0,   1],      -51613,     -42,      26366,      0),
    ([ -2,   0,   2,   0,   1],       45893,      50,     -24236,    -10),
    ([  0,   0,   0,   2,   0],       63384,      11,      -1220,      0),
    ([  0,   0,   2,   2,   2],      -38571,      -1,      16452,    -11),
    ([  0,  -2,   2,  -2,   2],       32481,       0,     -13870,      0),
    ([ -2,   0,   0,   2,   0],      -47722,       0,        477,      0),
    ([  2,   0,   2,   0,   2],      -31046,      -1,      13238,    -11),
    ([  1,   0,   2,  -2,   2],       28593,       0,     -12338,     10),
    ([ -1,   0,   2,   0,   1],       20441,      21,     -10758,      0),
    ([  2,   0,   0,   0,   0],       29243,       0,       -609,      0),
    ([  0,   0,   2,   0,   0],       25887,       0,       -550,      0),
    ([  0,   1,   0,   0,   1],      -14053,     -25,       8551,     -2),
    ([ -1,   0,   0,   2,   1],       15164,      10,      -8001,      0),
    ([  0,   2,   2,  -2,   2],      -15794,      72,       6850,    -42),
    ([  0,   0,  -2,   2,   0],       21783,       0,       -167,      0),
    ([  1,   0,   0,  -2,   1],      -12873,     -10,       6953,      0),
    ([  0,  -1,   0,   0,   1],      -12654,      11,       6415,      0),
    ([ -1,   0,   2,   2,   1],      -10204,       0,       5222,      0),
    ([  0,   2,   0,   0,   0],       16707,     -85,        168,     -1),
    ([  1,   0,   2,   2,   2],       -7691,       0,       3268,      0),
    ([ -2,   0,   2,   0,   0],      -11024,       0,        104,      0),
    ([  0,   1,   2,   0,   2],        7566,     -21,      -3250,      0),
    ([  0,   0,   2,   2,   1],       -6637,     -11,       3353,      0),
    ([  0,  -1,   2,   0,   2],       -7141,      21,       3070,      0),
    ([  0,   0,   0,   2,   1],       -6302,     -11,       3272,      0),
    ([  1,   0,   2,  -2,   1],        5800,      10,      -3045,      0),
    ([  2,   0,   2,  -2,   2],        6443,       0,      -2768,      0),
    ([ -2,   0,   0,   2,   1],       -5774,     -11,       3041,      0),
    ([  2,   0,   2,   0,   1],       -5350,       0,       2695,      0),
    ([  0,  -1,   2,  -2,   1],       -4752,     -11,       2719,      0),
    ([  0,   0,   0,  -2,   1],       -4940,     -11,       2720,      0),
    ([ -1,  -1,   0,   2,   0],        7350,       0,        -51,      0),
    ([  2,   0,   0,  -2,   1],       -4803,     -11,       2556,      0),
    ([  1,   0,   0,   2,   0],       -7677,       0,        462,      0),
    ([  0,   1,   2,  -2,   1],        5417,       0,      -2520,      0),
    ([  1,  -1,   0,   0,   0],        6624,       0,       -468,      0),
    ([ -2,   0,   2,   0,   2],       -5433,       0,       2334,      0),
    ([  3,   0,   2,   0,   2],       -4632,       0,       1991,      0),
    ([  0,  -1,   0,   2,   0],        6106,       0,       -167,      0),
    ([  1,  -1,   2,   0,   2],       -3593,       0,       1556,      0),
    ([  0,   0,   0,   1,   0],       -4766,       0,        270,      0),
    ([ -1,  -1,   2,   2,   2],       -4095,       0,       1793,      0),
    ([ -1,   0,   2,   0,   0],        4229,       0,       -101,      0),
    ([  0,  -1,   2,   2,   2],       -3372,       0,       1487,      0),
    ([  2,   0,   0,   0,   1],       -3353,       0,       1758,      0),
    ([  1,   0,   2,   0,   0],       -3523,       0,        246,      0),
    ([  1,   1,   0,   0,   0],       -3613,       0,        329,      0),
    ([ -1,   0,   2,  -2,   1],        3522,       0,      -1830,      0),
    ([  2,   0,   0,   0,  -1],        3312,       0,      -1730,      0),
    ([  0,   0,  -2,   2,   1],       -3142,       0,       1704,      0),
    ([  0,   1,   0,   0,  -1],       -2927,       0,       1564,      0),
    ([  0,   1,   2,   0,   1],       -2887,       0,       1401,      0),
    ([  0,  -1,   2,   0,   1],        2451,       0,      -1200,      0),
    ([  2,   0,  -2,   0,   0],       -2790,       0,        410,      0),
    ([ -1,   0,   0,   2,  -1],        2145,       0,      -1154,      0),
    ([  0,   0,   2,  -2,   0],        2816,       0,        286,      0),
    ([  0,   1,   0,  -2,   0],        2700,       0,       -258,      0),
    ([  1,   0,   0,  -1,   0],       -2330,       0,        -37,      0),
    ([  0,   0,   0,   0,   2],        2283,       0,      -1039,      0),
    ([  1,   0,  -2,   0,   0],       -2321,       0,        284,      0),
    ([ -1,   0,   0,   1,   1],       -2049,       0,       1112,      0),
];

/// Offsets approximating the planetary terms left out of IAU 2000B, arcsec.
const DPSI_OFFSET: Real = -0.000_135;
const DEPS_OFFSET: Real = -0.000_388;

/// `(Δψ, Δε)` in radians for `t` Julian centuries of TT since J2000.0.
pub fn nutation(t: Real) -> (Radians, Radians) {
    let args = delaunay_arguments(t);
    let (mut dpsi, mut deps) = (0.0, 0.0);
    for (mult, s, sd, c, cd) in TERMS.iter() {
        let arg: Real = mult
            .iter()
            .zip(args.iter())
            .map(|(&n, &a)| n as Real * a)
            .sum();
        let (sin_a, cos_a) = arg.sin_cos();
        dpsi += (*s as Real + *sd as Real * t) * sin_a;
        deps += (*c as Real + *cd as Real * t) * cos_a;
    }
    (
        arcsec_to_rad(dpsi * 1e-7 + DPSI_OFFSET),
        arcsec_to_rad(deps * 1e-7 + DEPS_OFFSET),
    )
}

/// Nutation in longitude Δψ, radians.
pub fn nutation_in_longitude(t: Real) -> Radians {
    nutation(t).0
}

/// Nutation in obliquity Δε, radians.
pub fn nutation_in_obliquity(t: Real) -> Radians {
    nutation(t).1
}

#[cfg(test)]
mod tests {
    use super::*;
    use lc_math::angle::RAD_PER_ARCSEC;

    #[test]
    fn meeus_example_1987_april_10() {
        // Meeus, Astronomical Algorithms, example 22.a: Δψ = −3.788″, Δε = +9.443″.
        let t = (2_446_895.5 - 2_451_545.0) / 36_525.0;
        let (dpsi, deps) = nutation(t);
        assert!((dpsi / RAD_PER_ARCSEC + 3.788).abs() < 0.02, "{}", dpsi / RAD_PER_ARCSEC);
        assert!((deps / RAD_PER_ARCSEC - 9.443).abs() < 0.02, "{}", deps / RAD_PER_ARCSEC);
    }

    #[test]
    fn bounded_amplitude() {
        for k in -200..=100 {
            let t = k as Real / 10.0;
            let (dpsi, deps) = nutation(t);
            assert!((dpsi / RAD_PER_ARCSEC).abs() < 20.0, "t = {t}");
            assert!((deps / RAD_PER_ARCSEC).abs() < 11.0, "t = {t}");
        }
    }

    #[test]
    fn split_accessors_agree() {
        let t = 0.23;
        assert_eq!(nutation_in_longitude(t), nutation(t).0);
        assert_eq!(nutation_in_obliquity(t), nutation(t).1);
    }
}
