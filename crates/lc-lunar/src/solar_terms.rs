//! Solar terms and new moons.
//!
//! Both are roots of a smooth angular target: the Sun's apparent longitude
//! minus a multiple of 15° for a solar term, the Sun's longitude minus the
//! Moon's for a new moon.  Targets are reduced with `modpi` so the root at 0
//! is approached from both sides without a 2π jump.

use lc_astro::{moon_geocentric_longitude, sun_geocentric_longitude};
use lc_core::{JulianDay, Result, Settings};
use lc_math::modpi;
use lc_math::solvers1d::{fd_newton, NewtonControl};
use lc_time::{timescale, Date};
use std::f64::consts::PI;

/// Mean synodic month, in days.
pub const SYNODIC_MONTH: f64 = 29.53;

/// The 24 solar terms, numbered from the vernal equinox.
///
/// Term `k` is reached when the Sun's apparent longitude equals `k × 15°`.
/// Even-numbered terms are the principal terms (中气).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum SolarTerm {
    /// 春分, 0°.
    ChunFen = 0,
    /// 清明, 15°.
    QingMing,
    /// 谷雨, 30°.
    GuYu,
    /// 立夏, 45°.
    LiXia,
    /// 小满, 60°.
    XiaoMan,
    /// 芒种, 75°.
    MangZhong,
    /// 夏至, 90°.
    XiaZhi,
    /// 小暑, 105°.
    XiaoShu,
    /// 大暑, 120°.
    DaShu,
    /// 立秋, 135°.
    LiQiu,
    /// 处暑, 150°.
    ChuShu,
    /// 白露, 165°.
    BaiLu,
    /// 秋分, 180°.
    QiuFen,
    /// 寒露, 195°.
    HanLu,
    /// 霜降, 210°.
    ShuangJiang,
    /// 立冬, 225°.
    LiDong,
    /// 小雪, 240°.
    XiaoXue,
    /// 大雪, 255°.
    DaXue,
    /// 冬至, 270°.
    DongZhi,
    /// 小寒, 285°.
    XiaoHan,
    /// 大寒, 300°.
    DaHan,
    /// 立春, 315°.
    LiChun,
    /// 雨水, 330°.
    YuShui,
    /// 惊蛰, 345°.
    JingZhe,
}

impl SolarTerm {
    /// All terms in index order.
    pub const ALL: [SolarTerm; 24] = [
        SolarTerm::ChunFen,
        SolarTerm::QingMing,
        SolarTerm::GuYu,
        SolarTerm::LiXia,
        SolarTerm::XiaoMan,
        SolarTerm::MangZhong,
        SolarTerm::XiaZhi,
        SolarTerm::XiaoShu,
        SolarTerm::DaShu,
        SolarTerm::LiQiu,
        SolarTerm::ChuShu,
        SolarTerm::BaiLu,
        SolarTerm::QiuFen,
        SolarTerm::HanLu,
        SolarTerm::ShuangJiang,
        SolarTerm::LiDong,
        SolarTerm::XiaoXue,
        SolarTerm::DaXue,
        SolarTerm::DongZhi,
        SolarTerm::XiaoHan,
        SolarTerm::DaHan,
        SolarTerm::LiChun,
        SolarTerm::YuShui,
        SolarTerm::JingZhe,
    ];

    /// Term with the given index, wrapping modulo 24.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 24]
    }

    /// Index 0–23.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether this is a principal term (中气).
    pub fn is_principal(self) -> bool {
        self.index() % 2 == 0
    }

    /// The next term.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Target solar longitude, radians.
    pub fn longitude(self) -> f64 {
        self.index() as f64 * PI / 12.0
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        crate::naming::SOLAR_TERM_NAMES[self.index()]
    }

    /// Civil date near which the term falls in a typical year; the Newton
    /// seed.  Odd terms come early in the month, even ones late.
    fn nominal_month_day(self) -> (u8, u8) {
        let k = self.index();
        let month = ((k + 1) / 2 + 2) % 12 + 1;
        let day = if k % 2 == 0 { 20 } else { 6 };
        (month as u8, day)
    }
}

impl std::fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ── Solar terms ───────────────────────────────────────────────────────────────

/// Instant (TT) of `term` in Gregorian year `year`.
///
/// # Errors
/// [`lc_core::Error::NonConvergent`] if the solver fails, and
/// [`lc_core::Error::InvalidDate`] if `year` is outside the date range.
pub fn solar_term_tt(year: i32, term: SolarTerm, control: &NewtonControl) -> Result<JulianDay> {
    let (month, day) = term.nominal_month_day();
    let seed = Date::from_ymd(year, month, day)?.julian_day_number() as JulianDay;
    let target = term.longitude();
    fd_newton(|jd| modpi(sun_geocentric_longitude(jd) - target), seed, control)
}

/// 25 consecutive solar terms starting with `start` in `year`, in local
/// civil time.
///
/// The year advances after 冬至, so starting from 冬至 of `Y − 1` yields one
/// full cycle that closes on 冬至 of `Y`.
pub fn solar_terms_25(year: i32, start: SolarTerm, settings: &Settings) -> Result<[JulianDay; 25]> {
    let control = NewtonControl::from(settings);
    let offset = settings.utc_offset_days();
    let mut out = [0.0; 25];
    let mut term = start;
    let mut y = year;
    for slot in out.iter_mut() {
        *slot = timescale::tt_to_local(solar_term_tt(y, term, &control)?, offset);
        if term == SolarTerm::DongZhi {
            y += 1;
        }
        term = term.next();
    }
    Ok(out)
}

// ── New moons ─────────────────────────────────────────────────────────────────

/// Instant (TT) of the new moon nearest `seed` (TT).
pub fn new_moon_tt(seed: JulianDay, control: &NewtonControl) -> Result<JulianDay> {
    fd_newton(
        |jd| modpi(sun_geocentric_longitude(jd) - moon_geocentric_longitude(jd)),
        seed,
        control,
    )
}

/// 15 consecutive new moons from the one nearest `seed` (TT), in local
/// civil time.
pub fn new_moons_15(seed: JulianDay, settings: &Settings) -> Result<[JulianDay; 15]> {
    let control = NewtonControl::from(settings);
    let offset = settings.utc_offset_days();
    let mut out = [0.0; 15];
    let mut guess = seed;
    for slot in out.iter_mut() {
        let tt = new_moon_tt(guess, &control)?;
        *slot = timescale::tt_to_local(tt, offset);
        guess = tt + SYNODIC_MONTH;
    }
    Ok(out)
}
