//! # lc-lunar
//!
//! The Chinese lunisolar calendar: the 24 solar terms, lunar months with
//! leap-month placement, sexagenary names, and festivals.
//!
//! [`LunarCalendar`] is the entry point.  Year tables are built on demand
//! and kept in a [`YearCache`] that several calendars may share.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Compute-once cache of year tables.
pub mod cache;

/// `LunarCalendar` — day lookups, month grids, festival ranges.
pub mod calendar;

/// Solar and lunar festival tables.
pub mod festival;

/// `LunarYear` — the lunar months spanning one Gregorian year.
pub mod lunar_year;

/// Stem-branch, zodiac, month and day names.
pub mod naming;

/// The 24 solar terms and new-moon search.
pub mod solar_terms;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use cache::YearCache;
pub use calendar::{DayFestivals, LunarCalendar, LunarMonthTable, NamedLunarDay};
pub use lunar_year::{LunarDayInfo, LunarMonthRecord, LunarYear};
pub use solar_terms::SolarTerm;
