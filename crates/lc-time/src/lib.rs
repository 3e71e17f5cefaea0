//! # lc-time
//!
//! Civil dates and times on the proleptic Gregorian calendar, Julian day
//! conversions, and the ∆T model that links Terrestrial Time to UTC.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `DateTime` — a date plus a time of day.
pub mod datetime;

/// ∆T = TT − UTC polynomial model.
pub mod delta_t;

/// Julian day epochs and Julian century / millennium fractions.
pub mod julian;

/// Conversions between Terrestrial Time, UTC, and local civil time.
pub mod timescale;

/// `TimeUnit` — days, weeks, months, years.
pub mod time_unit;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use datetime::DateTime;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
