//! # lunisolar
//!
//! The traditional Chinese lunisolar calendar, computed from the positions
//! of the Sun and Moon, and recurrence expansion for events that repeat on
//! either the Gregorian or the lunar calendar.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `lc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! lunisolar = "0.1"
//! ```
//!
//! ```rust,no_run
//! use lunisolar::lunar::LunarCalendar;
//!
//! let calendar = LunarCalendar::default();
//! let day = calendar.lunar_info_for_date(2023, 1, 22).unwrap();
//! assert_eq!(day.month_name, "正月");
//! assert_eq!(day.day_name, "初一");
//! assert_eq!(day.lunar_festival, "春节");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, settings, and error definitions.
pub use lc_core as core;

/// Date, date-time, Julian day, and ∆T types.
pub use lc_time as time;

/// Angle helpers and root finders.
pub use lc_math as math;

/// Solar and lunar ephemeris.
pub use lc_astro as astro;

/// Lunar calendar: solar terms, lunar months, names, festivals.
pub use lc_lunar as lunar;

/// Event recurrence expansion.
pub use lc_recurrence as recurrence;
