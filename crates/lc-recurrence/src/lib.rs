//! # lc-recurrence
//!
//! Expansion of repeating calendar events into concrete occurrences.
//!
//! An [`Event`] carries its first instance and a [`RecurrenceRule`].
//! [`expand_recurrence`] lists the instances touching a [`QueryWindow`].
//! Monthly and yearly rules may keep either the Gregorian day or the lunar
//! day of the first instance; the lunar case reads the month layout from a
//! [`LunarCalendar`](lc_lunar::LunarCalendar).
//!
//! ```no_run
//! use lc_lunar::LunarCalendar;
//! use lc_recurrence::{
//!     expand_recurrence, Anchor, Event, Frequency, Granularity, QueryWindow, RecurrenceRule,
//! };
//! use lc_time::DateTime;
//!
//! # fn main() -> lc_core::Result<()> {
//! let calendar = LunarCalendar::default();
//! let start = DateTime::new(2023, 1, 22, 8, 0, 0)?;
//! let rule = RecurrenceRule::new(Frequency::Yearly).with_anchor(Anchor::Lunar);
//! let event = Event::new(start, start.add_seconds(3_600), rule)?;
//! let window = QueryWindow::new(start, DateTime::new(2032, 12, 31, 23, 59, 59)?);
//! let spring_festivals = expand_recurrence(&calendar, &event, &window, Granularity::Span)?;
//! assert_eq!(spring_festivals.len(), 10);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Event` and `Occurrence`.
pub mod event;

/// `expand_recurrence`, `bucket_by_day`.
pub mod expand;

/// `Frequency` and `Anchor`.
pub mod frequency;

/// `QueryWindow`, `Granularity`, `QueryKind`.
pub mod query;

/// `RecurrenceRule` and `Termination`.
pub mod rule;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use event::{Event, Occurrence};
pub use expand::{bucket_by_day, expand_query, expand_recurrence};
pub use frequency::{Anchor, Frequency};
pub use query::{Granularity, QueryKind, QueryWindow};
pub use rule::{RecurrenceRule, Termination};
