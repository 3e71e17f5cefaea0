//! `RecurrenceRule` — frequency, anchor, termination and exclusions.

use crate::frequency::{Anchor, Frequency};
use lc_time::DateTime;
use std::collections::BTreeSet;

/// When a recurring event stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// Repeats indefinitely.
    #[default]
    Never,
    /// Stops after this many instances, counted from the event start.
    /// Excluded instances still count.
    Count(u32),
    /// No instance starts after this instant.
    Until(DateTime),
}

/// How an event repeats.
///
/// ```
/// use lc_recurrence::{Anchor, Frequency, RecurrenceRule, Termination};
///
/// let rule = RecurrenceRule::new(Frequency::Yearly)
///     .with_anchor(Anchor::Lunar)
///     .with_termination(Termination::Count(10));
/// assert!(rule.is_recurring());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecurrenceRule {
    /// Repetition period.
    pub frequency: Frequency,
    /// Calendar kept by monthly and yearly repetition.
    pub anchor: Anchor,
    /// End of the series.
    pub termination: Termination,
    /// Instance starts removed from the series.
    pub exclusions: BTreeSet<DateTime>,
}

impl RecurrenceRule {
    /// A rule with the given frequency, solar anchor and no end.
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            ..Self::default()
        }
    }

    /// A non-repeating rule.
    pub fn once() -> Self {
        Self::default()
    }

    /// Set the anchor calendar.
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the termination.
    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    /// Exclude the instance starting at `start`.
    pub fn with_exclusion(mut self, start: DateTime) -> Self {
        self.exclusions.insert(start);
        self
    }

    /// Whether the rule repeats.
    pub fn is_recurring(&self) -> bool {
        self.frequency.is_recurring()
    }

    /// Whether the instance starting at `start` is excluded.
    pub fn is_excluded(&self, start: DateTime) -> bool {
        self.exclusions.contains(&start)
    }
}
