//! `Event` and `Occurrence`.

use crate::rule::RecurrenceRule;
use lc_core::ensure;
use lc_core::errors::Result;
use lc_time::DateTime;

/// A calendar event: its first instance plus a recurrence rule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Start of the first instance, local civil time.
    pub start: DateTime,
    /// End of the first instance.
    pub end: DateTime,
    /// Repetition.
    pub rule: RecurrenceRule,
}

impl Event {
    /// Create an event.
    ///
    /// # Errors
    /// [`Error::Precondition`](lc_core::Error::Precondition) if `end` is
    /// before `start`.
    pub fn new(start: DateTime, end: DateTime, rule: RecurrenceRule) -> Result<Self> {
        ensure!(end >= start, "event ends ({end}) before it starts ({start})");
        Ok(Self { start, end, rule })
    }

    /// A non-repeating event.
    pub fn once(start: DateTime, end: DateTime) -> Result<Self> {
        Self::new(start, end, RecurrenceRule::once())
    }

    /// Length of every instance in seconds.
    pub fn duration_seconds(&self) -> i64 {
        self.start.seconds_until(self.end)
    }
}

/// One concrete instance (or one day's piece of an instance) of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Occurrence {
    /// Start instant.
    pub start: DateTime,
    /// End instant.
    pub end: DateTime,
    /// Start of the whole instance this piece was cut from.
    pub recurrence_start: DateTime,
}

impl Occurrence {
    /// An occurrence that is a whole instance.
    pub fn new(start: DateTime, end: DateTime) -> Self {
        Self {
            start,
            end,
            recurrence_start: start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lc_core::Error;

    #[test]
    fn end_must_not_precede_start() {
        let a = DateTime::new(2024, 1, 1, 10, 0, 0).unwrap();
        let b = DateTime::new(2024, 1, 1, 11, 30, 0).unwrap();
        assert_eq!(Event::once(a, b).unwrap().duration_seconds(), 5_400);
        assert!(Event::once(a, a).is_ok());
        assert!(matches!(Event::once(b, a), Err(Error::Precondition(_))));
    }
}
