//! Query windows and result granularity.

use lc_time::DateTime;

/// Closed interval of instants a query covers.
///
/// A window whose start is after its end is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryWindow {
    /// First instant.
    pub start: DateTime,
    /// Last instant.
    pub end: DateTime,
}

impl QueryWindow {
    /// A window from `start` to `end`, both included.
    pub fn new(start: DateTime, end: DateTime) -> Self {
        Self { start, end }
    }

    /// Whether the window contains no instant.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Whether the closed span `start..=end` touches the window.
    pub fn intersects(&self, start: DateTime, end: DateTime) -> bool {
        !(end < self.start || start > self.end)
    }
}

/// Shape of the occurrences a query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Granularity {
    /// One occurrence per instance, whatever its length.
    #[default]
    Span,
    /// Instances spanning several civil days are cut into one piece per day.
    PerDay,
}

/// What kind of request a query answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QueryKind {
    /// A display query over a range of days.
    Plain,
    /// A request to move an instance from one start to another.
    Change {
        /// Current start of the instance.
        from: DateTime,
        /// Requested start.
        to: DateTime,
    },
}

impl QueryKind {
    /// Granularity this kind of query expects.
    pub fn granularity(&self) -> Granularity {
        match self {
            QueryKind::Plain => Granularity::PerDay,
            QueryKind::Change { .. } => Granularity::Span,
        }
    }
}
