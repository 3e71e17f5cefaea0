//! `Frequency` and `Anchor` — how often an event repeats, and on which
//! calendar.

/// Repetition period of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Frequency {
    /// The event happens once.
    #[default]
    None,
    /// Every day.
    Daily,
    /// Every Monday to Friday.
    Workdays,
    /// Every seven days.
    Weekly,
    /// Same day of every month.
    Monthly,
    /// Same day of every year.
    Yearly,
}

impl Frequency {
    /// Whether the event repeats at all.
    pub fn is_recurring(self) -> bool {
        self != Frequency::None
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Frequency::None => "None",
            Frequency::Daily => "Daily",
            Frequency::Workdays => "Workdays",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Yearly => "Yearly",
        };
        write!(f, "{s}")
    }
}

/// Calendar whose month and day a periodic event keeps.
///
/// Only monthly and yearly repetition differ between the two; daily,
/// workday and weekly steps are the same civil days either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Anchor {
    /// Gregorian month and day.
    #[default]
    Solar,
    /// Lunar month (with its leap flag) and lunar day.
    Lunar,
}
