//! Engine settings.
//!
//! [`Settings`] is a plain value handed to the lunar calendar and the
//! recurrence engine at construction time.  There is no process-wide
//! instance: two calendars with different settings can live side by side.

use crate::errors::{Error, Result};
use crate::Real;

/// Offset of China Standard Time from UTC, in minutes.
pub const CHINA_STANDARD_TIME_OFFSET: i32 = 8 * 60;

/// Tunable parameters of the engine.
///
/// The defaults reproduce the traditional Chinese calendar as published in
/// China (UTC+8, solar terms and new moons resolved to well below a second).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Offset of the calendar's civil time zone from UTC, in minutes.
    pub utc_offset_minutes: i32,
    /// Absolute convergence threshold of the root finder, in days.
    pub solver_accuracy: Real,
    /// Central-difference step used to estimate derivatives, in days.
    pub solver_step: Real,
    /// Iteration cap of the root finder.
    pub solver_max_iterations: u32,
    /// Hard upper bound on generated occurrences per recurrence expansion.
    pub max_occurrences: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            utc_offset_minutes: CHINA_STANDARD_TIME_OFFSET,
            solver_accuracy: 1.0e-7,
            solver_step: 5.0e-6,
            solver_max_iterations: 50,
            max_occurrences: 3650,
        }
    }
}

impl Settings {
    /// Default settings (UTC+8).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the civil time zone offset, in minutes east of UTC.
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// Set the solver's absolute accuracy, in days.
    pub fn with_solver_accuracy(mut self, accuracy: Real) -> Self {
        self.solver_accuracy = accuracy;
        self
    }

    /// Set the central-difference step, in days.
    pub fn with_solver_step(mut self, step: Real) -> Self {
        self.solver_step = step;
        self
    }

    /// Set the solver iteration cap.
    pub fn with_solver_max_iterations(mut self, n: u32) -> Self {
        self.solver_max_iterations = n;
        self
    }

    /// Set the per-expansion occurrence cap.
    pub fn with_max_occurrences(mut self, n: usize) -> Self {
        self.max_occurrences = n;
        self
    }

    /// Civil time zone offset as a fraction of a day.
    pub fn utc_offset_days(&self) -> Real {
        self.utc_offset_minutes as Real / 1440.0
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<()> {
        if self.utc_offset_minutes.abs() > 14 * 60 {
            return Err(Error::InvalidArgument(format!(
                "utc_offset_minutes must lie in [-840, 840], got {}",
                self.utc_offset_minutes
            )));
        }
        if !(self.solver_accuracy.is_finite() && self.solver_accuracy > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "solver_accuracy must be positive, got {}",
                self.solver_accuracy
            )));
        }
        if !(self.solver_step.is_finite() && self.solver_step > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "solver_step must be positive, got {}",
                self.solver_step
            )));
        }
        if self.solver_max_iterations == 0 {
            return Err(Error::InvalidArgument(
                "solver_max_iterations must be at least 1".into(),
            ));
        }
        if self.max_occurrences == 0 {
            return Err(Error::InvalidArgument(
                "max_occurrences must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let s = Settings::default();
        assert_eq!(s.utc_offset_minutes, 480);
        assert_eq!(s.solver_max_iterations, 50);
        assert_eq!(s.max_occurrences, 3650);
        assert!(s.validate().is_ok());
        assert!((s.utc_offset_days() - 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn builder_overrides() {
        let s = Settings::new()
            .with_utc_offset_minutes(0)
            .with_solver_accuracy(1e-9)
            .with_solver_step(1e-5)
            .with_solver_max_iterations(10)
            .with_max_occurrences(5);
        assert_eq!(s.utc_offset_minutes, 0);
        assert_eq!(s.solver_accuracy, 1e-9);
        assert_eq!(s.solver_step, 1e-5);
        assert_eq!(s.solver_max_iterations, 10);
        assert_eq!(s.max_occurrences, 5);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(Settings::new().with_utc_offset_minutes(900).validate().is_err());
        assert!(Settings::new().with_solver_accuracy(0.0).validate().is_err());
        assert!(Settings::new().with_solver_step(f64::NAN).validate().is_err());
        assert!(Settings::new().with_solver_max_iterations(0).validate().is_err());
        assert!(Settings::new().with_max_occurrences(0).validate().is_err());
    }
}
