//! Error types for lunisolar-rs.
//!
//! A single `thiserror`-derived enum covers every failure the engine can
//! report.  The `ensure!` and `fail!` macros are shorthands for the two most
//! common early returns.

use thiserror::Error;

/// The top-level error type used throughout lunisolar-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A civil date or time field is outside its calendar-valid range
    /// (for example day 31 in April).  Raised at the boundary, before any
    /// astronomical computation runs.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// The year lies outside the range where the ∆T model is reliable.
    ///
    /// Only raised by explicit strict checks; the lunar calendar itself
    /// degrades to best-effort output instead.
    #[error("year {year} is outside the supported range [{min}, {max}]")]
    YearOutOfSupportedRange {
        /// The offending year.
        year: i32,
        /// Lowest supported year.
        min: i32,
        /// Highest supported year.
        max: i32,
    },

    /// The root finder hit its iteration cap.  This indicates an internal
    /// invariant violation, not bad user input.
    #[error("root finder did not converge after {iterations} iterations (last step {last_step:e})")]
    NonConvergent {
        /// Number of iterations performed.
        iterations: u32,
        /// Size of the final Newton step.
        last_step: f64,
    },

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout lunisolar-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lc_core::{ensure, errors::Error};
/// fn positive(x: f64) -> lc_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use lc_core::{fail, errors::Error};
/// fn always_err() -> lc_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
