//! # lc-math
//!
//! Numerical building blocks: angle normalisation and unit conversion, and
//! the one-dimensional Newton solvers used to locate solar terms and new
//! moons.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Angle normalisation and unit conversion.
pub mod angle;

/// 1D root-finding solvers.
pub mod solvers1d;

pub use angle::{mod2pi, modpi};
