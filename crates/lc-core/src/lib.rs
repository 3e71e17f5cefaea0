//! # lc-core
//!
//! Core types, settings, and error definitions for lunisolar-rs.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace: primitive type aliases, the error
//! hierarchy, and the engine [`Settings`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Engine settings (time zone offset, solver tolerances, recurrence cap).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A Julian Day, fractional.  Whether it is expressed in Terrestrial Time,
/// UTC, or local civil time depends on the context it is used in.
pub type JulianDay = Real;

/// An angle in radians.
pub type Radians = Real;

/// Alias used for array sizes / indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::Settings;
