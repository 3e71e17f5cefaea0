//! 1D root-finding solvers.
//!
//! The ephemeris targets (Sun longitude minus a solar-term angle, Sun
//! longitude minus Moon longitude) are smooth and have no convenient
//! analytic derivative, so [`fd_newton`] estimates it by central
//! differences.  The solver gives up after a configurable number of
//! iterations and reports [`Error::NonConvergent`].

use lc_core::{
    errors::{Error, Result},
    Real, Settings,
};
use tracing::trace;

/// Controls for [`fd_newton`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonControl {
    /// Stop when a Newton step is smaller than this (absolute).
    pub accuracy: Real,
    /// Half-width of the central difference.
    pub step: Real,
    /// Iteration cap.
    pub max_iterations: u32,
}

impl Default for NewtonControl {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for NewtonControl {
    fn from(s: &Settings) -> Self {
        Self {
            accuracy: s.solver_accuracy,
            step: s.solver_step,
            max_iterations: s.solver_max_iterations,
        }
    }
}

// ── Finite-Difference Newton ──────────────────────────────────────────────────

/// Newton iteration with a central-difference derivative.
///
/// `x ← x − f(x) / ((f(x + h) − f(x − h)) / 2h)` until the step is smaller
/// than `control.accuracy`.  The caller must seed `x0` within the basin of
/// the wanted root; there is no bracketing.
///
/// # Errors
/// [`Error::NonConvergent`] when the iteration cap is reached, or when the
/// derivative estimate vanishes or is not finite.
pub fn fd_newton<F>(f: F, x0: Real, control: &NewtonControl) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    let h = control.step;
    let mut x = x0;
    let mut last_step = Real::INFINITY;

    for i in 0..control.max_iterations {
        let fx = f(x);
        let dfx = (f(x + h) - f(x - h)) / (2.0 * h);
        if !(dfx.is_finite() && fx.is_finite()) || dfx == 0.0 {
            return Err(Error::NonConvergent {
                iterations: i + 1,
                last_step,
            });
        }
        let step = fx / dfx;
        x -= step;
        last_step = step.abs();
        trace!(iteration = i, x, step, "fd_newton");
        if last_step < control.accuracy {
            return Ok(x);
        }
    }
    Err(Error::NonConvergent {
        iterations: control.max_iterations,
        last_step,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fd_newton_sqrt2() {
        let root = fd_newton(|x| x * x - 2.0, 1.5, &NewtonControl::default()).unwrap();
        assert!((root - 2.0_f64.sqrt()).abs() < 1e-9, "got {root}");
    }

    #[test]
    fn fd_newton_periodic_target() {
        // sin has roots every π; seeding near 3 must find π.
        let root = fd_newton(f64::sin, 3.0, &NewtonControl::default()).unwrap();
        assert!((root - std::f64::consts::PI).abs() < 1e-9, "got {root}");
    }

    #[test]
    fn fd_newton_reports_non_convergence() {
        // No real root: x² + 1.
        let control = NewtonControl {
            max_iterations: 20,
            ..NewtonControl::default()
        };
        let err = fd_newton(|x| x * x + 1.0, 0.5, &control).unwrap_err();
        assert!(matches!(err, Error::NonConvergent { .. }), "{err:?}");
    }

    #[test]
    fn fd_newton_flat_derivative() {
        let err = fd_newton(|_| 1.0, 0.0, &NewtonControl::default()).unwrap_err();
        assert!(matches!(err, Error::NonConvergent { iterations: 1, .. }));
    }

    #[test]
    fn control_from_settings() {
        let s = Settings::new().with_solver_max_iterations(7);
        let c = NewtonControl::from(&s);
        assert_eq!(c.max_iterations, 7);
        assert_eq!(c.step, 5e-6);
        assert_eq!(c.accuracy, 1e-7);
    }
}
