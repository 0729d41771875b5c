use num_complex::Complex64;

use super::{Event, Status};

/// The result of a Müller solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Last iterate, possibly complex.
    pub x: Complex64,

    /// Function value at `x`.
    pub value: Complex64,

    /// Relative step that produced `x`.
    pub rel_error: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,

    imag_tol: f64,
}

impl Solution {
    pub(super) fn new(
        status: Status,
        x: Complex64,
        value: Complex64,
        rel_error: f64,
        iters: usize,
        imag_tol: f64,
    ) -> Self {
        Self {
            status,
            x,
            value,
            rel_error,
            iters,
            imag_tol,
        }
    }

    pub(super) fn exact_start(x: Complex64, imag_tol: f64) -> Self {
        Self::new(Status::Converged, x, Complex64::default(), 0.0, 0, imag_tol)
    }

    pub(super) fn from_event(event: &Event, status: Status, imag_tol: f64) -> Self {
        Self::new(
            status,
            event.x,
            event.value,
            event.rel_error,
            event.iter,
            imag_tol,
        )
    }

    /// Returns the real part of the estimate if its imaginary part is
    /// negligible relative to the configured tolerance.
    #[must_use]
    pub fn real(&self) -> Option<f64> {
        let scale = self.x.re.abs().max(1.0);
        (self.x.im.abs() <= self.imag_tol * scale).then_some(self.x.re)
    }

    /// Returns true if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
