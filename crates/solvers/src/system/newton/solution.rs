use ndarray::Array1;

use numera_core::matrix;

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The step norm dropped below the tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a multivariate Newton solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Last iterate.
    pub x: Array1<f64>,

    /// `F(x)`.
    pub residual: Array1<f64>,

    /// `‖F(x)‖₂`.
    pub residual_norm: f64,

    /// `‖s‖₂` of the last step (infinite if none was taken).
    pub step_norm: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    pub(super) fn new(
        status: Status,
        x: Array1<f64>,
        residual: &Array1<f64>,
        step_norm: f64,
        iters: usize,
    ) -> Self {
        Self {
            status,
            x,
            residual_norm: matrix::norm_2(residual),
            residual: residual.clone(),
            step_norm,
            iters,
        }
    }

    /// Returns true if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
