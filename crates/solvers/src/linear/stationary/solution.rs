use ndarray::Array1;

use super::Diagnostics;

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The relative change dropped below the tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Jacobi or Gauss-Seidel solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Last iterate.
    pub x: Array1<f64>,

    /// Number of sweeps performed.
    pub iters: usize,

    /// Relative change of the last sweep (infinite if none ran).
    pub rel_error: f64,

    /// `‖b − Ax‖∞` at `x`.
    pub residual_norm: f64,

    /// Convergence indicators for the splitting.
    pub diagnostics: Diagnostics,
}

impl Solution {
    /// Returns true if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
