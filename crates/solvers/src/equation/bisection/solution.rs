/// Indicates how the bisection solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket width dropped below the tolerance.
    Converged,

    /// The function evaluated to exactly zero.
    ExactHit,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the root.
    pub x: f64,

    /// Function value at `x`.
    pub value: f64,

    /// Width of the final bracket, an upper bound on the error in `x`.
    pub width: f64,

    /// Number of midpoint evaluations performed.
    pub iters: usize,

    /// Iterations the initial bracket needs to reach the tolerance.
    pub required_iters: usize,
}

impl Solution {
    /// Solution for a bracket endpoint that is already a root.
    pub(super) fn exact_endpoint(x: f64, width: f64, required_iters: usize) -> Self {
        Self {
            status: Status::ExactHit,
            x,
            value: 0.0,
            width,
            iters: 0,
            required_iters,
        }
    }

    /// Returns true if the solve ended on a root estimate within tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self.status, Status::Converged | Status::ExactHit)
    }
}
