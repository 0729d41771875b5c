use super::Event;

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The relative step dropped below the tolerance, or `f(x)` was exactly zero.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an open root-finding solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Last iterate.
    pub x: f64,

    /// Function value at `x`.
    pub value: f64,

    /// Relative step that produced `x`.
    pub rel_error: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    /// Solution for a starting guess that is already an exact root.
    pub(crate) fn exact_start(x: f64) -> Self {
        Self {
            status: Status::Converged,
            x,
            value: 0.0,
            rel_error: 0.0,
            iters: 0,
        }
    }

    /// Builds a solution from the latest event.
    pub(crate) fn from_event(event: &Event, status: Status) -> Self {
        Self {
            status,
            x: event.x,
            value: event.value,
            rel_error: event.rel_error,
            iters: event.iter,
        }
    }

    /// Returns true if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
