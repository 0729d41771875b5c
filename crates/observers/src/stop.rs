//! Early-stopping rules.

use numera_core::Observer;

use crate::traits::{CanStopEarly, HasResidual};

/// Stops a solver once the residual drops below a target.
///
/// Useful when `|f(x)|` small enough matters more than the solver's own
/// step or width criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualTarget {
    tolerance: f64,
    min_iters: usize,
    seen: usize,
}

impl ResidualTarget {
    /// Creates a rule that stops when the residual is below `tolerance`.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            min_iters: 0,
            seen: 0,
        }
    }

    /// Requires at least `min_iters` events before stopping.
    #[must_use]
    pub fn min_iters(mut self, min_iters: usize) -> Self {
        self.min_iters = min_iters;
        self
    }
}

impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for ResidualTarget {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.seen += 1;
        if self.seen >= self.min_iters && event.residual() < self.tolerance {
            return Some(A::stop_early());
        }
        None
    }
}
