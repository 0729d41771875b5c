//! Logging observer backed by `tracing`.
//!
//! Each observed event becomes one `debug` event under the `numera` target,
//! with the iteration fields attached as structured values. Install any
//! `tracing` subscriber to see them.

use std::fmt::Debug;

use tracing::{debug, info};

use numera_core::Observer;

use crate::traits::Recordable;

/// An observer that logs every iteration and never intervenes.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    solver: &'static str,
}

impl Logger {
    /// Creates a logger that tags its events with `solver`.
    #[must_use]
    pub fn new(solver: &'static str) -> Self {
        Self { solver }
    }

    /// Returns the solver tag.
    #[must_use]
    pub fn solver(&self) -> &'static str {
        self.solver
    }

    /// Logs the outcome of a finished solve at `info` level.
    pub fn finished<S: Debug>(&self, status: S, iters: usize) {
        info!(target: "numera", solver = self.solver, ?status, iters, "solve finished");
    }
}

impl<E, A> Observer<E, A> for Logger
where
    E: Recordable,
    E::Estimate: Debug,
    E::Value: Debug,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let it = event.iteration();
        debug!(
            target: "numera",
            solver = self.solver,
            iter = it.index,
            estimate = ?it.estimate,
            value = ?it.value,
            error = it.error,
            "iteration"
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use numera_solvers::{equation::secant, linear::jacobi};

    #[test]
    fn logging_does_not_change_the_result() {
        let f = |x: f64| x * x - 2.0;
        let config = secant::Config::default();

        let logged = secant::solve(&f, [1.0, 2.0], &config, Logger::new("secant")).unwrap();
        let silent = secant::solve_unobserved(&f, [1.0, 2.0], &config).unwrap();

        assert_eq!(logged, silent);
    }

    #[test]
    fn logs_vector_solvers() {
        let a = ndarray::array![[4.0, 1.0], [1.0, 3.0]];
        let b = ndarray::array![1.0, 2.0];
        let logger = Logger::new("jacobi");

        let solution = jacobi::solve(
            &a,
            &b,
            ndarray::array![0.0, 0.0],
            &jacobi::Config::default(),
            logger,
        )
        .unwrap();
        logger.finished(solution.status, solution.iters);

        assert!(solution.is_converged());
        assert_eq!(logger.solver(), "jacobi");
    }
}
