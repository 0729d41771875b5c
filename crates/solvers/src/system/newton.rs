//! Newton's method for nonlinear systems.
//!
//! # Algorithm
//!
//! Each iteration evaluates `F(x_k)` and the Jacobian `J(x_k)`, solves the
//! linear system
//!
//! ```text
//! J(x_k) · s = −F(x_k)
//! ```
//!
//! with [`Lu::factor`], and steps to `x_{k+1} = x_k + s`. The iteration stops
//! when `‖s‖₂ < step_tol`.
//!
//! The Jacobian is supplied by the caller, either analytically or through
//! [`ForwardDifference`](numera_core::ForwardDifference). A zero pivot in the
//! linear solve is reported as [`Error::SingularJacobian`] together with the
//! iterate at which it occurred.

mod config;
mod error;
mod event;
mod solution;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use ndarray::Array1;

use numera_core::{Jacobian, Observer, VectorFunction, matrix};

use crate::linear::lu::{self, Lu};

/// Control actions supported by the multivariate Newton solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the latest iterate.
    StopEarly,
}

/// Solves `F(x) = 0` from `x0` using Newton's method.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, `F` or `J` return values of the
/// wrong shape or non-finite entries, either function fails, or a Jacobian
/// is singular.
pub fn solve<F, J, Obs>(
    f: &F,
    jacobian: &J,
    x0: Array1<f64>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: VectorFunction,
    J: Jacobian,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    if !x0.iter().all(|v| v.is_finite()) {
        return Err(Error::NonFiniteGuess);
    }

    let n = x0.len();
    let mut x = x0;
    let mut residual = evaluate_residual(f, &x, f64::INFINITY, 0)?;
    let mut step_norm = f64::INFINITY;

    for iter in 1..=config.max_iters() {
        let jac = jacobian.call(&x).map_err(|e| Error::function(e, iter))?;
        let (rows, cols) = jac.dim();
        if rows != n || cols != n {
            return Err(Error::JacobianShape {
                expected: n,
                rows,
                cols,
                iter,
            });
        }
        if !jac.iter().all(|v| v.is_finite()) {
            return Err(Error::NonFinite {
                x,
                residual_norm: matrix::norm_2(&residual),
                iter,
            });
        }

        let step = Lu::factor(jac)
            .and_then(|lu| lu.solve(&residual.mapv(|r| -r)))
            .map_err(|err| match err {
                lu::Error::ZeroPivot { .. } => Error::SingularJacobian {
                    x: x.clone(),
                    iter,
                    residual_norm: matrix::norm_2(&residual),
                },
                other => Error::Linear(other),
            })?;

        let next = &x + &step;
        if !next.iter().all(|v| v.is_finite()) {
            return Err(Error::NonFinite {
                x,
                residual_norm: matrix::norm_2(&residual),
                iter,
            });
        }
        let last_residual_norm = matrix::norm_2(&residual);
        x = next;
        step_norm = matrix::norm_2(&step);
        residual = evaluate_residual(f, &x, last_residual_norm, iter)?;

        let event = Event {
            iter,
            x: &x,
            residual: &residual,
            step_norm,
        };

        let status = if let Some(Action::StopEarly) = observer.observe(&event) {
            Some(Status::StoppedByObserver)
        } else if step_norm < config.step_tol() {
            Some(Status::Converged)
        } else {
            None
        };

        if let Some(status) = status {
            return Ok(Solution::new(status, x, &residual, step_norm, iter));
        }
    }

    Ok(Solution::new(
        Status::MaxIters,
        x,
        &residual,
        step_norm,
        config.max_iters(),
    ))
}

/// Runs Newton's method without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F, J>(
    f: &F,
    jacobian: &J,
    x0: Array1<f64>,
    config: &Config,
) -> Result<Solution, Error>
where
    F: VectorFunction,
    J: Jacobian,
{
    solve(f, jacobian, x0, config, ())
}

/// Evaluates `F(x)` and checks its length and finiteness.
///
/// `last_residual_norm` is reported if `F(x)` is not finite.
fn evaluate_residual<F: VectorFunction>(
    f: &F,
    x: &Array1<f64>,
    last_residual_norm: f64,
    iter: usize,
) -> Result<Array1<f64>, Error> {
    let value = f.call(x).map_err(|e| Error::function(e, iter))?;
    if value.len() != x.len() {
        return Err(Error::DimensionMismatch {
            expected: x.len(),
            found: value.len(),
            iter,
        });
    }
    if !value.iter().all(|v| v.is_finite()) {
        return Err(Error::NonFinite {
            x: x.clone(),
            residual_norm: last_residual_norm,
            iter,
        });
    }
    Ok(value)
}
