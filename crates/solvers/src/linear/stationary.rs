//! The shared driver for the stationary iterative methods.
//!
//! [`jacobi`](super::jacobi) and [`gauss_seidel`](super::gauss_seidel) differ
//! only in their sweep. Jacobi computes every component from the previous
//! iterate. Gauss-Seidel overwrites components in place, so row `i` already
//! sees the new values of rows `0..i` from the same sweep.
//!
//! # Termination
//!
//! - [`Status::Converged`] — `‖x_{k+1} − x_k‖∞ / ‖x_{k+1}‖∞ < rel_tol`
//! - [`Status::MaxIters`] — the budget ran out; the last iterate is returned
//! - [`Status::StoppedByObserver`] — an observer returned [`Action::StopEarly`]
//!
//! Every solution carries the splitting [`Diagnostics`], including any
//! [`ConvergenceWarning`]s. Warnings never stop the solve.

mod action;
mod config;
mod error;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

pub use super::splitting::{ConvergenceWarning, Diagnostics, Method};

use ndarray::{Array1, ArrayBase, Data, Ix1, Ix2};

use numera_core::{Observer, matrix};

use super::splitting;

/// Runs `method` on `Ax = b` from `x0`.
pub(crate) fn iterate<S1, S2, Obs>(
    method: Method,
    a: &ArrayBase<S1, Ix2>,
    b: &ArrayBase<S2, Ix1>,
    x0: Array1<f64>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let n = matrix::ensure_square(a)?;
    matrix::ensure_len(b, n)?;
    matrix::ensure_len(&x0, n)?;
    if !x0.iter().all(|v| v.is_finite()) {
        return Err(Error::NonFiniteGuess);
    }

    let diagnostics = splitting::analyze(a, method)?.diagnostics().clone();

    let mut x = x0;
    let mut previous = x.clone();
    let mut rel_error = f64::INFINITY;
    let mut residual_norm = matrix::norm_inf(&matrix::residual(a, &x, b));

    for iter in 1..=config.max_iters() {
        previous.assign(&x);
        match method {
            Method::Jacobi => jacobi_sweep(a, b, &previous, &mut x),
            Method::GaussSeidel => gauss_seidel_sweep(a, b, &mut x),
        }
        if !x.iter().all(|v| v.is_finite()) {
            return Err(Error::NonFinite {
                last: previous,
                residual_norm,
                iter,
            });
        }

        rel_error = relative_change(&previous, &x);
        residual_norm = matrix::norm_inf(&matrix::residual(a, &x, b));

        let event = Event {
            iter,
            x: &x,
            residual_norm,
            rel_error,
        };

        let status = if let Some(Action::StopEarly) = observer.observe(&event) {
            Some(Status::StoppedByObserver)
        } else if rel_error < config.rel_tol() {
            Some(Status::Converged)
        } else {
            None
        };

        if let Some(status) = status {
            return Ok(Solution {
                status,
                x,
                iters: iter,
                rel_error,
                residual_norm,
                diagnostics,
            });
        }
    }

    Ok(Solution {
        status: Status::MaxIters,
        x,
        iters: config.max_iters(),
        rel_error,
        residual_norm,
        diagnostics,
    })
}

/// One synchronous sweep: every component reads only `previous`.
fn jacobi_sweep<S1, S2>(
    a: &ArrayBase<S1, Ix2>,
    b: &ArrayBase<S2, Ix1>,
    previous: &Array1<f64>,
    x: &mut Array1<f64>,
) where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    let n = b.len();
    for i in 0..n {
        let off_diagonal: f64 = (0..n)
            .filter(|&j| j != i)
            .map(|j| a[[i, j]] * previous[j])
            .sum();
        x[i] = (b[i] - off_diagonal) / a[[i, i]];
    }
}

/// One in-place sweep: row `i` reads the updated values of rows `0..i`.
fn gauss_seidel_sweep<S1, S2>(a: &ArrayBase<S1, Ix2>, b: &ArrayBase<S2, Ix1>, x: &mut Array1<f64>)
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    let n = b.len();
    for i in 0..n {
        let off_diagonal: f64 = (0..n)
            .filter(|&j| j != i)
            .map(|j| a[[i, j]] * x[j])
            .sum();
        x[i] = (b[i] - off_diagonal) / a[[i, i]];
    }
}

/// Relative change `‖x − previous‖∞ / ‖x‖∞`, or the absolute change when
/// `x` is zero.
#[allow(clippy::float_cmp)]
fn relative_change(previous: &Array1<f64>, x: &Array1<f64>) -> f64 {
    let step = matrix::norm_inf(&(x - previous));
    let scale = matrix::norm_inf(x);
    if scale == 0.0 { step } else { step / scale }
}
