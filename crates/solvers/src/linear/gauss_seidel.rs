//! Gauss-Seidel iteration for `Ax = b`.
//!
//! # Algorithm
//!
//! With the splitting `M` = lower triangle of `A`, each sweep updates the
//! iterate in place, so row `i` uses the components of rows `0..i` already
//! computed in the same sweep:
//!
//! ```text
//! x_i^{(k+1)} = (b_i − Σ_{j<i} a_ij x_j^{(k+1)} − Σ_{j>i} a_ij x_j^{(k)}) / a_ii
//! ```
//!
//! For strictly diagonally dominant `A` it needs no more sweeps than
//! [`jacobi`](super::jacobi). See [`stationary`] for termination and
//! diagnostics.

pub use super::stationary::{
    Action, Config, ConfigError, ConvergenceWarning, Diagnostics, Error, Event, Solution, Status,
};

use ndarray::{Array1, ArrayBase, Data, Ix1, Ix2};

use numera_core::Observer;

use super::stationary::{self, Method};

/// Solves `Ax = b` by Gauss-Seidel iteration from `x0`.
///
/// # Errors
///
/// Returns an error if the shapes do not fit, `A` has a zero diagonal entry,
/// or the iteration overflows.
pub fn solve<S1, S2, Obs>(
    a: &ArrayBase<S1, Ix2>,
    b: &ArrayBase<S2, Ix1>,
    x0: Array1<f64>,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    stationary::iterate(Method::GaussSeidel, a, b, x0, config, observer)
}

/// Runs Gauss-Seidel iteration without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<S1, S2>(
    a: &ArrayBase<S1, Ix2>,
    b: &ArrayBase<S2, Ix1>,
    x0: Array1<f64>,
    config: &Config,
) -> Result<Solution, Error>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    solve(a, b, x0, config, ())
}
