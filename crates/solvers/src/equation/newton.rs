//! Newton-Raphson for scalar root finding.
//!
//! # Algorithm
//!
//! ```text
//! x_{k+1} = x_k − f(x_k) / f′(x_k)
//! ```
//!
//! Convergence is quadratic near a simple root, but nothing is guaranteed for
//! a poor starting guess: the iteration may diverge, cycle, or land where the
//! derivative vanishes. The derivative is checked at every iteration and a
//! value with `|f′| <= zero_tol` fails with [`Error::ZeroDerivative`].
//!
//! The derivative is supplied by the caller as a second [`Function`].

pub use super::open::{Action, Config, ConfigError, Error, Event, Solution, Status};

use numera_core::{Function, Observer};

use super::{evaluate, open};

/// Finds a root of `f` starting from `x0` using Newton-Raphson.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, `df` vanishes at an iterate, the
/// iterate overflows, or `f`/`df` fail or return non-finite values.
pub fn solve<F, D, Obs>(
    f: &F,
    df: &D,
    x0: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    D: Function,
    Obs: Observer<Event, Action>,
{
    let zero_tol = config.zero_tol();
    open::iterate(f, x0, config, observer, |x, value, iter| {
        let slope = evaluate(df, x).map_err(|e| Error::eval(e, iter))?;
        if slope.abs() <= zero_tol {
            return Err(Error::ZeroDerivative { x, value, iter });
        }
        Ok(x - value / slope)
    })
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F, D>(f: &F, df: &D, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: Function,
    D: Function,
{
    solve(f, df, x0, config, ())
}
