//! Halley's method for scalar root finding.
//!
//! # Algorithm
//!
//! ```text
//! x_{k+1} = x_k − 2 f f′ / (2 f′² − f f″)
//! ```
//!
//! Convergence is cubic near a simple root, at the cost of a second
//! derivative. A denominator with magnitude at or below `zero_tol` fails with
//! [`Error::ZeroDerivative`]. Otherwise the contract matches
//! [`newton`](super::newton).

pub use super::open::{Action, Config, ConfigError, Error, Event, Solution, Status};

use numera_core::{Function, Observer};

use super::{evaluate, open};

/// Finds a root of `f` starting from `x0` using Halley's method.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, the Halley denominator vanishes,
/// the iterate overflows, or any of the functions fail or return non-finite
/// values.
pub fn solve<F, D, D2, Obs>(
    f: &F,
    df: &D,
    d2f: &D2,
    x0: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    D: Function,
    D2: Function,
    Obs: Observer<Event, Action>,
{
    let zero_tol = config.zero_tol();
    open::iterate(f, x0, config, observer, |x, value, iter| {
        let slope = evaluate(df, x).map_err(|e| Error::eval(e, iter))?;
        let curvature = evaluate(d2f, x).map_err(|e| Error::eval(e, iter))?;

        let denominator = 2.0 * slope * slope - value * curvature;
        if denominator.abs() <= zero_tol {
            return Err(Error::ZeroDerivative { x, value, iter });
        }
        Ok(x - 2.0 * value * slope / denominator)
    })
}

/// Runs Halley's method without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F, D, D2>(
    f: &F,
    df: &D,
    d2f: &D2,
    x0: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    F: Function,
    D: Function,
    D2: Function,
{
    solve(f, df, d2f, x0, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::equation::newton;

    #[test]
    fn finds_cube_root_faster_than_newton() {
        let f = |x: f64| x.powi(3) - 2.0;
        let df = |x: f64| 3.0 * x * x;
        let d2f = |x: f64| 6.0 * x;
        let config = Config::default();

        let halley = solve_unobserved(&f, &df, &d2f, 3.0, &config).expect("should solve");
        let newton = newton::solve_unobserved(&f, &df, 3.0, &config).expect("should solve");

        assert_eq!(halley.status, Status::Converged);
        assert_relative_eq!(halley.x, 2.0_f64.cbrt(), epsilon = 1e-14);
        assert!(halley.iters <= newton.iters);
    }

    #[test]
    fn fails_when_denominator_vanishes() {
        // At x = 0: f = 1, f′ = 0, f″ = 0.
        let f = |x: f64| x.powi(3) + 1.0;
        let df = |x: f64| 3.0 * x * x;
        let d2f = |x: f64| 6.0 * x;

        let result = solve_unobserved(&f, &df, &d2f, 0.0, &Config::default());

        assert!(matches!(
            result,
            Err(Error::ZeroDerivative { iter: 1, .. })
        ));
    }
}
