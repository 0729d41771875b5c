//! Secant method for scalar root finding.
//!
//! # Algorithm
//!
//! Newton's iteration with the derivative replaced by the slope through the
//! two most recent iterates:
//!
//! ```text
//! x_{k+1} = x_k − f(x_k) · (x_k − x_{k−1}) / (f(x_k) − f(x_{k−1}))
//! ```
//!
//! Two starting guesses are required. Two iterates with exactly equal
//! function values leave no slope to follow and fail with
//! [`Error::FlatSecant`]. A merely small slope is not an error. Convergence is superlinear
//! (order ≈ 1.618) near a simple root.

pub use super::open::{Action, Config, ConfigError, Error, Event, Solution, Status};

use numera_core::{Function, Observer};

use super::{evaluate, open};

/// Finds a root of `f` from the guesses `[x0, x1]` using the secant method.
///
/// Iteration continues from `x1`; `x0` only supplies the first slope.
///
/// # Errors
///
/// Returns an error if a guess is not finite, the guesses coincide, the
/// secant slope vanishes, the iterate overflows, or `f` fails or returns a
/// non-finite value.
pub fn solve<F, Obs>(
    f: &F,
    guesses: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let [x0, x1] = guesses;
    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { x: x0 });
    }
    #[allow(clippy::float_cmp)]
    if x0 == x1 {
        return Err(Error::DuplicateGuesses { x: x0 });
    }

    let mut previous = (x0, evaluate(f, x0).map_err(|e| Error::eval(e, 0))?);

    open::iterate(f, x1, config, observer, |x, value, iter| {
        let (x_prev, value_prev) = previous;
        #[allow(clippy::float_cmp)]
        if value == value_prev {
            return Err(Error::FlatSecant { x, value, iter });
        }
        let slope = (value - value_prev) / (x - x_prev);

        previous = (x, value);
        Ok(x - value / slope)
    })
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Function>(
    f: &F,
    guesses: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, guesses, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn finds_square_root_of_two() {
        let f = |x: f64| x * x - 2.0;

        let solution = solve_unobserved(&f, [1.0, 2.0], &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn finds_cubic_root_without_derivative() {
        let f = |x: f64| x.powi(3) - 3.23 * x.powi(2) - 5.54 * x + 9.84;

        let solution = solve_unobserved(&f, [1.0, 1.5], &Config::default()).expect("should solve");

        assert!(solution.is_converged());
        assert_relative_eq!(solution.x, 1.23, epsilon = 1e-10);
    }

    #[test]
    fn fails_on_flat_secant() {
        let f = |x: f64| x * x;

        let result = solve_unobserved(&f, [-1.0, 1.0], &Config::default());

        match result {
            Err(Error::FlatSecant { x, value, iter }) => {
                assert_relative_eq!(x, 1.0);
                assert_relative_eq!(value, 1.0);
                assert_eq!(iter, 1);
            }
            other => panic!("expected FlatSecant, got {other:?}"),
        }
    }

    #[test]
    fn small_slope_is_not_flat() {
        // f(0) = -2e-17 and f(1) = -1e-17 differ, so the secant is usable.
        let f = |x: f64| 1e-17 * (x - 2.0);

        let solution = solve_unobserved(&f, [0.0, 1.0], &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.x, 2.0);
    }

    #[test]
    fn flat_secant_needs_equal_values() {
        // Equal values on the flat shelf fail. Values a few ulps apart do not.
        let f = |x: f64| if x < 0.5 { 1.0 } else { 1.0 + 1e-15 * (x - 0.5) };

        let result = solve_unobserved(&f, [0.0, 0.25], &Config::default());
        assert!(matches!(result, Err(Error::FlatSecant { iter: 1, .. })));

        let result = solve_unobserved(&f, [0.0, 1.0], &Config::default());
        assert!(!matches!(result, Err(Error::FlatSecant { iter: 1, .. })));
    }

    #[test]
    fn rejects_duplicate_guesses() {
        let f = |x: f64| x - 1.0;
        let result = solve_unobserved(&f, [2.0, 2.0], &Config::default());
        assert!(matches!(result, Err(Error::DuplicateGuesses { .. })));
    }

    #[test]
    fn emits_one_event_per_iterate() {
        let f = |x: f64| x * x - 2.0;
        let mut iters = Vec::new();
        let observer = |event: &Event| {
            iters.push(event.iter);
            None
        };

        let solution = solve(&f, [1.0, 2.0], &Config::default(), observer).expect("should solve");

        assert_eq!(iters, (1..=solution.iters).collect::<Vec<_>>());
    }
}
