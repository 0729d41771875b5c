//! Müller's method for scalar root finding.
//!
//! # Algorithm
//!
//! Fits a quadratic through the three most recent points and steps to the
//! root of that quadratic nearest the newest point. With
//!
//! ```text
//! h₁ = x₁ − x₀        δ₁ = (f₁ − f₀) / h₁
//! h₂ = x₂ − x₁        δ₂ = (f₂ − f₁) / h₂
//! a  = (δ₂ − δ₁) / (h₂ + h₁)
//! b  = δ₂ + h₂ · a
//! D  = √(b² − 4 f₂ a)
//! ```
//!
//! the step is `h = −2 f₂ / E`, where `E` is whichever of `b + D` and `b − D`
//! has the larger magnitude. Choosing the larger denominator avoids
//! cancellation when `b` and `D` are nearly equal.
//!
//! The discriminant may be negative, so iterates live in ℂ and the function
//! must be a [`ComplexFunction`]. [`ComplexPolicy`] decides whether a complex
//! final estimate is returned or reported as [`Error::ComplexRoot`].
//!
//! Actions and statuses are shared with the other open methods.

mod config;
mod error;
mod event;
mod solution;

pub use super::open::{Action, Status};
pub use config::{ComplexPolicy, Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::Solution;

use num_complex::Complex64;

use numera_core::{ComplexFunction, Observer};

use super::evaluate_complex;

/// Three interpolation nodes and their function values, oldest first.
#[derive(Debug, Clone, Copy)]
struct Nodes {
    x: [Complex64; 3],
    f: [Complex64; 3],
}

impl Nodes {
    /// Returns the Müller step from the newest node, or `None` if the
    /// interpolating quadratic is degenerate.
    fn step(&self) -> Option<Complex64> {
        let [x0, x1, x2] = self.x;
        let [f0, f1, f2] = self.f;

        let h1 = x1 - x0;
        let h2 = x2 - x1;
        if is_zero(h1) || is_zero(h2) || is_zero(h1 + h2) {
            return None;
        }

        let d1 = (f1 - f0) / h1;
        let d2 = (f2 - f1) / h2;
        let a = (d2 - d1) / (h2 + h1);
        let b = d2 + h2 * a;
        let disc = (b * b - 4.0 * f2 * a).sqrt();

        let denominator = if (b - disc).norm() < (b + disc).norm() {
            b + disc
        } else {
            b - disc
        };
        if is_zero(denominator) {
            return None;
        }

        Some(-2.0 * f2 / denominator)
    }

    /// Drops the oldest node and appends `(x, f)`.
    fn push(&mut self, x: Complex64, f: Complex64) {
        self.x = [self.x[1], self.x[2], x];
        self.f = [self.f[1], self.f[2], f];
    }
}

#[allow(clippy::float_cmp)]
fn is_zero(z: Complex64) -> bool {
    z.re == 0.0 && z.im == 0.0
}

/// Relative step `|h| / |x|`, or `|h|` when `x` is zero.
fn relative_change(step: Complex64, next: Complex64) -> f64 {
    if is_zero(next) {
        step.norm()
    } else {
        step.norm() / next.norm()
    }
}

/// Finds a root of `f` from three starting guesses using Müller's method.
///
/// Guesses may be real or complex. Iteration continues from the last guess.
///
/// # Errors
///
/// Returns an error if a guess is not finite, two guesses coincide, the
/// interpolating quadratic degenerates, `f` fails or returns a non-finite
/// value, or the policy is [`ComplexPolicy::Reject`] and the final estimate
/// is complex.
pub fn solve<F, G, Obs>(
    f: &F,
    guesses: [G; 3],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ComplexFunction,
    G: Into<Complex64>,
    Obs: Observer<Event, Action>,
{
    let x: [Complex64; 3] = guesses.map(Into::into);
    if let Some(&bad) = x.iter().find(|z| !z.is_finite()) {
        return Err(Error::NonFiniteGuess { x: bad });
    }
    if x[0] == x[1] || x[0] == x[2] || x[1] == x[2] {
        return Err(Error::DuplicateGuesses);
    }

    let mut values = [Complex64::default(); 3];
    for (value, &z) in values.iter_mut().zip(&x) {
        *value = evaluate_complex(f, z).map_err(|e| Error::eval(e, 0))?;
        if is_zero(*value) {
            return Ok(Solution::exact_start(z, config.imag_tol()));
        }
    }

    let mut nodes = Nodes { x, f: values };
    let mut solution = Solution::new(
        Status::MaxIters,
        x[2],
        values[2],
        f64::INFINITY,
        0,
        config.imag_tol(),
    );

    for iter in 1..=config.max_iters() {
        let (last, last_value) = (nodes.x[2], nodes.f[2]);
        let step = nodes.step().ok_or(Error::Degenerate {
            x: last,
            value: last_value,
            iter,
        })?;

        let next = last + step;
        if !next.is_finite() {
            return Err(Error::NonFiniteIterate {
                last,
                value: last_value,
                iter,
            });
        }

        let value = evaluate_complex(f, next).map_err(|e| Error::eval(e, iter))?;
        let rel_error = relative_change(step, next);
        nodes.push(next, value);

        let event = Event {
            iter,
            x: next,
            value,
            rel_error,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return config.apply_policy(Solution::from_event(
                &event,
                Status::StoppedByObserver,
                config.imag_tol(),
            ));
        }

        if rel_error < config.x_rel_tol() || is_zero(value) {
            return config.apply_policy(Solution::from_event(
                &event,
                Status::Converged,
                config.imag_tol(),
            ));
        }

        solution = Solution::from_event(&event, Status::MaxIters, config.imag_tol());
    }

    config.apply_policy(solution)
}

/// Runs Müller's method without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F, G>(f: &F, guesses: [G; 3], config: &Config) -> Result<Solution, Error>
where
    F: ComplexFunction,
    G: Into<Complex64>,
{
    solve(f, guesses, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn finds_real_root_of_cubic() {
        let f = |z: Complex64| z.powi(3) - z - 1.0;

        let solution =
            solve_unobserved(&f, [0.5, 1.0, 1.5], &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        let root = solution.real().expect("root should be real");
        assert_relative_eq!(root, 1.324_717_957_244_746, epsilon = 1e-12);
    }

    #[test]
    fn finds_root_of_shifted_cubic_near_guesses() {
        let f = |z: Complex64| z.powi(3) - 3.23 * z.powi(2) - 5.54 * z + 9.84;

        let solution =
            solve_unobserved(&f, [1.0, 1.2, 1.5], &Config::default()).expect("should solve");

        assert!(solution.is_converged());
        assert_relative_eq!(solution.x.re, 1.23, epsilon = 1e-10);
        assert!(solution.x.im.abs() < 1e-10);
    }

    #[test]
    fn keeps_complex_root_by_default() {
        // The quadratic through (0, 1), (1, 2), (2, 5) is f itself, so the
        // first step lands on a root.
        let f = |z: Complex64| z * z + 1.0;

        let solution =
            solve_unobserved(&f, [0.0, 1.0, 2.0], &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert!(solution.iters <= 3);
        assert_relative_eq!(solution.x.re, 0.0, epsilon = 1e-14);
        assert_relative_eq!(solution.x.im.abs(), 1.0, epsilon = 1e-14);
        assert_eq!(solution.real(), None);
    }

    #[test]
    fn reject_policy_reports_complex_root() {
        let f = |z: Complex64| z * z + 1.0;
        let config = Config::new(50, 1e-12, ComplexPolicy::Reject, 1e-10).unwrap();

        let result = solve_unobserved(&f, [0.0, 1.0, 2.0], &config);

        match result {
            Err(Error::ComplexRoot { x }) => assert_relative_eq!(x.im.abs(), 1.0, epsilon = 1e-14),
            other => panic!("expected ComplexRoot, got {other:?}"),
        }
    }

    #[test]
    fn reject_policy_accepts_real_root() {
        let f = |z: Complex64| z * z - 2.0;
        let config = Config::new(50, 1e-12, ComplexPolicy::Reject, 1e-10).unwrap();

        let solution = solve_unobserved(&f, [0.0, 1.0, 3.0], &config).expect("should solve");

        assert_relative_eq!(solution.x.re, 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn constant_function_is_degenerate() {
        let f = |_: Complex64| Complex64::new(1.0, 0.0);

        let result = solve_unobserved(&f, [0.0, 1.0, 2.0], &Config::default());

        match result {
            Err(Error::Degenerate { x, value, iter }) => {
                assert_eq!(x, Complex64::new(2.0, 0.0));
                assert_eq!(value, Complex64::new(1.0, 0.0));
                assert_eq!(iter, 1);
            }
            other => panic!("expected Degenerate, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_guesses() {
        let f = |z: Complex64| z;
        let result = solve_unobserved(&f, [1.0, 2.0, 1.0], &Config::default());
        assert!(matches!(result, Err(Error::DuplicateGuesses)));
    }

    #[test]
    fn exact_guess_returns_immediately() {
        let f = |z: Complex64| z - 2.0;
        let solution =
            solve_unobserved(&f, [0.0, 2.0, 3.0], &Config::default()).expect("should solve");
        assert_eq!(solution.iters, 0);
        assert_eq!(solution.real(), Some(2.0));
    }

    #[test]
    fn observer_can_stop_iteration() {
        let f = |z: Complex64| z.powi(3) - z - 1.0;
        let observer = |event: &Event| (event.iter == 1).then_some(Action::StopEarly);

        let solution =
            solve(&f, [0.0, 0.5, 3.0], &Config::default(), observer).expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 1);
    }

    #[test]
    fn larger_denominator_is_chosen() {
        let nodes = Nodes {
            x: [0.0, 1.0, 2.0].map(Complex64::from),
            f: [-2.0, -1.0, 2.0].map(Complex64::from),
        };

        // f(x) = x² − 2 through these nodes: the step from 2 must head to √2,
        // not to −√2.
        let step = nodes.step().expect("non-degenerate");
        assert_relative_eq!(step.re, 2.0_f64.sqrt() - 2.0, epsilon = 1e-14);
    }
}
