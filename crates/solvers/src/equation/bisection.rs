//! Bisection for scalar root finding.
//!
//! # Algorithm
//!
//! Bisection needs a bracket `[a, b]` with `f(a) · f(b) < 0`. Each iteration
//! evaluates the midpoint and keeps the half across which the sign still
//! changes, so the bracket width halves every step. The method converges
//! linearly but unconditionally for continuous functions: reaching a width
//! below `ε` takes `⌈log2((b − a) / ε)⌉` iterations, which is reported as
//! [`Solution::required_iters`].
//!
//! # Termination
//!
//! - [`Status::Converged`] — the bracket width dropped below `x_tol`
//! - [`Status::ExactHit`] — a midpoint (or endpoint) evaluated to exactly zero
//! - [`Status::MaxIters`] — the budget ran out; the last midpoint is returned
//! - [`Status::StoppedByObserver`] — an observer returned [`Action::StopEarly`]
//!
//! # Observer Events
//!
//! One [`Event`] per midpoint evaluation, emitted after the bracket has been
//! narrowed.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use bracket::BracketError;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use numera_core::{Function, Observer};

use crate::equation::evaluate;

use bracket::{Bounds, Bracket, Sign};

/// Finds a root of `f` inside `bracket` using bisection.
///
/// The bracket endpoints may be given in either order.
/// An endpoint where `f` is exactly zero is returned immediately.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, `f` does not change sign
/// across it, or `f` fails or returns a non-finite value.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let bounds = Bounds::new(bracket)?;
    let [left, right] = bounds.as_array();
    let required_iters = required_iters(bounds.width(), config.x_tol());

    let left_value = evaluate(f, left).map_err(|e| Error::eval(e, 0))?;
    #[allow(clippy::float_cmp)]
    if left_value == 0.0 {
        return Ok(Solution::exact_endpoint(left, right - left, required_iters));
    }

    let right_value = evaluate(f, right).map_err(|e| Error::eval(e, 0))?;
    #[allow(clippy::float_cmp)]
    if right_value == 0.0 {
        return Ok(Solution::exact_endpoint(right, right - left, required_iters));
    }

    let left_sign = Sign::of(left_value);
    if left_sign == Sign::of(right_value) {
        return Err(Error::NoSignChange {
            left,
            right,
            left_value,
            right_value,
        });
    }
    let mut bracket = Bracket::new(bounds, left_sign);

    let (x, value) = if left_value.abs() <= right_value.abs() {
        (left, left_value)
    } else {
        (right, right_value)
    };
    let mut solution = Solution {
        status: Status::MaxIters,
        x,
        value,
        width: bracket.width(),
        iters: 0,
        required_iters,
    };

    for iter in 1..=config.max_iters() {
        let mid = bracket.midpoint();
        let value = evaluate(f, mid).map_err(|e| Error::eval(e, iter))?;

        #[allow(clippy::float_cmp)]
        let exact = value == 0.0;
        if !exact {
            bracket.shrink(mid, Sign::of(value));
        }
        let width = if exact { 0.0 } else { bracket.width() };

        solution.x = mid;
        solution.value = value;
        solution.width = width;
        solution.iters = iter;

        let event = Event {
            iter,
            x: mid,
            value,
            bracket: bracket.as_array(),
            width,
        };
        let action = observer.observe(&event);

        if exact {
            solution.status = Status::ExactHit;
            return Ok(solution);
        }
        if let Some(Action::StopEarly) = action {
            solution.status = Status::StoppedByObserver;
            return Ok(solution);
        }
        if width < config.x_tol() {
            solution.status = Status::Converged;
            return Ok(solution);
        }
    }

    Ok(solution)
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, `f` does not change sign
/// across it, or `f` fails or returns a non-finite value.
pub fn solve_unobserved<F: Function>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, bracket, config, ())
}

/// Iterations needed to shrink a bracket of `width` below `x_tol`.
///
/// This is `⌈log2(width / x_tol)⌉`, or zero if the bracket is already narrow
/// enough.
#[must_use]
pub fn required_iters(width: f64, x_tol: f64) -> usize {
    let ratio = width.abs() / x_tol;
    if ratio <= 1.0 {
        return 0;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let iters = ratio.log2().ceil() as usize;
    iters
}
