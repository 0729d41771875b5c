//! Types shared by the open (non-bracketing) root finders.
//!
//! [`newton`](super::newton), [`halley`](super::halley), and
//! [`secant`](super::secant) all iterate from starting guesses without a
//! bracket, stop on the relative step
//! `|x_{k+1} − x_k| / |x_{k+1}| < x_rel_tol`, and report through the same
//! [`Event`] and [`Solution`] types. Nothing keeps these methods from
//! diverging or oscillating for a poor starting guess; that shows up as
//! [`Status::MaxIters`] or [`Error::NonFiniteIterate`].

mod action;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use numera_core::{Function, Observer};

use crate::equation::evaluate;

/// Drives a one-point iteration `x_{k+1} = step(x_k, f(x_k))`.
///
/// The driver owns evaluation, finiteness checks, observer events, and the
/// convergence test. `step` receives the current iterate, its function value,
/// and the iteration index, and may keep its own state between calls (the
/// secant method remembers the previous point this way).
pub(crate) fn iterate<F, S, Obs>(
    f: &F,
    x0: f64,
    config: &Config,
    mut observer: Obs,
    mut step: S,
) -> Result<Solution, Error>
where
    F: Function,
    S: FnMut(f64, f64, usize) -> Result<f64, Error>,
    Obs: Observer<Event, Action>,
{
    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { x: x0 });
    }

    let mut x = x0;
    let mut value = evaluate(f, x).map_err(|e| Error::eval(e, 0))?;
    #[allow(clippy::float_cmp)]
    if value == 0.0 {
        return Ok(Solution::exact_start(x));
    }

    let mut solution = Solution {
        status: Status::MaxIters,
        x,
        value,
        rel_error: f64::INFINITY,
        iters: 0,
    };

    for iter in 1..=config.max_iters() {
        let next = step(x, value, iter)?;
        if !next.is_finite() {
            return Err(Error::NonFiniteIterate {
                last: x,
                value,
                iter,
            });
        }

        let rel_error = relative_change(x, next);
        x = next;
        value = evaluate(f, x).map_err(|e| Error::eval(e, iter))?;

        let event = Event {
            iter,
            x,
            value,
            rel_error,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_event(&event, Status::StoppedByObserver));
        }

        #[allow(clippy::float_cmp)]
        if rel_error < config.x_rel_tol() || value == 0.0 {
            return Ok(Solution::from_event(&event, Status::Converged));
        }

        solution = Solution::from_event(&event, Status::MaxIters);
    }

    Ok(solution)
}

/// Relative change between successive iterates.
///
/// Falls back to the absolute change when the new iterate is exactly zero.
#[allow(clippy::float_cmp)]
pub(crate) fn relative_change(previous: f64, next: f64) -> f64 {
    let step = (next - previous).abs();
    if next == 0.0 {
        step
    } else {
        step / next.abs()
    }
}
