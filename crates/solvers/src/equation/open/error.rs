use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::EvalError;

/// Errors that can occur in the open root finders.
///
/// Every variant that arises mid-iteration carries the last iterate and the
/// iteration index so callers can decide how to retry.
#[derive(Debug, Error)]
pub enum Error {
    #[error("starting guess {x} is not finite")]
    NonFiniteGuess { x: f64 },

    #[error("starting guesses coincide at {x}")]
    DuplicateGuesses { x: f64 },

    /// The derivative (or Halley denominator) vanished.
    #[error("zero derivative at x = {x} (f = {value}, iteration {iter})")]
    ZeroDerivative { x: f64, value: f64, iter: usize },

    /// The two secant points have exactly equal function values.
    #[error("flat secant at x = {x} (f = {value}, iteration {iter})")]
    FlatSecant { x: f64, value: f64, iter: usize },

    /// The next iterate overflowed. `last` and `value` describe the final
    /// finite iterate.
    #[error("iterate left the finite range after x = {last} (f = {value}, iteration {iter})")]
    NonFiniteIterate { last: f64, value: f64, iter: usize },

    #[error("function call failed at iteration {iter}")]
    Function {
        iter: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("non-finite value {value} at x = {x} (iteration {iter})")]
    NonFinite { x: f64, value: f64, iter: usize },
}

impl Error {
    /// Attaches the iteration index to an evaluation failure.
    pub(crate) fn eval<E>(err: EvalError<E, f64>, iter: usize) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        match err {
            EvalError::Function(e) => Self::Function {
                iter,
                source: Box::new(e),
            },
            EvalError::NonFinite { x, value } => Self::NonFinite { x, value, iter },
        }
    }
}
