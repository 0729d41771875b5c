use std::error::Error as StdError;

use num_complex::Complex64;
use thiserror::Error;

use crate::equation::EvalError;

/// Errors that can occur in Müller's method.
#[derive(Debug, Error)]
pub enum Error {
    #[error("starting guess {x} is not finite")]
    NonFiniteGuess { x: Complex64 },

    #[error("starting guesses must be distinct")]
    DuplicateGuesses,

    /// Two nodes coincide or both candidate denominators vanish.
    #[error("degenerate interpolating quadratic at x = {x} (f = {value}, iteration {iter})")]
    Degenerate {
        x: Complex64,
        value: Complex64,
        iter: usize,
    },

    /// The next iterate overflowed. `last` and `value` describe the final
    /// finite iterate.
    #[error("iterate left the finite range after x = {last} (f = {value}, iteration {iter})")]
    NonFiniteIterate {
        last: Complex64,
        value: Complex64,
        iter: usize,
    },

    /// The final estimate is complex and the policy rejects complex roots.
    #[error("estimate {x} is not real")]
    ComplexRoot { x: Complex64 },

    #[error("function call failed at iteration {iter}")]
    Function {
        iter: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("non-finite value {value} at x = {x} (iteration {iter})")]
    NonFinite {
        x: Complex64,
        value: Complex64,
        iter: usize,
    },
}

impl Error {
    pub(super) fn eval<E>(err: EvalError<E, Complex64>, iter: usize) -> Self
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
