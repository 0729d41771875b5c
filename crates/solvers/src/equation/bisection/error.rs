use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::EvalError;

use super::BracketError;

/// Errors that can occur during bisection solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    /// The bracket precondition `f(a) · f(b) < 0` does not hold.
    #[error("no sign change in bracket: f({left})={left_value}, f({right})={right_value}")]
    NoSignChange {
        left: f64,
        right: f64,
        left_value: f64,
        right_value: f64,
    },

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
    pub(super) fn eval<E>(err: EvalError<E, f64>, iter: usize) -> Self
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
