use std::error::Error as StdError;

use ndarray::Array1;
use thiserror::Error;

use crate::linear::lu;

/// Errors that can occur in the multivariate Newton solver.
#[derive(Debug, Error)]
pub enum Error {
    #[error("initial guess is not finite")]
    NonFiniteGuess,

    /// `F(x)` returned a vector of the wrong length.
    #[error("function returned length {found}, expected {expected} (iteration {iter})")]
    DimensionMismatch {
        expected: usize,
        found: usize,
        iter: usize,
    },

    /// `J(x)` returned a matrix that is not `n × n`.
    #[error("Jacobian is {rows}x{cols}, expected {expected}x{expected} (iteration {iter})")]
    JacobianShape {
        expected: usize,
        rows: usize,
        cols: usize,
        iter: usize,
    },

    /// The Jacobian at `x` has a zero pivot, so no Newton step exists.
    #[error("singular Jacobian at iteration {iter} (‖F‖ = {residual_norm})")]
    SingularJacobian {
        x: Array1<f64>,
        iter: usize,
        residual_norm: f64,
    },

    #[error(transparent)]
    Linear(lu::Error),

    /// `F`, `J`, or the next iterate left the finite range.
    ///
    /// `x` is the last finite iterate. `residual_norm` is `‖F‖₂` at the last
    /// iterate whose residual was finite, or infinity if there was none.
    #[error("non-finite values at iteration {iter} (last ‖F‖ = {residual_norm})")]
    NonFinite {
        x: Array1<f64>,
        residual_norm: f64,
        iter: usize,
    },

    #[error("function call failed at iteration {iter}")]
    Function {
        iter: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    pub(super) fn function<E>(err: E, iter: usize) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Function {
            iter,
            source: Box::new(err),
        }
    }
}
