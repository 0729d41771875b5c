use ndarray::Array1;
use thiserror::Error;

use numera_core::matrix::ShapeError;

use crate::linear::triangular;

/// Errors that can occur in the stationary iterative solvers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// The splitting matrix `M` cannot be inverted.
    #[error("zero diagonal entry in row {row}")]
    ZeroDiagonal { row: usize },

    #[error("initial guess is not finite")]
    NonFiniteGuess,

    /// The iteration overflowed, typically because it diverges.
    ///
    /// `last` is the final finite iterate and `residual_norm` its
    /// `‖b − Ax‖∞`.
    #[error("iterate is not finite (iteration {iter}, last ‖b − Ax‖ = {residual_norm})")]
    NonFinite {
        last: Array1<f64>,
        residual_norm: f64,
        iter: usize,
    },
}

impl From<ShapeError> for Error {
    fn from(err: ShapeError) -> Self {
        match err {
            ShapeError::NotSquare { rows, cols } => Self::NotSquare { rows, cols },
            ShapeError::Mismatch { expected, found } => Self::DimensionMismatch { expected, found },
        }
    }
}

impl From<triangular::Error> for Error {
    fn from(err: triangular::Error) -> Self {
        match err {
            triangular::Error::Shape(shape) => shape.into(),
            triangular::Error::ZeroDiagonal { row } => Self::ZeroDiagonal { row },
        }
    }
}
