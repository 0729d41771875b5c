use thiserror::Error;

use numera_core::matrix::ShapeError;

use crate::linear::triangular;

/// Errors that can occur in LU decomposition and solve.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A pivot was zero (or negligible) when it was needed as a divisor.
    #[error("zero pivot {pivot} at elimination step {step}")]
    ZeroPivot { step: usize, pivot: f64 },
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
            triangular::Error::ZeroDiagonal { row } => Self::ZeroPivot {
                step: row,
                pivot: 0.0,
            },
        }
    }
}
