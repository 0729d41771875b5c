//! Forward and backward substitution for triangular systems.
//!
//! Both routines read only the triangle they need, so the compact storage of
//! an LU factorization can be passed directly.

use ndarray::{Array1, ArrayBase, Data, Ix1, Ix2};
use thiserror::Error;

use numera_core::matrix::{self, ShapeError};

/// How the diagonal of a lower-triangular matrix is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagonal {
    /// Treat every diagonal entry as one without reading it.
    Unit,

    /// Divide by the stored diagonal entries.
    Stored,
}

/// Errors that can occur during substitution.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("zero diagonal entry in row {row}")]
    ZeroDiagonal { row: usize },
}

/// Solves `Ly = b` for lower-triangular `L`.
///
/// Only entries on and below the diagonal are read, and with
/// [`Diagonal::Unit`] only those strictly below it.
///
/// # Errors
///
/// Returns an error if `l` is not square, `b` has the wrong length, or a
/// stored diagonal entry is zero.
pub fn forward_substitution<S1, S2>(
    l: &ArrayBase<S1, Ix2>,
    b: &ArrayBase<S2, Ix1>,
    diagonal: Diagonal,
) -> Result<Array1<f64>, Error>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    let n = matrix::ensure_square(l)?;
    matrix::ensure_len(b, n)?;

    let mut y = Array1::zeros(n);
    for i in 0..n {
        let sum: f64 = (0..i).map(|j| l[[i, j]] * y[j]).sum();
        let rhs = b[i] - sum;
        y[i] = match diagonal {
            Diagonal::Unit => rhs,
            Diagonal::Stored => rhs / nonzero(l[[i, i]], i)?,
        };
    }

    Ok(y)
}

/// Solves `Ux = y` for upper-triangular `U`.
///
/// Only entries on and above the diagonal are read.
///
/// # Errors
///
/// Returns an error if `u` is not square, `y` has the wrong length, or a
/// diagonal entry is zero.
pub fn backward_substitution<S1, S2>(
    u: &ArrayBase<S1, Ix2>,
    y: &ArrayBase<S2, Ix1>,
) -> Result<Array1<f64>, Error>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    let n = matrix::ensure_square(u)?;
    matrix::ensure_len(y, n)?;

    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let sum: f64 = (i + 1..n).map(|j| u[[i, j]] * x[j]).sum();
        x[i] = (y[i] - sum) / nonzero(u[[i, i]], i)?;
    }

    Ok(x)
}

#[allow(clippy::float_cmp)]
fn nonzero(value: f64, row: usize) -> Result<f64, Error> {
    if value == 0.0 {
        Err(Error::ZeroDiagonal { row })
    } else {
        Ok(value)
    }
}
