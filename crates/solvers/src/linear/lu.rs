//! LU decomposition with the Doolittle convention.
//!
//! # Algorithm
//!
//! Gaussian elimination without row exchanges factors `A = LU` with `L` unit
//! lower-triangular and `U` upper-triangular. Both factors share one `n × n`
//! array: `U` on and above the diagonal, the multipliers of `L` strictly
//! below it.
//!
//! Without pivoting the factorization exists only when every leading pivot is
//! nonzero. A pivot with `|u_kk| <= n · ε · max|a_ij|` fails with
//! [`Error::ZeroPivot`]; diagonally dominant matrices never trigger it.
//! [`decompose_pivoted`] is available when the row order cannot be trusted.
//!
//! # Solving
//!
//! `Ax = b` becomes `Ly = b` (forward substitution) then `Ux = y` (backward
//! substitution). A factorization can be reused for many right-hand sides.

mod error;
mod pivoted;


pub use error::Error;
pub use pivoted::{PivotedLu, decompose_pivoted};

use ndarray::{Array1, Array2, ArrayBase, Data, Ix1, Ix2};

use numera_core::matrix;

use super::triangular::{self, Diagonal};

/// A compact LU factorization `A = LU`.
#[derive(Debug, Clone, PartialEq)]
pub struct Lu {
    factors: Array2<f64>,
}

impl Lu {
    /// Factors `a` in place, consuming it.
    ///
    /// Use [`decompose`] to keep the original matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if `a` is not square or a pivot vanishes.
    pub fn factor(mut a: Array2<f64>) -> Result<Self, Error> {
        let n = matrix::ensure_square(&a)?;
        let tol = pivot_tolerance(&a);

        for step in 0..n {
            eliminate(&mut a, step, tol)?;
        }

        Ok(Self { factors: a })
    }

    /// Returns the dimension `n`.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.factors.nrows()
    }

    /// Returns the compact storage holding both factors.
    #[must_use]
    pub fn factors(&self) -> &Array2<f64> {
        &self.factors
    }

    /// Returns the unit lower-triangular factor.
    #[must_use]
    pub fn l(&self) -> Array2<f64> {
        let n = self.dim();
        Array2::from_shape_fn((n, n), |(i, j)| match i.cmp(&j) {
            std::cmp::Ordering::Greater => self.factors[[i, j]],
            std::cmp::Ordering::Equal => 1.0,
            std::cmp::Ordering::Less => 0.0,
        })
    }

    /// Returns the upper-triangular factor.
    #[must_use]
    pub fn u(&self) -> Array2<f64> {
        let n = self.dim();
        Array2::from_shape_fn((n, n), |(i, j)| {
            if i <= j { self.factors[[i, j]] } else { 0.0 }
        })
    }

    /// Returns the product `LU`.
    #[must_use]
    pub fn reconstruct(&self) -> Array2<f64> {
        self.l().dot(&self.u())
    }

    /// Solves `Ax = b` using the factorization.
    ///
    /// # Errors
    ///
    /// Returns an error if `b` does not have length `n`.
    pub fn solve<S: Data<Elem = f64>>(&self, b: &ArrayBase<S, Ix1>) -> Result<Array1<f64>, Error> {
        let y = triangular::forward_substitution(&self.factors, b, Diagonal::Unit)?;
        Ok(triangular::backward_substitution(&self.factors, &y)?)
    }

    /// Returns `det(A)`, the product of the pivots.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.factors.diag().product()
    }
}

/// Factors a copy of `a`, leaving the caller's matrix untouched.
///
/// # Errors
///
/// See [`Lu::factor`].
pub fn decompose<S: Data<Elem = f64>>(a: &ArrayBase<S, Ix2>) -> Result<Lu, Error> {
    Lu::factor(a.to_owned())
}

/// Solves `Ax = b` by LU decomposition without pivoting.
///
/// # Errors
///
/// Returns an error if the shapes do not fit or a pivot vanishes.
pub fn solve<S1, S2>(a: &ArrayBase<S1, Ix2>, b: &ArrayBase<S2, Ix1>) -> Result<Array1<f64>, Error>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    let n = matrix::ensure_square(a)?;
    matrix::ensure_len(b, n)?;
    decompose(a)?.solve(b)
}

/// Magnitude at or below which a pivot counts as zero.
fn pivot_tolerance(a: &Array2<f64>) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let n = a.nrows() as f64;
    n * f64::EPSILON * matrix::max_abs(a)
}

/// Eliminates below the pivot in column `step`, storing the multipliers.
fn eliminate(a: &mut Array2<f64>, step: usize, tol: f64) -> Result<(), Error> {
    let pivot = a[[step, step]];
    if pivot.abs() <= tol {
        return Err(Error::ZeroPivot { step, pivot });
    }

    for row in step + 1..a.nrows() {
        let multiplier = a[[row, step]] / pivot;
        matrix::add_scaled_row(a, row, step, -multiplier, step + 1);
        a[[row, step]] = multiplier;
    }

    Ok(())
}
