//! Matrix splittings behind the stationary iterative methods.
//!
//! Writing `A = M − N` turns `Ax = b` into the fixed-point iteration
//!
//! ```text
//! x_{k+1} = C x_k + g,    C = M⁻¹N,    g = M⁻¹b
//! ```
//!
//! which converges from every start exactly when the spectral radius of `C`
//! is below one. Any operator norm `‖C‖ < 1` is sufficient, and strict
//! diagonal dominance of `A` is sufficient for both Jacobi and Gauss-Seidel.
//! [`Splitting::diagnostics`] reports these indicators; failing them is a
//! warning, never an error.

use ndarray::{Array1, Array2, ArrayBase, Data, Ix1, Ix2};

use numera_core::matrix;

use super::{
    stationary::Error,
    triangular::{self, Diagonal},
};

/// Which stationary method a splitting belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `M = diag(A)`.
    Jacobi,

    /// `M` = lower triangle of `A`, diagonal included.
    GaussSeidel,
}

/// A condition that would guarantee convergence does not hold.
///
/// The iteration may still converge; these only remove the guarantee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConvergenceWarning {
    /// `A` is not strictly diagonally dominant by rows.
    NotDiagonallyDominant,

    /// Neither `‖C‖₂` nor `‖C‖∞` is below one.
    NormNotBelowOne { norm: f64 },
}

/// Convergence indicators for a splitting.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics {
    /// `‖C‖₂`, the spectral norm of the iteration matrix.
    pub spectral_norm: f64,

    /// `‖C‖∞`, the maximum absolute row sum of the iteration matrix.
    pub inf_norm: f64,

    /// Whether `A` is strictly diagonally dominant by rows.
    pub diagonally_dominant: bool,

    /// Sufficient conditions that failed.
    pub warnings: Vec<ConvergenceWarning>,
}

impl Diagnostics {
    /// Returns true if some sufficient condition for convergence holds.
    #[must_use]
    pub fn convergence_guaranteed(&self) -> bool {
        self.diagonally_dominant || self.spectral_norm < 1.0 || self.inf_norm < 1.0
    }
}

/// The splitting `A = M − N` and its iteration matrix `C = M⁻¹N`.
#[derive(Debug, Clone, PartialEq)]
pub struct Splitting {
    method: Method,
    m: Array2<f64>,
    n: Array2<f64>,
    iteration_matrix: Array2<f64>,
    diagnostics: Diagnostics,
}

/// Splits `a` for `method` and computes its convergence diagnostics.
///
/// # Errors
///
/// Returns an error if `a` is not square or has a zero diagonal entry.
pub fn analyze<S: Data<Elem = f64>>(
    a: &ArrayBase<S, Ix2>,
    method: Method,
) -> Result<Splitting, Error> {
    let size = matrix::ensure_square(a)?;
    check_diagonal(a)?;

    let m = Array2::from_shape_fn((size, size), |(i, j)| {
        let keep = match method {
            Method::Jacobi => i == j,
            Method::GaussSeidel => i >= j,
        };
        if keep { a[[i, j]] } else { 0.0 }
    });
    let n = &m - a;

    let mut iteration_matrix = Array2::zeros((size, size));
    for (j, column) in n.columns().into_iter().enumerate() {
        let solved = triangular::forward_substitution(&m, &column, Diagonal::Stored)?;
        iteration_matrix.column_mut(j).assign(&solved);
    }

    let diagnostics = diagnose(a, &iteration_matrix);

    Ok(Splitting {
        method,
        m,
        n,
        iteration_matrix,
        diagnostics,
    })
}

impl Splitting {
    /// Returns the method this splitting belongs to.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns `M`.
    #[must_use]
    pub fn m(&self) -> &Array2<f64> {
        &self.m
    }

    /// Returns `N = M − A`.
    #[must_use]
    pub fn n(&self) -> &Array2<f64> {
        &self.n
    }

    /// Returns `C = M⁻¹N`.
    #[must_use]
    pub fn iteration_matrix(&self) -> &Array2<f64> {
        &self.iteration_matrix
    }

    /// Returns the convergence diagnostics.
    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Returns the offset `g = M⁻¹b`.
    ///
    /// # Errors
    ///
    /// Returns an error if `b` has the wrong length.
    pub fn offset<S: Data<Elem = f64>>(&self, b: &ArrayBase<S, Ix1>) -> Result<Array1<f64>, Error> {
        Ok(triangular::forward_substitution(&self.m, b, Diagonal::Stored)?)
    }

    /// Applies one step of `x ↦ Cx + g`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` or `offset` has the wrong length.
    pub fn apply(&self, x: &Array1<f64>, offset: &Array1<f64>) -> Result<Array1<f64>, Error> {
        let size = self.iteration_matrix.nrows();
        matrix::ensure_len(x, size)?;
        matrix::ensure_len(offset, size)?;
        Ok(self.iteration_matrix.dot(x) + offset)
    }
}

/// Checks that no diagonal entry is zero.
#[allow(clippy::float_cmp)]
pub(crate) fn check_diagonal<S: Data<Elem = f64>>(a: &ArrayBase<S, Ix2>) -> Result<(), Error> {
    match a.diag().iter().position(|&d| d == 0.0) {
        Some(row) => Err(Error::ZeroDiagonal { row }),
        None => Ok(()),
    }
}

fn diagnose<S: Data<Elem = f64>>(a: &ArrayBase<S, Ix2>, c: &Array2<f64>) -> Diagnostics {
    let spectral_norm = matrix::spectral_norm(c);
    let inf_norm = matrix::operator_norm_inf(c);
    let diagonally_dominant = matrix::is_diagonally_dominant(a);

    let mut warnings = Vec::new();
    if !diagonally_dominant {
        warnings.push(ConvergenceWarning::NotDiagonallyDominant);
    }
    let norm = spectral_norm.min(inf_norm);
    if norm >= 1.0 {
        warnings.push(ConvergenceWarning::NormNotBelowOne { norm });
    }

    Diagnostics {
        spectral_norm,
        inf_norm,
        diagonally_dominant,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    fn dominant() -> Array2<f64> {
        array![[5.0, 1.0, 1.0], [1.0, 4.0, 1.0], [0.0, 1.0, 6.0]]
    }

    #[test]
    fn jacobi_splitting_uses_diagonal() {
        let splitting = analyze(&dominant(), Method::Jacobi).unwrap();

        assert_relative_eq!(
            *splitting.m(),
            array![[5.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 6.0]]
        );
        assert_relative_eq!(
            *splitting.iteration_matrix(),
            array![
                [0.0, -0.2, -0.2],
                [-0.25, 0.0, -0.25],
                [0.0, -1.0 / 6.0, 0.0]
            ],
            epsilon = 1e-15
        );
        assert_relative_eq!(splitting.diagnostics().inf_norm, 0.5, epsilon = 1e-15);
    }

    #[test]
    fn gauss_seidel_splitting_uses_lower_triangle() {
        let a = dominant();
        let splitting = analyze(&a, Method::GaussSeidel).unwrap();

        assert_relative_eq!(
            *splitting.m(),
            array![[5.0, 0.0, 0.0], [1.0, 4.0, 0.0], [0.0, 1.0, 6.0]]
        );
        assert_relative_eq!(splitting.m() - splitting.n(), a);

        let c = splitting.iteration_matrix();
        assert_relative_eq!(splitting.m().dot(c), *splitting.n(), epsilon = 1e-14);
    }

    #[test]
    fn dominant_matrix_has_no_warnings() {
        for method in [Method::Jacobi, Method::GaussSeidel] {
            let diagnostics = analyze(&dominant(), method).unwrap().diagnostics().clone();

            assert!(diagnostics.diagonally_dominant);
            assert!(diagnostics.spectral_norm < 1.0);
            assert!(diagnostics.warnings.is_empty());
            assert!(diagnostics.convergence_guaranteed());
        }
    }

    #[test]
    fn non_dominant_matrix_warns() {
        let a = array![[1.0, 3.0], [2.0, 1.0]];

        let diagnostics = analyze(&a, Method::Jacobi).unwrap().diagnostics().clone();

        assert!(!diagnostics.diagonally_dominant);
        assert_eq!(diagnostics.warnings.len(), 2);
        assert_eq!(
            diagnostics.warnings[0],
            ConvergenceWarning::NotDiagonallyDominant
        );
        assert!(matches!(
            diagnostics.warnings[1],
            ConvergenceWarning::NormNotBelowOne { norm } if norm >= 1.0
        ));
    }

    #[test]
    fn offset_and_apply_reproduce_a_jacobi_step() {
        let a = dominant();
        let b = array![7.0, -8.0, 6.0];
        let splitting = analyze(&a, Method::Jacobi).unwrap();

        let g = splitting.offset(&b).unwrap();
        let x1 = splitting.apply(&array![1.0, 1.0, 1.0], &g).unwrap();

        assert_relative_eq!(x1, array![1.0, -2.5, 5.0 / 6.0], epsilon = 1e-15);
    }

    #[test]
    fn apply_rejects_wrong_lengths() {
        let splitting = analyze(&dominant(), Method::GaussSeidel).unwrap();
        let g = array![0.0, 0.0, 0.0];

        assert_eq!(
            splitting.apply(&array![1.0, 1.0], &g),
            Err(Error::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            splitting.apply(&g, &array![1.0]),
            Err(Error::DimensionMismatch {
                expected: 3,
                found: 1
            })
        );
    }

    #[test]
    fn zero_diagonal_is_an_error() {
        let a = array![[1.0, 2.0], [3.0, 0.0]];
        assert_eq!(
            analyze(&a, Method::GaussSeidel),
            Err(Error::ZeroDiagonal { row: 1 })
        );
    }
}
