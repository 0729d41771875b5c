//! Dense matrix and vector primitives.
//!
//! Matrices are `ndarray::Array2<f64>` in row-major order and vectors are
//! `Array1<f64>`. The helpers here cover what the solvers share: norms,
//! elementary row operations, and structural checks.

use ndarray::{Array1, Array2, ArrayBase, Data, Ix1, Ix2};
use thiserror::Error;

/// Maximum power iterations used by [`spectral_norm`].
const SPECTRAL_MAX_ITERS: usize = 1000;

/// Relative change in the Rayleigh quotient at which [`spectral_norm`] stops.
const SPECTRAL_REL_TOL: f64 = 1e-12;

/// Errors raised when matrix and vector shapes do not fit together.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("dimension mismatch: expected {expected}, found {found}")]
    Mismatch { expected: usize, found: usize },
}

/// Returns `n` if `a` is `n × n`.
///
/// # Errors
///
/// Returns [`ShapeError::NotSquare`] otherwise.
pub fn ensure_square<S: Data<Elem = f64>>(a: &ArrayBase<S, Ix2>) -> Result<usize, ShapeError> {
    let (rows, cols) = a.dim();
    if rows == cols {
        Ok(rows)
    } else {
        Err(ShapeError::NotSquare { rows, cols })
    }
}

/// Checks that a vector has the expected length.
///
/// # Errors
///
/// Returns [`ShapeError::Mismatch`] if the lengths differ.
pub fn ensure_len<S: Data<Elem = f64>>(
    v: &ArrayBase<S, Ix1>,
    expected: usize,
) -> Result<(), ShapeError> {
    if v.len() == expected {
        Ok(())
    } else {
        Err(ShapeError::Mismatch {
            expected,
            found: v.len(),
        })
    }
}

/// Maximum absolute entry, `‖v‖∞`.
pub fn norm_inf<S: Data<Elem = f64>>(v: &ArrayBase<S, Ix1>) -> f64 {
    v.iter().fold(0.0, |acc, x| acc.max(x.abs()))
}

/// Sum of absolute entries, `‖v‖₁`.
pub fn norm_1<S: Data<Elem = f64>>(v: &ArrayBase<S, Ix1>) -> f64 {
    v.iter().map(|x| x.abs()).sum()
}

/// Euclidean norm, `‖v‖₂`.
pub fn norm_2<S: Data<Elem = f64>>(v: &ArrayBase<S, Ix1>) -> f64 {
    v.dot(v).sqrt()
}

/// Largest absolute entry of a matrix.
pub fn max_abs<S: Data<Elem = f64>>(a: &ArrayBase<S, Ix2>) -> f64 {
    a.iter().fold(0.0, |acc, x| acc.max(x.abs()))
}

/// Operator norm induced by `‖·‖∞`: the largest absolute row sum.
pub fn operator_norm_inf<S: Data<Elem = f64>>(a: &ArrayBase<S, Ix2>) -> f64 {
    a.rows()
        .into_iter()
        .map(|row| norm_1(&row))
        .fold(0.0, f64::max)
}

/// Frobenius norm, `sqrt(Σ a_ij²)`.
pub fn frobenius_norm<S: Data<Elem = f64>>(a: &ArrayBase<S, Ix2>) -> f64 {
    a.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Spectral norm `‖A‖₂`, the largest singular value.
///
/// Computed by power iteration on `AᵀA`. If the fixed starting vector lies in
/// the kernel of `A`, the iteration restarts from the basis vector of the
/// largest column of `A`, so a nonzero matrix never reports a zero norm.
pub fn spectral_norm<S: Data<Elem = f64>>(a: &ArrayBase<S, Ix2>) -> f64 {
    let n = a.ncols();
    if n == 0 || a.nrows() == 0 {
        return 0.0;
    }

    let gram = a.t().dot(a);

    #[allow(clippy::cast_precision_loss)]
    let start = Array1::from_shape_fn(n, |i| 1.0 + i as f64 / n as f64);
    if let Some(lambda) = power_iteration(&gram, start) {
        return lambda.max(0.0).sqrt();
    }

    // The diagonal of `AᵀA` holds the squared column norms.
    let (column, weight) = gram
        .diag()
        .iter()
        .copied()
        .enumerate()
        .fold((0, 0.0), |best, (j, w)| if w > best.1 { (j, w) } else { best });
    if weight <= 0.0 {
        return 0.0;
    }

    let mut basis = Array1::zeros(n);
    basis[column] = 1.0;
    power_iteration(&gram, basis).map_or(0.0, |lambda| lambda.max(0.0).sqrt())
}

/// Dominant eigenvalue of the symmetric matrix `gram`, iterating from `v`.
///
/// Returns `None` if `v` is in the kernel of `gram`.
#[allow(clippy::float_cmp)]
fn power_iteration(gram: &Array2<f64>, mut v: Array1<f64>) -> Option<f64> {
    let mut w = gram.dot(&v);
    let mut lambda = 0.0;
    for _ in 0..SPECTRAL_MAX_ITERS {
        let w_norm = norm_2(&w);
        if w_norm == 0.0 {
            return None;
        }

        let next = v.dot(&w) / v.dot(&v);
        v = w / w_norm;
        w = gram.dot(&v);

        let settled = (next - lambda).abs() <= SPECTRAL_REL_TOL * next.abs();
        lambda = next;
        if settled {
            break;
        }
    }

    Some(lambda)
}

/// Returns true if every row satisfies `|a_ii| > Σ_{j≠i} |a_ij|`.
///
/// Strict row diagonal dominance is sufficient (not necessary) for Jacobi and
/// Gauss-Seidel to converge from any starting point. A non-square matrix is
/// never diagonally dominant.
pub fn is_diagonally_dominant<S: Data<Elem = f64>>(a: &ArrayBase<S, Ix2>) -> bool {
    if a.nrows() != a.ncols() {
        return false;
    }
    a.rows().into_iter().enumerate().all(|(i, row)| {
        let diagonal = row[i].abs();
        let off_diagonal = norm_1(&row) - diagonal;
        diagonal > off_diagonal
    })
}

/// Swaps rows `i` and `j` in place.
pub fn swap_rows(a: &mut Array2<f64>, i: usize, j: usize) {
    if i == j {
        return;
    }
    for col in 0..a.ncols() {
        a.swap((i, col), (j, col));
    }
}

/// Adds `factor · row[src]` to `row[dst]`, touching only columns `from..`.
///
/// Elimination only needs the columns right of the pivot, so callers pass the
/// first column that can still change.
pub fn add_scaled_row(a: &mut Array2<f64>, dst: usize, src: usize, factor: f64, from: usize) {
    for col in from..a.ncols() {
        let delta = factor * a[[src, col]];
        a[[dst, col]] += delta;
    }
}

/// Residual `b − Ax`.
pub fn residual<S1, S2, S3>(
    a: &ArrayBase<S1, Ix2>,
    x: &ArrayBase<S2, Ix1>,
    b: &ArrayBase<S3, Ix1>,
) -> Array1<f64>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    S3: Data<Elem = f64>,
{
    b - &a.dot(x)
}
