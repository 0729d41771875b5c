use ndarray::{Array1, Array2, ArrayBase, Data, Ix1, Ix2};

use numera_core::matrix;

use super::{Error, Lu, eliminate, pivot_tolerance};

/// A partially pivoted factorization `PA = LU`.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotedLu {
    lu: Lu,
    permutation: Vec<usize>,
    swaps: usize,
}

/// Factors a copy of `a` with partial pivoting.
///
/// At each step the remaining row with the largest entry in the pivot column
/// is swapped into place. This is a separate entry point; [`Lu::factor`]
/// never reorders rows.
///
/// # Errors
///
/// Returns an error if `a` is not square or is singular to working
/// precision.
pub fn decompose_pivoted<S: Data<Elem = f64>>(a: &ArrayBase<S, Ix2>) -> Result<PivotedLu, Error> {
    let n = matrix::ensure_square(a)?;
    let mut a = a.to_owned();
    let tol = pivot_tolerance(&a);

    let mut permutation: Vec<usize> = (0..n).collect();
    let mut swaps = 0;

    for step in 0..n {
        let best = (step..n)
            .max_by(|&i, &j| a[[i, step]].abs().total_cmp(&a[[j, step]].abs()))
            .unwrap_or(step);
        if best != step {
            matrix::swap_rows(&mut a, step, best);
            permutation.swap(step, best);
            swaps += 1;
        }
        eliminate(&mut a, step, tol)?;
    }

    Ok(PivotedLu {
        lu: Lu { factors: a },
        permutation,
        swaps,
    })
}

impl PivotedLu {
    /// Returns the row permutation: row `i` of `PA` is row `permutation[i]`
    /// of `A`.
    #[must_use]
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// Returns the number of row exchanges performed.
    #[must_use]
    pub fn swaps(&self) -> usize {
        self.swaps
    }

    /// Returns the factorization of the permuted matrix `PA`.
    #[must_use]
    pub fn lu(&self) -> &Lu {
        &self.lu
    }

    /// Returns `A` rebuilt from `Pᵀ L U`.
    #[must_use]
    pub fn reconstruct(&self) -> Array2<f64> {
        let permuted = self.lu.reconstruct();
        let mut a = Array2::zeros(permuted.raw_dim());
        for (i, &row) in self.permutation.iter().enumerate() {
            a.row_mut(row).assign(&permuted.row(i));
        }
        a
    }

    /// Solves `Ax = b`.
    ///
    /// # Errors
    ///
    /// Returns an error if `b` does not have length `n`.
    pub fn solve<S: Data<Elem = f64>>(&self, b: &ArrayBase<S, Ix1>) -> Result<Array1<f64>, Error> {
        matrix::ensure_len(b, self.lu.dim())?;
        let permuted: Array1<f64> = self.permutation.iter().map(|&i| b[i]).collect();
        self.lu.solve(&permuted)
    }

    /// Returns `det(A)`.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        let sign = if self.swaps % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.lu.determinant()
    }
}
