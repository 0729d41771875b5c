//! Shared fixtures for the cross-crate tests.

pub mod problems {
    use std::cell::Cell;

    use ndarray::{Array1, Array2, array};
    use numera_core::Function;
    use thiserror::Error;

    /// `x³ − 3.23x² − 5.54x + 9.84`, with roots −2, 1.23, and 4.
    pub fn cubic(x: f64) -> f64 {
        x.powi(3) - 3.23 * x.powi(2) - 5.54 * x + 9.84
    }

    /// Derivative of [`cubic`].
    pub fn cubic_derivative(x: f64) -> f64 {
        3.0 * x.powi(2) - 6.46 * x - 5.54
    }

    /// Second derivative of [`cubic`].
    pub fn cubic_second_derivative(x: f64) -> f64 {
        6.0 * x - 6.46
    }

    /// Wraps a function and counts how often it is called.
    pub struct Counted<F> {
        function: F,
        calls: Cell<usize>,
    }

    impl<F> Counted<F> {
        pub fn new(function: F) -> Self {
            Self {
                function,
                calls: Cell::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.get()
        }
    }

    impl<F: Fn(f64) -> f64> Function for Counted<F> {
        type Error = std::convert::Infallible;

        fn call(&self, x: f64) -> Result<f64, Self::Error> {
            self.calls.set(self.calls.get() + 1);
            Ok((self.function)(x))
        }
    }

    #[derive(Debug, Error, PartialEq, Eq)]
    #[error("logarithm of a non-positive number")]
    pub struct OutOfDomain;

    /// `ln(x) − 1`, which fails for `x <= 0`.
    pub struct LogMinusOne;

    impl Function for LogMinusOne {
        type Error = OutOfDomain;

        fn call(&self, x: f64) -> Result<f64, OutOfDomain> {
            if x <= 0.0 {
                Err(OutOfDomain)
            } else {
                Ok(x.ln() - 1.0)
            }
        }
    }

    /// The textbook system whose LU solution is `[3, 4, −2]`.
    pub fn textbook_system() -> (Array2<f64>, Array1<f64>) {
        (
            array![[1.0, 2.0, 4.0], [3.0, 8.0, 14.0], [2.0, 6.0, 13.0]],
            array![3.0, 13.0, 4.0],
        )
    }

    /// A strictly diagonally dominant system.
    pub fn dominant_system() -> (Array2<f64>, Array1<f64>) {
        (
            array![[5.0, 1.0, 1.0], [1.0, 4.0, 1.0], [0.0, 1.0, 6.0]],
            array![7.0, -8.0, 6.0],
        )
    }
}

pub mod strategies {
    use std::ops::{Range, RangeInclusive};

    use ndarray::{Array1, Array2};
    use proptest::prelude::*;

    /// Strictly diagonally dominant square matrices with nonpositive
    /// off-diagonal entries, sized from `sizes`.
    ///
    /// Each diagonal entry exceeds its row's off-diagonal sum by 1 to 2, which
    /// makes every matrix a nonsingular M-matrix: LU needs no pivoting and
    /// both stationary iterations converge.
    pub fn dominant_matrices(sizes: RangeInclusive<usize>) -> impl Strategy<Value = Array2<f64>> {
        sizes.prop_flat_map(|n| {
            (
                proptest::collection::vec(0.0..1.0_f64, n * n),
                proptest::collection::vec(1.0..2.0_f64, n),
            )
                .prop_map(move |(off, margins)| {
                    let mut a = Array2::from_shape_fn((n, n), |(i, j)| {
                        if i == j { 0.0 } else { -off[i * n + j] }
                    });
                    for i in 0..n {
                        let row_sum: f64 = a.row(i).iter().map(|v| v.abs()).sum();
                        a[[i, i]] = row_sum + margins[i];
                    }
                    a
                })
        })
    }

    /// Dominant systems `(A, b)` with right-hand sides in `[-1, 1]`.
    pub fn dominant_systems(
        sizes: RangeInclusive<usize>,
    ) -> impl Strategy<Value = (Array2<f64>, Array1<f64>)> {
        dominant_matrices(sizes).prop_flat_map(|a| {
            let n = a.nrows();
            (Just(a), vectors(n, -1.0..1.0))
        })
    }

    /// Vectors of length `n` with entries drawn from `range`.
    pub fn vectors(n: usize, range: Range<f64>) -> impl Strategy<Value = Array1<f64>> {
        proptest::collection::vec(range, n).prop_map(Array1::from)
    }

    /// Tolerances spread log-uniformly over `10^exponents`.
    pub fn tolerances(exponents: Range<f64>) -> impl Strategy<Value = f64> {
        exponents.prop_map(|e| 10.0_f64.powf(e))
    }
}
