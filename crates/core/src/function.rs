use std::{convert::Infallible, error::Error as StdError};

use ndarray::{Array1, Array2};
use num_complex::Complex64;

/// A real scalar function `f: ℝ → ℝ` supplied by the caller.
///
/// Solvers only ever call the function; they never mutate it. Closures of
/// type `Fn(f64) -> f64` implement this trait with an [`Infallible`] error.
/// Implement it directly when evaluation can fail.
pub trait Function {
    type Error: StdError + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot be evaluated at `x`.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

/// A scalar function evaluated over the complex plane.
///
/// Needed by methods such as Müller's, whose iterates may leave the real axis
/// even when the function has real coefficients.
pub trait ComplexFunction {
    type Error: StdError + Send + Sync + 'static;

    /// Evaluates the function at `z`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot be evaluated at `z`.
    fn call(&self, z: Complex64) -> Result<Complex64, Self::Error>;
}

impl<F> ComplexFunction for F
where
    F: Fn(Complex64) -> Complex64,
{
    type Error = Infallible;

    fn call(&self, z: Complex64) -> Result<Complex64, Self::Error> {
        Ok(self(z))
    }
}

/// A vector-valued function `F: ℝⁿ → ℝᵐ`.
pub trait VectorFunction {
    type Error: StdError + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot be evaluated at `x`.
    fn call(&self, x: &Array1<f64>) -> Result<Array1<f64>, Self::Error>;
}

impl<F> VectorFunction for F
where
    F: Fn(&Array1<f64>) -> Array1<f64>,
{
    type Error = Infallible;

    fn call(&self, x: &Array1<f64>) -> Result<Array1<f64>, Self::Error> {
        Ok(self(x))
    }
}

/// The Jacobian `J(x)` of a vector function, one row per output.
pub trait Jacobian {
    type Error: StdError + Send + Sync + 'static;

    /// Evaluates the matrix of partial derivatives at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the Jacobian cannot be evaluated at `x`.
    fn call(&self, x: &Array1<f64>) -> Result<Array2<f64>, Self::Error>;
}

impl<F> Jacobian for F
where
    F: Fn(&Array1<f64>) -> Array2<f64>,
{
    type Error = Infallible;

    fn call(&self, x: &Array1<f64>) -> Result<Array2<f64>, Self::Error> {
        Ok(self(x))
    }
}

/// Approximates a Jacobian by forward differences of a vector function.
///
/// Column `j` is `(F(x + h e_j) − F(x)) / h` with `h = step · max(1, |x_j|)`.
/// Each call costs `n + 1` evaluations of the wrapped function.
///
/// # Panics
///
/// [`Jacobian::call`] panics if the wrapped function returns outputs of
/// different lengths at `x` and at a perturbed point.
#[derive(Debug, Clone, Copy)]
pub struct ForwardDifference<'a, F> {
    function: &'a F,
    step: f64,
}

impl<'a, F: VectorFunction> ForwardDifference<'a, F> {
    /// Wraps `function` using a step of `√ε` (machine epsilon).
    #[must_use]
    pub fn new(function: &'a F) -> Self {
        Self {
            function,
            step: f64::EPSILON.sqrt(),
        }
    }

    /// Uses `step` as the relative perturbation size.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }
}

impl<F: VectorFunction> Jacobian for ForwardDifference<'_, F> {
    type Error = F::Error;

    fn call(&self, x: &Array1<f64>) -> Result<Array2<f64>, Self::Error> {
        let base = self.function.call(x)?;
        let mut jacobian = Array2::zeros((base.len(), x.len()));

        let mut shifted = x.clone();
        for j in 0..x.len() {
            let h = self.step * x[j].abs().max(1.0);
            shifted[j] = x[j] + h;
            let value = self.function.call(&shifted)?;
            shifted[j] = x[j];
            assert_eq!(
                value.len(),
                base.len(),
                "forward difference: output shape changed at column {j}"
            );

            let column = (value - &base) / h;
            jacobian.column_mut(j).assign(&column);
        }

        Ok(jacobian)
    }
}
