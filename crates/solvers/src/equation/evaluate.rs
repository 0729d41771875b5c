use std::fmt::Display;

use num_complex::Complex64;
use thiserror::Error;

use numera_core::{ComplexFunction, Function};

/// Errors that can occur when evaluating a scalar function.
#[derive(Debug, Error)]
pub enum EvalError<E, T: Display> {
    /// The function call failed.
    #[error("function call failed")]
    Function(#[source] E),

    /// The function returned NaN or an infinity.
    #[error("non-finite value {value} at x = {x}")]
    NonFinite { x: T, value: T },
}

/// Evaluates `f` at `x`, rejecting non-finite results.
///
/// # Errors
///
/// Returns an error if the function fails or returns a non-finite value.
pub fn evaluate<F: Function>(f: &F, x: f64) -> Result<f64, EvalError<F::Error, f64>> {
    let value = f.call(x).map_err(EvalError::Function)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite { x, value })
    }
}

/// Evaluates a complex function at `z`, rejecting non-finite results.
///
/// # Errors
///
/// Returns an error if the function fails or returns a non-finite value.
pub fn evaluate_complex<F: ComplexFunction>(
    f: &F,
    z: Complex64,
) -> Result<Complex64, EvalError<F::Error, Complex64>> {
    let value = f.call(z).map_err(EvalError::Function)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite { x: z, value })
    }
}
