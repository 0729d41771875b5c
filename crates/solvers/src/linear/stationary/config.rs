use thiserror::Error;

/// Configuration for the Jacobi and Gauss-Seidel solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    rel_tol: f64,
}

/// Errors that can occur when validating a stationary solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rel_tol must be finite and non-negative")]
    RelTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 500,
            rel_tol: 1e-10,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// A zero `rel_tol` never converges and runs the full budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `rel_tol` is negative or non-finite.
    pub fn new(max_iters: usize, rel_tol: f64) -> Result<Self, ConfigError> {
        if !rel_tol.is_finite() || rel_tol < 0.0 {
            return Err(ConfigError::RelTol);
        }

        Ok(Self { max_iters, rel_tol })
    }

    /// Returns the maximum number of sweeps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the relative change tolerance.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }
}
