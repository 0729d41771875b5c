use thiserror::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_tol: f64,
}

/// Errors that can occur when validating a bisection config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_tol must be finite and positive")]
    XTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_tol: 1e-12,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `x_tol` is not finite and positive.
    pub fn new(max_iters: usize, x_tol: f64) -> Result<Self, ConfigError> {
        if !x_tol.is_finite() || x_tol <= 0.0 {
            return Err(ConfigError::XTol);
        }

        Ok(Self { max_iters, x_tol })
    }

    /// Returns the maximum number of midpoint evaluations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the bracket width below which the solver converges.
    #[must_use]
    pub fn x_tol(&self) -> f64 {
        self.x_tol
    }
}
