use thiserror::Error;

/// Configuration for the open root finders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_rel_tol: f64,
    zero_tol: f64,
}

/// Errors that can occur when validating an open-method config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_rel_tol must be finite and non-negative")]
    XRel,

    #[error("zero_tol must be finite and non-negative")]
    Zero,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_rel_tol: 1e-12,
            zero_tol: 0.0,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// A Newton derivative or Halley denominator with magnitude at or below
    /// `zero_tol` counts as zero. The default of `0.0` only rejects an exact
    /// zero, so badly scaled but well-posed functions still make progress.
    /// The secant method ignores `zero_tol`: its slope is flat only when two
    /// function values are exactly equal.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(max_iters: usize, x_rel_tol: f64, zero_tol: f64) -> Result<Self, ConfigError> {
        if !x_rel_tol.is_finite() || x_rel_tol < 0.0 {
            return Err(ConfigError::XRel);
        }
        if !zero_tol.is_finite() || zero_tol < 0.0 {
            return Err(ConfigError::Zero);
        }

        Ok(Self {
            max_iters,
            x_rel_tol,
            zero_tol,
        })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the relative step tolerance.
    #[must_use]
    pub fn x_rel_tol(&self) -> f64 {
        self.x_rel_tol
    }

    /// Returns the magnitude at or below which a derivative counts as zero.
    #[must_use]
    pub fn zero_tol(&self) -> f64 {
        self.zero_tol
    }
}
