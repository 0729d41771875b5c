use thiserror::Error;

use super::{Error, Solution};

/// What to do with a final estimate that has left the real axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ComplexPolicy {
    /// Return complex estimates unchanged.
    #[default]
    Keep,

    /// Fail with [`Error::ComplexRoot`] when the estimate is not real.
    Reject,
}

/// Configuration for Müller's method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_rel_tol: f64,
    policy: ComplexPolicy,
    imag_tol: f64,
}

/// Errors that can occur when validating a Müller config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_rel_tol must be finite and non-negative")]
    XRel,

    #[error("imag_tol must be finite and non-negative")]
    Imag,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_rel_tol: 1e-12,
            policy: ComplexPolicy::Keep,
            imag_tol: 1e-10,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// An estimate counts as real when `|im| <= imag_tol · max(1, |re|)`.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(
        max_iters: usize,
        x_rel_tol: f64,
        policy: ComplexPolicy,
        imag_tol: f64,
    ) -> Result<Self, ConfigError> {
        if !x_rel_tol.is_finite() || x_rel_tol < 0.0 {
            return Err(ConfigError::XRel);
        }
        if !imag_tol.is_finite() || imag_tol < 0.0 {
            return Err(ConfigError::Imag);
        }

        Ok(Self {
            max_iters,
            x_rel_tol,
            policy,
            imag_tol,
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

    /// Returns the complex-estimate policy.
    #[must_use]
    pub fn policy(&self) -> ComplexPolicy {
        self.policy
    }

    /// Returns the relative tolerance on the imaginary part.
    #[must_use]
    pub fn imag_tol(&self) -> f64 {
        self.imag_tol
    }

    pub(super) fn apply_policy(&self, solution: Solution) -> Result<Solution, Error> {
        match self.policy {
            ComplexPolicy::Reject if solution.real().is_none() => {
                Err(Error::ComplexRoot { x: solution.x })
            }
            _ => Ok(solution),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keeps_complex_estimates() {
        assert_eq!(Config::default().policy(), ComplexPolicy::Keep);
    }

    #[test]
    fn rejects_bad_tolerances() {
        assert_eq!(
            Config::new(10, -1.0, ComplexPolicy::Keep, 0.0),
            Err(ConfigError::XRel)
        );
        assert_eq!(
            Config::new(10, 1e-8, ComplexPolicy::Reject, f64::NAN),
            Err(ConfigError::Imag)
        );
    }
}
