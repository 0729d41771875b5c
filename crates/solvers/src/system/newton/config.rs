use thiserror::Error;

/// Configuration for the multivariate Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    step_tol: f64,
}

/// Errors that can occur when validating a multivariate Newton config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step_tol must be finite and positive")]
    StepTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 50,
            step_tol: 1e-12,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// The solver stops once the Euclidean norm of a Newton step drops below
    /// `step_tol`.
    ///
    /// # Errors
    ///
    /// Returns an error if `step_tol` is not finite and positive.
    pub fn new(max_iters: usize, step_tol: f64) -> Result<Self, ConfigError> {
        if !step_tol.is_finite() || step_tol <= 0.0 {
            return Err(ConfigError::StepTol);
        }

        Ok(Self { max_iters, step_tol })
    }

    /// Returns the maximum number of Newton steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the step norm tolerance.
    #[must_use]
    pub fn step_tol(&self) -> f64 {
        self.step_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_positive_tolerance() {
        assert_eq!(Config::new(10, 0.0), Err(ConfigError::StepTol));
        assert_eq!(Config::new(10, f64::NAN), Err(ConfigError::StepTol));
        assert!(Config::new(10, 1e-9).is_ok());
    }
}
