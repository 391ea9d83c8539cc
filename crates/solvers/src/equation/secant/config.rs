use thiserror::Error;

/// Configuration for the secant solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    step_tol: f64,
}

/// Errors that can occur when validating a secant solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step_tol must be finite and positive")]
    StepTol,
}

impl Default for Config {
    /// At most 100 iterations, stopping once a step is shorter than `1e-4`.
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-4).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated step tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `step_tol` is not finite and strictly positive.
    pub fn new(max_iters: usize, step_tol: f64) -> Result<Self, ConfigError> {
        if !step_tol.is_finite() || step_tol <= 0.0 {
            return Err(ConfigError::StepTol);
        }

        Ok(Self {
            max_iters,
            step_tol,
        })
    }

    /// Returns the maximum number of secant steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the step size below which the solve has converged.
    #[must_use]
    pub fn step_tol(&self) -> f64 {
        self.step_tol
    }
}
