use thiserror::Error;

/// Configuration for the false-position solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
}

/// Errors that can occur when validating a false-position solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and positive")]
    ResidualTol,
}

impl Default for Config {
    /// At most 1000 iterations, stopping once `|f(x)| < 1e-5`.
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1000, 1e-5).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated residual tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `residual_tol` is not finite and strictly positive.
    pub fn new(max_iters: usize, residual_tol: f64) -> Result<Self, ConfigError> {
        if !residual_tol.is_finite() || residual_tol <= 0.0 {
            return Err(ConfigError::ResidualTol);
        }

        Ok(Self {
            max_iters,
            residual_tol,
        })
    }

    /// Returns the maximum number of bracket updates.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the residual magnitude below which the solve has converged.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_residual_tol() {
        assert_eq!(Config::new(10, 0.0), Err(ConfigError::ResidualTol));
        assert_eq!(Config::new(10, -1e-5), Err(ConfigError::ResidualTol));
        assert_eq!(Config::new(10, f64::NAN), Err(ConfigError::ResidualTol));
        assert_eq!(Config::new(10, f64::INFINITY), Err(ConfigError::ResidualTol));
    }

    #[test]
    fn default_matches_textbook_values() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 1000);
        assert!((config.residual_tol() - 1e-5).abs() < f64::EPSILON);
    }
}
