use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::{EvalError, NonFiniteResidual};

/// Errors that can occur during Newton-Raphson solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("degenerate step: derivative is zero at x = {x} (residual {residual})")]
    DegenerateStep { x: f64, residual: f64 },

    #[error("no convergence after {iters} iterations, last x = {x}")]
    MaxIterationsExceeded { iters: usize, x: f64 },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("non-finite derivative {derivative} at x = {x}")]
    NonFiniteDerivative { x: f64, derivative: f64 },

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn problem<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Problem(Box::new(err))
    }
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}

impl From<NonFiniteResidual> for Error {
    fn from(NonFiniteResidual { x, residual }: NonFiniteResidual) -> Self {
        Self::NonFiniteResidual { x, residual }
    }
}
