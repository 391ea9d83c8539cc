use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::{EvalError, NonFiniteResidual};

use super::BracketError;

/// Errors that can occur during false-position solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("no convergence after {iters} iterations, bracket {bracket:?}")]
    MaxIterationsExceeded { iters: usize, bracket: [f64; 2] },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
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
