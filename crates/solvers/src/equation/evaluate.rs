use thiserror::Error;

use rootfind_core::{EquationProblem, Model, Snapshot};

/// A single point visited by a solver: `x`, its residual, and the model call
/// that produced it.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O> {
    pub x: f64,
    pub residual: f64,
    pub snapshot: Snapshot<I, O>,
}

impl<I, O> Evaluation<I, O> {
    /// Passes the evaluation through if its residual is a finite number.
    ///
    /// # Errors
    ///
    /// Returns [`NonFiniteResidual`] if the residual is NaN or infinite.
    pub fn finite(self) -> Result<Self, NonFiniteResidual> {
        if self.residual.is_finite() {
            Ok(self)
        } else {
            Err(NonFiniteResidual {
                x: self.x,
                residual: self.residual,
            })
        }
    }
}

/// A residual that is NaN or infinite, which no solver can iterate on.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("non-finite residual {residual} at x = {x}")]
pub struct NonFiniteResidual {
    pub x: f64,
    pub residual: f64,
}

/// Errors that can occur when evaluating an equation problem.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),

    /// The problem could not build the input or compute the residual.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output>,
    EvalError<<M as Model>::Error, <P as EquationProblem>::Error>,
>;

/// Evaluates the model at `x` in the context of an equation problem.
///
/// # Errors
///
/// Returns an error if input mapping, the model call, or the residual
/// computation fails.
pub fn evaluate<M, P>(model: &M, problem: &P, x: f64) -> EvaluateResult<M, P>
where
    M: Model,
    P: EquationProblem<Input = M::Input, Output = M::Output>,
{
    let input = problem.input(x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let residual = problem
        .residual(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        residual,
        snapshot: Snapshot::new(input, output),
    })
}
