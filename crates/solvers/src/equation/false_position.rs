//! False-position (regula falsi) method for scalar equations.
//!
//! # Algorithm
//!
//! False position keeps a bracket `[x0, x1]` whose residuals have opposite
//! signs. Each iteration draws the chord between the endpoints and evaluates
//! where it crosses zero:
//!
//! ```text
//! x_new = x1 - f(x1) * (x1 - x0) / (f(x1) - f(x0))
//! ```
//!
//! The solve converges once `|f(x_new)|` drops below the configured residual
//! tolerance. Otherwise `x_new` replaces whichever endpoint shares its sign,
//! so the bracket always encloses a sign change.
//!
//! Unlike bisection the bracket width need not shrink to zero: on convex or
//! concave functions one endpoint typically stays fixed while the other
//! creeps toward the root.
//!
//! # Bracket Validation
//!
//! Endpoints must be finite and distinct, and are reordered so `x0 < x1`.
//! If either endpoint already meets the residual tolerance it is returned
//! with zero iterations. Otherwise the endpoint residuals must differ in
//! sign, or the solve fails with [`BracketError::NoSignChange`].
//!
//! # Observer Events
//!
//! One [`Event`] per iteration carrying the bracket at entry and the
//! evaluation at the chord root. [`Action::StopEarly`] ends the solve at that
//! chord root.

mod bracket;
mod config;
mod error;
mod event;


pub use bracket::{Bracket, BracketError, Endpoint};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;

use rootfind_core::{EquationProblem, Model, Observer};

use crate::equation::{Action, Solution, Status, evaluate};

use bracket::ordered;

/// Finds a root of the equation inside `bracket` using false position.
///
/// See the [module docs](self) for bracket rules and observer behavior.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, the iteration cap is reached,
/// a residual is non-finite, or the model or problem fails.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let [left, right] = ordered(bracket)?;

    let left_eval = evaluate(model, problem, left)?.finite()?;
    if left_eval.residual.abs() < config.residual_tol() {
        return Ok(Solution::from_eval(left_eval, Status::Converged, 0));
    }

    let right_eval = evaluate(model, problem, right)?.finite()?;
    if right_eval.residual.abs() < config.residual_tol() {
        return Ok(Solution::from_eval(right_eval, Status::Converged, 0));
    }

    let mut bracket = Bracket::new(Endpoint::from(&left_eval), Endpoint::from(&right_eval))?;

    for iter in 1..=config.max_iters() {
        let eval = evaluate(model, problem, bracket.chord_root())?.finite()?;

        let event = Event {
            iter,
            bracket: &bracket,
            eval: &eval,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_eval(eval, Status::StoppedByObserver, iter));
        }

        if eval.residual.abs() < config.residual_tol() {
            return Ok(Solution::from_eval(eval, Status::Converged, iter));
        }

        bracket.shrink(Endpoint::from(&eval));
    }

    Err(Error::MaxIterationsExceeded {
        iters: config.max_iters(),
        bracket: bracket.as_array(),
    })
}

/// Runs false position without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, the iteration cap is reached,
/// a residual is non-finite, or the model or problem fails.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}
