//! Secant method for scalar equations.
//!
//! # Algorithm
//!
//! The secant method replaces the derivative in Newton's update with the
//! slope through the two most recent iterates:
//!
//! ```text
//! x_{n+1} = x_n - f(x_n) * (x_n - x_{n-1}) / (f(x_n) - f(x_{n-1}))
//! ```
//!
//! After each step the iterates shift (`x_{n-1} <- x_n`, `x_n <- x_{n+1}`).
//! The solve converges once `|x_{n+1} - x_n|` drops below the configured
//! tolerance. The two seeds need not bracket a root.
//!
//! Each iterate is evaluated once; residuals are carried forward rather than
//! recomputed.
//!
//! # Failure Modes
//!
//! - Equal residuals at the two latest iterates (`f(x_n) - f(x_{n-1}) == 0`,
//!   compared exactly) give a flat secant and yield [`Error::DegenerateStep`].
//!   Passing the same value for both seeds triggers this on the first step.
//! - Running out of iterations yields [`Error::MaxIterationsExceeded`].
//!
//! # Observer Events
//!
//! One [`Event`] per iteration, emitted after the new iterate is evaluated
//! and before the convergence test. [`Action::StopEarly`] ends the solve at
//! that iterate.

mod config;
mod error;
mod event;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;

use rootfind_core::{EquationProblem, Model, Observer};

use crate::equation::{Action, Solution, Status, evaluate};

/// Finds a root of the equation using the secant method from two seeds.
///
/// See the [module docs](self) for the update rule and observer behavior.
///
/// # Errors
///
/// Returns an error if the secant through the latest iterates is flat, the
/// iteration cap is reached, a residual is non-finite, or the model or
/// problem fails.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    seeds: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let [x0, x1] = seeds;
    let mut previous = evaluate(model, problem, x0)?.finite()?;
    let mut current = evaluate(model, problem, x1)?.finite()?;

    for iter in 1..=config.max_iters() {
        let (x0, f0) = (previous.x, previous.residual);
        let (x1, f1) = (current.x, current.residual);

        let delta = f1 - f0;
        #[allow(clippy::float_cmp)]
        if delta == 0.0 {
            return Err(Error::DegenerateStep {
                x0,
                x1,
                residual: f1,
            });
        }

        let x_new = x1 - f1 * (x1 - x0) / delta;
        let step = x_new - x1;
        let next = evaluate(model, problem, x_new)?.finite()?;

        let event = Event {
            iter,
            from: x1,
            step,
            eval: &next,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_eval(next, Status::StoppedByObserver, iter));
        }

        if step.abs() < config.step_tol() {
            return Ok(Solution::from_eval(next, Status::Converged, iter));
        }

        previous = current;
        current = next;
    }

    Err(Error::MaxIterationsExceeded {
        iters: config.max_iters(),
        x: current.x,
    })
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// Returns an error if the secant through the latest iterates is flat, the
/// iteration cap is reached, a residual is non-finite, or the model or
/// problem fails.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    seeds: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<Input = M::Input, Output = M::Output>,
{
    solve(model, problem, seeds, config, ())
}
