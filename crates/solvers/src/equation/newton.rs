//! Newton-Raphson (tangent) method for scalar equations.
//!
//! # Algorithm
//!
//! Starting from a single seed `x0`, each iteration follows the tangent of
//! the residual to its zero crossing:
//!
//! ```text
//! x_{n+1} = x_n - f(x_n) / f'(x_n)
//! ```
//!
//! The solve converges once the step size `|x_{n+1} - x_n|` drops below the
//! configured tolerance. The residual slope comes from
//! [`DifferentiableProblem::derivative`].
//!
//! # Failure Modes
//!
//! - A derivative that is exactly zero makes the update undefined and yields
//!   [`Error::DegenerateStep`]. The comparison is exact; tiny but non-zero
//!   slopes produce large steps rather than an error.
//! - Running out of iterations yields [`Error::MaxIterationsExceeded`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after evaluating the new
//! iterate and before testing convergence. Observers can return
//! [`Action::StopEarly`] to end the solve at that iterate.

mod config;
mod error;
mod event;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;

use rootfind_core::{DifferentiableProblem, EquationProblem, Model, Observer};

use crate::equation::{Action, Solution, Status, evaluate};

/// Finds a root of the equation using Newton-Raphson iteration from `x0`.
///
/// See the [module docs](self) for the update rule and observer behavior.
///
/// # Errors
///
/// Returns an error if the derivative vanishes, the iteration cap is reached,
/// a residual or derivative is non-finite, or the model or problem fails.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: DifferentiableProblem + EquationProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let mut current = evaluate(model, problem, x0)?.finite()?;

    for iter in 1..=config.max_iters() {
        let x = current.x;
        let residual = current.residual;
        let derivative = problem
            .derivative(&current.snapshot.input, &current.snapshot.output)
            .map_err(Error::problem)?;

        #[allow(clippy::float_cmp)]
        if derivative == 0.0 {
            return Err(Error::DegenerateStep { x, residual });
        }
        if !derivative.is_finite() {
            return Err(Error::NonFiniteDerivative { x, derivative });
        }

        let x_new = x - residual / derivative;
        let step = x_new - x;
        let next = evaluate(model, problem, x_new)?.finite()?;

        let event = Event {
            iter,
            from: x,
            derivative,
            step,
            eval: &next,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_eval(next, Status::StoppedByObserver, iter));
        }

        if step.abs() < config.step_tol() {
            return Ok(Solution::from_eval(next, Status::Converged, iter));
        }

        current = next;
    }

    Err(Error::MaxIterationsExceeded {
        iters: config.max_iters(),
        x: current.x,
    })
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// Returns an error if the derivative vanishes, the iteration cap is reached,
/// a residual or derivative is non-finite, or the model or problem fails.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    x0: f64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: DifferentiableProblem + EquationProblem<Input = M::Input, Output = M::Output>,
{
    solve(model, problem, x0, config, ())
}
