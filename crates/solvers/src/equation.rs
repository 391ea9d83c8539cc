//! Solvers for equation problems: finding roots of a scalar equation.
//!
//! An [`EquationProblem`] maps the solver variable `x` to a model input,
//! calls the model, and computes a residual. Solvers in this module drive that
//! residual toward zero.
//!
//! # Solvers
//!
//! - [`newton`]: Newton-Raphson tangent steps using an analytic derivative
//! - [`secant`]: derivative-free steps through the two latest iterates
//! - [`false_position`]: secant steps that keep the root bracketed
//!
//! All three return a [`Solution`] on convergence. Hitting the iteration cap
//! or a degenerate update is an error, never a partial result.
//!
//! [`EquationProblem`]: rootfind_core::EquationProblem

mod action;
mod evaluate;
mod solution;

pub use action::Action;
pub use evaluate::{EvalError, EvaluateResult, Evaluation, NonFiniteResidual, evaluate};
pub use solution::{Solution, Status};

pub mod false_position;
pub mod newton;
pub mod secant;
