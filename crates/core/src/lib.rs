//! Core traits and types for scalar root finding.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! models build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`EquationProblem`]: adapts solver variables to model inputs and
//!   extracts a residual from outputs
//! - [`DifferentiableProblem`]: an equation problem that also provides the
//!   slope of its residual
//!
//! The [`scalar`] module wraps plain closures so a function `f(x)` can be
//! handed to a solver directly.

mod model;
mod observer;
mod problems;

pub mod scalar;

pub use observer::Observer;
pub use problems::{DifferentiableProblem, EquationProblem};
pub use {model::Model, model::Snapshot};
