//! Numerical solvers for scalar equations.
//!
//! Every solver in this crate follows the same shape: it takes a
//! [`Model`](rootfind_core::Model), an equation problem that turns the solver
//! variable into a model input and a residual, the seed(s), a validated
//! `Config`, and an [`Observer`](rootfind_core::Observer). The observer sees
//! each iteration and can stop the solve early. Every solver also offers a
//! `solve_unobserved` convenience wrapper.

pub mod equation;
