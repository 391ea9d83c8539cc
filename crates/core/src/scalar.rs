//! Adapters for solving plain `f64 -> f64` functions.
//!
//! Most root-finding needs are a single function and a seed. These adapters
//! wrap closures so they plug into the [`Model`] and [`EquationProblem`]
//! traits without any boilerplate:
//!
//! ```
//! use rootfind_core::{EquationProblem, Model, scalar::{Function, Root}};
//!
//! let model = Function(|x: f64| x * x - 2.0);
//! let output = model.call(&1.5).unwrap();
//! let residual = Root.residual(&1.5, &output).unwrap();
//! assert!((residual - 0.25).abs() < 1e-12);
//! ```

use std::convert::Infallible;

use crate::{DifferentiableProblem, EquationProblem, Model};

/// A model backed by a scalar function.
#[derive(Debug, Clone, Copy)]
pub struct Function<F>(pub F);

impl<F> Model for Function<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Infallible> {
        Ok((self.0)(*input))
    }
}

/// Finds `x` such that the scalar model output is zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Root;

impl EquationProblem for Root {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: f64) -> Result<f64, Infallible> {
        Ok(x)
    }

    fn residual(&self, _input: &f64, output: &f64) -> Result<f64, Infallible> {
        Ok(*output)
    }
}

/// Like [`Root`], with an analytic derivative of the model function.
#[derive(Debug, Clone, Copy)]
pub struct RootWithDerivative<D>(pub D);

impl<D> EquationProblem for RootWithDerivative<D>
where
    D: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: f64) -> Result<f64, Infallible> {
        Ok(x)
    }

    fn residual(&self, _input: &f64, output: &f64) -> Result<f64, Infallible> {
        Ok(*output)
    }
}

impl<D> DifferentiableProblem for RootWithDerivative<D>
where
    D: Fn(f64) -> f64,
{
    fn derivative(&self, input: &f64, _output: &f64) -> Result<f64, Infallible> {
        Ok((self.0)(*input))
    }
}
