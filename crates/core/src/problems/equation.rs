/// Defines a scalar equation to be solved.
///
/// An equation problem maps the solver variable `x` to a model input,
/// then computes a residual from the model input and output.
/// Solvers drive this residual toward zero.
pub trait EquationProblem {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps the solver variable `x` into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: f64) -> Result<Self::Input, Self::Error>;

    /// Computes the residual from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the residual cannot be computed.
    fn residual(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}

/// An equation problem that also knows the slope of its residual.
///
/// Derivative-based solvers such as Newton-Raphson require this trait.
pub trait DifferentiableProblem: EquationProblem {
    /// Computes `d(residual)/dx` at an evaluated point.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn derivative(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}
