/// The function under study, with typed input and output.
///
/// Solvers never call a model with a raw `x`. An
/// [`EquationProblem`](crate::EquationProblem) first turns `x` into
/// [`Model::Input`] and afterwards reads the residual from the input and
/// [`Model::Output`].
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the model.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the model cannot produce an output for
    /// `input`.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// The input and output of one model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    #[must_use]
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}
