use crate::equation::Evaluation;

/// Iteration event emitted by the Newton-Raphson solver.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The iterate the tangent step was taken from.
    pub from: f64,

    /// Residual slope at `from`.
    pub derivative: f64,

    /// Signed step from `from` to the new iterate `eval.x`.
    pub step: f64,

    /// Evaluation at the new iterate.
    pub eval: &'a Evaluation<I, O>,
}
