use crate::equation::Evaluation;

/// Iteration event emitted by the secant solver.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The latest iterate before this step.
    pub from: f64,

    /// Signed step from `from` to the new iterate `eval.x`.
    pub step: f64,

    /// Evaluation at the new iterate.
    pub eval: &'a Evaluation<I, O>,
}
