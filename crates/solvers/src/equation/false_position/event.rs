use crate::equation::Evaluation;

use super::Bracket;

/// Iteration event emitted by the false-position solver.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The bracket at entry to this iteration.
    pub bracket: &'a Bracket,

    /// Evaluation at the chord root of `bracket`.
    pub eval: &'a Evaluation<I, O>,
}
