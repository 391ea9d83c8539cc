//! What an observer may assume about an event or action, independent of
//! which solver produced it.
//!
//! Newton-Raphson, secant, and false position each define their own `Event`
//! type. All three implement [`HasResidual`] and [`HasIterate`], and the
//! shared [`Action`] implements [`CanStopEarly`], so one observer written
//! against these traits runs under any of the solvers.
//!
//! # Example
//!
//! ```rust
//! use rootfind_core::Observer;
//! use rootfind_observers::traits::{CanStopEarly, HasIterate};
//!
//! /// Stops once the iterate leaves a trusted interval.
//! struct StayWithin {
//!     lower: f64,
//!     upper: f64,
//! }
//!
//! impl<E: HasIterate, A: CanStopEarly> Observer<E, A> for StayWithin {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let x = event.x();
//!         (x < self.lower || x > self.upper).then(A::stop_early)
//!     }
//! }
//! ```

use rootfind_solvers::equation::{Action, false_position, newton, secant};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual at the point evaluated for this event.
    fn residual(&self) -> f64;
}

/// An event emitted once per solver iteration.
pub trait HasIterate {
    /// Returns the iteration counter (1-based).
    fn iter(&self) -> usize;

    /// Returns the new iterate evaluated for this event (`eval.x`).
    ///
    /// For Newton-Raphson and secant events this is the point the step
    /// landed on, not the `from` point it started at.
    fn x(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- Event impls ---

impl<I, O> HasResidual for newton::Event<'_, I, O> {
    fn residual(&self) -> f64 {
        self.eval.residual
    }
}

impl<I, O> HasIterate for newton::Event<'_, I, O> {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.eval.x
    }
}

impl<I, O> HasResidual for secant::Event<'_, I, O> {
    fn residual(&self) -> f64 {
        self.eval.residual
    }
}

impl<I, O> HasIterate for secant::Event<'_, I, O> {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.eval.x
    }
}

impl<I, O> HasResidual for false_position::Event<'_, I, O> {
    fn residual(&self) -> f64 {
        self.eval.residual
    }
}

impl<I, O> HasIterate for false_position::Event<'_, I, O> {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.eval.x
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
