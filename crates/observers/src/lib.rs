//! Reusable observers for rootfind solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the equation solvers in `rootfind-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasIterate`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TraceObserver`]: logs each iteration as a `tracing` debug event
//! - [`StopOnResidual`]: stops a solve once the residual is small enough
//!
//! [`Observer`]: rootfind_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasIterate`]: traits::HasIterate
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod residual;
mod trace;

pub use residual::StopOnResidual;
pub use trace::TraceObserver;
