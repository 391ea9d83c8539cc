//! Textbook problems solved by the `newton`, `secant`, and `false_position`
//! demo binaries.
//!
//! Each binary prints a single line with the root it found. Set `RUST_LOG`
//! to see the iterations on stderr:
//!
//! ```sh
//! RUST_LOG=debug cargo run -p rootfind-demos --bin secant
//! ```

use std::f64::consts::FRAC_PI_2;

use rootfind_core::scalar::{Function, Root, RootWithDerivative};
use rootfind_observers::TraceObserver;
use rootfind_solvers::equation::{false_position, newton, secant};
use tracing_subscriber::EnvFilter;

/// `sin(x) - x/2`, which has a positive root near 1.8955.
#[must_use]
pub fn half_sine(x: f64) -> f64 {
    x.sin() - 0.5 * x
}

/// Derivative of [`half_sine`].
#[must_use]
pub fn half_sine_derivative(x: f64) -> f64 {
    x.cos() - 0.5
}

/// `x^3 + x^2 - 3x - 3`, which has a root at `sqrt(3)`.
#[must_use]
pub fn cubic(x: f64) -> f64 {
    x.powi(3) + x.powi(2) - 3.0 * x - 3.0
}

/// `3x - cos(x) - 1`, which has a root near 0.6071.
#[must_use]
pub fn cosine_line(x: f64) -> f64 {
    3.0 * x - x.cos() - 1.0
}

/// Solves [`half_sine`] with Newton-Raphson starting from `pi/2`.
///
/// # Errors
///
/// Returns the solver error if the iteration fails.
pub fn newton_root() -> Result<f64, newton::Error> {
    let solution = newton::solve(
        &Function(half_sine),
        &RootWithDerivative(half_sine_derivative),
        FRAC_PI_2,
        &newton::Config::default(),
        TraceObserver::new("newton"),
    )?;
    Ok(solution.x)
}

/// Solves [`cubic`] with the secant method from seeds `1` and `2`.
///
/// # Errors
///
/// Returns the solver error if the iteration fails.
pub fn secant_root() -> Result<f64, secant::Error> {
    let solution = secant::solve(
        &Function(cubic),
        &Root,
        [1.0, 2.0],
        &secant::Config::default(),
        TraceObserver::new("secant"),
    )?;
    Ok(solution.x)
}

/// Solves [`cosine_line`] with false position on `[0.25, 0.75]`.
///
/// # Errors
///
/// Returns the solver error if the bracket is invalid or the iteration fails.
pub fn false_position_root() -> Result<f64, false_position::Error> {
    let solution = false_position::solve(
        &Function(cosine_line),
        &Root,
        [0.25, 0.75],
        &false_position::Config::default(),
        TraceObserver::new("false_position"),
    )?;
    Ok(solution.x)
}

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG`.
///
/// Without `RUST_LOG` only error records are shown.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
