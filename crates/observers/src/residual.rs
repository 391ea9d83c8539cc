use rootfind_core::Observer;

use crate::traits::{CanStopEarly, HasResidual};

/// Stops a solve as soon as an iterate's residual magnitude is below `tol`.
///
/// Newton-Raphson and the secant method converge on step size. Pair them with
/// this observer to also accept any iterate that already satisfies
/// `|f(x)| < tol`; the solution then reports
/// [`Status::StoppedByObserver`](rootfind_solvers::equation::Status).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopOnResidual {
    pub tol: f64,
}

impl StopOnResidual {
    /// Creates an observer with the given residual tolerance.
    #[must_use]
    pub fn new(tol: f64) -> Self {
        Self { tol }
    }
}

impl<E, A> Observer<E, A> for StopOnResidual
where
    E: HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.residual().abs() < self.tol).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use rootfind_core::scalar::{Function, Root};
    use rootfind_solvers::equation::{Status, secant};

    #[test]
    fn stops_secant_on_small_residual() {
        let model = Function(|x: f64| x.powi(3) + x.powi(2) - 3.0 * x - 3.0);
        let config = secant::Config::new(100, 1e-12).unwrap();

        let solution = secant::solve(
            &model,
            &Root,
            [1.0, 2.0],
            &config,
            StopOnResidual::new(1e-3),
        )
        .expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.residual.abs() < 1e-3);
        assert_relative_eq!(solution.x, 3.0_f64.sqrt(), epsilon = 1e-3);
    }
}
