use rootfind_core::Observer;

use crate::traits::{HasIterate, HasResidual};

/// Logs every solver iteration as a `tracing` event at debug level.
///
/// Each record carries the `solver` label, the iteration counter, the
/// evaluated `x`, and its `residual`. The observer never requests an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceObserver {
    solver: &'static str,
}

impl TraceObserver {
    /// Creates an observer that tags its records with `solver`.
    #[must_use]
    pub fn new(solver: &'static str) -> Self {
        Self { solver }
    }
}

impl<E, A> Observer<E, A> for TraceObserver
where
    E: HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        tracing::debug!(
            solver = self.solver,
            iter = event.iter(),
            x = event.x(),
            residual = event.residual(),
            "iteration"
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use rootfind_core::scalar::{Function, Root, RootWithDerivative};
    use rootfind_solvers::equation::{Status, false_position, newton};

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap();
            String::from_utf8_lossy(&bytes)
                .lines()
                .map(str::to_owned)
                .collect()
        }
    }

    fn subscriber(writer: Captured) -> impl tracing::Subscriber + Send + Sync {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .with_writer(move || writer.clone())
            .finish()
    }

    #[test]
    fn logs_one_record_per_iteration() {
        let captured = Captured::default();
        let model = Function(|x: f64| 3.0 * x - x.cos() - 1.0);

        let solution = tracing::subscriber::with_default(subscriber(captured.clone()), || {
            false_position::solve(
                &model,
                &Root,
                [0.25, 0.75],
                &false_position::Config::default(),
                TraceObserver::new("false_position"),
            )
        })
        .expect("should converge");

        let lines = captured.lines();
        assert_eq!(solution.status, Status::Converged);
        assert_eq!(lines.len(), solution.iters);
        assert!(lines.iter().all(|line| line.contains("false_position")));
        assert!(lines[0].contains("iter=1"));
    }

    #[test]
    fn does_not_change_the_result() {
        let model = Function(|x: f64| x.sin() - 0.5 * x);
        let problem = RootWithDerivative(|x: f64| x.cos() - 0.5);
        let config = newton::Config::default();
        let x0 = std::f64::consts::FRAC_PI_2;

        let traced = newton::solve(&model, &problem, x0, &config, TraceObserver::new("newton"))
            .expect("should converge");
        let plain = newton::solve_unobserved(&model, &problem, x0, &config).unwrap();

        assert_eq!(traced.x.to_bits(), plain.x.to_bits());
        assert_eq!(traced.iters, plain.iters);
    }
}
