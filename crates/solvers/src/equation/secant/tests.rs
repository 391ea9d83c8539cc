use approx::assert_relative_eq;
use thiserror::Error;

use rootfind_core::{
    Model,
    scalar::{Function, Root},
};

use super::{Action, Config, Error, Event, Status, solve, solve_unobserved};

/// f(x) = x³ + x² - 3x - 3 = (x + 1)(x² - 3), positive root √3.
fn cubic(x: f64) -> f64 {
    x.powi(3) + x.powi(2) - 3.0 * x - 3.0
}

#[test]
fn finds_root_of_cubic_between_one_and_two() {
    let model = Function(cubic);
    let config = Config::new(100, 1e-4).unwrap();

    let solution =
        solve_unobserved(&model, &Root, [1.0, 2.0], &config).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert!((1.0..=2.0).contains(&solution.x));
    assert!(cubic(solution.x).abs() < 1e-5);
    assert_relative_eq!(solution.x, 3.0_f64.sqrt(), epsilon = 1e-6);
    assert_eq!(solution.iters, 5);
}

#[test]
fn tight_tolerance_reaches_near_machine_precision() {
    let model = Function(cubic);
    let config = Config::new(100, 1e-12).unwrap();

    let solution = solve_unobserved(&model, &Root, [1.0, 2.0], &config).unwrap();

    assert_relative_eq!(solution.x, 3.0_f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(solution.residual, 0.0, epsilon = 1e-12);
}

#[test]
fn seeds_need_not_bracket_the_root() {
    let model = Function(|x: f64| x * x - 2.0);

    let solution = solve_unobserved(&model, &Root, [3.0, 4.0], &Config::default()).unwrap();

    assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-6);
}

#[test]
fn repeated_solves_are_identical() {
    let model = Function(cubic);

    let first = solve_unobserved(&model, &Root, [1.0, 2.0], &Config::default()).unwrap();
    let second = solve_unobserved(&model, &Root, [1.0, 2.0], &Config::default()).unwrap();

    assert_eq!(first.x.to_bits(), second.x.to_bits());
    assert_eq!(first.iters, second.iters);
}

#[test]
fn equal_residuals_at_seeds_are_degenerate() {
    // Symmetric seeds on an even function give a flat secant.
    let model = Function(|x: f64| x * x - 1.0);

    let result = solve_unobserved(&model, &Root, [-2.0, 2.0], &Config::default());

    assert!(matches!(
        result,
        Err(Error::DegenerateStep { x0, x1, residual })
            if x0 == -2.0 && x1 == 2.0 && residual == 3.0
    ));
}

#[test]
fn equal_residuals_after_a_step_are_degenerate() {
    // From seeds -1.25 and 2 the first secant step lands exactly on -2,
    // the mirror image of 2 on the even function x² - 1.
    let model = Function(|x: f64| x * x - 1.0);

    let mut steps = Vec::new();
    let observer = |event: &Event<'_, f64, f64>| {
        steps.push((event.iter, event.eval.x));
        None
    };

    let result = solve(&model, &Root, [-1.25, 2.0], &Config::default(), observer);

    assert!(matches!(
        result,
        Err(Error::DegenerateStep { x0, x1, residual })
            if x0 == 2.0 && x1 == -2.0 && residual == 3.0
    ));
    assert_eq!(steps, vec![(1, -2.0)]);
}

#[test]
fn identical_seeds_are_degenerate() {
    let model = Function(cubic);

    let result = solve_unobserved(&model, &Root, [1.5, 1.5], &Config::default());

    assert!(matches!(result, Err(Error::DegenerateStep { .. })));
}

#[test]
fn single_iteration_cap_does_not_converge() {
    let model = Function(cubic);
    let config = Config::new(1, 1e-12).unwrap();

    let result = solve_unobserved(&model, &Root, [1.0, 2.0], &config);

    assert!(matches!(
        result,
        Err(Error::MaxIterationsExceeded { iters: 1, .. })
    ));
}

#[test]
fn observer_can_stop_iteration() {
    let model = Function(cubic);

    let mut steps = Vec::new();
    let observer = |event: &Event<'_, f64, f64>| {
        steps.push(event.step);
        if event.iter == 3 {
            Some(Action::StopEarly)
        } else {
            None
        }
    };

    let solution = solve(&model, &Root, [1.0, 2.0], &Config::default(), observer)
        .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
    assert_eq!(steps.len(), 3);
    assert_relative_eq!(solution.x, 1.735_135_770_660_739, epsilon = 1e-12);
}

#[test]
fn errors_on_non_finite_seed_residual() {
    let model = Function(f64::ln);

    let result = solve_unobserved(&model, &Root, [-1.0, 2.0], &Config::default());

    assert!(matches!(result, Err(Error::NonFiniteResidual { x, .. }) if x == -1.0));
}

#[derive(Debug, Error)]
#[error("pump curve undefined above {max_flow} m³/s")]
struct OutsidePumpCurve {
    max_flow: f64,
}

/// Pump head minus system head; only defined up to a maximum flow.
struct PumpSystemBalance;

impl Model for PumpSystemBalance {
    type Input = f64;
    type Output = f64;
    type Error = OutsidePumpCurve;

    fn call(&self, flow: &f64) -> Result<f64, Self::Error> {
        let max_flow = 0.5;
        if *flow > max_flow {
            return Err(OutsidePumpCurve { max_flow });
        }
        let pump_head = 40.0 - 120.0 * flow * flow;
        let system_head = 10.0 + 60.0 * flow * flow;
        Ok(pump_head - system_head)
    }
}

#[test]
fn finds_operating_point() {
    let config = Config::new(50, 1e-10).unwrap();

    let solution = solve_unobserved(&PumpSystemBalance, &Root, [0.3, 0.45], &config).unwrap();

    // 30 = 180 q² at the operating point.
    assert_relative_eq!(solution.x, (30.0_f64 / 180.0).sqrt(), epsilon = 1e-9);
}

#[test]
fn propagates_model_errors() {
    let result = solve_unobserved(&PumpSystemBalance, &Root, [0.4, 0.6], &Config::default());

    assert!(matches!(result, Err(Error::Model(_))));
}
