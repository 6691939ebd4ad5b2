//! Regression scenarios pinned against the closed-form solution
//! H2(t) = H2_max * (1 - exp(-rate*t / H2_max)).

use psi_hydrogen::solvers::integration::IntegrationMethod;
use psi_hydrogen::{simulate, Controls, SimulationParameters, Simulator, SolverConfig};

fn relative_error(actual: f64, expected: f64) -> f64 {
    (actual - expected).abs() / expected.abs()
}

#[test]
fn test_room_temperature_scenario() {
    // 25 C, 0.5 mol/L, 200 cm^2 (effective area 2.0), 10 h
    let params = SimulationParameters::new(25.0, 0.5, 200.0, 10.0);
    let simulator = Simulator::default();

    let k = simulator.generator(params).rate_constant();
    assert!(relative_error(k, 2.311_429_898_692_429e-5) < 1e-9, "k = {}", k);

    let trajectory = simulate(params).unwrap();
    assert_eq!(trajectory.len(), 300);
    assert_eq!(trajectory.times()[0], 0.0);
    assert_eq!(trajectory.yields()[0], 0.0);
    assert_eq!(trajectory.duration(), Some(10.0));

    let final_yield = trajectory.final_yield().unwrap();
    assert!(relative_error(final_yield, 2.311_387_157_553_912e-4) < 1e-7, "final = {}", final_yield);
    assert!(final_yield < 6.25);

    // Halfway in time the yield is (almost exactly) half: kinetics are far from saturation
    let halfway = trajectory.yield_at(5.0).unwrap();
    assert!(relative_error(halfway, final_yield / 2.0) < 1e-4);
}

#[test]
fn test_cold_dilute_scenario_is_nearly_flat() {
    // -20 C, 0.01 mol/L, 10 cm^2: slow kinetics
    let params = SimulationParameters::new(-20.0, 0.01, 10.0, 10.0);
    let trajectory = simulate(params).unwrap();

    let final_yield = trajectory.final_yield().unwrap();
    assert!(final_yield < 1e-8, "final = {}", final_yield);
    assert!(relative_error(final_yield, 4.476_741_893_855_163e-9) < 1e-6, "final = {}", final_yield);
    assert!(trajectory.yields().iter().all(|&h2| (0.0..1e-8).contains(&h2)));
}

#[test]
fn test_hot_concentrated_scenario() {
    // Upper end of every control
    let params = SimulationParameters::new(100.0, 2.0, 1000.0, 50.0);
    let trajectory = simulate(params).unwrap();

    let final_yield = trajectory.final_yield().unwrap();
    assert!(relative_error(final_yield, 1.710_329_443_699_181_6) < 1e-7, "final = {}", final_yield);
    assert!(final_yield < 6.25);
}

#[test]
fn test_trajectory_matches_closed_form_everywhere() {
    let simulator = Simulator::default();
    for params in [
        SimulationParameters::new(25.0, 0.5, 200.0, 10.0),
        SimulationParameters::new(70.0, 1.2, 650.0, 36.0),
        SimulationParameters::new(100.0, 2.0, 1000.0, 50.0),
    ] {
        let generator = simulator.generator(params);
        let trajectory = simulator.run(params).unwrap();
        for (t, h2) in trajectory.points().skip(1) {
            let expected = generator.analytic_yield(t);
            assert!(relative_error(h2, expected) < 1e-6, "{:?} at t = {}: {} vs {}", params, t, h2, expected);
        }
    }
}

#[test]
fn test_methods_agree() {
    let params = SimulationParameters::new(90.0, 1.8, 900.0, 40.0);
    let reference = simulate(params).unwrap().final_yield().unwrap();

    for method in IntegrationMethod::ALL {
        let simulator = Simulator::new().with_solver(SolverConfig::new().with_method(method));
        let final_yield = simulator.run(params).unwrap().final_yield().unwrap();
        let tolerance = if method == IntegrationMethod::Euler { 1e-3 } else { 1e-6 };
        assert!(
            relative_error(final_yield, reference) < tolerance,
            "{:?}: {} vs {}",
            method,
            final_yield,
            reference
        );
    }
}

#[test]
fn test_boundary_guards_keep_core_in_range() {
    // Values from outside the UI range are clamped before reaching the model
    let controls = Controls::default();
    let params = controls.clamp(SimulationParameters::new(-273.15, -3.0, 0.0, 500.0));
    assert!(params.temperature_kelvin() > 250.0);

    let trajectory = simulate(params).unwrap();
    assert!(trajectory.yields().iter().all(|h2| h2.is_finite() && *h2 >= 0.0));
    assert_eq!(trajectory.duration(), Some(50.0));
}
