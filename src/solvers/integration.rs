//! Numerical integration of scalar rate laws.
//!
//! This module integrates a [`RateLaw`] over an ordered time grid using the
//! [`differential-equations`](https://docs.rs/differential-equations/) crate.
//! Each interval between consecutive grid points is solved as its own
//! initial value problem, so the returned states sit exactly on the grid.

use crate::models::RateLaw;
use crate::solvers::{SolverConfig, SolverError, SolverResult};
use differential_equations::methods::{ExplicitRungeKutta, ImplicitRungeKutta};
use differential_equations::ode::{ODE, ODEProblem};
use nalgebra::SVector;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Integration methods available for time-stepping.
///
/// Each method has different stability and accuracy characteristics.
///
/// For details on each method, refer to the [`differential-equations`](https://docs.rs/differential-equations/) crate documentation.
///
/// # Variants
///
/// - `Dopri5`: Adaptive explicit Dormand-Prince 5(4) method
/// - `Radau5`: Adaptive implicit Radau5 method
/// - `GaussLegendre4`: Adaptive implicit Gauss-Legendre 4th order
/// - `LobattoIIIC4`: Adaptive implicit Lobatto IIIC 4th order
/// - `RK4`: Fixed-step explicit 4th-order Runge-Kutta
/// - `Euler`: Fixed-step explicit Forward Euler
/// - `Heun`: Fixed-step explicit Heun method
///
/// Fixed-step methods take one step per grid interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegrationMethod {
    // Adaptive explicit methods
    /// Dormand-Prince 5(4) method
    Dopri5,
    // Adaptive implicit methods
    /// Radau5 method
    Radau5,
    /// Gauss-Legendre 4th order
    GaussLegendre4,
    /// Lobatto IIIC 4th order
    LobattoIIIC4,
    // Fixed-step explicit methods
    /// 4th-order Runge-Kutta
    RK4,
    /// Forward Euler
    Euler,
    /// Heun method
    Heun,
}

impl IntegrationMethod {
    /// All methods, adaptive first.
    pub const ALL: [IntegrationMethod; 7] = [
        IntegrationMethod::Dopri5,
        IntegrationMethod::Radau5,
        IntegrationMethod::GaussLegendre4,
        IntegrationMethod::LobattoIIIC4,
        IntegrationMethod::RK4,
        IntegrationMethod::Euler,
        IntegrationMethod::Heun,
    ];

    /// Returns true for methods with error-controlled step sizes.
    pub fn is_adaptive(&self) -> bool {
        !matches!(self, IntegrationMethod::RK4 | IntegrationMethod::Euler | IntegrationMethod::Heun)
    }
}

/// ODE wrapper exposing a [`RateLaw`] to the differential-equations crate.
pub struct RateLawODE<'a, R: RateLaw> {
    law: &'a R,
}

impl<R: RateLaw> ODE<f64, SVector<f64, 1>> for RateLawODE<'_, R> {
    fn diff(&self, t: f64, y: &SVector<f64, 1>, dydt: &mut SVector<f64, 1>) {
        dydt[0] = self.law.derivative(t, y[0]);
    }

    fn jacobian(
        &self,
        t: f64,
        y: &SVector<f64, 1>,
        dfdy: &mut differential_equations::prelude::Matrix<f64>,
    ) {
        dfdy[(0, 0)] = self.law.jacobian(t, y[0]);
    }
}

/// Integrates a rate law across an ordered time grid.
///
/// # Examples
///
/// ```
/// use psi_hydrogen::models::RateLaw;
/// use psi_hydrogen::solvers::SolverConfig;
/// use psi_hydrogen::solvers::integration::GridIntegrator;
///
/// struct Decay;
///
/// impl RateLaw for Decay {
///     fn derivative(&self, _t: f64, y: f64) -> f64 {
///         -y
///     }
/// }
///
/// let integrator = GridIntegrator::new(Decay, SolverConfig::default());
/// let y = integrator.integrate(&[0.0, 0.5, 1.0], 1.0)?;
/// assert!((y[2] - (-1.0f64).exp()).abs() < 1e-6);
/// # Ok::<(), psi_hydrogen::solvers::SolverError>(())
/// ```
pub struct GridIntegrator<R: RateLaw> {
    law: R,
    config: SolverConfig,
}

impl<R: RateLaw> GridIntegrator<R> {
    /// Creates a new integrator for `law`.
    pub fn new(law: R, config: SolverConfig) -> Self {
        GridIntegrator { law, config }
    }

    /// Gets the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Integrates from `y0` at `grid[0]` and returns the state at every grid point.
    ///
    /// # Errors
    ///
    /// - [`SolverError::EmptyTimeGrid`] if `grid` is empty
    /// - [`SolverError::InvalidTimeGrid`] if `grid` is not strictly increasing
    /// - [`SolverError::InvalidTolerance`] for unusable tolerances
    /// - [`SolverError::OdeSolverFailed`] if the underlying method fails
    pub fn integrate(&self, grid: &[f64], y0: f64) -> SolverResult<Vec<f64>> {
        self.config.validate()?;

        if grid.is_empty() {
            return Err(SolverError::EmptyTimeGrid);
        }
        for (index, pair) in grid.windows(2).enumerate() {
            if !(pair[1] > pair[0]) {
                return Err(SolverError::InvalidTimeGrid { index: index + 1, value: pair[1] });
            }
        }

        let mut states = Vec::with_capacity(grid.len());
        let mut y = y0;
        states.push(y);

        for pair in grid.windows(2) {
            y = self.step(pair[0], pair[1], y)?;
            trace!(t = pair[1], y, "integration window complete");
            states.push(y);
        }

        Ok(states)
    }

    /// Advances the state `y` from `t0` to `tf`.
    pub fn step(&self, t0: f64, tf: f64, y: f64) -> SolverResult<f64> {
        let ode = RateLawODE { law: &self.law };
        let y0 = SVector::<f64, 1>::new(y);
        let problem = ODEProblem::new(ode, t0, tf, y0);

        let rtol = self.config.rtol;
        let atol = self.config.atol;
        let dt = tf - t0;

        let solution = match self.config.method {
            // Adaptive explicit
            IntegrationMethod::Dopri5 => {
                let mut solver = ExplicitRungeKutta::dopri5().rtol(rtol).atol(atol);
                problem.solve(&mut solver)
            }
            // Adaptive implicit
            IntegrationMethod::Radau5 => {
                let mut solver = ImplicitRungeKutta::radau5().rtol(rtol).atol(atol);
                problem.solve(&mut solver)
            }
            IntegrationMethod::GaussLegendre4 => {
                let mut solver = ImplicitRungeKutta::gauss_legendre_4().rtol(rtol).atol(atol);
                problem.solve(&mut solver)
            }
            IntegrationMethod::LobattoIIIC4 => {
                let mut solver = ImplicitRungeKutta::lobatto_iiic_4().rtol(rtol).atol(atol);
                problem.solve(&mut solver)
            }
            // Fixed-step explicit
            IntegrationMethod::RK4 => {
                let mut solver = ExplicitRungeKutta::rk4(dt);
                problem.solve(&mut solver)
            }
            IntegrationMethod::Euler => {
                let mut solver = ExplicitRungeKutta::euler(dt);
                problem.solve(&mut solver)
            }
            IntegrationMethod::Heun => {
                let mut solver = ExplicitRungeKutta::heun(dt);
                problem.solve(&mut solver)
            }
        };

        match solution {
            Ok(sol) => sol.y.last().map(|state| state[0]).ok_or(SolverError::EmptySolution(t0, tf)),
            Err(e) => Err(SolverError::OdeSolverFailed(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HydrogenGenerator;

    /// dy/dt = -y, y(0) = 1  =>  y(t) = e^(-t)
    struct Decay;

    impl RateLaw for Decay {
        fn derivative(&self, _t: f64, y: f64) -> f64 {
            -y
        }

        fn jacobian(&self, _t: f64, _y: f64) -> f64 {
            -1.0
        }
    }

    fn uniform_grid(end: f64, points: usize) -> Vec<f64> {
        (0..points).map(|i| end * i as f64 / (points - 1) as f64).collect()
    }

    #[test]
    fn test_integrator_creation() {
        let integrator = GridIntegrator::new(Decay, SolverConfig::default());
        assert!(matches!(integrator.config().method, IntegrationMethod::Dopri5));
    }

    #[test]
    fn test_empty_grid() {
        let integrator = GridIntegrator::new(Decay, SolverConfig::default());
        let result = integrator.integrate(&[], 1.0);
        assert!(matches!(result.unwrap_err(), SolverError::EmptyTimeGrid));
    }

    #[test]
    fn test_single_point_grid() {
        let integrator = GridIntegrator::new(Decay, SolverConfig::default());
        let states = integrator.integrate(&[0.0], 1.0).unwrap();
        assert_eq!(states, vec![1.0]);
    }

    #[test]
    fn test_non_increasing_grid() {
        let integrator = GridIntegrator::new(Decay, SolverConfig::default());

        match integrator.integrate(&[0.0, 1.0, 1.0, 2.0], 1.0).unwrap_err() {
            SolverError::InvalidTimeGrid { index, value } => {
                assert_eq!(index, 2);
                assert_eq!(value, 1.0);
            }
            other => panic!("Expected InvalidTimeGrid, got {:?}", other),
        }

        assert!(integrator.integrate(&[0.0, 2.0, 1.0], 1.0).is_err());
        assert!(integrator.integrate(&[0.0, f64::NAN], 1.0).is_err());
    }

    #[test]
    fn test_invalid_tolerance_rejected() {
        let config = SolverConfig::new().with_tolerances(-1.0, 1e-8);
        let integrator = GridIntegrator::new(Decay, config);
        let result = integrator.integrate(&[0.0, 1.0], 1.0);
        assert!(matches!(result.unwrap_err(), SolverError::InvalidTolerance(_)));
    }

    #[test]
    fn test_exponential_decay_all_methods() {
        let grid = uniform_grid(1.0, 101);

        for method in IntegrationMethod::ALL {
            let config = SolverConfig::new().with_method(method);
            let integrator = GridIntegrator::new(Decay, config);
            let states = integrator.integrate(&grid, 1.0).unwrap();

            assert_eq!(states.len(), grid.len());
            assert_eq!(states[0], 1.0);

            // Forward Euler with h = 0.01 is first order, Heun second order
            let tolerance = match method {
                IntegrationMethod::Euler => 5e-3,
                IntegrationMethod::Heun => 1e-4,
                _ => 1e-5,
            };
            let expected = (-1.0f64).exp();
            let final_y = states[states.len() - 1];
            assert!(
                (final_y - expected).abs() < tolerance,
                "{:?}: expected {}, got {}",
                method,
                expected,
                final_y
            );
        }
    }

    #[test]
    fn test_states_land_on_grid_points() {
        let grid = [0.0, 0.1, 0.5, 0.75, 2.0];
        let integrator = GridIntegrator::new(Decay, SolverConfig::default());
        let states = integrator.integrate(&grid, 1.0).unwrap();

        for (t, y) in grid.iter().zip(&states) {
            assert!((y - (-t).exp()).abs() < 1e-7, "t = {}: got {}", t, y);
        }
    }

    #[test]
    fn test_nonzero_start_time() {
        let integrator = GridIntegrator::new(Decay, SolverConfig::default());
        let states = integrator.integrate(&[5.0, 6.0], 2.0).unwrap();
        assert!((states[1] - 2.0 * (-1.0f64).exp()).abs() < 1e-7);
    }

    #[test]
    fn test_hydrogen_matches_closed_form() {
        let generator = HydrogenGenerator::new(360.0, 1.5, 8.0).with_kinetics(1e5, 55_000.0);
        let grid = uniform_grid(50.0, 300);

        let integrator = GridIntegrator::new(&generator, SolverConfig::default());
        let states = integrator.integrate(&grid, 0.0).unwrap();

        for (t, h2) in grid.iter().zip(&states) {
            let expected = generator.analytic_yield(*t);
            assert!((h2 - expected).abs() <= 1e-5 * expected.max(1e-6), "t = {}: {} vs {}", t, h2, expected);
        }
    }

    #[test]
    fn test_single_window_step() {
        for method in IntegrationMethod::ALL {
            let config = SolverConfig::new().with_method(method);
            let y = GridIntegrator::new(Decay, config).step(0.0, 0.01, 2.0).unwrap();
            let exact = 2.0 * (-0.01f64).exp();
            assert!((y - exact).abs() < 1e-3, "{method:?}: {y} vs {exact}");
        }
    }

    #[test]
    fn test_method_is_adaptive() {
        assert!(IntegrationMethod::Dopri5.is_adaptive());
        assert!(IntegrationMethod::Radau5.is_adaptive());
        assert!(!IntegrationMethod::RK4.is_adaptive());
        assert!(!IntegrationMethod::Euler.is_adaptive());
    }
}
