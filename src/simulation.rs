//! Simulation driver.
//!
//! Translates user-facing units into model units, builds the uniform time
//! grid and integrates the hydrogen rate law from zero yield.
//!
//! Parameters are passed by value on every call. The driver performs no range
//! validation: values reaching it are expected to have been clamped by the
//! input boundary ([`crate::controls`]).
//!
//! # Example
//!
//! ```
//! use psi_hydrogen::simulation::{simulate, SimulationParameters};
//!
//! let trajectory = simulate(SimulationParameters::default())?;
//! assert_eq!(trajectory.len(), 300);
//! assert_eq!(trajectory.yields()[0], 0.0);
//! # Ok::<(), psi_hydrogen::solvers::SolverError>(())
//! ```

use crate::constants::{AREA_SCALE, CELSIUS_OFFSET, GRID_POINTS, H2_MAX};
use crate::models::{Arrhenius, HydrogenGenerator};
use crate::solvers::integration::GridIntegrator;
use crate::solvers::{SolverConfig, SolverResult};
use crate::trajectory::Trajectory;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// User-facing simulation inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Temperature (°C)
    pub temperature: f64,
    /// NaOH concentration (mol/L)
    pub concentration: f64,
    /// Surface area of the nanopowder (cm^2)
    pub surface_area: f64,
    /// Simulated time span (h)
    pub duration: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters { temperature: 25.0, concentration: 0.5, surface_area: 200.0, duration: 10.0 }
    }
}

impl SimulationParameters {
    /// Creates a parameter set.
    pub fn new(temperature: f64, concentration: f64, surface_area: f64, duration: f64) -> Self {
        SimulationParameters { temperature, concentration, surface_area, duration }
    }

    /// Absolute temperature (K).
    pub fn temperature_kelvin(&self) -> f64 {
        celsius_to_kelvin(self.temperature)
    }

    /// Effective surface area consumed by the rate law.
    pub fn effective_area(&self) -> f64 {
        effective_area(self.surface_area)
    }
}

/// Converts °C to K.
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + CELSIUS_OFFSET
}

/// Converts a surface area in cm^2 to the rate law's effective area.
pub fn effective_area(surface_area_cm2: f64) -> f64 {
    surface_area_cm2 / AREA_SCALE
}

/// Evenly spaced time points from 0 to `duration` inclusive.
///
/// A single point yields `[0.0]`; zero points yield an empty grid.
pub fn time_grid(duration: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![0.0],
        n => {
            let last = (n - 1) as f64;
            let mut grid: Vec<f64> = (0..n).map(|i| duration * i as f64 / last).collect();
            grid[n - 1] = duration;
            grid
        }
    }
}

/// Reusable simulation settings: kinetics, saturation limit, solver and grid size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simulator {
    pub kinetics: Arrhenius,
    /// Theoretical maximum yield (% mass)
    pub max_yield: f64,
    pub solver: SolverConfig,
    pub grid_points: usize,
}

impl Default for Simulator {
    fn default() -> Self {
        Simulator {
            kinetics: Arrhenius::default(),
            max_yield: H2_MAX,
            solver: SolverConfig::default(),
            grid_points: GRID_POINTS,
        }
    }
}

impl Simulator {
    /// Creates a simulator with the built-in constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the kinetic parameters.
    pub fn with_kinetics(mut self, kinetics: Arrhenius) -> Self {
        self.kinetics = kinetics;
        self
    }

    /// Sets the theoretical maximum yield.
    pub fn with_max_yield(mut self, max_yield: f64) -> Self {
        self.max_yield = max_yield;
        self
    }

    /// Sets the solver configuration.
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Sets the number of output time points.
    pub fn with_grid_points(mut self, grid_points: usize) -> Self {
        self.grid_points = grid_points;
        self
    }

    /// Builds the rate law for one parameter set.
    pub fn generator(&self, params: SimulationParameters) -> HydrogenGenerator<Arrhenius> {
        HydrogenGenerator::new(params.temperature_kelvin(), params.concentration, params.effective_area())
            .with_arrhenius(self.kinetics)
            .with_max_yield(self.max_yield)
    }

    /// Runs one simulation from zero yield.
    pub fn run(&self, params: SimulationParameters) -> SolverResult<Trajectory> {
        let generator = self.generator(params);
        let grid = time_grid(params.duration, self.grid_points);

        debug!(
            ?params,
            rate_constant = generator.rate_constant(),
            points = grid.len(),
            "running simulation"
        );

        let yields = GridIntegrator::new(&generator, self.solver).integrate(&grid, 0.0)?;
        let trajectory = Trajectory::new(grid, yields);

        debug!(final_yield = ?trajectory.final_yield(), "simulation complete");
        Ok(trajectory)
    }
}

/// Runs one simulation with the built-in constants and default solver.
pub fn simulate(params: SimulationParameters) -> SolverResult<Trajectory> {
    Simulator::default().run(params)
}

/// Runs one simulation with the built-in constants and the given solver.
pub fn simulate_with(params: SimulationParameters, solver: SolverConfig) -> SolverResult<Trajectory> {
    Simulator::default().with_solver(solver).run(params)
}
