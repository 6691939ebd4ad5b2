//! Numerical solvers for kinetic models.
//!
//! The hydrogen model is a single first-order initial value problem, so the
//! only solver family needed is time integration. Methods come from the
//! [`differential-equations`](https://docs.rs/differential-equations/) crate
//! and are selected through [`IntegrationMethod`](integration::IntegrationMethod).
//!
//! # Submodules
//!
//! - [`integration`]: integrates a [`RateLaw`](crate::models::RateLaw) across
//!   an ordered time grid, reporting the state exactly at every grid point.
//!
//! # Usage Pattern
//!
//! ```
//! use psi_hydrogen::models::HydrogenGenerator;
//! use psi_hydrogen::solvers::SolverConfig;
//! use psi_hydrogen::solvers::integration::GridIntegrator;
//!
//! let generator = HydrogenGenerator::new(320.0, 1.0, 5.0).with_kinetics(1e5, 55_000.0);
//! let grid = [0.0, 1.0, 2.0, 3.0];
//!
//! let integrator = GridIntegrator::new(&generator, SolverConfig::default());
//! let yields = integrator.integrate(&grid, 0.0)?;
//! assert_eq!(yields.len(), 4);
//! # Ok::<(), psi_hydrogen::solvers::SolverError>(())
//! ```

pub mod integration;

use integration::IntegrationMethod;
use serde::{Deserialize, Serialize};

/// Result type for solver operations.
pub type SolverResult<T> = Result<T, SolverError>;

/// Errors that can occur during solving.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// ODE solver failed
    #[error("ODE solver failed: {0}")]
    OdeSolverFailed(String),
    /// The solver returned no states for an integration window
    #[error("ODE solver returned an empty solution on [{0}, {1}]")]
    EmptySolution(f64, f64),
    /// No time points to integrate over
    #[error("Time grid is empty")]
    EmptyTimeGrid,
    /// Time points are not strictly increasing
    #[error("Time grid must be strictly increasing (t[{index}] = {value})")]
    InvalidTimeGrid { index: usize, value: f64 },
    /// Tolerances must be positive and finite
    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(String),
}

/// Configuration for time integration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Integration method
    pub method: IntegrationMethod,
    /// Relative tolerance (adaptive methods)
    pub rtol: f64,
    /// Absolute tolerance (adaptive methods)
    pub atol: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        // Low-temperature yields are ~1e-9 % mass, so atol sits well below them
        SolverConfig { method: IntegrationMethod::Dopri5, rtol: 1e-8, atol: 1e-12 }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the integration method.
    pub fn with_method(mut self, method: IntegrationMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets relative and absolute tolerances.
    pub fn with_tolerances(mut self, rtol: f64, atol: f64) -> Self {
        self.rtol = rtol;
        self.atol = atol;
        self
    }

    /// Checks that tolerances are usable.
    pub fn validate(&self) -> SolverResult<()> {
        if !(self.rtol.is_finite() && self.rtol > 0.0) {
            return Err(SolverError::InvalidTolerance(format!("rtol = {}", self.rtol)));
        }
        if !(self.atol.is_finite() && self.atol > 0.0) {
            return Err(SolverError::InvalidTolerance(format!("atol = {}", self.atol)));
        }
        Ok(())
    }
}
