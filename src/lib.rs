//! # psi-hydrogen: Hydrogen Release Kinetics from Porous Silicon
//!
//! Simulates hydrogen generation by oxidation of porous silicon nanopowder in
//! water with an alkali (NaOH). The model is a single first-order ODE with an
//! Arrhenius rate constant and a saturating yield:
//!
//! ```text
//! k       = A * exp(-Ea / (R*T))
//! rate    = k * [NaOH] * S
//! dH2/dt  = rate * (1 - H2 / H2_max)
//! ```
//!
//! Four user-facing parameters drive it: temperature (°C), NaOH concentration
//! (mol/L), surface area (cm²) and duration (h). Each interaction rebuilds a
//! 300-point time grid, integrates from zero yield and renders the result.
//!
//! ## Example
//!
//! ```
//! use psi_hydrogen::{simulate, SimulationParameters};
//!
//! let params = SimulationParameters::new(80.0, 1.5, 600.0, 24.0);
//! let trajectory = simulate(params)?;
//!
//! assert_eq!(trajectory.yields()[0], 0.0);
//! assert!(trajectory.final_yield().unwrap() < 6.25);
//! # Ok::<(), psi_hydrogen::solvers::SolverError>(())
//! ```
//!
//! ## Layers
//!
//! - [`models`] and [`simulation`]: the pure computational core. No I/O, no
//!   range checks, no dependency on how inputs are collected or results shown.
//! - [`controls`]: input boundary (clamping and step snapping).
//! - [`render`] and [`trajectory`]: output boundary (text chart, summary, CSV/JSON).
//! - [`config`]: JSON configuration of constants, solver and initial controls.
//!
//! ## Optional Features
//!
//! - **`autodiff`** (default): rate sensitivities using `num-dual`

pub mod config;
pub mod constants;
pub mod controls;
pub mod models;
pub mod render;
pub mod simulation;
pub mod solvers;
pub mod trajectory;

#[cfg(feature = "autodiff")]
pub mod autodiff;

pub use config::{AppConfig, ConfigError};
pub use controls::{Control, ControlError, Controls, ParameterKind};
pub use models::{Arrhenius, HydrogenGenerator, RateLaw};
pub use simulation::{simulate, simulate_with, SimulationParameters, Simulator};
pub use solvers::{SolverConfig, SolverError, SolverResult};
pub use trajectory::Trajectory;
