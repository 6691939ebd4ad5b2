//! Application configuration.
//!
//! Loaded from a JSON file. Every field has a default equal to the built-in
//! constant, so `{}` is a valid configuration and a file only needs the
//! values it overrides:
//!
//! ```json
//! {
//!   "kinetics": { "activation_energy": 52000.0 },
//!   "solver": { "method": "Radau5" },
//!   "grid_points": 500,
//!   "defaults": { "temperature": 40.0, "concentration": 1.0, "surface_area": 200.0, "duration": 24.0 }
//! }
//! ```

use crate::constants::{ACTIVATION_ENERGY, GAS_CONSTANT, GRID_POINTS, H2_MAX, PRE_EXPONENTIAL};
use crate::controls::{Controls, ParameterKind};
use crate::models::Arrhenius;
use crate::simulation::{SimulationParameters, Simulator};
use crate::solvers::SolverConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
    /// Invalid value
    #[error("Invalid value '{key}': {value} - {reason}")]
    InvalidValue {
        /// Configuration key
        key: String,
        /// Offending value
        value: String,
        /// Why it was rejected
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &str, value: impl ToString, reason: &str) -> Self {
        ConfigError::InvalidValue { key: key.to_string(), value: value.to_string(), reason: reason.to_string() }
    }
}

/// Kinetic constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KineticsConfig {
    /// Pre-exponential factor A (1/h)
    #[serde(default = "default_pre_exponential")]
    pub pre_exponential: f64,
    /// Activation energy Ea (J/mol)
    #[serde(default = "default_activation_energy")]
    pub activation_energy: f64,
    /// Gas constant R (J/(mol*K))
    #[serde(default = "default_gas_constant")]
    pub gas_constant: f64,
    /// Theoretical maximum yield (% mass)
    #[serde(default = "default_max_yield")]
    pub max_yield: f64,
}

fn default_pre_exponential() -> f64 { PRE_EXPONENTIAL }
fn default_activation_energy() -> f64 { ACTIVATION_ENERGY }
fn default_gas_constant() -> f64 { GAS_CONSTANT }
fn default_max_yield() -> f64 { H2_MAX }
fn default_grid_points() -> usize { GRID_POINTS }

impl Default for KineticsConfig {
    fn default() -> Self {
        KineticsConfig {
            pre_exponential: default_pre_exponential(),
            activation_energy: default_activation_energy(),
            gas_constant: default_gas_constant(),
            max_yield: default_max_yield(),
        }
    }
}

impl KineticsConfig {
    /// Arrhenius parameters from this configuration.
    pub fn arrhenius(&self) -> Arrhenius {
        Arrhenius::new(self.pre_exponential, self.activation_energy).with_gas_constant(self.gas_constant)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub kinetics: KineticsConfig,
    #[serde(default)]
    pub solver: SolverConfig,
    /// Number of output time points
    #[serde(default = "default_grid_points")]
    pub grid_points: usize,
    /// Initial control positions
    #[serde(default)]
    pub defaults: SimulationParameters,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            kinetics: KineticsConfig::default(),
            solver: SolverConfig::default(),
            grid_points: default_grid_points(),
            defaults: SimulationParameters::default(),
        }
    }
}

impl AppConfig {
    /// Loads and validates a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parses and validates a JSON string.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Pretty JSON representation.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Checks every value for usability.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("kinetics.pre_exponential", self.kinetics.pre_exponential),
            ("kinetics.gas_constant", self.kinetics.gas_constant),
            ("kinetics.max_yield", self.kinetics.max_yield),
            ("solver.rtol", self.solver.rtol),
            ("solver.atol", self.solver.atol),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(key, value, "must be positive and finite"));
            }
        }

        let ea = self.kinetics.activation_energy;
        if !(ea.is_finite() && ea >= 0.0) {
            return Err(ConfigError::invalid("kinetics.activation_energy", ea, "must be non-negative and finite"));
        }

        if self.grid_points < 2 {
            return Err(ConfigError::invalid("grid_points", self.grid_points, "need at least 2 time points"));
        }

        let controls = Controls::default();
        for kind in ParameterKind::ALL {
            let value = kind.get(&self.defaults);
            let control = controls.get(kind);
            if !control.contains(value) {
                return Err(ConfigError::invalid(
                    &format!("defaults.{}", kind.name()),
                    value,
                    &format!("must lie in [{}, {}]", control.min, control.max),
                ));
            }
        }

        Ok(())
    }

    /// Simulator built from the kinetic, solver and grid settings.
    pub fn simulator(&self) -> Simulator {
        Simulator::new()
            .with_kinetics(self.kinetics.arrhenius())
            .with_max_yield(self.kinetics.max_yield)
            .with_solver(self.solver)
            .with_grid_points(self.grid_points)
    }

    /// Controls whose defaults are the configured initial positions.
    pub fn controls(&self) -> Controls {
        Controls::default().with_defaults(self.defaults)
    }
}
