//! Subcommand implementations and shared argument handling.

pub mod interactive;
pub mod run;
#[cfg(feature = "autodiff")]
pub mod sensitivity;
pub mod sweep;

use anyhow::{Context, Result};
use clap::Args;
use psi_hydrogen::{AppConfig, Controls, ParameterKind, SimulationParameters};
use std::path::Path;
use tracing::info;

/// Loads the configuration file, or the built-in defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => {
            info!("loading configuration from {}", path.display());
            AppConfig::from_file(path).with_context(|| format!("failed to load config {}", path.display()))
        }
        None => Ok(AppConfig::default()),
    }
}

/// The four simulation parameters as optional flags.
///
/// Omitted flags take the control default; given values are clamped and
/// snapped by the controls.
#[derive(Args, Debug, Default)]
pub struct ParameterArgs {
    /// Temperature [°C] (-20 to 100)
    #[arg(short = 'T', long, allow_hyphen_values = true)]
    pub temperature: Option<f64>,

    /// NaOH concentration [mol/L] (0.01 to 2.0)
    #[arg(short = 'n', long)]
    pub concentration: Option<f64>,

    /// Surface area [cm²] (10 to 1000)
    #[arg(short = 's', long)]
    pub surface_area: Option<f64>,

    /// Simulation duration [h] (1 to 50)
    #[arg(short = 'd', long)]
    pub duration: Option<f64>,
}

impl ParameterArgs {
    /// Resolves the flags against `controls`.
    pub fn resolve(&self, controls: &Controls) -> SimulationParameters {
        let requested = [
            (ParameterKind::Temperature, self.temperature),
            (ParameterKind::Concentration, self.concentration),
            (ParameterKind::SurfaceArea, self.surface_area),
            (ParameterKind::Duration, self.duration),
        ];

        requested.into_iter().fold(controls.defaults(), |params, (kind, value)| match value {
            Some(value) => controls.set(params, kind, value),
            None => params,
        })
    }
}
