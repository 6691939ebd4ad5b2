//! Input boundary: the four bounded parameter controls.
//!
//! Every value entering the simulation passes through a [`Control`], which
//! clamps it to the control's range and snaps it to the control's step. This
//! keeps the kinetic core away from degenerate inputs (e.g. temperatures near
//! 0 K or negative concentrations), so the core itself does no validation.
//!
//! | Control | Unit | Min | Max | Default | Step |
//! |---|---|---|---|---|---|
//! | temperature | °C | -20 | 100 | 25 | 1 |
//! | concentration | mol/L | 0.01 | 2.0 | 0.5 | 0.01 |
//! | surface area | cm^2 | 10 | 1000 | 200 | 10 |
//! | duration | h | 1 | 50 | 10 | 1 |

use crate::simulation::SimulationParameters;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Errors raised while interpreting user input.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ControlError {
    /// Parameter name not recognised
    #[error("Unknown parameter '{0}' (expected temperature, concentration, area or duration)")]
    UnknownParameter(String),
    /// Value could not be parsed as a number
    #[error("Invalid value '{value}' for {parameter}")]
    InvalidValue { parameter: ParameterKind, value: String },
}

/// The four user-adjustable simulation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Temperature,
    Concentration,
    SurfaceArea,
    Duration,
}

impl ParameterKind {
    /// All parameters in display order.
    pub const ALL: [ParameterKind; 4] = [
        ParameterKind::Temperature,
        ParameterKind::Concentration,
        ParameterKind::SurfaceArea,
        ParameterKind::Duration,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            ParameterKind::Temperature => "temperature",
            ParameterKind::Concentration => "concentration",
            ParameterKind::SurfaceArea => "area",
            ParameterKind::Duration => "duration",
        }
    }

    /// Human-readable label with unit.
    pub fn label(&self) -> &'static str {
        match self {
            ParameterKind::Temperature => "Temperature (°C)",
            ParameterKind::Concentration => "NaOH concentration (mol/L)",
            ParameterKind::SurfaceArea => "Surface area (cm²)",
            ParameterKind::Duration => "Simulation duration (h)",
        }
    }

    /// Reads this parameter from a parameter set.
    pub fn get(&self, params: &SimulationParameters) -> f64 {
        match self {
            ParameterKind::Temperature => params.temperature,
            ParameterKind::Concentration => params.concentration,
            ParameterKind::SurfaceArea => params.surface_area,
            ParameterKind::Duration => params.duration,
        }
    }

    /// Returns a copy of `params` with this parameter replaced.
    pub fn set(&self, mut params: SimulationParameters, value: f64) -> SimulationParameters {
        match self {
            ParameterKind::Temperature => params.temperature = value,
            ParameterKind::Concentration => params.concentration = value,
            ParameterKind::SurfaceArea => params.surface_area = value,
            ParameterKind::Duration => params.duration = value,
        }
        params
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParameterKind {
    type Err = ControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "temperature" | "temp" | "t" => Ok(ParameterKind::Temperature),
            "concentration" | "naoh" | "c" => Ok(ParameterKind::Concentration),
            "area" | "surface" | "surface_area" | "surface-area" | "s" => Ok(ParameterKind::SurfaceArea),
            "duration" | "time" | "d" => Ok(ParameterKind::Duration),
            _ => Err(ControlError::UnknownParameter(s.to_string())),
        }
    }
}

/// A bounded numeric control with a default and a step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Control {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl Control {
    pub const fn new(min: f64, max: f64, default: f64, step: f64) -> Self {
        Control { min, max, default, step }
    }

    /// Returns true if `value` lies within `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps `value` to the range and snaps it to the nearest step.
    ///
    /// Non-finite input falls back to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.default;
        }
        let clamped = value.clamp(self.min, self.max);
        let snapped = (clamped / self.step).round() * self.step;
        // Drop float noise such as 0.5000000000000001
        let rounded = (snapped * 1e9).round() / 1e9;
        rounded.clamp(self.min, self.max)
    }

    /// `count` evenly spaced, snapped values spanning the range.
    pub fn sweep(&self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.default],
            n => {
                let span = self.max - self.min;
                let mut values: Vec<f64> =
                    (0..n).map(|i| self.clamp(self.min + span * i as f64 / (n - 1) as f64)).collect();
                values.dedup();
                values
            }
        }
    }
}

/// The full set of parameter controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Controls {
    pub temperature: Control,
    pub concentration: Control,
    pub surface_area: Control,
    pub duration: Control,
}

impl Default for Controls {
    fn default() -> Self {
        Controls {
            temperature: Control::new(-20.0, 100.0, 25.0, 1.0),
            concentration: Control::new(0.01, 2.0, 0.5, 0.01),
            surface_area: Control::new(10.0, 1000.0, 200.0, 10.0),
            duration: Control::new(1.0, 50.0, 10.0, 1.0),
        }
    }
}

impl Controls {
    /// Gets the control for a parameter.
    pub fn get(&self, kind: ParameterKind) -> &Control {
        match kind {
            ParameterKind::Temperature => &self.temperature,
            ParameterKind::Concentration => &self.concentration,
            ParameterKind::SurfaceArea => &self.surface_area,
            ParameterKind::Duration => &self.duration,
        }
    }

    fn get_mut(&mut self, kind: ParameterKind) -> &mut Control {
        match kind {
            ParameterKind::Temperature => &mut self.temperature,
            ParameterKind::Concentration => &mut self.concentration,
            ParameterKind::SurfaceArea => &mut self.surface_area,
            ParameterKind::Duration => &mut self.duration,
        }
    }

    /// Replaces control defaults with `params` (each clamped to its range).
    pub fn with_defaults(mut self, params: SimulationParameters) -> Self {
        for kind in ParameterKind::ALL {
            let control = self.get_mut(kind);
            control.default = control.clamp(kind.get(&params));
        }
        self
    }

    /// Parameter set made of every control's default.
    pub fn defaults(&self) -> SimulationParameters {
        SimulationParameters::new(
            self.temperature.default,
            self.concentration.default,
            self.surface_area.default,
            self.duration.default,
        )
    }

    /// Applies one control to one value, logging any adjustment.
    pub fn apply(&self, kind: ParameterKind, value: f64) -> f64 {
        let control = self.get(kind);
        let applied = control.clamp(value);

        if !control.contains(value) {
            warn!(parameter = kind.name(), requested = value, applied, "value outside control range, clamped");
        } else if applied != value {
            debug!(parameter = kind.name(), requested = value, applied, "value snapped to control step");
        }
        applied
    }

    /// Clamps every field of `params`.
    pub fn clamp(&self, params: SimulationParameters) -> SimulationParameters {
        ParameterKind::ALL.iter().fold(params, |acc, kind| kind.set(acc, self.apply(*kind, kind.get(&acc))))
    }

    /// Returns `params` with one parameter changed through its control.
    pub fn set(&self, params: SimulationParameters, kind: ParameterKind, value: f64) -> SimulationParameters {
        kind.set(params, self.apply(kind, value))
    }

    /// Parses `name` and `value` strings, then applies them as [`set`](Controls::set) does.
    pub fn set_from_str(
        &self,
        params: SimulationParameters,
        name: &str,
        value: &str,
    ) -> Result<SimulationParameters, ControlError> {
        let kind: ParameterKind = name.parse()?;
        let number: f64 = value
            .trim()
            .parse()
            .map_err(|_| ControlError::InvalidValue { parameter: kind, value: value.to_string() })?;
        Ok(self.set(params, kind, number))
    }
}
