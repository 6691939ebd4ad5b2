//! Automatic differentiation support using `num-dual`.
//!
//! Forward-mode dual numbers give exact partial derivatives of the hydrogen
//! release rate with respect to every user-facing parameter. Differentiating
//! through the unit conversions (°C to K, cm² to effective area) means the
//! sensitivities are reported in the units the user adjusts.
//!
//! # Example
//!
//! ```
//! use psi_hydrogen::autodiff::rate_sensitivities;
//! use psi_hydrogen::simulation::{SimulationParameters, Simulator};
//!
//! let s = rate_sensitivities(&Simulator::default(), SimulationParameters::default(), 0.0);
//! assert!(s.d_temperature > 0.0);
//! assert!(s.d_yield < 0.0);
//! ```

use crate::constants::{AREA_SCALE, CELSIUS_OFFSET};
use crate::simulation::{SimulationParameters, Simulator};
use num_dual::*;
use serde::Serialize;

/// Computes the gradient of a scalar function using forward-mode automatic differentiation.
///
/// One dual evaluation per variable; the seeded variable carries `eps = 1`.
pub fn gradient<F>(f: F, x: &[f64]) -> Vec<f64>
where
    F: Fn(&[Dual64]) -> Dual64,
{
    (0..x.len())
        .map(|j| {
            let mut x_dual: Vec<Dual64> = x.iter().map(|&v| Dual64::from(v)).collect();
            x_dual[j] = Dual64::from(x[j]).derivative();
            f(&x_dual).eps
        })
        .collect()
}

/// Partial derivatives of the instantaneous release rate dH2/dt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateSensitivities {
    /// dH2/dt at the evaluation point (% mass / h)
    pub rate: f64,
    /// Per °C
    pub d_temperature: f64,
    /// Per mol/L
    pub d_concentration: f64,
    /// Per cm²
    pub d_surface_area: f64,
    /// Per % mass of current yield
    pub d_yield: f64,
}

/// Evaluates dH2/dt and its gradient at `params` and current yield `h2`.
pub fn rate_sensitivities(simulator: &Simulator, params: SimulationParameters, h2: f64) -> RateSensitivities {
    let kinetics = simulator.kinetics;
    let max_yield = simulator.max_yield;

    // Variables: [temperature (°C), concentration, surface area (cm²), yield]
    let rate = move |x: &[Dual64]| -> Dual64 {
        let temperature = x[0] + Dual64::from(CELSIUS_OFFSET);
        let area = x[2] / Dual64::from(AREA_SCALE);
        let exponent = -Dual64::from(kinetics.activation_energy) / (Dual64::from(kinetics.gas_constant) * temperature);
        let k = Dual64::from(kinetics.pre_exponential) * exponent.exp();
        k * x[1] * area * (Dual64::from(1.0) - x[3] / Dual64::from(max_yield))
    };

    let point = [params.temperature, params.concentration, params.surface_area, h2];
    let grad = gradient(&rate, &point);
    let value = rate(&point.map(|v| Dual64::from(v))).re;

    RateSensitivities {
        rate: value,
        d_temperature: grad[0],
        d_concentration: grad[1],
        d_surface_area: grad[2],
        d_yield: grad[3],
    }
}
