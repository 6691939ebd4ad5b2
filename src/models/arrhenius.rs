//! Arrhenius temperature dependence.
//!
//! # Rate Constant
//! - k(T) = A * exp(-Ea / (R*T))
//!
//! # Example
//!
//! ```
//! use psi_hydrogen::models::Arrhenius;
//!
//! let kinetics = Arrhenius::new(1e5, 55_000.0);
//! let k = kinetics.rate_constant(298.15);
//! assert!(k > 0.0 && k < 1e-4);
//! ```

use crate::constants::{ACTIVATION_ENERGY, GAS_CONSTANT, PRE_EXPONENTIAL};
use serde::{Deserialize, Serialize};

/// Arrhenius kinetic parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arrhenius {
    /// Pre-exponential factor A (1/h)
    pub pre_exponential: f64,
    /// Activation energy Ea (J/mol)
    pub activation_energy: f64,
    /// Gas constant R (J/(mol*K))
    pub gas_constant: f64,
}

impl Arrhenius {
    /// Creates kinetics with the standard gas constant.
    pub fn new(pre_exponential: f64, activation_energy: f64) -> Self {
        Arrhenius { pre_exponential, activation_energy, gas_constant: GAS_CONSTANT }
    }

    /// Overrides the gas constant (useful when working in other unit systems).
    pub fn with_gas_constant(mut self, gas_constant: f64) -> Self {
        self.gas_constant = gas_constant;
        self
    }

    /// Rate constant at an absolute temperature in Kelvin.
    ///
    /// Undefined at 0 K; callers keep temperatures inside the control range.
    pub fn rate_constant(&self, temperature_k: f64) -> f64 {
        self.pre_exponential * (-self.activation_energy / (self.gas_constant * temperature_k)).exp()
    }

    /// Analytic derivative dk/dT = k * Ea / (R*T^2).
    pub fn rate_constant_slope(&self, temperature_k: f64) -> f64 {
        self.rate_constant(temperature_k) * self.activation_energy
            / (self.gas_constant * temperature_k * temperature_k)
    }
}

impl Default for Arrhenius {
    fn default() -> Self {
        Arrhenius::new(PRE_EXPONENTIAL, ACTIVATION_ENERGY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let kinetics = Arrhenius::default();
        assert_eq!(kinetics.pre_exponential, 1e5);
        assert_eq!(kinetics.activation_energy, 55_000.0);
        assert_eq!(kinetics.gas_constant, 8.314);
    }

    #[test]
    fn test_rate_constant_room_temperature() {
        // k = 1e5 * exp(-55000 / (8.314 * 298.15)) aprox 2.3114e-5 1/h
        let k = Arrhenius::default().rate_constant(298.15);
        assert!((k - 2.311_429_898_692_429e-5).abs() / k < 1e-9, "got {}", k);
    }

    #[test]
    fn test_rate_constant_increases_with_temperature() {
        let kinetics = Arrhenius::default();
        let mut previous = 0.0;
        for celsius in (-20..=100).step_by(5) {
            let k = kinetics.rate_constant(celsius as f64 + 273.15);
            assert!(k > previous, "k must grow with T (at {} C)", celsius);
            previous = k;
        }
    }

    #[test]
    fn test_zero_activation_energy() {
        // Without an energy barrier the rate constant is just A
        let kinetics = Arrhenius::new(42.0, 0.0);
        assert!((kinetics.rate_constant(250.0) - 42.0).abs() < 1e-12);
        assert!((kinetics.rate_constant(400.0) - 42.0).abs() < 1e-12);
    }

    #[test]
    fn test_rate_constant_slope_matches_finite_difference() {
        let kinetics = Arrhenius::default();
        let t = 330.0;
        let h = 1e-4;
        let numerical = (kinetics.rate_constant(t + h) - kinetics.rate_constant(t - h)) / (2.0 * h);
        let analytic = kinetics.rate_constant_slope(t);
        assert!((numerical - analytic).abs() / analytic < 1e-6);
    }

    #[test]
    fn test_with_gas_constant() {
        let kinetics = Arrhenius::new(1.0, 1.0).with_gas_constant(1.0);
        // exp(-1/1) at T = 1
        assert!((kinetics.rate_constant(1.0) - (-1.0f64).exp()).abs() < 1e-12);
    }
}
