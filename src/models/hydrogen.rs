//! Hydrogen release from porous silicon in alkaline solution.
//!
//! # State Variable
//! - H2 yield (% of silicon mass): Differential variable
//!
//! # Reaction Conditions
//! - Temperature T (K)
//! - NaOH concentration (mol/L)
//! - Effective surface area (cm^2 / 100)
//!
//! # Rate Law
//! - k = A*exp(-Ea/(R*T))
//! - rate = k * [NaOH] * S
//! - dH2/dt = rate * (1 - H2/H2_max)
//!
//! The saturation factor drives the rate to zero as the yield approaches the
//! stoichiometric maximum, so with a constant `rate` the closed form is
//! `H2(t) = H2_max * (1 - exp(-rate*t/H2_max))`.
//!
//! Surface area is a lumped multiplier on the rate; it does not shrink as
//! silicon is consumed.
//!
//! # Example
//!
//! ```
//! use psi_hydrogen::models::{HydrogenGenerator, RateLaw};
//!
//! // Kinetics must be set before the model can produce rates
//! let generator = HydrogenGenerator::new(298.15, 0.5, 2.0)
//!     .with_kinetics(1e5, 55_000.0);
//!
//! let initial_rate = generator.derivative(0.0, 0.0);
//! assert!(initial_rate > 0.0);
//!
//! // At the theoretical maximum the reaction stops
//! assert_eq!(generator.derivative(0.0, 6.25), 0.0);
//! ```

use super::{Arrhenius, RateLaw};
use crate::constants::H2_MAX;

/// Phantom type marker for a generator without kinetics.
#[derive(Debug, Clone, Copy)]
pub struct Uninitialized;

/// Fixed operating conditions of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactionConditions {
    /// Absolute temperature (K)
    pub temperature: f64,
    /// Alkali (NaOH) concentration (mol/L)
    pub concentration: f64,
    /// Effective surface area (cm^2 / 100)
    pub surface_area: f64,
}

/// Porous silicon hydrogen generator.
///
/// The type parameter `K` holds the kinetics: `Uninitialized` until
/// [`with_kinetics`](HydrogenGenerator::with_kinetics) or
/// [`with_arrhenius`](HydrogenGenerator::with_arrhenius) is called, then
/// [`Arrhenius`]. Only a generator with kinetics implements [`RateLaw`].
#[derive(Debug, Clone, Copy)]
pub struct HydrogenGenerator<K = Uninitialized> {
    pub conditions: ReactionConditions,
    /// Theoretical maximum yield (% mass)
    pub max_yield: f64,
    kinetics: K,
}

impl HydrogenGenerator<Uninitialized> {
    /// Creates a generator at the given conditions.
    ///
    /// # Arguments
    ///
    /// * `temperature` - Absolute temperature (K)
    /// * `concentration` - NaOH concentration (mol/L)
    /// * `surface_area` - Effective surface area
    pub fn new(temperature: f64, concentration: f64, surface_area: f64) -> Self {
        HydrogenGenerator {
            conditions: ReactionConditions { temperature, concentration, surface_area },
            max_yield: H2_MAX,
            kinetics: Uninitialized,
        }
    }

    /// Sets Arrhenius parameters, transitioning to the initialized state.
    pub fn with_kinetics(self, pre_exponential: f64, activation_energy: f64) -> HydrogenGenerator<Arrhenius> {
        self.with_arrhenius(Arrhenius::new(pre_exponential, activation_energy))
    }

    /// Uses a prepared [`Arrhenius`] parameter set.
    pub fn with_arrhenius(self, kinetics: Arrhenius) -> HydrogenGenerator<Arrhenius> {
        HydrogenGenerator { conditions: self.conditions, max_yield: self.max_yield, kinetics }
    }
}

// Available at any initialization state
impl<K> HydrogenGenerator<K> {
    /// Overrides the theoretical maximum yield.
    pub fn with_max_yield(mut self, max_yield: f64) -> Self {
        self.max_yield = max_yield;
        self
    }
}

impl HydrogenGenerator<Arrhenius> {
    /// Gets the kinetic parameters (guaranteed to exist).
    pub fn kinetics(&self) -> &Arrhenius {
        &self.kinetics
    }

    /// Computes the rate constant k(T) at the run temperature.
    pub fn rate_constant(&self) -> f64 {
        self.kinetics.rate_constant(self.conditions.temperature)
    }

    /// Computes the unsaturated release rate: k * [NaOH] * S (% mass / h).
    pub fn reaction_rate(&self) -> f64 {
        self.rate_constant() * self.conditions.concentration * self.conditions.surface_area
    }

    /// Closed-form yield at time `t` starting from zero yield.
    pub fn analytic_yield(&self, t: f64) -> f64 {
        self.max_yield * (1.0 - (-self.reaction_rate() * t / self.max_yield).exp())
    }
}

impl RateLaw for HydrogenGenerator<Arrhenius> {
    fn derivative(&self, _t: f64, h2: f64) -> f64 {
        self.reaction_rate() * (1.0 - h2 / self.max_yield)
    }

    fn jacobian(&self, _t: f64, _h2: f64) -> f64 {
        -self.reaction_rate() / self.max_yield
    }
}
