//! Kinetic models for hydrogen generation.
//!
//! This module provides the rate laws integrated by the simulation driver,
//! organized as individual files:
//!
//! - **Arrhenius**: temperature dependence of the rate constant
//! - **HydrogenGenerator**: porous silicon oxidation with a saturating yield
//!
//! All models are pure functions of their inputs. They hold no mutable state
//! and perform no range validation; out-of-range conditions are rejected at
//! the input boundary (see [`crate::controls`]).
//!
//! ## Example
//!
//! ```
//! use psi_hydrogen::models::{HydrogenGenerator, RateLaw};
//!
//! let generator = HydrogenGenerator::new(350.0, 1.0, 4.0).with_kinetics(1e5, 55_000.0);
//! let dh2_dt = generator.derivative(0.0, 1.0);
//! assert!(dh2_dt > 0.0);
//! ```
//!
//! # Creating a New Model
//!
//! Any scalar first-order rate law can be integrated once it implements
//! [`RateLaw`]:
//!
//! ```
//! use psi_hydrogen::models::RateLaw;
//!
//! /// First-order decay: dy/dt = -lambda*y
//! struct Decay {
//!     lambda: f64,
//! }
//!
//! impl RateLaw for Decay {
//!     fn derivative(&self, _t: f64, y: f64) -> f64 {
//!         -self.lambda * y
//!     }
//!
//!     fn jacobian(&self, _t: f64, _y: f64) -> f64 {
//!         -self.lambda
//!     }
//! }
//! ```

pub mod arrhenius;
pub mod hydrogen;

pub use arrhenius::Arrhenius;
pub use hydrogen::{HydrogenGenerator, ReactionConditions, Uninitialized};

/// A scalar rate law dy/dt = f(t, y).
///
/// Implementors are consumed by [`GridIntegrator`](crate::solvers::integration::GridIntegrator).
pub trait RateLaw {
    /// Computes dy/dt at time `t` and state `y`.
    fn derivative(&self, t: f64, y: f64) -> f64;

    /// Computes partial(dy/dt)/partial(y), used by implicit methods.
    ///
    /// Defaults to a forward finite difference.
    fn jacobian(&self, t: f64, y: f64) -> f64 {
        let eps = 1e-8 * y.abs().max(1.0);
        (self.derivative(t, y + eps) - self.derivative(t, y)) / eps
    }
}

impl<R: RateLaw + ?Sized> RateLaw for &R {
    fn derivative(&self, t: f64, y: f64) -> f64 {
        (**self).derivative(t, y)
    }

    fn jacobian(&self, t: f64, y: f64) -> f64 {
        (**self).jacobian(t, y)
    }
}
