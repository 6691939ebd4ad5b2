//! Physical constants and fixed model settings.
//!
//! Kinetic constants describe the oxidation of porous silicon by water in an
//! alkaline (NaOH) solution. Time is measured in hours throughout the crate.

/// Arrhenius pre-exponential factor A (1/h).
pub const PRE_EXPONENTIAL: f64 = 1e5;

/// Activation energy Ea (J/mol).
pub const ACTIVATION_ENERGY: f64 = 55_000.0;

/// Universal gas constant R (J/(mol*K)).
pub const GAS_CONSTANT: f64 = 8.314;

/// Theoretical maximum hydrogen yield (% of silicon mass).
pub const H2_MAX: f64 = 6.25;

/// Offset between the Celsius and Kelvin scales.
pub const CELSIUS_OFFSET: f64 = 273.15;

/// Divisor turning a surface area in cm^2 into the effective area used by the rate law.
pub const AREA_SCALE: f64 = 100.0;

/// Number of points in the output time grid.
pub const GRID_POINTS: usize = 300;
