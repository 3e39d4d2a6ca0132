#![allow(non_upper_case_globals)]

//! Physical constants used by the analytic wavefunctions.
//!
//! All values are in SI units.

/// π, re-exported for convenience.
pub const PI: f64 = std::f64::consts::PI;

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// speed of light in vacuum (m s^-1)
pub const c: f64 = 2.99792458e8;
//             +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.10938356e-31;
//              +/- 0.00000011e-31
