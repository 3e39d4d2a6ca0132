//! Provides analytic, closed-form descriptions of one-dimensional quantum
//! wavefunctions and the potential-energy landscapes they live in.
//!
//! Provides implementations for the following:
//! - Potentials:
//!     - Free space
//!     - Step
//!     - Infinite square well (approximated by a large finite wall)
//! - Wavefunctions:
//!     - Plane waves under the free-particle dispersion relation, with all
//!       derived kinematic quantities (wave number, angular frequency,
//!       momentum, energy, phase velocity, period)
//!     - Wave packets (interface only; evaluation is not yet available)
//! - [`WaveResult`][result::WaveResult], a snapshot of a wavefunction sampled
//!   over a coordinate grid for downstream plotting and comparison.
//!
//! All quantities are in SI units unless otherwise noted.
//!
//! ```
//! use num_complex::Complex64 as C64;
//! use qwave::{ potential::{ Potential, StepPotential }, wave::PlaneWave };
//! use qwave::wave::WaveFunction;
//!
//! let wave = PlaneWave::new(C64::from(1.0), 5.0, 0.0, 0.0, 0.0, 1.0).unwrap();
//! assert!((wave.wave_number() * 5.0 - std::f64::consts::TAU).abs() < 1e-12);
//! assert!((wave.evaluate(1.3).unwrap().norm() - 1.0).abs() < 1e-14);
//!
//! let step = StepPotential::new(2.0, 5.0);
//! assert_eq!(step.evaluate(2.0), 5.0);
//! assert_eq!(step.to_string(), "StepPotential: V(x) = 0 for x < 2.0, V(x) = 5.0 for x >= 2.0");
//! ```
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod constants;
pub mod validate;
pub mod potential;
pub mod wave;
pub mod packet;
pub mod result;
pub mod utils;

pub mod docs;

/// Default wall height used by [`InfiniteWell`][potential::InfiniteWell].
pub const DEF_V_WALL: f64 = 1e10;

/// Default relative tolerance on grid spacing when a uniform grid is required.
pub const DEF_GRID_RTOL: f64 = 1e-9;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type ArrD<S, D> = ndarray::ArrayBase<S, D>;
