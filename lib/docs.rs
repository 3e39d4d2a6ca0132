//! Theoretical background.
//!
//! # Contents
//! - [Plane waves](#plane-waves)
//! - [Derived quantities](#derived-quantities)
//! - [Massless particles](#massless-particles)
//! - [Potentials](#potentials)
//! - [Wave packets](#wave-packets)
//!
//! # Plane waves
//! In the absence of any potential, the one-dimensional time-dependent
//! Schrödinger equation reads
//! ```text
//!    ħ² ∂²             ∂
//! - --- --- ψ(x, t) = i ħ -- ψ(x, t)
//!   2 m ∂x²               ∂t
//! ```
//! and admits the separable solutions
//! ```text
//! ψ(x, t) = A exp(i (k (x - x₀) - ω t + φ))
//! ```
//! for any complex amplitude *A*, reference position *x*₀, and phase *φ*,
//! provided the wave number *k* and angular frequency *ω* satisfy the
//! free-particle dispersion relation
//! ```text
//!     ħ k²
//! ω = ----
//!     2 m
//! ```
//! Since the exponent is purely imaginary, |*ψ*(*x*, *t*)| = |*A*| everywhere;
//! a plane wave carries no information about where the particle is, and so is
//! not normalizable over the whole real line. It is periodic in space with the
//! wavelength *λ* and in time with the period *T*:
//! ```text
//! ψ(x + λ, t) = ψ(x, t)
//! ψ(x, t + T) = ψ(x, t)
//! ```
//!
//! # Derived quantities
//! Everything follows from *λ* and *m*:
//! ```text
//! k   = 2π / λ
//! ω   = ħ k² / 2 m
//! p   = ħ k
//! E   = p² / 2 m  (= ħ ω)
//! v_p = ω / k     (= ħ k / 2 m)
//! T   = 2π / ω
//! ```
//! Note that the phase velocity *v*<sub>p</sub> is half the classical particle
//! velocity *p*/*m*; the latter is the group velocity *∂ω*/*∂k*, which only
//! becomes meaningful for a superposition of plane waves.
//!
//! # Massless particles
//! The relation above divides by *m*, so *ω*, *E*, *v*<sub>p</sub>, and *T*
//! are undefined for *m* = 0. (A truly massless particle obeys a different,
//! linear dispersion relation *ω* = *c* *k*, which is outside the
//! Schrödinger picture altogether.) Rather than return infinities or NaNs, the
//! affected quantities return an error, as do evaluations of *ψ* at nonzero
//! time. At *t* = 0 the time term vanishes, so *ψ* itself, as well as *k* and
//! *p*, remain well defined.
//!
//! # Potentials
//! Three piecewise-constant landscapes are provided:
//! ```text
//!  free:        step:               infinite well:
//!
//!                       V0 ┌─────   V_wall ──┐         ┌──
//!                          │                 │         │
//! ────────────  ───────────┘                 └─────────┘
//!                          x0                a         b
//! ```
//! The step point *x*₀ belongs to the upper side of the step, and both walls
//! of the well belong to its interior. The infinite well is modeled by a finite
//! but very large wall height, 10¹⁰ by default.
//!
//! # Wave packets
//! A localized state can be built as a superposition of plane waves weighted by
//! a momentum-space amplitude *g*(*k*),
//! ```text
//!                1     ∞
//! ψ(x, t) = ---------  ∫ dk g(k) exp(i (k (x - x₀) - ω(k) t))
//!           sqrt(2π)  -∞
//! ```
//! Evaluating this integral requires choices about truncation and quadrature
//! that have not been made yet, so [`WavePacket`][crate::packet::WavePacket]
//! currently refuses to evaluate. Sampled states can still be taken to
//! momentum space with
//! [`WaveResult::momentum_spectrum`][crate::result::WaveResult::momentum_spectrum],
//! which applies the discrete Fourier transform over a uniform grid.
