//! Analytic wavefunctions and the free-particle plane wave.
//!
//! A [`PlaneWave`] is the function
//! ```text
//! ψ(x, t) = A exp(i (k (x - x₀) - ω t + φ))
//! ```
//! with wave number *k* = 2π/λ and angular frequency given by the
//! free-particle dispersion relation *ω* = *ħ* *k*²/2 *m*. See
//! [`docs`][crate::docs#plane-waves] for background.
//!
//! Quantities that depend on the dispersion relation are undefined for a
//! massless particle and return [`WaveError::Massless`] in that case; these are
//! [`PlaneWave::angular_frequency`], [`PlaneWave::energy`],
//! [`PlaneWave::phase_velocity`], [`PlaneWave::period`], and every evaluation
//! function that needs *ω* at nonzero time. At *t* = 0 the time term vanishes
//! and evaluation succeeds for any mass.

use std::f64::consts::TAU;
use log::{ debug, warn };
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    ArrD,
    constants::{ hbar, me },
    error::WaveError,
    result::{ Meta, Metadata },
    validate::{ validate_non_negative, validate_positive },
};

pub type WResult<T> = Result<T, WaveError>;

/// A complex-valued wavefunction over one spatial dimension, fixed at a single
/// point in time.
///
/// The reference position and time are set at construction and never change.
pub trait WaveFunction {
    /// Spatial reference point of the wavefunction.
    fn position(&self) -> f64;

    /// Time at which the wavefunction is evaluated.
    fn time(&self) -> f64;

    /// Evaluate the wavefunction at a single position.
    fn evaluate(&self, x: f64) -> WResult<C64>;

    /// Describe the construction parameters, for attaching to a
    /// [`WaveResult`][crate::result::WaveResult].
    fn metadata(&self) -> Metadata;

    /// Evaluate the wavefunction elementwise over an array of positions.
    fn evaluate_arr<S, D>(&self, x: &ArrD<S, D>) -> WResult<nd::Array<C64, D>>
    where
        S: nd::Data<Elem = f64>,
        D: nd::Dimension,
        Self: Sized,
    {
        let mut psi: nd::Array<C64, D> = nd::Array::zeros(x.raw_dim());
        for (psik, &xk) in psi.iter_mut().zip(x.iter()) {
            *psik = self.evaluate(xk)?;
        }
        Ok(psi)
    }

    /// Compute the probability density |ψ(x)|² at a single position.
    fn probability_density(&self, x: f64) -> WResult<f64> {
        self.evaluate(x).map(|q| q.norm_sqr())
    }

    /// Compute the probability density |ψ(x)|² over an array of positions.
    fn probability_density_arr<S, D>(&self, x: &ArrD<S, D>)
        -> WResult<nd::Array<f64, D>>
    where
        S: nd::Data<Elem = f64>,
        D: nd::Dimension,
        Self: Sized,
    {
        self.evaluate_arr(x).map(|psi| psi.mapv(|q| q.norm_sqr()))
    }
}

impl<W> WaveFunction for &W
where W: WaveFunction + ?Sized
{
    fn position(&self) -> f64 { (**self).position() }

    fn time(&self) -> f64 { (**self).time() }

    fn evaluate(&self, x: f64) -> WResult<C64> { (**self).evaluate(x) }

    fn metadata(&self) -> Metadata { (**self).metadata() }
}

impl<W> WaveFunction for Box<W>
where W: WaveFunction + ?Sized
{
    fn position(&self) -> f64 { (**self).position() }

    fn time(&self) -> f64 { (**self).time() }

    fn evaluate(&self, x: f64) -> WResult<C64> { (**self).evaluate(x) }

    fn metadata(&self) -> Metadata { (**self).metadata() }
}

/// A plane wave evolving under the free-particle dispersion relation.
///
/// All derived quantities are computed on demand from the stored parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlaneWave {
    amplitude: C64,
    wavelength: f64,
    position: f64,
    phase: f64,
    time: f64,
    mass: f64,
}

impl PlaneWave {
    /// Create a new plane wave.
    ///
    /// Fails with an invalid-parameter error if `wavelength <= 0` or
    /// `mass < 0`. A massless wave is allowed, but see the [module-level
    /// documentation][self].
    pub fn new(
        amplitude: C64,
        wavelength: f64,
        position: f64,
        phase: f64,
        time: f64,
        mass: f64,
    ) -> WResult<Self> {
        let new = Self { amplitude, wavelength, position, phase, time, mass };
        new.validate_parameters()?;
        if mass == 0.0 {
            warn!(
                "wave::PlaneWave: massless plane wave; angular frequency, \
                energy, phase velocity, and period are undefined"
            );
        }
        debug!(
            "wave::PlaneWave: A = {amplitude}, λ = {wavelength}, x₀ = {position}, \
            φ = {phase}, t = {time}, m = {mass}"
        );
        Ok(new)
    }

    /// Create a new plane wave for an electron at `x₀ = 0`, `φ = 0`, `t = 0`.
    pub fn electron(amplitude: C64, wavelength: f64) -> WResult<Self> {
        Self::new(amplitude, wavelength, 0.0, 0.0, 0.0, me)
    }

    /// Check that `wavelength > 0` and `mass >= 0`.
    pub fn validate_parameters(&self) -> WResult<()> {
        validate_positive(self.wavelength, "wavelength")?;
        validate_non_negative(self.mass, "mass")?;
        Ok(())
    }

    /// Return a copy of `self` evaluated at a different time.
    pub fn at_time(&self, time: f64) -> Self { Self { time, ..*self } }

    /// Complex amplitude *A*.
    pub fn amplitude(&self) -> C64 { self.amplitude }

    /// Wavelength *λ*.
    pub fn wavelength(&self) -> f64 { self.wavelength }

    /// Initial phase *φ*.
    pub fn phase(&self) -> f64 { self.phase }

    /// Particle mass *m*.
    pub fn mass(&self) -> f64 { self.mass }

    fn require_mass(&self, quantity: &'static str) -> WResult<f64> {
        (self.mass != 0.0).then_some(self.mass)
            .ok_or(WaveError::Massless(quantity))
    }

    /// Wave number *k* = 2π/*λ*.
    pub fn wave_number(&self) -> f64 { TAU / self.wavelength }

    /// Angular frequency *ω* = *ħ* *k*²/2 *m*.
    pub fn angular_frequency(&self) -> WResult<f64> {
        let m = self.require_mass("angular_frequency")?;
        Ok(hbar * self.wave_number().powi(2) / (2.0 * m))
    }

    /// Momentum *p* = *ħ* *k*.
    pub fn momentum(&self) -> f64 { hbar * self.wave_number() }

    /// Energy *E* = *p*²/2 *m*.
    pub fn energy(&self) -> WResult<f64> {
        let m = self.require_mass("energy")?;
        Ok(self.momentum().powi(2) / (2.0 * m))
    }

    /// Phase velocity *ω*/*k*.
    pub fn phase_velocity(&self) -> WResult<f64> {
        self.require_mass("phase_velocity")?;
        Ok(self.angular_frequency()? / self.wave_number())
    }

    /// Temporal period 2π/*ω*.
    pub fn period(&self) -> WResult<f64> {
        self.require_mass("period")?;
        Ok(TAU / self.angular_frequency()?)
    }

    // ω t, skipping ω when the time term vanishes
    fn phase_lag(&self, t: f64) -> WResult<f64> {
        if t == 0.0 { Ok(0.0) } else { Ok(self.angular_frequency()? * t) }
    }

    fn psi(&self, x: f64, wt: f64) -> C64 {
        let k = self.wave_number();
        self.amplitude * C64::cis(k * (x - self.position) - wt + self.phase)
    }

    /// Evaluate at time *t* = 0, regardless of the stored time.
    pub fn evaluate_at_time_zero(&self, x: f64) -> C64 { self.psi(x, 0.0) }

    /// Like [`Self::evaluate_at_time_zero`], elementwise over an array.
    pub fn evaluate_at_time_zero_arr<S, D>(&self, x: &ArrD<S, D>)
        -> nd::Array<C64, D>
    where
        S: nd::Data<Elem = f64>,
        D: nd::Dimension,
    {
        x.mapv(|xk| self.psi(xk, 0.0))
    }

    /// Evaluate at position *x* = 0 for a given time `t` (not the stored
    /// time).
    pub fn evaluate_at_position_zero(&self, t: f64) -> WResult<C64> {
        Ok(self.psi(0.0, self.phase_lag(t)?))
    }

    /// Like [`Self::evaluate_at_position_zero`], elementwise over an array of
    /// times.
    pub fn evaluate_at_position_zero_arr<S, D>(&self, t: &ArrD<S, D>)
        -> WResult<nd::Array<C64, D>>
    where
        S: nd::Data<Elem = f64>,
        D: nd::Dimension,
    {
        let w
            = match self.angular_frequency() {
                Ok(w) => w,
                Err(_) if t.iter().all(|tk| *tk == 0.0) => 0.0,
                Err(err) => { return Err(err); },
            };
        Ok(t.mapv(|tk| self.psi(0.0, w * tk)))
    }
}

impl WaveFunction for PlaneWave {
    fn position(&self) -> f64 { self.position }

    fn time(&self) -> f64 { self.time }

    fn evaluate(&self, x: f64) -> WResult<C64> {
        Ok(self.psi(x, self.phase_lag(self.time)?))
    }

    fn metadata(&self) -> Metadata {
        Metadata::from([
            ("kind".to_string(), Meta::from("PlaneWave")),
            ("amplitude".to_string(), Meta::from(self.amplitude)),
            ("wavelength".to_string(), Meta::from(self.wavelength)),
            ("position".to_string(), Meta::from(self.position)),
            ("phase".to_string(), Meta::from(self.phase)),
            ("time".to_string(), Meta::from(self.time)),
            ("mass".to_string(), Meta::from(self.mass)),
        ])
    }

    fn evaluate_arr<S, D>(&self, x: &ArrD<S, D>) -> WResult<nd::Array<C64, D>>
    where
        S: nd::Data<Elem = f64>,
        D: nd::Dimension,
    {
        let wt = self.phase_lag(self.time)?;
        Ok(x.mapv(|xk| self.psi(xk, wt)))
    }
}

/// Plane wave construction parameters, with optional fields taking their
/// defaults in [`Self::build`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlaneWaveConfig {
    /// Complex amplitude.
    pub amplitude: C64,
    /// Wavelength; must be positive.
    pub wavelength: f64,
    /// Spatial offset (default: `0`).
    pub position: Option<f64>,
    /// Initial phase (default: `0`).
    pub phase: Option<f64>,
    /// Time (default: `0`).
    pub time: Option<f64>,
    /// Particle mass; must be non-negative (default: electron mass).
    pub mass: Option<f64>,
}

impl PlaneWaveConfig {
    /// Create a configuration with all optional fields unset.
    pub fn new(amplitude: C64, wavelength: f64) -> Self {
        Self {
            amplitude,
            wavelength,
            position: None,
            phase: None,
            time: None,
            mass: None,
        }
    }

    /// Construct the [`PlaneWave`].
    pub fn build(self) -> WResult<PlaneWave> {
        PlaneWave::new(
            self.amplitude,
            self.wavelength,
            self.position.unwrap_or(0.0),
            self.phase.unwrap_or(0.0),
            self.time.unwrap_or(0.0),
            self.mass.unwrap_or(me),
        )
    }
}

impl From<PlaneWave> for PlaneWaveConfig {
    fn from(wave: PlaneWave) -> Self {
        Self {
            amplitude: wave.amplitude,
            wavelength: wave.wavelength,
            position: Some(wave.position),
            phase: Some(wave.phase),
            time: Some(wave.time),
            mass: Some(wave.mass),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use approx::{ assert_abs_diff_eq, assert_relative_eq };
    use crate::error::ValidationError;
    use super::*;

    fn c(re: f64, im: f64) -> C64 { C64::new(re, im) }

    fn assert_c_eq(a: C64, b: C64, eps: f64) {
        assert_abs_diff_eq!(a.re, b.re, epsilon = eps);
        assert_abs_diff_eq!(a.im, b.im, epsilon = eps);
    }

    #[test]
    fn construction() {
        let wave = PlaneWave::new(c(1.0, 0.0), 5.0, 0.0, 0.0, 0.0, me).unwrap();
        assert_eq!(wave.amplitude(), c(1.0, 0.0));
        assert_eq!(wave.wavelength(), 5.0);
        assert_eq!(wave.position(), 0.0);
        assert_eq!(wave.phase(), 0.0);
        assert_eq!(wave.time(), 0.0);
        assert_eq!(wave.mass(), me);
        assert_eq!(PlaneWave::electron(c(1.0, 0.0), 5.0).unwrap(), wave);
        assert_eq!(PlaneWaveConfig::new(c(1.0, 0.0), 5.0).build().unwrap(), wave);
    }

    #[test]
    fn invalid_parameters() {
        let err = PlaneWave::electron(c(1.0, 0.0), -5.0).unwrap_err();
        let inv = err.as_invalid_parameter().unwrap();
        assert_eq!(inv.parameter, "wavelength");
        assert_eq!(inv.message, "Value must be positive");
        assert!(PlaneWave::electron(c(1.0, 0.0), 0.0).is_err());

        let err = PlaneWave::new(c(1.0, 0.0), 5.0, 0.0, 0.0, 0.0, -1.0).unwrap_err();
        let inv = err.as_invalid_parameter().unwrap();
        assert_eq!(inv.parameter, "mass");
        assert_eq!(inv.message, "Value must be non-negative");

        let err = PlaneWave::electron(c(1.0, 0.0), f64::NAN).unwrap_err();
        assert!(matches!(
            err, WaveError::Validation(ValidationError::TypeMismatch(_))));
    }

    #[test]
    fn massless() {
        let wave = PlaneWave::new(c(1.0, 0.0), 5.0, 0.0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(
            wave.angular_frequency(),
            Err(WaveError::Massless("angular_frequency")),
        );
        assert_eq!(wave.energy(), Err(WaveError::Massless("energy")));
        assert_eq!(wave.phase_velocity(), Err(WaveError::Massless("phase_velocity")));
        assert_eq!(wave.period(), Err(WaveError::Massless("period")));
        assert_relative_eq!(wave.momentum(), hbar * TAU / 5.0);
        assert_c_eq(wave.evaluate_at_time_zero(1.25), c(0.0, 1.0), 1e-14);
    }

    #[test]
    fn massless_evaluation_at_time_zero() {
        let amp = c(0.6, 0.8);
        let phase = 0.7;
        let wave = PlaneWave::new(amp, 5.0, 1.0, phase, 0.0, 0.0).unwrap();
        let expected = amp * C64::cis(phase);
        assert_c_eq(wave.evaluate(1.0).unwrap(), expected, 1e-14);
        assert_c_eq(wave.evaluate_at_time_zero(1.0), expected, 1e-14);
        assert_c_eq(
            wave.evaluate_at_position_zero(0.0).unwrap(),
            wave.evaluate_at_time_zero(0.0),
            1e-14,
        );
        assert_abs_diff_eq!(wave.evaluate(3.3).unwrap().norm(), 1.0, epsilon = 1e-14);
        let x = nd::array![0.0, 1.0, 2.5];
        let psi = wave.evaluate_arr(&x).unwrap();
        assert_c_eq(psi[1], expected, 1e-14);
        let psit = wave.evaluate_at_position_zero_arr(&nd::array![0.0, 0.0]).unwrap();
        assert_c_eq(psit[0], wave.evaluate_at_time_zero(0.0), 1e-14);

        let later = wave.at_time(1.0);
        assert_eq!(later.evaluate(1.0), Err(WaveError::Massless("angular_frequency")));
        assert!(later.evaluate_arr(&x).is_err());
        assert!(wave.evaluate_at_position_zero(1.0).is_err());
        assert!(wave.evaluate_at_position_zero_arr(&nd::array![0.0, 1.0]).is_err());
    }

    #[test]
    fn derived_quantities() {
        let wave = PlaneWave::new(c(1.0, 0.0), 5.0, 0.3, 0.1, 2.0, me).unwrap();
        let k = 2.0 * PI / 5.0;
        let w = hbar * k * k / (2.0 * me);
        assert_relative_eq!(wave.wave_number(), k, max_relative = 1e-12);
        assert_relative_eq!(wave.angular_frequency().unwrap(), w, max_relative = 1e-12);
        assert_relative_eq!(wave.momentum(), hbar * k, max_relative = 1e-12);
        assert_relative_eq!(
            wave.energy().unwrap(),
            (hbar * k).powi(2) / (2.0 * me),
            max_relative = 1e-12
        );
        assert_relative_eq!(wave.phase_velocity().unwrap(), w / k, max_relative = 1e-12);
        assert_relative_eq!(wave.period().unwrap(), 2.0 * PI / w, max_relative = 1e-12);
        // E = ħω under the free-particle dispersion relation
        assert_relative_eq!(
            wave.energy().unwrap(),
            hbar * wave.angular_frequency().unwrap(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn wave_number_times_wavelength() {
        for wavelength in [1e-10, 0.37, 1.0, 5.0, 2.0 * PI, 1e6] {
            for mass in [0.0, me, 1.0] {
                let wave = PlaneWave::new(c(1.0, 0.0), wavelength, 0.0, 0.0, 0.0, mass)
                    .unwrap();
                assert_relative_eq!(
                    wave.wave_number() * wavelength, TAU, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn magnitude_is_constant() {
        let amps = [c(1.0, 0.0), c(0.3, -0.4), c(0.0, 2.0)];
        let x: nd::Array1<f64> = nd::Array1::linspace(-10.0, 10.0, 201);
        for amp in amps {
            let wave = PlaneWave::new(amp, 1.7, 0.4, 0.9, 3.0, 1.0).unwrap();
            let psi = wave.evaluate_arr(&x).unwrap();
            psi.iter().for_each(|q| {
                assert_abs_diff_eq!(q.norm(), amp.norm(), epsilon = 1e-14)
            });
        }
    }

    #[test]
    fn unit_amplitude_at_origin() {
        let wave = PlaneWave::electron(c(1.0, 0.0), 2.0 * PI).unwrap();
        assert_c_eq(wave.evaluate(0.0).unwrap(), c(1.0, 0.0), 1e-14);
    }

    #[test]
    fn coincidence_points() {
        let amp = c(0.6, 0.8);
        let phase = 0.7;
        let wave = PlaneWave::new(amp, 3.0, 1.5, phase, 0.0, 1.0).unwrap();
        let expected = amp * C64::cis(phase);
        assert_c_eq(wave.evaluate(1.5).unwrap(), expected, 1e-14);
        assert_c_eq(wave.evaluate_at_time_zero(1.5), expected, 1e-14);
        // at x = 0 only the position offset contributes; compare at t = 0
        let at_origin = amp * C64::cis(-wave.wave_number() * 1.5 + phase);
        assert_c_eq(wave.evaluate_at_position_zero(0.0).unwrap(), at_origin, 1e-14);
        let zeroed = PlaneWave::new(amp, 3.0, 0.0, phase, 0.0, 1.0).unwrap();
        assert_c_eq(zeroed.evaluate_at_position_zero(0.0).unwrap(), expected, 1e-14);
    }

    #[test]
    fn evaluate_agrees_with_time_zero_when_time_is_zero() {
        let wave = PlaneWave::new(c(1.0, 0.5), 2.5, -0.4, 0.3, 0.0, me).unwrap();
        for x in [-3.0, 0.0, 0.1, 7.5] {
            assert_c_eq(wave.evaluate(x).unwrap(), wave.evaluate_at_time_zero(x), 1e-14);
        }
        let later = wave.at_time(10.0);
        assert_eq!(later.time(), 10.0);
        assert_c_eq(later.evaluate_at_time_zero(1.0), wave.evaluate_at_time_zero(1.0), 1e-14);
    }

    #[test]
    fn evaluate_agrees_with_position_zero_at_stored_time() {
        let wave = PlaneWave::new(c(1.0, 0.0), 4.0, 0.8, 0.2, 1.3, 1e-3).unwrap();
        let t = wave.time();
        assert_c_eq(
            wave.evaluate(0.0).unwrap(),
            wave.evaluate_at_position_zero(t).unwrap(),
            1e-12,
        );
    }

    #[test]
    fn spatial_periodicity() {
        let wave = PlaneWave::electron(c(1.0, 0.0), 4.0).unwrap();
        assert_c_eq(wave.evaluate(0.0).unwrap(), wave.evaluate(4.0).unwrap(), 1e-12);
        let wave = PlaneWave::new(c(0.5, 0.5), 1.3, 0.2, 1.0, 5.0, 1.0).unwrap();
        for x in [-1.0, 0.0, 2.7] {
            assert_c_eq(wave.evaluate(x).unwrap(), wave.evaluate(x + 1.3).unwrap(), 1e-12);
        }
    }

    #[test]
    fn temporal_periodicity() {
        let wave = PlaneWave::electron(c(1.0, 0.0), 5.0).unwrap();
        let period = wave.period().unwrap();
        for t in [0.0, 1.0, 0.25 * period] {
            assert_c_eq(
                wave.evaluate_at_position_zero(t).unwrap(),
                wave.evaluate_at_position_zero(t + period).unwrap(),
                1e-9,
            );
        }
    }

    #[test]
    fn array_forms_match_scalar_forms() {
        let wave = PlaneWave::new(c(1.0, -1.0), 2.0, 0.1, 0.2, 0.3, 1.0).unwrap();
        let x = nd::array![[0.0, 0.5], [1.0, -2.0]];
        let psi = wave.evaluate_arr(&x).unwrap();
        let psi0 = wave.evaluate_at_time_zero_arr(&x);
        let psit = wave.evaluate_at_position_zero_arr(&x).unwrap();
        let rho = wave.probability_density_arr(&x).unwrap();
        assert_eq!(psi.shape(), &[2, 2]);
        nd::Zip::from(&x).and(&psi).and(&psi0).and(&psit).and(&rho)
            .for_each(|&xk, &q, &q0, &qt, &r| {
                assert_c_eq(q, wave.evaluate(xk).unwrap(), 1e-14);
                assert_c_eq(q0, wave.evaluate_at_time_zero(xk), 1e-14);
                assert_c_eq(qt, wave.evaluate_at_position_zero(xk).unwrap(), 1e-14);
                assert_abs_diff_eq!(r, 2.0, epsilon = 1e-13);
            });
    }

    #[test]
    fn metadata() {
        let wave = PlaneWave::new(c(1.0, 0.0), 2.0, 0.0, 0.0, 0.0, 1.0).unwrap();
        let md = wave.metadata();
        assert_eq!(md["kind"], Meta::from("PlaneWave"));
        assert_eq!(md["wavelength"], Meta::Float(2.0));
        assert_eq!(md["amplitude"], Meta::Complex(c(1.0, 0.0)));
        assert_eq!(md["mass"], Meta::Float(1.0));
    }

    #[test]
    fn config_roundtrip() {
        let mut config = PlaneWaveConfig::new(c(2.0, 0.0), 1.5);
        config.time = Some(4.0);
        config.mass = Some(0.5);
        let wave = config.build().unwrap();
        assert_eq!(wave.time(), 4.0);
        assert_eq!(wave.position(), 0.0);
        assert_eq!(PlaneWaveConfig::from(wave).build().unwrap(), wave);
        config.wavelength = -1.0;
        assert!(config.build().is_err());
    }

    #[test]
    fn trait_objects() {
        let wave = PlaneWave::new(c(1.0, 0.0), 2.0, 0.0, 0.0, 0.0, 1.0).unwrap();
        let boxed: Box<dyn WaveFunction> = Box::new(wave);
        let x = nd::array![0.0, 0.5, 1.0];
        let psi = boxed.evaluate_arr(&x).unwrap();
        assert_c_eq(psi[1], wave.evaluate(0.5).unwrap(), 1e-14);
        assert_abs_diff_eq!(boxed.probability_density(0.3).unwrap(), 1.0, epsilon = 1e-14);
    }
}
