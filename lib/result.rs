//! Snapshot of a wavefunction sampled over a coordinate grid.
//!
//! A [`WaveResult`] is the interchange value between this crate and any
//! downstream consumer (plotting, comparison, persistence). Its fields are
//! public; keeping them consistent after construction is the caller's
//! responsibility.
//!
//! ```
//! use ndarray as nd;
//! use num_complex::Complex64 as C64;
//! use qwave::result::WaveResult;
//!
//! let res = WaveResult::new(nd::array![0.0, 1.0], nd::Array1::from_elem(2, C64::new(1.0, 0.0))).unwrap();
//! let mut copy = res.copy();
//! copy.x[0] = 99.0;
//! copy.metadata.insert("note".into(), "edited".into());
//! assert_eq!(res.x[0], 0.0);
//! assert!(res.metadata.is_empty());
//! assert!(copy.t.is_none());
//! ```

use std::{ collections::HashMap, f64::consts::TAU, fmt };
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    error::{ LengthError, ResultError },
    utils::{ fft, fft_freq, fft_shift, trapz, uniform_spacing },
    wave::WaveFunction,
    DEF_GRID_RTOL,
};

pub type RResult<T> = Result<T, ResultError>;

/// A single metadata value.
#[derive(Clone, Debug, PartialEq)]
pub enum Meta {
    Float(f64),
    Int(i64),
    Bool(bool),
    Complex(C64),
    Str(String),
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(x) => write!(f, "{}", x),
            Self::Int(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Complex(z) => write!(f, "{}", z),
            Self::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for Meta {
    fn from(x: f64) -> Self { Self::Float(x) }
}

impl From<i64> for Meta {
    fn from(n: i64) -> Self { Self::Int(n) }
}

impl From<bool> for Meta {
    fn from(b: bool) -> Self { Self::Bool(b) }
}

impl From<C64> for Meta {
    fn from(z: C64) -> Self { Self::Complex(z) }
}

impl From<String> for Meta {
    fn from(s: String) -> Self { Self::Str(s) }
}

impl From<&str> for Meta {
    fn from(s: &str) -> Self { Self::Str(s.to_string()) }
}

/// Free-form description of how a result was produced.
pub type Metadata = HashMap<String, Meta>;

/// Positions `x` with index-aligned amplitudes `psi`, optional time samples,
/// and metadata.
///
/// `Clone` (and [`Self::copy`]) produces a fully independent value: no
/// storage is shared between the original and the copy.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveResult {
    /// Positions at which the wavefunction was evaluated.
    pub x: nd::Array1<f64>,
    /// Wavefunction values at each position.
    pub psi: nd::Array1<C64>,
    /// Time(s) associated with the result, if any.
    pub t: Option<nd::Array1<f64>>,
    /// Additional parameters (amplitude, wavelength, mass, etc.).
    pub metadata: Metadata,
}

impl WaveResult {
    /// Create a new result with no time samples and empty metadata.
    ///
    /// Fails if `x` and `psi` have different lengths.
    pub fn new(x: nd::Array1<f64>, psi: nd::Array1<C64>) -> RResult<Self> {
        LengthError::check(&x, &psi)?;
        Ok(Self { x, psi, t: None, metadata: Metadata::new() })
    }

    /// Create a new result from all fields.
    ///
    /// Fails if `x` and `psi` have different lengths.
    pub fn with_all(
        x: nd::Array1<f64>,
        psi: nd::Array1<C64>,
        t: Option<nd::Array1<f64>>,
        metadata: Metadata,
    ) -> RResult<Self> {
        LengthError::check(&x, &psi)?;
        Ok(Self { x, psi, t, metadata })
    }

    /// Evaluate `wave` over `x`, recording its time and
    /// [metadata][WaveFunction::metadata].
    pub fn sample<W>(wave: &W, x: nd::Array1<f64>) -> RResult<Self>
    where W: WaveFunction
    {
        let psi = wave.evaluate_arr(&x)?;
        let t = Some(nd::array![wave.time()]);
        Ok(Self { x, psi, t, metadata: wave.metadata() })
    }

    /// Create a deep, fully independent copy.
    ///
    /// An absent time sequence stays absent.
    pub fn copy(&self) -> Self { self.clone() }

    /// Number of sample points.
    pub fn len(&self) -> usize { self.x.len() }

    /// Return `true` if there are no sample points.
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// Compute |ψ|² at every sample point.
    pub fn probability_density(&self) -> nd::Array1<f64> {
        self.psi.mapv(|q| q.norm_sqr())
    }

    /// Integrate |ψ|² over the sampled grid using the trapezoidal rule.
    ///
    /// The grid need not be uniform, but must have at least 2 points.
    pub fn norm(&self) -> RResult<f64> {
        let n = self.len();
        if n < 2 { return Err(ResultError::TooShort(n)); }
        Ok(trapz(&self.x, &self.probability_density()))
    }

    /// Return a copy with `psi` rescaled so that [`Self::norm`] is 1.
    pub fn normalized(&self) -> RResult<Self> {
        let norm = self.norm()?;
        if norm == 0.0 || !norm.is_finite() { return Err(ResultError::ZeroNorm); }
        let scale = norm.sqrt().recip();
        let mut new = self.clone();
        new.psi.mapv_inplace(|q| q * scale);
        Ok(new)
    }

    /// Compute the discrete Fourier transform of `psi` over a uniform grid.
    ///
    /// Returns angular wave numbers `k` in increasing order alongside the
    /// matching (shifted) transform, scaled by the grid spacing so that it
    /// approximates the continuous transform ∫ψ(x) exp(-i k x) dx up to a
    /// phase set by the grid origin.
    pub fn momentum_spectrum(&self) -> RResult<(nd::Array1<f64>, nd::Array1<C64>)> {
        let n = self.len();
        if n < 2 { return Err(ResultError::TooShort(n)); }
        let dx = uniform_spacing(&self.x, DEF_GRID_RTOL)
            .ok_or(ResultError::NonUniformGrid)?;
        let k = fft_freq(n, dx).mapv(|f| TAU * f);
        let phi = fft(&self.psi).mapv(|p| p * dx);
        Ok((fft_shift(&k), fft_shift(&phi)))
    }
}
