//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned when a named parameter violates a documented precondition.
///
/// Displays as `"{message}: {parameter}"`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}: {parameter}")]
pub struct InvalidParameter {
    /// Name of the offending parameter.
    pub parameter: String,
    /// Human-readable reason.
    pub message: String,
}

impl InvalidParameter {
    /// Default message used when none is given.
    pub const DEFAULT_MESSAGE: &'static str = "Invalid parameter provided";

    pub fn new<P, M>(parameter: P, message: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Self { parameter: parameter.into(), message: message.into() }
    }

    /// Create with [`Self::DEFAULT_MESSAGE`].
    pub fn with_default_message<P>(parameter: P) -> Self
    where P: Into<String>
    {
        Self::new(parameter, Self::DEFAULT_MESSAGE)
    }
}

/// Returned when a value cannot be ordered against a bound at all (e.g. NaN).
///
/// This is distinct from [`InvalidParameter`]: the value is not out of range,
/// it is simply not a usable number.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("value cannot be compared against its bounds: {parameter}")]
pub struct TypeMismatch {
    /// Name of the offending parameter.
    pub parameter: String,
}

/// Returned from functions in [`validate`][crate::validate].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// [`InvalidParameter`]
    #[error("invalid parameter: {0}")]
    Invalid(#[from] InvalidParameter),

    /// [`TypeMismatch`]
    #[error("type mismatch: {0}")]
    TypeMismatch(#[from] TypeMismatch),
}

impl ValidationError {
    /// Name of the parameter that failed validation.
    pub fn parameter(&self) -> &str {
        match self {
            Self::Invalid(err) => &err.parameter,
            Self::TypeMismatch(err) => &err.parameter,
        }
    }

    /// Return `true` if `self` is `Invalid`.
    pub fn is_invalid(&self) -> bool { matches!(self, Self::Invalid(_)) }

    /// Return `true` if `self` is `TypeMismatch`.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch(_))
    }
}

/// Returned from potential constructors in [`potential`][crate::potential].
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum PotentialError {
    /// Returned when the walls of a well are not strictly ordered.
    #[error("Left boundary 'a' must be less than right boundary 'b'")]
    BoundaryOrder { a: f64, b: f64 },
}

/// Returned from wavefunction constructors and evaluation functions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WaveError {
    /// [`ValidationError`]
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Returned when a quantity depending on the free-particle dispersion
    /// relation is requested for a particle with zero mass.
    #[error("{0} is undefined for a massless particle")]
    Massless(&'static str),

    /// Returned by operations that exist only as an interface.
    #[error("{0} is not implemented")]
    Unimplemented(&'static str),
}

impl From<InvalidParameter> for WaveError {
    fn from(err: InvalidParameter) -> Self { Self::Validation(err.into()) }
}

impl WaveError {
    /// Return the underlying [`InvalidParameter`], if any.
    pub fn as_invalid_parameter(&self) -> Option<&InvalidParameter> {
        match self {
            Self::Validation(ValidationError::Invalid(err)) => Some(err),
            _ => None,
        }
    }
}

/// Returned from [`WaveResult`][crate::result::WaveResult] methods.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ResultError {
    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),

    /// [`WaveError`]
    #[error("wavefunction error: {0}")]
    Wave(#[from] WaveError),

    /// Returned when an integral or transform is requested on fewer than two
    /// points.
    #[error("at least 2 points are required; got {0}")]
    TooShort(usize),

    /// Returned when a uniformly spaced coordinate grid is required.
    #[error("coordinate grid is not uniformly spaced")]
    NonUniformGrid,

    /// Returned when renormalizing a state with zero norm.
    #[error("cannot normalize a state with zero norm")]
    ZeroNorm,
}
