//! Piecewise potential-energy landscapes in one dimension.
//!
//! Every potential is a pure function of position: evaluation never fails for
//! a constructed instance, and the same input always gives the same output.
//! Evaluation over arrays allocates a fresh output array of the same shape.
//!
//! ```
//! use ndarray as nd;
//! use qwave::potential::{ InfiniteWell, Potential };
//!
//! let well = InfiniteWell::new(-1.0, 1.0).unwrap();
//! let x = nd::array![-2.0, -1.0, 0.0, 1.0, 2.0];
//! assert_eq!(well.evaluate_arr(&x), nd::array![1e10, 0.0, 0.0, 0.0, 1e10]);
//! assert!(InfiniteWell::new(1.0, 1.0).is_err());
//! ```

use std::{ collections::BTreeMap, fmt };
use log::{ debug, warn };
use ndarray as nd;
use crate::{
    ArrD,
    error::PotentialError,
    utils::fmt_float,
    DEF_V_WALL,
};

pub type PResult<T> = Result<T, PotentialError>;

/// Named construction parameters of a potential.
pub type Params = BTreeMap<&'static str, f64>;

/// A scalar energy field over one spatial dimension.
///
/// [`Display`][fmt::Display] gives a fixed, human-readable summary of the
/// potential.
pub trait Potential: fmt::Display {
    /// Evaluate the potential at a single position.
    fn evaluate(&self, x: f64) -> f64;

    /// Return the exact named construction parameters (no derived quantities).
    fn parameters(&self) -> Params;

    /// Evaluate the potential elementwise over an array of positions.
    fn evaluate_arr<S, D>(&self, x: &ArrD<S, D>) -> nd::Array<f64, D>
    where
        S: nd::Data<Elem = f64>,
        D: nd::Dimension,
        Self: Sized,
    {
        x.mapv(|xk| self.evaluate(xk))
    }
}

impl<P> Potential for &P
where P: Potential + ?Sized
{
    fn evaluate(&self, x: f64) -> f64 { (**self).evaluate(x) }

    fn parameters(&self) -> Params { (**self).parameters() }
}

impl<P> Potential for Box<P>
where P: Potential + ?Sized
{
    fn evaluate(&self, x: f64) -> f64 { (**self).evaluate(x) }

    fn parameters(&self) -> Params { (**self).parameters() }
}

/// Free space: *V*(*x*) = 0 everywhere.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FreePotential;

impl FreePotential {
    pub fn new() -> Self { Self }
}

impl Potential for FreePotential {
    fn evaluate(&self, _x: f64) -> f64 { 0.0 }

    fn parameters(&self) -> Params { Params::new() }
}

impl fmt::Display for FreePotential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FreePotential: V(x) = 0")
    }
}

/// A single step of height `V0` at `x0`:
/// ```text
/// V(x) = 0   for x < x0
/// V(x) = V0  for x >= x0
/// ```
/// The step point itself belongs to the `V0` side.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepPotential {
    x0: f64,
    v0: f64,
}

impl StepPotential {
    /// Create a step at `x0` with height `v0`.
    pub fn new(x0: f64, v0: f64) -> Self {
        debug!("potential::StepPotential: step of height {v0} at x0 = {x0}");
        Self { x0, v0 }
    }

    /// Position of the step.
    pub fn x0(&self) -> f64 { self.x0 }

    /// Height of the step.
    pub fn v0(&self) -> f64 { self.v0 }
}

impl Potential for StepPotential {
    fn evaluate(&self, x: f64) -> f64 {
        if x >= self.x0 { self.v0 } else { 0.0 }
    }

    fn parameters(&self) -> Params {
        Params::from([("x0", self.x0), ("V0", self.v0)])
    }
}

impl fmt::Display for StepPotential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x0 = fmt_float(self.x0);
        write!(
            f,
            "StepPotential: V(x) = 0 for x < {}, V(x) = {} for x >= {}",
            x0, fmt_float(self.v0), x0,
        )
    }
}

/// An infinite square well on `[a, b]`, approximated by a large finite wall:
/// ```text
/// V(x) = 0       for a <= x <= b
/// V(x) = V_wall  otherwise
/// ```
/// Both walls belong to the zero-energy interior.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InfiniteWell {
    a: f64,
    b: f64,
    v_wall: f64,
}

impl InfiniteWell {
    /// Create a well on `[a, b]` with wall height [`DEF_V_WALL`].
    ///
    /// Fails with [`PotentialError::BoundaryOrder`] unless `a < b`.
    pub fn new(a: f64, b: f64) -> PResult<Self> {
        Self::with_wall(a, b, DEF_V_WALL)
    }

    /// Create a well on `[a, b]` with wall height `v_wall`.
    ///
    /// Fails with [`PotentialError::BoundaryOrder`] unless `a < b`.
    pub fn with_wall(a: f64, b: f64, v_wall: f64) -> PResult<Self> {
        // NaN bounds are unordered and rejected here too
        if !(a < b) { return Err(PotentialError::BoundaryOrder { a, b }); }
        if v_wall <= 0.0 {
            warn!(
                "potential::InfiniteWell: non-positive wall height {v_wall}; \
                the well will not confine"
            );
        }
        debug!("potential::InfiniteWell: well on [{a}, {b}], V_wall = {v_wall}");
        Ok(Self { a, b, v_wall })
    }

    /// Left wall position.
    pub fn a(&self) -> f64 { self.a }

    /// Right wall position.
    pub fn b(&self) -> f64 { self.b }

    /// Height of the potential outside the well.
    pub fn v_wall(&self) -> f64 { self.v_wall }

    /// Width of the well, `b - a`.
    pub fn width(&self) -> f64 { self.b - self.a }

    /// Return `true` if `x` lies within the (closed) interior of the well.
    pub fn contains(&self, x: f64) -> bool { self.a <= x && x <= self.b }
}

impl Potential for InfiniteWell {
    fn evaluate(&self, x: f64) -> f64 {
        if self.contains(x) { 0.0 } else { self.v_wall }
    }

    fn parameters(&self) -> Params {
        Params::from([("a", self.a), ("b", self.b), ("V_wall", self.v_wall)])
    }
}

impl fmt::Display for InfiniteWell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InfiniteWell: V(x) = 0 for {} < x < {}, V(x) = {} otherwise",
            fmt_float(self.a), fmt_float(self.b), fmt_float(self.v_wall),
        )
    }
}
