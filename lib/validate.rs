//! Precondition checks for named numerical parameters.
//!
//! Each function returns `Ok(())` if the check passes. A value that is out of
//! bounds produces [`ValidationError::Invalid`]; a value that cannot be ordered
//! at all (e.g. NaN) produces [`ValidationError::TypeMismatch`] instead.
//!
//! ```
//! use qwave::validate::{ validate_positive, validate_range };
//!
//! assert!(validate_positive(0.1, "wavelength").is_ok());
//! let err = validate_range(6, 0, 5, "level").unwrap_err();
//! assert_eq!(err.to_string(), "invalid parameter: Value must be between 0 and 5: level");
//! assert!(validate_positive(f64::NAN, "wavelength").unwrap_err().is_type_mismatch());
//! ```

use std::cmp::Ordering;
use num_traits::Zero;
use crate::{
    error::{ InvalidParameter, TypeMismatch, ValidationError },
    utils::fmt_float,
};

pub type VResult<T> = Result<T, ValidationError>;

fn compare<T>(value: &T, bound: &T, name: &str) -> VResult<Ordering>
where T: PartialOrd
{
    value.partial_cmp(bound)
        .ok_or_else(|| TypeMismatch { parameter: name.to_string() }.into())
}

/// Check that `value > 0`.
pub fn validate_positive<T>(value: T, name: &str) -> VResult<()>
where T: Zero + PartialOrd
{
    match compare(&value, &T::zero(), name)? {
        Ordering::Greater => Ok(()),
        _ => Err(InvalidParameter::new(name, "Value must be positive").into()),
    }
}

/// Check that `value >= 0`.
pub fn validate_non_negative<T>(value: T, name: &str) -> VResult<()>
where T: Zero + PartialOrd
{
    match compare(&value, &T::zero(), name)? {
        Ordering::Less => {
            Err(InvalidParameter::new(name, "Value must be non-negative").into())
        },
        _ => Ok(()),
    }
}

/// Rendering of a range bound in error messages.
///
/// Floats always carry a decimal point (`10.0`, not `10`), integers print as
/// usual.
pub trait Bound {
    fn render(&self) -> String;
}

impl Bound for f64 {
    fn render(&self) -> String { fmt_float(*self) }
}

impl Bound for f32 {
    fn render(&self) -> String { fmt_float(f64::from(*self)) }
}

macro_rules! impl_int_bound {
    ( $( $t:ty ),* ) => {
        $(
            impl Bound for $t {
                fn render(&self) -> String { self.to_string() }
            }
        )*
    }
}
impl_int_bound!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Check that `min <= value <= max`.
pub fn validate_range<T>(value: T, min: T, max: T, name: &str) -> VResult<()>
where T: PartialOrd + Bound
{
    let lo = compare(&value, &min, name)?;
    let hi = compare(&value, &max, name)?;
    if lo != Ordering::Less && hi != Ordering::Greater {
        Ok(())
    } else {
        let message = format!(
            "Value must be between {} and {}", min.render(), max.render());
        Err(InvalidParameter::new(name, message).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid(err: ValidationError) -> InvalidParameter {
        match err {
            ValidationError::Invalid(inv) => inv,
            other => panic!("expected an invalid parameter, got {other:?}"),
        }
    }

    #[test]
    fn positive() {
        assert!(validate_positive(1, "value").is_ok());
        assert!(validate_positive(0.1, "value").is_ok());
        assert!(validate_positive(100.0, "value").is_ok());
        for v in [0.0, -1.0, -0.0001] {
            let err = invalid(validate_positive(v, "value").unwrap_err());
            assert_eq!(err.parameter, "value");
            assert_eq!(err.message, "Value must be positive");
            assert!(err.to_string().contains("Value must be positive"));
        }
        let err = invalid(validate_positive(-5, "length").unwrap_err());
        assert_eq!(err.parameter, "length");
    }

    #[test]
    fn non_negative() {
        for v in [0.0, 1.0, 1.5] {
            assert!(validate_non_negative(v, "value").is_ok());
        }
        assert!(validate_non_negative(-0.0, "value").is_ok());
        for v in [-0.1, -1.0] {
            let err = invalid(validate_non_negative(v, "x").unwrap_err());
            assert_eq!(err.parameter, "x");
            assert_eq!(err.message, "Value must be non-negative");
        }
    }

    #[test]
    fn range() {
        assert!(validate_range(5, 0, 10, "value").is_ok());
        assert!(validate_range(0, 0, 0, "value").is_ok());
        assert!(validate_range(3.5, 1.5, 4.0, "value").is_ok());
        for (v, lo, hi) in [(-1, 0, 5), (6, 0, 5)] {
            let err = invalid(validate_range(v, lo, hi, "range_param").unwrap_err());
            assert_eq!(err.parameter, "range_param");
            assert_eq!(err.message, format!("Value must be between {lo} and {hi}"));
        }
        let err = invalid(validate_range(10.1, 0.0, 10.0, "range_param").unwrap_err());
        assert_eq!(err.message, "Value must be between 0.0 and 10.0");
        assert_eq!(
            err.to_string(),
            "invalid parameter: Value must be between 0.0 and 10.0: range_param",
        );
        let err = invalid(validate_range(2e-5, 1e-4, 1e16, "tol").unwrap_err());
        assert_eq!(err.message, "Value must be between 0.0001 and 1e+16");
    }

    #[test]
    fn nan_is_a_type_mismatch() {
        let err = validate_positive(f64::NAN, "wavelength").unwrap_err();
        assert_eq!(
            err,
            ValidationError::TypeMismatch(
                TypeMismatch { parameter: "wavelength".into() }),
        );
        assert!(validate_non_negative(f64::NAN, "mass").unwrap_err().is_type_mismatch());
        assert!(validate_range(f64::NAN, 0.0, 1.0, "r").unwrap_err().is_type_mismatch());
        assert!(validate_range(0.5, f64::NAN, 1.0, "r").unwrap_err().is_type_mismatch());
    }
}
