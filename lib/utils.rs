//! Miscellaneous tools.

use ndarray as nd;
use num_complex::Complex64 as C64;
use rustfft as fft;
use crate::Arr1;

/// Integrate using the trapezoidal rule over a (possibly non-uniform) grid.
///
/// Extra elements in the longer of the two arrays are ignored; fewer than two
/// points integrate to zero.
pub fn trapz<S, T>(x: &Arr1<S>, y: &Arr1<T>) -> f64
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    x.iter().zip(x.iter().skip(1))
        .zip(y.iter().zip(y.iter().skip(1)))
        .map(|((xk, xkp1), (yk, ykp1))| (xkp1 - xk) * (yk + ykp1) / 2.0)
        .sum()
}

/// Return the grid spacing of `x` if all adjacent differences agree with the
/// first to within a relative tolerance `rtol`.
///
/// Returns `None` for arrays with fewer than two elements, or if the spacing
/// is zero or not finite.
pub fn uniform_spacing<S>(x: &Arr1<S>, rtol: f64) -> Option<f64>
where S: nd::Data<Elem = f64>
{
    if x.len() < 2 { return None; }
    let dx = x[1] - x[0];
    if dx == 0.0 || !dx.is_finite() { return None; }
    x.iter().zip(x.iter().skip(1))
        .all(|(xk, xkp1)| ((xkp1 - xk) - dx).abs() <= rtol * dx.abs())
        .then_some(dx)
}

/// Generate an array of frequency-space coordinates to accompany a FFT of `n`
/// points for sampling interval `dx`, in the usual unshifted order (zero and
/// positive frequencies first).
pub fn fft_freq(n: usize, dx: f64) -> nd::Array1<f64> {
    let scale = (n as f64 * dx).recip();
    (0..n)
        .map(|k| {
            let k = if k < (n + 1) / 2 { k as f64 } else { k as f64 - n as f64 };
            k * scale
        })
        .collect()
}

/// Perform the one-dimensional, complex-valued FFT.
pub fn fft<S>(x: &Arr1<S>) -> nd::Array1<C64>
where S: nd::Data<Elem = C64>
{
    let mut buf: Vec<C64> = x.iter().copied().collect();
    let mut plan = fft::FftPlanner::new();
    let fft_plan = plan.plan_fft_forward(buf.len());
    fft_plan.process(&mut buf);
    nd::Array1::from_vec(buf)
}

/// Return a copy of `x` with indices shifted to map super-Nyquist frequency
/// components to negative frequencies, placing the zero-frequency component at
/// index `n / 2`.
pub fn fft_shift<S, A>(x: &Arr1<S>) -> nd::Array1<A>
where
    S: nd::Data<Elem = A>,
    A: Clone,
{
    let n = x.len();
    let s = n / 2;
    (0..n).map(|i| x[(i + n - s) % n].clone()).collect()
}

/// Render a float the way Python's `repr` does: shortest round-trip digits,
/// always with a decimal point or exponent, and scientific notation with a
/// signed, two-digit exponent outside `1e-4 <= |x| < 1e16`.
pub fn fmt_float(x: f64) -> String {
    if x.is_nan() { return "nan".to_string(); }
    if x.is_infinite() {
        return (if x > 0.0 { "inf" } else { "-inf" }).to_string();
    }
    let sci = format!("{:e}", x);
    let (mant, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    if (-4..16).contains(&exp) {
        let s = format!("{}", x);
        if s.contains('.') { s } else { s + ".0" }
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mant, sign, exp.abs())
    }
}
