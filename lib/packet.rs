//! Wave packets as superpositions of plane waves.
//!
//! Only the interface exists so far: a packet stores its momentum-space
//! amplitude function, center, and time, but evaluating it in position space
//! (which requires a Fourier synthesis over the momentum distribution) is not
//! implemented. Every such operation returns [`WaveError::Unimplemented`]
//! rather than a meaningless value.

use std::fmt;
use log::{ debug, warn };
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    ArrD,
    error::WaveError,
    result::{ Meta, Metadata },
    wave::{ WResult, WaveFunction },
};

// log and return the refusal for an unavailable operation
fn refuse<T>(op: &'static str) -> WResult<T> {
    warn!("packet::WavePacket: {op} is not implemented; refusing to guess");
    Err(WaveError::Unimplemented(op))
}

/// A wave packet defined by its amplitude in momentum space.
#[derive(Clone)]
pub struct WavePacket<F>
where F: Fn(f64) -> C64
{
    momentum_distribution: F,
    position_center: f64,
    time: f64,
}

impl<F> fmt::Debug for WavePacket<F>
where F: Fn(f64) -> C64
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WavePacket")
            .field("position_center", &self.position_center)
            .field("time", &self.time)
            .finish_non_exhaustive()
    }
}

impl<F> WavePacket<F>
where F: Fn(f64) -> C64
{
    /// Create a new packet from an amplitude function over wave number `k`,
    /// centered on `position_center` at time `time`.
    pub fn new(momentum_distribution: F, position_center: f64, time: f64)
        -> Self
    {
        debug!(
            "packet::WavePacket: centered at {position_center}, t = {time}"
        );
        Self { momentum_distribution, position_center, time }
    }

    /// Evaluate the momentum-space amplitude at wave number `k`.
    pub fn momentum_distribution(&self, k: f64) -> C64 {
        (self.momentum_distribution)(k)
    }

    /// Center of the packet.
    pub fn position_center(&self) -> f64 { self.position_center }

    /// Return a copy of `self` normalized to unit probability.
    ///
    /// *Not implemented; always returns an error.*
    pub fn normalized(&self) -> WResult<Self> { refuse("normalize") }
}

impl<F> WaveFunction for WavePacket<F>
where F: Fn(f64) -> C64
{
    fn position(&self) -> f64 { self.position_center }

    fn time(&self) -> f64 { self.time }

    /// *Not implemented; always returns an error.*
    fn evaluate(&self, _x: f64) -> WResult<C64> { refuse("evaluate") }

    fn metadata(&self) -> Metadata {
        Metadata::from([
            ("kind".to_string(), Meta::from("WavePacket")),
            ("position_center".to_string(), Meta::from(self.position_center)),
            ("time".to_string(), Meta::from(self.time)),
        ])
    }

    /// *Not implemented; always returns an error, even for empty input.*
    fn evaluate_arr<S, D>(&self, _x: &ArrD<S, D>) -> WResult<nd::Array<C64, D>>
    where
        S: nd::Data<Elem = f64>,
        D: nd::Dimension,
    {
        refuse("evaluate")
    }

    /// *Not implemented; always returns an error.*
    fn probability_density(&self, _x: f64) -> WResult<f64> {
        refuse("probability_density")
    }

    /// *Not implemented; always returns an error, even for empty input.*
    fn probability_density_arr<S, D>(&self, _x: &ArrD<S, D>)
        -> WResult<nd::Array<f64, D>>
    where
        S: nd::Data<Elem = f64>,
        D: nd::Dimension,
    {
        refuse("probability_density")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gaussian() -> WavePacket<impl Fn(f64) -> C64 + Clone> {
        WavePacket::new(|k: f64| C64::from((-(k - 2.0).powi(2)).exp()), 1.5, 0.25)
    }

    #[test]
    fn stores_construction_parameters() {
        let packet = gaussian();
        assert_eq!(packet.position(), 1.5);
        assert_eq!(packet.position_center(), 1.5);
        assert_eq!(packet.time(), 0.25);
        assert_eq!(packet.momentum_distribution(2.0), C64::from(1.0));
        assert_eq!(packet.metadata()["kind"], Meta::from("WavePacket"));
        assert!(format!("{:?}", packet).starts_with("WavePacket"));
    }

    #[test]
    fn evaluation_fails_loudly() {
        let packet = gaussian();
        assert_eq!(packet.evaluate(0.0), Err(WaveError::Unimplemented("evaluate")));
        assert_eq!(
            packet.probability_density(0.0),
            Err(WaveError::Unimplemented("probability_density")),
        );
        assert_eq!(
            packet.normalized().unwrap_err(),
            WaveError::Unimplemented("normalize"),
        );
        let empty: nd::Array1<f64> = nd::Array1::zeros(0);
        assert!(packet.evaluate_arr(&empty).is_err());
        assert!(packet.probability_density_arr(&nd::array![0.0, 1.0]).is_err());
        assert_eq!(
            WaveError::Unimplemented("evaluate").to_string(),
            "evaluate is not implemented",
        );
    }
}
