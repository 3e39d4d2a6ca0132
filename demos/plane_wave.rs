use std::f64::consts::PI;
use ndarray as nd;
use num_complex::Complex64 as C64;
use qwave::{
    constants,
    potential::{ FreePotential, InfiniteWell, Potential, StepPotential },
    result::WaveResult,
    wave::{ PlaneWave, PlaneWaveConfig, WaveFunction },
};

// sample an electron plane wave over a few wavelengths and compare it with the
// potentials it could be placed in

fn main() -> anyhow::Result<()> {
    const WAVELENGTH: f64 = 1e-9; // m

    let mut config = PlaneWaveConfig::new(C64::from(1.0), WAVELENGTH);
    config.phase = Some(PI / 4.0);
    let wave: PlaneWave = config.build()?;

    println!("k   = {:.6e} m⁻¹", wave.wave_number());
    println!("ω   = {:.6e} s⁻¹", wave.angular_frequency()?);
    println!("p   = {:.6e} kg m s⁻¹", wave.momentum());
    println!("E   = {:.6e} J", wave.energy()?);
    println!("v_p = {:.6e} m s⁻¹", wave.phase_velocity()?);
    println!("T   = {:.6e} s", wave.period()?);
    println!("E/ħω = {:.6}", wave.energy()? / constants::hbar / wave.angular_frequency()?);

    // three wavelengths, a quarter-period later
    let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 3.0 * WAVELENGTH, 301);
    let later = wave.at_time(wave.period()? / 4.0);
    let res = WaveResult::sample(&later, x.clone())?;
    println!("sampled {} points at t = {:.3e} s", res.len(), later.time());
    println!("∫|ψ|² dx = {:.6e} m", res.norm()?);
    let (k, phi) = res.momentum_spectrum()?;
    let (imax, _)
        = phi.iter().enumerate()
        .max_by(|(_, l), (_, r)| l.norm().total_cmp(&r.norm()))
        .ok_or_else(|| anyhow::anyhow!("empty spectrum"))?;
    println!("spectral peak at k = {:.6e} m⁻¹", k[imax]);

    let potentials: Vec<Box<dyn Potential>> = vec![
        Box::new(FreePotential::new()),
        Box::new(StepPotential::new(1.5 * WAVELENGTH, wave.energy()? / 2.0)),
        Box::new(InfiniteWell::new(WAVELENGTH, 2.0 * WAVELENGTH)?),
    ];
    let e = wave.energy()?;
    for pot in potentials.iter() {
        let v = pot.evaluate_arr(&x);
        let classically_allowed = v.iter().filter(|vk| **vk <= e).count();
        println!("{}", pot);
        println!("    parameters: {:?}", pot.parameters());
        println!("    allowed points: {} / {}", classically_allowed, v.len());
    }

    Ok(())
}
