//! Phillips-spectrum wave table sampling.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::{SpectrumError, WaveSpectrum};

// Bins with a near-zero wave vector or negligible energy carry nothing
// a shader would render; they are dropped from the table.
const MIN_WAVE_NUMBER: f32 = 1e-6;
const MIN_SPECTRUM_VALUE: f32 = 1e-8;

/// Configuration for the Phillips-spectrum model.
///
/// Samples the Phillips ocean spectrum over an N x N wave-vector grid
/// and keeps the bins that carry energy downwind. Deep-water dispersion
/// gives each kept bin its angular frequency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhillipsConfig {
    /// Wave-vector grid resolution (N x N bins before filtering).
    pub resolution: u32,
    /// Physical size of the sampled patch.
    pub domain_size: f32,
    /// Wind speed.
    pub wind_speed: f32,
    /// Wind direction; normalized before use.
    pub wind_direction: Vec2,
    /// Global energy scaling factor.
    pub amplitude: f32,
    /// Gravitational acceleration.
    pub gravity: f32,
    /// Damping coefficient suppressing wavelengths far below the
    /// characteristic wind wavelength.
    pub damping: f32,
    /// Random seed for the initial phase offsets.
    pub seed: u64,
}

impl Default for PhillipsConfig {
    fn default() -> Self {
        Self {
            resolution: 64,
            domain_size: 64.0,
            wind_speed: 32.0,
            wind_direction: Vec2::X,
            amplitude: 0.0002,
            gravity: 9.81,
            damping: 0.001,
            seed: 42,
        }
    }
}

impl PhillipsConfig {
    /// Creates a configuration with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Checks grid and physical parameters.
    pub fn validate(&self) -> Result<(), SpectrumError> {
        if self.resolution == 0 {
            return Err(SpectrumError::ZeroResolution);
        }
        if self.domain_size <= 0.0 {
            return Err(SpectrumError::NonPositiveParameter("domain size"));
        }
        if self.wind_speed <= 0.0 {
            return Err(SpectrumError::NonPositiveParameter("wind speed"));
        }
        if self.gravity <= 0.0 {
            return Err(SpectrumError::NonPositiveParameter("gravity"));
        }
        if self.wind_direction.length_squared() < f32::EPSILON {
            return Err(SpectrumError::DegenerateWindDirection);
        }
        Ok(())
    }
}

/// Generates a wave table from the Phillips spectrum.
///
/// For each grid bin (m, n) in row-major order the wave vector is
/// `k = (pi(2n - N)/L, pi(2m - N)/L)`. Bins are skipped when `|k|` is
/// near zero, when the unit wave vector opposes the wind, or when the
/// Phillips value falls below the energy cutoff. Kept bins store the
/// unit direction, the deep-water frequency `sqrt(g |k|)`, the
/// amplitude `sqrt(P(k))`, and a seeded uniform phase in [0, 2pi).
///
/// Phases are drawn in bin order for kept bins only, so the table is
/// reproducible given the seed.
pub fn generate_phillips(config: &PhillipsConfig) -> Result<WaveSpectrum, SpectrumError> {
    config.validate()?;

    let wind = config.wind_direction.normalize();
    // Characteristic wavelength of the largest wind-driven waves.
    let l_wind = config.wind_speed * config.wind_speed / config.gravity;
    let damping_sq = (l_wind * config.damping).powi(2);

    let n = config.resolution;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut spectrum = WaveSpectrum::default();

    for m in 0..n {
        for n_prime in 0..n {
            let k = Vec2::new(
                PI * (2.0 * n_prime as f32 - n as f32) / config.domain_size,
                PI * (2.0 * m as f32 - n as f32) / config.domain_size,
            );
            let k_len = k.length();
            if k_len < MIN_WAVE_NUMBER {
                continue;
            }

            let k_unit = k / k_len;
            let downwind = k_unit.dot(wind);
            if downwind < 0.0 {
                continue;
            }

            let k_sq = k_len * k_len;
            let phillips = config.amplitude
                * ((-1.0 / (k_sq * l_wind * l_wind)).exp() / (k_sq * k_sq))
                * downwind.powi(6)
                * (-k_sq * damping_sq).exp();
            if phillips < MIN_SPECTRUM_VALUE {
                continue;
            }

            spectrum.push(
                k_unit,
                (config.gravity * k_len).sqrt(),
                phillips.sqrt(),
                rng.random_range(0.0..TAU),
            );
        }
    }

    Ok(spectrum)
}
