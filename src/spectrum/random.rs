//! Uniform-random wave table sampling.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::{SpectrumError, WaveSpectrum};

/// Configuration for the uniform-random spectrum model.
///
/// Every bin draws independently: a direction angle in [0, 2pi), an
/// angular frequency, an amplitude, and an initial phase, each uniform
/// over its range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RandomSpectrumConfig {
    /// Number of frequency bins to generate.
    pub count: usize,
    /// Angular frequency range (rad/s), inclusive.
    pub omega: (f32, f32),
    /// Amplitude range, inclusive.
    pub amplitude: (f32, f32),
    /// Initial phases are drawn from [0, phase_max).
    pub phase_max: f32,
    /// Random seed for reproducible generation.
    pub seed: u64,
}

impl Default for RandomSpectrumConfig {
    fn default() -> Self {
        Self {
            count: 64,
            omega: (0.5, 1.5),
            amplitude: (0.01, 0.06),
            phase_max: 2.5,
            seed: 42,
        }
    }
}

impl RandomSpectrumConfig {
    /// Creates a configuration with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Checks that bin count and sampling ranges are usable.
    pub fn validate(&self) -> Result<(), SpectrumError> {
        if self.count == 0 {
            return Err(SpectrumError::ZeroCount);
        }
        if self.omega.0 > self.omega.1 {
            return Err(SpectrumError::InvertedRange(self.omega.0, self.omega.1));
        }
        if self.amplitude.0 > self.amplitude.1 {
            return Err(SpectrumError::InvertedRange(
                self.amplitude.0,
                self.amplitude.1,
            ));
        }
        if self.phase_max <= 0.0 {
            return Err(SpectrumError::ZeroPhaseRange);
        }
        Ok(())
    }
}

/// Generates a wave table by independent uniform draws.
///
/// All draws come from a single seeded RNG in a fixed per-bin order
/// (angle, omega, amplitude, phase), so the table is reproducible
/// across runs and platforms.
pub fn generate_random(config: &RandomSpectrumConfig) -> Result<WaveSpectrum, SpectrumError> {
    config.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut spectrum = WaveSpectrum::with_capacity(config.count);

    for _ in 0..config.count {
        let theta = rng.random_range(0.0..TAU);
        let direction = Vec2::new(theta.cos(), theta.sin());
        let omega = rng.random_range(config.omega.0..=config.omega.1);
        let amplitude = rng.random_range(config.amplitude.0..=config.amplitude.1);
        let phase = rng.random_range(0.0..config.phase_max);

        spectrum.push(direction, omega, amplitude, phase);
    }

    Ok(spectrum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_spectrum_determinism() {
        let config = RandomSpectrumConfig::with_seed(7);

        let a = generate_random(&config).unwrap();
        let b = generate_random(&config).unwrap();

        assert_eq!(a, b, "Same seed should produce the same table");
    }

    #[test]
    fn test_values_within_configured_ranges() {
        let config = RandomSpectrumConfig::default();
        let spectrum = generate_random(&config).unwrap();

        assert_eq!(spectrum.len(), 64);
        for i in 0..spectrum.len() {
            let omega = spectrum.omegas[i];
            let amp = spectrum.amplitudes[i];
            let phase = spectrum.phases[i];

            assert!(omega >= 0.5 && omega <= 1.5, "omega out of range: {}", omega);
            assert!(amp >= 0.01 && amp <= 0.06, "amplitude out of range: {}", amp);
            assert!(phase >= 0.0 && phase < 2.5, "phase out of range: {}", phase);
        }
    }

    #[test]
    fn test_directions_are_unit_length() {
        let spectrum = generate_random(&RandomSpectrumConfig::default()).unwrap();

        for dir in &spectrum.directions {
            assert!(
                (dir.length() - 1.0).abs() < 1e-5,
                "Direction {:?} is not unit length",
                dir
            );
        }
    }

    #[test]
    fn test_zero_count_rejected() {
        let config = RandomSpectrumConfig {
            count: 0,
            ..Default::default()
        };
        assert_eq!(generate_random(&config), Err(SpectrumError::ZeroCount));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = RandomSpectrumConfig {
            omega: (1.5, 0.5),
            ..Default::default()
        };
        assert_eq!(
            generate_random(&config),
            Err(SpectrumError::InvertedRange(1.5, 0.5))
        );
    }
}
