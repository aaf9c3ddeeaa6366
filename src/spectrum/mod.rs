//! Ocean wave-spectrum table generation.
//!
//! Produces the flat constant table a water shader animates from: one
//! direction, angular frequency, amplitude, and initial phase per
//! frequency bin. Two sampling models are provided: a uniform-random
//! model and a Phillips-spectrum model driven by wind parameters.

mod phillips;
mod random;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use phillips::{generate_phillips, PhillipsConfig};
pub use random::{generate_random, RandomSpectrumConfig};

/// Errors raised by spectrum configuration validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectrumError {
    #[error("frequency bin count must be positive")]
    ZeroCount,
    #[error("range minimum {0} exceeds maximum {1}")]
    InvertedRange(f32, f32),
    #[error("phase maximum must be positive")]
    ZeroPhaseRange,
    #[error("grid resolution must be positive")]
    ZeroResolution,
    #[error("{0} must be positive")]
    NonPositiveParameter(&'static str),
    #[error("wind direction must have non-zero length")]
    DegenerateWindDirection,
}

/// A generated wave-spectrum table.
///
/// The four vectors are parallel: entry `i` of each describes the same
/// frequency bin. `push` is the only way entries are added, so the
/// lengths never diverge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveSpectrum {
    /// Unit wave direction per bin.
    pub directions: Vec<Vec2>,
    /// Angular frequency per bin (rad/s).
    pub omegas: Vec<f32>,
    /// Wave amplitude per bin.
    pub amplitudes: Vec<f32>,
    /// Initial phase offset per bin (rad).
    pub phases: Vec<f32>,
}

impl WaveSpectrum {
    /// Creates an empty table with room for `capacity` bins.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            directions: Vec::with_capacity(capacity),
            omegas: Vec::with_capacity(capacity),
            amplitudes: Vec::with_capacity(capacity),
            phases: Vec::with_capacity(capacity),
        }
    }

    /// Appends one frequency bin.
    pub fn push(&mut self, direction: Vec2, omega: f32, amplitude: f32, phase: f32) {
        self.directions.push(direction);
        self.omegas.push(omega);
        self.amplitudes.push(amplitude);
        self.phases.push(phase);
    }

    /// Number of frequency bins in the table.
    pub fn len(&self) -> usize {
        self.directions.len()
    }

    /// Returns true if the table holds no bins.
    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_vectors_parallel() {
        let mut spectrum = WaveSpectrum::default();
        spectrum.push(Vec2::X, 1.0, 0.02, 0.5);
        spectrum.push(Vec2::Y, 1.2, 0.03, 1.5);

        assert_eq!(spectrum.len(), 2);
        assert_eq!(spectrum.omegas.len(), 2);
        assert_eq!(spectrum.amplitudes.len(), 2);
        assert_eq!(spectrum.phases.len(), 2);
    }
}
