//! Offline procedural texture and wave-spectrum generation.
//!
//! This crate synthesizes two kinds of numeric fields consumed by a
//! real-time renderer: tileable multi-layer Worley (cellular) noise
//! textures, and ocean wave-spectrum tables emitted as GLSL constant
//! arrays. Generation is deterministic given a seed and runs as a
//! finite batch computation with no shared mutable state.

pub mod export;
pub mod field;
pub mod noise;
pub mod prep;
pub mod spectrum;

pub use field::{Canvas, NoiseField};
pub use noise::{cell_point, evaluate, generate_tiled, ConfigError, TiledConfig, WorleyConfig};
pub use spectrum::{
    generate_phillips, generate_random, PhillipsConfig, RandomSpectrumConfig, SpectrumError,
    WaveSpectrum,
};
