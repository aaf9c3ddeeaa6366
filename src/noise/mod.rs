//! Tiled multi-layer Worley (cellular) noise generation.
//!
//! Built from three pieces, evaluated bottom-up: a deterministic cell
//! point sampler, a per-tile Worley field evaluator, and a tiled
//! stitcher that assembles independently generated tiles into one
//! 8-bit canvas.

mod sampler;
mod tiled;
mod worley;

use thiserror::Error;

pub use sampler::cell_point;
pub use tiled::{generate_tiled, TiledConfig};
pub use worley::{evaluate, WorleyConfig};

/// Errors raised by configuration validation.
///
/// All variants are detected before any pixel is computed; generation
/// either fully succeeds or fails without producing output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("canvas dimensions must be non-zero, got {0}x{1}")]
    ZeroDimension(u32, u32),
    #[error("scale (cell spacing) must be positive")]
    ZeroScale,
    #[error("layer count must be positive")]
    ZeroLayers,
    #[error("tile size must be positive")]
    ZeroTileSize,
    #[error("canvas {width}x{height} is not divisible by tile size {tile_size}")]
    TileMismatch {
        width: u32,
        height: u32,
        tile_size: u32,
    },
    #[error("jitter sigma must be finite and non-negative")]
    InvalidJitterSigma,
}
