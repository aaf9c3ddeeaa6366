//! Tiled canvas assembly with seam-masking jitter.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::worley::{evaluate, WorleyConfig};
use super::ConfigError;
use crate::field::{Canvas, NoiseField};

// Stream separator for the jitter RNG, so tile jitter never replays the
// feature point draws made with the same tile seed.
const JITTER_STREAM: u64 = 0x5851_F42D_4C95_7F2D;

/// Configuration for tiled canvas generation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TiledConfig {
    /// Edge length of each square tile in pixels. Must evenly divide
    /// both canvas dimensions.
    pub tile_size: u32,
    /// Standard deviation of the per-pixel Gaussian jitter added to each
    /// tile before quantization. Masks tile-boundary discontinuities;
    /// it is a cosmetic mitigation, not a seamless-tiling guarantee.
    pub jitter_sigma: f32,
    /// Per-tile Worley evaluation parameters.
    pub worley: WorleyConfig,
}

impl Default for TiledConfig {
    fn default() -> Self {
        Self {
            tile_size: 128,
            jitter_sigma: 0.1,
            worley: WorleyConfig::default(),
        }
    }
}

impl TiledConfig {
    /// Creates a configuration with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            worley: WorleyConfig::with_seed(seed),
            ..Default::default()
        }
    }

    /// Checks the configuration against the requested canvas dimensions.
    ///
    /// The tile partition must cover the canvas exactly; a remainder
    /// region is a configuration error, never silently truncated.
    pub fn validate(&self, width: u32, height: u32) -> Result<(), ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension(width, height));
        }
        if self.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        if width % self.tile_size != 0 || height % self.tile_size != 0 {
            return Err(ConfigError::TileMismatch {
                width,
                height,
                tile_size: self.tile_size,
            });
        }
        if !self.jitter_sigma.is_finite() || self.jitter_sigma < 0.0 {
            return Err(ConfigError::InvalidJitterSigma);
        }
        self.worley.validate()
    }
}

/// Generates a full canvas by stitching independently evaluated tiles.
///
/// Each tile gets the seed `seed + tile_y * tiles_x + tile_x`, is
/// evaluated and normalized on its own, jittered, clamped to [0, 1],
/// and copied into its disjoint canvas region; the assembled canvas is
/// then quantized with `round(v * 255)`.
///
/// Tiles are computed on rayon worker threads: once seeded they share
/// no mutable state, so no locking is needed.
///
/// Two reproducibility caveats are deliberate and documented rather
/// than fixed: tile seeds depend on `tiles_x`, so a tile at the same
/// grid position reseeds differently for a different canvas width; and
/// each tile normalizes against its own value range, so absolute
/// brightness is not comparable across tiles.
///
/// # Arguments
/// * `width`, `height` - Canvas dimensions; must be multiples of the
///   tile size
/// * `config` - Tile size, jitter sigma, and Worley parameters
///
/// # Returns
/// The quantized canvas, or a `ConfigError` before any pixel is computed
pub fn generate_tiled(width: u32, height: u32, config: &TiledConfig) -> Result<Canvas, ConfigError> {
    config.validate(width, height)?;

    let jitter = Normal::new(0.0f32, config.jitter_sigma)
        .map_err(|_| ConfigError::InvalidJitterSigma)?;

    let tile_size = config.tile_size;
    let tiles_x = width / tile_size;
    let tiles_y = height / tile_size;

    let tiles: Vec<(u32, u32, NoiseField)> = (0..tiles_x * tiles_y)
        .into_par_iter()
        .map(|index| {
            let tile_x = index % tiles_x;
            let tile_y = index / tiles_x;
            let tile_seed = config
                .worley
                .seed
                .wrapping_add((tile_y as u64).wrapping_mul(tiles_x as u64))
                .wrapping_add(tile_x as u64);

            let tile_config = WorleyConfig {
                seed: tile_seed,
                ..config.worley
            };
            let mut field = evaluate(tile_size, tile_size, &tile_config)?;
            apply_jitter(&mut field, tile_seed, &jitter);

            Ok((tile_x, tile_y, field))
        })
        .collect::<Result<_, ConfigError>>()?;

    let mut canvas = Canvas::new(width, height);
    for (tile_x, tile_y, field) in &tiles {
        blit(&mut canvas, *tile_x, *tile_y, tile_size, field);
    }

    Ok(canvas)
}

/// Adds seeded Gaussian jitter to a tile and clamps back to [0, 1].
fn apply_jitter(field: &mut NoiseField, tile_seed: u64, jitter: &Normal<f32>) {
    let mut rng = ChaCha8Rng::seed_from_u64(tile_seed ^ JITTER_STREAM);
    for v in &mut field.values {
        *v = (*v + jitter.sample(&mut rng)).clamp(0.0, 1.0);
    }
}

/// Quantizes a tile into its canvas region.
///
/// Tile regions are disjoint by construction; every canvas pixel is
/// written by exactly one blit.
fn blit(canvas: &mut Canvas, tile_x: u32, tile_y: u32, tile_size: u32, field: &NoiseField) {
    let origin_x = tile_x * tile_size;
    let origin_y = tile_y * tile_size;

    for row in 0..tile_size {
        for col in 0..tile_size {
            let value = field.get(col, row);
            let pixel = ((origin_y + row) * canvas.width + origin_x + col) as usize;
            canvas.pixels[pixel] = (value * 255.0).round() as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_rejection() {
        // 100 is not divisible by 30: reject before computing anything.
        let config = TiledConfig {
            tile_size: 30,
            ..Default::default()
        };
        assert_eq!(
            generate_tiled(100, 100, &config),
            Err(ConfigError::TileMismatch {
                width: 100,
                height: 100,
                tile_size: 30,
            })
        );
    }

    #[test]
    fn test_zero_tile_size_rejected() {
        let config = TiledConfig {
            tile_size: 0,
            ..Default::default()
        };
        assert_eq!(generate_tiled(64, 64, &config), Err(ConfigError::ZeroTileSize));
    }

    #[test]
    fn test_negative_jitter_rejected() {
        let config = TiledConfig {
            tile_size: 32,
            jitter_sigma: -0.5,
            ..Default::default()
        };
        assert_eq!(
            generate_tiled(64, 64, &config),
            Err(ConfigError::InvalidJitterSigma)
        );
    }

    #[test]
    fn test_tiled_determinism() {
        let config = TiledConfig {
            tile_size: 32,
            jitter_sigma: 0.1,
            worley: WorleyConfig {
                scale: 8,
                layers: 2,
                seed: 77,
            },
        };

        let a = generate_tiled(64, 64, &config).unwrap();
        let b = generate_tiled(64, 64, &config).unwrap();

        assert_eq!(a, b, "Same configuration should produce identical canvases");
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate_tiled(64, 64, &TiledConfig { tile_size: 32, ..TiledConfig::with_seed(1) }).unwrap();
        let b = generate_tiled(64, 64, &TiledConfig { tile_size: 32, ..TiledConfig::with_seed(2) }).unwrap();
        assert_ne!(a.pixels, b.pixels);
    }

    #[test]
    fn test_quantization_reaches_endpoints() {
        // With jitter disabled, every non-degenerate tile is normalized
        // to exactly [0, 1], so the canvas must contain both 0 and 255.
        let config = TiledConfig {
            tile_size: 64,
            jitter_sigma: 0.0,
            worley: WorleyConfig {
                scale: 16,
                layers: 1,
                seed: 42,
            },
        };
        let canvas = generate_tiled(128, 128, &config).unwrap();

        assert!(canvas.pixels.contains(&0));
        assert!(canvas.pixels.contains(&255));
    }

    #[test]
    fn test_tile_partition_covers_canvas_exactly() {
        // Paint each tile with its own index (+1 so an unwritten pixel
        // is distinguishable from tile 0) and check ownership per pixel:
        // no gaps, no overlaps.
        let tile_size = 8u32;
        let (tiles_x, tiles_y) = (4u32, 3u32);
        let mut canvas = Canvas::new(tiles_x * tile_size, tiles_y * tile_size);

        for tile_y in 0..tiles_y {
            for tile_x in 0..tiles_x {
                let index = tile_y * tiles_x + tile_x + 1;
                let mut field = NoiseField::new(tile_size, tile_size);
                for v in &mut field.values {
                    *v = index as f32 / 255.0;
                }
                blit(&mut canvas, tile_x, tile_y, tile_size, &field);
            }
        }

        for y in 0..canvas.height {
            for x in 0..canvas.width {
                let owner = (y / tile_size) * tiles_x + (x / tile_size) + 1;
                assert_eq!(
                    canvas.get(x, y) as u32,
                    owner,
                    "Pixel ({}, {}) not written by its owning tile",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_jitter_changes_pixels_but_stays_deterministic() {
        let base = TiledConfig {
            tile_size: 32,
            jitter_sigma: 0.0,
            worley: WorleyConfig::with_seed(9),
        };
        let jittered = TiledConfig {
            jitter_sigma: 0.1,
            ..base
        };

        let clean = generate_tiled(64, 64, &base).unwrap();
        let noisy_a = generate_tiled(64, 64, &jittered).unwrap();
        let noisy_b = generate_tiled(64, 64, &jittered).unwrap();

        assert_ne!(clean.pixels, noisy_a.pixels);
        assert_eq!(noisy_a, noisy_b, "Jitter must be deterministic given the seed");
    }
}
