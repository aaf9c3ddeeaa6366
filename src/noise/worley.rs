//! Multi-layer Worley (cellular F1) field evaluation.

use glam::Vec2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::sampler::cell_point;
use super::ConfigError;
use crate::field::NoiseField;

/// Configuration for multi-layer Worley noise evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorleyConfig {
    /// Grid cell spacing in pixels (distance between feature points).
    pub scale: u32,
    /// Number of independent layers summed into the field.
    pub layers: u32,
    /// Random seed for reproducible generation.
    pub seed: u64,
}

impl Default for WorleyConfig {
    fn default() -> Self {
        Self {
            scale: 32,
            layers: 4,
            seed: 42,
        }
    }
}

impl WorleyConfig {
    /// Creates a new configuration with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Checks that scale and layer count are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scale == 0 {
            return Err(ConfigError::ZeroScale);
        }
        if self.layers == 0 {
            return Err(ConfigError::ZeroLayers);
        }
        Ok(())
    }
}

/// Evaluates a normalized multi-layer Worley field.
///
/// Per pixel and layer, scans the 3x3 neighborhood of the owning grid
/// cell and keeps the minimum Euclidean distance to the neighbors'
/// feature points (the F1 metric; the 1-ring search is sufficient
/// because feature points never leave their own cell). Per-layer minima
/// are summed in ascending layer order, which is part of the contract:
/// a fixed accumulation order keeps results bit-reproducible.
///
/// The accumulated field is normalized to exactly [0, 1]. A degenerate
/// flat field (max == min) normalizes to uniform 0.5 instead of
/// dividing by zero.
///
/// # Arguments
/// * `width`, `height` - Field dimensions in pixels
/// * `config` - Scale, layer count, and base seed
///
/// # Returns
/// The normalized field, or a `ConfigError` before any pixel is computed
pub fn evaluate(width: u32, height: u32, config: &WorleyConfig) -> Result<NoiseField, ConfigError> {
    if width == 0 || height == 0 {
        return Err(ConfigError::ZeroDimension(width, height));
    }
    config.validate()?;

    let mut field = NoiseField::new(width, height);
    let scale = config.scale;

    field.values.par_iter_mut().enumerate().for_each(|(i, value)| {
        let x = (i as u32) % width;
        let y = (i as u32) / width;

        let mut sum = 0.0f32;
        for layer in 0..config.layers {
            let layer_seed = config.seed.wrapping_add(layer as u64);
            sum += min_feature_distance(x, y, scale, layer_seed);
        }
        *value = sum;
    });

    normalize(&mut field);
    Ok(field)
}

/// Minimum Euclidean distance from pixel (x, y) to the feature points
/// of the 3x3 cell neighborhood, for one layer seed.
fn min_feature_distance(x: u32, y: u32, scale: u32, layer_seed: u64) -> f32 {
    let pixel = Vec2::new(x as f32, y as f32);
    let cell_x = (x / scale) as i64;
    let cell_y = (y / scale) as i64;

    let mut min_dist = f32::MAX;
    for j in -1..=1_i64 {
        for i in -1..=1_i64 {
            let neighbor_x = cell_x + i;
            let neighbor_y = cell_y + j;

            let offset = cell_point(neighbor_x, neighbor_y, layer_seed);
            let feature = Vec2::new(
                (neighbor_x as f32 + offset.x) * scale as f32,
                (neighbor_y as f32 + offset.y) * scale as f32,
            );

            min_dist = min_dist.min(pixel.distance(feature));
        }
    }

    min_dist
}

/// Rescales the field to exactly [0, 1].
///
/// A flat field has no dynamic range to stretch; it becomes uniform 0.5
/// rather than faulting on the zero denominator.
pub(super) fn normalize(field: &mut NoiseField) {
    let (min, max) = field.value_range();

    if max > min {
        let range = max - min;
        for v in &mut field.values {
            *v = (*v - min) / range;
        }
    } else {
        for v in &mut field.values {
            *v = 0.5;
        }
    }
}
