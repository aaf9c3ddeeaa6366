//! Deterministic feature point sampling for grid cells.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Distinct odd multipliers per axis keep the hash order-sensitive:
// swapping cell_x/cell_y lands on a different seed, which breaks the
// diagonal alignment artifacts a symmetric mix would produce.
const CELL_X_MULTIPLIER: u64 = 0x9E37_79B9_7F4A_7C15;
const CELL_Y_MULTIPLIER: u64 = 0xC2B2_AE3D_27D4_EB4F;

/// Derives the feature point of a grid cell for a given seed.
///
/// Pure function: the same (cell, seed) always yields the same point,
/// across calls, runs, and platforms. Each call seeds its own RNG
/// instance, so no process-wide generator state is touched and
/// concurrent callers never interfere.
///
/// # Arguments
/// * `cell_x`, `cell_y` - Integer grid cell coordinates
/// * `seed` - Layer or tile seed
///
/// # Returns
/// The cell's feature point as a fractional offset, components in [0, 1)
pub fn cell_point(cell_x: i64, cell_y: i64, seed: u64) -> Vec2 {
    let cell_seed = seed
        .wrapping_add((cell_x as u64).wrapping_mul(CELL_X_MULTIPLIER))
        .wrapping_add((cell_y as u64).wrapping_mul(CELL_Y_MULTIPLIER));

    let mut rng = ChaCha8Rng::seed_from_u64(cell_seed);
    Vec2::new(rng.random::<f32>(), rng.random::<f32>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampler_determinism() {
        let a = cell_point(17, -4, 42);
        let b = cell_point(17, -4, 42);
        assert_eq!(a, b, "Same cell and seed should produce the same point");
    }

    #[test]
    fn test_point_in_unit_square() {
        for cell_x in -8..8 {
            for cell_y in -8..8 {
                let p = cell_point(cell_x, cell_y, 7);
                assert!(p.x >= 0.0 && p.x < 1.0, "x out of [0,1): {}", p.x);
                assert!(p.y >= 0.0 && p.y < 1.0, "y out of [0,1): {}", p.y);
            }
        }
    }

    #[test]
    fn test_axis_order_sensitivity() {
        // Swapping coordinates must not land on the same point.
        let a = cell_point(3, 11, 42);
        let b = cell_point(11, 3, 42);
        assert_ne!(a, b);
    }

    #[test]
    fn test_distinct_cells_rarely_collide() {
        let mut rng = ChaCha8Rng::seed_from_u64(123);
        let mut collisions = 0u32;
        let trials = 10_000;

        for _ in 0..trials {
            let ax = rng.random_range(-1000_i64..1000);
            let ay = rng.random_range(-1000_i64..1000);
            let bx = rng.random_range(-1000_i64..1000);
            let by = rng.random_range(-1000_i64..1000);
            if (ax, ay) == (bx, by) {
                continue;
            }
            if cell_point(ax, ay, 42) == cell_point(bx, by, 42) {
                collisions += 1;
            }
        }

        // Well under 1% of trials may collide.
        assert!(
            collisions < trials / 100,
            "Too many feature point collisions: {}",
            collisions
        );
    }

    #[test]
    fn test_different_seeds_produce_different_points() {
        let a = cell_point(5, 5, 1);
        let b = cell_point(5, 5, 2);
        assert_ne!(a, b);
    }
}
