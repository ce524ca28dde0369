//! Randomized particle creation.
//!
//! [`SpawnContext`] owns the random source and knows the sampling rules for
//! every particle attribute. The field decides *when* a spawn check happens;
//! the context decides *what* comes out of it.
//!
//! All sampling is bounded by the current viewport: radius scales with the
//! viewport dimensions (with a hard floor so tiny windows still get visible
//! circles) and positions may overhang the viewport by one radius on every
//! side so particles can fade in and out across the edge instead of popping.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::particle::Particle;
use crate::visuals::{Hsl, Palette};

/// Radius never drops below this many layout pixels, whatever the viewport.
pub const MIN_RADIUS: f32 = 20.0;

/// Lower radius bound as a fraction of the smaller viewport dimension.
const MIN_RADIUS_FACTOR: f32 = 0.01;

/// Upper radius bound as a fraction of the larger viewport dimension.
const MAX_RADIUS_FACTOR: f32 = 0.08;

/// Particle lifetime band in milliseconds.
const LIFETIME_RANGE_MS: std::ops::Range<f32> = 6_000.0..14_000.0;

/// Probability that a spawn check produces a single particle rather than a
/// burst of two or three.
const SINGLE_SPAWN_PROBABILITY: f32 = 0.8;

/// Radius bounds `(min, max)` for the given viewport, in layout pixels.
///
/// The lower bound is floored at [`MIN_RADIUS`]; on a degenerate viewport
/// the upper bound collapses to the floor.
pub fn radius_bounds(width: f32, height: f32) -> (f32, f32) {
    let min_r = (width.min(height) * MIN_RADIUS_FACTOR).max(MIN_RADIUS);
    let max_r = width.max(height) * MAX_RADIUS_FACTOR;
    (min_r, max_r)
}

/// Random source plus sampling rules for new particles.
pub struct SpawnContext {
    rng: SmallRng,
    palette: Palette,
}

impl SpawnContext {
    /// Context with an entropy-seeded random source.
    pub fn new(palette: Palette) -> Self {
        Self {
            rng: SmallRng::from_entropy(),
            palette,
        }
    }

    /// Context with a fixed seed, for reproducible spawn sequences.
    pub fn seeded(palette: Palette, seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            palette,
        }
    }

    /// How many particles this spawn check produces: usually one, sometimes
    /// a small burst of two or three.
    pub fn burst_count(&mut self) -> usize {
        if self.rng.gen::<f32>() < SINGLE_SPAWN_PROBABILITY {
            1
        } else {
            self.rng.gen_range(2..=3)
        }
    }

    /// Create one particle for a `width` x `height` layout-pixel viewport,
    /// born at `now_ms` on the field's virtual clock.
    pub fn spawn(&mut self, width: f32, height: f32, now_ms: f64) -> Particle {
        let (min_r, max_r) = radius_bounds(width, height);
        let radius = if max_r > min_r {
            self.rng.gen_range(min_r..max_r)
        } else {
            min_r
        };

        let position = Vec2::new(
            self.rng.gen_range(-radius..width + radius),
            self.rng.gen_range(-radius..height + radius),
        );

        let (s_min, s_max) = self.palette.saturation_range();
        let (l_min, l_max) = self.palette.lightness_range();
        let color = Hsl::new(
            self.rng.gen_range(0.0..360.0),
            self.rng.gen_range(s_min..s_max),
            self.rng.gen_range(l_min..l_max),
        );

        Particle {
            position,
            radius,
            color,
            lifetime_ms: self.rng.gen_range(LIFETIME_RANGE_MS),
            created_at_ms: now_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_bounds_for_reference_viewport() {
        // min(1000, 800) * 0.01 = 8, floored to 20; max(1000, 800) * 0.08 = 80.
        let (min_r, max_r) = radius_bounds(1000.0, 800.0);
        assert_eq!(min_r, 20.0);
        assert_eq!(max_r, 80.0);
    }

    #[test]
    fn test_radius_floor_applies_on_large_viewports_too() {
        // 4000 * 0.01 = 40 > 20, so the proportional bound wins.
        let (min_r, _) = radius_bounds(4000.0, 4000.0);
        assert_eq!(min_r, 40.0);
    }

    #[test]
    fn test_spawned_attributes_stay_in_bounds() {
        let (width, height) = (1000.0, 800.0);
        let mut ctx = SpawnContext::seeded(Palette::Pale, 42);

        for _ in 0..500 {
            let p = ctx.spawn(width, height, 0.0);
            assert!(p.radius >= 20.0 && p.radius <= 80.0);
            assert!(p.position.x >= -p.radius && p.position.x <= width + p.radius);
            assert!(p.position.y >= -p.radius && p.position.y <= height + p.radius);
            assert!(p.color.hue >= 0.0 && p.color.hue < 360.0);
            assert!(p.lifetime_ms >= 6_000.0 && p.lifetime_ms < 14_000.0);
        }
    }

    #[test]
    fn test_degenerate_viewport_spawns_floor_radius() {
        let mut ctx = SpawnContext::seeded(Palette::Pale, 7);
        let p = ctx.spawn(0.0, 0.0, 0.0);
        assert_eq!(p.radius, MIN_RADIUS);
        assert!(p.position.x >= -MIN_RADIUS && p.position.x <= MIN_RADIUS);
        assert!(p.position.y >= -MIN_RADIUS && p.position.y <= MIN_RADIUS);
    }

    #[test]
    fn test_colors_follow_the_palette_bands() {
        for palette in [Palette::Pale, Palette::Vivid] {
            let (s_min, s_max) = palette.saturation_range();
            let (l_min, l_max) = palette.lightness_range();
            let mut ctx = SpawnContext::seeded(palette, 3);

            for _ in 0..200 {
                let p = ctx.spawn(1280.0, 720.0, 0.0);
                assert!(p.color.saturation >= s_min && p.color.saturation < s_max);
                assert!(p.color.lightness >= l_min && p.color.lightness < l_max);
            }
        }
    }

    #[test]
    fn test_burst_count_is_one_to_three() {
        let mut ctx = SpawnContext::seeded(Palette::Pale, 11);
        let mut singles = 0;
        let mut bursts = 0;

        for _ in 0..1_000 {
            match ctx.burst_count() {
                1 => singles += 1,
                2 | 3 => bursts += 1,
                n => panic!("unexpected burst count {n}"),
            }
        }

        // 80/20 split with plenty of slack for a seeded run.
        assert!(singles > 700);
        assert!(bursts > 100);
    }

    #[test]
    fn test_seeded_contexts_are_reproducible() {
        let mut a = SpawnContext::seeded(Palette::Vivid, 99);
        let mut b = SpawnContext::seeded(Palette::Vivid, 99);

        for _ in 0..20 {
            let pa = a.spawn(1920.0, 1080.0, 5.0);
            let pb = b.spawn(1920.0, 1080.0, 5.0);
            assert_eq!(pa.position, pb.position);
            assert_eq!(pa.radius, pb.radius);
            assert_eq!(pa.color, pb.color);
            assert_eq!(pa.lifetime_ms, pb.lifetime_ms);
        }
    }
}
