//! The particle field: everything that changes frame to frame.
//!
//! [`Field`] owns the active particles, the spawn cadence, and the frame
//! clock. Feed it a host timestamp once per frame via [`Field::tick`], then
//! hand the result of [`Field::instances`] to the renderer. The field knows
//! nothing about the GPU beyond the instance layout it fills in, so it can
//! be stepped in tests with a fixed seed and synthetic timestamps.

use crate::particle::Particle;
use crate::shader::ParticleInstance;
use crate::spawn::SpawnContext;
use crate::time::FrameClock;
use crate::visuals::VisualConfig;

/// Minimum virtual time between spawn checks, in milliseconds.
pub const SPAWN_INTERVAL_MS: f64 = 400.0;

/// Active particle collection plus the state that drives it.
pub struct Field {
    particles: Vec<Particle>,
    clock: FrameClock,
    spawner: SpawnContext,
    visuals: VisualConfig,
    /// Virtual timestamp of the last spawn check.
    last_spawn_ms: f64,
    /// Viewport width in layout pixels.
    width: f32,
    /// Viewport height in layout pixels.
    height: f32,
}

impl Field {
    /// Field for a `width` x `height` layout-pixel viewport, spawning from
    /// an entropy-seeded random source.
    pub fn new(width: f32, height: f32) -> Self {
        let visuals = VisualConfig::default();
        let spawner = SpawnContext::new(visuals.palette);
        Self::assemble(width, height, visuals, spawner)
    }

    /// Field with a fixed random seed, for reproducible runs.
    pub fn seeded(width: f32, height: f32, seed: u64) -> Self {
        let visuals = VisualConfig::default();
        let spawner = SpawnContext::seeded(visuals.palette, seed);
        Self::assemble(width, height, visuals, spawner)
    }

    fn assemble(width: f32, height: f32, visuals: VisualConfig, spawner: SpawnContext) -> Self {
        Self {
            particles: Vec::new(),
            clock: FrameClock::new(),
            spawner,
            visuals,
            last_spawn_ms: 0.0,
            width,
            height,
        }
    }

    /// Update the layout-pixel viewport.
    ///
    /// Existing particles keep their positions; only future spawns use the
    /// new bounds.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Advance the field to the given host timestamp: move the virtual
    /// clock, run the spawn check, drop expired particles.
    pub fn tick(&mut self, timestamp_ms: f64) {
        let (now, _delta) = self.clock.advance(timestamp_ms);

        if now - self.last_spawn_ms >= SPAWN_INTERVAL_MS {
            self.last_spawn_ms = now;
            let count = self.spawner.burst_count();
            for _ in 0..count {
                let particle = self.spawner.spawn(self.width, self.height, now);
                self.particles.push(particle);
            }
            log::trace!(
                "spawned {count} particle(s), population {}",
                self.particles.len()
            );
        }

        // Reverse index order so removal never skips a neighbor.
        for i in (0..self.particles.len()).rev() {
            if self.particles[i].is_expired(now) {
                self.particles.swap_remove(i);
            }
        }
    }

    /// Draw data for every live particle at the current virtual time, with
    /// the global dimming already applied.
    pub fn instances(&self) -> Vec<ParticleInstance> {
        let now = self.clock.elapsed();
        self.particles
            .iter()
            .map(|p| ParticleInstance {
                position: p.position.to_array(),
                radius: p.radius,
                alpha: p.alpha(now) * self.visuals.dimming,
                color: p.color.to_rgb(),
                _pad: 0.0,
            })
            .collect()
    }

    /// Live particles, in no particular order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Visuals this field spawns and renders with.
    pub fn visuals(&self) -> &VisualConfig {
        &self.visuals
    }

    /// Current virtual time in milliseconds.
    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    /// Number of live particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visuals::DIMMING;

    const FRAME_MS: f64 = 16.0;

    fn stepped(seed: u64, frames: usize) -> Field {
        let mut field = Field::seeded(1280.0, 720.0, seed);
        for frame in 0..frames {
            field.tick(frame as f64 * FRAME_MS);
        }
        field
    }

    #[test]
    fn test_no_spawn_before_first_interval() {
        // 24 frames at 16ms is 368ms of virtual time, under the cadence.
        let field = stepped(1, 24);
        assert!(field.is_empty());
    }

    #[test]
    fn test_first_spawn_lands_on_the_cadence() {
        // Frame 26 reaches 400ms of virtual time.
        let field = stepped(1, 27);
        assert!(!field.is_empty());
        assert!(field.len() <= 3);
    }

    #[test]
    fn test_spawn_checks_respect_the_interval() {
        let mut field = Field::seeded(1280.0, 720.0, 5);
        let mut checks = 0;
        let mut last_len = 0;

        // Stay under the 6s minimum lifetime so nothing expires and every
        // population increase is a spawn check.
        for frame in 0..375 {
            field.tick(frame as f64 * FRAME_MS);
            if field.len() > last_len {
                checks += 1;
            }
            last_len = field.len();
        }

        // 5984ms of virtual time holds exactly 14 cadence slots.
        assert_eq!(checks, 14);
    }

    #[test]
    fn test_delta_clamp_slows_the_virtual_clock() {
        let mut field = Field::seeded(1280.0, 720.0, 2);
        field.tick(0.0);
        field.tick(200.0);
        assert_eq!(field.elapsed(), 50.0);
    }

    #[test]
    fn test_expired_particles_never_survive_a_tick() {
        let mut field = Field::seeded(800.0, 600.0, 3);
        // 40 simulated seconds crosses every spawned lifetime at least once.
        for frame in 0..2_500 {
            field.tick(frame as f64 * FRAME_MS);
            let now = field.elapsed();
            for p in field.particles() {
                assert!(
                    p.age_ms(now) < p.lifetime_ms,
                    "expired particle left in the field"
                );
            }
        }
    }

    #[test]
    fn test_instances_match_population_and_stay_dimmed() {
        let field = stepped(4, 500);
        let instances = field.instances();
        assert_eq!(instances.len(), field.len());
        for instance in &instances {
            assert!(instance.alpha >= 0.0);
            assert!(instance.alpha <= DIMMING + 1e-6);
        }
    }

    #[test]
    fn test_resize_rebounds_future_spawns() {
        let mut field = Field::seeded(1000.0, 800.0, 6);
        field.resize(300.0, 200.0);

        // Run long enough for plenty of post-resize spawns.
        for frame in 0..1_250 {
            field.tick(frame as f64 * FRAME_MS);
        }
        let (_, max_r) = crate::spawn::radius_bounds(300.0, 200.0);
        for p in field.particles() {
            assert!(p.radius <= max_r);
            assert!(p.position.x <= 300.0 + p.radius);
            assert!(p.position.y <= 200.0 + p.radius);
        }
    }
}
