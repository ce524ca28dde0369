//! Integration tests driving the particle field over simulated time.
//!
//! These step a seeded [`Field`] with synthetic timestamps, the same way the
//! window host drives it with wall-clock timestamps, and check the
//! population and per-particle invariants that must hold after every frame.

use driftfield::field::SPAWN_INTERVAL_MS;
use driftfield::spawn::radius_bounds;
use driftfield::time::MAX_FRAME_DELTA_MS;
use driftfield::visuals::DIMMING;
use driftfield::Field;

const FRAME_MS: f64 = 16.0;

fn run_field(seed: u64, width: f32, height: f32, frames: usize) -> Field {
    let mut field = Field::seeded(width, height, seed);
    for frame in 0..frames {
        field.tick(frame as f64 * FRAME_MS);
    }
    field
}

// ============================================================================
// Population
// ============================================================================

#[test]
fn test_population_reaches_a_bounded_steady_state() {
    // 60 simulated seconds: spawn checks every 400ms at 1-3 particles,
    // lifetimes 6-14s.
    let field = run_field(1, 1920.0, 1080.0, 3_750);

    // Worst case: every check bursts 3 and every lifetime runs the full 14s.
    let bound = (14_000.0 / SPAWN_INTERVAL_MS).ceil() as usize * 3 + 3;
    assert!(!field.is_empty());
    assert!(
        field.len() <= bound,
        "population {} exceeded steady-state bound {}",
        field.len(),
        bound
    );
}

#[test]
fn test_field_starts_empty_and_fills_on_cadence() {
    let field = run_field(2, 1280.0, 720.0, 10);
    assert!(field.is_empty(), "no spawn check inside the first 400ms");

    let field = run_field(2, 1280.0, 720.0, 300);
    assert!(field.len() >= 10, "cadence should have fired repeatedly");
}

// ============================================================================
// Per-particle invariants
// ============================================================================

#[test]
fn test_attributes_and_alpha_stay_in_bounds_over_a_long_run() {
    let (width, height) = (1000.0, 800.0);
    let (min_r, max_r) = radius_bounds(width, height);
    let mut field = Field::seeded(width, height, 4);

    for frame in 0..2_500 {
        field.tick(frame as f64 * FRAME_MS);
        let now = field.elapsed();

        for p in field.particles() {
            assert!(p.age_ms(now) < p.lifetime_ms, "expired particle survived");
            assert!(p.radius >= min_r && p.radius <= max_r);
            assert!(p.position.x >= -p.radius && p.position.x <= width + p.radius);
            assert!(p.position.y >= -p.radius && p.position.y <= height + p.radius);

            let alpha = p.alpha(now);
            assert!((0.0..=1.0).contains(&alpha));
        }

        for instance in field.instances() {
            assert!(instance.alpha >= 0.0 && instance.alpha <= DIMMING + 1e-6);
        }
    }
}

// ============================================================================
// Timing
// ============================================================================

#[test]
fn test_frame_hiccups_are_absorbed_by_the_delta_clamp() {
    let mut field = Field::seeded(1280.0, 720.0, 5);
    field.tick(0.0);
    field.tick(200.0);

    // A 200ms gap between frames only moves the animation 50ms.
    assert_eq!(field.elapsed(), MAX_FRAME_DELTA_MS);
}

#[test]
fn test_virtual_time_is_independent_of_timestamp_origin() {
    let mut a = Field::seeded(1280.0, 720.0, 9);
    let mut b = Field::seeded(1280.0, 720.0, 9);

    for frame in 0..500 {
        a.tick(frame as f64 * FRAME_MS);
        b.tick(1_000_000.0 + frame as f64 * FRAME_MS);
    }

    assert_eq!(a.elapsed(), b.elapsed());
    assert_eq!(a.len(), b.len());
}
