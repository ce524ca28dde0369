//! A single backdrop particle and its fade envelope.
//!
//! A particle is born with every attribute already decided; from then on the
//! only thing that changes it is the passage of virtual time. It ramps from
//! transparent to full opacity over the first quarter of its lifetime, holds
//! through the middle half, ramps back down over the last quarter, and is
//! removed the moment its age reaches its lifetime.

use glam::Vec2;

use crate::visuals::Hsl;

/// Fraction of the lifetime spent ramping opacity up from zero.
pub const FADE_IN_FRACTION: f32 = 0.25;

/// Fraction of the lifetime spent ramping opacity back down to zero.
pub const FADE_OUT_FRACTION: f32 = 0.25;

/// Where a particle currently sits in its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    FadingIn,
    Held,
    FadingOut,
    Expired,
}

/// A fading circle.
///
/// Position and radius are in layout pixels. The position may sit outside
/// the viewport by up to the radius so particles can drift across the edge
/// without popping in or out.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Center in layout pixels.
    pub position: Vec2,
    /// Radius in layout pixels.
    pub radius: f32,
    /// Base color, fully opaque.
    pub color: Hsl,
    /// Total time this particle exists, in milliseconds.
    pub lifetime_ms: f32,
    /// Birth timestamp on the field's virtual clock, in milliseconds.
    pub created_at_ms: f64,
}

impl Particle {
    /// Age in milliseconds at the given virtual time.
    pub fn age_ms(&self, now_ms: f64) -> f32 {
        (now_ms - self.created_at_ms).max(0.0) as f32
    }

    /// Normalized lifetime progress. `1.0` or more means expired.
    pub fn progress(&self, now_ms: f64) -> f32 {
        self.age_ms(now_ms) / self.lifetime_ms
    }

    /// Whether this particle's age has reached its lifetime.
    pub fn is_expired(&self, now_ms: f64) -> bool {
        self.age_ms(now_ms) >= self.lifetime_ms
    }

    /// Lifetime phase at the given virtual time.
    pub fn phase(&self, now_ms: f64) -> FadePhase {
        let t = self.progress(now_ms);
        if !t.is_finite() || t >= 1.0 {
            FadePhase::Expired
        } else if t < FADE_IN_FRACTION {
            FadePhase::FadingIn
        } else if t > 1.0 - FADE_OUT_FRACTION {
            FadePhase::FadingOut
        } else {
            FadePhase::Held
        }
    }

    /// Opacity at the given virtual time, before the global dimming
    /// multiplier.
    ///
    /// Linear 0 to 1 over the fade-in fraction, 1 through the middle, linear
    /// 1 to 0 over the fade-out fraction. A non-finite intermediate (a
    /// zero-duration lifetime divides by zero) is treated as fully
    /// transparent, and the result is always clamped to `[0, 1]`.
    pub fn alpha(&self, now_ms: f64) -> f32 {
        let t = self.progress(now_ms);
        if !t.is_finite() {
            return 0.0;
        }

        let alpha = if t < FADE_IN_FRACTION {
            t / FADE_IN_FRACTION
        } else if t > 1.0 - FADE_OUT_FRACTION {
            (1.0 - t) / FADE_OUT_FRACTION
        } else {
            1.0
        };

        if !alpha.is_finite() {
            return 0.0;
        }
        alpha.clamp(0.0, 1.0)
    }
}
