//! # driftfield
//!
//! An ambient particle-field backdrop: softly fading circles of random size,
//! position, color, and lifetime drift in and out on a full-window surface.
//!
//! ## Quick Start
//!
//! ```ignore
//! fn main() -> Result<(), driftfield::BackdropError> {
//!     driftfield::Backdrop::new().run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### The field
//!
//! [`Field`] owns every live particle plus the spawn cadence and the frame
//! clock. It is plain CPU state driven by timestamps, so it can be stepped
//! in tests with a fixed seed and synthetic time:
//!
//! ```
//! use driftfield::Field;
//!
//! let mut field = Field::seeded(1280.0, 720.0, 7);
//! for frame in 0..120 {
//!     field.tick(frame as f64 * 16.0);
//! }
//! assert!(!field.is_empty());
//! ```
//!
//! ### Particles
//!
//! Each [`Particle`] fades in over the first quarter of its lifetime, holds
//! full opacity through the middle half, fades back out over the last
//! quarter, and is removed the moment its age reaches its lifetime. The
//! rendered opacity is the fade envelope times a global dimming constant
//! that keeps the field reading as a backdrop.
//!
//! ### The host
//!
//! [`Backdrop`] opens a winit window, keeps the wgpu surface matched to the
//! window size and density scale (capped at 2x), and redraws continuously
//! until the window closes. All drawing upstream of the vertex shader
//! happens in layout-pixel coordinates, independent of the display density.

pub mod backdrop;
pub mod error;
pub mod field;
pub mod gpu;
pub mod particle;
pub mod shader;
pub mod spawn;
pub mod time;
pub mod visuals;

pub use backdrop::Backdrop;
pub use error::{BackdropError, GpuError};
pub use field::Field;
pub use glam::Vec2;
pub use particle::{FadePhase, Particle};
pub use shader::ParticleInstance;
pub use spawn::SpawnContext;
pub use time::FrameClock;
pub use visuals::{GradientStyle, Hsl, Palette, VisualConfig};

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use driftfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::backdrop::Backdrop;
    pub use crate::error::BackdropError;
    pub use crate::field::Field;
    pub use crate::particle::{FadePhase, Particle};
    pub use crate::spawn::SpawnContext;
    pub use crate::time::FrameClock;
    pub use crate::visuals::{GradientStyle, Hsl, Palette, VisualConfig};
    pub use crate::Vec2;
}
