//! Visual configuration for the backdrop.
//!
//! Everything about how particles *look*, separate from when they spawn and
//! expire: the HSL color model sampled at spawn time, the two palettes, the
//! radial gradient styles with their WGSL fragment bodies, and the global
//! dimming that keeps the field a backdrop instead of a foreground.

use glam::Vec3;

/// Global opacity multiplier applied on top of each particle's own fade
/// envelope. Kept low so the field reads as ambiance behind real content.
pub const DIMMING: f32 = 0.22;

/// Surface clear color (linear RGB). Dark blue-black.
pub const BACKGROUND_COLOR: Vec3 = Vec3::new(0.02, 0.02, 0.05);

/// A color as hue, saturation, lightness.
///
/// Hue is in degrees and wraps at 360; saturation and lightness are in
/// `[0, 1]`. The base color is fully opaque; opacity comes from the
/// particle's fade envelope at render time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert to an RGB triple with each channel in `[0, 1]`.
    pub fn to_rgb(self) -> [f32; 3] {
        hsl_to_rgb(self.hue, self.saturation, self.lightness)
    }
}

/// Convert HSL to RGB.
///
/// * `h` - hue in degrees (any value, wrapped into `[0, 360)`)
/// * `s` - saturation, 0.0 (gray) to 1.0 (vivid)
/// * `l` - lightness, 0.0 (black) to 1.0 (white)
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h6 = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h6 % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h6 as u32 % 6 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}

/// Color palette sampled at spawn time.
///
/// Hue is always uniform around the full wheel; the palette fixes the
/// saturation and lightness bands the spawner draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Washed-out pastels: low saturation, high lightness (default).
    #[default]
    Pale,

    /// Saturated colors at mid lightness.
    Vivid,
}

impl Palette {
    /// Saturation band `[min, max)` for this palette.
    pub fn saturation_range(&self) -> (f32, f32) {
        match self {
            Palette::Pale => (0.25, 0.45),
            Palette::Vivid => (0.65, 0.9),
        }
    }

    /// Lightness band `[min, max)` for this palette.
    pub fn lightness_range(&self) -> (f32, f32) {
        match self {
            Palette::Pale => (0.75, 0.9),
            Palette::Vivid => (0.45, 0.6),
        }
    }
}

/// Radial gradient painted inside each particle quad.
///
/// The fragment body receives `in.uv` as a vec2 in `[-1, 1]` across the
/// quad, plus `in.color` and `in.alpha`, and returns the final fragment
/// color. The particle's alpha multiplies the whole gradient uniformly, so
/// the fade envelope dims both styles the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientStyle {
    /// Solid color at the center, smooth fade to transparent at the rim
    /// (default).
    #[default]
    SoftDisk,

    /// Transparent interior with a glowing band near the rim, fading back
    /// out at the very edge.
    EdgeRing,
}

impl GradientStyle {
    /// Generate the WGSL fragment shader body for this style.
    pub fn to_wgsl_fragment(&self) -> &'static str {
        match self {
            GradientStyle::SoftDisk => {
                r#"    let dist = length(in.uv);
    if dist > 1.0 {
        discard;
    }
    let falloff = 1.0 - smoothstep(0.0, 1.0, dist);
    return vec4<f32>(in.color, in.alpha * falloff);"#
            }

            GradientStyle::EdgeRing => {
                r#"    let dist = length(in.uv);
    if dist > 1.0 {
        discard;
    }
    let band = smoothstep(0.6, 0.72, dist) * (1.0 - smoothstep(0.85, 1.0, dist));
    return vec4<f32>(in.color, in.alpha * band);"#
            }
        }
    }
}

/// Configuration for backdrop visuals.
#[derive(Debug, Clone)]
pub struct VisualConfig {
    /// Gradient painted inside each particle.
    pub style: GradientStyle,
    /// Palette the spawner samples colors from.
    pub palette: Palette,
    /// Global opacity multiplier.
    pub dimming: f32,
    /// Surface clear color (RGB, 0.0-1.0).
    pub background_color: Vec3,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            style: GradientStyle::default(),
            palette: Palette::default(),
            dimming: DIMMING,
            background_color: BACKGROUND_COLOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_primary_colors() {
        let red = hsl_to_rgb(0.0, 1.0, 0.5);
        assert!((red[0] - 1.0).abs() < 0.001);
        assert!(red[1] < 0.001);
        assert!(red[2] < 0.001);

        let green = hsl_to_rgb(120.0, 1.0, 0.5);
        assert!(green[0] < 0.001);
        assert!((green[1] - 1.0).abs() < 0.001);

        let blue = hsl_to_rgb(240.0, 1.0, 0.5);
        assert!((blue[2] - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_hsl_zero_saturation_is_gray() {
        let gray = hsl_to_rgb(200.0, 0.0, 0.7);
        assert!((gray[0] - 0.7).abs() < 0.001);
        assert!((gray[1] - 0.7).abs() < 0.001);
        assert!((gray[2] - 0.7).abs() < 0.001);
    }

    #[test]
    fn test_hsl_hue_wraps() {
        let a = hsl_to_rgb(30.0, 0.5, 0.6);
        let b = hsl_to_rgb(390.0, 0.5, 0.6);
        assert_eq!(a, b);
    }

    #[test]
    fn test_palette_bands_are_valid() {
        for palette in [Palette::Pale, Palette::Vivid] {
            let (s_min, s_max) = palette.saturation_range();
            let (l_min, l_max) = palette.lightness_range();
            assert!(0.0 <= s_min && s_min < s_max && s_max <= 1.0);
            assert!(0.0 <= l_min && l_min < l_max && l_max <= 1.0);
        }
    }

    #[test]
    fn test_fragment_bodies_cover_the_quad() {
        for style in [GradientStyle::SoftDisk, GradientStyle::EdgeRing] {
            let body = style.to_wgsl_fragment();
            assert!(body.contains("length(in.uv)"));
            assert!(body.contains("in.alpha"));
            assert!(body.contains("discard"));
        }
    }
}
