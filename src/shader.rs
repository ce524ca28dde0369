//! GPU-facing data layouts and WGSL assembly.
//!
//! The render shader is assembled from a fixed vertex stage, which expands
//! each particle into a screen-aligned quad in layout-pixel space, plus the
//! fragment body of the configured [`GradientStyle`]. The uniform transform
//! maps layout pixels to clip space, so everything upstream of the shader
//! works in device-independent coordinates.

use bytemuck::{Pod, Zeroable};

use crate::visuals::GradientStyle;

/// Per-particle instance data, one per live particle per frame.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    /// Center in layout pixels.
    pub position: [f32; 2],
    /// Radius in layout pixels.
    pub radius: f32,
    /// Final opacity: fade envelope times global dimming.
    pub alpha: f32,
    /// Base color as RGB in `[0, 1]`.
    pub color: [f32; 3],
    pub _pad: f32,
}

/// Frame-level uniforms.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    /// Viewport size in layout pixels.
    pub viewport: [f32; 2],
    pub _padding: [f32; 2],
}

/// Assemble the render shader for the given gradient style.
pub fn render_source(style: GradientStyle) -> String {
    format!(
        r#"struct Uniforms {{
    viewport: vec2<f32>,
    _padding: vec2<f32>,
}};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexOutput {{
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
    @location(1) alpha: f32,
    @location(2) uv: vec2<f32>,
}};

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) position: vec2<f32>,
    @location(1) radius: f32,
    @location(2) alpha: f32,
    @location(3) color: vec3<f32>,
) -> VertexOutput {{
    var quad_vertices = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
    );

    let corner = quad_vertices[vertex_index];
    let world = position + corner * radius;
    let ndc = vec2<f32>(
        world.x / uniforms.viewport.x * 2.0 - 1.0,
        1.0 - world.y / uniforms.viewport.y * 2.0,
    );

    var out: VertexOutput;
    out.clip_position = vec4<f32>(ndc, 0.0, 1.0);
    out.color = color;
    out.alpha = alpha;
    out.uv = corner;

    return out;
}}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {{
{fragment_body}
}}
"#,
        fragment_body = style.to_wgsl_fragment()
    )
}
