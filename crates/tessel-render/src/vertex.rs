//! Vertex layouts written by the quad batches.
//!
//! Each quad is stored as four vertices in top-left, top-right,
//! bottom-right, bottom-left order. Devices expand them to two triangles.

use bytemuck::{Pod, Zeroable};

/// Number of vertices stored per quad.
pub const VERTICES_PER_QUAD: usize = 4;

/// Vertex of a textured quad.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TextureVertex {
    /// Transformed position.
    pub position: [f32; 2],
    /// Normalized texture coordinate.
    pub uv: [f32; 2],
    /// Tint color (RGBA).
    pub color: [f32; 4],
}

/// Vertex of a flat or corner-interpolated color quad.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Vertex of a gradient quad. Color comes from the batch's gradient.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GradientVertex {
    pub position: [f32; 2],
}

static_assertions::assert_eq_size!(TextureVertex, [f32; 8]);
static_assertions::assert_eq_size!(ColorVertex, [f32; 6]);
static_assertions::assert_eq_size!(GradientVertex, [f32; 2]);

impl TextureVertex {
    /// Size of the vertex in bytes.
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;
}

impl ColorVertex {
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;
}

impl GradientVertex {
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;
}
