use std::fmt;

use glam::Mat4;
use tessel_core::geometry::Rect;
use tessel_core::math::transform_point;

use super::{QuadCapacity, reserved_vertices};
use crate::Color;
use crate::device::RenderDevice;
use crate::texture::{TextureHandle, TextureId, UvRect};
use crate::vertex::{TextureVertex, VERTICES_PER_QUAD};

/// A textured quad before it is written into a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TexturedQuad {
    /// Untransformed destination rectangle.
    pub dest: Rect<f32>,
    /// Normalized source region.
    pub uv: UvRect,
    /// Transform applied to the four corners.
    pub transform: Mat4,
    /// Tint color.
    pub color: Color,
}

impl TexturedQuad {
    fn vertices(&self) -> [TextureVertex; VERTICES_PER_QUAD] {
        let Rect {
            x,
            y,
            width,
            height,
        } = self.dest;
        let UvRect { u0, v0, u1, v1 } = self.uv;
        let color = self.color.to_array();
        let corner = |px: f32, py: f32, u: f32, v: f32| TextureVertex {
            position: transform_point(&self.transform, px, py).to_array(),
            uv: [u, v],
            color,
        };

        [
            corner(x, y, u0, v0),
            corner(x + width, y, u1, v0),
            corner(x + width, y + height, u1, v1),
            corner(x, y + height, u0, v1),
        ]
    }
}

/// Quads sampling one texture.
pub struct TextureBatch {
    texture: TextureHandle,
    texture_id: TextureId,
    vertices: Vec<TextureVertex>,
    capacity: QuadCapacity,
}

impl fmt::Debug for TextureBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureBatch")
            .field("texture_id", &self.texture_id)
            .field("quads", &self.capacity.quads)
            .field("max_quads", &self.capacity.max_quads)
            .finish()
    }
}

impl TextureBatch {
    /// Create an empty batch bound to `texture`.
    pub fn new(texture: TextureHandle, max_quads: usize) -> Self {
        let texture_id = texture.id();
        Self {
            texture,
            texture_id,
            vertices: Vec::with_capacity(reserved_vertices(max_quads)),
            capacity: QuadCapacity::new(max_quads),
        }
    }

    pub fn texture_id(&self) -> TextureId {
        self.texture_id
    }

    pub fn texture(&self) -> &TextureHandle {
        &self.texture
    }

    /// Whether a quad sampling `texture` could be appended right now.
    pub fn accepts(&self, texture: TextureId) -> bool {
        self.texture_id == texture && self.capacity.has_room()
    }

    /// Append `quad` if it samples the bound texture and there is room.
    pub fn try_add(&mut self, texture: TextureId, quad: &TexturedQuad) -> bool {
        if !self.accepts(texture) {
            return false;
        }
        self.vertices.extend_from_slice(&quad.vertices());
        self.capacity.record();
        true
    }

    pub fn quad_count(&self) -> usize {
        self.capacity.quads
    }

    pub fn is_full(&self) -> bool {
        !self.capacity.has_room()
    }

    pub fn vertices(&self) -> &[TextureVertex] {
        &self.vertices
    }

    pub(super) fn render(&self, device: &dyn RenderDevice) {
        device.render_texture_quads(&self.texture, &self.vertices);
    }
}
