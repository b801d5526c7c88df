//! Texture handles as seen by the batching engine.
//!
//! The engine never owns GPU textures. It only needs their pixel size, the
//! normalized UV bounds of their current binding (a texture may live inside
//! an atlas page) and a stable identity to decide batch compatibility.

use std::sync::Arc;

use tessel_core::geometry::Rect;

/// Stable identity of a texture binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u64);

/// Normalized texture coordinates of a rectangular region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRect {
    pub u0: f32,
    pub v0: f32,
    pub u1: f32,
    pub v1: f32,
}

impl Default for UvRect {
    fn default() -> Self {
        Self::FULL
    }
}

impl UvRect {
    /// The whole texture.
    pub const FULL: UvRect = UvRect::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(u0: f32, v0: f32, u1: f32, v1: f32) -> Self {
        Self { u0, v0, u1, v1 }
    }

    /// Map a pixel-space sub-rectangle of a `width` x `height` image into
    /// this UV range.
    pub fn sub_region(&self, region: Rect<f32>, width: f32, height: f32) -> UvRect {
        let du = self.u1 - self.u0;
        let dv = self.v1 - self.v0;
        let (width, height) = (width.max(1.0), height.max(1.0));
        UvRect {
            u0: self.u0 + region.x / width * du,
            v0: self.v0 + region.y / height * dv,
            u1: self.u0 + region.right() / width * du,
            v1: self.v0 + region.bottom() / height * dv,
        }
    }
}

/// A texture that quads can be drawn from.
pub trait Texture: Send + Sync {
    /// Identity used for texture batch compatibility.
    fn id(&self) -> TextureId;

    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Normalized UV bounds of the current binding.
    fn uv(&self) -> UvRect {
        UvRect::FULL
    }
}

/// Shared handle to a texture.
pub type TextureHandle = Arc<dyn Texture>;
