use std::sync::Arc;

use tessel_render::{Texture, TextureHandle, TextureId, UvRect};

/// A texture that only carries identity, size and UV bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockTexture {
    pub id: u64,
    pub width: u32,
    pub height: u32,
    pub uv: UvRect,
}

impl MockTexture {
    /// A standalone texture covering its whole binding.
    pub fn new(id: u64, width: u32, height: u32) -> Self {
        Self {
            id,
            width,
            height,
            uv: UvRect::FULL,
        }
    }

    /// A texture living in the `uv` region of an atlas page.
    pub fn in_atlas(id: u64, width: u32, height: u32, uv: UvRect) -> Self {
        Self {
            id,
            width,
            height,
            uv,
        }
    }

    /// Wrap into a shared handle.
    pub fn handle(self) -> TextureHandle {
        Arc::new(self)
    }
}

impl Texture for MockTexture {
    fn id(&self) -> TextureId {
        TextureId(self.id)
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn uv(&self) -> UvRect {
        self.uv
    }
}
