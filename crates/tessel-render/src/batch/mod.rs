//! The five batch variants.
//!
//! A batch is a contiguous run of draw data that a device can issue with one
//! state configuration. Quad batches accumulate vertices until they are full
//! or an incompatible quad arrives; state batches (blend mode, custom
//! shader) hold exactly one value and are full from the moment they exist.
//!
//! Every `try_add` is all-or-nothing: a rejected quad leaves the batch
//! untouched.

mod color;
mod gradient;
mod state;
mod texture;

pub use color::ColorQuadBatch;
pub use gradient::LinearGradientBatch;
pub use state::{BlendModeBatch, CustomShaderBatch};
pub use texture::{TextureBatch, TexturedQuad};

use std::fmt;

use crate::config::MAX_QUAD_CAPACITY;
use crate::device::RenderDevice;
use crate::vertex::VERTICES_PER_QUAD;

/// Discriminant of a [`Batch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatchKind {
    BlendModeChange,
    TextureQuads,
    ColorQuads,
    LinearGradientQuads,
    CustomShader,
}

impl fmt::Display for BatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchKind::BlendModeChange => write!(f, "blend mode"),
            BatchKind::TextureQuads => write!(f, "texture quad"),
            BatchKind::ColorQuads => write!(f, "color quad"),
            BatchKind::LinearGradientQuads => write!(f, "linear gradient quad"),
            BatchKind::CustomShader => write!(f, "custom shader"),
        }
    }
}

/// One unit of work replayed to the render device.
#[derive(Debug)]
pub enum Batch {
    BlendModeChange(BlendModeBatch),
    TextureQuads(TextureBatch),
    ColorQuads(ColorQuadBatch),
    LinearGradientQuads(LinearGradientBatch),
    CustomShader(CustomShaderBatch),
}

impl Batch {
    pub fn kind(&self) -> BatchKind {
        match self {
            Batch::BlendModeChange(_) => BatchKind::BlendModeChange,
            Batch::TextureQuads(_) => BatchKind::TextureQuads,
            Batch::ColorQuads(_) => BatchKind::ColorQuads,
            Batch::LinearGradientQuads(_) => BatchKind::LinearGradientQuads,
            Batch::CustomShader(_) => BatchKind::CustomShader,
        }
    }

    /// Number of quads stored. Always zero for state batches.
    pub fn quad_count(&self) -> usize {
        match self {
            Batch::TextureQuads(b) => b.quad_count(),
            Batch::ColorQuads(b) => b.quad_count(),
            Batch::LinearGradientQuads(b) => b.quad_count(),
            Batch::BlendModeChange(_) | Batch::CustomShader(_) => 0,
        }
    }

    /// Whether the batch can take no more data of any kind.
    pub fn is_full(&self) -> bool {
        match self {
            Batch::TextureQuads(b) => b.is_full(),
            Batch::ColorQuads(b) => b.is_full(),
            Batch::LinearGradientQuads(b) => b.is_full(),
            Batch::BlendModeChange(_) | Batch::CustomShader(_) => true,
        }
    }

    /// Whether replaying this batch issues a draw call.
    pub fn is_draw(&self) -> bool {
        !matches!(self, Batch::BlendModeChange(_) | Batch::CustomShader(_))
    }

    /// Replay the batch against `device`.
    pub fn render(&self, device: &dyn RenderDevice) {
        match self {
            Batch::BlendModeChange(b) => b.render(device),
            Batch::TextureQuads(b) => b.render(device),
            Batch::ColorQuads(b) => b.render(device),
            Batch::LinearGradientQuads(b) => b.render(device),
            Batch::CustomShader(b) => b.render(device),
        }
    }
}

/// Vertex storage to reserve up front for a batch of `max_quads`.
///
/// Capped at [`MAX_QUAD_CAPACITY`]; a larger batch grows on demand.
fn reserved_vertices(max_quads: usize) -> usize {
    max_quads.min(MAX_QUAD_CAPACITY) * VERTICES_PER_QUAD
}

/// Quad bookkeeping shared by the three quad batch kinds.
#[derive(Debug, Clone, Copy)]
struct QuadCapacity {
    quads: usize,
    max_quads: usize,
}

impl QuadCapacity {
    fn new(max_quads: usize) -> Self {
        Self {
            quads: 0,
            max_quads,
        }
    }

    fn has_room(&self) -> bool {
        self.quads < self.max_quads
    }

    fn record(&mut self) {
        self.quads += 1;
    }
}
