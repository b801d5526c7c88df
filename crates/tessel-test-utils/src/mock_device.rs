//! Mock implementation of RenderDevice for testing.
//!
//! Records every call the batch manager makes, in order, without touching a
//! GPU.

use parking_lot::Mutex;
use tessel_render::{
    BlendMode, ColorVertex, GradientVertex, LinearGradient, RenderDevice, TextureHandle,
    TextureId, TextureVertex,
};

/// One recorded device call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    Begin,
    End,
    ChangeBlendMode(BlendMode),
    ActivateCustomShader(String),
    TextureQuads {
        texture: TextureId,
        vertices: Vec<TextureVertex>,
    },
    ColorQuads {
        vertices: Vec<ColorVertex>,
    },
    LinearGradientQuads {
        gradient: LinearGradient,
        vertices: Vec<GradientVertex>,
    },
}

impl RenderCall {
    /// Whether this call draws geometry.
    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            RenderCall::TextureQuads { .. }
                | RenderCall::ColorQuads { .. }
                | RenderCall::LinearGradientQuads { .. }
        )
    }

    /// Number of quads drawn by this call.
    pub fn quad_count(&self) -> usize {
        match self {
            RenderCall::TextureQuads { vertices, .. } => vertices.len() / 4,
            RenderCall::ColorQuads { vertices } => vertices.len() / 4,
            RenderCall::LinearGradientQuads { vertices, .. } => vertices.len() / 4,
            _ => 0,
        }
    }
}

/// Mock implementation of [`RenderDevice`] for testing.
///
/// # Borrow Checking Pattern: Interior Mutability
///
/// `RenderDevice` methods take `&self` but the mock must record calls, so the
/// log lives behind a `parking_lot::Mutex`.
#[derive(Debug, Default)]
pub struct MockRenderDevice {
    calls: Mutex<Vec<RenderCall>>,
}

impl MockRenderDevice {
    /// Create a new mock render device.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().clone()
    }

    /// Count calls that draw geometry.
    pub fn count_draw_calls(&self) -> usize {
        self.calls.lock().iter().filter(|call| call.is_draw()).count()
    }

    /// Count blend mode changes.
    pub fn count_blend_mode_changes(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, RenderCall::ChangeBlendMode(_)))
            .count()
    }

    /// Total quads drawn across all calls.
    pub fn quad_count(&self) -> usize {
        self.calls.lock().iter().map(RenderCall::quad_count).sum()
    }

    /// Clear recorded calls (useful between frames).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Get total number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    fn record(&self, call: RenderCall) {
        self.calls.lock().push(call);
    }
}

impl RenderDevice for MockRenderDevice {
    fn begin(&self) {
        self.record(RenderCall::Begin);
    }

    fn end(&self) {
        self.record(RenderCall::End);
    }

    fn change_blend_mode(&self, mode: BlendMode) {
        self.record(RenderCall::ChangeBlendMode(mode));
    }

    fn activate_custom_shader(&self, shader_id: &str) {
        self.record(RenderCall::ActivateCustomShader(shader_id.to_string()));
    }

    fn render_texture_quads(&self, texture: &TextureHandle, vertices: &[TextureVertex]) {
        self.record(RenderCall::TextureQuads {
            texture: texture.id(),
            vertices: vertices.to_vec(),
        });
    }

    fn render_color_quads(&self, vertices: &[ColorVertex]) {
        self.record(RenderCall::ColorQuads {
            vertices: vertices.to_vec(),
        });
    }

    fn render_linear_gradient_quads(&self, gradient: &LinearGradient, vertices: &[GradientVertex]) {
        self.record(RenderCall::LinearGradientQuads {
            gradient: gradient.clone(),
            vertices: vertices.to_vec(),
        });
    }
}
