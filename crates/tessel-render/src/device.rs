//! The render device interface consumed at frame end.

use crate::BlendMode;
use crate::gradient::LinearGradient;
use crate::texture::TextureHandle;
use crate::vertex::{ColorVertex, GradientVertex, TextureVertex};

/// Backend that executes finished batches.
///
/// Only [`BatchManager::end`](crate::BatchManager::end) calls into a device:
/// `begin`, then one call per batch in sequence order, then `end`. Vertex
/// slices hold four vertices per quad (see [`crate::vertex`]).
///
/// Methods take `&self` so devices can be shared; implementations that record
/// or buffer state use interior mutability.
pub trait RenderDevice {
    /// Called once before the first batch of a frame.
    fn begin(&self);

    /// Called once after the last batch of a frame.
    fn end(&self);

    /// Switch the blend mode used by subsequent draws.
    fn change_blend_mode(&self, mode: BlendMode);

    /// Activate a custom shader for subsequent draws.
    fn activate_custom_shader(&self, shader_id: &str);

    /// Draw textured quads sampling `texture`.
    fn render_texture_quads(&self, texture: &TextureHandle, vertices: &[TextureVertex]);

    /// Draw untextured color quads.
    fn render_color_quads(&self, vertices: &[ColorVertex]);

    /// Draw quads filled with `gradient`, given in absolute coordinates.
    fn render_linear_gradient_quads(&self, gradient: &LinearGradient, vertices: &[GradientVertex]);
}
