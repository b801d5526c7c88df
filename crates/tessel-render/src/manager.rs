//! Frame-scoped batch construction.
//!
//! The [`BatchManager`] turns a stream of immediate-mode draw calls into an
//! ordered list of batches. A draw only ever merges into the *last* batch of
//! the sequence: merging further back would hoist it above whatever was
//! drawn in between and break painter's-algorithm ordering. When the last
//! batch is missing, of another kind, keyed differently or full, a new batch
//! is opened and the draw is retried once.

use std::fmt;
use std::sync::Arc;

use glam::{Mat4, Vec2};
use tessel_core::alloc::HashSet;
use tessel_core::geometry::Rect;
use tessel_core::profiling::{profile_function, profile_scope};

use crate::batch::{
    Batch, BatchKind, BlendModeBatch, ColorQuadBatch, CustomShaderBatch, LinearGradientBatch,
    TextureBatch, TexturedQuad,
};
use crate::config::BatchConfig;
use crate::device::RenderDevice;
use crate::error::ConfigError;
use crate::gradient::LinearGradient;
use crate::texture::{TextureHandle, UvRect};
use crate::{BlendMode, Color};

/// Per-frame batching statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Total number of batches in the sequence.
    pub batch_count: usize,
    /// Number of blend mode changes, including the one opening the frame.
    pub blend_mode_changes: usize,
    /// Number of custom shader activations.
    pub custom_shaders: usize,
    pub texture_batches: usize,
    pub color_batches: usize,
    pub gradient_batches: usize,
    /// Total number of quads across all batches.
    pub quad_count: usize,
    /// Number of distinct textures bound.
    pub texture_count: usize,
}

impl BatchStats {
    /// Number of device draw calls the frame will issue.
    pub fn draw_calls(&self) -> usize {
        self.texture_batches + self.color_batches + self.gradient_batches
    }
}

impl fmt::Display for BatchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} batches ({} draw calls, {} state changes), {} quads, {} textures",
            self.batch_count,
            self.draw_calls(),
            self.blend_mode_changes + self.custom_shaders,
            self.quad_count,
            self.texture_count
        )
    }
}

/// Builds the ordered batch sequence for one frame.
///
/// Call [`begin`](Self::begin), any number of `add_*` / state calls, then
/// [`end`](Self::end) to replay the batches to a [`RenderDevice`].
///
/// ```
/// use tessel_render::{BatchManager, BatchKind, BlendMode, Color};
///
/// let mut batches = BatchManager::new();
/// batches.begin();
/// batches.add_color_quad(0.0, 0.0, 10.0, 10.0, Color::RED);
/// batches.add_color_quad(10.0, 0.0, 20.0, 10.0, Color::BLUE);
/// batches.change_blend_mode(BlendMode::Multiply);
///
/// let kinds: Vec<_> = batches.batches().iter().map(|b| b.kind()).collect();
/// assert_eq!(
///     kinds,
///     [BatchKind::BlendModeChange, BatchKind::ColorQuads, BatchKind::BlendModeChange]
/// );
/// ```
#[derive(Debug, Default)]
pub struct BatchManager {
    config: BatchConfig,
    batches: Vec<Batch>,
}

impl BatchManager {
    /// Create a manager with the default capacities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager with custom capacities.
    pub fn with_config(config: BatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            batches: Vec::new(),
        })
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// The batches recorded since the last [`begin`](Self::begin).
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    /// Start a new frame.
    ///
    /// Discards every batch of the previous frame and opens the sequence with
    /// an alpha-blend mode change, so each frame starts from a known state.
    pub fn begin(&mut self) {
        profile_function!();
        self.batches.clear();
        self.change_blend_mode(BlendMode::Blend);
    }

    /// Record a blend mode change.
    ///
    /// Never merged: two identical requests in a row yield two batches.
    pub fn change_blend_mode(&mut self, mode: BlendMode) {
        self.push(Batch::BlendModeChange(BlendModeBatch::new(mode)));
    }

    /// Record a custom shader activation. Never merged.
    pub fn add_custom_shader(&mut self, shader_id: impl Into<String>) {
        self.push(Batch::CustomShader(CustomShaderBatch::new(shader_id)));
    }

    /// Draw the whole of `texture` at its pixel size, placed by `transform`.
    pub fn add_texture_quad(&mut self, texture: &TextureHandle, transform: &Mat4, color: Color) {
        let dest = Rect::new(0.0, 0.0, texture.width() as f32, texture.height() as f32);
        self.add_texture_quad_region(texture, transform, dest, texture.uv(), color);
    }

    /// Draw the `uv` region of `texture` into `dest`, placed by `transform`.
    pub fn add_texture_quad_region(
        &mut self,
        texture: &TextureHandle,
        transform: &Mat4,
        dest: Rect<f32>,
        uv: UvRect,
        color: Color,
    ) {
        let quad = TexturedQuad {
            dest,
            uv,
            transform: *transform,
            color,
        };
        let id = texture.id();

        if let Some(Batch::TextureQuads(batch)) = self.batches.last_mut()
            && batch.try_add(id, &quad)
        {
            return;
        }

        let mut batch = TextureBatch::new(Arc::clone(texture), self.config.texture_quads);
        if !batch.try_add(id, &quad) {
            fresh_batch_rejected(BatchKind::TextureQuads);
        }
        self.push(Batch::TextureQuads(batch));
    }

    /// Draw a gradient-filled quad spanning `(x0, y0)`-`(x1, y1)`.
    ///
    /// `gradient` is relative to the quad; it is resolved into absolute
    /// coordinates first and the resolved descriptor is the merge key.
    pub fn add_linear_gradient_quad(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        gradient: &LinearGradient,
    ) {
        let resolved = gradient.resolve(Vec2::new(x0, y0), Vec2::new(x1, y1));

        if let Some(Batch::LinearGradientQuads(batch)) = self.batches.last_mut()
            && batch.try_add(&resolved, x0, y0, x1, y1)
        {
            return;
        }

        let mut batch = LinearGradientBatch::new(resolved.clone(), self.config.gradient_quads);
        if !batch.try_add(&resolved, x0, y0, x1, y1) {
            fresh_batch_rejected(BatchKind::LinearGradientQuads);
        }
        self.push(Batch::LinearGradientQuads(batch));
    }

    /// Draw a single-color quad spanning `(x0, y0)`-`(x1, y1)`.
    pub fn add_color_quad(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
        self.add_color_quad_corners(x0, y0, x1, y1, [color; 4]);
    }

    /// Draw a quad with per-corner colors.
    ///
    /// `corners` are top-left, top-right, bottom-right, bottom-left.
    pub fn add_color_quad_corners(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        corners: [Color; 4],
    ) {
        if let Some(Batch::ColorQuads(batch)) = self.batches.last_mut()
            && batch.try_add(x0, y0, x1, y1, corners)
        {
            return;
        }

        let mut batch = ColorQuadBatch::new(self.config.color_quads);
        if !batch.try_add(x0, y0, x1, y1, corners) {
            fresh_batch_rejected(BatchKind::ColorQuads);
        }
        self.push(Batch::ColorQuads(batch));
    }

    /// Replay every batch to `device`, in sequence order.
    pub fn end(&self, device: &dyn RenderDevice) {
        profile_function!();
        device.begin();
        {
            profile_scope!("replay_batches");
            for batch in &self.batches {
                batch.render(device);
            }
        }
        device.end();
        tracing::debug!("frame submitted: {}", self.stats());
    }

    /// Statistics for the batches recorded so far.
    pub fn stats(&self) -> BatchStats {
        let mut stats = BatchStats {
            batch_count: self.batches.len(),
            ..Default::default()
        };
        let mut textures = HashSet::new();

        for batch in &self.batches {
            stats.quad_count += batch.quad_count();
            match batch {
                Batch::BlendModeChange(_) => stats.blend_mode_changes += 1,
                Batch::CustomShader(_) => stats.custom_shaders += 1,
                Batch::TextureQuads(b) => {
                    stats.texture_batches += 1;
                    textures.insert(b.texture_id());
                }
                Batch::ColorQuads(_) => stats.color_batches += 1,
                Batch::LinearGradientQuads(_) => stats.gradient_batches += 1,
            }
        }

        stats.texture_count = textures.len();
        stats
    }

    fn push(&mut self, batch: Batch) {
        let kind = batch.kind();
        self.batches.push(batch);
        tracing::trace!(
            "new {} batch added. total batch count now: {}",
            kind,
            self.batches.len()
        );
    }
}

/// A batch that was just created refused its first quad.
///
/// Capacities are validated up front, so this is a defect in the merge logic
/// and rendering must not continue with a corrupted draw order.
#[cold]
#[track_caller]
fn fresh_batch_rejected(kind: BatchKind) -> ! {
    panic!("created a new {kind} batch but couldn't add any data to it; this should never happen")
}
