use super::{QuadCapacity, reserved_vertices};
use crate::Color;
use crate::device::RenderDevice;
use crate::vertex::ColorVertex;

/// Untextured quads. Any two color quads are compatible.
#[derive(Debug)]
pub struct ColorQuadBatch {
    vertices: Vec<ColorVertex>,
    capacity: QuadCapacity,
}

impl ColorQuadBatch {
    pub fn new(max_quads: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(reserved_vertices(max_quads)),
            capacity: QuadCapacity::new(max_quads),
        }
    }

    /// Append the quad spanning `(x0, y0)`-`(x1, y1)`.
    ///
    /// `corners` are top-left, top-right, bottom-right, bottom-left.
    pub fn try_add(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, corners: [Color; 4]) -> bool {
        if !self.capacity.has_room() {
            return false;
        }
        let [tl, tr, br, bl] = corners;
        self.vertices.extend_from_slice(&[
            ColorVertex {
                position: [x0, y0],
                color: tl.to_array(),
            },
            ColorVertex {
                position: [x1, y0],
                color: tr.to_array(),
            },
            ColorVertex {
                position: [x1, y1],
                color: br.to_array(),
            },
            ColorVertex {
                position: [x0, y1],
                color: bl.to_array(),
            },
        ]);
        self.capacity.record();
        true
    }

    pub fn quad_count(&self) -> usize {
        self.capacity.quads
    }

    pub fn is_full(&self) -> bool {
        !self.capacity.has_room()
    }

    pub fn vertices(&self) -> &[ColorVertex] {
        &self.vertices
    }

    pub(super) fn render(&self, device: &dyn RenderDevice) {
        device.render_color_quads(&self.vertices);
    }
}
