use super::{QuadCapacity, reserved_vertices};
use crate::device::RenderDevice;
use crate::gradient::LinearGradient;
use crate::vertex::GradientVertex;

/// Quads filled with one resolved linear gradient.
#[derive(Debug)]
pub struct LinearGradientBatch {
    gradient: LinearGradient,
    vertices: Vec<GradientVertex>,
    capacity: QuadCapacity,
}

impl LinearGradientBatch {
    /// Create an empty batch keyed on an already resolved `gradient`.
    pub fn new(gradient: LinearGradient, max_quads: usize) -> Self {
        Self {
            gradient,
            vertices: Vec::with_capacity(reserved_vertices(max_quads)),
            capacity: QuadCapacity::new(max_quads),
        }
    }

    pub fn gradient(&self) -> &LinearGradient {
        &self.gradient
    }

    /// Whether a quad with `gradient` could be appended right now.
    pub fn accepts(&self, gradient: &LinearGradient) -> bool {
        self.capacity.has_room() && self.gradient.same_parameters(gradient)
    }

    pub fn try_add(&mut self, gradient: &LinearGradient, x0: f32, y0: f32, x1: f32, y1: f32) -> bool {
        if !self.accepts(gradient) {
            return false;
        }
        self.vertices.extend_from_slice(&[
            GradientVertex { position: [x0, y0] },
            GradientVertex { position: [x1, y0] },
            GradientVertex { position: [x1, y1] },
            GradientVertex { position: [x0, y1] },
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

    pub fn vertices(&self) -> &[GradientVertex] {
        &self.vertices
    }

    pub(super) fn render(&self, device: &dyn RenderDevice) {
        device.render_linear_gradient_quads(&self.gradient, &self.vertices);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn test_rejects_different_gradient() {
        let g = LinearGradient::horizontal().with_stop(0.0, Color::RED);
        let other = LinearGradient::horizontal().with_stop(0.0, Color::BLUE);

        let mut batch = LinearGradientBatch::new(g.clone(), 4);
        assert!(batch.try_add(&g, 0.0, 0.0, 1.0, 1.0));
        assert!(!batch.try_add(&other, 0.0, 0.0, 1.0, 1.0));
        assert_eq!(batch.quad_count(), 1);
    }
}
