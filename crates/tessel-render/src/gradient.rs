//! Linear gradient descriptors.
//!
//! A gradient is authored relative to the quad it fills (endpoints in the
//! `0.0..=1.0` range of the quad's bounding box) and resolved into absolute
//! coordinates when the quad is added to a batch. Gradient batches key on the
//! resolved descriptor, since devices bake the interpolation parameters per
//! batch rather than per vertex.

use glam::Vec2;

use crate::Color;

/// A color stop in a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient axis (0.0 to 1.0)
    pub offset: f32,
    /// Color at this stop
    pub color: Color,
}

impl GradientStop {
    /// Create a new gradient stop. The offset is clamped to `0.0..=1.0`.
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }

    fn bit_eq(&self, other: &GradientStop) -> bool {
        self.offset.to_bits() == other.offset.to_bits() && self.color.bit_eq(&other.color)
    }
}

/// A linear gradient between two endpoints with ordered color stops.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    /// Start point of the gradient axis
    pub start: Vec2,
    /// End point of the gradient axis
    pub end: Vec2,
    /// Color stops in insertion order
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Create a gradient with no stops.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self {
            start,
            end,
            stops: Vec::new(),
        }
    }

    /// Create a gradient from relative endpoint coordinates.
    pub fn from_coords(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    /// Top-to-bottom gradient in relative coordinates.
    pub fn vertical() -> Self {
        Self::from_coords(0.0, 0.0, 0.0, 1.0)
    }

    /// Left-to-right gradient in relative coordinates.
    pub fn horizontal() -> Self {
        Self::from_coords(0.0, 0.0, 1.0, 0.0)
    }

    /// Append a color stop, builder style.
    pub fn with_stop(mut self, offset: f32, color: Color) -> Self {
        self.add_stop(offset, color);
        self
    }

    /// Append a color stop.
    pub fn add_stop(&mut self, offset: f32, color: Color) {
        self.stops.push(GradientStop::new(offset, color));
    }

    /// Append all stops from `stops`, keeping their order.
    pub fn add_stops(&mut self, stops: &[GradientStop]) {
        self.stops.extend_from_slice(stops);
    }

    /// Map relative endpoints into the box spanned by `origin` and `corner`.
    ///
    /// Each endpoint becomes `origin + relative * (corner - origin)` per axis.
    /// Stops are carried over unchanged.
    pub fn resolve(&self, origin: Vec2, corner: Vec2) -> LinearGradient {
        let extent = corner - origin;
        LinearGradient {
            start: origin + self.start * extent,
            end: origin + self.end * extent,
            stops: self.stops.clone(),
        }
    }

    /// Bitwise structural equality of endpoints and the full stop list.
    ///
    /// This is the compatibility test for gradient batches.
    pub fn same_parameters(&self, other: &LinearGradient) -> bool {
        vec_bit_eq(self.start, other.start)
            && vec_bit_eq(self.end, other.end)
            && self.stops.len() == other.stops.len()
            && self
                .stops
                .iter()
                .zip(other.stops.iter())
                .all(|(a, b)| a.bit_eq(b))
    }

    /// Interpolate the color at `position` by projecting it onto the axis.
    pub fn sample(&self, position: Vec2) -> Color {
        match self.stops.as_slice() {
            [] => return Color::TRANSPARENT,
            [only] => return only.color,
            _ => {}
        }

        let dir = self.end - self.start;
        let len_sq = dir.length_squared();
        if len_sq < f32::EPSILON {
            return self.stops[0].color;
        }

        let t = ((position - self.start).dot(dir) / len_sq).clamp(0.0, 1.0);
        interpolate_stops(&self.stops, t)
    }
}

fn vec_bit_eq(a: Vec2, b: Vec2) -> bool {
    a.x.to_bits() == b.x.to_bits() && a.y.to_bits() == b.y.to_bits()
}

fn interpolate_stops(stops: &[GradientStop], t: f32) -> Color {
    let Some(first) = stops.first() else {
        return Color::TRANSPARENT;
    };
    if t <= first.offset {
        return first.color;
    }

    let mut prev = first;
    for stop in &stops[1..] {
        if t <= stop.offset {
            let range = stop.offset - prev.offset;
            if range < f32::EPSILON {
                return stop.color;
            }
            return prev.color.lerp(stop.color, (t - prev.offset) / range);
        }
        prev = stop;
    }

    // Past the last stop
    prev.color
}
