//! Batch capacity configuration.

use crate::batch::BatchKind;
use crate::error::ConfigError;

/// Default number of quads a single batch may hold.
pub const DEFAULT_QUAD_CAPACITY: usize = 2048;

/// Largest number of quads a single batch may be configured to hold.
///
/// Batches reserve their full vertex storage up front, and a batch must stay
/// addressable with 32-bit vertex indices.
pub const MAX_QUAD_CAPACITY: usize = 1 << 16;

/// Per-variant batch capacities, in quads.
///
/// A full batch is not an error: the manager simply opens the next one.
/// Smaller capacities produce more, smaller device submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    /// Capacity of textured quad batches.
    pub texture_quads: usize,
    /// Capacity of color quad batches.
    pub color_quads: usize,
    /// Capacity of linear gradient quad batches.
    pub gradient_quads: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::uniform(DEFAULT_QUAD_CAPACITY)
    }
}

impl BatchConfig {
    /// Same capacity for every quad batch kind.
    pub const fn uniform(capacity: usize) -> Self {
        Self {
            texture_quads: capacity,
            color_quads: capacity,
            gradient_quads: capacity,
        }
    }

    pub fn with_texture_quads(mut self, capacity: usize) -> Self {
        self.texture_quads = capacity;
        self
    }

    pub fn with_color_quads(mut self, capacity: usize) -> Self {
        self.color_quads = capacity;
        self
    }

    pub fn with_gradient_quads(mut self, capacity: usize) -> Self {
        self.gradient_quads = capacity;
        self
    }

    /// Reject capacities that could never accept a quad or exceed
    /// [`MAX_QUAD_CAPACITY`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = [
            (BatchKind::TextureQuads, self.texture_quads),
            (BatchKind::ColorQuads, self.color_quads),
            (BatchKind::LinearGradientQuads, self.gradient_quads),
        ];
        for (kind, capacity) in limits {
            if capacity == 0 {
                return Err(ConfigError::ZeroCapacity { kind });
            }
            if capacity > MAX_QUAD_CAPACITY {
                return Err(ConfigError::CapacityTooLarge {
                    kind,
                    capacity,
                    max: MAX_QUAD_CAPACITY,
                });
            }
        }
        Ok(())
    }
}
