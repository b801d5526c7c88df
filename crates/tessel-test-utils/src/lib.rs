//! Test utilities for the Tessel batching engine.
//!
//! # Overview
//!
//! - [`MockTexture`] - a texture with a fixed id and size
//! - `MockRenderDevice` - a [`RenderDevice`](tessel_render::RenderDevice)
//!   that records every call instead of drawing (requires `mock` feature)
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use tessel_render::{BatchManager, Color};
//! use tessel_test_utils::{MockRenderDevice, RenderCall};
//!
//! let device = MockRenderDevice::new();
//! let mut batches = BatchManager::new();
//! batches.begin();
//! batches.add_color_quad(0.0, 0.0, 8.0, 8.0, Color::RED);
//! batches.end(&device);
//!
//! assert_eq!(device.count_draw_calls(), 1);
//! assert!(matches!(device.calls().first(), Some(RenderCall::Begin)));
//! # }
//! ```
//!
//! # Design
//!
//! `RenderDevice` methods take `&self`, so the mock records through a
//! `parking_lot::Mutex` and can be inspected after `end` returns.

#[cfg(feature = "mock")]
pub mod mock_device;
pub mod mock_texture;

#[cfg(feature = "mock")]
pub use mock_device::*;
pub use mock_texture::*;
