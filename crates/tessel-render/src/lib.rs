//! Tessel Render
//!
//! Turns immediate-mode 2D draw calls (textured quads, color quads, linear
//! gradient quads, blend mode changes and custom shader markers) into the
//! smallest ordered list of batches that still reproduces the requested
//! stacking order.
//!
//! # Frame lifecycle
//!
//! ```
//! use std::sync::Arc;
//! use tessel_core::geometry::Rect;
//! use tessel_render::{BatchManager, Color, ImageMode, Texture, TextureId};
//!
//! struct Atlas;
//!
//! impl Texture for Atlas {
//!     fn id(&self) -> TextureId { TextureId(1) }
//!     fn width(&self) -> u32 { 256 }
//!     fn height(&self) -> u32 { 256 }
//! }
//!
//! let atlas: tessel_render::TextureHandle = Arc::new(Atlas);
//! let mode = ImageMode::from_config("repeat:0,0,32,32");
//!
//! let mut batches = BatchManager::new();
//! batches.begin();
//! batches.add_color_quad(0.0, 0.0, 100.0, 100.0, Color::BLACK);
//! mode.render(&mut batches, &atlas, Rect::new(0, 0, 64, 64), Color::WHITE, 1.0);
//!
//! // blend mode, background, one batch holding all four tiles
//! assert_eq!(batches.batches().len(), 3);
//! assert_eq!(batches.stats().quad_count, 5);
//! ```
//!
//! The finished sequence is handed to a [`RenderDevice`] with
//! [`BatchManager::end`].
//!
//! # Threading
//!
//! A `BatchManager` is driven by one thread for the duration of a frame.
//! Hosts rendering from several threads must synchronize access themselves.

pub mod batch;
pub mod blend;
pub mod color;
pub mod config;
pub mod device;
pub mod error;
pub mod gradient;
pub mod image;
pub mod manager;
pub mod texture;
pub mod vertex;

pub use batch::{Batch, BatchKind};
pub use blend::BlendMode;
pub use color::Color;
pub use config::{BatchConfig, DEFAULT_QUAD_CAPACITY, MAX_QUAD_CAPACITY};
pub use device::RenderDevice;
pub use error::{ConfigError, ImageModeError, ImageModeResult};
pub use gradient::{GradientStop, LinearGradient};
pub use image::{ImageMode, ImageRenderer, NinePatch};
pub use manager::{BatchManager, BatchStats};
pub use texture::{Texture, TextureHandle, TextureId, UvRect};
pub use vertex::{ColorVertex, GradientVertex, TextureVertex};
