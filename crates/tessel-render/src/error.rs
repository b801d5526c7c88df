//! Error types for batch configuration and image-mode parsing.

use std::fmt;

use crate::batch::BatchKind;

/// Errors produced while parsing an image-mode string.
///
/// Only the strict parser returns these. [`ImageMode::from_config`] logs them
/// and falls back to normal rendering.
///
/// [`ImageMode::from_config`]: crate::ImageMode::from_config
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageModeError {
    /// A recognized prefix was given without any arguments.
    MissingArguments {
        /// The full mode string.
        mode: String,
    },

    /// The argument list has the wrong length.
    WrongArgumentCount {
        mode: String,
        expected: usize,
        found: usize,
    },

    /// An argument is not an integer.
    InvalidNumber { mode: String, argument: String },

    /// A repeat tile with zero or negative extent.
    EmptyTile { mode: String },

    /// The prefix is not one of the supported modes.
    UnknownMode { mode: String },

    /// A resize definition that is not twelve non-negative integers.
    InvalidResize { definition: String, reason: String },
}

impl fmt::Display for ImageModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArguments { mode } => {
                write!(f, "image mode [{}] is missing its argument list", mode)
            }
            Self::WrongArgumentCount {
                mode,
                expected,
                found,
            } => write!(
                f,
                "image mode [{}] expects exactly {} arguments but got {}",
                mode, expected, found
            ),
            Self::InvalidNumber { mode, argument } => write!(
                f,
                "image mode [{}] has non-integer argument [{}]",
                mode, argument
            ),
            Self::EmptyTile { mode } => {
                write!(f, "image mode [{}] has an empty repeat tile", mode)
            }
            Self::UnknownMode { mode } => write!(f, "unknown image mode [{}]", mode),
            Self::InvalidResize { definition, reason } => {
                write!(f, "invalid resize definition [{}]: {}", definition, reason)
            }
        }
    }
}

impl std::error::Error for ImageModeError {}

/// Result type for image-mode parsing.
pub type ImageModeResult<T> = Result<T, ImageModeError>;

/// Errors in a [`BatchConfig`](crate::BatchConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A quad batch kind was configured to hold no quads at all.
    ZeroCapacity { kind: BatchKind },

    /// A quad batch kind was configured above the supported maximum.
    CapacityTooLarge {
        kind: BatchKind,
        capacity: usize,
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity { kind } => {
                write!(f, "{} batches must hold at least one quad", kind)
            }
            Self::CapacityTooLarge {
                kind,
                capacity,
                max,
            } => write!(
                f,
                "{} batches may hold at most {} quads, got {}",
                kind, max, capacity
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
