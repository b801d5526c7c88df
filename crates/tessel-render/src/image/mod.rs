//! Image rendering modes.
//!
//! An [`ImageMode`] decides which quads one logical image draw turns into.
//! Modes come from user-authored configuration strings:
//!
//! | String | Mode |
//! |---|---|
//! | `normal` (or empty) | whole image stretched over the target |
//! | `subImage:x,y,w,h` | the given pixel region stretched over the target |
//! | `resize:<nine-patch>` | nine-patch stretching, see [`NinePatch`] |
//! | `repeat:x,y,w,h` | the given tile repeated across the target |
//!
//! [`ImageMode::from_config`] never fails: malformed strings are logged and
//! render as `normal`.

mod nine_patch;
mod renderer;

pub use nine_patch::NinePatch;
pub use renderer::ImageRenderer;

use std::fmt;
use std::str::FromStr;

use tessel_core::geometry::Rect;
use tessel_core::profiling::profile_function;

use crate::Color;
use crate::error::{ImageModeError, ImageModeResult};
use crate::texture::TextureHandle;

const NORMAL: &str = "normal";
const SUB_IMAGE_PREFIX: &str = "subImage:";
const RESIZE_PREFIX: &str = "resize:";
const REPEAT_PREFIX: &str = "repeat:";

const BOX_ARGS_COUNT: usize = 4;

/// How an image is mapped onto its target rectangle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageMode {
    /// The whole image, stretched.
    #[default]
    Normal,
    /// A pixel region of the image, stretched.
    SubImage(Rect<i32>),
    /// Nine-patch stretching.
    Resize(NinePatch),
    /// A pixel region tiled across the target, row by row.
    Repeat(Rect<i32>),
}

impl ImageMode {
    /// Parse a mode string, reporting any problem.
    pub fn parse(mode: &str) -> ImageModeResult<Self> {
        let mode = mode.trim();
        if mode.is_empty() || mode == NORMAL {
            Ok(ImageMode::Normal)
        } else if let Some(args) = mode.strip_prefix(SUB_IMAGE_PREFIX) {
            parse_box(mode, args).map(ImageMode::SubImage)
        } else if let Some(definition) = mode.strip_prefix(RESIZE_PREFIX) {
            if definition.trim().is_empty() {
                return Err(ImageModeError::MissingArguments {
                    mode: mode.to_string(),
                });
            }
            NinePatch::parse(definition).map(ImageMode::Resize)
        } else if let Some(args) = mode.strip_prefix(REPEAT_PREFIX) {
            let tile = parse_box(mode, args)?;
            if tile.is_empty() {
                return Err(ImageModeError::EmptyTile {
                    mode: mode.to_string(),
                });
            }
            Ok(ImageMode::Repeat(tile))
        } else {
            Err(ImageModeError::UnknownMode {
                mode: mode.to_string(),
            })
        }
    }

    /// Parse a mode string from configuration, falling back to
    /// [`ImageMode::Normal`] with a warning when it is malformed.
    pub fn from_config(mode: &str) -> Self {
        match Self::parse(mode) {
            Ok(mode) => mode,
            Err(err) => {
                tracing::warn!("{}; using normal image mode", err);
                ImageMode::Normal
            }
        }
    }

    /// Emit the quads for drawing `image` into `dest`.
    ///
    /// `scale` is applied around the center of `dest` for every emitted quad.
    pub fn render<R: ImageRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        image: &TextureHandle,
        dest: Rect<i32>,
        color: Color,
        scale: f32,
    ) {
        profile_function!();
        match self {
            ImageMode::Normal => renderer.render_image(image, dest, color, scale),
            ImageMode::SubImage(source) => {
                renderer.render_image_region(image, dest, *source, color, scale, dest.center())
            }
            ImageMode::Resize(patch) => patch.render(renderer, image, dest, color, scale),
            ImageMode::Repeat(tile) => render_repeat(renderer, image, *tile, dest, color, scale),
        }
    }
}

impl FromStr for ImageMode {
    type Err = ImageModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ImageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageMode::Normal => f.write_str(NORMAL),
            ImageMode::SubImage(r) => write!(
                f,
                "{}{},{},{},{}",
                SUB_IMAGE_PREFIX, r.x, r.y, r.width, r.height
            ),
            ImageMode::Resize(patch) => write!(f, "{}{}", RESIZE_PREFIX, patch),
            ImageMode::Repeat(r) => write!(
                f,
                "{}{},{},{},{}",
                REPEAT_PREFIX, r.x, r.y, r.width, r.height
            ),
        }
    }
}

/// Split a comma separated argument list, trimming each argument.
///
/// Trailing empty arguments are dropped, so `"1,2,3,4,"` has four.
fn split_args(args: &str) -> Vec<&str> {
    let mut args: Vec<&str> = args.split(',').map(str::trim).collect();
    while args.last().is_some_and(|arg| arg.is_empty()) {
        args.pop();
    }
    args
}

fn parse_box(mode: &str, args: &str) -> ImageModeResult<Rect<i32>> {
    if args.trim().is_empty() {
        return Err(ImageModeError::MissingArguments {
            mode: mode.to_string(),
        });
    }

    let args = split_args(args);
    if args.len() != BOX_ARGS_COUNT {
        return Err(ImageModeError::WrongArgumentCount {
            mode: mode.to_string(),
            expected: BOX_ARGS_COUNT,
            found: args.len(),
        });
    }

    let mut values = [0i32; BOX_ARGS_COUNT];
    for (value, arg) in values.iter_mut().zip(&args) {
        *value = arg.parse().map_err(|_| ImageModeError::InvalidNumber {
            mode: mode.to_string(),
            argument: arg.to_string(),
        })?;
    }

    let [x, y, width, height] = values;
    Ok(Rect::new(x, y, width, height))
}

/// Tile `tile` across `dest` top-to-bottom, left-to-right.
///
/// Full tiles fill `dest.width / tile.width` columns and
/// `dest.height / tile.height` rows; a clipped tile covers the remainder on
/// each axis when it is non-zero.
fn render_repeat<R: ImageRenderer + ?Sized>(
    renderer: &mut R,
    image: &TextureHandle,
    tile: Rect<i32>,
    dest: Rect<i32>,
    color: Color,
    scale: f32,
) {
    if dest.is_empty() || tile.is_empty() {
        return;
    }

    let center = dest.center();
    let columns = dest.width / tile.width;
    let rows = dest.height / tile.height;
    let partial_width = dest.width % tile.width;
    let partial_height = dest.height % tile.height;

    let mut row_heights = vec![tile.height; rows as usize];
    if partial_height != 0 {
        row_heights.push(partial_height);
    }

    for (row, height) in row_heights.into_iter().enumerate() {
        let y = dest.y + row as i32 * tile.height;

        for column in 0..columns {
            let target = Rect::new(dest.x + column * tile.width, y, tile.width, height);
            let source = Rect::new(tile.x, tile.y, tile.width, height);
            renderer.render_image_region(image, target, source, color, scale, center);
        }

        if partial_width != 0 {
            let target = Rect::new(dest.right() - partial_width, y, partial_width, height);
            let source = Rect::new(tile.x, tile.y, partial_width, height);
            renderer.render_image_region(image, target, source, color, scale, center);
        }
    }
}
