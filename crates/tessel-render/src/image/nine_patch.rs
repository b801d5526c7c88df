//! Nine-patch image stretching.
//!
//! The source image is cut into a 3x3 grid. Corners keep their source size,
//! edges stretch along one axis and the center stretches along both, so
//! borders stay crisp at any target size.
//!
//! A definition is twelve comma separated integers, one group of four per
//! row: `w1,w2,w3,h1,w4,w5,w6,h2,w7,w8,w9,h3`. Within a row the three values
//! are the left, middle and right column widths in source pixels and the
//! fourth is the row height. Rows are top, middle, bottom.

use std::fmt;

use tessel_core::geometry::{Rect, Size};

use super::renderer::ImageRenderer;
use crate::Color;
use crate::error::{ImageModeError, ImageModeResult};
use crate::texture::TextureHandle;

const DEFINITION_VALUES: usize = 12;

/// One horizontal band of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PatchRow {
    left: i32,
    middle: i32,
    right: i32,
    height: i32,
}

/// A parsed nine-patch definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NinePatch {
    definition: String,
    rows: [PatchRow; 3],
}

impl NinePatch {
    /// Parse a definition such as `"6,2,6,6,6,2,6,2,6,2,6,6"`.
    pub fn parse(definition: &str) -> ImageModeResult<Self> {
        let invalid = |reason: String| ImageModeError::InvalidResize {
            definition: definition.to_string(),
            reason,
        };

        let values = super::split_args(definition)
            .into_iter()
            .map(|arg| match arg.parse::<i32>() {
                Ok(value) if value >= 0 => Ok(value),
                _ => Err(invalid(format!("[{}] is not a non-negative integer", arg))),
            })
            .collect::<ImageModeResult<Vec<i32>>>()?;

        if values.len() != DEFINITION_VALUES {
            return Err(invalid(format!(
                "expected {} values but got {}",
                DEFINITION_VALUES,
                values.len()
            )));
        }

        let row = |i: usize| PatchRow {
            left: values[i * 4],
            middle: values[i * 4 + 1],
            right: values[i * 4 + 2],
            height: values[i * 4 + 3],
        };

        let rows = [row(0), row(1), row(2)];

        // Source offsets are sums of widths and heights, so they must fit i32.
        for (i, r) in rows.iter().enumerate() {
            if checked_sum([r.left, r.middle, r.right]).is_none() {
                return Err(invalid(format!("row {} is wider than {}", i + 1, i32::MAX)));
            }
        }
        if checked_sum(rows.map(|r| r.height)).is_none() {
            return Err(invalid(format!("rows are taller than {}", i32::MAX)));
        }

        Ok(Self {
            definition: definition.to_string(),
            rows,
        })
    }

    /// The definition text exactly as given.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Emit the up to nine regions covering `dest`.
    ///
    /// Regions with an empty source or destination are skipped.
    pub fn render<R: ImageRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        image: &TextureHandle,
        dest: Rect<i32>,
        color: Color,
        scale: f32,
    ) {
        let center = dest.center();
        let [top, middle, bottom] = self.rows;

        // Destination edges combine caller coordinates with definition sizes
        // and saturate instead of overflowing.
        let middle_height = dest
            .height
            .saturating_sub(top.height)
            .saturating_sub(bottom.height);
        let bands = [
            (top, 0, dest.y, top.height),
            (
                middle,
                top.height,
                dest.y.saturating_add(top.height),
                middle_height,
            ),
            (
                bottom,
                top.height + middle.height,
                dest.bottom().saturating_sub(bottom.height),
                bottom.height,
            ),
        ];

        for (row, src_y, dest_y, dest_height) in bands {
            let middle_width = dest.width.saturating_sub(row.left).saturating_sub(row.right);
            let cells = [
                (0, row.left, dest.x, row.left),
                (
                    row.left,
                    row.middle,
                    dest.x.saturating_add(row.left),
                    middle_width,
                ),
                (
                    row.left + row.middle,
                    row.right,
                    dest.right().saturating_sub(row.right),
                    row.right,
                ),
            ];

            for (src_x, src_width, dest_x, dest_width) in cells {
                let source = Rect::new(src_x, src_y, src_width, row.height);
                let target = Rect::new(dest_x, dest_y, dest_width, dest_height);
                if source.is_empty() || target.is_empty() {
                    continue;
                }
                renderer.render_image_region(image, target, source, color, scale, center);
            }
        }
    }

    /// Minimum destination size at which no region is squeezed to zero.
    pub fn min_size(&self) -> Size<i32> {
        let width = self
            .rows
            .iter()
            .map(|r| r.left + r.right)
            .max()
            .unwrap_or(0);
        let [top, _, bottom] = self.rows;
        Size::new(width, top.height + bottom.height)
    }
}

fn checked_sum(values: [i32; 3]) -> Option<i32> {
    values.into_iter().try_fold(0i32, i32::checked_add)
}

impl fmt::Display for NinePatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::testing::{RecordingRenderer, test_image};
    use tessel_core::geometry::Pos;

    #[test]
    fn test_parse() {
        let patch = NinePatch::parse("6,2,6,6, 6,2,6,2, 6,2,6,6").unwrap();
        assert_eq!(patch.definition(), "6,2,6,6, 6,2,6,2, 6,2,6,6");
        assert_eq!(patch.min_size(), Size::new(12, 12));
    }

    #[test]
    fn test_render_nine_regions() {
        let patch = NinePatch::parse("4,2,4,4,4,2,4,2,4,2,4,4").unwrap();
        let mut recorder = RecordingRenderer::default();
        patch.render(
            &mut recorder,
            &test_image(),
            Rect::new(100, 50, 40, 30),
            Color::WHITE,
            1.0,
        );

        let regions = recorder.regions();
        assert_eq!(regions.len(), 9);
        // top-left corner keeps its source size
        assert_eq!(regions[0], (Rect::new(100, 50, 4, 4), Rect::new(0, 0, 4, 4)));
        // top edge stretches horizontally
        assert_eq!(regions[1], (Rect::new(104, 50, 32, 4), Rect::new(4, 0, 2, 4)));
        // center stretches both ways
        assert_eq!(regions[4], (Rect::new(104, 54, 32, 22), Rect::new(4, 4, 2, 2)));
        // bottom-right corner is anchored to the far edges
        assert_eq!(regions[8], (Rect::new(136, 76, 4, 4), Rect::new(6, 6, 4, 4)));
        assert!(recorder.calls.iter().all(|c| c.center == Pos::new(120, 65)));
    }

    #[test]
    fn test_render_skips_empty_regions() {
        let patch = NinePatch::parse("0,8,0,0,0,8,0,8,0,8,0,0").unwrap();
        let mut recorder = RecordingRenderer::default();
        patch.render(
            &mut recorder,
            &test_image(),
            Rect::new(0, 0, 20, 20),
            Color::WHITE,
            1.0,
        );
        assert_eq!(
            recorder.regions(),
            [(Rect::new(0, 0, 20, 20), Rect::new(0, 0, 8, 8))]
        );
    }

    #[test]
    fn test_parse_rejects_wrong_count() {
        let err = NinePatch::parse("1,2,3").unwrap_err();
        assert!(matches!(err, ImageModeError::InvalidResize { .. }));
    }

    #[test]
    fn test_parse_rejects_overflowing_sums() {
        let err = NinePatch::parse("0,0,0,2147483647,0,0,0,0,0,0,0,2147483647").unwrap_err();
        assert!(matches!(err, ImageModeError::InvalidResize { .. }));
        assert!(NinePatch::parse("2147483647,1,0,0,0,0,0,0,0,0,0,0").is_err());
        assert!(NinePatch::parse("2147483647,0,0,0,0,0,0,0,0,0,0,2147483647").is_ok());
    }

    #[test]
    fn test_render_huge_regions_do_not_overflow() {
        let patch = NinePatch::parse("1,0,0,2147483647,0,0,0,0,0,0,0,0").unwrap();
        let mut recorder = RecordingRenderer::default();
        patch.render(
            &mut recorder,
            &test_image(),
            Rect::new(5, 5, 10, 10),
            Color::WHITE,
            1.0,
        );
        assert_eq!(
            recorder.regions(),
            [(Rect::new(5, 5, 1, i32::MAX), Rect::new(0, 0, 1, i32::MAX))]
        );
    }

    #[test]
    fn test_parse_ignores_trailing_comma() {
        let patch = NinePatch::parse("4,2,4,4,4,2,4,2,4,2,4,4,").unwrap();
        assert_eq!(patch.min_size(), Size::new(8, 8));
    }

    #[test]
    fn test_parse_rejects_negative_and_garbage() {
        assert!(NinePatch::parse("6,2,6,6,6,2,6,2,6,2,6,-1").is_err());
        assert!(NinePatch::parse("6,2,6,6,6,x,6,2,6,2,6,6").is_err());
    }
}
