use tessel_core::geometry::{Pos, Rect};
use tessel_core::math::{Vec2, scale_about};

use crate::texture::TextureHandle;
use crate::{BatchManager, Color};

/// Sink for logical image draws in integer screen coordinates.
///
/// [`ImageMode`](crate::ImageMode) decomposes one image draw into calls on
/// this trait. [`BatchManager`] implements it by emitting textured quads.
pub trait ImageRenderer {
    /// Draw the whole image stretched over `dest`, scaled by `scale` around
    /// the center of `dest`.
    fn render_image(&mut self, image: &TextureHandle, dest: Rect<i32>, color: Color, scale: f32);

    /// Draw the `source` pixel region of the image into `dest`, scaled by
    /// `scale` around `center`.
    fn render_image_region(
        &mut self,
        image: &TextureHandle,
        dest: Rect<i32>,
        source: Rect<i32>,
        color: Color,
        scale: f32,
        center: Pos<i32>,
    );
}

fn to_vec2(pos: Pos<i32>) -> Vec2 {
    Vec2::new(pos.x as f32, pos.y as f32)
}

impl ImageRenderer for BatchManager {
    fn render_image(&mut self, image: &TextureHandle, dest: Rect<i32>, color: Color, scale: f32) {
        let transform = scale_about(to_vec2(dest.center()), scale);
        self.add_texture_quad_region(image, &transform, dest.to_f32(), image.uv(), color);
    }

    fn render_image_region(
        &mut self,
        image: &TextureHandle,
        dest: Rect<i32>,
        source: Rect<i32>,
        color: Color,
        scale: f32,
        center: Pos<i32>,
    ) {
        let transform = scale_about(to_vec2(center), scale);
        let uv = image.uv().sub_region(
            source.to_f32(),
            image.width() as f32,
            image.height() as f32,
        );
        self.add_texture_quad_region(image, &transform, dest.to_f32(), uv, color);
    }
}
