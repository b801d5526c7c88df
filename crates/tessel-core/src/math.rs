//! Math types used across the engine.
//!
//! Re-exports the SIMD-accelerated [`glam`] types and adds the handful of
//! 2D transform helpers that quad emission needs.
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{Mat4, Vec2, Vec3, Vec4};

/// Build a transform that scales by `scale` around `center`.
///
/// A scale of `1.0` yields the identity matrix.
///
/// ```
/// use tessel_core::math::{scale_about, Vec2};
///
/// let m = scale_about(Vec2::new(10.0, 10.0), 2.0);
/// assert_eq!(m.transform_point3((12.0, 10.0, 0.0).into()).x, 14.0);
/// ```
pub fn scale_about(center: Vec2, scale: f32) -> Mat4 {
    if scale == 1.0 {
        return Mat4::IDENTITY;
    }
    let center = center.extend(0.0);
    Mat4::from_translation(center)
        * Mat4::from_scale(Vec3::new(scale, scale, 1.0))
        * Mat4::from_translation(-center)
}

/// Apply `transform` to a 2D point, including projective division.
#[inline]
pub fn transform_point(transform: &Mat4, x: f32, y: f32) -> Vec2 {
    let p = *transform * Vec4::new(x, y, 0.0, 1.0);
    if p.w != 0.0 && p.w != 1.0 {
        Vec2::new(p.x / p.w, p.y / p.w)
    } else {
        Vec2::new(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_scale() {
        assert_eq!(scale_about(Vec2::new(5.0, 5.0), 1.0), Mat4::IDENTITY);
    }

    #[test]
    fn test_scale_keeps_center_fixed() {
        let m = scale_about(Vec2::new(50.0, 20.0), 0.5);
        assert_eq!(transform_point(&m, 50.0, 20.0), Vec2::new(50.0, 20.0));
        assert_eq!(transform_point(&m, 60.0, 20.0), Vec2::new(55.0, 20.0));
    }

    #[test]
    fn test_translation() {
        let m = Mat4::from_translation(Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(transform_point(&m, 1.0, 1.0), Vec2::new(4.0, 5.0));
    }
}
