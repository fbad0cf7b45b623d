use glam::{Mat4, Vec2, Vec3};

use crate::renderer::Point2;

/// Affine view transform taking surface samples to viewport pixels.
///
/// Pure and total: [`project`] has no failure modes beyond ordinary
/// floating-point arithmetic (NaN/∞ inputs propagate; don't feed them). The
/// caller owns the transform and must build it so that rows swept later end
/// up nearer the viewer, or the occlusion result is geometrically wrong;
/// that obligation is documented, not checked.
///
/// [`project`]: ViewTransform::project
#[derive(Clone, Copy, Debug)]
pub struct ViewTransform {
    mat: Mat4,
}

impl ViewTransform {
    /// Rotate about X, then Y, then Z by `angles_deg`, scale uniformly and
    /// translate into the viewport. Mirrors the knobs the plotting UI
    /// exposes: three angles, one scale factor, a screen-centre offset.
    pub fn compose(angles_deg: Vec3, scale: f32, offset: Vec2) -> Self {
        let rotation = Mat4::from_rotation_x(angles_deg.x.to_radians())
            * Mat4::from_rotation_y(angles_deg.y.to_radians())
            * Mat4::from_rotation_z(angles_deg.z.to_radians());
        Self {
            mat: Mat4::from_translation(offset.extend(0.0))
                * Mat4::from_scale(Vec3::splat(scale))
                * rotation,
        }
    }

    /// Arbitrary affine map, for callers composing their own.
    pub const fn from_mat4(mat: Mat4) -> Self {
        Self { mat }
    }

    /// Project one sample; each coordinate is rounded half-away-from-zero.
    #[inline]
    pub fn project(&self, p: Vec3) -> Point2 {
        let v = self.mat.transform_point3(p);
        Point2::new(v.x.round() as i32, v.y.round() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{vec2, vec3};

    #[test]
    fn scale_and_offset_only() {
        let t = ViewTransform::compose(Vec3::ZERO, 10.0, vec2(50.0, 50.0));
        assert_eq!(t.project(vec3(1.0, 2.0, 9.0)), Point2::new(60, 70));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        let t = ViewTransform::compose(Vec3::ZERO, 10.0, Vec2::ZERO);
        assert_eq!(t.project(vec3(-0.15, 0.15, 0.0)), Point2::new(-2, 2));
    }

    #[test]
    fn quarter_turn_about_z() {
        let t = ViewTransform::compose(vec3(0.0, 0.0, 90.0), 1.0, Vec2::ZERO);
        assert_eq!(t.project(vec3(1.0, 0.0, 0.0)), Point2::new(0, 1));
    }
}
