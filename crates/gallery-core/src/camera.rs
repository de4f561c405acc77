//! Camera pose and lens maths shared with the web frontend.
//!
//! These types avoid platform-specific APIs: the frontend feeds canvas sizes
//! and pointer positions in, and gets matrices, rays and projected label
//! anchors out.

use crate::constants::{
    CAMERA_FOV_Y_DEGREES, CAMERA_ZFAR, CAMERA_ZNEAR, DEFAULT_STANDOFF, INITIAL_CAMERA_POSITION,
};
use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

/// Where the camera stands and which way it looks. Identity orientation looks down -Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl CameraPose {
    pub const fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Unfocused framing: centred and pulled back, facing forward.
    pub const fn standoff() -> Self {
        Self::new(DEFAULT_STANDOFF, Quat::IDENTITY)
    }

    pub const fn initial() -> Self {
        Self::new(INITIAL_CAMERA_POSITION, Quat::IDENTITY)
    }

    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// World to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position).inverse()
    }
}

/// A half-line in world space; `direction` is unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// A point projected to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    /// Pixels from the top-left corner.
    pub position: Vec2,
    /// Screen pixels covered by one world unit at this depth.
    pub pixels_per_unit: f32,
}

/// Right-handed perspective projection.
#[derive(Clone, Copy, Debug)]
pub struct Lens {
    pub fovy_radians: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Lens {
    fn default() -> Self {
        Self {
            fovy_radians: CAMERA_FOV_Y_DEGREES.to_radians(),
            aspect: 1.0,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Lens {
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.aspect = width / height.max(1.0);
        self
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_projection(&self, pose: &CameraPose) -> Mat4 {
        self.projection_matrix() * pose.view_matrix()
    }

    /// World-space ray through normalized device coordinates (`[-1, 1]`, +Y up).
    pub fn ray(&self, pose: &CameraPose, ndc: Vec2) -> Ray {
        let inv = self.view_projection(pose).inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: pose.position,
            direction: (p1 - pose.position).normalize(),
        }
    }

    /// Project a world point into a `viewport` sized in pixels.
    ///
    /// Returns `None` for points at or behind the camera plane.
    pub fn project(&self, pose: &CameraPose, point: Vec3, viewport: Vec2) -> Option<ScreenPoint> {
        let clip = self.view_projection(pose) * point.extend(1.0);
        if clip.w <= self.znear * 0.5 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let position = Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport.x,
            (1.0 - ndc.y) * 0.5 * viewport.y,
        );
        // clip.w is the view-space depth for a perspective projection
        let pixels_per_unit = viewport.y / (2.0 * (self.fovy_radians * 0.5).tan() * clip.w);
        Some(ScreenPoint {
            position,
            pixels_per_unit,
        })
    }
}

/// Map pixel coordinates (top-left origin) to normalized device coordinates.
#[inline]
pub fn pixel_to_ndc(px: Vec2, viewport: Vec2) -> Vec2 {
    let w = viewport.x.max(1.0);
    let h = viewport.y.max(1.0);
    Vec2::new(2.0 * px.x / w - 1.0, 1.0 - 2.0 * px.y / h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_ray_follows_the_view_direction() {
        let pose = CameraPose::new(Vec3::new(1.0, 2.0, 3.0), Quat::from_rotation_y(0.7));
        let ray = Lens::default().with_viewport(800.0, 600.0).ray(&pose, Vec2::ZERO);
        assert!(ray.direction.abs_diff_eq(pose.forward(), 1e-4));
        assert_eq!(ray.origin, pose.position);
    }

    #[test]
    fn projection_of_a_point_ahead_lands_in_the_centre() {
        let pose = CameraPose::standoff();
        let viewport = Vec2::new(1000.0, 500.0);
        let sp = Lens::default()
            .with_viewport(viewport.x, viewport.y)
            .project(&pose, Vec3::ZERO, viewport)
            .unwrap();
        assert!(sp.position.abs_diff_eq(Vec2::new(500.0, 250.0), 1e-2));
        assert!(sp.pixels_per_unit > 0.0);
    }

    #[test]
    fn points_behind_the_camera_do_not_project() {
        let pose = CameraPose::standoff();
        let lens = Lens::default();
        assert!(lens
            .project(&pose, Vec3::new(0.0, 0.0, 10.0), Vec2::new(100.0, 100.0))
            .is_none());
    }

    #[test]
    fn pixel_corners_map_to_ndc_corners() {
        let vp = Vec2::new(200.0, 100.0);
        assert_eq!(pixel_to_ndc(Vec2::ZERO, vp), Vec2::new(-1.0, 1.0));
        assert_eq!(pixel_to_ndc(vp, vp), Vec2::new(1.0, -1.0));
    }
}
