//! Tracked camera and world/screen mapping
//!
//! Uses a standard right-handed Y-up view space. Screen space has its origin
//! at the top-left of the view, in points, matching touch coordinates.

use crate::foundation::math::{Mat4, Point2, Point3, Vec2, Vec3};
use nalgebra::Vector4;

/// The AR session's current camera pose and projection
///
/// Matrix calculations are performed on demand; the pose is updated by the
/// host's tracking callbacks.
#[derive(Debug, Clone)]
pub struct ArCamera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Vertical field of view in radians
    pub fov: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,

    /// View size in points (width, height)
    pub viewport: Vec2,
}

impl ArCamera {
    /// Create a perspective camera looking down -Z from `position`
    pub fn new(position: Vec3, target: Vec3, fov: f32, viewport: Vec2) -> Self {
        Self {
            position,
            target,
            up: Vec3::new(0.0, 1.0, 0.0),
            fov,
            near: 0.1,
            far: 100.0,
            viewport,
        }
    }

    /// View matrix (world → view space)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            &Point3::from(self.position),
            &Point3::from(self.target),
            &self.up,
        )
    }

    /// Projection matrix (view → clip space)
    pub fn projection_matrix(&self) -> Mat4 {
        let aspect = self.viewport.x / self.viewport.y;
        Mat4::new_perspective(aspect, self.fov, self.near, self.far)
    }

    /// Combined view-projection matrix
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world position into screen space
    ///
    /// Returns `None` for positions behind the camera; the selection tracker
    /// must never match those.
    pub fn project(&self, world: Vec3) -> Option<Point2> {
        let clip = self.view_projection_matrix() * Vector4::new(world.x, world.y, world.z, 1.0);
        if clip.w <= 0.0 {
            return None;
        }

        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;

        // NDC +Y is up; screen +Y is down from the top-left origin
        let screen_x = (ndc_x + 1.0) * 0.5 * self.viewport.x;
        let screen_y = (1.0 - ndc_y) * 0.5 * self.viewport.y;
        Some(Point2::new(screen_x, screen_y))
    }

    /// World-space pick ray through a screen point
    ///
    /// Unprojects the point at the near and far planes and returns
    /// `(origin, direction)` with a normalized direction.
    pub fn pick_ray(&self, screen: Point2) -> (Vec3, Vec3) {
        let ndc_x = (screen.x / self.viewport.x) * 2.0 - 1.0;
        let ndc_y = 1.0 - (screen.y / self.viewport.y) * 2.0;

        let inv_view_proj = self
            .view_projection_matrix()
            .try_inverse()
            .unwrap_or_else(Mat4::identity);

        let near_h = inv_view_proj * Vector4::new(ndc_x, ndc_y, -1.0, 1.0);
        let far_h = inv_view_proj * Vector4::new(ndc_x, ndc_y, 1.0, 1.0);

        let near = Vec3::new(near_h.x, near_h.y, near_h.z) / near_h.w;
        let far = Vec3::new(far_h.x, far_h.y, far_h.z) / far_h.w;

        let direction = (far - near).normalize();
        (self.position, direction)
    }
}

impl Default for ArCamera {
    /// Camera at the origin looking into the scene along -Z, with a phone-ish
    /// portrait viewport
    fn default() -> Self {
        Self::new(
            Vec3::zeros(),
            Vec3::new(0.0, 0.0, -1.0),
            std::f32::consts::FRAC_PI_3,
            Vec2::new(375.0, 812.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_project_center_of_view() {
        let camera = ArCamera::default();
        let screen = camera.project(Vec3::new(0.0, 0.0, -2.0)).expect("in front");

        assert_relative_eq!(screen.x, 375.0 / 2.0, epsilon = 1e-3);
        assert_relative_eq!(screen.y, 812.0 / 2.0, epsilon = 1e-3);
    }

    #[test]
    fn test_project_rejects_points_behind_camera() {
        let camera = ArCamera::default();
        assert!(camera.project(Vec3::new(0.0, 0.0, 2.0)).is_none());
    }

    #[test]
    fn test_pick_ray_through_center_points_forward() {
        let camera = ArCamera::default();
        let (origin, direction) = camera.pick_ray(Point2::new(375.0 / 2.0, 812.0 / 2.0));

        assert_relative_eq!(origin, Vec3::zeros(), epsilon = 1e-5);
        assert_relative_eq!(direction, Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-4);
    }

    #[test]
    fn test_project_unproject_round_trip() {
        let camera = ArCamera::default();
        let world = Vec3::new(0.4, -0.3, -3.0);

        let screen = camera.project(world).expect("in front");
        let (origin, direction) = camera.pick_ray(screen);

        // The ray must pass through the original world point
        let t = (world - origin).dot(&direction);
        let closest = origin + direction * t;
        assert_relative_eq!(closest, world, epsilon = 1e-3);
    }
}
