//! Math utilities and types
//!
//! Provides the fundamental math types for placement and screen-space work.
//! All world coordinates follow Y-up right-handed conventions.

pub use nalgebra::{Matrix4, Quaternion, Unit, Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 2D point type (screen space)
pub type Point2 = nalgebra::Point2<f32>;

/// 3D point type (world space)
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Per-axis scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Convert to a transformation matrix (TRS order)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Point3) -> Point3 {
        self.to_matrix().transform_point(&point)
    }

    /// Rotate about the world Y axis by `angle` radians (applied on top of
    /// the current rotation)
    pub fn rotate_y(&mut self, angle: f32) {
        self.rotation = Quat::from_axis_angle(&Vec3::y_axis(), angle) * self.rotation;
    }

    /// Translate by a world-space offset
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Multiply each scale axis by `factor`
    pub fn scale_by(&mut self, factor: f32) {
        self.scale *= factor;
    }
}

/// Extract the translation column of a world transform matrix
///
/// Column-major layout: the fourth column holds the world position
/// (the m41/m42/m43 entries of a row-vector convention matrix).
pub fn translation_of(matrix: &Mat4) -> Vec3 {
    Vec3::new(matrix.m14, matrix.m24, matrix.m34)
}

/// Math constants used by the placement core
pub mod constants {
    /// Archimedes' constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Golden ratio, used for the focus-point vertical bias
    pub const GOLDEN_RATIO: f32 = 1.618;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transform_identity() {
        let transform = Transform::identity();

        assert_eq!(transform.position, Vec3::zeros());
        assert_relative_eq!(transform.rotation, Quat::identity(), epsilon = 1e-6);
        assert_eq!(transform.scale, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_translation_extraction() {
        let matrix = Mat4::new_translation(&Vec3::new(1.0, -2.0, 3.5));
        assert_relative_eq!(
            translation_of(&matrix),
            Vec3::new(1.0, -2.0, 3.5),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_rotate_y_accumulates() {
        let mut transform = Transform::identity();
        transform.rotate_y(constants::PI / 2.0);
        transform.rotate_y(constants::PI / 2.0);

        // Two quarter turns: +X should map to -X
        let rotated = transform.rotation * Vec3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(rotated, Vec3::new(-1.0, 0.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn test_scale_by_is_multiplicative() {
        let mut transform = Transform::identity();
        transform.scale = Vec3::new(0.1, 0.1, 0.1);

        transform.scale_by(2.0);
        transform.scale_by(0.5);

        assert_relative_eq!(transform.scale, Vec3::new(0.1, 0.1, 0.1), epsilon = 1e-6);
    }
}
