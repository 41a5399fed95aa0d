//! Detected feature-point store
//!
//! Append-only list of world-space feature points in detection order. The
//! hit-tester intersects pick rays against these; "last hit" therefore means
//! the most recently detected feature among those under the touch.

use crate::foundation::math::{Mat4, Vec3};

/// One feature-point intersection found by a hit test
#[derive(Debug, Clone)]
pub struct FeatureHit {
    /// World transform of the intersected feature point
    pub world_transform: Mat4,

    /// Distance along the pick ray to the closest approach
    pub distance: f32,
}

/// Cloud of detected real-world feature points
#[derive(Debug, Clone)]
pub struct FeaturePointCloud {
    points: Vec<Vec3>,
    point_radius: f32,
}

impl FeaturePointCloud {
    /// Create an empty cloud whose points hit-test as spheres of
    /// `point_radius` world units
    pub fn new(point_radius: f32) -> Self {
        Self {
            points: Vec::new(),
            point_radius,
        }
    }

    /// Record a newly detected feature point
    pub fn detect(&mut self, position: Vec3) {
        self.points.push(position);
    }

    /// Number of detected points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no points have been detected yet
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Intersect a pick ray against every point, in detection order
    ///
    /// A point hits when the ray passes within `point_radius` of it in front
    /// of the origin. Results keep detection order, not depth order.
    pub fn ray_hits(&self, origin: Vec3, direction: Vec3) -> Vec<FeatureHit> {
        let radius_squared = self.point_radius * self.point_radius;
        self.points
            .iter()
            .filter_map(|&point| {
                let to_point = point - origin;
                let t = to_point.dot(&direction);
                if t < 0.0 {
                    return None;
                }
                let offset_squared = to_point.magnitude_squared() - t * t;
                if offset_squared <= radius_squared {
                    Some(FeatureHit {
                        world_transform: Mat4::new_translation(&point),
                        distance: t,
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}

impl Default for FeaturePointCloud {
    fn default() -> Self {
        Self::new(0.05)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::translation_of;
    use approx::assert_relative_eq;

    #[test]
    fn test_ray_hits_point_on_axis() {
        let mut cloud = FeaturePointCloud::new(0.05);
        cloud.detect(Vec3::new(0.0, 0.0, -2.0));

        let hits = cloud.ray_hits(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(hits.len(), 1);
        assert_relative_eq!(hits[0].distance, 2.0, epsilon = 1e-5);
        assert_relative_eq!(
            translation_of(&hits[0].world_transform),
            Vec3::new(0.0, 0.0, -2.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_ray_misses_offset_point() {
        let mut cloud = FeaturePointCloud::new(0.05);
        cloud.detect(Vec3::new(1.0, 0.0, -2.0));

        let hits = cloud.ray_hits(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_points_behind_origin_never_hit() {
        let mut cloud = FeaturePointCloud::new(0.05);
        cloud.detect(Vec3::new(0.0, 0.0, 2.0));

        let hits = cloud.ray_hits(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_hits_keep_detection_order() {
        let mut cloud = FeaturePointCloud::new(0.05);
        cloud.detect(Vec3::new(0.0, 0.0, -3.0));
        cloud.detect(Vec3::new(0.0, 0.0, -1.0));

        let hits = cloud.ray_hits(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0));
        let distances: Vec<_> = hits.iter().map(|h| h.distance).collect();

        // Detection order, not near-to-far
        assert_eq!(distances.len(), 2);
        assert!(distances[0] > distances[1]);
    }
}
