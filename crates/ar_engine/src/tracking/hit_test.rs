//! Surface hit-testing
//!
//! Converts a 2D touch into a 3D world position by intersecting the pick ray
//! with the tracking state. Of all feature points under the touch, the
//! last-ranked hit wins and its transform's translation column becomes the
//! placement position.

use crate::foundation::math::{translation_of, Point2, Vec3};
use crate::tracking::{ArCamera, FeatureHit, FeaturePointCloud};

/// Query mapping a screen point to feature-point intersections
///
/// Pure query with no side effects; an empty result is the normal "nothing
/// tracked there yet" case, not an error.
pub trait SurfaceHitTester {
    /// All feature-point hits under `screen`, in the tracker's ranking order
    fn hit_test(&self, camera: &ArCamera, screen: Point2) -> Vec<FeatureHit>;
}

impl SurfaceHitTester for FeaturePointCloud {
    fn hit_test(&self, camera: &ArCamera, screen: Point2) -> Vec<FeatureHit> {
        let (origin, direction) = camera.pick_ray(screen);
        self.ray_hits(origin, direction)
    }
}

/// World position of the last-ranked hit, if any
pub fn hit_position(hits: &[FeatureHit]) -> Option<Vec3> {
    hits.last().map(|hit| translation_of(&hit.world_transform))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_touch_over_feature_point_yields_its_position() {
        let camera = ArCamera::default();
        let mut cloud = FeaturePointCloud::new(0.1);
        cloud.detect(Vec3::new(0.0, 0.0, -2.0));

        let center = Point2::new(camera.viewport.x / 2.0, camera.viewport.y / 2.0);
        let hits = cloud.hit_test(&camera, center);
        let position = hit_position(&hits).expect("hit expected");

        assert_relative_eq!(position, Vec3::new(0.0, 0.0, -2.0), epsilon = 1e-4);
    }

    #[test]
    fn test_touch_over_nothing_yields_none() {
        let camera = ArCamera::default();
        let cloud = FeaturePointCloud::new(0.1);

        let hits = cloud.hit_test(&camera, Point2::new(10.0, 10.0));
        assert!(hit_position(&hits).is_none());
    }

    #[test]
    fn test_last_hit_wins_when_points_stack() {
        let camera = ArCamera::default();
        let mut cloud = FeaturePointCloud::new(0.1);
        cloud.detect(Vec3::new(0.0, 0.0, -1.0));
        cloud.detect(Vec3::new(0.0, 0.0, -3.0));

        let center = Point2::new(camera.viewport.x / 2.0, camera.viewport.y / 2.0);
        let hits = cloud.hit_test(&camera, center);
        let position = hit_position(&hits).expect("hit expected");

        // The most recently detected point wins, regardless of depth
        assert_relative_eq!(position, Vec3::new(0.0, 0.0, -3.0), epsilon = 1e-4);
    }
}
