//! World tracking and hit-testing
//!
//! Stands in for the platform AR session: a camera that maps between world
//! and screen space, a cloud of detected feature points, and the hit-tester
//! that turns a 2D touch into a 3D placement position.

mod camera;
mod feature_points;
mod hit_test;

pub use camera::ArCamera;
pub use feature_points::{FeatureHit, FeaturePointCloud};
pub use hit_test::{hit_position, SurfaceHitTester};
