//! # AR Engine
//!
//! Placement-and-manipulation core for an AR character-placing demo: users
//! drop animated heroes onto tracked real-world surfaces, then select,
//! rotate, lift, scale, and remove them through touch gestures.
//!
//! ## Features
//!
//! - **Surface hit-testing**: 2D touches to 3D world positions via tracked
//!   feature points
//! - **Ordered entity registry**: stable handles, placement-order iteration
//! - **Per-frame selection tracking**: screen-space focus-point sweep
//! - **Gesture-to-action mapping**: held gestures drive continuous transforms
//! - **Edit-mode gating**: a two-state machine arms and disarms manipulation
//!
//! ## Quick Start
//!
//! ```rust
//! use ar_engine::prelude::*;
//!
//! let mut session = PlacerSession::default();
//! let mut bridge = RecordingBridge::new();
//! let camera = ArCamera::default();
//!
//! let mut cloud = FeaturePointCloud::default();
//! cloud.detect(Vec3::new(0.0, 0.0, -2.0));
//!
//! session.on_hero_picked(HeroKind::IronMan);
//! session.on_touch(
//!     Point2::new(camera.viewport.x / 2.0, camera.viewport.y / 2.0),
//!     &cloud,
//!     &camera,
//!     &mut bridge,
//! );
//! assert_eq!(session.registry().len(), 1);
//!
//! session.enter_edit_mode();
//! session.on_frame(0.016, &camera);
//! ```
//!
//! The renderer is an opaque collaborator behind [`scene::RendererBridge`];
//! the core owns logic and state only. All calls run on the host's single
//! event/render thread.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod actions;
pub mod config;
pub mod foundation;
pub mod input;
pub mod scene;
pub mod selection;
pub mod session;
pub mod tracking;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        actions::ActionKind,
        config::{Config, PlacerConfig},
        foundation::{
            collections::HeroHandle,
            math::{Point2, Transform, Vec2, Vec3},
            time::FrameTimer,
        },
        input::GesturePhase,
        scene::{HeroEntity, HeroKind, HeroRegistry, RecordingBridge, RendererBridge},
        selection::{SelectionTracker, UiState},
        session::{EditMode, PlacerSession},
        tracking::{ArCamera, FeaturePointCloud, SurfaceHitTester},
    };
}
