//! Renderer bridge trait and implementations
//!
//! The host renderer is an opaque collaborator: the core tells it which
//! heroes exist and the renderer produces frames from registry state. The
//! trait keeps the core free of any graphics API and lets tests observe
//! attach/detach traffic directly.

use crate::foundation::collections::HeroHandle;
use crate::scene::{HeroEntity, HeroKind};

/// Seam to the host's scene-graph/renderer
///
/// Implementations receive attach on placement and detach on removal. Both
/// calls are notifications, not queries; the renderer reads transforms from
/// the registry each frame.
pub trait RendererBridge {
    /// A hero was placed and should join the rendered scene graph
    fn attach(&mut self, handle: HeroHandle, entity: &HeroEntity);

    /// A hero was removed and should leave the rendered scene graph
    fn detach(&mut self, handle: HeroHandle);
}

/// Bridge that records attach/detach traffic
///
/// Used by the demo binaries in place of a real renderer, and by tests to
/// assert scene-graph bookkeeping.
#[derive(Debug, Default)]
pub struct RecordingBridge {
    attached: Vec<(HeroHandle, HeroKind)>,
    detach_count: usize,
}

impl RecordingBridge {
    /// Create an empty bridge
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles currently attached to the scene graph
    pub fn attached(&self) -> impl Iterator<Item = (HeroHandle, HeroKind)> + '_ {
        self.attached.iter().copied()
    }

    /// Number of heroes currently attached
    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    /// Total detach notifications received
    pub fn detach_count(&self) -> usize {
        self.detach_count
    }
}

impl RendererBridge for RecordingBridge {
    fn attach(&mut self, handle: HeroHandle, entity: &HeroEntity) {
        self.attached.push((handle, entity.kind));
    }

    fn detach(&mut self, handle: HeroHandle) {
        self.attached.retain(|&(h, _)| h != handle);
        self.detach_count += 1;
    }
}
