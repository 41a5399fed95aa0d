//! Scene management system
//!
//! Owns the live collection of placed heroes and the seam to the renderer.
//! The placement core never talks to a graphics API: it mutates registry
//! state and notifies a [`RendererBridge`] of attach/detach, and the host's
//! renderer turns that into frames.
//!
//! ```text
//! PlacerSession (logic)
//!       ↓
//! HeroRegistry (live entities)
//!       ↓
//! RendererBridge (host renderer)
//! ```

mod hero;
mod registry;
mod renderer;

pub use hero::{HeroEntity, HeroKind};
pub use registry::HeroRegistry;
pub use renderer::{RecordingBridge, RendererBridge};
