//! Continuous manipulation actions
//!
//! While an action button is held, the selected hero carries one
//! [`ActiveAction`] that applies a fixed increment per tick interval. The
//! action kinds are a tagged variant consumed by a single dispatch function
//! rather than one type per button.

use crate::config::PlacerConfig;
use crate::foundation::math::{Transform, Vec3};

/// Kind of continuous manipulation bound to an on-screen control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Rotate about the world Y axis
    Rotate,
    /// Translate upward along world Y
    MoveUp,
    /// Translate downward along world Y
    MoveDown,
}

/// A repeating incremental transform applied while a gesture is held
///
/// Held time accumulates across frames; each whole tick interval applies one
/// increment. Releasing the gesture mid-interval discards the remainder.
#[derive(Debug, Clone)]
pub struct ActiveAction {
    kind: ActionKind,
    held_time: f32,
}

impl ActiveAction {
    /// Create a fresh action with no held time
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            held_time: 0.0,
        }
    }

    /// The manipulation this action performs
    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// Accumulate `dt` seconds of held time and return the number of whole
    /// ticks that elapsed
    pub fn advance(&mut self, dt: f32, tick_interval: f32) -> u32 {
        self.held_time += dt;
        let mut ticks = 0;
        while self.held_time >= tick_interval {
            self.held_time -= tick_interval;
            ticks += 1;
        }
        ticks
    }
}

/// Apply one increment of `kind` to `transform`
///
/// Single dispatch point for every continuous action.
pub fn apply_tick(kind: ActionKind, transform: &mut Transform, config: &PlacerConfig) {
    match kind {
        ActionKind::Rotate => transform.rotate_y(config.rotate_step),
        ActionKind::MoveUp => transform.translate(Vec3::new(0.0, config.lift_step, 0.0)),
        ActionKind::MoveDown => transform.translate(Vec3::new(0.0, -config.lift_step, 0.0)),
    }
}
