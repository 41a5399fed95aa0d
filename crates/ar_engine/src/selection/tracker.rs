//! Per-frame selection tracker
//!
//! Holds the non-owning "last selected" handle and runs the per-frame sweep:
//! project every indicator, measure screen distance to the focus point, and
//! select within the configured radius. When several heroes fall inside the
//! radius in one sweep, the last one in placement order wins; that overwrite
//! behavior is load-bearing and pinned by a test here rather than changed to
//! nearest-distance.

use crate::config::PlacerConfig;
use crate::foundation::collections::HeroHandle;
use crate::foundation::math::{Point2, Vec2};
use crate::scene::HeroRegistry;
use crate::selection::UiState;
use crate::tracking::ArCamera;

/// Fixed screen-space focus point selection aims at
///
/// Horizontal center, vertically `height - height / bias` from the top. With
/// the default golden-ratio bias this sits above true center.
pub fn focus_point(viewport: Vec2, bias: f32) -> Point2 {
    Point2::new(viewport.x / 2.0, viewport.y - viewport.y / bias)
}

/// Tracks which hero the user is aiming at
#[derive(Debug, Default)]
pub struct SelectionTracker {
    last_selected: Option<HeroHandle>,
}

impl SelectionTracker {
    /// Create a tracker with nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle of the currently selected hero, if any
    pub fn selected(&self) -> Option<HeroHandle> {
        self.last_selected
    }

    /// Run one selection sweep over the registry
    ///
    /// Only called while edit mode is active. A hero whose projected
    /// indicator lies within `selection_radius` of the focus point becomes
    /// selected: its indicator is shown, the action panel is shown, and the
    /// focus reticle is hidden. A sweep never deselects on its own; selection
    /// only changes to another hero or ends with edit mode.
    pub fn sweep(
        &mut self,
        registry: &mut HeroRegistry,
        camera: &ArCamera,
        config: &PlacerConfig,
        ui: &mut UiState,
    ) {
        let focus = focus_point(camera.viewport, config.focus_bias);

        let mut newly_selected = None;
        for (handle, entity) in registry.iter() {
            let indicator = entity.indicator_position(config.indicator_offset);
            let Some(screen) = camera.project(indicator) else {
                continue;
            };
            let distance = (screen - focus).norm();
            if distance < config.selection_radius {
                // Later entities overwrite earlier matches within one sweep
                newly_selected = Some(handle);
            }
        }

        if let Some(handle) = newly_selected {
            self.select(handle, registry, ui);
        }
    }

    /// Deselect and hide the action panel (edit-mode exit)
    ///
    /// Unconditional: the panel is hidden even when nothing was selected.
    pub fn on_selection_ended(&mut self, registry: &mut HeroRegistry, ui: &mut UiState) {
        if let Some(previous) = self.last_selected.take() {
            if let Some(entity) = registry.get_mut(previous) {
                entity.indicator_visible = false;
            }
        }
        ui.action_panel_visible = false;
    }

    /// Drop the selected handle without touching entity state
    ///
    /// Used when the selected hero is removed outright.
    pub fn clear(&mut self) -> Option<HeroHandle> {
        self.last_selected.take()
    }

    fn select(&mut self, handle: HeroHandle, registry: &mut HeroRegistry, ui: &mut UiState) {
        if self.last_selected != Some(handle) {
            if let Some(previous) = self.last_selected {
                if let Some(entity) = registry.get_mut(previous) {
                    entity.indicator_visible = false;
                    entity.active_action = None;
                }
            }
            log::debug!("selection changed to {:?}", handle);
        }

        if let Some(entity) = registry.get_mut(handle) {
            entity.indicator_visible = true;
        }
        self.last_selected = Some(handle);
        ui.action_panel_visible = true;
        ui.focus_reticle_visible = false;
    }
}
