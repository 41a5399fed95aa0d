//! Placement session
//!
//! High-level coordinator tying the registry, tracking, selection, and
//! gesture state together, in the shape the host drives it:
//!
//! ```text
//! picker / touch / gesture callbacks      render loop
//!              ↓                               ↓
//!         PlacerSession  ←———  on_frame(dt, camera)
//!              ↓
//!   HeroRegistry + RendererBridge + UiState
//! ```
//!
//! Everything runs on the host's single event/render thread; the per-frame
//! selection sweep is coalesced through a pending flag and runs after the
//! frame's other work, never concurrently with it.

mod edit_mode;

pub use edit_mode::EditMode;

use crate::actions::{apply_tick, ActionKind, ActiveAction};
use crate::config::PlacerConfig;
use crate::foundation::collections::HeroHandle;
use crate::foundation::math::{Point2, Vec3};
use crate::input::{GesturePhase, GestureState, GestureTransition};
use crate::scene::{HeroEntity, HeroKind, HeroRegistry, RendererBridge};
use crate::selection::{SelectionTracker, UiState};
use crate::tracking::{hit_position, ArCamera, SurfaceHitTester};

/// The placement-and-manipulation session
///
/// One per AR view. Owns all mutable core state; collaborators (hit-tester,
/// camera, renderer bridge) are borrowed per call so the host keeps ownership
/// of its platform objects.
pub struct PlacerSession {
    config: PlacerConfig,
    registry: HeroRegistry,
    tracker: SelectionTracker,
    gestures: GestureState,
    edit_mode: EditMode,
    pending_hero: Option<HeroKind>,
    picker_open: bool,
    ui: UiState,
    sweep_pending: bool,
}

impl PlacerSession {
    /// Create a session with the given tuning values
    pub fn new(config: PlacerConfig) -> Self {
        Self {
            config,
            registry: HeroRegistry::new(),
            tracker: SelectionTracker::new(),
            gestures: GestureState::new(),
            edit_mode: EditMode::Placing,
            pending_hero: None,
            picker_open: false,
            ui: UiState::default(),
            sweep_pending: false,
        }
    }

    /// The live hero registry
    pub fn registry(&self) -> &HeroRegistry {
        &self.registry
    }

    /// Current UI-chrome visibility snapshot
    pub fn ui(&self) -> UiState {
        self.ui
    }

    /// Current edit-mode state
    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    /// Handle of the selected hero, if any
    pub fn selected(&self) -> Option<HeroHandle> {
        self.tracker.selected()
    }

    /// Hero kind waiting to be placed by the next qualifying touch
    pub fn pending_hero(&self) -> Option<HeroKind> {
        self.pending_hero
    }

    /// The session's tuning values
    pub fn config(&self) -> &PlacerConfig {
        &self.config
    }

    // --- picker collaborator ---

    /// The picker popover opened or closed
    pub fn set_picker_open(&mut self, open: bool) {
        self.picker_open = open;
    }

    /// The user picked a hero from the picker (which then dismisses)
    pub fn on_hero_picked(&mut self, kind: HeroKind) {
        log::info!("hero picked: {}", kind.asset_name());
        self.pending_hero = Some(kind);
        self.picker_open = false;
    }

    // --- placement ---

    /// A touch landed on the AR view
    ///
    /// Routed through hit-testing only while placing and with the picker
    /// closed. A touch with no tracked surface under it, or with no pending
    /// hero, silently places nothing.
    pub fn on_touch(
        &mut self,
        screen: Point2,
        tester: &dyn SurfaceHitTester,
        camera: &ArCamera,
        bridge: &mut dyn RendererBridge,
    ) {
        if self.picker_open || self.edit_mode.is_editing() {
            return;
        }

        let hits = tester.hit_test(camera, screen);
        match hit_position(&hits) {
            Some(position) => self.place_hero(position, bridge),
            None => log::trace!("touch at {:?} hit no feature points", screen),
        }
    }

    /// Place the pending hero at a world position
    ///
    /// No-op without a pending pick. Consumes the pending pick on success, so
    /// each pick places at most one hero.
    pub fn place_hero(&mut self, position: Vec3, bridge: &mut dyn RendererBridge) {
        let Some(kind) = self.pending_hero.take() else {
            log::trace!("placement skipped: no hero picked");
            return;
        };

        let entity = HeroEntity::new(kind, position, self.config.initial_scale);
        let handle = self.registry.insert(entity);
        if let Some(entity) = self.registry.get(handle) {
            bridge.attach(handle, entity);
        }
        log::info!("placed {} at {:?}", kind.asset_name(), position);
    }

    // --- edit mode ---

    /// Switch from placing to editing
    ///
    /// Shows every hero's indicator and the focus reticle, and arms the
    /// per-frame selection sweep.
    pub fn enter_edit_mode(&mut self) {
        if self.edit_mode.is_editing() {
            return;
        }
        self.edit_mode = EditMode::Editing;
        // Whatever gestures happened while placing must not carry over
        self.gestures = GestureState::new();
        self.registry.set_all_indicators(true);
        self.ui.focus_reticle_visible = true;
        log::info!("entered edit mode");
    }

    /// Switch from editing back to placing
    ///
    /// Ends the selection, hides all indicators and the reticle, and drops
    /// any gesture-driven action.
    pub fn exit_edit_mode(&mut self) {
        if !self.edit_mode.is_editing() {
            return;
        }
        self.tracker.on_selection_ended(&mut self.registry, &mut self.ui);
        self.registry.set_all_indicators(false);
        for (_, entity) in self.registry.iter_mut() {
            entity.active_action = None;
        }
        self.gestures = GestureState::new();
        self.ui.focus_reticle_visible = false;
        self.edit_mode = EditMode::Placing;
        log::info!("left edit mode");
    }

    // --- gestures ---

    /// A long-press phase change arrived from one of the action controls
    ///
    /// Ignored outside edit mode. With a selection, gesture begin installs
    /// the continuous action and gesture end/cancel removes it; with no
    /// selection both are silent no-ops.
    pub fn on_action_gesture(&mut self, kind: ActionKind, phase: GesturePhase) {
        if !self.edit_mode.is_editing() {
            return;
        }

        match self.gestures.on_long_press(kind, phase) {
            Some(GestureTransition::ActionStarted(kind)) => {
                let Some(selected) = self.tracker.selected() else {
                    log::trace!("{:?} gesture with nothing selected", kind);
                    return;
                };
                if let Some(entity) = self.registry.get_mut(selected) {
                    entity.active_action = Some(ActiveAction::new(kind));
                }
            }
            Some(GestureTransition::ActionStopped) => {
                if let Some(selected) = self.tracker.selected() {
                    if let Some(entity) = self.registry.get_mut(selected) {
                        entity.active_action = None;
                    }
                }
            }
            None => {}
        }
    }

    /// A pinch phase change arrived with its incremental scale factor
    ///
    /// While editing with a selection, the selected hero's scale multiplies
    /// by the factor accumulated since the last update, which then resets to
    /// neutral; scaling accumulates multiplicatively across updates.
    pub fn on_pinch_gesture(&mut self, phase: GesturePhase, factor: f32) {
        self.gestures.on_pinch(phase, factor);

        if phase != GesturePhase::Changed || !self.edit_mode.is_editing() {
            return;
        }
        let Some(selected) = self.tracker.selected() else {
            return;
        };
        if let Some(entity) = self.registry.get_mut(selected) {
            let accumulated = self.gestures.take_pinch_factor();
            entity.transform.scale_by(accumulated);
        }
    }

    /// Remove the selected hero (discrete one-shot action)
    ///
    /// Detaches it from the renderer, drops it from the registry, and clears
    /// the last-selected reference. Silent no-op with nothing selected.
    pub fn remove_selected(&mut self, bridge: &mut dyn RendererBridge) {
        let Some(handle) = self.tracker.clear() else {
            log::trace!("remove requested with nothing selected");
            return;
        };

        bridge.detach(handle);
        if let Some(entity) = self.registry.remove(handle) {
            log::info!("removed {}", entity.kind.asset_name());
        }
        self.ui.action_panel_visible = false;
    }

    // --- render loop ---

    /// Request a selection sweep after the current frame's work
    ///
    /// Coalescing: requesting while one is already pending is a no-op, since
    /// only the latest state matters.
    pub fn schedule_sweep(&mut self) {
        self.sweep_pending = true;
    }

    /// Whether a sweep is pending for the end of this frame
    pub fn sweep_scheduled(&self) -> bool {
        self.sweep_pending
    }

    /// Advance the session by one displayed frame
    ///
    /// Applies held continuous actions for `dt` seconds, then runs the
    /// (re-armed) selection sweep after the frame's other work. The sweep is
    /// a no-op outside edit mode.
    pub fn on_frame(&mut self, dt: f32, camera: &ArCamera) {
        if self.edit_mode.is_editing() {
            self.advance_actions(dt);
        }

        // The render callback re-arms the sweep every frame; any sweep the
        // input callbacks already scheduled coalesces with it.
        self.schedule_sweep();
        if self.sweep_pending {
            self.sweep_pending = false;
            if self.edit_mode.is_editing() {
                self.tracker
                    .sweep(&mut self.registry, camera, &self.config, &mut self.ui);
            }
        }
    }

    fn advance_actions(&mut self, dt: f32) {
        let config = &self.config;
        for (_, entity) in self.registry.iter_mut() {
            let HeroEntity {
                transform,
                active_action,
                ..
            } = entity;
            if let Some(action) = active_action.as_mut() {
                let ticks = action.advance(dt, config.action_tick_interval);
                for _ in 0..ticks {
                    apply_tick(action.kind(), transform, config);
                }
            }
        }
    }
}

impl Default for PlacerSession {
    fn default() -> Self {
        Self::new(PlacerConfig::default())
    }
}
