//! Explicit UI-chrome state
//!
//! The core never touches widgets. It publishes this snapshot and the UI
//! layer shows/hides its views from it; per-hero indicator visibility lives
//! on the entities themselves.

/// Visibility state the UI chrome renders from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    /// Whether the manipulation action panel is shown
    pub action_panel_visible: bool,

    /// Whether the pulsing focus reticle is shown
    pub focus_reticle_visible: bool,
}
