//! Screen-space selection
//!
//! Every frame in edit mode, each hero's indicator is projected to screen
//! space and compared against a fixed focus point; the nearest-held entity
//! within a fixed radius becomes the selection driving the action panel.

mod tracker;
mod ui_state;

pub use tracker::{focus_point, SelectionTracker};
pub use ui_state::UiState;
