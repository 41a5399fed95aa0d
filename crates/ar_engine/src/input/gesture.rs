//! Gesture state for the manipulation controls
//!
//! Each action button carries a long-press recognizer whose begin/end phases
//! start and stop a continuous action; the pinch recognizer reports an
//! incremental scale factor that resets to neutral once consumed.

use crate::actions::ActionKind;

/// Phase of a platform gesture recognizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// Finger down, gesture recognized
    Began,
    /// Gesture parameters updated while held
    Changed,
    /// Finger lifted
    Ended,
    /// Recognizer gave up (system interruption etc.)
    Cancelled,
}

/// State transition produced by a long-press phase change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureTransition {
    /// A control went from idle to held
    ActionStarted(ActionKind),
    /// The held control was released
    ActionStopped,
}

/// Sampled state of the on-screen gesture controls
#[derive(Debug)]
pub struct GestureState {
    held: Option<ActionKind>,
    pinch_factor: f32,
}

impl Default for GestureState {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureState {
    /// Create idle gesture state
    pub fn new() -> Self {
        Self {
            held: None,
            pinch_factor: 1.0,
        }
    }

    /// Which long-press control is currently held, if any
    pub fn held(&self) -> Option<ActionKind> {
        self.held
    }

    /// Feed a long-press phase change for `kind`'s control
    ///
    /// Returns the resulting transition, or `None` when the phase does not
    /// change the idle/held state (e.g. `Changed` while already held).
    pub fn on_long_press(
        &mut self,
        kind: ActionKind,
        phase: GesturePhase,
    ) -> Option<GestureTransition> {
        match phase {
            GesturePhase::Began => {
                self.held = Some(kind);
                Some(GestureTransition::ActionStarted(kind))
            }
            GesturePhase::Ended | GesturePhase::Cancelled => {
                if self.held == Some(kind) {
                    self.held = None;
                    Some(GestureTransition::ActionStopped)
                } else {
                    None
                }
            }
            GesturePhase::Changed => None,
        }
    }

    /// Feed a pinch phase change with the recognizer's incremental factor
    ///
    /// Factors accumulate multiplicatively until consumed. Each new pinch
    /// starts at neutral, so an unconsumed factor from an earlier gesture
    /// never leaks into the next one.
    pub fn on_pinch(&mut self, phase: GesturePhase, factor: f32) {
        match phase {
            GesturePhase::Began => self.pinch_factor = 1.0,
            GesturePhase::Changed => self.pinch_factor *= factor,
            GesturePhase::Ended | GesturePhase::Cancelled => {}
        }
    }

    /// Take the accumulated pinch factor, resetting it to neutral (1.0)
    pub fn take_pinch_factor(&mut self) -> f32 {
        std::mem::replace(&mut self.pinch_factor, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_long_press_begin_end_cycle() {
        let mut state = GestureState::new();

        let started = state.on_long_press(ActionKind::Rotate, GesturePhase::Began);
        assert_eq!(
            started,
            Some(GestureTransition::ActionStarted(ActionKind::Rotate))
        );
        assert_eq!(state.held(), Some(ActionKind::Rotate));

        let stopped = state.on_long_press(ActionKind::Rotate, GesturePhase::Ended);
        assert_eq!(stopped, Some(GestureTransition::ActionStopped));
        assert_eq!(state.held(), None);
    }

    #[test]
    fn test_cancel_behaves_like_end() {
        let mut state = GestureState::new();
        state.on_long_press(ActionKind::MoveUp, GesturePhase::Began);

        let stopped = state.on_long_press(ActionKind::MoveUp, GesturePhase::Cancelled);
        assert_eq!(stopped, Some(GestureTransition::ActionStopped));
    }

    #[test]
    fn test_end_of_unheld_control_is_ignored() {
        let mut state = GestureState::new();
        state.on_long_press(ActionKind::Rotate, GesturePhase::Began);

        // Releasing a control that was never held must not stop the rotate
        let result = state.on_long_press(ActionKind::MoveDown, GesturePhase::Ended);
        assert_eq!(result, None);
        assert_eq!(state.held(), Some(ActionKind::Rotate));
    }

    #[test]
    fn test_pinch_accumulates_until_taken() {
        let mut state = GestureState::new();
        state.on_pinch(GesturePhase::Changed, 2.0);
        state.on_pinch(GesturePhase::Changed, 1.5);

        assert_relative_eq!(state.take_pinch_factor(), 3.0, epsilon = 1e-6);
        assert_relative_eq!(state.take_pinch_factor(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_new_pinch_discards_unconsumed_factor() {
        let mut state = GestureState::new();
        state.on_pinch(GesturePhase::Changed, 3.0);
        state.on_pinch(GesturePhase::Ended, 3.0);

        // The leftover 3.0 was never taken; a fresh pinch must not see it
        state.on_pinch(GesturePhase::Began, 1.0);
        state.on_pinch(GesturePhase::Changed, 2.0);

        assert_relative_eq!(state.take_pinch_factor(), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_pinch_ignores_non_changed_phases() {
        let mut state = GestureState::new();
        state.on_pinch(GesturePhase::Began, 5.0);
        state.on_pinch(GesturePhase::Ended, 5.0);

        assert_relative_eq!(state.take_pinch_factor(), 1.0, epsilon = 1e-6);
    }
}
