//! Edit-mode state machine

/// Two-state mode gating selection tracking and gesture actions
///
/// `Placing` is the initial state; the only transitions are the explicit
/// enter/exit calls on the session. No other states, no concurrent edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Touches place heroes; indicators hidden, gestures inert
    #[default]
    Placing,
    /// Selection tracking and manipulation gestures are live
    Editing,
}

impl EditMode {
    /// Whether manipulation is currently enabled
    pub fn is_editing(self) -> bool {
        matches!(self, Self::Editing)
    }
}
