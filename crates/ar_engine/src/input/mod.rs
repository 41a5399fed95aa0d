//! Input handling
//!
//! Sampled gesture state from the platform's recognizers. Only the latest
//! phase transition matters; nothing is buffered.

mod gesture;

pub use gesture::{GesturePhase, GestureState, GestureTransition};
