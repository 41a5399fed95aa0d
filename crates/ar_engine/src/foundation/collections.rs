//! Specialized collection types

pub use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable, non-owning handle to a placed hero entity
    ///
    /// Handles stay valid across unrelated insertions and removals; looking
    /// up a removed handle simply yields `None`, so a stale "last selected"
    /// reference can never dangle.
    pub struct HeroHandle;
}

/// Handle-based map using a slot map for stable references
pub type HandleMap<T> = SlotMap<HeroHandle, T>;
