//! Live hero registry
//!
//! Insertion-ordered collection of placed heroes. A slot map provides stable
//! handles (so the selection tracker can keep a non-owning reference) while a
//! separate order list preserves placement order for iteration, which the
//! selection tie-break depends on.

use crate::foundation::collections::{HandleMap, HeroHandle};
use crate::scene::HeroEntity;

/// Ordered collection of live hero entities
#[derive(Default)]
pub struct HeroRegistry {
    entities: HandleMap<HeroEntity>,
    order: Vec<HeroHandle>,
}

impl HeroRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entities: HandleMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Append a hero, returning its stable handle
    pub fn insert(&mut self, entity: HeroEntity) -> HeroHandle {
        let handle = self.entities.insert(entity);
        self.order.push(handle);
        handle
    }

    /// Remove a hero by handle
    ///
    /// Idempotent: removing an absent handle is a no-op returning `None`.
    /// Pure registry bookkeeping; the session notifies the renderer bridge
    /// of the detach before calling this.
    pub fn remove(&mut self, handle: HeroHandle) -> Option<HeroEntity> {
        let removed = self.entities.remove(handle);
        if removed.is_some() {
            self.order.retain(|&h| h != handle);
        }
        removed
    }

    /// Borrow a hero by handle
    pub fn get(&self, handle: HeroHandle) -> Option<&HeroEntity> {
        self.entities.get(handle)
    }

    /// Mutably borrow a hero by handle
    pub fn get_mut(&mut self, handle: HeroHandle) -> Option<&mut HeroEntity> {
        self.entities.get_mut(handle)
    }

    /// Whether the handle refers to a live hero
    pub fn contains(&self, handle: HeroHandle) -> bool {
        self.entities.contains_key(handle)
    }

    /// Number of live heroes
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate heroes in placement order
    pub fn iter(&self) -> impl Iterator<Item = (HeroHandle, &HeroEntity)> {
        self.order
            .iter()
            .filter_map(move |&handle| self.entities.get(handle).map(|e| (handle, e)))
    }

    /// Mutably iterate heroes (iteration order unspecified)
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (HeroHandle, &mut HeroEntity)> {
        self.entities.iter_mut()
    }

    /// Set every hero's indicator visibility (edit-mode enter/exit)
    pub fn set_all_indicators(&mut self, visible: bool) {
        for (_, entity) in self.entities.iter_mut() {
            entity.indicator_visible = visible;
        }
    }
}
