//! Placed hero entity
//!
//! Pure data: spatial transform, selection-indicator visibility, and the one
//! continuous action a held gesture may install. Owned exclusively by the
//! [`crate::scene::HeroRegistry`].

use crate::actions::ActiveAction;
use crate::foundation::math::{Transform, Vec3};

/// The character catalog the picker offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroKind {
    /// Iron Man
    IronMan,
    /// Hulk
    Hulk,
    /// Captain America
    CaptainAmerica,
}

impl HeroKind {
    /// Asset name of this hero's model
    pub fn asset_name(self) -> &'static str {
        match self {
            Self::IronMan => "ironMan",
            Self::Hulk => "hulk",
            Self::CaptainAmerica => "captainAmerica",
        }
    }

    /// All kinds, in picker order
    pub fn all() -> [Self; 3] {
        [Self::IronMan, Self::Hulk, Self::CaptainAmerica]
    }
}

/// A placed, named 3D entity with transform and selection indicator
#[derive(Debug, Clone)]
pub struct HeroEntity {
    /// Which character this is
    pub kind: HeroKind,

    /// World-space position, rotation, and per-axis scale
    pub transform: Transform,

    /// Whether the selection indicator hung above the model is shown
    pub indicator_visible: bool,

    /// The continuous action a held gesture installed, if any
    ///
    /// Non-`None` only while the corresponding gesture is held down.
    pub active_action: Option<ActiveAction>,
}

impl HeroEntity {
    /// Create a hero of `kind` at `position` with uniform `scale`
    pub fn new(kind: HeroKind, position: Vec3, scale: f32) -> Self {
        let mut transform = Transform::from_position(position);
        transform.scale = Vec3::new(scale, scale, scale);
        Self {
            kind,
            transform,
            indicator_visible: false,
            active_action: None,
        }
    }

    /// World position of the selection indicator
    ///
    /// The indicator is a sub-element offset from the model's origin; the
    /// selection tracker projects this point, not the origin.
    pub fn indicator_position(&self, offset: Vec3) -> Vec3 {
        self.transform.position + offset
    }

    /// Whether a held gesture currently drives this hero
    pub fn has_active_action(&self) -> bool {
        self.active_action.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hero_starts_unselected() {
        let hero = HeroEntity::new(HeroKind::IronMan, Vec3::new(1.0, 0.0, -2.0), 0.1);

        assert!(!hero.indicator_visible);
        assert!(!hero.has_active_action());
        assert_eq!(hero.transform.position, Vec3::new(1.0, 0.0, -2.0));
        assert_eq!(hero.transform.scale, Vec3::new(0.1, 0.1, 0.1));
    }

    #[test]
    fn test_indicator_position_applies_offset() {
        let hero = HeroEntity::new(HeroKind::Hulk, Vec3::new(0.0, 1.0, 0.0), 0.1);
        let indicator = hero.indicator_position(Vec3::new(0.0, 0.2, 0.0));

        assert_eq!(indicator, Vec3::new(0.0, 1.2, 0.0));
    }

    #[test]
    fn test_asset_names_match_catalog() {
        assert_eq!(HeroKind::IronMan.asset_name(), "ironMan");
        assert_eq!(HeroKind::CaptainAmerica.asset_name(), "captainAmerica");
    }
}
