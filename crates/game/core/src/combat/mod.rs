//! Damage, projectiles and the collision reactions that connect them.
mod effect;
mod projectile;
mod reactions;

pub use effect::Effect;
pub use projectile::{Faction, Projectile};
pub use reactions::{damage_enemy, damage_hero, hero_contact, projectile_contact};

use crate::math::Vec2;

/// A single blow: how much, from where, and how hard it pushes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub amount: u32,
    /// Point the knockback pushes away from.
    pub source: Vec2,
    pub force: f32,
}

/// Result of applying a [`Hit`] to an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Target was already dead.
    Ignored,
    Wounded { remaining: u32 },
    Killed,
}

impl DamageOutcome {
    pub fn landed(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}
