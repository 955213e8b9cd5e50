//! Gameplay outcomes reported by collision reactions to the scene.

use crate::ai::Archetype;
use crate::entity::EntityId;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    EnemyKilled {
        enemy: EntityId,
        archetype: Archetype,
        reward: u32,
    },
    HeroDamaged {
        amount: u32,
        remaining: u32,
    },
    HeroKilled,
}
