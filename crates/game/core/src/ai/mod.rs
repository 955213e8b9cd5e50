//! Enemy behavior.
//!
//! Each enemy runs one [`BehaviorState`] at a time. The transition rules of
//! the two archetypes live in [`melee`] and [`ranged`] as pure functions of
//! an [`Assessment`]; [`EnemyBrain`] owns the state, timers and senses and
//! carries out whatever the active state asks for.
mod brain;
pub mod melee;
pub mod ranged;

pub use brain::{EnemyBrain, Senses};

use crate::config::EnemyConfig;
use crate::math::Vec2;

/// Enemy family; selects the transition table and the attack.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Archetype {
    Melee,
    Ranged,
}

/// Active behavior of one enemy, with the short-lived data it owns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BehaviorState {
    Patrol {
        heading: Vec2,
        /// Seconds until the wander heading is re-rolled.
        reroll_in: f32,
    },
    Chase,
    Positioning,
    Attack {
        /// Seconds accumulated toward the next strike.
        cooldown: f32,
    },
    Retreat,
}

/// Data-free name of a [`BehaviorState`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum BehaviorTag {
    Patrol,
    Chase,
    Positioning,
    Attack,
    Retreat,
}

impl BehaviorState {
    pub fn tag(&self) -> BehaviorTag {
        match self {
            Self::Patrol { .. } => BehaviorTag::Patrol,
            Self::Chase => BehaviorTag::Chase,
            Self::Positioning => BehaviorTag::Positioning,
            Self::Attack { .. } => BehaviorTag::Attack,
            Self::Retreat => BehaviorTag::Retreat,
        }
    }

    /// Fresh state for `tag`; timers start from zero.
    pub fn enter(tag: BehaviorTag) -> Self {
        match tag {
            BehaviorTag::Patrol => Self::Patrol {
                heading: Vec2::ZERO,
                reroll_in: 0.0,
            },
            BehaviorTag::Chase => Self::Chase,
            BehaviorTag::Positioning => Self::Positioning,
            BehaviorTag::Attack => Self::Attack { cooldown: 0.0 },
            BehaviorTag::Retreat => Self::Retreat,
        }
    }
}

impl BehaviorTag {
    /// States in which the enemy is not trying to hurt the player.
    pub fn is_disengaged(self) -> bool {
        matches!(self, Self::Retreat | Self::Positioning)
    }
}

/// Facts a transition table looks at, recomputed every step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Assessment {
    pub detected: bool,
    pub should_retreat: bool,
    pub in_attack_range: bool,
    pub at_optimal_distance: bool,
}

impl Assessment {
    /// Evaluates the gates for an enemy at `distance` from the player.
    ///
    /// Range checks compare squared distances; the stand-off band is
    /// `|distance - optimal| <= 0.2 * optimal`.
    pub fn evaluate(config: &EnemyConfig, senses: &Senses, health_ratio: f32) -> Self {
        let Some(distance_sq) = senses.distance_squared() else {
            return Self {
                should_retreat: health_ratio <= config.retreat_threshold,
                ..Self::default()
            };
        };
        let optimal = config.optimal_distance;
        Self {
            detected: senses.detected,
            should_retreat: health_ratio <= config.retreat_threshold,
            in_attack_range: distance_sq <= config.attack_radius * config.attack_radius,
            at_optimal_distance: optimal > 0.0 && (distance_sq.sqrt() - optimal).abs() <= optimal * 0.2,
        }
    }
}

/// Transition table entry point for an archetype.
pub fn next_state(archetype: Archetype, current: BehaviorTag, assessment: &Assessment) -> Option<BehaviorTag> {
    match archetype {
        Archetype::Melee => melee::next_state(current, assessment),
        Archetype::Ranged => ranged::next_state(current, assessment),
    }
}
