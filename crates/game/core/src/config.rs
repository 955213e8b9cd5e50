//! Game configuration constants and tunable parameters.
//!
//! Every struct here has a complete `Default`, and with the `serde` feature
//! every field is optional on load, so a partial TOML file only overrides
//! what it names.

use crate::error::{ErrorSeverity, GameError};
use crate::math::Vec2;

/// Errors raised by [`GameConfig::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A length, speed, duration or health value must be strictly positive.
    #[error("{field} must be positive (got {value})")]
    NonPositive {
        /// Dotted path of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A ratio must lie in `[0, 1]`.
    #[error("{field} must be within [0, 1] (got {value})")]
    OutOfUnitRange {
        /// Dotted path of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// Spawn ring minimum exceeds its maximum.
    #[error("wave spawn ring is inverted (min {min} > max {max})")]
    InvertedSpawnRing {
        /// Minimum spawn distance.
        min: f32,
        /// Maximum spawn distance.
        max: f32,
    },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::NonPositive { .. } => "CONFIG_NON_POSITIVE",
            ConfigError::OutOfUnitRange { .. } => "CONFIG_OUT_OF_UNIT_RANGE",
            ConfigError::InvertedSpawnRing { .. } => "CONFIG_INVERTED_SPAWN_RING",
        }
    }
}

/// Top-level tunables for one game scene.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub world: WorldConfig,
    pub hero: HeroConfig,
    pub melee: EnemyConfig,
    pub ranged: EnemyConfig,
    pub waves: WaveConfig,
}

impl GameConfig {
    /// Capacity of the hero state stack (suspend/resume depth).
    pub const MAX_STATE_STACK: usize = 4;
    /// Number of lifecycle events each actor keeps for inspection.
    pub const LIFECYCLE_LOG_LEN: usize = 16;

    pub fn new() -> Self {
        Self {
            world: WorldConfig::default(),
            hero: HeroConfig::default(),
            melee: EnemyConfig::melee(),
            ranged: EnemyConfig::ranged(),
            waves: WaveConfig::default(),
        }
    }

    /// Checks every tunable the simulation divides by or compares against.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("world.width", self.world.width)?;
        positive("world.height", self.world.height)?;
        positive("world.fixed_step", self.world.fixed_step)?;
        positive("world.max_steps_per_frame", self.world.max_steps_per_frame as f32)?;

        positive("hero.max_health", self.hero.max_health as f32)?;
        positive("hero.speed", self.hero.speed)?;
        positive("hero.hurt_duration", self.hero.hurt_duration)?;
        positive("hero.knockback_decay", self.hero.knockback_decay)?;
        positive("hero.dash_duration", self.hero.dash_duration)?;

        self.melee.validate(&MELEE_FIELDS)?;
        self.ranged.validate(&RANGED_FIELDS)?;

        positive("waves.interval", self.waves.interval)?;
        if self.waves.min_distance > self.waves.max_distance {
            return Err(ConfigError::InvertedSpawnRing {
                min: self.waves.min_distance,
                max: self.waves.max_distance,
            });
        }
        Ok(())
    }

    /// Tunables for one enemy archetype.
    pub fn enemy(&self, archetype: crate::ai::Archetype) -> &EnemyConfig {
        match archetype {
            crate::ai::Archetype::Melee => &self.melee,
            crate::ai::Archetype::Ranged => &self.ranged,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn unit(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { field, value })
    }
}

/// Play area and simulation clock.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    /// Play area width; the area starts at the origin.
    pub width: f32,
    /// Play area height.
    pub height: f32,
    /// Simulation step in seconds.
    pub fixed_step: f32,
    /// Upper bound on simulation steps run for one rendered frame.
    pub max_steps_per_frame: u32,
    /// Seed for every random roll in the scene.
    pub seed: u64,
    /// Seconds a finished corpse lingers before the cleanup pass removes it.
    pub corpse_lifetime: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 3000.0,
            height: 2500.0,
            fixed_step: 1.0 / 60.0,
            max_steps_per_frame: 5,
            seed: 0x5EED,
            corpse_lifetime: 5.0,
        }
    }
}

/// Player tunables.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeroConfig {
    pub spawn: Vec2,
    pub max_health: u32,
    pub speed: f32,
    /// Radius kept inside the world bounds.
    pub body_radius: f32,
    pub hitbox_size: Vec2,
    /// Exponential approach rate of velocity toward the input target.
    pub velocity_smoothing: f32,
    pub hurt_duration: f32,
    pub knockback_decay: f32,
    pub knockback_duration: f32,
    /// Damage taken when touched by an engaged enemy.
    pub contact_damage: u32,
    pub contact_knockback: f32,
    /// Damage dealt to an enemy by a sword swing.
    pub strike_damage: u32,
    pub strike_knockback: f32,
    /// Distance in front of the hero where the swing lands.
    pub strike_reach: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub bolt_speed: f32,
    pub bolt_damage: u32,
    pub bolt_lifetime: f32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            spawn: Vec2::new(1000.0, 1000.0),
            max_health: 100,
            speed: 300.0,
            body_radius: 25.0,
            hitbox_size: Vec2::new(50.0, 50.0),
            velocity_smoothing: 10.0,
            hurt_duration: 0.4,
            knockback_decay: 4.0,
            knockback_duration: 0.25,
            contact_damage: 10,
            contact_knockback: 500.0,
            strike_damage: 100,
            strike_knockback: 600.0,
            strike_reach: 40.0,
            dash_speed: 900.0,
            dash_duration: 0.15,
            bolt_speed: 500.0,
            bolt_damage: 50,
            bolt_lifetime: 2.0,
        }
    }
}

/// Tunables for one enemy archetype.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnemyConfig {
    pub max_health: u32,
    pub speed: f32,
    pub detection_radius: f32,
    pub attack_radius: f32,
    /// Health ratio at or below which the enemy retreats.
    pub retreat_threshold: f32,
    /// Seconds between strikes while in the attack state.
    pub attack_cooldown: f32,
    pub damage: u32,
    /// Knockback force of this enemy's strikes.
    pub strike_force: f32,
    pub hitbox_size: Vec2,
    /// Score granted to the hero for the kill.
    pub reward: u32,
    /// Preferred stand-off distance; zero for archetypes that close in.
    pub optimal_distance: f32,
    pub projectile_speed: f32,
    pub projectile_lifetime: f32,
    pub knockback_decay: f32,
    pub knockback_duration: f32,
    /// Seconds between wander direction re-rolls while patrolling.
    pub wander_interval: f32,
    /// Patrol distance from spawn after which the wander bends home.
    pub leash_distance: f32,
}

impl EnemyConfig {
    pub fn melee() -> Self {
        Self {
            max_health: 100,
            speed: 100.0,
            detection_radius: 300.0,
            attack_radius: 60.0,
            retreat_threshold: 0.25,
            attack_cooldown: 1.0,
            damage: 15,
            strike_force: 300.0,
            hitbox_size: Vec2::new(60.0, 60.0),
            reward: 100,
            optimal_distance: 0.0,
            projectile_speed: 0.0,
            projectile_lifetime: 0.15,
            knockback_decay: 3.0,
            knockback_duration: 0.3,
            wander_interval: 2.0,
            leash_distance: 300.0,
        }
    }

    pub fn ranged() -> Self {
        Self {
            attack_radius: 300.0,
            attack_cooldown: 2.0,
            damage: 10,
            reward: 150,
            optimal_distance: 200.0,
            projectile_speed: 400.0,
            projectile_lifetime: 3.0,
            ..Self::melee()
        }
    }

    /// Half-extent used to keep the body inside the world bounds.
    pub fn body_radius(&self) -> f32 {
        self.hitbox_size.x.max(self.hitbox_size.y) * 0.5
    }

    fn validate(&self, fields: &EnemyFieldNames) -> Result<(), ConfigError> {
        positive(fields.max_health, self.max_health as f32)?;
        positive(fields.detection_radius, self.detection_radius)?;
        positive(fields.attack_radius, self.attack_radius)?;
        unit(fields.retreat_threshold, self.retreat_threshold)?;
        positive(fields.attack_cooldown, self.attack_cooldown)?;
        if let Some(optimal) = fields.optimal_distance {
            positive(optimal, self.optimal_distance)?;
        }
        Ok(())
    }
}

/// Dotted field paths reported by enemy validation.
struct EnemyFieldNames {
    max_health: &'static str,
    detection_radius: &'static str,
    attack_radius: &'static str,
    retreat_threshold: &'static str,
    attack_cooldown: &'static str,
    optimal_distance: Option<&'static str>,
}

const MELEE_FIELDS: EnemyFieldNames = EnemyFieldNames {
    max_health: "melee.max_health",
    detection_radius: "melee.detection_radius",
    attack_radius: "melee.attack_radius",
    retreat_threshold: "melee.retreat_threshold",
    attack_cooldown: "melee.attack_cooldown",
    optimal_distance: None,
};

const RANGED_FIELDS: EnemyFieldNames = EnemyFieldNames {
    max_health: "ranged.max_health",
    detection_radius: "ranged.detection_radius",
    attack_radius: "ranged.attack_radius",
    retreat_threshold: "ranged.retreat_threshold",
    attack_cooldown: "ranged.attack_cooldown",
    optimal_distance: Some("ranged.optimal_distance"),
};

impl Default for EnemyConfig {
    fn default() -> Self {
        Self::melee()
    }
}

/// Enemy wave spawning.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WaveConfig {
    /// Enemies spawned when the scene starts.
    pub initial: u32,
    /// Seconds between waves.
    pub interval: f32,
    pub per_wave: u32,
    /// No wave spawns while this many enemies are alive.
    pub max_alive: u32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            initial: 20,
            interval: 10.0,
            per_wave: 5,
            max_alive: 30,
            min_distance: 400.0,
            max_distance: 800.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(GameConfig::new().validate(), Ok(()));
    }

    #[test]
    fn ranged_inherits_melee_base() {
        let ranged = EnemyConfig::ranged();
        assert_eq!(ranged.detection_radius, 300.0);
        assert_eq!(ranged.optimal_distance, 200.0);
        assert_eq!(ranged.attack_cooldown, 2.0);
    }

    #[test]
    fn rejects_threshold_above_one() {
        let mut config = GameConfig::new();
        config.melee.retreat_threshold = 1.5;

        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::OutOfUnitRange {
                field: "melee.retreat_threshold",
                value: 1.5
            }
        );
        assert_eq!(err.error_code(), "CONFIG_OUT_OF_UNIT_RANGE");
    }

    #[test]
    fn rejects_ranged_without_stand_off() {
        let mut config = GameConfig::new();
        config.ranged.optimal_distance = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "ranged.optimal_distance",
                ..
            })
        ));
    }

    #[test]
    fn rejects_inverted_spawn_ring() {
        let mut config = GameConfig::new();
        config.waves.min_distance = 900.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedSpawnRing { .. })
        ));
    }
}
