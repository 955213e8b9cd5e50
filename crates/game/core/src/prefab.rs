//! Constructors for every kind of entity the scene spawns.

use crate::ai::{Archetype, EnemyBrain};
use crate::animation::{ClipLibrary, sets};
use crate::collision::Hitbox;
use crate::combat::{Effect, Faction, Projectile, hero_contact, projectile_contact};
use crate::config::{EnemyConfig, HeroConfig};
use crate::entity::{Entity, category, tags};
use crate::env::SimRng;
use crate::hero::{HeroController, Locomotion};
use crate::math::Vec2;

/// Distance ahead of the archer where an arrow appears.
const ARROW_MUZZLE: f32 = 30.0;
const ARROW_SIZE: Vec2 = Vec2::new(16.0, 16.0);
const BOLT_SIZE: Vec2 = Vec2::new(16.0, 16.0);
const BOLT_FORCE: f32 = 200.0;
const SLASH_LIFETIME: f32 = 0.15;
const HERO_SLASH_SIZE: Vec2 = Vec2::new(60.0, 60.0);
const BLOOD_LIFETIME: f32 = 1.0;

pub fn hero(config: &HeroConfig, clips: &ClipLibrary) -> Entity {
    let mut animator = clips.animator(sets::HERO);
    animator.play("idle_down");

    Entity::new("Hero", category::PLAYER)
        .with_tag(tags::HERO)
        .at(config.spawn)
        .with(HeroController::new(config.clone()))
        .with(Locomotion::new(
            config.speed,
            config.velocity_smoothing,
            config.body_radius,
        ))
        .with(Hitbox::new(config.hitbox_size).with_on_enter(hero_contact(config)))
        .with(animator)
}

pub fn enemy(archetype: Archetype, config: &EnemyConfig, clips: &ClipLibrary, position: Vec2, rng: SimRng) -> Entity {
    let (name, tag, set) = match archetype {
        Archetype::Melee => ("Orc", tags::MELEE_ENEMY, sets::MELEE_ENEMY),
        Archetype::Ranged => ("Skeleton Archer", tags::RANGED_ENEMY, sets::RANGED_ENEMY),
    };
    let mut animator = clips.animator(set);
    animator.play("run_down");

    Entity::new(name, category::ENEMY)
        .with_tag(tags::ENEMY)
        .with_tag(tag)
        .at(position)
        .with(EnemyBrain::new(archetype, config.clone(), rng))
        .with(Hitbox::new(config.hitbox_size))
        .with(animator)
}

pub fn melee_enemy(config: &EnemyConfig, clips: &ClipLibrary, position: Vec2, rng: SimRng) -> Entity {
    enemy(Archetype::Melee, config, clips, position, rng)
}

pub fn ranged_enemy(config: &EnemyConfig, clips: &ClipLibrary, position: Vec2, rng: SimRng) -> Entity {
    enemy(Archetype::Ranged, config, clips, position, rng)
}

fn projectile(name: &str, tag: &str, set: &str, clip: &str, clips: &ClipLibrary) -> Entity {
    let mut animator = clips.animator(set);
    animator.play(clip);
    Entity::new(name, category::PROJECTILE)
        .with_tag(tag)
        .with(animator)
}

/// Enemy arrow flying along `direction`.
pub fn arrow(clips: &ClipLibrary, origin: Vec2, direction: Vec2, config: &EnemyConfig) -> Entity {
    let direction = direction.normalize_or(Vec2::DOWN);
    projectile("Arrow", tags::ARROW, sets::ARROW, "fly", clips)
        .at(origin + direction * ARROW_MUZZLE)
        .with(
            Projectile::new(
                Faction::Enemy,
                direction * config.projectile_speed,
                config.damage,
                config.projectile_lifetime,
            )
            .with_force(config.strike_force),
        )
        .with(Hitbox::new(ARROW_SIZE).with_on_enter(projectile_contact()))
}

/// Short-lived melee swing in front of an enemy.
pub fn enemy_slash(clips: &ClipLibrary, origin: Vec2, direction: Vec2, config: &EnemyConfig) -> Entity {
    let direction = direction.normalize_or(Vec2::DOWN);
    let reach = config.attack_radius * 0.5;
    projectile("Enemy Slash", tags::SLASH, sets::SLASH, "swing", clips)
        .at(origin + direction * reach)
        .with(
            Projectile::new(Faction::Enemy, Vec2::ZERO, config.damage, config.projectile_lifetime)
                .with_force(config.strike_force),
        )
        .with(Hitbox::new(Vec2::new(config.attack_radius, config.attack_radius)).with_on_enter(projectile_contact()))
}

/// Hero sword swing; hits every enemy it touches once.
pub fn hero_slash(clips: &ClipLibrary, position: Vec2, config: &HeroConfig) -> Entity {
    projectile("Hero Slash", tags::SLASH, sets::SLASH, "swing", clips)
        .at(position)
        .with(
            Projectile::new(Faction::Hero, Vec2::ZERO, config.strike_damage, SLASH_LIFETIME)
                .with_force(config.strike_knockback)
                .piercing(),
        )
        .with(Hitbox::new(HERO_SLASH_SIZE).with_on_enter(projectile_contact()))
}

/// Hero bolt fired along `direction`.
pub fn bolt(clips: &ClipLibrary, origin: Vec2, direction: Vec2, config: &HeroConfig) -> Entity {
    let direction = direction.normalize_or(Vec2::DOWN);
    projectile("Bolt", tags::BOLT, sets::BOLT, "fly", clips)
        .at(origin + direction * config.body_radius)
        .with(
            Projectile::new(
                Faction::Hero,
                direction * config.bolt_speed,
                config.bolt_damage,
                config.bolt_lifetime,
            )
            .with_force(BOLT_FORCE),
        )
        .with(Hitbox::new(BOLT_SIZE).with_on_enter(projectile_contact()))
}

/// One-shot blood splash.
pub fn blood(clips: &ClipLibrary, position: Vec2) -> Entity {
    let mut animator = clips.animator(sets::BLOOD);
    animator.play("splash");
    Entity::new("Blood", category::EFFECT)
        .with_tag(tags::BLOOD)
        .at(position)
        .with(Effect::new(BLOOD_LIFETIME))
        .with(animator)
}
