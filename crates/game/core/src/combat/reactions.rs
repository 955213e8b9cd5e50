//! Collision reactions for hero contact and projectile hits.

use tracing::info;

use super::{DamageOutcome, Faction, Hit, Projectile};
use crate::ai::EnemyBrain;
use crate::collision::{CollisionContext, Contact, ReactionError};
use crate::config::HeroConfig;
use crate::entity::{ComponentKind, EntityId, tags};
use crate::events::GameEvent;
use crate::hero::HeroController;
use crate::prefab;

/// Applies `hit` to an enemy, reporting kills and spawning blood.
pub fn damage_enemy(
    ctx: &mut CollisionContext<'_>,
    enemy: EntityId,
    hit: Hit,
) -> Result<DamageOutcome, ReactionError> {
    let entity = ctx
        .entities
        .get_mut(enemy)
        .ok_or(ReactionError::MissingEntity(enemy))?;
    let position = entity.position;
    let brain = entity
        .get_mut::<EnemyBrain>()
        .ok_or(ReactionError::MissingComponent {
            entity: enemy,
            kind: ComponentKind::EnemyBrain,
        })?;

    let outcome = brain.take_damage(hit, position);
    if outcome == DamageOutcome::Killed {
        let archetype = brain.archetype();
        let reward = brain.config().reward;
        info!(%enemy, %archetype, reward, "enemy slain");
        ctx.events.push(GameEvent::EnemyKilled {
            enemy,
            archetype,
            reward,
        });
    }
    if outcome.landed() {
        ctx.spawns.add_effect(prefab::blood(ctx.clips, position));
        ctx.play_sound("hit", 0.8);
    }
    Ok(outcome)
}

/// Applies `hit` to the hero, reporting damage and death.
pub fn damage_hero(
    ctx: &mut CollisionContext<'_>,
    hero: EntityId,
    hit: Hit,
) -> Result<DamageOutcome, ReactionError> {
    let entity = ctx
        .entities
        .get_mut(hero)
        .ok_or(ReactionError::MissingEntity(hero))?;
    let position = entity.position;
    let controller = entity
        .get_mut::<HeroController>()
        .ok_or(ReactionError::MissingComponent {
            entity: hero,
            kind: ComponentKind::HeroControl,
        })?;

    let outcome = controller.take_damage(hit, position);
    match outcome {
        DamageOutcome::Ignored => return Ok(outcome),
        DamageOutcome::Wounded { remaining } => ctx.events.push(GameEvent::HeroDamaged {
            amount: hit.amount,
            remaining,
        }),
        DamageOutcome::Killed => {
            ctx.events.push(GameEvent::HeroDamaged {
                amount: hit.amount,
                remaining: 0,
            });
            ctx.events.push(GameEvent::HeroKilled);
        }
    }
    ctx.spawns.add_effect(prefab::blood(ctx.clips, position));
    ctx.play_sound("hurt", 1.0);
    Ok(outcome)
}

/// Reaction for the hero's hitbox touching an enemy.
///
/// An engaged enemy hurts the hero; retreating or positioning enemies are
/// harmless, and so is any enemy met mid-swing. Swing damage is carried only
/// by the hero slash. Dead participants are ignored.
pub fn hero_contact(
    config: &HeroConfig,
) -> impl FnMut(&mut CollisionContext<'_>, Contact) -> Result<(), ReactionError> + 'static {
    let contact_damage = config.contact_damage;
    let contact_force = config.contact_knockback;

    move |ctx, contact| {
        let Some(enemy) = ctx.entities.get(contact.other) else {
            return Ok(());
        };
        if !enemy.has_tag(tags::ENEMY) {
            return Ok(());
        }
        let enemy_position = enemy.position;
        let brain = enemy
            .get::<EnemyBrain>()
            .ok_or(ReactionError::MissingComponent {
                entity: contact.other,
                kind: ComponentKind::EnemyBrain,
            })?;
        if brain.is_dead() || brain.is_disengaged() {
            return Ok(());
        }

        let controller = ctx
            .entities
            .get(contact.this)
            .ok_or(ReactionError::MissingEntity(contact.this))?
            .get::<HeroController>()
            .ok_or(ReactionError::MissingComponent {
                entity: contact.this,
                kind: ComponentKind::HeroControl,
            })?;
        if controller.is_dead() || controller.is_attacking() {
            return Ok(());
        }

        let hit = Hit {
            amount: contact_damage,
            source: enemy_position,
            force: contact_force,
        };
        damage_hero(ctx, contact.this, hit)?;
        Ok(())
    }
}

/// Reaction for a projectile's hitbox touching anything.
///
/// The projectile damages the first living member of the opposing side it
/// meets and, unless piercing, is spent by the hit.
pub fn projectile_contact()
-> impl FnMut(&mut CollisionContext<'_>, Contact) -> Result<(), ReactionError> + 'static {
    move |ctx, contact| {
        let Some(target) = ctx.entities.get(contact.other) else {
            return Ok(());
        };
        let target_is_hero = target.has_tag(tags::HERO);
        let target_is_enemy = target.has_tag(tags::ENEMY);

        let entity = ctx
            .entities
            .get(contact.this)
            .ok_or(ReactionError::MissingEntity(contact.this))?;
        let projectile = entity
            .get::<Projectile>()
            .ok_or(ReactionError::MissingComponent {
                entity: contact.this,
                kind: ComponentKind::Projectile,
            })?;
        if projectile.is_expired() {
            return Ok(());
        }
        let faction = projectile.faction;
        let hit = Hit {
            amount: projectile.damage,
            source: projectile.impact_source(entity.position),
            force: projectile.force,
        };

        let outcome = match faction {
            Faction::Enemy if target_is_hero => damage_hero(ctx, contact.other, hit)?,
            Faction::Hero if target_is_enemy => damage_enemy(ctx, contact.other, hit)?,
            _ => return Ok(()),
        };
        if outcome.landed() {
            if let Some(projectile) = ctx
                .entities
                .get_mut(contact.this)
                .and_then(|entity| entity.get_mut::<Projectile>())
            {
                projectile.register_hit();
            }
        }
        Ok(())
    }
}
