use tracing::{debug, info};

use super::{Archetype, Assessment, BehaviorState, BehaviorTag, next_state};
use crate::animation::{Animator, Facing};
use crate::combat::{DamageOutcome, Hit};
use crate::config::EnemyConfig;
use crate::entity::{Component, ComponentKind, ComponentType, Entity, FrameContext, component_boilerplate};
use crate::env::SimRng;
use crate::fsm::LifecycleLog;
use crate::knockback::Knockback;
use crate::math::Vec2;
use crate::prefab;

/// What an enemy knows about the player this step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Senses {
    pub detected: bool,
    /// Player position at the last observation, `None` once forgotten.
    pub player: Option<Vec2>,
    /// Own position at the last observation.
    pub origin: Vec2,
}

impl Senses {
    pub fn distance_squared(&self) -> Option<f32> {
        self.player.map(|player| player.distance_squared(self.origin))
    }

    /// Unit vector toward the player, zero when unknown or coincident.
    pub fn toward_player(&self) -> Vec2 {
        self.player
            .map(|player| (player - self.origin).normalize_or_zero())
            .unwrap_or(Vec2::ZERO)
    }
}

/// Enemy health, senses and behavior state machine.
#[derive(Debug)]
pub struct EnemyBrain {
    archetype: Archetype,
    config: EnemyConfig,
    health: u32,
    dead: bool,
    time_dead: f32,
    state: BehaviorState,
    senses: Senses,
    knockback: Knockback,
    spawn_point: Vec2,
    facing: Facing,
    rng: SimRng,
    log: LifecycleLog<BehaviorTag>,
}

impl EnemyBrain {
    pub fn new(archetype: Archetype, config: EnemyConfig, rng: SimRng) -> Self {
        Self {
            archetype,
            health: config.max_health,
            knockback: Knockback::new(config.knockback_decay),
            config,
            dead: false,
            time_dead: 0.0,
            state: BehaviorState::enter(BehaviorTag::Patrol),
            senses: Senses::default(),
            spawn_point: Vec2::ZERO,
            facing: Facing::Down,
            rng,
            log: LifecycleLog::new(),
        }
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn config(&self) -> &EnemyConfig {
        &self.config
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn health_ratio(&self) -> f32 {
        self.health as f32 / self.config.max_health.max(1) as f32
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Seconds since death; zero while alive.
    pub fn time_dead(&self) -> f32 {
        self.time_dead
    }

    pub fn state(&self) -> &BehaviorState {
        &self.state
    }

    pub fn tag(&self) -> BehaviorTag {
        self.state.tag()
    }

    pub fn senses(&self) -> &Senses {
        &self.senses
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn spawn_point(&self) -> Vec2 {
        self.spawn_point
    }

    /// Retreating or positioning enemies do not hurt the player on contact.
    pub fn is_disengaged(&self) -> bool {
        self.tag().is_disengaged()
    }

    pub fn is_knocked_back(&self) -> bool {
        self.knockback.is_active()
    }

    pub fn lifecycle(&self) -> &LifecycleLog<BehaviorTag> {
        &self.log
    }

    /// Records where the player is relative to `own`.
    pub fn observe_player(&mut self, own: Vec2, player: Vec2) {
        self.senses = Senses {
            detected: own.distance_squared(player) <= self.config.detection_radius * self.config.detection_radius,
            player: Some(player),
            origin: own,
        };
    }

    pub fn forget_player(&mut self) {
        self.senses = Senses {
            origin: self.senses.origin,
            ..Senses::default()
        };
    }

    /// Current transition gates.
    pub fn assess(&self) -> Assessment {
        Assessment::evaluate(&self.config, &self.senses, self.health_ratio())
    }

    /// Applies a hit taken at `position`. Dead enemies ignore hits.
    pub fn take_damage(&mut self, hit: Hit, position: Vec2) -> DamageOutcome {
        if self.dead {
            return DamageOutcome::Ignored;
        }
        self.health = self.health.saturating_sub(hit.amount);
        if self.health == 0 {
            self.dead = true;
            self.knockback.clear();
            info!(archetype = %self.archetype, state = %self.tag(), "enemy killed");
            return DamageOutcome::Killed;
        }
        self.knockback.apply_impulse(
            hit.source,
            position,
            hit.force,
            self.config.knockback_duration,
        );
        debug!(archetype = %self.archetype, health = self.health, "enemy hurt");
        DamageOutcome::Wounded {
            remaining: self.health,
        }
    }

    /// Restores health up to the maximum. Dead enemies stay dead.
    ///
    /// Nothing in the game heals enemies; this is a hook for scripted
    /// scenarios and tests that drive an enemy back out of retreat.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.dead {
            self.health = self.health.saturating_add(amount).min(self.config.max_health);
        }
        self.health
    }

    /// Swaps the active state; the old state's exit is logged before the new
    /// state's entry. Staying in the same state is not a transition.
    pub fn change_state(&mut self, tag: BehaviorTag) -> bool {
        let from = self.tag();
        if from == tag {
            return false;
        }
        self.log.transition(from, tag);
        self.state = BehaviorState::enter(tag);
        debug!(archetype = %self.archetype, %from, to = %tag, "enemy state change");
        true
    }

    /// Runs the transition table once.
    pub fn think(&mut self) -> bool {
        match next_state(self.archetype, self.tag(), &self.assess()) {
            Some(next) => self.change_state(next),
            None => false,
        }
    }

    fn step_toward(&self, owner: &mut Entity, direction: Vec2, speed: f32, ctx: &FrameContext<'_>) {
        let target = owner.position + direction * speed * ctx.dt;
        owner.position = ctx.bounds.clamp_to_limits(target, self.config.body_radius());
    }

    fn act(&mut self, owner: &mut Entity, ctx: &mut FrameContext<'_>) {
        let toward = self.senses.toward_player();
        let distance = self.senses.distance_squared().map(f32::sqrt);
        let speed = self.config.speed;

        let mut state = self.state;
        match &mut state {
            BehaviorState::Patrol { heading, reroll_in } => {
                *reroll_in -= ctx.dt;
                if *reroll_in <= 0.0 {
                    *reroll_in = self.config.wander_interval;
                    let angle = self.rng.angle();
                    *heading = Vec2::new(angle.cos(), angle.sin());
                }
                let home = self.spawn_point - owner.position;
                if home.length() > self.config.leash_distance {
                    *heading = (home.normalize_or_zero() * 0.7 + *heading * 0.3).normalize_or_zero();
                }
                self.step_toward(owner, *heading, speed, ctx);
            }
            BehaviorState::Chase => {
                if distance.is_some_and(|d| d > self.config.attack_radius * 0.8) {
                    self.step_toward(owner, toward, speed, ctx);
                }
            }
            BehaviorState::Positioning => {
                let optimal = self.config.optimal_distance;
                match distance {
                    Some(d) if d < optimal * 0.8 => self.step_toward(owner, -toward, speed, ctx),
                    Some(d) if d > optimal * 1.2 => self.step_toward(owner, toward, speed, ctx),
                    _ => {}
                }
            }
            BehaviorState::Attack { cooldown } => {
                *cooldown += ctx.dt;
                if *cooldown >= self.config.attack_cooldown {
                    *cooldown = 0.0;
                    self.strike(owner, toward, ctx);
                }
            }
            BehaviorState::Retreat => {
                self.step_toward(owner, -toward, speed * 1.2, ctx);
            }
        }
        self.state = state;
    }

    fn strike(&mut self, owner: &mut Entity, toward: Vec2, ctx: &mut FrameContext<'_>) {
        let direction = toward.normalize_or(self.facing.vector());
        let projectile = match self.archetype {
            Archetype::Melee => prefab::enemy_slash(ctx.clips, owner.position, direction, &self.config),
            Archetype::Ranged => prefab::arrow(ctx.clips, owner.position, direction, &self.config),
        };
        ctx.spawns.add_entity(projectile);
        ctx.play_sound(
            match self.archetype {
                Archetype::Melee => "swing",
                Archetype::Ranged => "bow",
            },
            0.6,
        );
        if let Some(animator) = owner.get_mut::<Animator>() {
            animator.play_facing("attack", self.facing, true);
        }
        debug!(archetype = %self.archetype, "enemy strikes");
    }

    fn animate(&self, owner: &mut Entity) {
        let Some(animator) = owner.get_mut::<Animator>() else {
            return;
        };
        if self.dead {
            animator.play("death");
            return;
        }
        let base = if self.knockback.is_active() {
            "hurt"
        } else if matches!(self.state, BehaviorState::Attack { .. }) {
            "attack"
        } else {
            "run"
        };
        animator.play_facing(base, self.facing, false);
    }
}

impl Component for EnemyBrain {
    component_boilerplate!();

    fn initialize(&mut self, owner: &mut Entity) {
        self.spawn_point = owner.position;
        self.senses.origin = owner.position;
    }

    fn update(&mut self, owner: &mut Entity, ctx: &mut FrameContext<'_>) {
        if self.dead {
            self.time_dead += ctx.dt;
            self.animate(owner);
            return;
        }

        if self.knockback.is_active() {
            let push = self.knockback.step(ctx.dt);
            owner.position = ctx.bounds.clamp_to_limits(owner.position + push, self.config.body_radius());
            self.animate(owner);
            return;
        }

        if self.senses.detected {
            if let Some(facing) = Facing::from_vector(self.senses.toward_player()) {
                self.facing = facing;
            }
        }

        self.think();
        self.act(owner, ctx);
        self.animate(owner);
    }
}

impl ComponentType for EnemyBrain {
    const KIND: ComponentKind = ComponentKind::EnemyBrain;
}
