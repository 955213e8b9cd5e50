use tracing::{debug, info};

use super::{HeroFsm, HeroState, HeroStateKind};
use crate::animation::{Animator, Facing};
use crate::combat::{DamageOutcome, Hit};
use crate::config::HeroConfig;
use crate::entity::{Component, ComponentKind, ComponentType, Entity, FrameContext, component_boilerplate};
use crate::input::{Buttons, InputState};
use crate::knockback::Knockback;
use crate::math::Vec2;
use crate::prefab;

/// How the hero's state wants the body to move this step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MovementIntent {
    /// Stop immediately.
    Halt,
    /// Ease toward this unit direction at cruising speed.
    Steer(Vec2),
    /// Move at exactly this velocity.
    Burst(Vec2),
}

/// Player health, input and state machine.
#[derive(Clone, Debug)]
pub struct HeroController {
    config: HeroConfig,
    health: u32,
    fsm: HeroFsm,
    input: InputState,
    knockback: Knockback,
    facing: Facing,
}

impl HeroController {
    pub fn new(config: HeroConfig) -> Self {
        Self {
            health: config.max_health,
            knockback: Knockback::new(config.knockback_decay),
            config,
            fsm: HeroFsm::new(),
            input: InputState::default(),
            facing: Facing::Down,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.config.max_health
    }

    pub fn fsm(&self) -> &HeroFsm {
        &self.fsm
    }

    pub fn state(&self) -> HeroStateKind {
        self.fsm.kind()
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn is_dead(&self) -> bool {
        self.fsm.is_dead()
    }

    pub fn is_attacking(&self) -> bool {
        self.fsm.kind() == HeroStateKind::Attack
    }

    pub fn knockback_velocity(&self) -> Vec2 {
        self.knockback.velocity()
    }

    pub fn intent(&self) -> MovementIntent {
        match self.fsm.current() {
            HeroState::Attack | HeroState::Shoot | HeroState::Death => MovementIntent::Halt,
            HeroState::Dash { direction, .. } => MovementIntent::Burst(*direction * self.config.dash_speed),
            HeroState::Idle | HeroState::Run | HeroState::Hurt { .. } => {
                MovementIntent::Steer(self.input.direction())
            }
        }
    }

    /// Applies a hit taken at `position`.
    ///
    /// Any hit forces Hurt over the active state; the last point of health
    /// forces Death. Hits on a dead hero are ignored.
    pub fn take_damage(&mut self, hit: Hit, position: Vec2) -> DamageOutcome {
        if self.is_dead() {
            return DamageOutcome::Ignored;
        }
        self.health = self.health.saturating_sub(hit.amount);
        self.knockback.apply_impulse(
            hit.source,
            position,
            hit.force,
            self.config.knockback_duration,
        );
        if self.health == 0 {
            self.fsm.change(HeroState::Death);
            info!(damage = hit.amount, "hero killed");
            DamageOutcome::Killed
        } else {
            self.fsm.change(HeroState::Hurt { elapsed: 0.0 });
            debug!(damage = hit.amount, health = self.health, "hero hurt");
            DamageOutcome::Wounded {
                remaining: self.health,
            }
        }
    }

    /// Restores health up to the maximum. A dead hero stays dead.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.is_dead() {
            self.health = self.health.saturating_add(amount).min(self.config.max_health);
        }
        self.health
    }

    /// Switches to the state named `name`; unknown names are ignored.
    ///
    /// `dash` is pushed over the active state rather than replacing it.
    pub fn request(&mut self, name: &str) -> bool {
        let Ok(kind) = name.parse::<HeroStateKind>() else {
            debug!(name, "unknown hero state requested");
            return false;
        };
        let next = match kind {
            HeroStateKind::Idle => HeroState::Idle,
            HeroStateKind::Run => HeroState::Run,
            HeroStateKind::Attack => HeroState::Attack,
            HeroStateKind::Shoot => HeroState::Shoot,
            HeroStateKind::Hurt => HeroState::Hurt { elapsed: 0.0 },
            HeroStateKind::Death => HeroState::Death,
            HeroStateKind::Dash => {
                return self.fsm.push(HeroState::Dash {
                    remaining: self.config.dash_duration,
                    direction: self.facing.vector(),
                });
            }
        };
        self.fsm.change(next)
    }

    /// Picks the next state from input, timers and the clip. `None` stays.
    fn next_state(&mut self, dt: f32, clip_finished: bool) -> Option<Transition> {
        let moving = self.input.wants_to_move();
        let settle = if moving { HeroState::Run } else { HeroState::Idle };
        let idle = self.fsm.kind() == HeroStateKind::Idle;

        match self.fsm.current_mut() {
            HeroState::Idle | HeroState::Run => {
                if self.input.pressed(Buttons::ATTACK) {
                    Some(Transition::Change(HeroState::Attack))
                } else if self.input.held(Buttons::SHOOT) {
                    Some(Transition::Change(HeroState::Shoot))
                } else if moving && self.input.pressed(Buttons::DASH) {
                    Some(Transition::Push(HeroState::Dash {
                        remaining: self.config.dash_duration,
                        direction: self.input.direction(),
                    }))
                } else if idle && moving {
                    Some(Transition::Change(HeroState::Run))
                } else if !idle && !moving {
                    Some(Transition::Change(HeroState::Idle))
                } else {
                    None
                }
            }
            HeroState::Attack | HeroState::Shoot => clip_finished.then_some(Transition::Change(settle)),
            HeroState::Hurt { elapsed } => {
                *elapsed += dt;
                (*elapsed >= self.config.hurt_duration || clip_finished).then_some(Transition::Change(settle))
            }
            HeroState::Dash { remaining, .. } => {
                *remaining -= dt;
                (*remaining <= 0.0).then_some(Transition::Pop)
            }
            HeroState::Death => None,
        }
    }

    fn apply(&mut self, transition: Transition) {
        let applied = match transition {
            Transition::Change(next) => self.fsm.change(next),
            Transition::Push(next) => self.fsm.push(next),
            Transition::Pop => self.fsm.pop() || self.fsm.change(HeroState::Idle),
        };
        if !applied {
            debug!(state = %self.fsm.kind(), "hero transition refused");
        }
    }

    /// Entry-side effects of the state just entered.
    fn on_enter(&mut self, owner: &mut Entity, ctx: &mut FrameContext<'_>) {
        let kind = self.fsm.kind();
        match kind {
            HeroStateKind::Attack => {
                let reach = self.facing.vector() * self.config.strike_reach;
                ctx.spawns
                    .add_entity(prefab::hero_slash(ctx.clips, owner.position + reach, &self.config));
                ctx.play_sound("sword", 0.8);
            }
            HeroStateKind::Shoot => {
                ctx.spawns.add_entity(prefab::bolt(
                    ctx.clips,
                    owner.position,
                    self.facing.vector(),
                    &self.config,
                ));
                ctx.play_sound("shoot", 0.8);
            }
            HeroStateKind::Death => ctx.play_sound("death", 1.0),
            _ => {}
        }
        if let Some(animator) = owner.get_mut::<Animator>() {
            animator.play_facing(kind.clip(), self.facing, true);
        }
    }

    fn clip_finished(owner: &Entity) -> bool {
        owner.get::<Animator>().is_none_or(Animator::is_finished)
    }
}

#[derive(Clone, Copy, Debug)]
enum Transition {
    Change(HeroState),
    Push(HeroState),
    Pop,
}

impl Component for HeroController {
    component_boilerplate!();

    fn process_input(&mut self, _owner: &mut Entity, buttons: Buttons) {
        self.input.advance(buttons);
    }

    fn update(&mut self, owner: &mut Entity, ctx: &mut FrameContext<'_>) {
        let push = self.knockback.step(ctx.dt);
        if !push.is_zero() {
            owner.position = ctx
                .bounds
                .clamp_to_limits(owner.position + push, self.config.body_radius);
        }

        if !self.fsm.kind().is_committed() && !self.is_dead() {
            if let Some(facing) = Facing::from_vector(self.input.direction()) {
                self.facing = facing;
            }
        }

        if self.fsm.take_entered() {
            self.on_enter(owner, ctx);
        }
        if let Some(transition) = self.next_state(ctx.dt, Self::clip_finished(owner)) {
            self.apply(transition);
            if self.fsm.take_entered() {
                self.on_enter(owner, ctx);
            }
        }

        if let Some(animator) = owner.get_mut::<Animator>() {
            animator.play_facing(self.fsm.kind().clip(), self.facing, false);
        }
    }
}

impl ComponentType for HeroController {
    const KIND: ComponentKind = ComponentKind::HeroControl;
}
