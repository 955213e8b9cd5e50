use crate::entity::{Component, ComponentKind, ComponentType, Entity, FrameContext, component_boilerplate};
use crate::math::Vec2;

/// Side a projectile fights for; it only damages the other side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Faction {
    Hero,
    Enemy,
}

/// Straight-moving damage carrier with a limited lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub faction: Faction,
    pub velocity: Vec2,
    pub damage: u32,
    pub force: f32,
    /// Piercing projectiles keep going after a hit.
    pub pierce: bool,
    remaining: f32,
    spent: bool,
    out_of_bounds: bool,
}

impl Projectile {
    pub fn new(faction: Faction, velocity: Vec2, damage: u32, lifetime: f32) -> Self {
        Self {
            faction,
            velocity,
            damage,
            force: 0.0,
            pierce: false,
            remaining: lifetime,
            spent: false,
            out_of_bounds: false,
        }
    }

    pub fn with_force(mut self, force: f32) -> Self {
        self.force = force;
        self
    }

    pub fn piercing(mut self) -> Self {
        self.pierce = true;
        self
    }

    /// Marks a landed hit; non-piercing projectiles stop dealing damage.
    pub fn register_hit(&mut self) {
        if !self.pierce {
            self.spent = true;
        }
    }

    pub fn is_spent(&self) -> bool {
        self.spent
    }

    /// Ready for the cleanup pass.
    pub fn is_expired(&self) -> bool {
        self.spent || self.out_of_bounds || self.remaining <= 0.0
    }

    /// Where knockback from this projectile pushes away from.
    pub fn impact_source(&self, position: Vec2) -> Vec2 {
        position - self.velocity.normalize_or_zero()
    }
}

impl Component for Projectile {
    component_boilerplate!();

    fn update(&mut self, owner: &mut Entity, ctx: &mut FrameContext<'_>) {
        if self.is_expired() {
            return;
        }
        owner.position += self.velocity * ctx.dt;
        self.remaining -= ctx.dt;
        if !ctx.bounds.is_in_limits(owner.position) {
            self.out_of_bounds = true;
        }
    }
}

impl ComponentType for Projectile {
    const KIND: ComponentKind = ComponentKind::Projectile;
}
