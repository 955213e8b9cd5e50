//! Transient push applied when an actor takes a hit.
//!
//! Knockback runs beside whatever state is active; it only moves the
//! actor and never selects a state.

use crate::math::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Knockback {
    velocity: Vec2,
    remaining: f32,
    /// Fraction of velocity shed per second.
    decay_rate: f32,
}

impl Knockback {
    pub fn new(decay_rate: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            remaining: 0.0,
            decay_rate,
        }
    }

    /// Pushes from `source` through `position` with `force` pixels/s.
    ///
    /// A zero offset pushes up. A new impulse replaces any push in progress.
    pub fn apply_impulse(&mut self, source: Vec2, position: Vec2, force: f32, duration: f32) {
        let direction = (position - source).normalize_or(Vec2::UP);
        self.velocity = direction * force;
        self.remaining = duration;
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn velocity(&self) -> Vec2 {
        if self.is_active() { self.velocity } else { Vec2::ZERO }
    }

    /// Advances the push and returns this step's displacement.
    pub fn step(&mut self, dt: f32) -> Vec2 {
        if !self.is_active() {
            return Vec2::ZERO;
        }
        let displacement = self.velocity * dt;
        self.velocity *= 1.0 - (self.decay_rate * dt).min(1.0);
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.clear();
        }
        displacement
    }

    pub fn clear(&mut self) {
        self.velocity = Vec2::ZERO;
        self.remaining = 0.0;
    }
}
