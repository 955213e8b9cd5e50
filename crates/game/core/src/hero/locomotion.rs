use super::{HeroController, MovementIntent};
use crate::entity::{Component, ComponentKind, ComponentType, Entity, FrameContext, component_boilerplate};
use crate::math::Vec2;

/// Smoothed, bounded movement driven by the hero controller's intent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Locomotion {
    pub speed: f32,
    /// Approach rate toward the target velocity, per second.
    pub smoothing: f32,
    pub body_radius: f32,
    velocity: Vec2,
}

impl Locomotion {
    pub fn new(speed: f32, smoothing: f32, body_radius: f32) -> Self {
        Self {
            speed,
            smoothing,
            body_radius,
            velocity: Vec2::ZERO,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Updates velocity for `intent` and returns it.
    pub fn steer(&mut self, intent: MovementIntent, dt: f32) -> Vec2 {
        self.velocity = match intent {
            MovementIntent::Halt => Vec2::ZERO,
            MovementIntent::Burst(velocity) => velocity,
            MovementIntent::Steer(direction) => {
                let target = direction * self.speed;
                let blend = (self.smoothing * dt).min(1.0);
                self.velocity + (target - self.velocity) * blend
            }
        };
        self.velocity
    }
}

impl Component for Locomotion {
    component_boilerplate!();

    fn update(&mut self, owner: &mut Entity, ctx: &mut FrameContext<'_>) {
        let intent = owner
            .get::<HeroController>()
            .map_or(MovementIntent::Steer(Vec2::ZERO), HeroController::intent);
        let velocity = self.steer(intent, ctx.dt);
        owner.position = ctx
            .bounds
            .clamp_to_limits(owner.position + velocity * ctx.dt, self.body_radius);
    }
}

impl ComponentType for Locomotion {
    const KIND: ComponentKind = ComponentKind::Locomotion;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_eases_toward_target() {
        let mut motion = Locomotion::new(300.0, 10.0, 25.0);
        let first = motion.steer(MovementIntent::Steer(Vec2::RIGHT), 1.0 / 60.0);
        assert!(first.x > 0.0 && first.x < 300.0);

        for _ in 0..120 {
            motion.steer(MovementIntent::Steer(Vec2::RIGHT), 1.0 / 60.0);
        }
        assert!((motion.velocity().x - 300.0).abs() < 1.0);
    }

    #[test]
    fn halt_stops_dead() {
        let mut motion = Locomotion::new(300.0, 10.0, 25.0);
        motion.steer(MovementIntent::Burst(Vec2::new(900.0, 0.0)), 0.1);
        assert_eq!(motion.steer(MovementIntent::Halt, 0.1), Vec2::ZERO);
    }
}
