use crate::animation::Animator;
use crate::entity::{Component, ComponentKind, ComponentType, Entity, FrameContext, component_boilerplate};

/// Cosmetic one-shot; done when its animation ends or its lifetime runs out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Effect {
    remaining: f32,
}

impl Effect {
    pub fn new(lifetime: f32) -> Self {
        Self { remaining: lifetime }
    }

    pub fn is_done(&self, owner: &Entity) -> bool {
        self.remaining <= 0.0 || owner.get::<Animator>().is_some_and(Animator::is_finished)
    }
}

impl Component for Effect {
    component_boilerplate!();

    fn update(&mut self, _owner: &mut Entity, ctx: &mut FrameContext<'_>) {
        self.remaining -= ctx.dt;
    }
}

impl ComponentType for Effect {
    const KIND: ComponentKind = ComponentKind::Effect;
}
