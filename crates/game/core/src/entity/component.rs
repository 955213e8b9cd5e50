use std::any::Any;

use crate::animation::ClipLibrary;
use crate::env::{AssetOracle, AudioSink, RenderSurface, SpawnSink, WorldBounds};
use crate::input::Buttons;

use super::Entity;

/// Closed set of component slots an entity can fill.
///
/// The declaration order is the per-entity update order: decisions first
/// (brain, controller), then motion, then hitbox and animation, so the
/// animator always advances the clip chosen this step.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumCount,
)]
#[strum(serialize_all = "snake_case")]
pub enum ComponentKind {
    EnemyBrain,
    HeroControl,
    Locomotion,
    Projectile,
    Effect,
    Hitbox,
    Animator,
}

/// Per-step services handed to [`Component::update`].
pub struct FrameContext<'a> {
    pub dt: f32,
    pub bounds: &'a WorldBounds,
    pub clips: &'a ClipLibrary,
    pub assets: &'a dyn AssetOracle,
    pub audio: &'a mut dyn AudioSink,
    pub spawns: &'a mut dyn SpawnSink,
}

impl FrameContext<'_> {
    /// Plays a named sound if the host has it.
    pub fn play_sound(&mut self, name: &str, volume: f32) {
        if let Some(sound) = self.assets.sound(name) {
            self.audio.play(sound, volume);
        }
    }
}

/// Behavior unit attached to exactly one entity.
///
/// While a hook runs, the component is detached from its owner, so the hook
/// can freely read and mutate the owner's other components. Every hook is a
/// no-op by default.
pub trait Component: Any {
    fn kind(&self) -> ComponentKind;

    /// Runs once when attached, before the component is visible to others.
    fn initialize(&mut self, _owner: &mut Entity) {}

    fn process_input(&mut self, _owner: &mut Entity, _buttons: Buttons) {}

    fn update(&mut self, _owner: &mut Entity, _ctx: &mut FrameContext<'_>) {}

    fn render(&self, _owner: &Entity, _surface: &mut dyn RenderSurface, _assets: &dyn AssetOracle) {}

    /// Runs once when detached or replaced.
    fn release(&mut self, _owner: &mut Entity) {}

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Static slot of a concrete component type, used for typed lookup.
pub trait ComponentType: Component + Sized {
    const KIND: ComponentKind;
}

/// Implements the `Any` plumbing and `kind` for a component type.
macro_rules! component_boilerplate {
    () => {
        fn kind(&self) -> $crate::entity::ComponentKind {
            <Self as $crate::entity::ComponentType>::KIND
        }

        fn as_any(&self) -> &dyn ::std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
            self
        }
    };
}

pub(crate) use component_boilerplate;
