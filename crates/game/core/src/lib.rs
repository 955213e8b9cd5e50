//! Frame-stepped simulation core for a top-down arena brawler.
//!
//! `skirmish-core` owns the entity/component model, hitbox collision with
//! enter and exit reactions, the hero and enemy state machines, knockback,
//! and the [`scene::Scene`] that steps them all. Rendering, audio, asset
//! lookup and spawning are reached through the narrow traits in [`env`], so
//! the whole simulation runs headless and under test.
pub mod ai;
pub mod animation;
pub mod collision;
pub mod combat;
pub mod config;
pub mod entity;
pub mod env;
pub mod error;
pub mod events;
pub mod fsm;
pub mod hero;
pub mod input;
pub mod knockback;
pub mod math;
pub mod prefab;
pub mod scene;

pub use ai::{Archetype, BehaviorState, BehaviorTag, EnemyBrain};
pub use animation::{Animator, Clip, ClipLibrary, ClipSpec, Facing};
pub use collision::{CollisionContext, CollisionResolver, Contact, Hitbox, ReactionError};
pub use combat::{DamageOutcome, Effect, Faction, Hit, Projectile};
pub use config::{ConfigError, EnemyConfig, GameConfig, HeroConfig, WaveConfig, WorldConfig};
pub use entity::{Component, ComponentKind, ComponentType, Entity, EntityId, EntityStore, FrameContext};
pub use env::{AssetOracle, AudioSink, RenderSurface, SimRng, SpawnSink, WorldBounds};
pub use error::{ErrorSeverity, GameError};
pub use events::GameEvent;
pub use hero::{HeroController, HeroState, HeroStateKind, Locomotion};
pub use input::{Buttons, InputState};
pub use knockback::Knockback;
pub use math::{Aabb, Vec2};
pub use scene::{CameraFocus, FixedStep, Scene, StepReport};
