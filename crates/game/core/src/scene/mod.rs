//! The game scene: a flat entity list driven one fixed step at a time.
//!
//! A step runs, in order: waves, input, enemy senses, entity updates,
//! collision resolution, event bookkeeping, cleanup, and finally the flush
//! of entities spawned during the step. The entity list is only resized in
//! the first and last two phases, never while updates or collision
//! reactions iterate it.
mod clock;
mod waves;

pub use clock::FixedStep;
pub use waves::{SpawnOrder, WaveSpawner};

use tracing::{debug, info};

use crate::ai::{Archetype, EnemyBrain};
use crate::animation::{Animator, ClipLibrary};
use crate::collision::{CollisionContext, CollisionResolver, ResolutionReport};
use crate::combat::{Effect, Projectile};
use crate::config::{ConfigError, GameConfig};
use crate::entity::{Entity, EntityId, EntityStore, FrameContext};
use crate::env::{AssetOracle, AudioSink, NoAssets, RenderSurface, SilentAudio, SimRng, SpawnQueue, WorldBounds};
use crate::events::GameEvent;
use crate::hero::{HeroController, Locomotion};
use crate::input::Buttons;
use crate::math::Vec2;
use crate::prefab;

/// What the camera may know about the player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraFocus {
    pub position: Vec2,
    /// Current velocity estimate, for look-ahead.
    pub velocity: Vec2,
}

/// Outcome of one simulation step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepReport {
    pub collisions: ResolutionReport,
    pub spawned: usize,
    pub removed: usize,
    pub events: Vec<GameEvent>,
}

/// Outcome of one rendered frame, possibly several steps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub steps: u32,
    pub events: Vec<GameEvent>,
}

pub struct Scene {
    config: GameConfig,
    bounds: WorldBounds,
    clips: ClipLibrary,
    assets: Box<dyn AssetOracle>,
    audio: Box<dyn AudioSink>,
    entities: EntityStore,
    hero: EntityId,
    resolver: CollisionResolver,
    spawns: SpawnQueue,
    events: Vec<GameEvent>,
    waves: WaveSpawner,
    clock: FixedStep,
    rng: SimRng,
    score: u32,
    kills: u32,
    steps: u64,
    elapsed: f32,
    hero_down: bool,
}

impl Scene {
    /// Validates `config`, places the hero and releases the opening wave.
    pub fn new(config: GameConfig, clips: ClipLibrary) -> Result<Self, ConfigError> {
        config.validate()?;

        let bounds = WorldBounds::from_size(config.world.width, config.world.height);
        let mut entities = EntityStore::new();
        let hero = entities.insert(prefab::hero(&config.hero, &clips));
        let mut scene = Self {
            bounds,
            assets: Box::new(NoAssets),
            audio: Box::new(SilentAudio),
            entities,
            hero,
            resolver: CollisionResolver::new(),
            spawns: SpawnQueue::new(),
            events: Vec::new(),
            waves: WaveSpawner::new(config.waves.clone()),
            clock: FixedStep::new(config.world.fixed_step, config.world.max_steps_per_frame),
            rng: SimRng::new(config.world.seed),
            score: 0,
            kills: 0,
            steps: 0,
            elapsed: 0.0,
            hero_down: false,
            clips,
            config,
        };

        let around = scene.hero_position().unwrap_or(scene.config.hero.spawn);
        let margin = scene.spawn_margin();
        let orders = scene.waves.initial(around, &scene.bounds, margin, &mut scene.rng);
        scene.spawn_orders(&orders);
        info!(
            hero = %scene.hero,
            enemies = orders.len(),
            width = scene.config.world.width,
            height = scene.config.world.height,
            "scene ready"
        );
        Ok(scene)
    }

    pub fn with_assets(mut self, assets: impl AssetOracle + 'static) -> Self {
        self.assets = Box::new(assets);
        self
    }

    pub fn with_audio(mut self, audio: impl AudioSink + 'static) -> Self {
        self.audio = Box::new(audio);
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn bounds(&self) -> &WorldBounds {
        &self.bounds
    }

    pub fn clips(&self) -> &ClipLibrary {
        &self.clips
    }

    pub fn entities(&self) -> &EntityStore {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut EntityStore {
        &mut self.entities
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id)
    }

    pub fn hero_id(&self) -> EntityId {
        self.hero
    }

    pub fn hero(&self) -> Option<&Entity> {
        self.entities.get(self.hero)
    }

    pub fn hero_controller(&self) -> Option<&HeroController> {
        self.hero()?.get::<HeroController>()
    }

    pub fn hero_position(&self) -> Option<Vec2> {
        self.hero().map(|hero| hero.position)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Simulated seconds.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn waves(&self) -> u32 {
        self.waves.waves()
    }

    /// The hero is dead or gone.
    pub fn is_over(&self) -> bool {
        self.hero_controller().is_none_or(HeroController::is_dead)
    }

    /// Living enemies.
    pub fn enemy_count(&self) -> usize {
        self.entities
            .iter()
            .filter(|entity| entity.get::<EnemyBrain>().is_some_and(|brain| !brain.is_dead()))
            .count()
    }

    /// Adds an entity between steps.
    pub fn insert(&mut self, entity: Entity) -> EntityId {
        self.entities.insert(entity)
    }

    /// Adds one enemy between steps.
    pub fn spawn_enemy(&mut self, archetype: Archetype, position: Vec2) -> EntityId {
        let rng = self.rng.fork(self.entities.len() as u32);
        let config = self.config.enemy(archetype);
        let id = self
            .entities
            .insert(prefab::enemy(archetype, config, &self.clips, position, rng));
        debug!(%id, %archetype, %position, "enemy spawned");
        id
    }

    fn spawn_orders(&mut self, orders: &[SpawnOrder]) {
        for order in orders {
            self.spawn_enemy(order.archetype, order.position);
        }
    }

    fn spawn_margin(&self) -> f32 {
        self.config.melee.body_radius().max(self.config.ranged.body_radius())
    }

    /// Camera input: hero position and velocity estimate.
    pub fn camera_focus(&self) -> Option<CameraFocus> {
        let hero = self.hero()?;
        let walking = hero.get::<Locomotion>().map_or(Vec2::ZERO, Locomotion::velocity);
        let pushed = hero
            .get::<HeroController>()
            .map_or(Vec2::ZERO, HeroController::knockback_velocity);
        Some(CameraFocus {
            position: hero.position,
            velocity: walking + pushed,
        })
    }

    /// Feeds real elapsed time through the fixed-step clock.
    pub fn frame(&mut self, real_dt: f32, buttons: Buttons) -> FrameReport {
        let steps = self.clock.advance(real_dt);
        let dt = self.clock.step();
        let mut report = FrameReport {
            steps,
            events: Vec::new(),
        };
        for _ in 0..steps {
            report.events.extend(self.step(dt, buttons).events);
        }
        report
    }

    /// Advances the simulation by exactly `dt` seconds.
    pub fn step(&mut self, dt: f32, buttons: Buttons) -> StepReport {
        self.steps += 1;
        self.elapsed += dt;

        self.release_waves(dt);

        for entity in self.entities.iter_mut() {
            entity.process_input(buttons);
        }

        self.refresh_senses();

        {
            let mut ctx = FrameContext {
                dt,
                bounds: &self.bounds,
                clips: &self.clips,
                assets: self.assets.as_ref(),
                audio: self.audio.as_mut(),
                spawns: &mut self.spawns,
            };
            for entity in self.entities.iter_mut() {
                entity.update(&mut ctx);
            }
        }

        let collisions = {
            let mut ctx = CollisionContext {
                entities: &mut self.entities,
                spawns: &mut self.spawns,
                events: &mut self.events,
                clips: &self.clips,
                assets: self.assets.as_ref(),
                audio: self.audio.as_mut(),
            };
            self.resolver.resolve(&mut ctx)
        };

        let events = std::mem::take(&mut self.events);
        self.apply_events(&events);

        let removed = self.cleanup();

        let spawned = self.spawns.len();
        for entity in self.spawns.drain() {
            self.entities.insert(entity);
        }

        StepReport {
            collisions,
            spawned,
            removed,
            events,
        }
    }

    fn release_waves(&mut self, dt: f32) {
        if self.hero_down {
            return;
        }
        let Some(around) = self.hero_position() else {
            return;
        };
        let alive = self.enemy_count() as u32;
        let margin = self.spawn_margin();
        let orders = self
            .waves
            .tick(dt, alive, around, &self.bounds, margin, &mut self.rng);
        if !orders.is_empty() {
            info!(wave = self.waves.waves(), count = orders.len(), alive, "wave released");
            self.spawn_orders(&orders);
        }
    }

    /// Detection is recomputed for every enemy from the hero's position.
    fn refresh_senses(&mut self) {
        let target = match self.hero() {
            Some(hero) if !self.hero_down => Some(hero.position),
            _ => None,
        };
        for entity in self.entities.iter_mut() {
            let position = entity.position;
            if let Some(brain) = entity.get_mut::<EnemyBrain>() {
                match target {
                    Some(player) => brain.observe_player(position, player),
                    None => brain.forget_player(),
                }
            }
        }
    }

    fn apply_events(&mut self, events: &[GameEvent]) {
        for event in events {
            match *event {
                GameEvent::EnemyKilled { reward, .. } => {
                    self.score += reward;
                    self.kills += 1;
                }
                GameEvent::HeroDamaged { .. } => {}
                GameEvent::HeroKilled => {
                    self.hero_down = true;
                    info!(score = self.score, kills = self.kills, elapsed = self.elapsed, "hero down");
                    for entity in self.entities.iter_mut() {
                        if let Some(brain) = entity.get_mut::<EnemyBrain>() {
                            brain.forget_player();
                        }
                    }
                }
            }
        }
    }

    /// Removes spent projectiles, finished effects and settled corpses.
    fn cleanup(&mut self) -> usize {
        let corpse_lifetime = self.config.world.corpse_lifetime;
        let hero = self.hero;
        let removed = self.entities.retain(|entity| {
            entity.id() == hero || !is_finished(entity, corpse_lifetime)
        });
        if removed > 0 {
            debug!(removed, remaining = self.entities.len(), "cleanup pass");
        }
        removed
    }

    /// Draws corpses first, then everything else from back (top) to front.
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        let mut order: Vec<&Entity> = self.entities.iter().collect();
        order.sort_by(|a, b| {
            is_corpse(b)
                .cmp(&is_corpse(a))
                .then(a.position.y.total_cmp(&b.position.y))
        });
        for entity in order {
            entity.render(surface, self.assets.as_ref());
        }
    }
}

fn is_corpse(entity: &Entity) -> bool {
    entity.get::<EnemyBrain>().is_some_and(EnemyBrain::is_dead)
}

fn is_finished(entity: &Entity, corpse_lifetime: f32) -> bool {
    if entity.get::<Projectile>().is_some_and(Projectile::is_expired) {
        return true;
    }
    if entity.get::<Effect>().is_some_and(|effect| effect.is_done(entity)) {
        return true;
    }
    entity.get::<EnemyBrain>().is_some_and(|brain| {
        brain.is_dead()
            && brain.time_dead() >= corpse_lifetime
            && entity.get::<Animator>().is_none_or(Animator::is_finished)
    })
}
