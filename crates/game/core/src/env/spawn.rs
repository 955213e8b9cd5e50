use crate::entity::Entity;

/// Registration point for entities created mid-frame.
///
/// Spawned entities join the scene's list only after the current step's
/// update and collision passes have finished.
pub trait SpawnSink {
    fn add_entity(&mut self, entity: Entity);
    fn add_effect(&mut self, effect: Entity);
}

/// Buffers spawns until the scene flushes them between steps.
#[derive(Default)]
pub struct SpawnQueue {
    entities: Vec<Entity>,
    effects: Vec<Entity>,
}

impl SpawnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entities.len() + self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drains gameplay entities first, then effects.
    pub fn drain(&mut self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.drain(..).chain(self.effects.drain(..))
    }
}

impl SpawnSink for SpawnQueue {
    fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    fn add_effect(&mut self, effect: Entity) {
        self.effects.push(effect);
    }
}
