#![allow(dead_code)]

use skirmish_core::env::{AssetTable, AudioLog, SpawnQueue};
use skirmish_core::{ClipLibrary, Entity, FrameContext, WorldBounds};

pub const DT: f32 = 1.0 / 60.0;

/// Everything a component update needs, owned in one place.
pub struct Harness {
    pub bounds: WorldBounds,
    pub clips: ClipLibrary,
    pub assets: AssetTable,
    pub audio: AudioLog,
    pub spawns: SpawnQueue,
}

impl Harness {
    pub fn new() -> Self {
        let mut assets = AssetTable::new();
        for sound in ["swing", "bow", "sword", "shoot", "hit", "hurt", "death"] {
            assets.register_sound(sound);
        }
        Self {
            bounds: WorldBounds::from_size(3000.0, 2500.0),
            clips: ClipLibrary::builtin(),
            assets,
            audio: AudioLog::default(),
            spawns: SpawnQueue::new(),
        }
    }

    pub fn update(&mut self, entity: &mut Entity) {
        let mut ctx = FrameContext {
            dt: DT,
            bounds: &self.bounds,
            clips: &self.clips,
            assets: &self.assets,
            audio: &mut self.audio,
            spawns: &mut self.spawns,
        };
        entity.update(&mut ctx);
    }

    pub fn spawned(&mut self) -> Vec<Entity> {
        self.spawns.drain().collect()
    }
}
