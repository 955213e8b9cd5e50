use crate::ai::Archetype;
use crate::config::WaveConfig;
use crate::env::{SimRng, WorldBounds};
use crate::math::Vec2;

/// Decides when and where enemy waves appear.
#[derive(Clone, Debug)]
pub struct WaveSpawner {
    config: WaveConfig,
    timer: f32,
    waves: u32,
}

/// One enemy the scene should create.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnOrder {
    pub archetype: Archetype,
    pub position: Vec2,
}

impl WaveSpawner {
    pub fn new(config: WaveConfig) -> Self {
        Self {
            config,
            timer: 0.0,
            waves: 0,
        }
    }

    /// Waves released so far, the initial one included.
    pub fn waves(&self) -> u32 {
        self.waves
    }

    /// The opening wave.
    pub fn initial(&mut self, around: Vec2, bounds: &WorldBounds, margin: f32, rng: &mut SimRng) -> Vec<SpawnOrder> {
        let count = self.config.initial.min(self.config.max_alive);
        if count > 0 {
            self.waves += 1;
        }
        self.place(count, around, bounds, margin, rng)
    }

    /// Advances the wave timer; returns the enemies due this step.
    ///
    /// A due wave is skipped while `alive` is at the cap and is trimmed so
    /// the cap is never exceeded.
    pub fn tick(
        &mut self,
        dt: f32,
        alive: u32,
        around: Vec2,
        bounds: &WorldBounds,
        margin: f32,
        rng: &mut SimRng,
    ) -> Vec<SpawnOrder> {
        self.timer += dt;
        if self.timer < self.config.interval {
            return Vec::new();
        }
        self.timer -= self.config.interval;
        if alive >= self.config.max_alive {
            return Vec::new();
        }
        self.waves += 1;
        let count = self.config.per_wave.min(self.config.max_alive - alive);
        self.place(count, around, bounds, margin, rng)
    }

    fn place(&self, count: u32, around: Vec2, bounds: &WorldBounds, margin: f32, rng: &mut SimRng) -> Vec<SpawnOrder> {
        (0..count)
            .map(|_| {
                let angle = rng.angle();
                let distance = rng.range_f32(self.config.min_distance, self.config.max_distance);
                let offset = Vec2::new(angle.cos(), angle.sin()) * distance;
                let archetype = if rng.chance(0.5) {
                    Archetype::Melee
                } else {
                    Archetype::Ranged
                };
                SpawnOrder {
                    archetype,
                    position: bounds.clamp_to_limits(around + offset, margin),
                }
            })
            .collect()
    }
}
