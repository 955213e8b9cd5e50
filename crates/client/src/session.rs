//! One headless run from content load to summary.

use anyhow::{Context, Result};
use skirmish_content::ContentFactory;
use skirmish_core::env::{AssetTable, DrawList};
use skirmish_core::{ClipLibrary, GameEvent, Scene};
use tracing::{debug, info};

use crate::config::HeadlessConfig;
use crate::script::InputScript;

/// Outcome of a finished session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSummary {
    pub frames: u64,
    pub steps: u64,
    pub elapsed: f32,
    pub score: u32,
    pub kills: u32,
    pub waves: u32,
    pub hero_health: u32,
    pub hero_alive: bool,
    pub hits_taken: u32,
}

pub struct Session {
    config: HeadlessConfig,
    scene: Scene,
    script: InputScript,
    surface: DrawList,
}

impl Session {
    /// Loads content from the configured directory and builds the scene.
    pub fn new(config: HeadlessConfig) -> Result<Self> {
        let mut content = ContentFactory::new(&config.content_dir)
            .load()
            .with_context(|| format!("loading content from {}", config.content_dir.display()))?;
        if let Some(seed) = config.seed {
            content.config.world.seed = seed;
        }

        let assets = asset_table(&content.clips);
        let scene = Scene::new(content.config, content.clips)
            .context("building scene")?
            .with_assets(assets);

        Ok(Self {
            config,
            scene,
            script: InputScript::default(),
            surface: DrawList::default(),
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Runs until the configured time is simulated or the hero falls.
    pub fn run(&mut self) -> SessionSummary {
        let dt = self.config.frame_dt;
        let frame_budget = (f64::from(self.config.seconds) / f64::from(dt)).ceil() as u64;
        let mut summary = SessionSummary::default();

        info!(
            seconds = self.config.seconds,
            frame_dt = dt,
            seed = self.scene.config().world.seed,
            "session started"
        );

        for frame in 0..frame_budget {
            let buttons = self.script.buttons(frame, dt);
            let report = self.scene.frame(dt, buttons);
            summary.frames += 1;
            summary.hits_taken += report
                .events
                .iter()
                .filter(|event| matches!(event, GameEvent::HeroDamaged { .. }))
                .count() as u32;

            self.surface.clear();
            self.scene.render(&mut self.surface);

            if frame % 60 == 0 {
                if let Some(focus) = self.scene.camera_focus() {
                    debug!(
                        frame,
                        position = %focus.position,
                        velocity = %focus.velocity,
                        sprites = self.surface.sprites.len(),
                        enemies = self.scene.enemy_count(),
                        "frame"
                    );
                }
            }
            if self.scene.is_over() {
                break;
            }
        }

        summary.steps = self.scene.steps();
        summary.elapsed = self.scene.elapsed();
        summary.score = self.scene.score();
        summary.kills = self.scene.kills();
        summary.waves = self.scene.waves();
        summary.hero_health = self.scene.hero_controller().map_or(0, |c| c.health());
        summary.hero_alive = !self.scene.is_over();
        summary
    }
}

/// Registers every texture the clip library names, plus the sound cues the
/// simulation plays.
fn asset_table(clips: &ClipLibrary) -> AssetTable {
    let mut assets = AssetTable::new();
    let names: Vec<String> = clips
        .set_names()
        .filter_map(|name| clips.set(name))
        .flat_map(|set| set.values().map(|spec| spec.texture.clone()))
        .collect();
    for texture in names {
        assets.register_texture(texture);
    }
    for sound in ["sword", "shoot", "swing", "bow", "hit", "hurt", "death"] {
        assets.register_sound(sound);
    }
    assets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_run() -> HeadlessConfig {
        HeadlessConfig {
            content_dir: "does-not-exist".into(),
            seconds: 2.0,
            ..HeadlessConfig::default()
        }
    }

    #[test]
    fn missing_content_dir_runs_on_defaults() {
        let mut session = Session::new(short_run()).unwrap();
        let summary = session.run();

        assert_eq!(summary.frames, 120);
        assert!(summary.steps >= 119);
        assert!(summary.hero_alive);
        assert_eq!(summary.waves, 1);
    }

    #[test]
    fn same_seed_same_outcome() {
        let config = HeadlessConfig {
            seed: Some(7),
            ..short_run()
        };
        let first = Session::new(config.clone()).unwrap().run();
        let second = Session::new(config).unwrap().run();
        assert_eq!(first, second);
    }

    #[test]
    fn assets_cover_builtin_textures() {
        let assets = asset_table(&ClipLibrary::builtin());
        use skirmish_core::AssetOracle;
        for texture in ["hero", "orc", "skeleton", "arrow", "bolt", "slash", "blood"] {
            assert!(assets.texture(texture).is_some(), "{texture}");
        }
    }
}
