//! Headless host configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration required to run a headless session.
#[derive(Clone, Debug)]
pub struct HeadlessConfig {
    /// Directory holding `config.toml` and `clips.ron`.
    pub content_dir: PathBuf,
    /// Simulated seconds to run before stopping.
    pub seconds: f32,
    /// Host frame time fed to the fixed-step clock.
    pub frame_dt: f32,
    /// Overrides `world.seed` from the content config.
    pub seed: Option<u64>,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("data"),
            seconds: 60.0,
            frame_dt: 1.0 / 60.0,
            seed: None,
        }
    }
}

impl HeadlessConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SKIRMISH_CONTENT_DIR` - Content directory (default: `data`)
    /// - `SKIRMISH_SECONDS` - Simulated seconds to run (default: 60)
    /// - `SKIRMISH_FRAME_DT` - Host frame time in seconds (default: 1/60)
    /// - `SKIRMISH_SEED` - Seed override for the scene RNG (default: from config)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("SKIRMISH_CONTENT_DIR") {
            config.content_dir = PathBuf::from(dir);
        }
        if let Some(seconds) = read_env::<f32>("SKIRMISH_SECONDS") {
            config.seconds = seconds.max(0.0);
        }
        if let Some(frame_dt) = read_env::<f32>("SKIRMISH_FRAME_DT").filter(|dt| *dt > 0.0) {
            config.frame_dt = frame_dt;
        }
        config.seed = read_env::<u64>("SKIRMISH_SEED");

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
