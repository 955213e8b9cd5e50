//! Game configuration loader.

use std::path::Path;

use skirmish_core::GameConfig;
use toml::{Table, Value};

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing a partial or full GameConfig
    ///
    /// # Returns
    ///
    /// Returns a validated GameConfig.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Parse config text.
    ///
    /// Keys missing from `content` keep the value of [`GameConfig::new`] for
    /// their own section, so `[ranged]` with a single key still gets the
    /// ranged defaults for everything else.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let overrides: Table = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let mut merged = Value::try_from(GameConfig::new())
            .map_err(|e| anyhow::anyhow!("Failed to encode default config: {}", e))?;
        overlay(&mut merged, Value::Table(overrides));

        let config: GameConfig = merged
            .try_into()
            .map_err(|e| anyhow::anyhow!("Failed to decode config: {}", e))?;
        config.validate()?;

        Ok(config)
    }
}

/// Recursively replaces values in `base` with those present in `patch`.
fn overlay(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Table(base), Value::Table(patch)) => {
            for (key, value) in patch {
                match base.get_mut(&key) {
                    Some(existing) => overlay(existing, value),
                    None => {
                        tracing::debug!(key = %key, "unknown config key ignored");
                    }
                }
            }
        }
        (base, patch) => *base = patch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::ConfigError;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::new());
    }

    #[test]
    fn partial_sections_keep_their_own_defaults() {
        let config = ConfigLoader::parse(
            r#"
            [ranged]
            damage = 25

            [hero]
            spawn = { x = 400.0, y = 300.0 }
            speed = 350
            "#,
        )
        .unwrap();

        assert_eq!(config.ranged.damage, 25);
        assert_eq!(config.ranged.optimal_distance, 200.0);
        assert_eq!(config.ranged.attack_radius, 300.0);
        assert_eq!(config.hero.spawn.x, 400.0);
        assert_eq!(config.hero.speed, 350.0);
        assert_eq!(config.melee, GameConfig::new().melee);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = ConfigLoader::parse("[melee]\nretreat_threshold = 2.0\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::OutOfUnitRange { .. })
        ));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(ConfigLoader::parse("[world\nwidth = ").is_err());
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[waves]\ninitial = 3\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.waves.initial, 3);
        assert!(ConfigLoader::load(&dir.path().join("missing.toml")).is_err());
    }
}
