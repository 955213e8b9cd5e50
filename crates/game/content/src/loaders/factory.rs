//! Content factory for building scene inputs from data files.

use std::path::{Path, PathBuf};

use skirmish_core::{ClipLibrary, GameConfig};
use tracing::{debug, info};

use crate::loaders::{ClipLoader, ConfigLoader, LoadResult};

/// Everything a scene needs from disk.
#[derive(Clone, Debug)]
pub struct Content {
    pub config: GameConfig,
    pub clips: ClipLibrary,
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml   (optional)
/// └── clips.ron     (optional)
/// ```
///
/// A missing file falls back to the built-in defaults; a present but broken
/// file is an error.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const CLIPS_FILE: &'static str = "clips.ron";

    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.is_file() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::new());
        }
        ConfigLoader::load(&path)
    }

    /// Load animation clips from `clips.ron`, overlaid on the built-in sets.
    pub fn load_clips(&self) -> LoadResult<ClipLibrary> {
        let path = self.data_dir.join(Self::CLIPS_FILE);
        if !path.is_file() {
            debug!(path = %path.display(), "no clip file, using built-in clips");
            return Ok(ClipLibrary::builtin());
        }
        ClipLoader::load_over_builtin(&path)
    }

    /// Load every content file.
    pub fn load(&self) -> LoadResult<Content> {
        let content = Content {
            config: self.load_config()?,
            clips: self.load_clips()?,
        };
        info!(
            data_dir = %self.data_dir.display(),
            clip_sets = content.clips.set_names().count(),
            "content loaded"
        );
        Ok(content)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn empty_directory_loads_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let content = ContentFactory::new(dir.path()).load().unwrap();

        assert_eq!(content.config, GameConfig::new());
        assert_eq!(content.clips, ClipLibrary::builtin());
    }

    #[test]
    fn broken_file_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join(ContentFactory::CONFIG_FILE), "[world]\nwidth = -1.0\n").unwrap();

        assert!(ContentFactory::new(dir.path()).load().is_err());
    }
}
