//! Content loaders for reading game data from files.
//!
//! Each loader parses one file format into a skirmish-core type.
//! [`ContentFactory`] knows the data directory layout and ties them together.

pub mod clips;
pub mod config;
pub mod factory;

pub use clips::ClipLoader;
pub use config::ConfigLoader;
pub use factory::{Content, ContentFactory};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
