//! Animation clip set loader.

use std::path::Path;

use skirmish_core::ClipLibrary;

use crate::loaders::{LoadResult, read_file};

/// Loader for animation clip sets from RON files.
///
/// The file maps set names to clip maps:
///
/// ```ron
/// {
///     "hero": {
///         "attack_down": (texture: "hero", frames: 8, frame_time: 0.05, looping: false),
///     },
/// }
/// ```
///
/// Omitted clip fields take their defaults.
pub struct ClipLoader;

impl ClipLoader {
    /// Load a clip library from a RON file, exactly as written.
    pub fn load(path: &Path) -> LoadResult<ClipLibrary> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ClipLibrary> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse clip RON: {}", e))
    }

    /// Load a RON file and overlay it on the built-in library.
    ///
    /// Clips named in the file replace built-in clips of the same set and
    /// name; everything else stays built-in.
    pub fn load_over_builtin(path: &Path) -> LoadResult<ClipLibrary> {
        let mut library = ClipLibrary::builtin();
        library.merge(Self::load(path)?);
        Ok(library)
    }
}
