//! Symbolic asset lookup.
//!
//! The core never loads files. It asks for textures and sounds by name and
//! skips the visual or audio cue when the host has nothing registered.

use std::collections::BTreeMap;

/// Opaque texture reference issued by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextureHandle(pub u32);

/// Opaque sound reference issued by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SoundHandle(pub u32);

/// Asset lookup by symbolic name.
pub trait AssetOracle {
    fn texture(&self, name: &str) -> Option<TextureHandle>;
    fn sound(&self, name: &str) -> Option<SoundHandle>;
}

/// Oracle with no assets at all; every cue is skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoAssets;

impl AssetOracle for NoAssets {
    fn texture(&self, _name: &str) -> Option<TextureHandle> {
        None
    }

    fn sound(&self, _name: &str) -> Option<SoundHandle> {
        None
    }
}

/// Name-to-handle table filled by the host after it loads its files.
#[derive(Clone, Debug, Default)]
pub struct AssetTable {
    textures: BTreeMap<String, TextureHandle>,
    sounds: BTreeMap<String, SoundHandle>,
}

impl AssetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a texture and returns its handle; re-registering a name keeps the first handle.
    pub fn register_texture(&mut self, name: impl Into<String>) -> TextureHandle {
        let next = TextureHandle(self.textures.len() as u32);
        *self.textures.entry(name.into()).or_insert(next)
    }

    pub fn register_sound(&mut self, name: impl Into<String>) -> SoundHandle {
        let next = SoundHandle(self.sounds.len() as u32);
        *self.sounds.entry(name.into()).or_insert(next)
    }
}

impl AssetOracle for AssetTable {
    fn texture(&self, name: &str) -> Option<TextureHandle> {
        self.textures.get(name).copied()
    }

    fn sound(&self, name: &str) -> Option<SoundHandle> {
        self.sounds.get(name).copied()
    }
}
