//! Collaborators outside the simulation.
//!
//! Asset lookup, audio, drawing and spawning are reached through narrow
//! traits so the core runs headless and under test. [`WorldBounds`] and
//! [`SimRng`] are plain values owned by the scene.
mod assets;
mod audio;
mod bounds;
mod render;
mod rng;
mod spawn;

pub use assets::{AssetOracle, AssetTable, NoAssets, SoundHandle, TextureHandle};
pub use audio::{AudioLog, AudioSink, SilentAudio};
pub use bounds::WorldBounds;
pub use render::{DrawList, FrameRect, RenderSurface, SpriteDraw};
pub use rng::{SimRng, compute_seed};
pub use spawn::{SpawnQueue, SpawnSink};
