//! Data-driven content for the skirmish simulation.
//!
//! This crate reads the files a host ships next to its binary:
//! - Game configuration (TOML, every field optional)
//! - Animation clip sets (RON, overlaid on the built-in sheet layout)
//!
//! Content is consumed when a scene is built and never changes during play.
//! All loaders use skirmish-core types directly with serde for RON/TOML
//! deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ClipLoader, ConfigLoader, Content, ContentFactory};
