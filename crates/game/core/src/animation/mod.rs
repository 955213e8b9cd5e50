//! Sprite-sheet animation.
//!
//! [`ClipLibrary`] holds static clip descriptions; each entity gets its own
//! [`Animator`] with independent playback state.
mod animator;
mod clip;
mod facing;
mod library;

pub use animator::Animator;
pub use clip::{Clip, ClipSpec};
pub use facing::Facing;
pub use library::{ClipLibrary, ClipSet, sets};
