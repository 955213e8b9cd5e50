//! Hitboxes and the per-step pairwise overlap pass.
//!
//! Overlap state is remembered per hitbox between passes so reactions fire
//! on edges: once when a pair starts touching, once when it separates.
mod error;
mod hitbox;
mod resolver;

pub use error::ReactionError;
pub use hitbox::{Contact, Hitbox, Reaction, ReactionSlot};
pub use resolver::{CollisionContext, CollisionResolver, ResolutionReport};
