//! The player character.
//!
//! [`HeroController`] owns health, per-actor input edges and the
//! [`HeroFsm`]; [`Locomotion`] turns the controller's intent into motion.
mod controller;
mod fsm;
mod locomotion;

pub use controller::{HeroController, MovementIntent};
pub use fsm::{HeroFsm, HeroState, HeroStateKind};
pub use locomotion::Locomotion;
