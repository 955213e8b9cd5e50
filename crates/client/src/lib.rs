//! Headless host for the skirmish simulation.
//!
//! Assembles content, a scene and a scripted input source, then drives the
//! scene with a fixed host frame time. Nothing is drawn to a window: the
//! host renders into a draw list so the full frame path still runs.
pub mod config;
pub mod script;
pub mod session;

pub use config::HeadlessConfig;
pub use script::InputScript;
pub use session::{Session, SessionSummary};
