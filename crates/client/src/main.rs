//! Skirmish headless host binary.
//!
//! Runs one scripted session and logs its outcome.
//!
//! # Examples
//!
//! ```bash
//! SKIRMISH_SECONDS=30 RUST_LOG=skirmish_core=debug cargo run -p skirmish-client
//! ```

use anyhow::Result;
use skirmish_client::{HeadlessConfig, Session};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = HeadlessConfig::from_env();
    tracing::info!(content_dir = %config.content_dir.display(), "starting skirmish");

    let mut session = Session::new(config)?;
    let summary = session.run();

    tracing::info!(
        frames = summary.frames,
        steps = summary.steps,
        elapsed = summary.elapsed,
        score = summary.score,
        kills = summary.kills,
        waves = summary.waves,
        hits_taken = summary.hits_taken,
        hero_health = summary.hero_health,
        hero_alive = summary.hero_alive,
        "session finished"
    );
    Ok(())
}
